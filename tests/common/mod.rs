//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use produire::base::{CodePosition, CodeRange};
use produire::model::{
    CodeModel, ComplementDef, Construct, ConstructKind, ModelBuilder, Overload, Phrase,
    Procedure, PropertyDef, TypeDef, TypeId, TypeKind, VariableDef, VariableId, VariableScope,
    VerbDef, VerbId, Visibility,
};
use produire::phonetic::{KanaPhonetics, ReadingTable, RomanizationStyle};

/// Dictionary used by every test.
pub static PHONETICS: Lazy<KanaPhonetics> = Lazy::new(|| {
    KanaPhonetics::new(
        ReadingTable::from_entries([
            ("速度", "そくど"),
            ("位置", "いち"),
            ("表示する", "ひょうじする"),
            ("足す", "たす"),
            ("数値", "すうち"),
            ("画面", "がめん"),
        ]),
        RomanizationStyle::Hepburn,
    )
});

pub fn span(start: (u32, u32), end: (u32, u32)) -> CodeRange {
    CodeRange::new(CodePosition::new(start.0, start.1), CodePosition::new(end.0, end.1))
}

/// A short program.
///
/// ```text
/// 1: はじめの手順
/// 2:   数とは、1
/// 3:   数を表示する
/// 4:   別の数を表示する
/// 5:   数に2を足す
/// 6:   「完了」を表示する
/// 7: 終わり
/// ```
///
/// `数` on lines 2, 3 and 5 is one local variable; the `数` on line 4 is
/// another variable with the same name.
pub struct Program {
    pub model: CodeModel,
    pub count: VariableId,
    pub shadow: VariableId,
    pub show: VerbId,
    pub add: VerbId,
}

pub fn program() -> Program {
    let mut builder = ModelBuilder::new().with_path("/work/main.rdr");
    let global = builder.add_construct(Construct::new(
        "グローバル",
        ConstructKind::Global,
        span((1, 1), (7, 3)),
    ));
    let main = builder.reserve_procedure();
    let count = builder.add_variable(
        VariableDef::new("数", VariableScope::Local(main))
            .with_declaration(CodeRange::on_line(2, 3, 3)),
    );
    let shadow = builder.add_variable(VariableDef::new("数", VariableScope::Local(main)));
    let show = builder.add_verb(VerbDef::new("表示する"));
    let add = builder.add_verb(VerbDef::new("足す"));
    builder.add_overload(show, Overload::new(vec![ComplementDef::actual(["を"])]));
    builder.add_overload(
        add,
        Overload::new(vec![ComplementDef::actual(["に"]), ComplementDef::actual(["を"])]),
    );
    builder.reference_verb(show);
    builder.reference_verb(add);

    let body = vec![
        Phrase::container(
            CodeRange::on_line(2, 3, 7),
            vec![
                Phrase::variable(CodeRange::on_line(2, 3, 3), "数", Some(count)),
                Phrase::other(CodeRange::on_line(2, 4, 7), "とは、1"),
            ],
        ),
        Phrase::container(
            CodeRange::on_line(3, 3, 8),
            vec![
                Phrase::variable(CodeRange::on_line(3, 3, 3), "数", Some(count)),
                Phrase::other(CodeRange::on_line(3, 4, 4), "を"),
                Phrase::verb(CodeRange::on_line(3, 5, 8), "表示する", Some(show)),
            ],
        ),
        Phrase::container(
            CodeRange::on_line(4, 3, 10),
            vec![
                Phrase::other(CodeRange::on_line(4, 3, 4), "別の"),
                Phrase::variable(CodeRange::on_line(4, 5, 5), "数", Some(shadow)),
                Phrase::other(CodeRange::on_line(4, 6, 6), "を"),
                Phrase::verb(CodeRange::on_line(4, 7, 10), "表示する", Some(show)),
            ],
        ),
        Phrase::container(
            CodeRange::on_line(5, 3, 9),
            vec![
                Phrase::variable(CodeRange::on_line(5, 3, 3), "数", Some(count)),
                Phrase::other(CodeRange::on_line(5, 4, 7), "に2を"),
                Phrase::verb(CodeRange::on_line(5, 8, 9), "足す", Some(add)),
            ],
        ),
        Phrase::container(
            CodeRange::on_line(6, 3, 11),
            vec![
                Phrase::other(CodeRange::on_line(6, 3, 6), "「完了」"),
                Phrase::other(CodeRange::on_line(6, 7, 7), "を"),
                Phrase::verb(CodeRange::on_line(6, 8, 11), "表示する", Some(show)),
            ],
        ),
    ];
    builder
        .add_procedure_as(
            main,
            global,
            Procedure::new("はじめ", span((1, 1), (7, 3))).fixed().with_body(body),
        )
        .unwrap();

    Program {
        model: builder.finish().unwrap(),
        count,
        shadow,
        show,
        add,
    }
}

/// A model whose references reach a small standard library.
pub struct Library {
    pub model: CodeModel,
    pub screen: TypeId,
    pub color: TypeId,
}

pub fn library() -> Library {
    let mut builder = ModelBuilder::new();

    let screen = builder.add_type(TypeDef::new("画面", TypeKind::Global));
    builder.add_property(screen, PropertyDef::new("速度").with_description("移動の速さ"));
    builder.add_property(screen, PropertyDef::new("内部状態").with_visibility(Visibility::HIDDEN));
    let color = builder.add_type(TypeDef::new("色", TypeKind::Enumeration));
    let number = builder.add_type(TypeDef::new("数値", TypeKind::Class));
    let secret = builder
        .add_type(TypeDef::new("秘密", TypeKind::Class).with_visibility(Visibility::HIDDEN));
    let pending = builder.add_type(TypeDef::new("未完", TypeKind::Class).incomplete());
    let ns = builder.add_namespace("標準", vec![screen, color, number, secret, pending]);
    builder.reference_namespace(ns);

    let show = builder.add_verb(VerbDef::new("表示する").with_description("値を表示する"));
    builder.add_overload(show, Overload::new(vec![ComplementDef::actual(["を"])]));
    builder.reference_verb(show);

    Library {
        model: builder.finish().unwrap(),
        screen,
        color,
    }
}
