//! A small program shared by the request helper tests.
//!
//! ```text
//! 1: 点とは
//! 2:   数値の位置
//! 3:   表示する手順
//! 4:     位置を表示する
//! 5:   終わり
//! 6: 終わり
//! 7: 点を表示する
//! 8: 位置を、表示する
//! ```

use crate::base::{CodePosition, CodeRange};
use crate::model::{
    CodeModel, ComplementDef, Construct, ConstructId, ConstructKind, FieldDeclaration,
    ModelBuilder, Overload, Phrase, Procedure, ProcedureId, TypeDef, TypeId, TypeKind,
    VariableDef, VariableId, VariableScope, VerbDef, VerbId,
};

pub(crate) struct Program {
    pub model: CodeModel,
    pub point_ty: TypeId,
    pub point: ConstructId,
    pub global: ConstructId,
    pub position: VariableId,
    pub show: VerbId,
    pub show_proc: ProcedureId,
}

fn span(start: (u32, u32), end: (u32, u32)) -> CodeRange {
    CodeRange::new(CodePosition::new(start.0, start.1), CodePosition::new(end.0, end.1))
}

pub(crate) fn program() -> Program {
    let mut builder = ModelBuilder::new().with_path("/work/点.rdr");

    let point_ty =
        builder.add_type(TypeDef::new("点", TypeKind::Class).with_description("平面上の点"));
    let number_ty = builder.add_type(TypeDef::new("数値", TypeKind::Class));
    let show = builder.add_verb(
        VerbDef::new("表示する")
            .with_reading("ひょうじする")
            .with_description("値を表示します"),
    );
    let show_proc = builder.reserve_procedure();
    let main = builder.reserve_procedure();
    builder.add_overload(
        show,
        Overload::new(vec![ComplementDef::actual(["を"])]).with_procedure(show_proc),
    );
    builder.reference_verb(show);

    let point = builder.add_construct(
        Construct::new("点", ConstructKind::Class, span((1, 1), (6, 3)))
            .with_type(point_ty)
            .with_header(vec![
                Phrase::ty(CodeRange::on_line(1, 1, 1), "点", Some(point_ty)),
                Phrase::other(CodeRange::on_line(1, 2, 3), "とは"),
            ]),
    );
    let position = builder.add_variable(
        VariableDef::new("位置", VariableScope::Field(point))
            .with_declaration(CodeRange::on_line(2, 6, 7)),
    );
    builder
        .add_field(
            point,
            FieldDeclaration::new(
                position,
                CodeRange::on_line(2, 3, 7),
                vec![
                    Phrase::ty(CodeRange::on_line(2, 3, 4), "数値", Some(number_ty)),
                    Phrase::other(CodeRange::on_line(2, 5, 5), "の"),
                    Phrase::variable(CodeRange::on_line(2, 6, 7), "位置", Some(position)),
                ],
            ),
        )
        .unwrap();

    let inner = builder.add_sentence(CodeRange::on_line(4, 5, 11));
    builder.set_callee(inner, show_proc).unwrap();
    builder
        .add_procedure_as(
            show_proc,
            point,
            Procedure::new("表示する", span((3, 3), (5, 5)))
                .with_verb(show)
                .with_header(vec![Phrase::verb(
                    CodeRange::on_line(3, 3, 6),
                    "表示する",
                    Some(show),
                )])
                .with_body(vec![
                    Phrase::container(
                        CodeRange::on_line(4, 5, 11),
                        vec![
                            Phrase::variable(CodeRange::on_line(4, 5, 6), "位置", Some(position)),
                            Phrase::complement(CodeRange::on_line(4, 7, 7), "を"),
                            Phrase::verb(CodeRange::on_line(4, 8, 11), "表示する", Some(show)),
                        ],
                    )
                    .in_sentence(inner),
                ]),
        )
        .unwrap();

    let global = builder.add_construct(Construct::new(
        "グローバル",
        ConstructKind::Global,
        span((7, 1), (8, 9)),
    ));
    let call = builder.add_sentence(CodeRange::on_line(7, 1, 6));
    builder.set_callee(call, show_proc).unwrap();
    let unresolved = builder.add_sentence(CodeRange::on_line(8, 1, 8));
    builder
        .add_procedure_as(
            main,
            global,
            Procedure::new("はじめ", span((7, 1), (8, 8)))
                .fixed()
                .with_body(vec![
                    Phrase::container(
                        CodeRange::on_line(7, 1, 6),
                        vec![
                            Phrase::ty(CodeRange::on_line(7, 1, 1), "点", Some(point_ty)),
                            Phrase::complement(CodeRange::on_line(7, 2, 2), "を"),
                            Phrase::verb(CodeRange::on_line(7, 3, 6), "表示する", Some(show)),
                        ],
                    )
                    .in_sentence(call),
                    Phrase::container(
                        CodeRange::on_line(8, 1, 8),
                        vec![
                            Phrase::variable(CodeRange::on_line(8, 1, 2), "位置", None),
                            Phrase::other(CodeRange::on_line(8, 3, 4), "を、"),
                            Phrase::verb(CodeRange::on_line(8, 5, 8), "表示する", Some(show)),
                        ],
                    )
                    .in_sentence(unresolved),
                ]),
        )
        .unwrap();

    Program {
        model: builder.finish().unwrap(),
        point_ty,
        point,
        global,
        position,
        show,
        show_proc,
    }
}

pub(crate) fn at(line: u32, column: u32) -> CodePosition {
    CodePosition::new(line, column)
}
