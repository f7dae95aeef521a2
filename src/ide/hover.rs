//! Hover information.

use crate::base::LspRange;
use crate::model::{CodeModel, Phrase, SymbolRef, VariableScope};

/// Result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverResult {
    /// Markdown content.
    pub contents: String,
    /// Range of the hovered phrase.
    pub range: LspRange,
}

/// Hover text for `phrase`: its text as written, followed by what it
/// resolved to.
pub fn hover(model: &CodeModel, phrase: &Phrase) -> Option<HoverResult> {
    let text = phrase.display_text();
    if text.is_empty() {
        return None;
    }

    let mut contents = text.to_string();
    if let Some((label, name, description)) = phrase.symbol().and_then(|s| describe(model, s)) {
        contents.push_str(&format!("\n\n{label}「{name}」"));
        if let Some(description) = description {
            contents.push_str("\n\n");
            contents.push_str(description);
        }
    }

    Some(HoverResult {
        contents,
        range: phrase.range.to_lsp(),
    })
}

fn describe(model: &CodeModel, symbol: SymbolRef) -> Option<(&'static str, &str, Option<&str>)> {
    let symbols = model.symbols();
    Some(match symbol {
        SymbolRef::Variable(id) => {
            let def = symbols.variable(id)?;
            let label = match def.scope {
                VariableScope::Field(_) => "フィールド",
                VariableScope::Local(_) => "変数",
                VariableScope::Parameter(_) => "引数",
                VariableScope::BuiltIn => "組み込み変数",
            };
            (label, def.name.as_str(), None)
        }
        SymbolRef::Type(id) => {
            let def = symbols.ty(id)?;
            ("種類", def.name.as_str(), def.description.as_deref())
        }
        SymbolRef::Verb(id) => {
            let def = symbols.verb(id)?;
            ("手順", def.name.as_str(), def.description.as_deref())
        }
        SymbolRef::Property(id) => {
            let def = symbols.property(id)?;
            ("設定項目", def.name.as_str(), def.description.as_deref())
        }
    })
}
