//! Document symbols (outline).

use smol_str::SmolStr;

use crate::base::CodeRange;
use crate::model::{CodeElement, CodeModel};

/// Kind of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Class,
    Field,
    Method,
}

impl SymbolKind {
    /// Convert to the LSP `SymbolKind` number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Class => 5,
            SymbolKind::Field => 8,
            SymbolKind::Method => 6,
        }
    }
}

/// One outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: SmolStr,
    pub kind: SymbolKind,
    pub range: CodeRange,
    /// Name of the enclosing construct.
    pub container_name: Option<SmolStr>,
}

/// Outline of a document, in source order.
///
/// Classes, their field declarations and procedures. The implicit global
/// construct is not listed itself, and neither are the procedures the
/// parser synthesized for it.
pub fn document_symbols(model: &CodeModel) -> Vec<SymbolInfo> {
    let symbols = model.symbols();
    let mut out = Vec::new();

    for construct in model.constructs() {
        let container_name = if construct.is_global() {
            None
        } else {
            out.push(SymbolInfo {
                name: construct.name.clone(),
                kind: SymbolKind::Class,
                range: construct.range,
                container_name: None,
            });
            Some(construct.name.clone())
        };

        for element in &construct.code {
            match element {
                CodeElement::Field(field) => {
                    let Some(variable) = symbols.variable(field.variable) else {
                        continue;
                    };
                    out.push(SymbolInfo {
                        name: variable.name.clone(),
                        kind: SymbolKind::Field,
                        range: field.range,
                        container_name: container_name.clone(),
                    });
                }
                CodeElement::Procedure(procedure) => {
                    if construct.is_global() && procedure.fixed {
                        continue;
                    }
                    out.push(SymbolInfo {
                        name: procedure.unique_name.clone(),
                        kind: SymbolKind::Method,
                        range: procedure.range,
                        container_name: container_name.clone(),
                    });
                }
                CodeElement::Statement(_) => {}
            }
        }
    }

    out
}
