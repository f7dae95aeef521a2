//! Rename: text edits for every reference to a symbol.
//!
//! A symbol is renamable only when the container that declares it has a
//! concrete source range. Built-in and imported symbols have none and produce
//! no edits.

use smol_str::SmolStr;
use tracing::debug;

use super::search::search;
use super::walker::walk_model_mut;
use crate::base::{CodeRange, LspRange};
use crate::model::{CodeModel, Phrase, PhraseKind, SymbolRef, VariableScope};

/// A replacement of the text at `range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: LspRange,
    pub new_text: String,
}

/// Source range of the construct or procedure that declares `target`.
///
/// `None` means the symbol was synthesized or imported, and cannot be
/// renamed in this document.
pub fn declaring_range(model: &CodeModel, target: SymbolRef) -> Option<CodeRange> {
    let symbols = model.symbols();
    match target {
        SymbolRef::Variable(id) => match symbols.variable(id)?.scope {
            VariableScope::Field(construct) => model.construct(construct).map(|c| c.range),
            VariableScope::Local(procedure) | VariableScope::Parameter(procedure) => {
                model.procedure(procedure).map(|p| p.range)
            }
            VariableScope::BuiltIn => None,
        },
        SymbolRef::Type(id) => {
            let construct = symbols.ty(id)?.construct?;
            model.construct(construct).map(|c| c.range)
        }
        SymbolRef::Verb(id) => symbols
            .verb(id)?
            .overloads
            .iter()
            .filter_map(|overload| overload.procedure)
            .find_map(|procedure| model.procedure(procedure))
            .map(|p| p.range),
        SymbolRef::Property(id) => {
            let owner = symbols.property(id)?.declaring_type?;
            let construct = symbols.ty(owner)?.construct?;
            model.construct(construct).map(|c| c.range)
        }
    }
}

/// Edits renaming every reference to `target` to `new_name`.
pub fn rename(model: &CodeModel, target: SymbolRef, new_name: &str) -> Vec<TextEdit> {
    if declaring_range(model, target).is_none() {
        debug!(model = ?model.id(), ?target, "rename target has no declaring range");
        return Vec::new();
    }

    let edits: Vec<TextEdit> = search(model, target)
        .into_iter()
        .map(|found| TextEdit {
            range: found.phrase.range.to_lsp(),
            new_text: new_name.to_string(),
        })
        .collect();
    debug!(model = ?model.id(), ?target, edits = edits.len(), "rename");
    edits
}

/// Rename `target` inside the model itself.
///
/// Rewrites the text of every matching phrase and the definition's name;
/// ranges are left untouched. When anything changed the model gets a new
/// [`ModelId`](crate::base::ModelId), so cached completion lists for the old
/// text are no longer reachable. Returns whether anything changed.
pub fn apply_rename(model: &mut CodeModel, target: SymbolRef, new_name: &str) -> bool {
    if declaring_range(model, target).is_none() {
        return false;
    }

    let name = SmolStr::new(new_name);
    let mut changed = walk_model_mut(model, &mut |phrase| {
        if target.matches(phrase) && phrase.text != name {
            phrase.text = name.clone();
            true
        } else {
            false
        }
    });
    if changed {
        model.for_each_block_mut(|block| {
            refresh_container_text(block);
            false
        });
    }
    changed |= rename_definition(model, target, &name);

    if changed {
        model.renew_id();
        debug!(model = ?model.id(), ?target, new_name, "renamed in place");
    }
    changed
}

fn rename_definition(model: &mut CodeModel, target: SymbolRef, name: &SmolStr) -> bool {
    let symbols = model.symbols_mut();
    let slot = match target {
        SymbolRef::Variable(id) => symbols.variable_mut(id).map(|def| &mut def.name),
        SymbolRef::Type(id) => symbols.ty_mut(id).map(|def| &mut def.name),
        SymbolRef::Verb(id) => symbols.verb_mut(id).map(|def| &mut def.name),
        SymbolRef::Property(id) => symbols.property_mut(id).map(|def| &mut def.name),
    };
    let Some(slot) = slot else {
        return false;
    };
    if slot == name {
        return false;
    }
    *slot = name.clone();

    // A class is named after its type.
    if let SymbolRef::Type(id) = target {
        let construct = model.symbols().ty(id).and_then(|def| def.construct);
        if let Some(construct) = construct.and_then(|c| model.constructs.get_mut(c.index())) {
            construct.name = name.clone();
        }
    }
    true
}

/// Recompute container text from children, innermost first.
fn refresh_container_text(phrases: &mut [Phrase]) {
    for phrase in phrases {
        if let PhraseKind::Container(children) = &mut phrase.kind {
            refresh_container_text(children);
            let text: String = children.iter().map(|c| c.text.as_str()).collect();
            phrase.text = text.into();
        }
    }
}
