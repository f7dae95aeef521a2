//! Reference search: every phrase that refers to a given symbol.
//!
//! Matching is by definition identity. Two variables that share a name are
//! different symbols; a phrase the parser could not resolve refers to
//! nothing and is never found.

use tracing::trace;

use super::walker::walk_model;
use crate::base::ModelId;
use crate::model::{CodeModel, Phrase, SymbolRef, VariableId};

/// One search hit.
#[derive(Clone, Copy, Debug)]
pub struct Found<'m> {
    pub phrase: &'m Phrase,
    /// The model the phrase belongs to.
    pub model: ModelId,
}

/// Finds phrases referring to the same symbol as a target phrase, for any
/// identity-bearing kind (variable, type, verb, property).
#[derive(Debug, Default)]
pub struct ReferenceSearcher<'m> {
    pub founds: Vec<Found<'m>>,
}

impl<'m> ReferenceSearcher<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search using the symbol `target` resolves to. A target that does not
    /// resolve finds nothing.
    pub fn search(&mut self, model: &'m CodeModel, target: &Phrase) {
        match target.symbol() {
            Some(symbol) => self.search_symbol(model, symbol),
            None => {
                self.founds.clear();
                trace!(model = ?model.id(), text = %target.text, "search target is unresolved");
            }
        }
    }

    /// Search for a known symbol.
    pub fn search_symbol(&mut self, model: &'m CodeModel, symbol: SymbolRef) {
        self.founds.clear();
        let id = model.id();
        let founds = &mut self.founds;
        walk_model(
            model,
            &mut |phrase| symbol.matches(phrase),
            &mut |phrase| founds.push(Found { phrase, model: id }),
        );
        trace!(model = ?id, ?symbol, hits = self.founds.len(), "reference search");
    }
}

/// Finds references to one variable.
#[derive(Debug, Default)]
pub struct VariableSearcher<'m> {
    pub founds: Vec<Found<'m>>,
}

impl<'m> VariableSearcher<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&mut self, model: &'m CodeModel, variable: VariableId) {
        self.founds.clear();
        let id = model.id();
        let founds = &mut self.founds;
        let target = SymbolRef::Variable(variable);
        walk_model(
            model,
            &mut |phrase| target.matches(phrase),
            &mut |phrase| founds.push(Found { phrase, model: id }),
        );
        trace!(model = ?id, ?variable, hits = self.founds.len(), "variable search");
    }
}

/// All phrases referring to `symbol`, in source order.
pub fn search(model: &CodeModel, symbol: SymbolRef) -> Vec<Found<'_>> {
    let mut searcher = ReferenceSearcher::new();
    searcher.search_symbol(model, symbol);
    searcher.founds
}
