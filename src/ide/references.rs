//! Find references and document highlights.

use super::search::{Found, ReferenceSearcher, VariableSearcher};
use crate::base::LspRange;
use crate::model::{CodeModel, Phrase, PhraseKind};

/// Every phrase referring to the same symbol as `anchor`, in source order.
///
/// Variables go through the variable searcher; any other phrase kind through
/// the general one. An unresolved anchor finds nothing.
pub fn find_references<'m>(model: &'m CodeModel, anchor: &Phrase) -> Vec<Found<'m>> {
    match anchor.kind {
        PhraseKind::Variable(Some(variable)) => {
            let mut searcher = VariableSearcher::new();
            searcher.search(model, variable);
            searcher.founds
        }
        _ => {
            let mut searcher = ReferenceSearcher::new();
            searcher.search(model, anchor);
            searcher.founds
        }
    }
}

/// Kind of a document highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Text,
    Read,
    Write,
}

impl HighlightKind {
    /// Convert to the LSP `DocumentHighlightKind` number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            HighlightKind::Text => 1,
            HighlightKind::Read => 2,
            HighlightKind::Write => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub range: LspRange,
    pub kind: HighlightKind,
}

/// Occurrences of the symbol under the cursor. Every occurrence is reported
/// as a read.
pub fn document_highlights(model: &CodeModel, anchor: &Phrase) -> Vec<Highlight> {
    let mut searcher = ReferenceSearcher::new();
    searcher.search(model, anchor);
    searcher
        .founds
        .iter()
        .map(|found| Highlight {
            range: found.phrase.range.to_lsp(),
            kind: HighlightKind::Read,
        })
        .collect()
}
