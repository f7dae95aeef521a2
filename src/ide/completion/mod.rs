//! Completion candidates.
//!
//! A candidate list is built once per [`CodeModel`](crate::model::CodeModel)
//! and cached by its [`ModelId`](crate::base::ModelId). Every entry is
//! expanded into up to three rows, one per search key (name, kana reading,
//! romanized reading), so the client can filter on whatever the user typed.

mod cache;
mod candidates;
mod snippets;

use smol_str::SmolStr;

pub use cache::AssistState;
pub use candidates::{CandidateList, build_candidates};
pub use snippets::SnippetTable;

/// What a candidate inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// A control-flow or declaration template.
    Snippet,
    Verb,
    /// A grammatical particle taken by a verb.
    Particle,
    Property,
    Type,
}

impl CandidateKind {
    /// Convert to the LSP `CompletionItemKind` number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CandidateKind::Snippet => 15,
            CandidateKind::Verb => 2,
            CandidateKind::Particle => 24,
            CandidateKind::Property => 10,
            CandidateKind::Type => 7,
        }
    }
}

/// One indexed row of a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// Name shown in the list.
    pub label: SmolStr,
    /// Key the client filters on: the name, its reading, or its romanization.
    pub filter_key: SmolStr,
    pub documentation: Option<SmolStr>,
    /// Text inserted on accept. Identical for all rows of one entry.
    pub insertion_text: SmolStr,
    pub kind: CandidateKind,
    pub is_snippet: bool,
}
