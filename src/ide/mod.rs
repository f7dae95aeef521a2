//! IDE features: high-level APIs for LSP handlers.
//!
//! This module sits between the code model and the LSP server. The
//! functions are protocol-neutral; request handlers convert at the
//! boundary.
//!
//! ## Layers
//!
//! 1. **Walker**: one generic traversal of the phrase graph
//! 2. **Search / rename**: the walker with identity-matching closures
//! 3. **Completion**: per-model candidate lists indexed by name, reading
//!    and romanization
//! 4. **Request helpers**: references, highlights, hover, goto, outline
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use produire::ide::AnalysisHost;
//! use produire::base::LineCol;
//!
//! let mut host = AnalysisHost::default();
//! host.set_model("file:///main.rdr", model);
//!
//! let candidates = host.completions("file:///main.rdr")?;
//! let refs = host.references("file:///main.rdr", LineCol::new(3, 4))?;
//! ```

mod analysis;
mod completion;
mod goto;
mod hover;
mod position;
mod references;
mod rename;
mod search;
mod symbols;
mod walker;

#[cfg(test)]
pub(crate) mod fixture;

pub use analysis::{AnalysisHost, Location, RenameResult};
pub use completion::{
    AssistState, CandidateKind, CandidateList, CompletionCandidate, SnippetTable,
    build_candidates,
};
pub use goto::goto_definition;
pub use hover::{HoverResult, hover};
pub use position::element_at;
pub use references::{Highlight, HighlightKind, document_highlights, find_references};
pub use rename::{TextEdit, apply_rename, declaring_range, rename};
pub use search::{Found, ReferenceSearcher, VariableSearcher, search};
pub use symbols::{SymbolInfo, SymbolKind, document_symbols};
pub use walker::{walk, walk_model, walk_model_mut, walk_mut};
