//! # produire-base
//!
//! Core library of a language server for Produire: search, rename and
//! completion over the code model the Produire parser builds.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Search, rename, completion, request helpers
//!   ↓
//! model     → Code model: phrases, constructs, definitions
//!   ↓
//! phonetic  → Readings and romanized keys for names
//!   ↓
//! base      → Primitives (ModelId, positions and ranges)
//! ```
//!
//! Parsing is not part of this crate. The parser fills a
//! [`model::ModelBuilder`]; everything here works on the finished
//! [`model::CodeModel`].

/// Foundation types: ModelId, positions, ranges
pub mod base;

/// The code model handed over by the parser
pub mod model;

/// Readings, romanization and the phonetic key memo
pub mod phonetic;

/// IDE features: search, rename, completion, hover, goto-definition
pub mod ide;

pub mod config;
pub mod error;

// Re-export commonly needed items
pub use base::{CodePosition, CodeRange, LineCol, LspRange, ModelId};
pub use config::AssistConfig;
pub use error::{AssistError, ModelError, ReadingTableError, Result};
pub use ide::AnalysisHost;
pub use model::{CodeModel, ModelBuilder, Phrase, PhraseKind, SymbolRef};
