//! The document registry request handlers talk to.
//!
//! `AnalysisHost` maps document URIs to their current [`CodeModel`] and owns
//! everything shared across requests: the configuration, the phonetics, the
//! snippet table and the candidate cache. Positions come in as protocol
//! [`LineCol`]s and results go out as protocol ranges.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::completion::{AssistState, CandidateList, SnippetTable};
use super::goto::goto_definition;
use super::hover::{HoverResult, hover};
use super::position::element_at;
use super::references::{Highlight, document_highlights, find_references};
use super::rename::{TextEdit, rename};
use super::symbols::{SymbolInfo, document_symbols};
use crate::base::{CodePosition, LineCol, LspRange};
use crate::config::AssistConfig;
use crate::error::{AssistError, Result};
use crate::model::{CodeModel, Phrase};
use crate::phonetic::{KanaPhonetics, Phonetics, ReadingTable};

/// A range in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub uri: Arc<str>,
    pub range: LspRange,
}

/// Edits of a rename, all in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameResult {
    pub uri: Arc<str>,
    pub edits: Vec<TextEdit>,
}

enum PhoneticSource {
    /// The bundled dictionary and romanizer; follows the configured style.
    Kana(KanaPhonetics),
    /// Supplied by the embedder.
    Custom(Arc<dyn Phonetics + Send + Sync>),
}

impl PhoneticSource {
    fn get(&self) -> &dyn Phonetics {
        match self {
            PhoneticSource::Kana(kana) => kana as &dyn Phonetics,
            PhoneticSource::Custom(custom) => custom.as_ref(),
        }
    }
}

/// Open documents and the state shared by requests on them.
pub struct AnalysisHost {
    config: AssistConfig,
    phonetics: PhoneticSource,
    snippets: SnippetTable,
    assist: AssistState,
    documents: IndexMap<Arc<str>, Arc<CodeModel>>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new(AssistConfig::default())
    }
}

impl AnalysisHost {
    /// A host without a reading dictionary: only kana names get phonetic keys.
    pub fn new(config: AssistConfig) -> Self {
        Self::with_reading_table(config, ReadingTable::new())
    }

    pub fn with_reading_table(config: AssistConfig, table: ReadingTable) -> Self {
        let kana = KanaPhonetics::new(table, config.romanization);
        Self::from_source(config, PhoneticSource::Kana(kana))
    }

    /// A host using custom phonetics. The configured romanization style does
    /// not apply to them.
    pub fn with_phonetics(
        config: AssistConfig,
        phonetics: Arc<dyn Phonetics + Send + Sync>,
    ) -> Self {
        Self::from_source(config, PhoneticSource::Custom(phonetics))
    }

    fn from_source(config: AssistConfig, phonetics: PhoneticSource) -> Self {
        let snippets = SnippetTable::standard(phonetics.get());
        Self {
            config,
            phonetics,
            snippets,
            assist: AssistState::new(),
            documents: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// Replace the configuration. Every cached candidate list is dropped.
    pub fn set_config(&mut self, config: AssistConfig) {
        if let PhoneticSource::Kana(kana) = &mut self.phonetics {
            if kana.style() != config.romanization {
                *kana = std::mem::take(kana).with_style(config.romanization);
            }
        }
        self.config = config;
        self.snippets = SnippetTable::standard(self.phonetics.get());
        self.assist.clear();
        debug!(?config, "configuration changed");
    }

    // ------------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------------

    /// Register the model of a freshly parsed document, replacing the
    /// previous one. The candidate list of the replaced model is evicted.
    pub fn set_model(&mut self, uri: impl Into<Arc<str>>, model: CodeModel) {
        let uri = uri.into();
        let id = model.id();
        match self.documents.insert(Arc::clone(&uri), Arc::new(model)) {
            Some(previous) => {
                self.assist.evict(previous.id());
                debug!(%uri, old = ?previous.id(), new = ?id, "model replaced");
            }
            None => debug!(%uri, model = ?id, "model registered"),
        }
    }

    /// Forget a closed document. Returns whether it was open.
    pub fn close(&mut self, uri: &str) -> bool {
        match self.documents.shift_remove(uri) {
            Some(model) => {
                self.assist.evict(model.id());
                debug!(%uri, model = ?model.id(), "document closed");
                true
            }
            None => false,
        }
    }

    /// The current model of a document.
    pub fn model(&self, uri: &str) -> Result<&Arc<CodeModel>> {
        self.documents
            .get(uri)
            .ok_or_else(|| AssistError::NotLoaded { uri: uri.into() })
    }

    /// URIs of the open documents, in the order they were opened.
    pub fn documents(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.keys().map(|uri| uri.as_ref())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    /// Completion candidates of a document, built on first request.
    pub fn completions(&self, uri: &str) -> Result<Arc<CandidateList>> {
        let model = self.model(uri)?;
        Ok(self
            .assist
            .get_or_build(model, &self.snippets, self.phonetics.get(), &self.config))
    }

    pub fn references(&self, uri: &str, pos: LineCol) -> Result<Vec<Location>> {
        let (uri, model, element) = self.element(uri, pos)?;
        let Some(anchor) = element else {
            return Ok(Vec::new());
        };
        Ok(find_references(model, anchor)
            .into_iter()
            .map(|found| Location {
                uri: Arc::clone(uri),
                range: found.phrase.range.to_lsp(),
            })
            .collect())
    }

    pub fn highlights(&self, uri: &str, pos: LineCol) -> Result<Vec<Highlight>> {
        let (_, model, element) = self.element(uri, pos)?;
        Ok(element
            .map(|anchor| document_highlights(model, anchor))
            .unwrap_or_default())
    }

    pub fn hover(&self, uri: &str, pos: LineCol) -> Result<Option<HoverResult>> {
        let (_, model, element) = self.element(uri, pos)?;
        Ok(element.and_then(|phrase| hover(model, phrase)))
    }

    pub fn goto_definition(&self, uri: &str, pos: LineCol) -> Result<Option<Location>> {
        let (uri, model, element) = self.element(uri, pos)?;
        Ok(element
            .and_then(|phrase| goto_definition(model, phrase))
            .map(|range| Location {
                uri: Arc::clone(uri),
                range: range.to_lsp(),
            }))
    }

    /// Edits renaming the symbol at `pos` to `new_name`.
    ///
    /// A position without a renamable symbol yields no edits; an invalid
    /// name is an error.
    pub fn rename(&self, uri: &str, pos: LineCol, new_name: &str) -> Result<RenameResult> {
        if !is_valid_name(new_name) {
            return Err(AssistError::InvalidName {
                name: new_name.to_string(),
            });
        }
        let (uri, model, element) = self.element(uri, pos)?;
        let edits = element
            .and_then(Phrase::symbol)
            .map(|symbol| rename(model, symbol, new_name))
            .unwrap_or_default();
        Ok(RenameResult {
            uri: Arc::clone(uri),
            edits,
        })
    }

    pub fn document_symbols(&self, uri: &str) -> Result<Vec<SymbolInfo>> {
        Ok(document_symbols(self.model(uri)?))
    }

    fn element(&self, uri: &str, pos: LineCol) -> Result<(&Arc<str>, &CodeModel, Option<&Phrase>)> {
        let (uri, model) = self
            .documents
            .get_key_value(uri)
            .ok_or_else(|| AssistError::NotLoaded { uri: uri.into() })?;
        let element = element_at(model, CodePosition::from(pos));
        trace!(%uri, ?pos, found = element.is_some(), "resolved request position");
        Ok((uri, model.as_ref(), element))
    }
}

/// An identifier: a start character followed by continue characters.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
