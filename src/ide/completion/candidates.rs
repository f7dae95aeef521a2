//! Building the candidate list of one model.

use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use super::snippets::SnippetTable;
use super::{CandidateKind, CompletionCandidate};
use crate::base::ModelId;
use crate::config::AssistConfig;
use crate::model::{CodeModel, ComplementKind, TypeKind, VisibilityTarget};
use crate::phonetic::{KeyCache, Phonetics};

/// The completion rows of one model: the shared snippet rows followed by
/// the rows built from the model's reachable symbols.
#[derive(Debug, Clone)]
pub struct CandidateList {
    model: ModelId,
    snippets: Arc<[CompletionCandidate]>,
    rows: Vec<CompletionCandidate>,
}

impl CandidateList {
    /// The model this list was built for.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// All rows, snippets first.
    pub fn iter(&self) -> impl Iterator<Item = &CompletionCandidate> + '_ {
        self.snippets.iter().chain(self.rows.iter())
    }

    /// Rows built from the model, without snippets.
    pub fn model_rows(&self) -> &[CompletionCandidate] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.snippets.len() + self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows whose filter key starts with `query`, at most one per label.
    ///
    /// ASCII letters compare case-insensitively so that `Soku` finds the
    /// romanized key `sokudo`. An empty query matches every label once.
    pub fn matching(&self, query: &str) -> Vec<&CompletionCandidate> {
        let mut labels = FxHashSet::default();
        self.iter()
            .filter(|row| starts_with_ignore_ascii_case(&row.filter_key, query))
            .filter(|row| labels.insert(row.label.clone()))
            .collect()
    }
}

fn starts_with_ignore_ascii_case(key: &str, query: &str) -> bool {
    key.len() >= query.len()
        && key.is_char_boundary(query.len())
        && key[..query.len()].eq_ignore_ascii_case(query)
}

/// Build the candidate list of `model`.
///
/// An empty or unresolved model yields the snippet rows only.
pub fn build_candidates(
    model: &CodeModel,
    snippets: &SnippetTable,
    phonetics: &dyn Phonetics,
    config: &AssistConfig,
) -> CandidateList {
    let snippets = if config.include_snippets {
        snippets.shared()
    } else {
        SnippetTable::empty().shared()
    };
    let mut builder = RowBuilder {
        keys: KeyCache::new(phonetics),
        seen: snippets.iter().map(|row| row.label.clone()).collect(),
        rows: Vec::new(),
    };

    let symbols = model.symbols();
    let references = model.references();

    let mut particles: IndexSet<SmolStr> = IndexSet::new();
    for verb in references.verbs.iter().filter_map(|&id| symbols.verb(id)) {
        if !verb.is_visible(VisibilityTarget::CodeAssist) {
            continue;
        }
        builder.add(
            &verb.name,
            CandidateKind::Verb,
            verb.description.clone(),
            verb.reading.as_deref(),
        );
        for overload in &verb.overloads {
            let complements = overload.complements.iter().flatten();
            for complement in complements.filter(|c| c.kind == ComplementKind::Actual) {
                particles.extend(complement.particles.iter().cloned());
            }
        }
    }

    if config.include_particles {
        for particle in &particles {
            builder.add(particle, CandidateKind::Particle, None, None);
        }
    }

    for namespace in references.namespaces.iter().filter_map(|&id| symbols.namespace(id)) {
        for ty in namespace.types.iter().filter_map(|&id| symbols.ty(id)) {
            if !ty.is_visible(VisibilityTarget::CodeAssist)
                || !ty.complete
                || ty.kind == TypeKind::Enumeration
            {
                continue;
            }
            if ty.kind == TypeKind::Global {
                let properties = ty.properties.iter().flatten();
                for property in properties.filter_map(|&id| symbols.property(id)) {
                    if property.is_visible(VisibilityTarget::CodeAssist) {
                        builder.add(
                            &property.name,
                            CandidateKind::Property,
                            property.description.clone(),
                            None,
                        );
                    }
                }
            } else {
                builder.add(&ty.name, CandidateKind::Type, ty.description.clone(), None);
            }
        }
    }

    debug!(
        model = ?model.id(),
        snippets = snippets.len(),
        rows = builder.rows.len(),
        names = builder.keys.len(),
        "built candidate list"
    );
    CandidateList {
        model: model.id(),
        snippets,
        rows: builder.rows,
    }
}

struct RowBuilder<'p> {
    keys: KeyCache<'p>,
    seen: FxHashSet<SmolStr>,
    rows: Vec<CompletionCandidate>,
}

impl RowBuilder<'_> {
    /// Emit the rows of one entry, unless its name was already emitted.
    fn add(
        &mut self,
        name: &SmolStr,
        kind: CandidateKind,
        documentation: Option<SmolStr>,
        known_reading: Option<&str>,
    ) {
        if name.is_empty() || !self.seen.insert(name.clone()) {
            return;
        }
        let keys = self.keys.keys(name, known_reading);
        for filter_key in [Some(name.clone()), keys.reading, keys.roman].into_iter().flatten() {
            self.rows.push(CompletionCandidate {
                label: name.clone(),
                filter_key,
                documentation: documentation.clone(),
                insertion_text: name.clone(),
                kind,
                is_snippet: false,
            });
        }
    }
}
