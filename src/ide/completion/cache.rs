//! Per-model cache of candidate lists.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::candidates::{CandidateList, build_candidates};
use super::snippets::SnippetTable;
use crate::base::ModelId;
use crate::config::AssistConfig;
use crate::model::CodeModel;
use crate::phonetic::Phonetics;

/// Candidate lists keyed by the model they were built from.
///
/// A model is immutable once built, so a list stays valid for as long as
/// its model is current. Lists of replaced or closed models must be
/// [evicted](Self::evict).
#[derive(Debug, Default)]
pub struct AssistState {
    lists: RwLock<FxHashMap<ModelId, Arc<CandidateList>>>,
}

impl AssistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list of `model`, building it on first request.
    pub fn get_or_build(
        &self,
        model: &CodeModel,
        snippets: &SnippetTable,
        phonetics: &dyn Phonetics,
        config: &AssistConfig,
    ) -> Arc<CandidateList> {
        // Fast path: read lock
        if let Some(list) = self.lists.read().get(&model.id()) {
            return Arc::clone(list);
        }

        // Slow path: build under the write lock so concurrent first requests
        // for one model build it once.
        let mut lists = self.lists.write();
        if let Some(list) = lists.get(&model.id()) {
            return Arc::clone(list);
        }
        let list = Arc::new(build_candidates(model, snippets, phonetics, config));
        lists.insert(model.id(), Arc::clone(&list));
        list
    }

    /// Drop the list of a model. Returns whether one was cached.
    pub fn evict(&self, model: ModelId) -> bool {
        let evicted = self.lists.write().remove(&model).is_some();
        if evicted {
            debug!(?model, "evicted candidate list");
        }
        evicted
    }

    /// Drop every cached list.
    pub fn clear(&self) {
        let mut lists = self.lists.write();
        debug!(lists = lists.len(), "cleared candidate cache");
        lists.clear();
    }

    pub fn contains(&self, model: ModelId) -> bool {
        self.lists.read().contains_key(&model)
    }

    /// Number of cached lists.
    pub fn len(&self) -> usize {
        self.lists.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.read().is_empty()
    }
}
