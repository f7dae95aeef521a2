//! The code model of one parsed document.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::code::{CodeElement, Construct, Procedure, Sentence};
use super::ids::{ConstructId, ProcedureId, SentenceId};
use super::phrase::Phrase;
use super::symbols::{References, Symbols};
use crate::base::ModelId;

/// Everything the parser knows about one document.
///
/// Built once per parse through [`ModelBuilder`](super::ModelBuilder) and
/// then treated as immutable: an edit produces a new model with a new
/// [`ModelId`]. The only in-place mutation is
/// [`apply_rename`](crate::ide::apply_rename), which also renews the id.
#[derive(Debug)]
pub struct CodeModel {
    pub(crate) id: ModelId,
    pub(crate) path: Option<Arc<str>>,
    pub(crate) symbols: Symbols,
    pub(crate) constructs: Vec<Construct>,
    pub(crate) sentences: Vec<Sentence>,
    pub(crate) references: References,
    /// Procedure → (owning construct, index in its code list).
    pub(crate) procedures: FxHashMap<ProcedureId, (ConstructId, usize)>,
}

impl CodeModel {
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Path of the source file, when known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    /// All constructs, in source order.
    pub fn constructs(&self) -> &[Construct] {
        &self.constructs
    }

    pub fn construct(&self, id: ConstructId) -> Option<&Construct> {
        self.constructs.get(id.index())
    }

    /// Follow a phrase's back-reference.
    pub fn sentence(&self, id: SentenceId) -> Option<&Sentence> {
        self.sentences.get(id.index())
    }

    pub fn procedure(&self, id: ProcedureId) -> Option<&Procedure> {
        let &(construct, index) = self.procedures.get(&id)?;
        match self.construct(construct)?.code.get(index)? {
            CodeElement::Procedure(procedure) => Some(procedure),
            _ => None,
        }
    }

    /// The construct that declares a procedure.
    pub fn procedure_owner(&self, id: ProcedureId) -> Option<ConstructId> {
        self.procedures.get(&id).map(|&(construct, _)| construct)
    }

    /// Check whether the model has no constructs at all.
    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    /// Every top-level phrase sequence, in source order: each construct's
    /// header followed by its code elements.
    pub fn phrase_blocks(&self) -> Vec<&[Phrase]> {
        let mut blocks = Vec::new();
        for construct in &self.constructs {
            blocks.push(construct.header.as_slice());
            for element in &construct.code {
                match element {
                    CodeElement::Field(field) => blocks.push(field.phrases.as_slice()),
                    CodeElement::Procedure(procedure) => {
                        blocks.push(procedure.header.as_slice());
                        blocks.push(procedure.body.as_slice());
                    }
                    CodeElement::Statement(phrase) => blocks.push(std::slice::from_ref(phrase)),
                }
            }
        }
        blocks
    }

    /// Mutable counterpart of [`phrase_blocks`](Self::phrase_blocks).
    ///
    /// Visits every block even after `f` returns true; the result is whether
    /// any call did.
    pub(crate) fn for_each_block_mut(&mut self, mut f: impl FnMut(&mut [Phrase]) -> bool) -> bool {
        let mut any = false;
        for construct in &mut self.constructs {
            any |= f(&mut construct.header);
            for element in &mut construct.code {
                match element {
                    CodeElement::Field(field) => any |= f(&mut field.phrases),
                    CodeElement::Procedure(procedure) => {
                        any |= f(&mut procedure.header);
                        any |= f(&mut procedure.body);
                    }
                    CodeElement::Statement(phrase) => any |= f(std::slice::from_mut(phrase)),
                }
            }
        }
        any
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut Symbols {
        &mut self.symbols
    }

    pub(crate) fn renew_id(&mut self) {
        self.id = ModelId::fresh();
    }
}
