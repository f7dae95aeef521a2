//! Assembling a [`CodeModel`].
//!
//! The parser fills a [`ModelBuilder`] while it resolves a document: it
//! registers definitions first (receiving their handles), then constructs,
//! their code elements, and the sentences phrases point back to.
//! [`ModelBuilder::finish`] checks the structural invariants and stamps the
//! model with a fresh [`ModelId`].

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::code::{CodeElement, Construct, FieldDeclaration, Procedure, Sentence};
use super::code_model::CodeModel;
use super::ids::{
    ConstructId, NamespaceId, ProcedureId, PropertyId, SentenceId, TypeId, VariableId, VerbId,
};
use super::phrase::Phrase;
use super::symbols::{
    Namespace, Overload, PropertyDef, References, Symbols, TypeDef, VariableDef, VerbDef,
};
use crate::base::{CodeRange, ModelId};
use crate::error::ModelError;

/// Incrementally builds a [`CodeModel`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    path: Option<Arc<str>>,
    symbols: Symbols,
    constructs: Vec<Construct>,
    sentences: Vec<Sentence>,
    references: References,
    procedures: FxHashMap<ProcedureId, (ConstructId, usize)>,
    next_procedure: u32,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    // ------------------------------------------------------------------
    // Definitions
    // ------------------------------------------------------------------

    pub fn add_variable(&mut self, def: VariableDef) -> VariableId {
        let id = VariableId::from_len(self.symbols.variables.len());
        self.symbols.variables.push(def);
        id
    }

    pub fn add_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId::from_len(self.symbols.types.len());
        self.symbols.types.push(def);
        id
    }

    /// Add a property and append it to its declaring type's property list.
    pub fn add_property(&mut self, owner: TypeId, mut def: PropertyDef) -> PropertyId {
        let id = PropertyId::from_len(self.symbols.properties.len());
        def.declaring_type = Some(owner);
        self.symbols.properties.push(def);
        if let Some(ty) = self.symbols.ty_mut(owner) {
            ty.properties.get_or_insert_with(Vec::new).push(id);
        }
        id
    }

    pub fn add_verb(&mut self, def: VerbDef) -> VerbId {
        let id = VerbId::from_len(self.symbols.verbs.len());
        self.symbols.verbs.push(def);
        id
    }

    /// Add an overload to a verb registered earlier.
    pub fn add_overload(&mut self, verb: VerbId, overload: Overload) {
        if let Some(def) = self.symbols.verb_mut(verb) {
            def.overloads.push(overload);
        }
    }

    pub fn add_namespace(&mut self, name: impl Into<SmolStr>, types: Vec<TypeId>) -> NamespaceId {
        let id = NamespaceId::from_len(self.symbols.namespaces.len());
        self.symbols.namespaces.push(Namespace {
            name: name.into(),
            types,
        });
        id
    }

    /// Mark a verb as reachable from the document.
    pub fn reference_verb(&mut self, verb: VerbId) {
        if !self.references.verbs.contains(&verb) {
            self.references.verbs.push(verb);
        }
    }

    /// Mark a namespace as reachable from the document.
    pub fn reference_namespace(&mut self, namespace: NamespaceId) {
        if !self.references.namespaces.contains(&namespace) {
            self.references.namespaces.push(namespace);
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Add a construct. A construct declaring a type becomes that type's
    /// declaring construct unless the type already has one.
    pub fn add_construct(&mut self, construct: Construct) -> ConstructId {
        let id = ConstructId::from_len(self.constructs.len());
        if let Some(ty) = construct.ty.and_then(|ty| self.symbols.ty_mut(ty)) {
            ty.construct.get_or_insert(id);
        }
        self.constructs.push(construct);
        id
    }

    pub fn add_field(
        &mut self,
        construct: ConstructId,
        field: FieldDeclaration,
    ) -> Result<(), ModelError> {
        self.push_element(construct, CodeElement::Field(field))
            .map(|_| ())
    }

    pub fn add_statement(
        &mut self,
        construct: ConstructId,
        phrase: Phrase,
    ) -> Result<(), ModelError> {
        self.push_element(construct, CodeElement::Statement(phrase))
            .map(|_| ())
    }

    /// Reserve a procedure handle before the procedure itself is added, for
    /// sentences and overloads that refer to a procedure declared later.
    pub fn reserve_procedure(&mut self) -> ProcedureId {
        let id = ProcedureId::new(self.next_procedure);
        self.next_procedure += 1;
        id
    }

    /// Add a procedure under a handle from [`reserve_procedure`](Self::reserve_procedure).
    pub fn add_procedure_as(
        &mut self,
        id: ProcedureId,
        construct: ConstructId,
        procedure: Procedure,
    ) -> Result<(), ModelError> {
        let index = self.push_element(construct, CodeElement::Procedure(procedure))?;
        self.procedures.insert(id, (construct, index));
        Ok(())
    }

    pub fn add_procedure(
        &mut self,
        construct: ConstructId,
        procedure: Procedure,
    ) -> Result<ProcedureId, ModelError> {
        let id = self.reserve_procedure();
        self.add_procedure_as(id, construct, procedure)?;
        Ok(id)
    }

    pub fn add_sentence(&mut self, range: CodeRange) -> SentenceId {
        let id = SentenceId::from_len(self.sentences.len());
        self.sentences.push(Sentence {
            range,
            callee: None,
        });
        id
    }

    /// Record the procedure a sentence calls.
    pub fn set_callee(
        &mut self,
        sentence: SentenceId,
        callee: ProcedureId,
    ) -> Result<(), ModelError> {
        let entry = self
            .sentences
            .get_mut(sentence.index())
            .ok_or(ModelError::UnknownSentence(sentence))?;
        entry.callee = Some(callee);
        Ok(())
    }

    fn push_element(
        &mut self,
        construct: ConstructId,
        element: CodeElement,
    ) -> Result<usize, ModelError> {
        let target = self
            .constructs
            .get_mut(construct.index())
            .ok_or(ModelError::UnknownConstruct(construct))?;
        target.code.push(element);
        Ok(target.code.len() - 1)
    }

    // ------------------------------------------------------------------
    // Finish
    // ------------------------------------------------------------------

    /// Validate and produce the model.
    ///
    /// Children of every container must be in source order. Dangling
    /// definition handles are allowed: they resolve to nothing at query time.
    pub fn finish(self) -> Result<CodeModel, ModelError> {
        for construct in &self.constructs {
            check_order(&construct.header)?;
            for element in &construct.code {
                match element {
                    CodeElement::Field(field) => check_order(&field.phrases)?,
                    CodeElement::Procedure(procedure) => {
                        check_order(&procedure.header)?;
                        check_order(&procedure.body)?;
                    }
                    CodeElement::Statement(phrase) => check_order(std::slice::from_ref(phrase))?,
                }
            }
        }

        Ok(CodeModel {
            id: ModelId::fresh(),
            path: self.path,
            symbols: self.symbols,
            constructs: self.constructs,
            sentences: self.sentences,
            references: self.references,
            procedures: self.procedures,
        })
    }
}

fn check_order(phrases: &[Phrase]) -> Result<(), ModelError> {
    for pair in phrases.windows(2) {
        if pair[1].range.start < pair[0].range.start {
            return Err(ModelError::UnorderedPhrases {
                previous: pair[0].range.start,
                next: pair[1].range.start,
            });
        }
    }
    for phrase in phrases {
        if let Some(children) = phrase.children() {
            check_order(children)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::CodePosition;
    use crate::model::{ConstructKind, TypeKind, VariableScope};

    fn global(builder: &mut ModelBuilder) -> ConstructId {
        builder.add_construct(Construct::new(
            "グローバル",
            ConstructKind::Global,
            CodeRange::new(CodePosition::new(1, 1), CodePosition::new(20, 1)),
        ))
    }

    #[test]
    fn test_finish_assigns_fresh_ids() {
        let a = ModelBuilder::new().finish().unwrap();
        let b = ModelBuilder::new().finish().unwrap();

        assert_ne!(a.id(), b.id());
        assert!(a.is_empty());
    }

    #[test]
    fn test_add_property_links_owner() {
        let mut builder = ModelBuilder::new();
        let ty = builder.add_type(TypeDef::new("車", TypeKind::Class));
        let speed = builder.add_property(ty, PropertyDef::new("速度"));
        let model = builder.finish().unwrap();

        assert_eq!(model.symbols().property(speed).unwrap().declaring_type, Some(ty));
        assert_eq!(model.symbols().ty(ty).unwrap().properties.as_deref(), Some(&[speed][..]));
    }

    #[test]
    fn test_procedure_lookup_and_owner() {
        let mut builder = ModelBuilder::new();
        let construct = global(&mut builder);
        let var = builder.add_variable(VariableDef::new("数", VariableScope::Field(construct)));
        builder
            .add_field(
                construct,
                FieldDeclaration::new(var, CodeRange::on_line(1, 1, 5), vec![]),
            )
            .unwrap();
        let proc_id = builder
            .add_procedure(construct, Procedure::new("はじめ", CodeRange::on_line(2, 1, 10)))
            .unwrap();
        let model = builder.finish().unwrap();

        assert_eq!(model.procedure(proc_id).unwrap().unique_name.as_str(), "はじめ");
        assert_eq!(model.procedure_owner(proc_id), Some(construct));
    }

    #[test]
    fn test_reserved_procedure_can_be_called_before_declared() {
        let mut builder = ModelBuilder::new();
        let construct = global(&mut builder);
        let later = builder.reserve_procedure();
        let sentence = builder.add_sentence(CodeRange::on_line(2, 1, 8));
        builder.set_callee(sentence, later).unwrap();
        builder
            .add_procedure_as(later, construct, Procedure::new("挨拶", CodeRange::on_line(5, 1, 9)))
            .unwrap();
        let model = builder.finish().unwrap();

        let callee = model.sentence(sentence).and_then(|s| s.callee).unwrap();
        assert_eq!(model.procedure(callee).unwrap().range, CodeRange::on_line(5, 1, 9));
    }

    #[test]
    fn test_unknown_construct_rejected() {
        let mut builder = ModelBuilder::new();
        let err = builder
            .add_statement(ConstructId::new(3), Phrase::other(CodeRange::on_line(1, 1, 1), "。"))
            .unwrap_err();

        assert_eq!(err, ModelError::UnknownConstruct(ConstructId::new(3)));
    }

    #[test]
    fn test_unordered_children_rejected() {
        let mut builder = ModelBuilder::new();
        let construct = global(&mut builder);
        let sentence = Phrase::container(
            CodeRange::on_line(3, 1, 10),
            vec![
                Phrase::other(CodeRange::on_line(3, 6, 10), "表示する"),
                Phrase::other(CodeRange::on_line(3, 1, 4), "「あ」を"),
            ],
        );
        builder.add_statement(construct, sentence).unwrap();

        let err = builder.finish().unwrap_err();
        assert!(matches!(err, ModelError::UnorderedPhrases { .. }));
    }

    #[test]
    fn test_construct_links_its_type() {
        let mut builder = ModelBuilder::new();
        let ty = builder.add_type(TypeDef::new("点", TypeKind::Class));
        let construct = builder.add_construct(
            Construct::new("点", ConstructKind::Class, CodeRange::on_line(1, 1, 3)).with_type(ty),
        );
        let model = builder.finish().unwrap();

        assert_eq!(model.symbols().ty(ty).unwrap().construct, Some(construct));
    }

    #[test]
    fn test_reference_dedup() {
        let mut builder = ModelBuilder::new();
        let verb = builder.add_verb(VerbDef::new("表示する"));
        builder.reference_verb(verb);
        builder.reference_verb(verb);
        let model = builder.finish().unwrap();

        assert_eq!(model.references().verbs, vec![verb]);
    }
}
