//! Structural nodes: constructs, their declarations and statements.

use smol_str::SmolStr;

use super::ids::{ProcedureId, TypeId, VariableId, VerbId};
use super::phrase::Phrase;
use super::symbols::ComplementDef;
use crate::base::CodeRange;

/// What sort of construct a [`Construct`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// A user-declared class (`〜とは`).
    Class,
    /// The implicit top-level construct of a file.
    Global,
}

/// A type/class-like container of declarations and statements.
#[derive(Clone, Debug)]
pub struct Construct {
    pub name: SmolStr,
    pub kind: ConstructKind,
    pub range: CodeRange,
    /// The type this construct declares.
    pub ty: Option<TypeId>,
    /// Phrases of the declaration line (the name, its base type).
    pub header: Vec<Phrase>,
    /// Declarations and statements, in source order.
    pub code: Vec<CodeElement>,
}

impl Construct {
    pub fn new(name: impl Into<SmolStr>, kind: ConstructKind, range: CodeRange) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            ty: None,
            header: Vec::new(),
            code: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_header(mut self, header: Vec<Phrase>) -> Self {
        self.header = header;
        self
    }

    pub fn is_global(&self) -> bool {
        self.kind == ConstructKind::Global
    }
}

/// One entry of a construct's code list.
#[derive(Clone, Debug)]
pub enum CodeElement {
    Field(FieldDeclaration),
    Procedure(Procedure),
    /// A statement outside any procedure.
    Statement(Phrase),
}

impl CodeElement {
    pub fn range(&self) -> CodeRange {
        match self {
            CodeElement::Field(field) => field.range,
            CodeElement::Procedure(procedure) => procedure.range,
            CodeElement::Statement(phrase) => phrase.range,
        }
    }
}

/// A field declaration statement.
#[derive(Clone, Debug)]
pub struct FieldDeclaration {
    pub variable: VariableId,
    pub range: CodeRange,
    pub phrases: Vec<Phrase>,
}

impl FieldDeclaration {
    pub fn new(variable: VariableId, range: CodeRange, phrases: Vec<Phrase>) -> Self {
        Self {
            variable,
            range,
            phrases,
        }
    }
}

/// A procedure declared by a construct.
#[derive(Clone, Debug)]
pub struct Procedure {
    /// Name disambiguated across overloads.
    pub unique_name: SmolStr,
    pub range: CodeRange,
    pub verb: Option<VerbId>,
    pub complements: Vec<ComplementDef>,
    /// Synthesized by the parser rather than written by the user.
    pub fixed: bool,
    /// Phrases of the declaration line.
    pub header: Vec<Phrase>,
    /// Sentences of the body, in source order.
    pub body: Vec<Phrase>,
}

impl Procedure {
    pub fn new(unique_name: impl Into<SmolStr>, range: CodeRange) -> Self {
        Self {
            unique_name: unique_name.into(),
            range,
            verb: None,
            complements: Vec::new(),
            fixed: false,
            header: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_verb(mut self, verb: VerbId) -> Self {
        self.verb = Some(verb);
        self
    }

    pub fn with_complements(mut self, complements: Vec<ComplementDef>) -> Self {
        self.complements = complements;
        self
    }

    pub fn with_header(mut self, header: Vec<Phrase>) -> Self {
        self.header = header;
        self
    }

    pub fn with_body(mut self, body: Vec<Phrase>) -> Self {
        self.body = body;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}

/// Entry of the sentence table. Phrases point here through
/// [`Phrase::sentence`]; the table never owns phrases.
#[derive(Clone, Debug)]
pub struct Sentence {
    pub range: CodeRange,
    /// The procedure this sentence calls, when it resolved to one.
    pub callee: Option<ProcedureId>,
}
