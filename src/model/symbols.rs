//! Canonical definition objects and the arenas that own them.
//!
//! These are what phrases resolve to. The parser creates one definition per
//! declared (or imported) symbol; every reference to that symbol carries the
//! definition's handle.

use smol_str::SmolStr;

use super::ids::{
    ConstructId, NamespaceId, ProcedureId, PropertyId, TypeId, VariableId, VerbId,
};
use crate::base::CodeRange;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Where a symbol may be offered to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityTarget {
    /// Completion candidates.
    CodeAssist,
    /// Document outline.
    Outline,
}

/// Visibility flags for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Visibility {
    code_assist: bool,
    outline: bool,
}

impl Visibility {
    /// Visible everywhere.
    pub const VISIBLE: Self = Self {
        code_assist: true,
        outline: true,
    };

    /// Hidden everywhere (internal helpers, compiler-generated members).
    pub const HIDDEN: Self = Self {
        code_assist: false,
        outline: false,
    };

    /// Shown in the outline but never offered as a completion.
    pub const NO_CODE_ASSIST: Self = Self {
        code_assist: false,
        outline: true,
    };

    /// Check visibility for a target.
    pub fn is_visible(self, target: VisibilityTarget) -> bool {
        match target {
            VisibilityTarget::CodeAssist => self.code_assist,
            VisibilityTarget::Outline => self.outline,
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

// ============================================================================
// VARIABLES
// ============================================================================

/// The scope that declares a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableScope {
    /// A field declared by a construct.
    Field(ConstructId),
    /// A local variable of a procedure.
    Local(ProcedureId),
    /// A parameter (complement) of a procedure.
    Parameter(ProcedureId),
    /// Supplied by the runtime; no source declaration.
    BuiltIn,
}

/// A variable definition.
#[derive(Clone, Debug)]
pub struct VariableDef {
    pub name: SmolStr,
    pub scope: VariableScope,
    /// Where the variable is first introduced, if the parser recorded it.
    pub declaration: Option<CodeRange>,
}

impl VariableDef {
    pub fn new(name: impl Into<SmolStr>, scope: VariableScope) -> Self {
        Self {
            name: name.into(),
            scope,
            declaration: None,
        }
    }

    pub fn with_declaration(mut self, range: CodeRange) -> Self {
        self.declaration = Some(range);
        self
    }
}

// ============================================================================
// TYPES AND PROPERTIES
// ============================================================================

/// What sort of type a [`TypeDef`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An ordinary class; instances are created from it.
    Class,
    /// A global (static) container: its properties are used directly.
    Global,
    /// An enumeration.
    Enumeration,
}

/// A type definition.
#[derive(Clone, Debug)]
pub struct TypeDef {
    pub name: SmolStr,
    pub kind: TypeKind,
    /// False while the type is still only partially resolved.
    pub complete: bool,
    pub visibility: Visibility,
    pub description: Option<SmolStr>,
    /// The construct declaring this type, when it comes from this document.
    pub construct: Option<ConstructId>,
    /// Properties, in declaration order. `None` when the parser has not
    /// filled them in.
    pub properties: Option<Vec<PropertyId>>,
}

impl TypeDef {
    pub fn new(name: impl Into<SmolStr>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            complete: true,
            visibility: Visibility::VISIBLE,
            description: None,
            construct: None,
            properties: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_description(mut self, description: impl Into<SmolStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_construct(mut self, construct: ConstructId) -> Self {
        self.construct = Some(construct);
        self
    }

    pub fn incomplete(mut self) -> Self {
        self.complete = false;
        self
    }

    pub fn is_visible(&self, target: VisibilityTarget) -> bool {
        self.visibility.is_visible(target)
    }
}

/// A property (設定項目) definition.
#[derive(Clone, Debug)]
pub struct PropertyDef {
    pub name: SmolStr,
    pub description: Option<SmolStr>,
    pub visibility: Visibility,
    pub declaring_type: Option<TypeId>,
}

impl PropertyDef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility: Visibility::VISIBLE,
            declaring_type: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_description(mut self, description: impl Into<SmolStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_visible(&self, target: VisibilityTarget) -> bool {
        self.visibility.is_visible(target)
    }
}

// ============================================================================
// VERBS
// ============================================================================

/// Whether a complement is a real argument or a modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplementKind {
    /// A true argument slot (実補語).
    Actual,
    /// An attributive modifier.
    Attributive,
}

/// One argument slot of a verb, introduced by one or more particles.
#[derive(Clone, Debug)]
pub struct ComplementDef {
    /// Particles that may mark this slot, e.g. `["を"]` or `["に", "へ"]`.
    pub particles: Vec<SmolStr>,
    pub kind: ComplementKind,
}

impl ComplementDef {
    pub fn actual<I, S>(particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            particles: particles.into_iter().map(Into::into).collect(),
            kind: ComplementKind::Actual,
        }
    }

    pub fn attributive<I, S>(particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            particles: particles.into_iter().map(Into::into).collect(),
            kind: ComplementKind::Attributive,
        }
    }
}

/// One overload of a verb.
#[derive(Clone, Debug, Default)]
pub struct Overload {
    /// The procedure implementing this overload, when declared in this document.
    pub procedure: Option<ProcedureId>,
    /// `None` when the parser could not work out the signature.
    pub complements: Option<Vec<ComplementDef>>,
}

impl Overload {
    pub fn new(complements: Vec<ComplementDef>) -> Self {
        Self {
            procedure: None,
            complements: Some(complements),
        }
    }

    pub fn with_procedure(mut self, procedure: ProcedureId) -> Self {
        self.procedure = Some(procedure);
        self
    }
}

/// A verb definition.
#[derive(Clone, Debug)]
pub struct VerbDef {
    pub name: SmolStr,
    /// Kana reading supplied by the declaration (読み仮名), if any.
    pub reading: Option<SmolStr>,
    pub description: Option<SmolStr>,
    pub visibility: Visibility,
    pub overloads: Vec<Overload>,
}

impl VerbDef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            reading: None,
            description: None,
            visibility: Visibility::VISIBLE,
            overloads: Vec::new(),
        }
    }

    pub fn with_reading(mut self, reading: impl Into<SmolStr>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<SmolStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_overload(mut self, overload: Overload) -> Self {
        self.overloads.push(overload);
        self
    }

    pub fn is_visible(&self, target: VisibilityTarget) -> bool {
        self.visibility.is_visible(target)
    }
}

// ============================================================================
// NAMESPACES & REFERENCES
// ============================================================================

/// A namespace: a named group of types.
#[derive(Clone, Debug)]
pub struct Namespace {
    pub name: SmolStr,
    pub types: Vec<TypeId>,
}

/// The symbols a document can reach: its own plus everything it imports.
#[derive(Clone, Debug, Default)]
pub struct References {
    pub verbs: Vec<VerbId>,
    pub namespaces: Vec<NamespaceId>,
}

// ============================================================================
// ARENAS
// ============================================================================

/// Owner of every definition in one code model.
#[derive(Clone, Debug, Default)]
pub struct Symbols {
    pub(crate) variables: Vec<VariableDef>,
    pub(crate) types: Vec<TypeDef>,
    pub(crate) verbs: Vec<VerbDef>,
    pub(crate) properties: Vec<PropertyDef>,
    pub(crate) namespaces: Vec<Namespace>,
}

impl Symbols {
    pub fn variable(&self, id: VariableId) -> Option<&VariableDef> {
        self.variables.get(id.index())
    }

    pub fn ty(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    pub fn verb(&self, id: VerbId) -> Option<&VerbDef> {
        self.verbs.get(id.index())
    }

    pub fn property(&self, id: PropertyId) -> Option<&PropertyDef> {
        self.properties.get(id.index())
    }

    pub fn namespace(&self, id: NamespaceId) -> Option<&Namespace> {
        self.namespaces.get(id.index())
    }

    pub(crate) fn variable_mut(&mut self, id: VariableId) -> Option<&mut VariableDef> {
        self.variables.get_mut(id.index())
    }

    pub(crate) fn ty_mut(&mut self, id: TypeId) -> Option<&mut TypeDef> {
        self.types.get_mut(id.index())
    }

    pub(crate) fn verb_mut(&mut self, id: VerbId) -> Option<&mut VerbDef> {
        self.verbs.get_mut(id.index())
    }

    pub(crate) fn property_mut(&mut self, id: PropertyId) -> Option<&mut PropertyDef> {
        self.properties.get_mut(id.index())
    }
}
