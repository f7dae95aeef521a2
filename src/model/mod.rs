//! The code model: what the parser hands us.
//!
//! The natural-language parser and type resolver are external; they produce
//! a [`CodeModel`] per parse through a [`ModelBuilder`]. This module only
//! defines the shape of that model:
//!
//! - [`Phrase`] / [`PhraseKind`] - the phrase graph, with resolved identities
//! - [`Construct`], [`Procedure`], [`CodeElement`] - the declaration structure
//! - [`Symbols`] - arenas of canonical definitions, addressed by handle
//! - [`SymbolRef`] - "which symbol", as used by search and rename

mod builder;
mod code;
mod code_model;
mod ids;
mod phrase;
mod symbols;

pub use builder::ModelBuilder;
pub use code::{
    CodeElement, Construct, ConstructKind, FieldDeclaration, Procedure, Sentence,
};
pub use code_model::CodeModel;
pub use ids::{
    ConstructId, NamespaceId, ProcedureId, PropertyId, SentenceId, TypeId, VariableId, VerbId,
};
pub use phrase::{Phrase, PhraseKind, SymbolRef};
pub use symbols::{
    ComplementDef, ComplementKind, Namespace, Overload, PropertyDef, References, Symbols,
    TypeDef, TypeKind, VariableDef, VariableScope, VerbDef, Visibility, VisibilityTarget,
};
