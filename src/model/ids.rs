//! Arena handles for definitions and structural nodes.
//!
//! A handle is an index into one of the arenas owned by a [`CodeModel`].
//! Handle equality *is* symbol identity: two references denote the same
//! variable exactly when they carry the same [`VariableId`], whatever the
//! variables happen to be called.
//!
//! Handles are only meaningful inside the model that issued them.
//!
//! [`CodeModel`]: super::CodeModel

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw arena index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the raw arena index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_len(len: usize) -> Self {
                Self(len as u32)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

arena_id!(
    /// A variable definition (field, local or parameter).
    VariableId
);
arena_id!(
    /// A type definition (class, global construct or enumeration).
    TypeId
);
arena_id!(
    /// A verb: the natural-language name under which procedures are called.
    VerbId
);
arena_id!(
    /// A property (設定項目) of a type.
    PropertyId
);
arena_id!(
    /// A namespace the document references.
    NamespaceId
);
arena_id!(
    /// A construct declared in the document.
    ConstructId
);
arena_id!(
    /// A procedure declared in one of the document's constructs.
    ProcedureId
);
arena_id!(
    /// A sentence, the unit phrases point back to.
    SentenceId
);
