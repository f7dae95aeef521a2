//! Phrases: the nodes of a parsed sentence.

use smol_str::SmolStr;

use super::ids::{PropertyId, SentenceId, TypeId, VariableId, VerbId};
use crate::base::{CodePosition, CodeRange};

/// What a phrase is.
///
/// Identity-bearing variants carry the handle of the definition the parser
/// resolved them to, or `None` when resolution failed. An unresolved phrase
/// never matches anything.
#[derive(Clone, Debug)]
pub enum PhraseKind {
    /// A variable reference (変数字句).
    Variable(Option<VariableId>),
    /// A type reference (種類字句).
    Type(Option<TypeId>),
    /// A verb (動詞字句).
    Verb(Option<VerbId>),
    /// A property name (設定項目名字句).
    Property(Option<PropertyId>),
    /// A formal complement of a call (形式補語字句); resolves through its sentence.
    Complement,
    /// A phrase owning an ordered sequence of child phrases.
    Container(Vec<Phrase>),
    /// Literals, particles, punctuation.
    Other,
}

/// A node of the phrase graph.
#[derive(Clone, Debug)]
pub struct Phrase {
    pub range: CodeRange,
    /// Surface text as written in the source.
    pub text: SmolStr,
    pub kind: PhraseKind,
    /// Weak back-reference to the enclosing sentence.
    pub sentence: Option<SentenceId>,
}

impl Phrase {
    pub fn new(range: CodeRange, text: impl Into<SmolStr>, kind: PhraseKind) -> Self {
        Self {
            range,
            text: text.into(),
            kind,
            sentence: None,
        }
    }

    pub fn variable(range: CodeRange, text: impl Into<SmolStr>, id: Option<VariableId>) -> Self {
        Self::new(range, text, PhraseKind::Variable(id))
    }

    pub fn ty(range: CodeRange, text: impl Into<SmolStr>, id: Option<TypeId>) -> Self {
        Self::new(range, text, PhraseKind::Type(id))
    }

    pub fn verb(range: CodeRange, text: impl Into<SmolStr>, id: Option<VerbId>) -> Self {
        Self::new(range, text, PhraseKind::Verb(id))
    }

    pub fn property(range: CodeRange, text: impl Into<SmolStr>, id: Option<PropertyId>) -> Self {
        Self::new(range, text, PhraseKind::Property(id))
    }

    pub fn complement(range: CodeRange, text: impl Into<SmolStr>) -> Self {
        Self::new(range, text, PhraseKind::Complement)
    }

    pub fn other(range: CodeRange, text: impl Into<SmolStr>) -> Self {
        Self::new(range, text, PhraseKind::Other)
    }

    /// A container phrase. Its text is the concatenation of its children.
    pub fn container(range: CodeRange, children: Vec<Phrase>) -> Self {
        let text: String = children.iter().map(|c| c.text.as_str()).collect();
        Self::new(range, text, PhraseKind::Container(children))
    }

    /// Attach the enclosing sentence, recursively for container children
    /// that have none of their own.
    pub fn in_sentence(mut self, sentence: SentenceId) -> Self {
        self.set_sentence(sentence);
        self
    }

    fn set_sentence(&mut self, sentence: SentenceId) {
        if self.sentence.is_none() {
            self.sentence = Some(sentence);
        }
        if let PhraseKind::Container(children) = &mut self.kind {
            for child in children {
                child.set_sentence(sentence);
            }
        }
    }

    /// Child phrases, if this is a container.
    pub fn children(&self) -> Option<&[Phrase]> {
        match &self.kind {
            PhraseKind::Container(children) => Some(children),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, PhraseKind::Container(_))
    }

    /// The resolved symbol this phrase refers to, if any.
    pub fn symbol(&self) -> Option<SymbolRef> {
        match self.kind {
            PhraseKind::Variable(id) => id.map(SymbolRef::Variable),
            PhraseKind::Type(id) => id.map(SymbolRef::Type),
            PhraseKind::Verb(id) => id.map(SymbolRef::Verb),
            PhraseKind::Property(id) => id.map(SymbolRef::Property),
            _ => None,
        }
    }

    /// Text shown when hovering this phrase.
    pub fn display_text(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, pos: CodePosition) -> bool {
        self.range.contains(pos)
    }
}

/// A resolved symbol: the search and rename target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Variable(VariableId),
    Type(TypeId),
    Verb(VerbId),
    Property(PropertyId),
}

impl SymbolRef {
    /// Whether `phrase` refers to this symbol.
    ///
    /// Kinds must agree and the handles must be identical. Unresolved
    /// phrases and non-identity phrases never match.
    pub fn matches(self, phrase: &Phrase) -> bool {
        match (self, &phrase.kind) {
            (SymbolRef::Variable(target), PhraseKind::Variable(Some(id))) => target == *id,
            (SymbolRef::Type(target), PhraseKind::Type(Some(id))) => target == *id,
            (SymbolRef::Verb(target), PhraseKind::Verb(Some(id))) => target == *id,
            (SymbolRef::Property(target), PhraseKind::Property(Some(id))) => target == *id,
            _ => false,
        }
    }
}
