//! Phonetic utilities: readings and romanized keys for names.
//!
//! Identifiers are written in kanji and kana, but typed through an input
//! method. To make a name findable from whatever the user has typed so far,
//! each name is indexed under up to three keys: the name itself, its kana
//! reading, and the romanization of that reading.

mod reading;
mod roman;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

pub use reading::ReadingTable;
pub use roman::{RomanizationStyle, is_kana, romanize, to_hiragana};

/// Source of readings and romanizations.
pub trait Phonetics {
    /// Kana reading of `surface`, if known.
    fn reading(&self, surface: &str) -> Option<SmolStr>;

    /// Romanized form of a kana reading; empty when there is none.
    fn romanize(&self, reading: &str) -> SmolStr;
}

/// [`Phonetics`] backed by a [`ReadingTable`] and the built-in romanizer.
#[derive(Clone, Debug, Default)]
pub struct KanaPhonetics {
    table: ReadingTable,
    style: RomanizationStyle,
}

impl KanaPhonetics {
    pub fn new(table: ReadingTable, style: RomanizationStyle) -> Self {
        Self { table, style }
    }

    pub fn table(&self) -> &ReadingTable {
        &self.table
    }

    pub fn style(&self) -> RomanizationStyle {
        self.style
    }

    /// Same dictionary, different romanization.
    pub fn with_style(mut self, style: RomanizationStyle) -> Self {
        self.style = style;
        self
    }
}

impl Phonetics for KanaPhonetics {
    fn reading(&self, surface: &str) -> Option<SmolStr> {
        self.table.reading(surface)
    }

    fn romanize(&self, reading: &str) -> SmolStr {
        romanize(reading, self.style)
    }
}

/// The derived search keys of one name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhoneticKeys {
    /// Kana reading, when it differs from the name.
    pub reading: Option<SmolStr>,
    /// Romanized reading (or romanized name when there is no reading).
    pub roman: Option<SmolStr>,
}

impl PhoneticKeys {
    /// Derive the keys of `name`.
    ///
    /// `known_reading` takes precedence over the dictionary; declarations
    /// may carry their own reading.
    pub fn derive(phonetics: &dyn Phonetics, name: &str, known_reading: Option<&str>) -> Self {
        let reading = match known_reading.filter(|r| !r.is_empty()) {
            Some(r) => Some(SmolStr::new(r)),
            None => phonetics.reading(name).filter(|r| !r.is_empty()),
        };
        let roman = match &reading {
            Some(r) => phonetics.romanize(r),
            None => phonetics.romanize(name),
        };
        Self {
            reading: reading.filter(|r| r.as_str() != name),
            roman: Some(roman).filter(|r| !r.is_empty()),
        }
    }
}

/// Per-build memo so each name is looked up and romanized at most once.
pub struct KeyCache<'p> {
    phonetics: &'p dyn Phonetics,
    keys: FxHashMap<SmolStr, PhoneticKeys>,
}

impl<'p> KeyCache<'p> {
    pub fn new(phonetics: &'p dyn Phonetics) -> Self {
        Self {
            phonetics,
            keys: FxHashMap::default(),
        }
    }

    /// Keys for `name`, computed on first request.
    pub fn keys(&mut self, name: &str, known_reading: Option<&str>) -> PhoneticKeys {
        if let Some(keys) = self.keys.get(name) {
            return keys.clone();
        }
        let keys = PhoneticKeys::derive(self.phonetics, name, known_reading);
        self.keys.insert(SmolStr::new(name), keys.clone());
        keys
    }

    /// Number of distinct names seen.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
