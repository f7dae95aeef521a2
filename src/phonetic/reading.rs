//! Reading dictionary: surface text → kana reading.

use std::path::Path;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::warn;

use super::roman::{is_kana, to_hiragana};
use crate::error::ReadingTableError;

/// Dictionary of kana readings (読み仮名) for names written in kanji.
///
/// The text format is one entry per line, `surface<TAB>reading`. Blank
/// lines and lines starting with `#` are ignored.
#[derive(Clone, Debug, Default)]
pub struct ReadingTable {
    entries: FxHashMap<SmolStr, SmolStr>,
}

impl ReadingTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(surface, reading)` pairs.
    pub fn from_entries<I, S, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<SmolStr>,
        R: Into<SmolStr>,
    {
        let mut table = Self::new();
        for (surface, reading) in entries {
            table.insert(surface, reading);
        }
        table
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, surface: impl Into<SmolStr>, reading: impl Into<SmolStr>) {
        self.entries.insert(surface.into(), reading.into());
    }

    /// Parse the text format, failing on the first malformed line.
    pub fn parse(text: &str) -> Result<Self, ReadingTableError> {
        let mut table = Self::new();
        for (line_no, line) in text.lines().enumerate() {
            match parse_line(line) {
                Line::Skip => {}
                Line::Entry(surface, reading) => table.insert(surface, reading),
                Line::Malformed => return Err(ReadingTableError::Malformed { line: line_no + 1 }),
            }
        }
        Ok(table)
    }

    /// Parse the text format, skipping malformed lines with a warning.
    pub fn parse_lossy(text: &str) -> Self {
        let mut table = Self::new();
        for (line_no, line) in text.lines().enumerate() {
            match parse_line(line) {
                Line::Skip => {}
                Line::Entry(surface, reading) => table.insert(surface, reading),
                Line::Malformed => warn!(line = line_no + 1, "skipping malformed reading entry"),
            }
        }
        table
    }

    /// Load a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReadingTableError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Look up the reading of `surface`.
    ///
    /// Kana-only text is its own reading (in hiragana) even without an
    /// entry.
    pub fn reading(&self, surface: &str) -> Option<SmolStr> {
        if surface.is_empty() {
            return None;
        }
        if let Some(reading) = self.entries.get(surface) {
            return Some(reading.clone());
        }
        kana_reading(surface)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

enum Line<'a> {
    Skip,
    Entry(&'a str, &'a str),
    Malformed,
}

fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }
    match line.split_once('\t') {
        Some((surface, reading)) => {
            let (surface, reading) = (surface.trim(), reading.trim());
            if surface.is_empty() || reading.is_empty() {
                Line::Malformed
            } else {
                Line::Entry(surface, reading)
            }
        }
        None => Line::Malformed,
    }
}

fn kana_reading(surface: &str) -> Option<SmolStr> {
    if !surface.chars().all(is_kana) {
        return None;
    }
    Some(surface.chars().map(to_hiragana).collect::<String>().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_entry() {
        let table = ReadingTable::from_entries([("速度", "そくど"), ("表示", "ひょうじ")]);

        assert_eq!(table.reading("速度").as_deref(), Some("そくど"));
        assert_eq!(table.reading("加速").as_deref(), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_kana_is_its_own_reading() {
        let table = ReadingTable::new();

        assert_eq!(table.reading("を").as_deref(), Some("を"));
        assert_eq!(table.reading("ボタン").as_deref(), Some("ぼたん"));
        assert_eq!(table.reading("ボタン押下"), None);
        assert_eq!(table.reading(""), None);
    }

    #[test]
    fn test_parse() {
        let text = "# readings\n速度\tそくど\n\n表示する\tひょうじする\n";
        let table = ReadingTable::parse(text).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.reading("表示する").as_deref(), Some("ひょうじする"));
    }

    #[test]
    fn test_parse_malformed_line() {
        let err = ReadingTable::parse("速度\tそくど\n加速 かそく\n").unwrap_err();

        assert!(matches!(err, ReadingTableError::Malformed { line: 2 }));
    }

    #[test]
    fn test_parse_lossy_skips_malformed() {
        let table = ReadingTable::parse_lossy("速度\tそくど\n加速 かそく\n\tよみ\n");

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "位置\tいち").unwrap();
        writeln!(file, "大きさ\tおおきさ").unwrap();

        let table = ReadingTable::load(file.path()).unwrap();
        assert_eq!(table.reading("大きさ").as_deref(), Some("おおきさ"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReadingTable::load("/nonexistent/readings.tsv").unwrap_err();
        assert!(matches!(err, ReadingTableError::Io(_)));
    }
}
