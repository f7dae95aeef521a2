//! Built-in templates for the language's control-flow and declaration forms.

use std::sync::Arc;

use smol_str::SmolStr;

use super::{CandidateKind, CompletionCandidate};
use crate::phonetic::{PhoneticKeys, Phonetics};

struct Template {
    label: &'static str,
    reading: &'static str,
    documentation: &'static str,
    body: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        label: "もし",
        reading: "もし",
        documentation: "条件分岐",
        body: "もし、${1:条件}なら\n\t$0\nもし終わり",
    },
    Template {
        label: "回繰り返す",
        reading: "かいくりかえす",
        documentation: "指定した回数だけ繰り返す",
        body: "${1:10}回、繰り返す\n\t$0\n繰り返し終わり",
    },
    Template {
        label: "の間繰り返す",
        reading: "のあいだくりかえす",
        documentation: "条件を満たす間繰り返す",
        body: "${1:条件}の間、繰り返す\n\t$0\n繰り返し終わり",
    },
    Template {
        label: "反復",
        reading: "はんぷく",
        documentation: "各要素について繰り返す",
        body: "${1:一覧}の各要素について反復する\n\t$0\n反復終わり",
    },
    Template {
        label: "手順",
        reading: "てじゅん",
        documentation: "手順の定義",
        body: "${1:名前}手順\n\t$0\n終わり",
    },
    Template {
        label: "はじめの手順",
        reading: "はじめのてじゅん",
        documentation: "最初に実行される手順",
        body: "はじめの手順\n\t$0\n終わり",
    },
    Template {
        label: "とは",
        reading: "とは",
        documentation: "種類の定義",
        body: "${1:名前}とは\n\t$0\n終わり",
    },
    Template {
        label: "エラー監視",
        reading: "えらーかんし",
        documentation: "エラーが起きたときの処理",
        body: "エラー監視\n\t$0\nエラーならば\n\t\nエラー監視終わり",
    },
];

/// The template rows, expanded once and shared by every candidate list.
#[derive(Debug, Clone)]
pub struct SnippetTable {
    rows: Arc<[CompletionCandidate]>,
}

impl SnippetTable {
    /// The standard templates, indexed with `phonetics`.
    pub fn standard(phonetics: &dyn Phonetics) -> Self {
        let mut rows = Vec::with_capacity(TEMPLATES.len() * 3);
        for template in TEMPLATES {
            let keys = PhoneticKeys::derive(phonetics, template.label, Some(template.reading));
            let keys = [
                Some(SmolStr::new_static(template.label)),
                keys.reading,
                keys.roman,
            ];
            for filter_key in keys.into_iter().flatten() {
                rows.push(CompletionCandidate {
                    label: SmolStr::new_static(template.label),
                    filter_key,
                    documentation: Some(SmolStr::new_static(template.documentation)),
                    insertion_text: SmolStr::new_static(template.body),
                    kind: CandidateKind::Snippet,
                    is_snippet: true,
                });
            }
        }
        Self { rows: rows.into() }
    }

    /// A table without templates.
    pub fn empty() -> Self {
        Self {
            rows: Arc::from(Vec::new()),
        }
    }

    pub fn rows(&self) -> &[CompletionCandidate] {
        &self.rows
    }

    pub(crate) fn shared(&self) -> Arc<[CompletionCandidate]> {
        Arc::clone(&self.rows)
    }

    /// Distinct template names.
    pub fn labels(&self) -> impl Iterator<Item = &SmolStr> + '_ {
        let mut previous: Option<&SmolStr> = None;
        self.rows.iter().filter_map(move |row| {
            if previous == Some(&row.label) {
                return None;
            }
            previous = Some(&row.label);
            Some(&row.label)
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::{KanaPhonetics, ReadingTable, RomanizationStyle};

    fn table() -> SnippetTable {
        SnippetTable::standard(&KanaPhonetics::new(
            ReadingTable::new(),
            RomanizationStyle::Hepburn,
        ))
    }

    #[test]
    fn test_standard_rows() {
        let table = table();
        let keys: Vec<&str> = table
            .rows()
            .iter()
            .filter(|row| row.label == "回繰り返す")
            .map(|row| row.filter_key.as_str())
            .collect();

        assert_eq!(keys, vec!["回繰り返す", "かいくりかえす", "kaikurikaesu"]);
    }

    #[test]
    fn test_kana_label_has_two_rows() {
        // The reading equals the label, so only the name and romaji rows remain.
        let table = table();
        let keys: Vec<&str> = table
            .rows()
            .iter()
            .filter(|row| row.label == "もし")
            .map(|row| row.filter_key.as_str())
            .collect();

        assert_eq!(keys, vec!["もし", "moshi"]);
    }

    #[test]
    fn test_rows_are_snippets() {
        let table = table();

        assert!(!table.is_empty());
        assert!(
            table
                .rows()
                .iter()
                .all(|row| row.is_snippet && row.kind == CandidateKind::Snippet)
        );
        assert_eq!(table.labels().count(), TEMPLATES.len());
    }

    #[test]
    fn test_shared_rows_are_not_copied() {
        let table = table();
        let a = table.shared();
        let b = table.shared();

        assert!(Arc::ptr_eq(&a, &b));
    }
}
