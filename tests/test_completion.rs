//! Completion candidate lists.

mod common;

use std::sync::Arc;

use common::{PHONETICS, library, program};
use produire::AssistConfig;
use produire::ide::{AssistState, CandidateKind, SnippetTable, build_candidates};
use produire::model::ModelBuilder;
use rustc_hash::FxHashMap;

fn snippets() -> SnippetTable {
    SnippetTable::standard(&*PHONETICS)
}

#[test]
fn test_property_indexed_by_three_keys() {
    let library = library();
    let list = build_candidates(&library.model, &snippets(), &*PHONETICS, &AssistConfig::default());

    let rows: Vec<_> = list.iter().filter(|row| row.label == "速度").collect();
    let keys: Vec<&str> = rows.iter().map(|row| row.filter_key.as_str()).collect();

    assert_eq!(keys, vec!["速度", "そくど", "sokudo"]);
    for row in rows {
        assert_eq!(row.insertion_text, "速度");
        assert_eq!(row.kind, CandidateKind::Property);
        assert_eq!(row.documentation.as_deref(), Some("移動の速さ"));
        assert!(!row.is_snippet);
    }
}

#[test]
fn test_every_entry_has_consistent_rows() {
    let program = program();
    let list = build_candidates(&program.model, &snippets(), &*PHONETICS, &AssistConfig::default());

    let mut by_label: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for row in list.iter() {
        assert!(!row.insertion_text.is_empty());
        if !row.is_snippet {
            assert_eq!(row.insertion_text, row.label);
        }
        by_label.entry(row.label.as_str()).or_default().push(row.filter_key.as_str());
    }

    for (label, keys) in &by_label {
        assert!(keys.len() <= 3, "{label} has {} rows", keys.len());
        assert_eq!(keys[0], *label);
        let mut distinct = keys.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), keys.len(), "{label} repeats a key");
    }
    assert_eq!(by_label["表示する"], vec!["表示する", "ひょうじする", "hyoujisuru"]);
    assert_eq!(by_label["足す"], vec!["足す", "たす", "tasu"]);
}

#[test]
fn test_enumerations_and_invisible_symbols_excluded() {
    let library = library();
    let list = build_candidates(&library.model, &snippets(), &*PHONETICS, &AssistConfig::default());
    let labels: Vec<&str> = list.model_rows().iter().map(|row| row.label.as_str()).collect();

    assert!(!labels.contains(&"色"));
    assert!(!labels.contains(&"秘密"));
    assert!(!labels.contains(&"内部状態"));
    assert!(!labels.contains(&"未完"));
    assert!(!labels.contains(&"画面"));
    assert!(labels.contains(&"数値"));
    assert!(library.model.symbols().ty(library.color).is_some());
    assert!(library.model.symbols().ty(library.screen).is_some());
}

#[test]
fn test_order_is_snippets_verbs_particles_types() {
    let library = library();
    let list = build_candidates(&library.model, &snippets(), &*PHONETICS, &AssistConfig::default());

    let kinds: Vec<CandidateKind> = list.iter().map(|row| row.kind).collect();
    let first_non_snippet = kinds.iter().position(|k| *k != CandidateKind::Snippet).unwrap();
    assert!(kinds[..first_non_snippet].iter().all(|k| *k == CandidateKind::Snippet));

    let rest: Vec<CandidateKind> = kinds[first_non_snippet..].to_vec();
    let mut sorted = rest.clone();
    sorted.sort_by_key(|k| match k {
        CandidateKind::Verb => 0,
        CandidateKind::Particle => 1,
        _ => 2,
    });
    assert_eq!(rest, sorted);
}

#[test]
fn test_empty_model_is_snippets_only() {
    let model = ModelBuilder::new().finish().unwrap();
    let snippets = snippets();
    let list = build_candidates(&model, &snippets, &*PHONETICS, &AssistConfig::default());

    assert_eq!(list.len(), snippets.len());
    assert!(list.iter().all(|row| row.is_snippet));
}

#[test]
fn test_cached_list_is_idempotent() {
    let state = AssistState::new();
    let program = program();
    let snippets = snippets();
    let config = AssistConfig::default();

    let first = state.get_or_build(&program.model, &snippets, &*PHONETICS, &config);
    let second = state.get_or_build(&program.model, &snippets, &*PHONETICS, &config);
    assert!(Arc::ptr_eq(&first, &second));

    // A rebuild from scratch yields the same rows in the same order.
    let fresh = build_candidates(&program.model, &snippets, &*PHONETICS, &config);
    assert!(first.iter().eq(fresh.iter()));
}

#[test]
fn test_matching_by_any_key() {
    let library = library();
    let list = build_candidates(&library.model, &snippets(), &*PHONETICS, &AssistConfig::default());

    for query in ["速", "そく", "soku", "SOKU"] {
        let labels: Vec<&str> = list.matching(query).iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["速度"], "query {query}");
    }
    let labels: Vec<&str> = list.matching("hyou").iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["表示する"]);
}
