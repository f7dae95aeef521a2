//! Generic depth-first traversal of the phrase graph.
//!
//! One traversal, parameterized by closures: a predicate deciding whether a
//! phrase matches and a collector receiving each match. Search and rename
//! are built by passing different closures, not by specializing a walker
//! type.
//!
//! Containers are never tested themselves; the walker descends into their
//! children instead. Leaves are tested in source order.

use crate::model::{CodeModel, Phrase, PhraseKind};

/// Walk a phrase sequence, passing every matching leaf to `collect`.
///
/// Returns true if anything matched.
pub fn walk<'m, P, C>(phrases: &'m [Phrase], is_match: &mut P, collect: &mut C) -> bool
where
    P: FnMut(&Phrase) -> bool,
    C: FnMut(&'m Phrase),
{
    let mut found = false;
    for phrase in phrases {
        found |= walk_phrase(phrase, is_match, collect);
    }
    found
}

fn walk_phrase<'m, P, C>(phrase: &'m Phrase, is_match: &mut P, collect: &mut C) -> bool
where
    P: FnMut(&Phrase) -> bool,
    C: FnMut(&'m Phrase),
{
    if let PhraseKind::Container(children) = &phrase.kind {
        return walk(children, is_match, collect);
    }
    if is_match(phrase) {
        collect(phrase);
        true
    } else {
        false
    }
}

/// Walk every phrase of a model in source order.
pub fn walk_model<'m, P, C>(model: &'m CodeModel, is_match: &mut P, collect: &mut C) -> bool
where
    P: FnMut(&Phrase) -> bool,
    C: FnMut(&'m Phrase),
{
    let mut found = false;
    for block in model.phrase_blocks() {
        found |= walk(block, is_match, collect);
    }
    found
}

/// Side-effecting walk: `visit` is offered every phrase, containers
/// included (before their children), and reports whether it changed it.
///
/// Returns true if any visit did.
pub fn walk_mut<V>(phrases: &mut [Phrase], visit: &mut V) -> bool
where
    V: FnMut(&mut Phrase) -> bool,
{
    let mut changed = false;
    for phrase in phrases {
        changed |= visit(phrase);
        if let PhraseKind::Container(children) = &mut phrase.kind {
            changed |= walk_mut(children, visit);
        }
    }
    changed
}

/// [`walk_mut`] over every phrase of a model.
pub fn walk_model_mut<V>(model: &mut CodeModel, visit: &mut V) -> bool
where
    V: FnMut(&mut Phrase) -> bool,
{
    model.for_each_block_mut(|block| walk_mut(block, visit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::CodeRange;
    use crate::model::VariableId;

    fn leaf(col: u32, text: &str) -> Phrase {
        Phrase::other(CodeRange::on_line(1, col, col), text)
    }

    #[test]
    fn test_walk_empty() {
        let mut hits = Vec::new();
        let found = walk(&[], &mut |_| true, &mut |p: &Phrase| hits.push(p.text.clone()));

        assert!(!found);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_walk_preorder_and_containers_skipped() {
        let phrases = vec![
            leaf(1, "a"),
            Phrase::container(
                CodeRange::on_line(1, 2, 4),
                vec![
                    leaf(2, "b"),
                    Phrase::container(CodeRange::on_line(1, 3, 3), vec![leaf(3, "c")]),
                    leaf(4, "d"),
                ],
            ),
            leaf(5, "e"),
        ];

        let mut seen = Vec::new();
        let found = walk(&phrases, &mut |_| true, &mut |p: &Phrase| seen.push(p.text.to_string()));

        assert!(found);
        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_walk_empty_container_no_match() {
        let phrases = vec![Phrase::container(CodeRange::on_line(1, 1, 1), vec![])];
        let mut count = 0;
        let found = walk(&phrases, &mut |_| true, &mut |_| count += 1);

        assert!(!found);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_walk_reports_no_match() {
        let phrases = vec![leaf(1, "a"), leaf(2, "b")];
        let found = walk(&phrases, &mut |p| p.text == "z", &mut |_| {});

        assert!(!found);
    }

    #[test]
    fn test_walk_mut_visits_containers_and_children() {
        let mut phrases = vec![Phrase::container(
            CodeRange::on_line(1, 1, 2),
            vec![
                Phrase::variable(CodeRange::on_line(1, 1, 1), "x", Some(VariableId::new(0))),
                leaf(2, "y"),
            ],
        )];

        let mut visited = 0;
        let changed = walk_mut(&mut phrases, &mut |p| {
            visited += 1;
            if matches!(p.kind, PhraseKind::Variable(_)) {
                p.text = "z".into();
                true
            } else {
                false
            }
        });

        assert!(changed);
        assert_eq!(visited, 3);
        assert_eq!(phrases[0].children().unwrap()[0].text.as_str(), "z");
    }
}
