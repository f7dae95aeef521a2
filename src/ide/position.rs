//! Resolving the phrase under the cursor.

use tracing::trace;

use crate::base::CodePosition;
use crate::model::{CodeModel, Phrase};

/// The innermost phrase whose range contains `pos`.
///
/// A container is returned only when none of its children contains the
/// position (the cursor sits on punctuation or spacing the parser folded
/// into the container's range).
pub fn element_at(model: &CodeModel, pos: CodePosition) -> Option<&Phrase> {
    let found = model
        .phrase_blocks()
        .into_iter()
        .filter_map(|block| innermost(block, pos))
        .min_by_key(|phrase| phrase.range.extent());
    trace!(
        model = ?model.id(),
        %pos,
        found = ?found.map(|p| p.text.as_str()),
        "element at position"
    );
    found
}

fn innermost(phrases: &[Phrase], pos: CodePosition) -> Option<&Phrase> {
    let phrase = phrases.iter().find(|phrase| phrase.contains(pos))?;
    match phrase.children() {
        Some(children) => innermost(children, pos).or(Some(phrase)),
        None => Some(phrase),
    }
}
