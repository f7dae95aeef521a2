//! Go-to-definition.

use tracing::trace;

use crate::base::CodeRange;
use crate::model::{CodeElement, CodeModel, Phrase, PhraseKind, VariableId, VariableScope};

/// Where the definition of `phrase` is written.
///
/// - a type goes to the construct declaring it,
/// - a verb, a formal complement or a whole call goes to the called
///   procedure, found through the phrase's sentence,
/// - a field goes to its declaration statement, and any other variable to
///   its declaration range.
///
/// Anything else, or a phrase that did not resolve, has no definition.
pub fn goto_definition(model: &CodeModel, phrase: &Phrase) -> Option<CodeRange> {
    let target = match &phrase.kind {
        PhraseKind::Type(Some(ty)) => {
            let construct = model.symbols().ty(*ty)?.construct?;
            model.construct(construct).map(|c| c.range)
        }
        PhraseKind::Verb(_) | PhraseKind::Complement | PhraseKind::Container(_) => {
            let sentence = model.sentence(phrase.sentence?)?;
            model.procedure(sentence.callee?).map(|p| p.range)
        }
        PhraseKind::Variable(Some(variable)) => variable_definition(model, *variable),
        _ => None,
    };
    trace!(model = ?model.id(), text = %phrase.text, ?target, "goto definition");
    target
}

fn variable_definition(model: &CodeModel, variable: VariableId) -> Option<CodeRange> {
    let def = model.symbols().variable(variable)?;
    if let VariableScope::Field(owner) = def.scope {
        let declaration = model.construct(owner).and_then(|construct| {
            construct.code.iter().find_map(|element| match element {
                CodeElement::Field(field) if field.variable == variable => Some(field.range),
                _ => None,
            })
        });
        if declaration.is_some() {
            return declaration;
        }
    }
    def.declaration
}
