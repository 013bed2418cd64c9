//! Sentence forge: wraps a plain sentence into the four-tag template

use flame_core::{Error, Result};

/// Longest intent kept verbatim, in characters
pub const MAX_INTENT_CHARS: usize = 140;

/// Characters kept before the ellipsis when an intent is cut
const CUT_INTENT_CHARS: usize = MAX_INTENT_CHARS - 3;

/// Shown when there is nothing to forge
pub const BLANK_SIGNAL_WARNING: &str =
    "Write a plain sentence first. The dojo cannot structure a blank signal.";

const CONTEXT_SCAFFOLD: &str =
    "Clearly state who this applies to and the environment you are operating in.";
const BOUNDARY_SCAFFOLD: &str =
    "No harm, no misuse, no manipulation, and full respect for ethical and legal limits.";
const ACTION_SCAFFOLD: &str =
    "Describe the concrete steps you will take to execute this safely and responsibly.";

/// Turn a plain sentence into a structured Flame sentence.
///
/// The sentence becomes the `[INTENT]` section; the other three sections are
/// scaffolds for the learner to rewrite.
pub fn forge(raw: &str) -> Result<String> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput(BLANK_SIGNAL_WARNING.to_string()));
    }

    let intent = shorten_intent(input);
    Ok(format!(
        "[INTENT] {} — [CONTEXT] {} — [BOUNDARY] {} — [ACTION] {}",
        intent, CONTEXT_SCAFFOLD, BOUNDARY_SCAFFOLD, ACTION_SCAFFOLD
    ))
}

fn shorten_intent(input: &str) -> String {
    if input.chars().count() <= MAX_INTENT_CHARS {
        return input.to_string();
    }

    let mut intent: String = input.chars().take(CUT_INTENT_CHARS).collect();
    intent.push_str("...");
    intent
}
