//! Symbol trainer: match each Flame symbol to the role it marks

use flame_core::{Error, Result, Tag};
use log::debug;
use serde::Serialize;

/// Question shown with every card
pub const SYMBOL_QUESTION: &str = "What does this symbol represent in Flame Language training?";

/// Shown before the current card is answered
pub const SELECT_PROMPT: &str = "Select the correct role.";

const CORRECT_FEEDBACK: &str =
    "Correct. Lock in that mapping and move to the next card when ready.";

/// One flash card in the trainer deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolCard {
    pub symbol: &'static str,
    pub tag: Tag,
    pub prompt: &'static str,
    /// Answer choices in display order; exactly one equals `tag.role()`
    pub options: [&'static str; 4],
}

impl SymbolCard {
    /// Role the learner has to pick
    pub fn role(&self) -> &'static str {
        self.tag.role()
    }

    /// Text read aloud for this card
    pub fn narration(&self) -> String {
        format!("{} {}. {}", self.symbol, self.tag.marker(), self.prompt)
    }
}

/// The fixed deck, in teaching order
pub static SYMBOL_CARDS: [SymbolCard; 4] = [
    SymbolCard {
        symbol: "🔥",
        tag: Tag::Intent,
        prompt: "🔥 marks structured intent — the focused signal of what you are actually trying to do.",
        options: [
            "Intent / Goal",
            "Boundary / Rule",
            "Context / Situation",
            "Action / Execution",
        ],
    },
    SymbolCard {
        symbol: "🧠",
        tag: Tag::Context,
        prompt: "🧠 represents context — who this applies to, and where the situation is happening.",
        options: [
            "Boundary / Rule",
            "Context / Situation",
            "Action / Execution",
            "Intent / Goal",
        ],
    },
    SymbolCard {
        symbol: "🛡️",
        tag: Tag::Boundary,
        prompt: "🛡️ represents boundaries — the rules, ethics, and red lines that must not be crossed.",
        options: [
            "Action / Execution",
            "Context / Situation",
            "Boundary / Rule",
            "Intent / Goal",
        ],
    },
    SymbolCard {
        symbol: "⚙️",
        tag: Tag::Action,
        prompt: "⚙️ represents action — the steps you will actually take to carry out the intent safely.",
        options: [
            "Action / Execution",
            "Boundary / Rule",
            "Context / Situation",
            "Intent / Goal",
        ],
    },
];

/// Outcome of answering the current card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub chosen: String,
    pub expected: &'static str,
    pub feedback: String,
}

/// Quiz state over the fixed deck
#[derive(Debug, Clone, Default)]
pub struct SymbolTrainer {
    index: usize,
    correct: u32,
    attempts: u32,
    answered: bool,
}

impl SymbolTrainer {
    /// Create a trainer positioned on the first card
    pub fn new() -> Self {
        Self::default()
    }

    /// Card currently shown
    pub fn current(&self) -> &'static SymbolCard {
        &SYMBOL_CARDS[self.index]
    }

    /// Whether the current card has been answered
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Answer the current card with a role, or a tag name such as `boundary`
    /// standing for its role. Only the first answer per card is scored.
    pub fn answer(&mut self, option: &str) -> Result<AnswerOutcome> {
        let card = self.current();

        if self.answered {
            return Err(Error::AlreadyAnswered(format!(
                "{} {} was already answered; move to the next card",
                card.symbol,
                card.tag.marker()
            )));
        }

        let option = Tag::from_str(option)
            .map(|tag| tag.role())
            .unwrap_or_else(|| option.trim());
        if !card.options.contains(&option) {
            return Err(Error::InvalidInput(format!(
                "'{}' is not one of the options for {}",
                option,
                card.tag.marker()
            )));
        }

        self.attempts += 1;
        self.answered = true;

        let correct = option == card.role();
        if correct {
            self.correct += 1;
        }
        debug!(
            "Symbol {} answered '{}' (correct: {})",
            card.tag.marker(),
            option,
            correct
        );

        let feedback = if correct {
            CORRECT_FEEDBACK.to_string()
        } else {
            format!("Incorrect. Correct mapping: {}.", card.role())
        };

        Ok(AnswerOutcome {
            correct,
            chosen: option.to_string(),
            expected: card.role(),
            feedback,
        })
    }

    /// Answer the current card by 1-based option number
    pub fn answer_by_number(&mut self, number: usize) -> Result<AnswerOutcome> {
        let option = number
            .checked_sub(1)
            .and_then(|index| self.current().options.get(index))
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "choose an option between 1 and {}",
                    self.current().options.len()
                ))
            })?;
        self.answer(option)
    }

    /// Move to the next card, wrapping after the last one
    pub fn next(&mut self) -> &'static SymbolCard {
        self.index = (self.index + 1) % SYMBOL_CARDS.len();
        self.answered = false;
        self.current()
    }

    /// Running score line
    pub fn score_line(&self) -> String {
        format!("Score: {} / {}", self.correct, self.attempts)
    }
}
