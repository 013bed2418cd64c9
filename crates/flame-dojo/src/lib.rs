//! Training modes for the Flame Language dojo

mod assessor;
mod forge;
mod lesson;
mod symbols;


pub use assessor::{
    assess, correction_for, extract_segment, hard_truth_for, locate_markers, SentenceAssessor,
    MIN_SEGMENT_CHARS, SOLID_SEGMENT_CHARS, VAGUE_WORDS,
};
pub use forge::{forge, BLANK_SIGNAL_WARNING, MAX_INTENT_CHARS};
pub use lesson::FOUNDATION_LESSON;
pub use symbols::{
    AnswerOutcome, SymbolCard, SymbolTrainer, SELECT_PROMPT, SYMBOL_CARDS, SYMBOL_QUESTION,
};

// Re-export core types
pub use flame_core::{Category, Error, OverallStatus, Report, Result, Tag};
