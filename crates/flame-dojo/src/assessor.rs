//! Sentence assessor for Flame sentences
//!
//! Splits a submission on the four section markers, grades each section by
//! length and vague-word count, and folds the grades into a [`Report`].

use flame_core::{
    Category, OverallStatus, Report, SegmentAssessment, Tag, CORRECTION_REP_COUNT,
};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Filler vocabulary counted as a clarity penalty
pub const VAGUE_WORDS: [&str; 6] = ["stuff", "things", "maybe", "kinda", "sort of", "sorta"];

/// Segments shorter than this (in characters) fail outright
pub const MIN_SEGMENT_CHARS: usize = 5;

/// Segments shorter than this (in characters) are at best borderline
pub const SOLID_SEGMENT_CHARS: usize = 20;

const EMPTY_HARD_TRUTH: &str =
    "You submitted an empty signal. The dojo cannot assess what does not exist.";
const EMPTY_CORRECTIONS: [&str; CORRECTION_REP_COUNT] = [
    "Write one complete Flame sentence using all four tags.",
    "Make sure each section has at least one clear phrase.",
    "Remove filler words like 'stuff' or 'things'.",
];

const NOT_READY_HARD_TRUTH: &str = "Your sentence is missing critical structure. Every Flame sentence must include [INTENT], [CONTEXT], [BOUNDARY], and [ACTION] with real content, not placeholders.";
const STRONG_HARD_TRUTH: &str = "You are showing strong structural discipline. The next level is precision: refine each phrase until there is zero ambiguity.";
const BORDERLINE_HARD_TRUTH: &str = "You have the frame, but parts of your sentence are still vague or underpowered. The dojo requires sharper context and boundaries.";

const SCENARIO_REP: &str = "Run this sentence against a real scenario and adjust any phrase that could be misread by a human or an AI.";
const CUT_VAGUE_REP: &str =
    "Cut every vague word (like 'stuff' or 'things') and replace it with a specific noun or action.";

static SHARED: Lazy<SentenceAssessor> = Lazy::new(SentenceAssessor::new);

/// Assess a submission with the shared assessor
pub fn assess(input: &str) -> Report {
    SHARED.assess(input)
}

/// Correction rep for a section that did not pass
pub fn correction_for(tag: Tag) -> &'static str {
    match tag {
        Tag::Intent => {
            "Tighten your [INTENT] section — state one clear outcome, not a soft desire."
        }
        Tag::Context => {
            "Upgrade your [CONTEXT] section — name who this applies to and where it operates."
        }
        Tag::Boundary => {
            "Strengthen your [BOUNDARY] section — define what you will NOT allow, especially around harm and misuse."
        }
        Tag::Action => {
            "Clarify your [ACTION] section — list concrete steps instead of vague intentions."
        }
    }
}

/// Hard-truth paragraph for a verdict on a non-empty submission
pub fn hard_truth_for(overall: OverallStatus) -> &'static str {
    match overall {
        OverallStatus::NotReady => NOT_READY_HARD_TRUTH,
        OverallStatus::Strong => STRONG_HARD_TRUTH,
        OverallStatus::Borderline => BORDERLINE_HARD_TRUTH,
    }
}

/// Rule-based assessor for four-tag sentences
pub struct SentenceAssessor {
    vague_patterns: Vec<Regex>,
}

impl SentenceAssessor {
    /// Create a new assessor with the built-in vague vocabulary
    pub fn new() -> Self {
        // Whole words only; a space inside a phrase matches any whitespace run.
        // Patterns are lowercase and match against lowercased text.
        let vague_patterns = VAGUE_WORDS
            .iter()
            .map(|word| format!(r"\b{}\b", word.replace(' ', r"\s+")))
            .filter_map(|p| Regex::new(&p).ok())
            .collect();

        Self { vague_patterns }
    }

    /// Count vague-word occurrences in a span of text
    pub fn count_vague_words(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }

        let lowered = text.to_lowercase();
        self.vague_patterns
            .iter()
            .map(|pattern| pattern.find_iter(&lowered).count())
            .sum()
    }

    /// Grade one segment
    pub fn categorize(&self, segment: &str) -> Category {
        let length = segment.chars().count();
        if length < MIN_SEGMENT_CHARS {
            return Category::Fail;
        }

        if length < SOLID_SEGMENT_CHARS || self.count_vague_words(segment) > 0 {
            Category::Borderline
        } else {
            Category::Pass
        }
    }

    /// Assess a submission and build its report
    pub fn assess(&self, input: &str) -> Report {
        let input = input.trim();
        if input.is_empty() {
            debug!("Blank submission, returning fixed report");
            return blank_report();
        }

        let positions = locate_markers(input);
        debug!("Marker positions: {:?}", positions);

        let segments: Vec<SegmentAssessment> = Tag::ALL
            .iter()
            .zip(positions.iter())
            .map(|(&tag, position)| {
                let text = extract_segment(input, tag, &positions).to_string();
                SegmentAssessment {
                    tag,
                    present: position.is_some(),
                    category: self.categorize(&text),
                    vague_words: self.count_vague_words(&text),
                    text,
                }
            })
            .collect();

        let has_all_tags = positions.iter().all(Option::is_some);
        let fail_count = segments
            .iter()
            .filter(|segment| segment.category == Category::Fail)
            .count();
        let all_pass = segments
            .iter()
            .all(|segment| segment.category == Category::Pass);
        let total_vague: usize = segments.iter().map(|segment| segment.vague_words).sum();

        let overall = if !has_all_tags || fail_count >= 2 {
            OverallStatus::NotReady
        } else if all_pass && total_vague == 0 {
            OverallStatus::Strong
        } else {
            OverallStatus::Borderline
        };

        debug!(
            "Assessed submission: overall={}, fails={}, vague={}",
            overall, fail_count, total_vague
        );

        Report {
            submission: Some(input.to_string()),
            overall,
            hard_truth: hard_truth_for(overall).to_string(),
            corrections: correction_reps(&segments),
            final_status: overall.final_status(),
            segments,
        }
    }
}

impl Default for SentenceAssessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of the first occurrence of each marker, in canonical tag order
pub fn locate_markers(input: &str) -> [Option<usize>; 4] {
    Tag::ALL.map(|tag| input.find(tag.marker()))
}

/// Text belonging to `tag`: from just after its marker up to the nearest
/// marker position strictly past that point, trimmed. Empty when the marker
/// is absent.
pub fn extract_segment<'a>(input: &'a str, tag: Tag, positions: &[Option<usize>; 4]) -> &'a str {
    let Some(tag_index) = input.find(tag.marker()) else {
        return "";
    };
    let start = tag_index + tag.marker().len();

    let end = positions
        .iter()
        .flatten()
        .copied()
        .filter(|&position| position > start)
        .min()
        .unwrap_or(input.len());

    input[start..end].trim()
}

fn correction_reps(segments: &[SegmentAssessment]) -> [String; CORRECTION_REP_COUNT] {
    let mut reps: Vec<&str> = segments
        .iter()
        .filter(|segment| segment.category != Category::Pass)
        .map(|segment| correction_for(segment.tag))
        .collect();

    if reps.is_empty() {
        reps.push(SCENARIO_REP);
    }
    while reps.len() < CORRECTION_REP_COUNT {
        reps.push(CUT_VAGUE_REP);
    }

    [reps[0].to_string(), reps[1].to_string(), reps[2].to_string()]
}

fn blank_report() -> Report {
    let overall = OverallStatus::NotReady;
    Report {
        submission: None,
        overall,
        segments: Vec::new(),
        hard_truth: EMPTY_HARD_TRUTH.to_string(),
        corrections: EMPTY_CORRECTIONS.map(str::to_string),
        final_status: overall.final_status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vague_words_are_whole_words_and_case_insensitive() {
        let assessor = SentenceAssessor::new();

        assert_eq!(assessor.count_vague_words("Stuff"), 1);
        assert_eq!(assessor.count_vague_words("STUFFING the form"), 0);
        assert_eq!(assessor.count_vague_words("maybe things, MAYBE not"), 3);
        assert_eq!(assessor.count_vague_words("it is sort   of done"), 1);
        assert_eq!(assessor.count_vague_words("sort\nof"), 1);
        assert_eq!(assessor.count_vague_words("sorta kinda"), 2);
        assert_eq!(assessor.count_vague_words("sortation"), 0);
        assert_eq!(assessor.count_vague_words(""), 0);
    }

    #[test]
    fn test_vague_words_use_lowercasing_not_case_folding() {
        let assessor = SentenceAssessor::new();
        // Long s folds to 's' but lowercases to itself.
        assert_eq!(assessor.count_vague_words("ſtuff"), 0);
        assert_eq!(assessor.count_vague_words("ſtuff and StUfF"), 1);
        assert_eq!(assessor.count_vague_words("KINDA"), 1);
    }

    #[test]
    fn test_categorize_thresholds() {
        let assessor = SentenceAssessor::new();

        assert_eq!(assessor.categorize(""), Category::Fail);
        assert_eq!(assessor.categorize("abcd"), Category::Fail);
        assert_eq!(assessor.categorize("abcde"), Category::Borderline);
        assert_eq!(assessor.categorize("nineteen characters"), Category::Borderline);
        assert_eq!(assessor.categorize("twenty characters ok"), Category::Pass);
        assert_eq!(
            assessor.categorize("a long segment with some stuff inside"),
            Category::Borderline
        );
    }

    #[test]
    fn test_categorize_counts_characters_not_bytes() {
        let assessor = SentenceAssessor::new();
        // Four characters, twelve bytes.
        assert_eq!(assessor.categorize("🔥🔥🔥🔥"), Category::Fail);
    }

    #[test]
    fn test_extract_segment_uses_nearest_following_marker() {
        let input = "[ACTION] act now [INTENT] goal [CONTEXT] here";
        let positions = locate_markers(input);

        assert_eq!(extract_segment(input, Tag::Action, &positions), "act now");
        assert_eq!(extract_segment(input, Tag::Intent, &positions), "goal");
        assert_eq!(extract_segment(input, Tag::Context, &positions), "here");
        assert_eq!(extract_segment(input, Tag::Boundary, &positions), "");
    }

    #[test]
    fn test_extract_segment_ignores_marker_at_segment_start() {
        // A marker sitting exactly at the start position is not strictly past it.
        let input = "[INTENT][CONTEXT] shared text [ACTION] go";
        let positions = locate_markers(input);

        assert_eq!(
            extract_segment(input, Tag::Intent, &positions),
            "[CONTEXT] shared text"
        );
        assert_eq!(extract_segment(input, Tag::Context, &positions), "shared text");
    }

    #[test]
    fn test_blank_report() {
        let report = assess("   \n\t ");
        assert_eq!(report.overall, OverallStatus::NotReady);
        assert_eq!(report.final_status.as_str(), "REJECTED – REVISE AND RESUBMIT");
        assert!(report.submission.is_none());
        assert!(report.segments.is_empty());
    }

    #[test]
    fn test_missing_marker_is_not_ready() {
        let report = assess(
            "[INTENT] launch the beta program [CONTEXT] for the data team only [ACTION] ship the build on Monday",
        );
        assert_eq!(report.overall, OverallStatus::NotReady);
        assert_eq!(report.category(Tag::Boundary), Some(Category::Fail));
        assert!(!report.segments[2].present);
    }

    #[test]
    fn test_all_pass_is_strong() {
        let report = assess(
            "[INTENT] Ship feature X to the pilot group [CONTEXT] for internal pilot users [BOUNDARY] no use of customer data without consent [ACTION] deploy behind a flag and monitor for 48 hours",
        );
        assert_eq!(report.overall, OverallStatus::Strong);
        assert_eq!(report.corrections[0], SCENARIO_REP);
        assert_eq!(report.corrections[1], CUT_VAGUE_REP);
        assert_eq!(report.corrections[2], CUT_VAGUE_REP);
    }

    #[test]
    fn test_short_intent_is_borderline() {
        let report = assess(
            "[INTENT] Ship feature X [CONTEXT] for internal pilot users [BOUNDARY] no use of customer data without consent [ACTION] deploy behind a flag and monitor for 48 hours",
        );
        assert_eq!(report.category(Tag::Intent), Some(Category::Borderline));
        assert_eq!(report.category(Tag::Context), Some(Category::Pass));
        assert_eq!(report.category(Tag::Boundary), Some(Category::Pass));
        assert_eq!(report.category(Tag::Action), Some(Category::Pass));
        assert_eq!(report.overall, OverallStatus::Borderline);
    }

    #[test]
    fn test_vague_short_sentence_is_not_strong() {
        let report = assess("[INTENT] do stuff [CONTEXT] whatever [BOUNDARY] idk [ACTION] maybe fix it");
        assert_ne!(report.overall, OverallStatus::Strong);
        assert_ne!(report.category(Tag::Intent), Some(Category::Pass));
        assert_eq!(report.category(Tag::Boundary), Some(Category::Fail));
    }

    #[test]
    fn test_single_fail_with_all_tags_is_borderline() {
        let report = assess(
            "[INTENT] publish the quarterly report [CONTEXT] finance team in Berlin office [BOUNDARY] no [ACTION] email the PDF to every department head",
        );
        assert_eq!(report.category(Tag::Boundary), Some(Category::Fail));
        assert_eq!(report.overall, OverallStatus::Borderline);
        assert_eq!(report.corrections[0], correction_for(Tag::Boundary));
    }

    #[test]
    fn test_corrections_keep_first_three_in_tag_order() {
        let report = assess("[INTENT] a [CONTEXT] b [BOUNDARY] c [ACTION] d");
        assert_eq!(report.corrections[0], correction_for(Tag::Intent));
        assert_eq!(report.corrections[1], correction_for(Tag::Context));
        assert_eq!(report.corrections[2], correction_for(Tag::Boundary));
    }

    #[test]
    fn test_assess_is_idempotent() {
        let input = "[INTENT] do stuff [CONTEXT] whatever [BOUNDARY] idk [ACTION] maybe fix it";
        assert_eq!(assess(input).render(), assess(input).render());
    }
}
