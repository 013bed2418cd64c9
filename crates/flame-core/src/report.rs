//! Assessment report and its plain-text layout

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Category, FinalStatus, OverallStatus, SegmentAssessment, Tag};

/// Title line that opens every report
pub const REPORT_TITLE: &str = "Flame Language Assessment Report — Curriculum One";

/// Number of correction reps printed on every report
pub const CORRECTION_REP_COUNT: usize = 3;

/// Result of one assessment. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Trimmed submission; `None` for the blank-input report
    pub submission: Option<String>,
    pub overall: OverallStatus,
    /// Per-tag results in canonical order; empty for the blank-input report
    pub segments: Vec<SegmentAssessment>,
    pub hard_truth: String,
    pub corrections: [String; CORRECTION_REP_COUNT],
    pub final_status: FinalStatus,
}

impl Report {
    /// Category for a tag, if the report carries per-segment results
    pub fn category(&self, tag: Tag) -> Option<Category> {
        self.segments
            .iter()
            .find(|segment| segment.tag == tag)
            .map(|segment| segment.category)
    }

    /// Total vague words across all segments
    pub fn total_vague_words(&self) -> usize {
        self.segments.iter().map(|segment| segment.vague_words).sum()
    }

    /// Render the report in its fixed plain-text layout
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f)?;

        if let Some(submission) = &self.submission {
            writeln!(f, "Submitted Flame Sentence:")?;
            writeln!(f, "{}", submission)?;
            writeln!(f)?;
        }

        writeln!(f, "Overall Status: {}", self.overall)?;
        writeln!(f)?;

        if !self.segments.is_empty() {
            writeln!(f, "Categories:")?;
            for segment in &self.segments {
                writeln!(f, "- {}: {}", segment.tag.category_label(), segment.category)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Hard Truth:")?;
        writeln!(f, "{}", self.hard_truth)?;
        writeln!(f)?;

        writeln!(f, "Correction Reps:")?;
        for (index, rep) in self.corrections.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, rep)?;
        }
        writeln!(f)?;

        write!(f, "Final Status: {}", self.final_status)
    }
}
