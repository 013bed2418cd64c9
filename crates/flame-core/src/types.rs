//! Common types used across the Flame Language dojo

use serde::{Deserialize, Serialize};

/// The four sections of a Flame sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Intent,
    Context,
    Boundary,
    Action,
}

impl Tag {
    /// All tags in canonical order
    pub const ALL: [Tag; 4] = [Tag::Intent, Tag::Context, Tag::Boundary, Tag::Action];

    /// Get the literal marker that opens this section
    pub fn marker(&self) -> &'static str {
        match self {
            Tag::Intent => "[INTENT]",
            Tag::Context => "[CONTEXT]",
            Tag::Boundary => "[BOUNDARY]",
            Tag::Action => "[ACTION]",
        }
    }

    /// Get the label used on the report's category lines
    pub fn category_label(&self) -> &'static str {
        match self {
            Tag::Intent => "Intent Clarity",
            Tag::Context => "Context Specificity",
            Tag::Boundary => "Boundary Strength",
            Tag::Action => "Action Precision",
        }
    }

    /// Get the role name taught by the symbol trainer
    pub fn role(&self) -> &'static str {
        match self {
            Tag::Intent => "Intent / Goal",
            Tag::Context => "Context / Situation",
            Tag::Boundary => "Boundary / Rule",
            Tag::Action => "Action / Execution",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Tag> {
        match s.trim().trim_matches(|c: char| c == '[' || c == ']').to_lowercase().as_str() {
            "intent" => Some(Tag::Intent),
            "context" => Some(Tag::Context),
            "boundary" => Some(Tag::Boundary),
            "action" => Some(Tag::Action),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Classification of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Pass,
    Borderline,
    Fail,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pass => "PASS",
            Category::Borderline => "BORDERLINE",
            Category::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate verdict over all four segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "Not Ready")]
    NotReady,
    Borderline,
    Strong,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::NotReady => "Not Ready",
            OverallStatus::Borderline => "Borderline",
            OverallStatus::Strong => "Strong",
        }
    }

    /// Final status line that goes with this verdict
    pub fn final_status(&self) -> FinalStatus {
        match self {
            OverallStatus::NotReady => FinalStatus::Rejected,
            OverallStatus::Borderline | OverallStatus::Strong => FinalStatus::Continue,
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closing line of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalStatus {
    #[serde(rename = "REJECTED – REVISE AND RESUBMIT")]
    Rejected,
    #[serde(rename = "PASS – CONTINUE TRAINING")]
    Continue,
}

impl FinalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalStatus::Rejected => "REJECTED – REVISE AND RESUBMIT",
            FinalStatus::Continue => "PASS – CONTINUE TRAINING",
        }
    }
}

impl std::fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assessment of one tagged section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentAssessment {
    pub tag: Tag,
    /// Trimmed text between the marker and the next marker; empty when the marker is absent
    pub text: String,
    pub present: bool,
    pub category: Category,
    pub vague_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parsing() {
        assert_eq!(Tag::from_str("[INTENT]"), Some(Tag::Intent));
        assert_eq!(Tag::from_str("boundary"), Some(Tag::Boundary));
        assert_eq!(Tag::from_str(" Action "), Some(Tag::Action));
        assert_eq!(Tag::from_str("[GOAL]"), None);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(OverallStatus::NotReady.to_string(), "Not Ready");
        assert_eq!(
            OverallStatus::NotReady.final_status().to_string(),
            "REJECTED – REVISE AND RESUBMIT"
        );
        assert_eq!(
            OverallStatus::Strong.final_status().to_string(),
            "PASS – CONTINUE TRAINING"
        );
        assert_eq!(Category::Borderline.to_string(), "BORDERLINE");
    }

    #[test]
    fn test_serialized_labels_match_display() {
        let json = serde_json::to_string(&OverallStatus::NotReady).unwrap();
        assert_eq!(json, "\"Not Ready\"");
        let json = serde_json::to_string(&FinalStatus::Continue).unwrap();
        assert_eq!(json, "\"PASS – CONTINUE TRAINING\"");
        let json = serde_json::to_string(&Category::Fail).unwrap();
        assert_eq!(json, "\"FAIL\"");
    }
}
