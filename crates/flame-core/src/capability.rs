//! Capability abstraction for optional platform services
//!
//! Speech and clipboard access may be missing on a given machine. Callers ask
//! `is_available()` first and degrade to a status message instead of failing.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Optional platform capabilities used by the dojo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    Voice,
    Clipboard,
}

impl CapabilityKind {
    /// Get the display name for this capability
    pub fn display_name(&self) -> &'static str {
        match self {
            CapabilityKind::Voice => "Voice",
            CapabilityKind::Clipboard => "Clipboard",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Text-to-speech output
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Whether speech can be produced on this machine
    fn is_available(&self) -> bool;

    /// Start reading `text` aloud, cancelling anything still being read
    async fn speak(&self, text: &str) -> Result<()>;

    /// Stop the current utterance, if any
    async fn cancel(&self) -> Result<()>;

    /// Whether an utterance is still being read
    async fn is_speaking(&self) -> bool {
        false
    }
}

/// System clipboard output
#[async_trait]
pub trait ClipboardProvider: Send + Sync {
    /// Whether the clipboard can be written on this machine
    fn is_available(&self) -> bool;

    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<()>;
}
