//! Dojo actions: the presentation-layer adapter
//!
//! Every user action is a direct call that takes the content it works on and
//! returns the status text to show. Nothing here keeps a "last report"; the
//! caller owns it and passes it back in.

use flame_core::{ClipboardProvider, Report, VoiceProvider};
use flame_dojo::SymbolCard;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

pub const VOICE_UNAVAILABLE: &str =
    "Voice mode is not available on this machine. Set FLAME_VOICE_COMMAND to a speech program.";
pub const VOICE_READY: &str =
    "Voice engine detected. Type 'speak lesson' to hear the foundation lesson.";

/// How a status line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The action went ahead
    Success,
    /// The action needs content that does not exist yet
    MissingContent,
    /// The platform does not offer the capability
    Unsupported,
    /// The capability exists but the call failed
    Failed,
}

/// User-visible outcome of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What is being copied, which selects the status wording
#[derive(Debug, Clone, Copy)]
enum CopyTarget {
    Sentence,
    Report,
}

impl CopyTarget {
    fn missing(&self) -> &'static str {
        match self {
            CopyTarget::Sentence => "Nothing to copy. Forge a structured sentence first.",
            CopyTarget::Report => "Run an assessment first. The dojo copies reports, not empty pages.",
        }
    }

    fn copied(&self) -> &'static str {
        match self {
            CopyTarget::Sentence => "Structured sentence copied to clipboard.",
            CopyTarget::Report => "Assessment report copied to clipboard for instructor review.",
        }
    }

    fn failed(&self) -> &'static str {
        match self {
            CopyTarget::Sentence => "Unable to access clipboard. Select and copy manually.",
            CopyTarget::Report => {
                "Unable to access clipboard. Select and copy the report manually."
            }
        }
    }

    fn unsupported(&self) -> &'static str {
        match self {
            CopyTarget::Sentence => "Clipboard not supported. Select and copy manually.",
            CopyTarget::Report => "Clipboard not supported. Select and copy the report manually.",
        }
    }
}

/// Voice and clipboard actions over injected providers
#[derive(Clone)]
pub struct DojoActions {
    voice: Arc<dyn VoiceProvider>,
    clipboard: Arc<dyn ClipboardProvider>,
}

impl DojoActions {
    pub fn new(voice: Arc<dyn VoiceProvider>, clipboard: Arc<dyn ClipboardProvider>) -> Self {
        Self { voice, clipboard }
    }

    pub fn voice_available(&self) -> bool {
        self.voice.is_available()
    }

    pub fn clipboard_available(&self) -> bool {
        self.clipboard.is_available()
    }

    /// Status line shown next to the foundation lesson before any action
    pub fn voice_readiness(&self) -> &'static str {
        if self.voice.is_available() {
            VOICE_READY
        } else {
            VOICE_UNAVAILABLE
        }
    }

    /// Read the foundation lesson. Returns `None` when there is no lesson text.
    pub async fn read_lesson(&self, lesson: &str) -> Option<StatusMessage> {
        if !self.voice.is_available() {
            return Some(StatusMessage::new(StatusKind::Unsupported, VOICE_UNAVAILABLE));
        }
        if lesson.trim().is_empty() {
            return None;
        }
        self.speak(lesson).await;
        Some(StatusMessage::new(
            StatusKind::Success,
            "Reading foundation lesson...",
        ))
    }

    /// Read the symbol card currently shown
    pub async fn read_symbol_card(&self, card: &SymbolCard) -> StatusMessage {
        if !self.voice.is_available() {
            return StatusMessage::new(StatusKind::Unsupported, VOICE_UNAVAILABLE);
        }
        self.speak(&card.narration()).await;
        StatusMessage::new(StatusKind::Success, "Reading current symbol card...")
    }

    /// Read a forged sentence
    pub async fn read_sentence(&self, sentence: Option<&str>) -> StatusMessage {
        if !self.voice.is_available() {
            return StatusMessage::new(StatusKind::Unsupported, VOICE_UNAVAILABLE);
        }
        let Some(sentence) = sentence.filter(|s| !s.trim().is_empty()) else {
            return StatusMessage::new(
                StatusKind::MissingContent,
                "Nothing to read yet. Forge a structured sentence first.",
            );
        };
        self.speak(sentence).await;
        StatusMessage::new(StatusKind::Success, "Reading structured Flame sentence...")
    }

    /// Read an assessment report
    pub async fn read_report(&self, report: Option<&Report>) -> StatusMessage {
        if !self.voice.is_available() {
            return StatusMessage::new(StatusKind::Unsupported, VOICE_UNAVAILABLE);
        }
        let Some(report) = report else {
            return StatusMessage::new(
                StatusKind::MissingContent,
                "Run an assessment first. The dojo reads reports after they exist.",
            );
        };
        self.speak(&report.render()).await;
        StatusMessage::new(StatusKind::Success, "Reading assessment report...")
    }

    /// Copy a forged sentence to the clipboard
    pub async fn copy_sentence(&self, sentence: Option<&str>) -> StatusMessage {
        let sentence = sentence.filter(|s| !s.trim().is_empty());
        self.copy(CopyTarget::Sentence, sentence.map(str::to_string))
            .await
    }

    /// Copy an assessment report to the clipboard
    pub async fn copy_report(&self, report: Option<&Report>) -> StatusMessage {
        self.copy(CopyTarget::Report, report.map(Report::render))
            .await
    }

    async fn copy(&self, target: CopyTarget, text: Option<String>) -> StatusMessage {
        let Some(text) = text else {
            return StatusMessage::new(StatusKind::MissingContent, target.missing());
        };
        if !self.clipboard.is_available() {
            return StatusMessage::new(StatusKind::Unsupported, target.unsupported());
        }

        match self.clipboard.write_text(&text).await {
            Ok(()) => StatusMessage::new(StatusKind::Success, target.copied()),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                StatusMessage::new(StatusKind::Failed, target.failed())
            }
        }
    }

    /// Stop whatever is being read aloud
    pub async fn stop_speaking(&self) {
        if !self.voice.is_speaking().await {
            debug!("Nothing is being read");
            return;
        }
        if let Err(e) = self.voice.cancel().await {
            warn!("Failed to stop speech: {}", e);
        }
    }

    // Speech failures are logged only; the status line still reports reading.
    async fn speak(&self, text: &str) {
        if let Err(e) = self.voice.speak(text).await {
            warn!("TTS error: {}", e);
        }
    }
}
