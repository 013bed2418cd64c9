//! Voice and clipboard providers backed by platform programs

use async_trait::async_trait;
use flame_core::{CapabilityKind, ClipboardProvider, DojoConfig, Error, Result, VoiceProvider};
use log::{debug, info, warn};
use std::process::{Command as StdCommand, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

/// Speech programs tried in order when none is configured
const VOICE_CANDIDATES: &[&str] = &["say", "espeak-ng", "espeak", "spd-say"];

/// Clipboard programs tried in order when none is configured
const CLIPBOARD_CANDIDATES: &[&str] = &[
    "pbcopy",
    "wl-copy",
    "xclip -selection clipboard",
    "xsel --clipboard --input",
    "clip",
];

/// A program plus its fixed leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split a whitespace-separated command line
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Check if a program is on the PATH
pub fn is_program_installed(program: &str) -> bool {
    let finder = if cfg!(target_os = "windows") { "where" } else { "which" };
    StdCommand::new(finder)
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn resolve(configured: Option<&str>, candidates: &[&str]) -> Option<CommandLine> {
    if let Some(line) = configured {
        let command = CommandLine::parse(line)?;
        if is_program_installed(&command.program) {
            return Some(command);
        }
        warn!("Configured program '{}' was not found", command.program);
        return None;
    }

    candidates
        .iter()
        .filter_map(|line| CommandLine::parse(line))
        .find(|command| is_program_installed(&command.program))
}

/// Text-to-speech through a program that takes the text as its last argument,
/// after a `--` separator
pub struct CommandVoice {
    command: Option<CommandLine>,
    current: Mutex<Option<Child>>,
}

impl CommandVoice {
    /// Use an explicit command; unavailable if it cannot be found
    pub fn new(command: CommandLine) -> Self {
        let command = if is_program_installed(&command.program) {
            Some(command)
        } else {
            None
        };
        Self::with_resolved(command)
    }

    /// Build from configuration, auto-detecting a program when none is set
    pub fn from_config(config: &DojoConfig) -> Self {
        if !config.voice_enabled {
            info!("Voice disabled by configuration");
            return Self::with_resolved(None);
        }

        let command = resolve(config.voice_command.as_deref(), VOICE_CANDIDATES);
        match &command {
            Some(command) => info!("Voice engine: {}", command.program),
            None => info!("No voice engine found"),
        }
        Self::with_resolved(command)
    }

    fn with_resolved(command: Option<CommandLine>) -> Self {
        Self {
            command,
            current: Mutex::new(None),
        }
    }
}

/// Speech invocation; `--` keeps text starting with a dash from reading as a flag
fn speech_command(command: &CommandLine, text: &str) -> Command {
    let mut speech = command.command();
    speech.arg("--").arg(text);
    speech
}

async fn stop_child(child: &mut Child) -> Result<()> {
    if matches!(child.try_wait(), Ok(Some(_))) {
        return Ok(());
    }
    child.kill().await?;
    Ok(())
}

#[async_trait]
impl VoiceProvider for CommandVoice {
    fn is_available(&self) -> bool {
        self.command.is_some()
    }

    async fn speak(&self, text: &str) -> Result<()> {
        let command = self
            .command
            .as_ref()
            .ok_or_else(|| Error::CapabilityUnavailable(CapabilityKind::Voice.to_string()))?;

        let mut current = self.current.lock().await;
        if let Some(mut previous) = current.take() {
            debug!("Cancelling previous utterance");
            if let Err(e) = stop_child(&mut previous).await {
                warn!("Failed to stop previous utterance: {}", e);
            }
        }

        let child = speech_command(command, text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Capability(format!("failed to start {}: {}", command.program, e)))?;

        *current = Some(child);
        Ok(())
    }

    async fn cancel(&self) -> Result<()> {
        if let Some(mut child) = self.current.lock().await.take() {
            stop_child(&mut child).await?;
        }
        Ok(())
    }

    /// Whether an utterance is still being read. Finished processes are reaped.
    async fn is_speaking(&self) -> bool {
        let mut current = self.current.lock().await;
        let running = match current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        };
        if !running {
            *current = None;
        }
        running
    }
}

/// Clipboard writes through a program that reads the text on stdin
pub struct CommandClipboard {
    command: Option<CommandLine>,
}

impl CommandClipboard {
    /// Use an explicit command; unavailable if it cannot be found
    pub fn new(command: CommandLine) -> Self {
        let command = if is_program_installed(&command.program) {
            Some(command)
        } else {
            None
        };
        Self { command }
    }

    /// Build from configuration, auto-detecting a program when none is set
    pub fn from_config(config: &DojoConfig) -> Self {
        if !config.clipboard_enabled {
            info!("Clipboard disabled by configuration");
            return Self { command: None };
        }

        let command = resolve(config.clipboard_command.as_deref(), CLIPBOARD_CANDIDATES);
        match &command {
            Some(command) => info!("Clipboard program: {}", command.program),
            None => info!("No clipboard program found"),
        }
        Self { command }
    }
}

#[async_trait]
impl ClipboardProvider for CommandClipboard {
    fn is_available(&self) -> bool {
        self.command.is_some()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let command = self
            .command
            .as_ref()
            .ok_or_else(|| Error::CapabilityUnavailable(CapabilityKind::Clipboard.to_string()))?;

        let mut child = command
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Capability(format!("failed to start {}: {}", command.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| Error::Capability(format!("failed to write clipboard: {}", e)))?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Capability(format!(
                "{} exited with {}",
                command.program, status
            )))
        }
    }
}

/// Voice provider for machines without speech output
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledVoice;

#[async_trait]
impl VoiceProvider for DisabledVoice {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<()> {
        Err(Error::CapabilityUnavailable(CapabilityKind::Voice.to_string()))
    }

    async fn cancel(&self) -> Result<()> {
        Ok(())
    }
}

/// Clipboard provider for machines without clipboard access
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

#[async_trait]
impl ClipboardProvider for DisabledClipboard {
    fn is_available(&self) -> bool {
        false
    }

    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::CapabilityUnavailable(CapabilityKind::Clipboard.to_string()))
    }
}
