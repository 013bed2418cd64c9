//! Core traits and types for the Flame Language dojo
//!
//! This crate defines the report model shared by every training mode, the
//! plain-text report layout, the dojo configuration, and the capability-facing
//! interfaces for voice and clipboard output, keeping the rest of the system
//! test-friendly and independent of the host platform.

pub mod capability;
pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use capability::{CapabilityKind, ClipboardProvider, VoiceProvider};
pub use config::DojoConfig;
pub use error::{Error, Result};
pub use report::{Report, CORRECTION_REP_COUNT, REPORT_TITLE};
pub use types::*;
