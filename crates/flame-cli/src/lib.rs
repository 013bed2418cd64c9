//! Terminal front end for the Flame Language dojo

mod actions;
mod providers;
mod ui;

#[cfg(test)]
mod tests;

pub use actions::{DojoActions, StatusKind, StatusMessage, VOICE_READY, VOICE_UNAVAILABLE};
pub use providers::{
    is_program_installed, CommandClipboard, CommandLine, CommandVoice, DisabledClipboard,
    DisabledVoice,
};
pub use ui::{
    display_banner, handle_input_with_history, print_help, print_report, print_status,
    print_symbol_card,
};

// Re-export core types
pub use flame_core::{Error, Result};
