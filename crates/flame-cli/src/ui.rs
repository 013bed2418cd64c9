//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use flame_core::{Category, OverallStatus, Report, Result};
use flame_dojo::{SymbolCard, SymbolTrainer, SELECT_PROMPT, SYMBOL_QUESTION};
use std::io::{self, IsTerminal, Write};

use crate::actions::{StatusKind, StatusMessage};

const PROMPT: &str = "flame>";

const REPORT_HEADINGS: [&str; 4] = [
    "Submitted Flame Sentence:",
    "Categories:",
    "Hard Truth:",
    "Correction Reps:",
];

/// Display startup banner
pub fn display_banner(voice_status: &str) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(67, terminal_width.saturating_sub(4)).max(40);
    let inner = banner_width - 2;

    let top_border = format!("┌{}┐", "─".repeat(inner));
    let bottom_border = format!("└{}┘", "─".repeat(inner));
    let empty_line = format!("│{}│", " ".repeat(inner));

    println!();
    println!("{}", top_border.red());
    println!("{}", empty_line.red());

    let title = "Flame Language Trainer Dojo";
    println!(
        "{}  {}{}{}",
        "│".red(),
        title.red().bold(),
        " ".repeat(inner.saturating_sub(title.chars().count() + 2)),
        "│".red()
    );

    println!("{}", empty_line.red());

    let feature_lines = [
        "Curriculum One",
        "",
        "Modes:",
        "• assess <sentence>   grade a four-tag sentence",
        "• forge <sentence>    wrap plain text in the template",
        "• symbols             match symbols to roles",
        "• lesson              read the foundation lesson",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.red());
        } else {
            let padding = " ".repeat(inner.saturating_sub(line.chars().count() + 2));
            println!("{}  {}{}{}", "│".red(), line, padding, "│".red());
        }
    }

    println!("{}", empty_line.red());
    println!("{}", bottom_border.red());
    println!();
    println!("{}", voice_status.dimmed());
    println!(
        "{}",
        "💡 Tip: Type 'help' for commands, 'exit' to leave the dojo".dimmed()
    );
    println!();
}

/// Handle input with history navigation
pub fn handle_input_with_history(history: &mut Vec<String>) -> Result<String> {
    // Piped input has no key events; read a plain line.
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok("exit".to_string());
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let result = read_line_raw(history);
    disable_raw_mode()?;
    println!();
    result
}

fn read_line_raw(history: &mut Vec<String>) -> Result<String> {
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    redraw(&input)?;

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            return Ok("exit".to_string());
        }

        match key_event.code {
            KeyCode::Enter => {
                let input = input.trim().to_string();
                if !input.is_empty() {
                    history.push(input.clone());
                }
                return Ok(input);
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Up => {
                if history.is_empty() {
                    continue;
                }
                let new_index = match history_index {
                    None => history.len() - 1,
                    Some(idx) => idx.saturating_sub(1),
                };
                history_index = Some(new_index);
                input = history[new_index].clone();
            }
            KeyCode::Down => {
                let Some(idx) = history_index else {
                    continue;
                };
                if idx + 1 < history.len() {
                    history_index = Some(idx + 1);
                    input = history[idx + 1].clone();
                } else {
                    history_index = None;
                    input.clear();
                }
            }
            KeyCode::Esc => {
                return Ok(String::new());
            }
            _ => continue,
        }
        redraw(&input)?;
    }
}

fn redraw(input: &str) -> Result<()> {
    print!("\r\x1b[2K{} {}", PROMPT.red().bold(), input);
    io::stdout().flush()?;
    Ok(())
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Grade a Flame sentence", "assess <sentence>".green());
    println!("  {} - Turn plain text into a Flame sentence", "forge <sentence>".green());
    println!("  {} - Print the foundation lesson", "lesson".green());
    println!("  {} - Match symbols to their roles ('q' returns here)", "symbols".green());
    println!("  {} - Read the last report, sentence or the lesson aloud", "speak [report|sentence|lesson]".green());
    println!("  {} - Stop reading aloud", "stop".green());
    println!("  {} - Copy the last report or sentence", "copy [report|sentence]".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Leave the dojo", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  assess [INTENT] cut build times [CONTEXT] our CI fleet [BOUNDARY] no skipped tests [ACTION] cache dependencies per branch");
    println!("  forge help new hires set up their laptops");
}

/// Print a report, colouring its verdict lines
pub fn print_report(report: &Report) {
    for line in report.render().lines() {
        if let Some(value) = line.strip_prefix("Overall Status: ") {
            println!("Overall Status: {}", paint_overall(report.overall, value));
        } else if let Some(value) = line.strip_prefix("Final Status: ") {
            println!("Final Status: {}", paint_overall(report.overall, value));
        } else if let Some((label, value)) = line.strip_prefix("- ").and_then(|l| l.split_once(": ")) {
            println!("- {}: {}", label, paint_category(value));
        } else if REPORT_HEADINGS.contains(&line) {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

fn paint_overall(overall: OverallStatus, text: &str) -> ColoredString {
    match overall {
        OverallStatus::Strong => text.green().bold(),
        OverallStatus::Borderline => text.yellow().bold(),
        OverallStatus::NotReady => text.red().bold(),
    }
}

fn paint_category(text: &str) -> ColoredString {
    match text {
        t if t == Category::Pass.as_str() => text.green(),
        t if t == Category::Borderline.as_str() => text.yellow(),
        _ => text.red(),
    }
}

/// Print a status line from an action
pub fn print_status(status: &StatusMessage) {
    let line = match status.kind {
        StatusKind::Success => format!("{} {}", "✅".green(), status.text),
        StatusKind::MissingContent => format!("{} {}", "📝".cyan(), status.text),
        StatusKind::Unsupported => format!("{} {}", "⚠️".yellow(), status.text),
        StatusKind::Failed => format!("{} {}", "❌".red(), status.text.red()),
    };
    println!("{}", line);
}

/// Print the current symbol card with numbered options
pub fn print_symbol_card(card: &SymbolCard, trainer: &SymbolTrainer) {
    println!();
    println!("  {}   {}", card.symbol, card.tag.marker().bold());
    println!("{}", SYMBOL_QUESTION);
    for (index, option) in card.options.iter().enumerate() {
        println!("  {} {}", format!("{}.", index + 1).cyan(), option);
    }
    if !trainer.is_answered() {
        println!("{}", SELECT_PROMPT.dimmed());
    }
    println!("{}", trainer.score_line().dimmed());
}
