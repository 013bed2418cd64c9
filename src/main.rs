use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use log::{debug, info};
use std::io::{self, Read};
use std::sync::Arc;

use flame_cli::{
    display_banner, handle_input_with_history, print_help, print_report, print_status,
    print_symbol_card, CommandClipboard, CommandVoice, DojoActions,
};
use flame_core::{DojoConfig, Error, Report};
use flame_dojo::{assess, forge, SymbolTrainer, FOUNDATION_LESSON};

#[derive(Parser)]
#[command(name = "flame")]
#[command(about = "Flame Language trainer dojo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Never use speech output
    #[arg(long, global = true)]
    no_voice: bool,

    /// Never touch the clipboard
    #[arg(long, global = true)]
    no_clipboard: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the foundation lesson
    Lesson {
        /// Read the lesson aloud
        #[arg(long)]
        speak: bool,
    },
    /// Practice matching symbols to their roles
    Symbols,
    /// Wrap a plain sentence in the four-tag template
    Forge {
        /// Plain sentence to structure
        #[arg(required = true)]
        text: Vec<String>,
        /// Read the structured sentence aloud
        #[arg(long)]
        speak: bool,
        /// Copy the structured sentence to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Assess a Flame sentence (reads stdin when no text is given)
    Assess {
        /// Sentence to assess
        text: Vec<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Read the report aloud
        #[arg(long)]
        speak: bool,
        /// Copy the report to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = DojoConfig::from_env()?;
    if cli.no_voice {
        config = config.without_voice();
    }
    if cli.no_clipboard {
        config = config.without_clipboard();
    }
    debug!("Configuration: {:?}", config);

    let actions = DojoActions::new(
        Arc::new(CommandVoice::from_config(&config)),
        Arc::new(CommandClipboard::from_config(&config)),
    );
    info!(
        "Voice available: {}, clipboard available: {}",
        actions.voice_available(),
        actions.clipboard_available()
    );

    match cli.command {
        Some(Commands::Lesson { speak }) => run_lesson(&actions, speak).await,
        Some(Commands::Symbols) => run_symbols(&actions).await,
        Some(Commands::Forge { text, speak, copy }) => {
            run_forge(&actions, &text.join(" "), speak, copy).await
        }
        Some(Commands::Assess {
            text,
            json,
            speak,
            copy,
        }) => {
            let input = if text.is_empty() {
                read_stdin()?
            } else {
                text.join(" ")
            };
            run_assess(&actions, &input, json, speak, copy).await
        }
        None => run_dojo(&actions).await,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

async fn run_lesson(actions: &DojoActions, speak: bool) -> Result<()> {
    println!("{}", "🔥 Foundation Lesson".red().bold());
    println!();
    println!("{}", FOUNDATION_LESSON);
    println!();

    if speak {
        if let Some(status) = actions.read_lesson(FOUNDATION_LESSON).await {
            print_status(&status);
        }
    } else {
        println!("{}", actions.voice_readiness().dimmed());
    }
    Ok(())
}

async fn run_symbols(actions: &DojoActions) -> Result<()> {
    let mut trainer = SymbolTrainer::new();
    let mut history = Vec::new();

    println!("{}", "Symbol Trainer".red().bold());
    println!(
        "{}",
        "Answer with 1-4 or a tag name, 'n' for the next card, 's' to hear the card, 'q' to stop.".dimmed()
    );
    print_symbol_card(trainer.current(), &trainer);

    loop {
        let input = handle_input_with_history(&mut history)?;
        match input.to_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "n" | "next" => {
                trainer.next();
                print_symbol_card(trainer.current(), &trainer);
            }
            "s" | "speak" => {
                let status = actions.read_symbol_card(trainer.current()).await;
                print_status(&status);
            }
            other => {
                let outcome = match other.parse::<usize>() {
                    Ok(number) => trainer.answer_by_number(number),
                    Err(_) => trainer.answer(&input),
                };
                match outcome {
                    Ok(outcome) if outcome.correct => println!("{}", outcome.feedback.green()),
                    Ok(outcome) => println!("{}", outcome.feedback.red()),
                    Err(e) => println!("{} {}", "⚠️".yellow(), e),
                }
                println!("{}", trainer.score_line().dimmed());
            }
        }
    }

    println!("{} {}", "🔥 Final".red(), trainer.score_line());
    Ok(())
}

async fn run_forge(actions: &DojoActions, raw: &str, speak: bool, copy: bool) -> Result<()> {
    let sentence = match forge(raw) {
        Ok(sentence) => sentence,
        Err(Error::EmptyInput(warning)) => {
            println!("{} {}", "⚠️".yellow(), warning);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", sentence);
    if speak {
        print_status(&actions.read_sentence(Some(&sentence)).await);
    }
    if copy {
        print_status(&actions.copy_sentence(Some(&sentence)).await);
    }
    Ok(())
}

async fn run_assess(
    actions: &DojoActions,
    input: &str,
    json: bool,
    speak: bool,
    copy: bool,
) -> Result<()> {
    let report = assess(input);
    info!(
        "Assessment finished: {} ({} vague words)",
        report.overall,
        report.total_vague_words()
    );

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    if speak {
        print_status(&actions.read_report(Some(&report)).await);
    }
    if copy {
        print_status(&actions.copy_report(Some(&report)).await);
    }
    Ok(())
}

/// What to read aloud from the dojo prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpeakTarget {
    Report,
    Sentence,
    Lesson,
}

/// What to copy from the dojo prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyTarget {
    Report,
    Sentence,
}

/// One line typed at the dojo prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DojoCommand<'a> {
    Exit,
    Help,
    Lesson,
    Symbols,
    Assess(&'a str),
    Forge(&'a str),
    Speak(SpeakTarget),
    Copy(CopyTarget),
    Stop,
    Unknown,
}

impl<'a> DojoCommand<'a> {
    fn parse(input: &'a str) -> Self {
        let (command, rest) = match input.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command.to_lowercase(), rest.trim()),
            None => (input.trim().to_lowercase(), ""),
        };

        match (command.as_str(), rest.to_lowercase().as_str()) {
            ("exit" | "quit", _) => DojoCommand::Exit,
            ("help", _) => DojoCommand::Help,
            ("lesson", _) => DojoCommand::Lesson,
            ("symbols", _) => DojoCommand::Symbols,
            ("assess", _) => DojoCommand::Assess(rest),
            ("forge", _) => DojoCommand::Forge(rest),
            ("speak", "lesson") => DojoCommand::Speak(SpeakTarget::Lesson),
            ("speak", "sentence") => DojoCommand::Speak(SpeakTarget::Sentence),
            ("speak", "" | "report") => DojoCommand::Speak(SpeakTarget::Report),
            ("copy", "sentence") => DojoCommand::Copy(CopyTarget::Sentence),
            ("copy", "" | "report") => DojoCommand::Copy(CopyTarget::Report),
            ("stop", _) => DojoCommand::Stop,
            _ => DojoCommand::Unknown,
        }
    }
}

/// Interactive dojo. The last sentence and report live here and are handed
/// to each action explicitly.
async fn run_dojo(actions: &DojoActions) -> Result<()> {
    display_banner(actions.voice_readiness());

    let mut history = Vec::new();
    let mut last_sentence: Option<String> = None;
    let mut last_report: Option<Report> = None;

    loop {
        let input = handle_input_with_history(&mut history)?;
        if input.is_empty() {
            continue;
        }

        match DojoCommand::parse(&input) {
            DojoCommand::Exit => {
                println!("{}", "👋 Keep training.".green());
                break;
            }
            DojoCommand::Help => print_help(),
            DojoCommand::Lesson => {
                println!("{}", FOUNDATION_LESSON);
                println!();
            }
            DojoCommand::Symbols => {
                run_symbols(actions).await?;
                println!("{}", "Back in the dojo.".dimmed());
            }
            DojoCommand::Assess(text) => {
                let report = assess(text);
                print_report(&report);
                last_report = Some(report);
            }
            DojoCommand::Forge(text) => match forge(text) {
                Ok(sentence) => {
                    println!("{} {}", "→".green(), sentence);
                    last_sentence = Some(sentence);
                }
                Err(e) => println!("{} {}", "⚠️".yellow(), e),
            },
            DojoCommand::Speak(SpeakTarget::Lesson) => {
                if let Some(status) = actions.read_lesson(FOUNDATION_LESSON).await {
                    print_status(&status);
                }
            }
            DojoCommand::Speak(SpeakTarget::Sentence) => {
                print_status(&actions.read_sentence(last_sentence.as_deref()).await)
            }
            DojoCommand::Speak(SpeakTarget::Report) => {
                print_status(&actions.read_report(last_report.as_ref()).await)
            }
            DojoCommand::Copy(CopyTarget::Sentence) => {
                print_status(&actions.copy_sentence(last_sentence.as_deref()).await)
            }
            DojoCommand::Copy(CopyTarget::Report) => {
                print_status(&actions.copy_report(last_report.as_ref()).await)
            }
            DojoCommand::Stop => actions.stop_speaking().await,
            DojoCommand::Unknown => {
                println!(
                    "{} Unknown command '{}'. Type 'help' for commands.",
                    "❓".cyan(),
                    input
                );
            }
        }
    }

    Ok(())
}
