//! Command-line arguments and the interactive command grammar.

use clap::Parser;
use pet_core::{ParseVerbError, Verb};

/// Terminal playground for the HTTP pets
#[derive(Parser, Debug)]
#[command(name = "pets", version, about = "Send HTTP verbs and watch the pets react")]
pub struct Args {
    /// Base URL of a running pet-server; requests are also sent there when set
    #[arg(long, env = "PETS_SERVER")]
    pub server: Option<String>,

    /// How long a deleted pet stays hidden
    #[arg(long, default_value_t = 2000)]
    pub restore_delay_ms: u64,

    /// Give up on a `--server` request after this long
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Send(Verb),
    Help,
    Quit,
    Nothing,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseVerbError> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => Ok(Command::Nothing),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other.parse().map(Command::Send),
        }
    }
}
