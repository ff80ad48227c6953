//! Command-line argument types.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "liarsclub",
    version,
    about = "Liar's Club: a two-seat bluffing card game"
)]
pub struct LiarsClubCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game in the terminal
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        #[arg(long)]
        seed: Option<u64>,
        /// Milliseconds each announcement stays on screen
        #[arg(long)]
        pause_ms: Option<u64>,
        /// Emit one JSON snapshot per frame instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run AI-vs-AI games and summarize the winners
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "baseline")]
        ai_a: String,
        #[arg(long, default_value = "baseline")]
        ai_b: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who sits in the second seat for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Hot-seat: both seats read from the terminal
    Human,
    /// The second seat is driven by the baseline AI
    Ai,
}

impl Vs {
    /// ```
    /// # use liarsclub_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
