//! # Liar's Club CLI Library
//!
//! Terminal front end for the Liar's Club bluffing game. It renders session
//! snapshots, turns typed commands into intents and drives AI seats.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game at the terminal, hot-seat or against the baseline AI
//! - `sim`: Run AI-vs-AI games and summarize the winners
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, LiarsClubCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["liarsclub", "sim", "--games", "2", "--seed", "42"];
/// let code = liarsclub_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// `play` reads moves from the process stdin; tests drive
/// [`commands::handle_play_command`] with an in-memory reader instead.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LiarsClubCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Liar's Club CLI");
                    write_or_exit!(err, "Usage: liarsclub <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: liarsclub --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            vs,
            seed,
            pause_ms,
            json,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(vs, seed, pause_ms, json, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            ai_a,
            ai_b,
        } => handle_sim_command(games, seed, &ai_a, &ai_b, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &format!("interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
