//! Simulation command handler.
//!
//! Plays N games between two AI opponents and reports each winner plus a
//! summary. Every game and every AI gets its own seed, derived from the base
//! seed through a ChaCha20 stream, so the whole run replays from one number.
//!
//! # Environment Variables
//!
//! - `LIARSCLUB_SIM_BREAK_AFTER`: stop after N games and exit as interrupted
//!
//! # Examples
//!
//! ```no_run
//! use liarsclub_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, Some(42), "baseline", "random", &mut out, &mut err).unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use liarsclub_ai::{AIOpponent, create_ai};
use liarsclub_engine::engine::Phase;
use liarsclub_engine::game::GameSession;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Games still running after this many turns are recorded as unfinished.
pub const MAX_TURNS_PER_GAME: u32 = 10_000;

/// Handle the sim command.
///
/// # Errors
///
/// `InvalidInput` for zero games or an unknown AI kind, `Config` for a bad
/// configuration, `Interrupted` when `LIARSCLUB_SIM_BREAK_AFTER` cuts the run
/// short.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    ai_a: &str,
    ai_b: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let mut ai_names = [String::new(), String::new()];
    for (slot, kind) in [ai_a, ai_b].into_iter().enumerate() {
        let Some(ai) = create_ai(kind, 0) else {
            let msg = format!(
                "unknown AI kind '{}' (expected one of: {})",
                kind,
                liarsclub_ai::AI_KINDS.join(", ")
            );
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        };
        ai_names[slot] = ai.name().to_string();
    }
    let cfg = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let names = cfg.names();
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let break_after = std::env::var("LIARSCLUB_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    writeln!(
        out,
        "sim: games={} seed={} ai_a={} ai_b={}",
        games, base_seed, ai_a, ai_b
    )?;

    let mut seeds = ChaCha20Rng::seed_from_u64(base_seed);
    let mut wins = [0u32; 2];
    let mut unfinished = 0u32;
    let labels = [
        format!("{} ({})", names[0], ai_names[0]),
        format!("{} ({})", names[1], ai_names[1]),
    ];
    let mut played = 0u32;

    for game in 1..=games {
        if break_after == Some(played) {
            write_summary(out, played, &labels, wins, unfinished)?;
            return Err(CliError::Interrupted(format!(
                "stopped after {} of {} games",
                played, games
            )));
        }

        let game_seed: u64 = seeds.random();
        let mut seats: [Box<dyn AIOpponent>; 2] = [
            create_ai(ai_a, seeds.random()).ok_or("AI kind vanished")?,
            create_ai(ai_b, seeds.random()).ok_or("AI kind vanished")?,
        ];

        let mut session = GameSession::with_seed(names.clone(), game_seed)?;
        let winner = play_out(&mut session, &mut seats)?;
        let turns = session.history().len();
        match winner {
            Some(w) => {
                wins[w] += 1;
                writeln!(out, "Game {}: winner={} turns={}", game, labels[w], turns)?;
            }
            None => {
                unfinished += 1;
                writeln!(out, "Game {}: unfinished turns={}", game, turns)?;
            }
        }
        tracing::debug!(game, game_seed, ?winner, turns, "simulated game");
        played += 1;
    }

    write_summary(out, played, &labels, wins, unfinished)
}

/// Drives `session` with both AIs until it ends or hits the turn cap.
/// Returns the winning seat.
fn play_out(
    session: &mut GameSession,
    seats: &mut [Box<dyn AIOpponent>; 2],
) -> Result<Option<usize>, CliError> {
    loop {
        let snap = session.snapshot();
        if snap.is_over() {
            return Ok(session.engine().winner());
        }
        if snap.turn > MAX_TURNS_PER_GAME {
            return Ok(None);
        }
        let seat = match snap.phase {
            Phase::AwaitingBluffDecision => snap.opponent_index(),
            _ => snap.active_party,
        };
        let intents = seats[seat].intents_for(&snap, seat);
        if intents.is_empty() {
            return Err(CliError::Engine(format!(
                "{} produced no move in phase {:?}",
                seats[seat].name(),
                snap.phase
            )));
        }
        for intent in intents {
            session.apply_intent(intent)?;
        }
    }
}

fn write_summary(
    out: &mut dyn Write,
    played: u32,
    labels: &[String; 2],
    wins: [u32; 2],
    unfinished: u32,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Summary: games={} {}={} {}={} unfinished={}",
        played, labels[0], wins[0], labels[1], wins[1], unfinished
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn run_sim(games: u32, a: &str, b: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(games, Some(7), a, b, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn reports_every_game_and_a_summary() {
        let (result, out, _) = run_sim(5, "baseline", "random");
        assert!(result.is_ok());
        let header = "sim: games=5 seed=7 ai_a=baseline ai_b=random";
        assert!(out.starts_with(header));
        for g in 1..=5 {
            assert!(out.contains(&format!("Game {}:", g)));
        }
        let summary = out.lines().last().unwrap();
        assert!(summary.starts_with("Summary: games=5"));
        assert!(summary.contains("Player 1 (BaselineAI)="));
        assert!(summary.contains("Player 2 (RandomAI)="));
    }

    #[test]
    #[serial]
    fn same_seed_same_results() {
        let (_, a, _) = run_sim(4, "random", "random");
        let (_, b, _) = run_sim(4, "random", "random");
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn unknown_ai_is_rejected() {
        let (result, out, err) = run_sim(1, "baseline", "oracle");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
        assert!(err.contains("unknown AI kind 'oracle'"));
    }

    #[test]
    #[serial]
    fn zero_games_is_rejected() {
        let (result, _, err) = run_sim(0, "baseline", "baseline");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("games must be >= 1"));
    }

    #[test]
    #[serial]
    fn break_after_interrupts_with_partial_summary() {
        unsafe { std::env::set_var("LIARSCLUB_SIM_BREAK_AFTER", "2") };
        let (result, out, _) = run_sim(5, "random", "baseline");
        unsafe { std::env::remove_var("LIARSCLUB_SIM_BREAK_AFTER") };
        assert!(matches!(result, Err(CliError::Interrupted(_))));
        assert!(out.contains("Game 2:"));
        assert!(!out.contains("Game 3:"));
        assert!(out.contains("Summary: games=2"));
    }
}
