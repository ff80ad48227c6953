//! # Play Command
//!
//! Interactive Liar's Club at the terminal.
//!
//! - **Hot-seat** (`--vs human`): both seats type their moves on stdin
//! - **Versus AI** (`--vs ai`): the second seat is the baseline AI
//!
//! Each frame renders the announcements produced since the previous frame,
//! one line at a time with the configured pause, then prompts whichever seat
//! has to move. `--json` replaces the text with one snapshot per frame.
//! Typing `q` or closing stdin ends the session.

use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_announcement, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, PlayCommand, parse_play_input};
use liarsclub_ai::{AIOpponent, create_ai};
use liarsclub_engine::engine::{Intent, Phase};
use liarsclub_engine::game::{GameSession, SessionSnapshot};
use liarsclub_engine::rules;
use std::io::{BufRead, Write};

/// Seat driven by the AI in `--vs ai` mode.
const AI_SEAT: usize = 1;

/// Handle the play command.
///
/// # Arguments
///
/// * `vs` - Who sits in the second seat
/// * `seed` - RNG seed; falls back to the configured seed, then to a random one
/// * `pause_ms` - Announcement pause; falls back to the configured value
/// * `json` - Emit JSON snapshots instead of text
/// * `out` - Output stream for the table
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for moves
///
/// # Errors
///
/// Configuration errors, I/O errors and random source failures.
pub fn handle_play_command(
    vs: Vs,
    seed: Option<u64>,
    pause_ms: Option<u64>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let pause_ms = pause_ms.unwrap_or(cfg.pause_ms);
    let names = cfg.names();

    let mut ai = match vs {
        Vs::Human => None,
        Vs::Ai => Some(
            create_ai("baseline", seed)
                .ok_or_else(|| CliError::Engine("baseline AI unavailable".to_string()))?,
        ),
    };

    if !json {
        writeln!(out, "play: vs={} seed={}", vs.as_str(), seed)?;
    }
    tracing::info!(vs = vs.as_str(), seed, "starting play session");

    let mut session = GameSession::with_seed(names.clone(), seed)?;
    let mut snap = session.snapshot();
    let mut games_finished = 0u32;
    let mut counted = false;

    loop {
        if json {
            writeln!(out, "{}", snap.to_json().map_err(std::io::Error::other)?)?;
        }
        let events = std::mem::take(&mut snap.announcements);
        if !json {
            for event in &events {
                ui::announce(out, &format_announcement(event, &snap), pause_ms)?;
            }
        }

        if snap.is_over() && !counted {
            games_finished += 1;
            counted = true;
        }

        let seat = seat_to_move(&snap);
        if let Some(ai) = ai.as_mut()
            && seat == AI_SEAT
            && !snap.is_over()
        {
            snap = run_ai_move(&mut session, &mut **ai, &snap, seat)?;
            continue;
        }

        if !json {
            render_table(out, &snap, seat)?;
        }
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        let command = match parse_play_input(&line) {
            ParseResult::Command(command) => command,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        match to_intent(command, &snap, &names) {
            Ok(intent) => {
                if matches!(intent, Intent::NewSession(..)) {
                    counted = false;
                }
                snap = session.apply_intent(intent)?;
            }
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }

    if !json {
        writeln!(out, "Games finished: {}", games_finished)?;
    }
    Ok(())
}

/// The seat whose input the current phase waits for.
fn seat_to_move(snap: &SessionSnapshot) -> usize {
    match snap.phase {
        Phase::AwaitingBluffDecision => snap.opponent_index(),
        _ => snap.active_party,
    }
}

/// Applies every intent the AI asks for and returns the resulting snapshot
/// with all announcements gathered along the way.
fn run_ai_move(
    session: &mut GameSession,
    ai: &mut dyn AIOpponent,
    snap: &SessionSnapshot,
    seat: usize,
) -> Result<SessionSnapshot, CliError> {
    let intents = ai.intents_for(snap, seat);
    if intents.is_empty() {
        return Err(CliError::Engine(format!(
            "{} produced no move in phase {:?}",
            ai.name(),
            snap.phase
        )));
    }
    let mut gathered = Vec::new();
    for intent in intents {
        let mut step = session.apply_intent(intent)?;
        gathered.append(&mut step.announcements);
    }
    let mut next = session.snapshot();
    gathered.append(&mut next.announcements);
    next.announcements = gathered;
    Ok(next)
}

/// Maps a typed command onto an intent the current phase accepts.
fn to_intent(
    command: PlayCommand,
    snap: &SessionSnapshot,
    names: &[String; 2],
) -> Result<Intent, String> {
    let intent = match command {
        PlayCommand::Toggle(pos) => {
            let card = snap
                .active()
                .cards
                .get(pos - 1)
                .ok_or_else(|| format!("No card at position {}", pos))?;
            Intent::ToggleCardSelection(card.id)
        }
        PlayCommand::Play => {
            if snap.phase == Phase::Selecting && snap.selected.is_empty() {
                return Err("Select at least one card first".to_string());
            }
            Intent::SubmitPlay
        }
        PlayCommand::Bluff => Intent::CallBluff,
        PlayCommand::Pass => Intent::Pass,
        PlayCommand::New => Intent::NewSession(names[0].clone(), names[1].clone()),
    };
    if rules::accepts(snap.phase, &intent) {
        Ok(intent)
    } else {
        Err(phase_hint(snap.phase).to_string())
    }
}

fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Selecting => "Pick cards by position, then 'play'",
        Phase::AwaitingBluffDecision => "Answer the play with 'bluff' or 'pass'",
        Phase::TurnResolved => "The turn is still resolving",
        Phase::GameOver => "The game is over. Type 'new' or 'q'",
    }
}

fn render_table(out: &mut dyn Write, snap: &SessionSnapshot, seat: usize) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Turn {} | Declared rank: {}",
        snap.turn, snap.declared_rank
    )?;
    for party in &snap.parties {
        let status = if party.alive { "in" } else { "out" };
        let count = party.cards.len();
        writeln!(out, "  {} ({}) - {} cards", party.name, status, count)?;
    }
    let name = snap.name_of(seat);
    match snap.phase {
        Phase::Selecting => {
            let hand = format_hand(&snap.parties[seat].cards, &snap.selected);
            writeln!(out, "{}'s hand: {}", name, hand)?;
            write!(out, "{}> toggle cards (1-5), 'play', 'new' or 'q': ", name)?;
        }
        Phase::AwaitingBluffDecision => {
            if let Some(pending) = &snap.pending_play {
                writeln!(
                    out,
                    "{} claims {} x {}.",
                    snap.name_of(pending.party),
                    pending.count,
                    pending.declared_rank
                )?;
            }
            write!(out, "{}> 'bluff' or 'pass': ", name)?;
        }
        Phase::TurnResolved | Phase::GameOver => {
            if let Some(loser) = &snap.last_eliminated {
                writeln!(out, "{} was eliminated.", loser)?;
            }
            write!(out, "Type 'new' for another game or 'q' to quit: ")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn run_play(vs: Vs, json: bool, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result =
            handle_play_command(vs, Some(42), Some(0), json, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn quit_right_away() {
        let (result, out, err) = run_play(Vs::Human, false, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("play: vs=human seed=42"));
        assert!(out.contains(">> Turn for Player 1"));
        assert!(out.contains("Player 1's hand: 1:"));
        assert!(out.contains("Games finished: 0"));
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn eof_ends_the_session() {
        let (result, out, _) = run_play(Vs::Human, false, "");
        assert!(result.is_ok());
        assert!(out.contains("Games finished: 0"));
    }

    #[test]
    #[serial]
    fn hot_seat_pass_hands_the_turn_over() {
        let (result, out, err) = run_play(Vs::Human, false, "1\nplay\npass\nq\n");
        assert!(result.is_ok());
        assert!(err.is_empty(), "unexpected errors: {}", err);
        assert!(out.contains("Player 1 plays 1 card"));
        assert!(out.contains("Player 2> 'bluff' or 'pass'"));
        assert!(out.contains("Player 1's play is accepted."));
        assert!(out.contains("Turn for Player 2"));
    }

    #[test]
    #[serial]
    fn rejects_moves_that_do_not_fit_the_phase() {
        let (result, _, err) = run_play(Vs::Human, false, "bluff\nplay\n9\nfold\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Pick cards by position"));
        assert!(err.contains("Select at least one card first"));
        assert!(err.contains("Card position must be 1-5"));
        assert!(err.contains("Unrecognized command"));
    }

    #[test]
    #[serial]
    fn hot_seat_game_runs_to_the_end() {
        let input = "1\nplay\nbluff\n".repeat(300);
        let (result, out, err) = run_play(Vs::Human, false, &input);
        assert!(result.is_ok());
        assert!(out.contains("wins!"));
        assert!(out.contains("Games finished: 1"));
        assert!(err.contains("The game is over"));
    }

    #[test]
    #[serial]
    fn new_restarts_the_game() {
        let (result, out, _) = run_play(Vs::Human, false, "1\nnew\nq\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Turn for Player 1").count(), 2);
    }

    #[test]
    #[serial]
    fn ai_answers_and_plays_its_own_turns() {
        let (result, out, _) = run_play(Vs::Ai, false, "1\nplay\n");
        assert!(result.is_ok());
        assert!(out.contains("play: vs=ai"));
        assert!(out.contains("Player 1 plays 1 card"));
        assert!(
            out.contains("calls Player 1's bluff") || out.contains("Player 1's play is accepted")
        );
        assert!(!out.contains("Player 2> "));
    }

    #[test]
    #[serial]
    fn json_mode_prints_snapshots_only() {
        let (result, out, _) = run_play(Vs::Human, true, "q\n");
        assert!(result.is_ok());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["phase"], "selecting");
        assert_eq!(value["announcements"][0]["type"], "turn_started");
    }

    #[test]
    #[serial]
    fn same_seed_same_table() {
        let (_, a, _) = run_play(Vs::Ai, false, "1\nplay\n2\nplay\n");
        let (_, b, _) = run_play(Vs::Ai, false, "1\nplay\n2\nplay\n");
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn config_errors_stop_before_dealing() {
        unsafe { std::env::set_var("LIARSCLUB_PAUSE_MS", "soon") };
        let (result, out, err) = run_play(Vs::Human, false, "q\n");
        unsafe { std::env::remove_var("LIARSCLUB_PAUSE_MS") };
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
        assert!(err.contains("Invalid configuration"));
    }
}
