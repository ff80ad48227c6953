use liarsclub_cli::Vs;
use liarsclub_cli::commands::handle_play_command;
use liarsclub_cli::logging::TestLogSubscriber;
use serial_test::serial;
use std::io::Cursor;

fn play(vs: Vs, seed: u64, json: bool, input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let pause = Some(0);
    handle_play_command(vs, Some(seed), pause, json, &mut out, &mut err, &mut stdin)
        .expect("play session");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn configured_names_reach_the_table() {
    unsafe {
        std::env::set_var("LIARSCLUB_PLAYER_ONE", "Rhea");
        std::env::set_var("LIARSCLUB_PLAYER_TWO", "Otto");
    }
    let (out, _) = play(Vs::Human, 4, false, "q\n");
    unsafe {
        std::env::remove_var("LIARSCLUB_PLAYER_ONE");
        std::env::remove_var("LIARSCLUB_PLAYER_TWO");
    }
    assert!(out.contains("Turn for Rhea"));
    assert!(out.contains("  Otto (in) - 5 cards"));
}

#[test]
#[serial]
fn selection_is_shown_and_can_be_undone() {
    let (out, err) = play(Vs::Human, 4, false, "2\n3\n2\nq\n");
    assert!(err.is_empty());
    assert!(out.contains("2:["));
    assert!(out.contains("3:["));
    let frames: Vec<&str> = out.lines().filter(|l| l.contains("'s hand:")).collect();
    let last = frames.last().unwrap();
    assert!(!last.contains("2:["));
    assert!(last.contains("3:["));
}

#[test]
#[serial]
fn json_frames_follow_each_move() {
    let (out, _) = play(Vs::Human, 4, true, "1\nplay\npass\nq\n");
    let frames: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("json frame"))
        .collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1]["selected"].as_array().unwrap().len(), 1);
    assert_eq!(frames[2]["phase"], "awaiting_bluff_decision");
    assert_eq!(frames[2]["pending_play"]["count"], 1);
    assert_eq!(frames[3]["active_party"], 1);
    assert!(
        frames[3]["announcements"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["type"] == "play_accepted")
    );
}

#[test]
#[serial]
fn games_can_be_chained_with_new() {
    let one_game = "1\nplay\nbluff\n".repeat(300);
    let input = format!("{}new\n{}q\n", one_game, one_game);
    let (out, _) = play(Vs::Human, 13, false, &input);
    assert!(out.contains("Games finished: 2"));
    assert_eq!(out.matches("wins!").count(), 2);
}

#[test]
#[serial]
fn engine_events_are_logged() {
    let logs = TestLogSubscriber::new();
    let input = "1\nplay\nbluff\nq\n";
    logs.capture(|| play(Vs::Human, 4, false, input));

    let entries = logs.entries();
    let created = entries
        .iter()
        .find(|e| e.message == "session created")
        .expect("session creation logged");
    assert_eq!(created.field("player_one"), Some("Player 1"));
    assert!(entries.iter().any(|e| e.message == "starting play session"));
}
