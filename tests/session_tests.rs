use std::io::{self, Cursor};

use battleship_solo::session::{run_session, SessionOptions};
use battleship_solo::{Console, MemoryScoreStore, ScoreRecord, ScoreStore};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Every cell of a 5x5 grid, row-major. More guesses than any Easy game
/// can use; leftovers are rejected by the replay prompt.
fn sweep_5x5() -> String {
    let mut s = String::new();
    for r in 0..5 {
        for c in 0..5 {
            s.push_str(&format!("{} {}\n", r, c));
        }
    }
    s
}

#[test]
fn test_session_plays_and_records_scores() {
    let input = format!(
        "Ann\nforty\n40\nx\ne\n{}y\ne\n{}n\n",
        sweep_5x5(),
        sweep_5x5()
    );
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut store = MemoryScoreStore::with_records(vec![ScoreRecord::new("Old", 60, 1)]);
    let mut rng = SmallRng::seed_from_u64(11);

    let games = run_session(&mut console, &mut store, &mut rng, &SessionOptions::default()).unwrap();
    assert_eq!(games.len(), 2);

    let records = store.read_scores().unwrap();
    assert_eq!(records.len(), 3);
    for (rec, summary) in records[1..].iter().zip(&games) {
        assert_eq!(rec.name, "Ann");
        assert_eq!(rec.age, 40);
        assert_eq!(rec.score, summary.player_score);
    }

    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.contains("Welcome to Battleship"));
    assert!(out.contains("\"forty\" is not a whole number."));
    assert!(out.contains("\"x\" is not one of the options."));
    assert!(out.contains("Top 10 scores:"));
    assert!(out.contains("Old"));
    assert!(out.contains("Computer fleet:"));
    assert!(out.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_session_stops_on_closed_input() {
    let mut console = Console::new(Cursor::new(b"Ann\n40\n".to_vec()), Vec::new());
    let mut store = MemoryScoreStore::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = run_session(&mut console, &mut store, &mut rng, &SessionOptions::default())
        .unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().expect("io error");
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    assert!(store.read_scores().unwrap().is_empty());
}

#[test]
fn test_leaderboard_limited_to_top() {
    let input = format!("Bo\n22\ne\n{}n\n", sweep_5x5());
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut store = MemoryScoreStore::with_records(vec![
        ScoreRecord::new("Low", 1, 1),
        ScoreRecord::new("High", 1, 999),
    ]);
    let mut rng = SmallRng::seed_from_u64(4);
    let options = SessionOptions {
        top: 1,
        ..SessionOptions::default()
    };
    run_session(&mut console, &mut store, &mut rng, &options).unwrap();

    let out = String::from_utf8(console.into_parts().1).unwrap();
    assert!(out.contains("Top 1 scores:"));
    assert!(out.contains("High"));
    assert!(!out.contains("Low"));
}
