//! End-to-end scenarios over fixture word lists

use std::path::PathBuf;
use wordle_prune::commands::{BenchmarkLog, BenchmarkOptions, SolveConfig, run_benchmark, solve_word, write_log};
use wordle_prune::core::{Clue, Word, compare};
use wordle_prune::game::{Difficulty, PlaySession};
use wordle_prune::solver::{HardModeFilter, ScoringKind, SessionState, Solver};
use wordle_prune::vocabulary::{Vocabulary, loader};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn official() -> Vocabulary {
    loader::load_official(data("allowed.txt"), data("common.txt"), Some(5)).unwrap()
}

fn weighted() -> Vocabulary {
    loader::load_file(data("weighted.txt"), Some(5)).unwrap()
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn clue(text: &str, codes: &[u8]) -> Clue {
    Clue::new(word(text), wordle_prune::core::Signal::from_codes(codes).unwrap()).unwrap()
}

#[test]
fn reference_comparisons() {
    let cases: [(&str, &str, [u8; 5]); 5] = [
        ("abdeb", "abbey", [2, 2, 0, 2, 1]),
        ("abear", "abbey", [2, 2, 1, 0, 0]),
        ("fleet", "tiger", [0, 0, 0, 2, 1]),
        ("mopey", "favor", [0, 1, 0, 0, 0]),
        ("sagol", "tiger", [0, 0, 2, 0, 0]),
    ];
    for (guess, key, expected) in cases {
        let signal = compare(&word(guess), &word(key)).unwrap();
        assert_eq!(signal.codes(), expected, "{guess} against {key}");
    }
}

#[test]
fn official_lists_load() {
    let vocabulary = official();
    assert_eq!(vocabulary.len(), 65);
    assert_eq!(vocabulary.answer_count(), 56);
    assert_eq!(vocabulary.get("salet").unwrap().weight, 0);
    assert_eq!(vocabulary.get("raise").unwrap().weight, 1);
}

#[test]
fn raise_then_plate_leaves_nine() {
    let vocabulary = official();
    let mut solver = Solver::new(&vocabulary, ScoringKind::Variance);

    solver.add_clue(clue("raise", &[0, 1, 0, 0, 2])).unwrap();
    assert_eq!(solver.list().len(), 41);

    let state = solver.add_clue(clue("plate", &[0, 0, 2, 0, 2])).unwrap();
    assert_eq!(state, SessionState::Narrowing);

    let left: Vec<&str> = solver.list().into_iter().map(Word::text).collect();
    assert_eq!(
        left,
        vec![
            "adage", "amaze", "awake", "chafe", "evade", "heave", "knave", "quake", "weave"
        ]
    );
}

#[test]
fn balls_requires_l() {
    let vocabulary = official();
    let mut filter = HardModeFilter::new();
    filter.add_clue(&clue("balls", &[0, 0, 1, 2, 0]));

    assert!(filter.admits(&word("bails")));
    for entry in &vocabulary {
        assert_eq!(filter.admits(&entry.word), entry.word.has_letter('l'));
    }
}

#[test]
fn solves_weighted_list() {
    let vocabulary = weighted();
    for kind in ScoringKind::ALL {
        let easy = solve_word(&SolveConfig::new("antic").with_strategy(kind), &vocabulary).unwrap();
        assert!(easy.success, "antic with {kind}");

        let hard = SolveConfig::new("onion")
            .with_strategy(kind)
            .with_difficulty(Difficulty::Hard);
        let hard = solve_word(&hard, &vocabulary).unwrap();
        assert!(hard.success, "onion with {kind} in hard mode");
    }
}

#[test]
fn solver_plays_against_session() {
    let vocabulary = weighted();
    for answer in vocabulary.answers() {
        let mut game =
            PlaySession::with_answer(&vocabulary, Difficulty::Hard, &answer.word).unwrap();
        let mut solver = Solver::new(&vocabulary, ScoringKind::BlackEntropy);

        while !game.is_solved() {
            assert!(game.tries() < 10, "{} takes too long", answer.word);
            let (guess, _) = solver.besth(1)[0];
            let clue = game.guess(guess).unwrap();
            solver.add_clue(clue).unwrap();
        }
        assert_eq!(solver.state(), SessionState::Solved);
        assert_eq!(solver.list(), vec![&answer.word]);
    }
}

#[test]
fn benchmark_log_written_as_json() {
    let vocabulary = weighted();
    let result = run_benchmark(&vocabulary, &BenchmarkOptions::default()).unwrap();
    assert_eq!(result.solved, vocabulary.answer_count());

    let path = std::env::temp_dir().join(format!("wordle_prune_log_{}.json", std::process::id()));
    write_log(&path, &result.log).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let parsed: BenchmarkLog = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, result.log);
    assert!(!parsed.contains_key("anion"));
}
