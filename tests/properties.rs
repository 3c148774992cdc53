//! Properties that must hold for any words and any word list

use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::BTreeSet;
use wordle_prune::core::{Clue, Mark, Word, compare};
use wordle_prune::solver::{CandidateSet, ScoringKind, Solver};
use wordle_prune::vocabulary::Vocabulary;

// small alphabet so repeated letters are common
fn word() -> impl Strategy<Value = Word> {
    "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn vocabulary() -> impl Strategy<Value = Vocabulary> {
    prop::collection::btree_set("[a-d]{4}", 2..40)
        .prop_map(|words| Vocabulary::from_words(words).unwrap())
}

fn pick(vocabulary: &Vocabulary, index: Index) -> &Word {
    &vocabulary.entries()[index.index(vocabulary.len())].word
}

proptest! {
    #[test]
    fn self_compare_is_all_green(w in word()) {
        let signal = compare(&w, &w).unwrap();
        prop_assert!(signal.is_solved());
    }

    #[test]
    fn marked_letters_match_shared_counts(guess in word(), key in word()) {
        let signal = compare(&guess, &key).unwrap();

        for (i, mark) in signal.marks().iter().enumerate() {
            let same = guess.letter_at(i) == key.letter_at(i);
            prop_assert_eq!(*mark == Mark::Green, same);
        }

        for letter in guess.distinct_letters() {
            let in_guess = guess.letters().iter().filter(|&&c| c == letter).count();
            let in_key = key.letters().iter().filter(|&&c| c == letter).count();
            let marked = guess
                .letters()
                .iter()
                .zip(signal.marks())
                .filter(|&(&c, &m)| c == letter && m != Mark::Black)
                .count();
            prop_assert_eq!(marked, in_guess.min(in_key));
        }
    }

    #[test]
    fn pruning_is_monotonic_and_sound(
        vocabulary in vocabulary(),
        answer in any::<Index>(),
        guesses in prop::collection::vec(any::<Index>(), 1..6),
    ) {
        let answer = pick(&vocabulary, answer).clone();
        let mut candidates = CandidateSet::new(&vocabulary);

        for guess in guesses {
            let guess = pick(&vocabulary, guess);
            let before: BTreeSet<&Word> = candidates.list().into_iter().collect();

            candidates.add_clue(&Clue::from_compare(guess, &answer).unwrap()).unwrap();
            let after: BTreeSet<&Word> = candidates.list().into_iter().collect();

            prop_assert!(after.is_subset(&before));
            prop_assert!(after.contains(&answer));
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(
        vocabulary in vocabulary(),
        answer in any::<Index>(),
        guess in any::<Index>(),
        kind in prop::sample::select(ScoringKind::ALL.to_vec()),
    ) {
        let answer = pick(&vocabulary, answer).clone();
        let mut solver = Solver::new(&vocabulary, kind);
        solver
            .add_clue(Clue::from_compare(pick(&vocabulary, guess), &answer).unwrap())
            .unwrap();

        let first = solver.best(0);
        prop_assert!(first.windows(2).all(|w| w[0].1 <= w[1].1));
        prop_assert_eq!(first, solver.best(0));

        let hard = solver.besth(0);
        for (word, _) in &hard {
            prop_assert!(solver.hard_mode().admits(word));
        }
    }
}
