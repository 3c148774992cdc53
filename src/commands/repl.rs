//! Interactive command loop
//!
//! One line per command. In solve mode clues come from a game played
//! elsewhere; in play mode the loop hides an answer and scores guesses
//! against it. Changing the word file or length reloads the vocabulary and
//! starts over.

use crate::config::{Config, Mode};
use crate::core::{Clue, Signal, Word};
use crate::error::SolverError;
use crate::game::{Difficulty, PlaySession};
use crate::output::formatters::{format_clue, format_ranking, format_word_grid};
use crate::solver::{ScoringKind, SessionState, Solver};
use crate::vocabulary::Vocabulary;
use anyhow::Result;
use colored::Colorize;
use log::{debug, info, warn};
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const WORDS_PER_LINE: usize = 10;

/// Run the interactive loop on stdin and stdout
///
/// # Errors
///
/// Returns an error if the initial vocabulary cannot be loaded or the
/// terminal cannot be read or written.
pub fn run_repl(config: Config) -> Result<()> {
    let stdin = io::stdin();
    run_repl_with(config, stdin.lock(), io::stdout())
}

/// Run the interactive loop on any input and output
///
/// # Errors
///
/// Same as [`run_repl`].
pub fn run_repl_with<R: BufRead, W: Write>(
    mut config: Config,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut vocabulary = config.load_vocabulary()?;

    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, " {}", "Wordle Prune".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, "Type 'help' for the list of commands.")?;

    loop {
        let next = {
            let mut repl = Repl::new(config.clone(), &vocabulary, &mut output);
            repl.announce()?;
            match repl.run(&mut input)? {
                Flow::Reload => repl.config,
                _ => return Ok(()),
            }
        };

        match next.load_vocabulary() {
            Ok(loaded) => {
                vocabulary = loaded;
                config = next;
            }
            Err(e) => {
                writeln!(output, "{} {e}", "error:".red().bold())?;
                writeln!(output, "keeping the previous word list")?;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Reload,
    Quit,
}

struct Repl<'a, W: Write> {
    config: Config,
    vocabulary: &'a Vocabulary,
    solver: Solver<'a>,
    game: Option<PlaySession<'a>>,
    out: W,
}

impl<'a, W: Write> Repl<'a, W> {
    fn new(config: Config, vocabulary: &'a Vocabulary, out: W) -> Self {
        Self {
            solver: Solver::new(vocabulary, config.strategy),
            config,
            vocabulary,
            game: None,
            out,
        }
    }

    fn announce(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{} words of length {}, {} possible answers",
            self.vocabulary.len(),
            self.vocabulary.word_len(),
            self.vocabulary.answer_count()
        )?;
        if self.config.mode == Mode::Play {
            self.start_game()?;
        }
        Ok(())
    }

    fn run<R: BufRead>(&mut self, input: &mut R) -> Result<Flow> {
        let mut line = String::new();
        loop {
            write!(self.out, "{}> ", self.config.mode)?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                return Ok(Flow::Quit);
            }

            let args: Vec<&str> = line.split_whitespace().collect();
            let Some((&command, args)) = args.split_first() else {
                continue;
            };
            debug!("command {command:?} {args:?}");

            match self.dispatch(&command.to_lowercase(), args)? {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<Flow> {
        match (command, self.config.mode) {
            ("quit" | "exit" | "q", _) => return Ok(Flow::Quit),
            ("help" | "?", _) => self.help()?,
            ("length", _) => return self.length(args),
            ("wordfile", _) => return self.wordfile(args),
            ("compare", _) => self.compare(args)?,
            ("new", _) => self.new_game()?,
            ("list", _) => self.list()?,
            ("difficulty", _) => self.difficulty(args)?,
            ("strategy", _) => self.strategy(args)?,
            ("guess", Mode::Play) => self.play_guess(args)?,
            ("answer", Mode::Play) => self.answer()?,
            ("solve", Mode::Play) => self.switch_mode(Mode::Solve)?,
            ("guess", Mode::Solve) => self.solve_guess(args)?,
            ("best", Mode::Solve) => self.best(args, false)?,
            ("besth", Mode::Solve) => self.best(args, true)?,
            ("score", Mode::Solve) => self.score(args)?,
            ("play", Mode::Solve) => self.switch_mode(Mode::Play)?,
            _ => self.error(format!("unknown command '{command}', type 'help'"))?,
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<()> {
        let common = [
            ("list", "show the remaining candidates (a random sample if many)"),
            ("new", "start over"),
            ("compare <guess> <answer>", "show the clue a guess would get"),
            ("difficulty <easy|hard>", "set the difficulty"),
            ("strategy <name>", "variance, black, entropy or black-entropy"),
            ("length <n>", "reload keeping only words of length n (0: any)"),
            ("wordfile <file> [commons]", "reload from another word file"),
            ("quit", "leave"),
        ];
        let specific: &[(&str, &str)] = match self.config.mode {
            Mode::Solve => &[
                ("guess <word> <signal>", "apply a clue, e.g. guess crane 01002"),
                ("best [n]", "rank guesses from the whole word list"),
                ("besth [n]", "rank guesses allowed in hard mode"),
                ("score <word>", "score a single guess"),
                ("play", "switch to play mode"),
            ],
            Mode::Play => &[
                ("guess <word>", "guess the hidden answer"),
                ("answer", "reveal the answer"),
                ("solve", "switch to solve mode"),
            ],
        };

        writeln!(self.out, "{}", format!("{} mode commands:", self.config.mode).bold())?;
        for (usage, text) in specific.iter().chain(common.iter()) {
            writeln!(self.out, "  {usage:<28}{text}")?;
        }
        Ok(())
    }

    fn length(&mut self, args: &[&str]) -> Result<Flow> {
        match args.first().map(|n| n.parse::<usize>()) {
            Some(Ok(length)) => {
                self.config.set_length(length);
                Ok(Flow::Reload)
            }
            _ => {
                self.error("usage: length <n>")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn wordfile(&mut self, args: &[&str]) -> Result<Flow> {
        match args {
            [file] => {
                self.config.word_file = Some(PathBuf::from(file));
                self.config.commons_file = None;
                Ok(Flow::Reload)
            }
            [file, commons] => {
                self.config.word_file = Some(PathBuf::from(file));
                self.config.commons_file = Some(PathBuf::from(commons));
                Ok(Flow::Reload)
            }
            _ => {
                self.error("usage: wordfile <file> [commons]")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn compare(&mut self, args: &[&str]) -> Result<()> {
        let [guess, key] = args else {
            return self.error("usage: compare <guess> <answer>");
        };
        let (guess, key) = match (Word::new(guess), Word::new(key)) {
            (Ok(guess), Ok(key)) => (guess, key),
            (Err(e), _) | (_, Err(e)) => return self.error(e),
        };
        match Clue::from_compare(&guess, &key) {
            Ok(clue) => {
                writeln!(self.out, "{}  {}", format_clue(&clue), clue.signal())?;
                Ok(())
            }
            Err(e) => self.error(e),
        }
    }

    fn new_game(&mut self) -> Result<()> {
        self.solver.reset();
        match self.config.mode {
            Mode::Solve => writeln!(
                self.out,
                "new game, {} candidates",
                self.solver.candidates().len()
            )?,
            Mode::Play => self.start_game()?,
        }
        Ok(())
    }

    fn start_game(&mut self) -> Result<()> {
        self.solver.reset();
        let game = match self.game.take() {
            Some(mut game) => game.new_game(None).map(|()| game),
            None => PlaySession::new(self.vocabulary, self.config.difficulty),
        };
        match game {
            Ok(game) => {
                info!("new {} game", game.difficulty());
                self.game = Some(game);
                writeln!(
                    self.out,
                    "new {} game: guess a {}-letter word",
                    self.config.difficulty,
                    self.vocabulary.word_len()
                )?;
                Ok(())
            }
            Err(e) => {
                self.config.mode = Mode::Solve;
                self.error(e)
            }
        }
    }

    fn list(&mut self) -> Result<()> {
        let candidates = self.solver.list();
        let total = candidates.len();
        let shown: Vec<&Word> = if total > self.config.list_size {
            let mut sample: Vec<&Word> = candidates
                .choose_multiple(&mut rand::rng(), self.config.list_size)
                .copied()
                .collect();
            sample.sort();
            sample
        } else {
            candidates
        };

        for line in format_word_grid(&shown, WORDS_PER_LINE) {
            writeln!(self.out, "  {line}")?;
        }
        if shown.len() < total {
            writeln!(self.out, "{} of {total} candidates", shown.len())?;
        } else {
            writeln!(self.out, "{total} candidates")?;
        }
        Ok(())
    }

    fn difficulty(&mut self, args: &[&str]) -> Result<()> {
        let difficulty = match args.first().map(|s| s.to_lowercase()).as_deref() {
            Some("easy") => Difficulty::Easy,
            Some("hard") => Difficulty::Hard,
            _ => return self.error("usage: difficulty <easy|hard>"),
        };
        self.config.difficulty = difficulty;
        if let Some(game) = &mut self.game {
            game.set_difficulty(difficulty);
        }
        writeln!(self.out, "difficulty set to {difficulty}")?;
        Ok(())
    }

    fn strategy(&mut self, args: &[&str]) -> Result<()> {
        let Some(name) = args.first() else {
            return self.error("usage: strategy <name>");
        };
        match name.parse::<ScoringKind>() {
            Ok(kind) => {
                self.config.strategy = kind;
                self.solver.set_scoring(kind);
                writeln!(self.out, "strategy set to {kind}")?;
                Ok(())
            }
            Err(e) => self.error(e),
        }
    }

    fn switch_mode(&mut self, mode: Mode) -> Result<()> {
        self.config.mode = mode;
        self.solver.reset();
        writeln!(self.out, "switched to {mode} mode")?;
        if mode == Mode::Play {
            self.start_game()?;
        }
        Ok(())
    }

    fn play_guess(&mut self, args: &[&str]) -> Result<()> {
        let [text] = args else {
            return self.error("usage: guess <word>");
        };
        let word = match Word::new(text) {
            Ok(word) => word,
            Err(e) => return self.error(e),
        };
        let Some(game) = &mut self.game else {
            return self.error("no game in progress, type 'new'");
        };

        match game.guess(&word) {
            Ok(clue) => {
                let tries = game.tries();
                writeln!(self.out, "{tries}: {}", format_clue(&clue))?;
                // the clue comes from the real answer, so it cannot contradict
                if let Err(e) = self.solver.add_clue(clue.clone()) {
                    warn!("tracking candidates for {}: {e}", clue.word());
                }
                if clue.is_solved() {
                    writeln!(
                        self.out,
                        "{}",
                        format!("Solved in {tries} tries!").green().bold()
                    )?;
                } else {
                    writeln!(
                        self.out,
                        "{} candidates left",
                        self.solver.candidates().len()
                    )?;
                }
                Ok(())
            }
            Err(e) => self.error(e),
        }
    }

    fn answer(&mut self) -> Result<()> {
        match &self.game {
            Some(game) => {
                let answer = game.answer().text().to_uppercase();
                writeln!(self.out, "the answer is {answer}")?;
                Ok(())
            }
            None => self.error("no game in progress, type 'new'"),
        }
    }

    fn solve_guess(&mut self, args: &[&str]) -> Result<()> {
        let [text, signal @ ..] = args else {
            return self.error("usage: guess <word> <signal>");
        };
        if signal.is_empty() {
            return self.error("usage: guess <word> <signal>");
        }
        let word = match Word::new(text) {
            Ok(word) => word,
            Err(e) => return self.error(e),
        };
        let signal = match signal.concat().parse::<Signal>() {
            Ok(signal) => signal,
            Err(e) => return self.error(e),
        };
        let clue = match Clue::new(word, signal) {
            Ok(clue) => clue,
            Err(e) => return self.error(e),
        };

        if self.config.difficulty.is_hard() {
            let missing = self.solver.hard_mode().test(clue.word());
            if !missing.is_empty() {
                let letters: String = missing.into_iter().collect();
                writeln!(
                    self.out,
                    "{} {} leaves out {letters}",
                    "note:".yellow(),
                    clue.word()
                )?;
            }
        }

        match self.solver.add_clue(clue.clone()) {
            Ok(SessionState::Solved) => {
                writeln!(self.out, "{}", format_clue(&clue))?;
                writeln!(
                    self.out,
                    "{}",
                    format!("Solved in {} tries!", self.solver.clues().len())
                        .green()
                        .bold()
                )?;
                Ok(())
            }
            Ok(_) => {
                writeln!(self.out, "{}", format_clue(&clue))?;
                writeln!(
                    self.out,
                    "{} candidates left",
                    self.solver.candidates().len()
                )?;
                Ok(())
            }
            Err(SolverError::Contradiction { .. }) => self.error(
                "no candidates left, the clues contradict each other; type 'new' to start over",
            ),
            Err(e) => self.error(e),
        }
    }

    fn best(&mut self, args: &[&str], hard: bool) -> Result<()> {
        let n = match args.first().map(|n| n.parse::<usize>()) {
            None => self.config.list_size,
            Some(Ok(n)) => n,
            Some(Err(_)) => return self.error("usage: best [n]"),
        };
        let ranked = if hard {
            self.solver.besth(n)
        } else {
            self.solver.best(n)
        };

        if ranked.is_empty() {
            return self.error("no candidates left");
        }
        for line in format_ranking(&ranked) {
            writeln!(self.out, "  {line}")?;
        }
        Ok(())
    }

    fn score(&mut self, args: &[&str]) -> Result<()> {
        let [text] = args else {
            return self.error("usage: score <word>");
        };
        let word = match Word::new(text) {
            Ok(word) => word,
            Err(e) => return self.error(e),
        };
        let scored = if self.config.difficulty.is_hard() {
            self.solver.scoreh(&word)
        } else {
            self.solver.score(&word)
        };
        match scored {
            Ok(score) => {
                writeln!(self.out, "{word} scores {score:.4}")?;
                Ok(())
            }
            Err(e) => self.error(e),
        }
    }

    fn error(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{} {message}", "error:".red().bold())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    struct WordFile(PathBuf);

    impl WordFile {
        fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "wordle_prune_repl_{}_{name}.txt",
                std::process::id()
            ));
            fs::write(&path, content).unwrap();
            Self(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for WordFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn run(config: Config, script: &str) -> String {
        let mut output = Vec::new();
        run_repl_with(config, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn config(file: &WordFile) -> Config {
        Config {
            word_file: Some(file.path().to_path_buf()),
            ..Config::default()
        }
    }

    const WORDS: &str = "crane 1\ncrate 1\ngrate 2\nirate 1\nslate 1\ntrace 1\nbumpy 0\n";

    #[test]
    fn solve_mode_narrows_and_ranks() {
        let file = WordFile::new("solve", WORDS);
        let output = run(config(&file), "guess crane 02202\nlist\nbest 1\nquit\n");

        assert!(output.contains("2 candidates left"));
        assert!(output.contains("grate  irate"));
        assert!(output.contains("GRATE"));
    }

    #[test]
    fn contradiction_is_reported() {
        let file = WordFile::new("contradiction", WORDS);
        let output = run(
            config(&file),
            "guess crane 22222\nguess slate 22222\nlist\nnew\nlist\n",
        );

        assert!(output.contains("contradict"));
        assert!(output.contains("0 candidates"));
        assert!(output.contains("new game, 6 candidates"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let file = WordFile::new("invalid", WORDS);
        let output = run(
            config(&file),
            "guess zzzzz 00000\nguess crane 0220\nfrobnicate\nlist\n",
        );

        assert!(output.contains("not in the word list"));
        assert!(output.contains("signal has 4 marks"));
        assert!(output.contains("unknown command"));
        assert!(output.contains("6 candidates"));
    }

    #[test]
    fn hard_score_matches_hard_ranking() {
        let file = WordFile::new("hard_score", WORDS);
        let config = Config {
            difficulty: Difficulty::Hard,
            strategy: ScoringKind::Entropy,
            ..config(&file)
        };
        let output = run(config, "guess slate 00222
score crate
");

        let vocabulary = Vocabulary::from_pairs([
            ("crane", 1),
            ("crate", 1),
            ("grate", 2),
            ("irate", 1),
            ("slate", 1),
            ("trace", 1),
            ("bumpy", 0),
        ])
        .unwrap();
        let mut solver = Solver::new(&vocabulary, ScoringKind::Entropy);
        solver
            .add_clue(Clue::new(Word::new("slate").unwrap(), "00222".parse().unwrap()).unwrap())
            .unwrap();
        let crate_ = Word::new("crate").unwrap();
        let hard = solver.scoreh(&crate_).unwrap();
        let easy = solver.score(&crate_).unwrap();

        assert!(output.contains(&format!("crate scores {hard:.4}")));
        assert!(!output.contains(&format!("crate scores {easy:.4}")));
    }

    #[test]
    fn compare_prints_signal() {
        let file = WordFile::new("compare", WORDS);
        let output = run(config(&file), "compare fleet tiger\n");
        assert!(output.contains("00021"));
    }

    #[test]
    fn play_mode_game() {
        let file = WordFile::new("play", "crane 0\nslate 1\ntrace 0\n");
        let config = Config {
            mode: Mode::Play,
            ..config(&file)
        };
        let output = run(config, "guess crane\nguess slate\nanswer\nquit\n");

        assert!(output.contains("1 candidates left"));
        assert!(output.contains("Solved in 2 tries!"));
        assert!(output.contains("the answer is SLATE"));
    }

    #[test]
    fn hard_play_rejects_missing_letters() {
        let file = WordFile::new("hard", "crane 0\nslate 1\nbumpy 0\n");
        let config = Config {
            mode: Mode::Play,
            difficulty: Difficulty::Hard,
            ..config(&file)
        };
        let output = run(config, "guess crane\nguess bumpy\nguess slate\n");

        assert!(output.contains("guess must use the revealed letters: a, e"));
        assert!(output.contains("Solved in 2 tries!"));
    }

    #[test]
    fn switching_modes() {
        let file = WordFile::new("switch", "crane 0\nslate 1\n");
        let output = run(config(&file), "play\nanswer\nsolve\nbest 1\n");

        assert!(output.contains("switched to play mode"));
        assert!(output.contains("the answer is SLATE"));
        assert!(output.contains("switched to solve mode"));
    }

    #[test]
    fn length_reloads() {
        let file = WordFile::new("length", "crane\nslate\nword\nward\nwind\n");
        let output = run(config(&file), "length 4\nlist\n");

        assert!(output.contains("3 words of length 4"));
        assert!(output.contains("ward  wind  word"));
    }

    #[test]
    fn bad_wordfile_keeps_previous_list() {
        let file = WordFile::new("keep", WORDS);
        let output = run(config(&file), "wordfile /nonexistent/words.txt\nlist\n");

        assert!(output.contains("keeping the previous word list"));
        assert!(output.contains("6 candidates"));
    }
}
