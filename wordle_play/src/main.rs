use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wordle_engine::{
    Dictionary, GameState, Guess, LetterStatus, Outcome, Session, TargetSupplier, Wordlist,
    MAX_GUESSES,
};

const QUIT: &str = ":q";

#[derive(Parser)]
#[command(name = "wordle_play", about = "Play Wordle in the terminal", version)]
struct Cli {
    /// Word file with one word per line (default: the built-in list)
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,

    /// Seed for choosing targets, to replay the same rounds
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let words = match &cli.words {
        Some(path) => Wordlist::from_path(path)
            .with_context(|| format!("could not load words from {}", path.display()))?,
        None => Wordlist::embedded()?,
    };
    info!("playing with {} words", words.len());

    let targets = match cli.seed {
        Some(seed) => words.seeded_targets(seed),
        None => words.random_targets(),
    };
    let mut session = Session::new(targets, words);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut session, stdin.lock(), stdout.lock())
}

/// Reads guesses line by line until `:q` or the end of input.
fn play<S, D>(session: &mut Session<S, D>, input: impl BufRead, mut out: impl Write) -> Result<()>
where
    S: TargetSupplier,
    D: Dictionary,
{
    writeln!(out, "Guess the word! ({QUIT} to quit)")?;
    prompt(session.game(), &mut out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == QUIT {
            break;
        }

        if session.game().should_end_game() {
            if line.is_empty() {
                session.next_round();
                writeln!(out, "Round {}", session.round())?;
            } else {
                writeln!(out, "Press ENTER to start a new round")?;
            }
        } else {
            match session.submit(line) {
                Ok(guess) => {
                    writeln!(out, "{}", render(&guess))?;
                    writeln!(out, "{}", session.game().alphabet())?;
                    report_end(session.game(), &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
        }

        prompt(session.game(), &mut out)?;
    }

    writeln!(out)?;
    write!(out, "{}", session.tally())?;
    out.flush()?;
    Ok(())
}

fn prompt(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    if !game.should_end_game() {
        write!(out, "{}/{}> ", game.attempt() + 1, MAX_GUESSES)?;
    }
    out.flush()
}

fn report_end(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    let answer = match game.reveal() {
        Some(word) => word,
        None => return Ok(()),
    };

    match game.outcome() {
        Some(Outcome::Won(n)) => writeln!(out, "Word guessed in {n}!")?,
        _ => writeln!(out, "No more guesses :( Word was {answer}")?,
    }
    writeln!(out, "Press ENTER to restart")
}

/// Marks correct letters as `[X]`, present ones as `(X)`, and absent ones
/// in lowercase.
fn render(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| match l.status() {
            LetterStatus::Correct => format!("[{}]", l.char()),
            LetterStatus::Present => format!("({})", l.char()),
            LetterStatus::Absent | LetterStatus::Unknown => {
                format!(" {} ", l.char().to_ascii_lowercase())
            }
        })
        .collect()
}
