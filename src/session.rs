//! Playing round after round.

use std::{fmt::Display, ops::Deref};

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    game::{GameState, Guess, Outcome},
    words::{Dictionary, TargetSupplier},
    GuessError, MAX_GUESSES,
};

/// A run of rounds played against the same word sources.
///
/// The session draws a target from its [`TargetSupplier`] for every round,
/// checks guesses against its [`Dictionary`], and keeps a [`Tally`] of the
/// rounds that were played to the end.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{Outcome, Session, Word, Wordlist};
///
/// let words: Wordlist = "hello\nhelps\nyield".parse()?;
/// let hello: Word = "hello".parse()?;
/// let mut session = Session::new(move || hello, words);
///
/// session.submit("yield")?;
/// session.submit("hello")?;
/// assert_eq!(session.game().outcome(), Some(Outcome::Won(2)));
/// assert_eq!(session.tally().won(), 1);
///
/// session.next_round();
/// assert_eq!(session.round(), 2);
/// assert_eq!(session.game().attempt(), 0);
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Debug)]
pub struct Session<S, D> {
    supplier: S,
    dictionary: D,
    game: GameState,
    round: u32,
    tally: Tally,
}

impl<S, D> Session<S, D>
where
    S: TargetSupplier,
    D: Dictionary,
{
    /// Creates a session and starts its first round.
    pub fn new(mut supplier: S, dictionary: D) -> Self {
        let game = GameState::new(supplier.next_target());
        info!("starting round 1");

        Session {
            supplier,
            dictionary,
            game,
            round: 1,
            tally: Tally::default(),
        }
    }

    /// Submits a guess to the current round.
    ///
    /// See [`GameState::submit_guess()`]. When the guess ends the round, its
    /// outcome is added to the tally.
    pub fn submit(&mut self, raw: &str) -> Result<Guess, GuessError> {
        let guess = self.game.submit_guess(raw, &self.dictionary)?;

        if let Some(outcome) = self.game.outcome() {
            info!("round {} over: {:?}", self.round, outcome);
            self.tally.record(outcome);
        }

        Ok(guess)
    }

    /// Throws away the current round and starts a new one with a fresh
    /// target.
    ///
    /// A round abandoned before it ended is not counted in the tally.
    pub fn next_round(&mut self) {
        if !self.game.should_end_game() {
            debug!(
                "abandoning round {} after {} guesses",
                self.round,
                self.game.attempt()
            );
        }

        self.game = GameState::new(self.supplier.next_target());
        self.round += 1;
        info!("starting round {}", self.round);
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The number of the current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

/// Statistics over finished rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Tally {
    played: u32,
    won: u32,
    streak: u32,
    best_streak: u32,
    histogram: Histogram,
}

impl Tally {
    /// Adds the outcome of a finished round.
    pub fn record(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Won(guesses) => {
                self.won += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
                if (1..=MAX_GUESSES).contains(&guesses) {
                    self.histogram.bins[guesses - 1] += 1;
                }
            }
            Outcome::Lost => self.streak = 0,
        }
    }

    /// Gets the number of rounds played to the end.
    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn lost(&self) -> u32 {
        self.played - self.won
    }

    /// Gets the number of rounds won in a row, up to the latest.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Gets the fraction of rounds won, or zero if none were played.
    pub fn win_rate(&self) -> f32 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f32 / self.played as f32
        }
    }

    /// Gets the average number of guesses over the rounds that were won.
    pub fn guesses_per_win(&self) -> Option<f32> {
        if self.won == 0 {
            return None;
        }
        let total: u32 = self
            .histogram
            .iter()
            .enumerate()
            .map(|(i, &n)| (i as u32 + 1) * n)
            .sum();
        Some(total as f32 / self.won as f32)
    }

    /// Gets the number of wins taking each number of guesses.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "played {}, won {} ({:.0}%), streak {} (best {})",
            self.played,
            self.won,
            self.win_rate() * 100.0,
            self.streak,
            self.best_streak
        )?;
        write!(f, "{}", self.histogram)
    }
}

/// Wins bucketed by the number of guesses they took.
///
/// Bin `n - 1` counts the rounds won on guess `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Histogram {
    bins: [u32; MAX_GUESSES],
}

impl From<[u32; MAX_GUESSES]> for Histogram {
    fn from(other: [u32; MAX_GUESSES]) -> Self {
        Self { bins: other }
    }
}

impl Deref for Histogram {
    type Target = [u32; MAX_GUESSES];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().copied().max().unwrap_or(0);
        let count_per_mark = (max as f32 / 40.).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{} |{:#>marks$} ({})", i + 1, "", bin)?;
        }

        Ok(())
    }
}
