//! The state of a single round.

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{words::Dictionary, GuessError, Word, MAX_GUESSES, WORD_SIZE};

mod alphabet;
mod guess;

pub use alphabet::Alphabet;
pub use guess::{evaluate, Guess, Letter, LetterStatus};

/// How a finished round went.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub enum Outcome {
    /// The word was found using this many guesses.
    Won(usize),

    /// All six guesses were used without finding the word.
    Lost,
}

/// One round of the game.
///
/// A [`GameState`] owns the hidden target word, the guesses made so far,
/// and the [`Alphabet`] summarizing what those guesses revealed. The only
/// way to change it is [`submit_guess()`](GameState::submit_guess()), which
/// either applies a guess completely or leaves the state untouched.
///
/// A new round is a new [`GameState`]; there is no way to reset one.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{GameState, GuessError, Outcome};
///
/// let dictionary = |word: &str| matches!(word, "HELPS" | "HELLO" | "YIELD");
/// let mut game = GameState::new("hello".parse()?);
///
/// assert_eq!(
///     game.submit_guess("xyzzy", &dictionary),
///     Err(GuessError::NotAWord("XYZZY".to_string()))
/// );
///
/// game.submit_guess("helps", &dictionary)?;
/// assert!(!game.should_end_game());
/// assert!(game.reveal().is_none());
///
/// game.submit_guess("hello", &dictionary)?;
/// assert!(game.is_word_guessed());
/// assert_eq!(game.outcome(), Some(Outcome::Won(2)));
/// assert_eq!(game.reveal().map(|w| w.to_string()), Some("HELLO".to_string()));
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    guesses: Vec<Guess>,
    alphabet: Alphabet,
}

impl GameState {
    /// Starts a round with `target` as the hidden word.
    pub fn new(target: Word) -> Self {
        GameState {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            alphabet: Alphabet::new(),
        }
    }

    /// Tries to make a guess.
    ///
    /// The text is uppercased and then checked in order:
    ///
    /// 1. the round must not be over, else [`GuessError::MaxAttemptsReached`]
    /// 2. it must have exactly five characters, else
    ///    [`GuessError::InvalidLength`]
    /// 3. it must be a word in `dictionary`, else [`GuessError::NotAWord`]
    ///
    /// The first failing check is reported and nothing changes. On success
    /// the guess is scored, folded into the [`Alphabet`], and appended to
    /// the history, and the scored guess is returned.
    pub fn submit_guess<D>(&mut self, raw: &str, dictionary: &D) -> Result<Guess, GuessError>
    where
        D: Dictionary + ?Sized,
    {
        if self.should_end_game() {
            debug!("guess {raw:?} rejected: round is over");
            return Err(GuessError::MaxAttemptsReached);
        }

        let candidate = raw.to_uppercase();
        let len = candidate.chars().count();
        if len != WORD_SIZE {
            debug!("guess {raw:?} rejected: {len} letters");
            return Err(GuessError::InvalidLength(len));
        }

        let word = match candidate.parse::<Word>() {
            Ok(word) if dictionary.is_word(&word) => word,
            _ => {
                debug!("guess {candidate:?} rejected: not a word");
                return Err(GuessError::NotAWord(candidate));
            }
        };

        let guess = Guess::new(word).score(self.target);
        self.alphabet.record(&guess);
        self.guesses.push(guess);
        debug!(
            "guess {} accepted as attempt {}: {:?}",
            word,
            self.attempt(),
            guess.statuses()
        );

        Ok(guess)
    }

    /// Returns true if the most recent guess is the target word.
    pub fn is_word_guessed(&self) -> bool {
        matches!(self.guesses.last(), Some(g) if g.word() == self.target)
    }

    /// Returns true once the word has been guessed or no guesses remain.
    pub fn should_end_game(&self) -> bool {
        self.is_word_guessed() || self.attempt() >= MAX_GUESSES
    }

    /// The result of the round, or [`None`] while it is still being played.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_word_guessed() {
            Some(Outcome::Won(self.attempt()))
        } else if self.should_end_game() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// The number of guesses accepted so far.
    pub fn attempt(&self) -> usize {
        self.guesses.len()
    }

    /// The number of guesses the player may still make.
    pub fn remaining(&self) -> usize {
        if self.should_end_game() {
            0
        } else {
            MAX_GUESSES - self.attempt()
        }
    }

    /// The accepted guesses, oldest first.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The target word, but only once the round is over.
    pub fn reveal(&self) -> Option<Word> {
        self.should_end_game().then(|| self.target)
    }

    /// Captures everything a display needs to draw the round.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            guesses: self.guesses.clone(),
            attempt: self.attempt(),
            alphabet: self.alphabet,
            outcome: self.outcome(),
            answer: self.reveal(),
        }
    }
}

/// A read-only view of a [`GameState`] for display.
///
/// The answer is only filled in after the round has ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Snapshot {
    pub guesses: Vec<Guess>,
    pub attempt: usize,
    pub alphabet: Alphabet,
    pub outcome: Option<Outcome>,
    pub answer: Option<Word>,
}

#[cfg(feature = "serde")]
impl Snapshot {
    /// Renders the snapshot as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
