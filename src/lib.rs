#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::Word;

pub mod game;
pub use game::{evaluate, Alphabet, GameState, Guess, Letter, LetterStatus, Outcome, Snapshot};

pub mod words;
pub use words::{Dictionary, RandomTargets, TargetSupplier, Wordlist};

pub mod session;
pub use session::{Histogram, Session, Tally};

#[cfg(test)]
mod mock;

/// The number of letters in every target word and guess.
pub const WORD_SIZE: usize = 5;

/// The number of guesses a player gets in one round.
pub const MAX_GUESSES: usize = 6;

/// The errors that `wordle_engine` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("guess was rejected")]
    Guess {
        #[from]
        kind: GuessError,
    },

    /// The string is not five ASCII letters.
    #[error("\"{0}\" is not a five letter word")]
    MalformedWord(String),

    /// A word source contained no usable five letter words.
    #[error("the wordlist contains no five letter words")]
    EmptyWordlist,

    #[error("could not read wordlist")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing game state")]
    Serde(#[from] serde_json::Error),
}

/// The reasons a submitted guess can be rejected.
///
/// None of these are fatal: the game state is untouched and the caller may
/// simply try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The round is over, either because all six guesses have been used or
    /// because the word was already found.
    #[error("no guesses remain in this round")]
    MaxAttemptsReached,

    /// The guess does not have exactly five characters.
    #[error("guess has {0} letters, expected 5")]
    InvalidLength(usize),

    /// The guess is not in the dictionary.
    #[error("\"{0}\" is not in the word list")]
    NotAWord(String),
}

pub type Result<T, E = WordleError> = std::result::Result<T, E>;
