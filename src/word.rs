//! Validated five letter words.

use std::{fmt::Display, ops::Deref, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, WordleError, WORD_SIZE};

/// A five letter word made of uppercase ASCII letters.
///
/// Every target word and every accepted guess is a [`Word`]. Construction
/// is validated, so holding one is proof that the text is well formed.
/// Lowercase input is accepted and normalized.
///
/// # Examples
///
/// ```rust
/// # use std::ops::Deref;
/// use wordle_engine::Word;
///
/// let hello: Word = "hello".parse()?;
/// assert_eq!(hello.deref(), "HELLO");
///
/// assert!("hi".parse::<Word>().is_err());
/// assert!("he11o".parse::<Word>().is_err());
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", into = "String", try_from = "String")
)]
pub struct Word {
    letters: [u8; WORD_SIZE],
}

impl Word {
    /// Returns the letters of this word as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8; WORD_SIZE] {
        &self.letters
    }

    /// Returns the letter at `index` as a [`char`].
    ///
    /// Panics if `index` is not below [`WORD_SIZE`].
    pub fn letter(&self, index: usize) -> char {
        self.letters[index] as char
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_SIZE || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordleError::MalformedWord(s.to_string()));
        }

        let mut letters = [0; WORD_SIZE];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase();
        }

        Ok(Word { letters })
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        // only ever holds ASCII letters
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deref())
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
