//! The cumulative keyboard status of each letter.

use std::fmt::Display;

use log::trace;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Guess, LetterStatus};

const ALPHABET_SIZE: usize = 26;

fn letter_idx(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as usize - 'A' as usize)
    } else {
        None
    }
}

/// The best status seen so far for every letter from `A` to `Z`.
///
/// Statuses only ever move up: a letter that has been seen as
/// [`Correct`](LetterStatus::Correct) stays that way even if a later guess
/// scores it [`Absent`](LetterStatus::Absent) somewhere else.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{Alphabet, Guess, LetterStatus, Word};
///
/// let target: Word = "hello".parse()?;
/// let mut alphabet = Alphabet::new();
///
/// alphabet.record(&Guess::new("helps".parse()?).score(target));
/// assert_eq!(alphabet.status('L'), LetterStatus::Correct);
///
/// // the first L has no copy left to claim, but L is already known to be correct
/// alphabet.record(&Guess::new("lolly".parse()?).score(target));
/// assert_eq!(alphabet.status('L'), LetterStatus::Correct);
/// assert_eq!(alphabet.status('Q'), LetterStatus::Unknown);
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Alphabet {
    statuses: [LetterStatus; ALPHABET_SIZE],
}

impl Alphabet {
    /// Creates an alphabet with every letter [`Unknown`](LetterStatus::Unknown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the status of a letter. Case is ignored.
    ///
    /// Anything that is not an ASCII letter is always unknown.
    pub fn status(&self, c: char) -> LetterStatus {
        letter_idx(c)
            .map(|i| self.statuses[i])
            .unwrap_or(LetterStatus::Unknown)
    }

    /// Folds the letters of a scored guess into the alphabet.
    pub fn record(&mut self, guess: &Guess) {
        for letter in guess.letters() {
            self.upgrade(letter.char(), letter.status());
        }
    }

    fn upgrade(&mut self, c: char, status: LetterStatus) {
        if let Some(i) = letter_idx(c) {
            let current = self.statuses[i];
            if status > current {
                trace!("letter {c} upgraded from {current:?} to {status:?}");
                self.statuses[i] = status;
            }
        }
    }

    /// Iterates over every letter from `A` to `Z` with its status.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('A'..='Z').zip(self.statuses.iter().copied())
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (c, status) in self.iter() {
            match status {
                LetterStatus::Unknown => write!(f, "{}", c.to_ascii_lowercase())?,
                LetterStatus::Absent => write!(f, "_")?,
                LetterStatus::Present | LetterStatus::Correct => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::{Word, WordleError};

    fn scored(guess: &str, target: &str) -> Result<Guess, WordleError> {
        Ok(Guess::new(guess.parse()?).score(target.parse()?))
    }

    #[test]
    fn starts_unknown() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.iter().count(), 26);
        assert!(alphabet.iter().all(|(_, s)| s == LetterStatus::Unknown));
        assert_eq!(alphabet.status('7'), LetterStatus::Unknown);
    }

    #[test]
    fn records_a_guess() -> Result<(), WordleError> {
        let mut alphabet = Alphabet::new();
        alphabet.record(&scored("helps", "hello")?);

        for (c, status) in alphabet.iter() {
            let expected = match c {
                'H' | 'E' | 'L' => LetterStatus::Correct,
                'P' | 'S' => LetterStatus::Absent,
                _ => LetterStatus::Unknown,
            };
            assert_eq!(status, expected, "letter {c}");
        }
        assert_eq!(alphabet.status('h'), LetterStatus::Correct);
        Ok(())
    }

    #[test]
    fn duplicate_in_one_guess_keeps_best() -> Result<(), WordleError> {
        // the second L of "lelol" is absent, but the others are not
        let mut alphabet = Alphabet::new();
        alphabet.record(&scored("lelol", "hello")?);
        assert_eq!(alphabet.status('L'), LetterStatus::Correct);
        assert_eq!(alphabet.status('O'), LetterStatus::Present);
        Ok(())
    }

    #[test]
    fn present_is_not_downgraded() -> Result<(), WordleError> {
        let mut alphabet = Alphabet::new();
        alphabet.record(&scored("olive", "hello")?);
        assert_eq!(alphabet.status('O'), LetterStatus::Present);

        // the second O finds no copy left and scores absent
        alphabet.record(&scored("ozone", "hello")?);
        assert_eq!(alphabet.status('O'), LetterStatus::Present);

        alphabet.record(&scored("hello", "hello")?);
        assert_eq!(alphabet.status('O'), LetterStatus::Correct);
        Ok(())
    }

    #[test]
    fn display_marks_letters() -> Result<(), WordleError> {
        let mut alphabet = Alphabet::new();
        alphabet.record(&scored("helps", "hello")?);
        assert_eq!(alphabet.to_string(), "abcdEfgHijkLmno_qr_tuvwxyz");
        Ok(())
    }

    fn word() -> impl Strategy<Value = Word> {
        "[A-H]{5}".prop_map(|s| s.parse().unwrap())
    }

    proptest! {
        #[test]
        fn statuses_never_decrease(
            target in word(),
            guesses in proptest::collection::vec(word(), 1..8)
        ) {
            let mut alphabet = Alphabet::new();
            for guess in guesses {
                let before = alphabet;
                let guess = Guess::new(guess).score(target);
                alphabet.record(&guess);

                for ((c, old), (_, new)) in before.iter().zip(alphabet.iter()) {
                    prop_assert!(new >= old, "{} went from {:?} to {:?}", c, old, new);
                }
                for letter in guess.letters() {
                    prop_assert!(alphabet.status(letter.char()) >= letter.status());
                }
            }
        }
    }
}
