//! Where target words come from and which guesses count as words.
//!
//! The game itself only needs two things from the outside world: a way to
//! pick the next target ([`TargetSupplier`]) and a way to tell whether a
//! guess is a real word ([`Dictionary`]). [`Wordlist`] provides both from a
//! plain list of words, one per line.

use std::{fs, path::Path, str::FromStr, sync::Arc};

use itertools::Itertools;
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Result, Word, WordleError};

static EMBEDDED: &str = include_str!("../data/words.txt");

/// Decides whether a guess is an acceptable word.
///
/// The game only ever asks about five letter uppercase strings.
/// Implementations should be pure: the same word always gets the same
/// answer.
///
/// Any `Fn(&str) -> bool` closure is a dictionary.
pub trait Dictionary {
    fn is_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Supplies the target word for each new round.
///
/// Any `FnMut() -> Word` closure is a target supplier.
pub trait TargetSupplier {
    fn next_target(&mut self) -> Word;
}

impl<F> TargetSupplier for F
where
    F: FnMut() -> Word,
{
    fn next_target(&mut self) -> Word {
        self()
    }
}

/// A sorted list of five letter words.
///
/// Cloning a [`Wordlist`] is cheap; the words themselves are shared.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{Dictionary, Wordlist};
///
/// let words: Wordlist = "crane\nslate\n\nhi\nCRANE\nstrawberry".parse()?;
/// assert_eq!(words.len(), 2);
/// assert!(words.is_word("SLATE"));
/// assert!(words.is_word("slate"));
/// assert!(!words.is_word("HI"));
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wordlist {
    words: Arc<[Word]>,
}

impl Wordlist {
    /// The wordlist that ships with the crate.
    pub fn embedded() -> Result<Self> {
        EMBEDDED.parse()
    }

    /// Reads a wordlist from a file with one word per line.
    ///
    /// Lines that are not five letter words are skipped. Returns an error if
    /// the file cannot be read or contains no five letter words at all.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let words: Self = text.parse()?;
        debug!("loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Iterates over the words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }

    /// Creates a [`TargetSupplier`] that draws random words from this list.
    pub fn random_targets(&self) -> RandomTargets {
        RandomTargets {
            words: self.words.clone(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Like [`random_targets()`](Wordlist::random_targets()), but the same
    /// seed always produces the same sequence of targets.
    pub fn seeded_targets(&self, seed: u64) -> RandomTargets {
        RandomTargets {
            words: self.words.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FromStr for Wordlist {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        let words: Vec<Word> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match line.parse::<Word>() {
                Ok(word) => Some(word),
                Err(_) => {
                    trace!("skipping {line:?}");
                    None
                }
            })
            .sorted_unstable()
            .dedup()
            .collect();

        if words.is_empty() {
            return Err(WordleError::EmptyWordlist);
        }

        Ok(Wordlist {
            words: Arc::from(words),
        })
    }
}

impl Dictionary for Wordlist {
    fn is_word(&self, word: &str) -> bool {
        word.parse::<Word>()
            .map(|w| self.contains(&w))
            .unwrap_or(false)
    }
}

/// Draws target words uniformly at random from a [`Wordlist`].
#[derive(Clone, Debug)]
pub struct RandomTargets {
    words: Arc<[Word]>,
    rng: StdRng,
}

impl TargetSupplier for RandomTargets {
    fn next_target(&mut self) -> Word {
        // a Wordlist is never empty
        self.words[self.rng.gen_range(0..self.words.len())]
    }
}
