//! Scoring guesses against the target word.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Word, WORD_SIZE};

/// How much is known about a letter.
///
/// The variants are ordered from least to most informative, so the
/// "richer" of two statuses is simply their [`max`](Ord::max).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum LetterStatus {
    /// The letter has not been scored yet.
    #[default]
    Unknown,

    /// The letter has no remaining place in the target word.
    Absent,

    /// The letter is in the target word, but not at this position.
    Present,

    /// The letter is at this position in the target word.
    Correct,
}

/// A single letter of a guess together with its status.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Letter {
    char: char,
    status: LetterStatus,
}

impl Letter {
    pub fn char(&self) -> char {
        self.char
    }

    pub fn status(&self) -> LetterStatus {
        self.status
    }
}

/// A five letter guess.
///
/// A [`Guess`] built with [`new()`](Guess::new()) holds only the raw
/// letters, all [`LetterStatus::Unknown`]. Calling
/// [`score()`](Guess::score()) produces the scored guess. Scoring always
/// starts over from the raw word, so a guess cannot be scored into an
/// inconsistent state.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{Guess, LetterStatus::*};
///
/// let guess = Guess::new("lelol".parse()?).score("hello".parse()?);
/// assert_eq!(guess.statuses(), [Present, Correct, Correct, Present, Absent]);
/// assert!(!guess.is_correct());
/// #
/// # Ok::<_, wordle_engine::WordleError>(())
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Guess {
    word: Word,
    letters: [Letter; WORD_SIZE],
}

impl Guess {
    /// Creates an unscored guess.
    pub fn new(word: Word) -> Self {
        let mut letters = [Letter {
            char: ' ',
            status: LetterStatus::Unknown,
        }; WORD_SIZE];
        for (i, letter) in letters.iter_mut().enumerate() {
            letter.char = word.letter(i);
        }

        Guess { word, letters }
    }

    /// Scores this guess against `target`.
    pub fn score(self, target: Word) -> Self {
        let statuses = evaluate(self.word, target);
        let mut letters = self.letters;
        for (letter, status) in letters.iter_mut().zip(statuses) {
            letter.status = status;
        }

        Guess { letters, ..self }
    }

    /// The raw word that was guessed.
    pub fn word(&self) -> Word {
        self.word
    }

    pub fn letters(&self) -> &[Letter; WORD_SIZE] {
        &self.letters
    }

    pub fn statuses(&self) -> [LetterStatus; WORD_SIZE] {
        let mut res = [LetterStatus::Unknown; WORD_SIZE];
        for (slot, letter) in res.iter_mut().zip(self.letters.iter()) {
            *slot = letter.status;
        }
        res
    }

    /// Returns true if every letter was scored [`LetterStatus::Correct`].
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status == LetterStatus::Correct)
    }
}

impl Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Scores `guess` against `target`, letter by letter.
///
/// Letters in the right position are always [`Correct`](LetterStatus::Correct).
/// The remaining letters are [`Present`](LetterStatus::Present) from left to
/// right while the target still has unclaimed copies of that letter, and
/// [`Absent`](LetterStatus::Absent) after that. Exact matches claim their
/// copies first, so an earlier misplaced duplicate can never steal the copy
/// that belongs to a later exact match.
///
/// For instance, with the target `HELLO` the guess `LELOL` scores as
/// present, correct, correct, present, absent: the `L` in the middle claims
/// one of the two `L`s, the first `L` claims the other, and the last `L`
/// finds none left.
pub fn evaluate(guess: Word, target: Word) -> [LetterStatus; WORD_SIZE] {
    const A_ASCII: usize = b'A' as usize;
    let i = |b: u8| b as usize - A_ASCII;

    let guess = guess.as_bytes();
    let target = target.as_bytes();

    let mut remaining = [0_u8; 26];
    for &b in target {
        remaining[i(b)] += 1;
    }

    let mut res = [LetterStatus::Absent; WORD_SIZE];

    // exact matches first, since those get priority
    for (pos, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            res[pos] = LetterStatus::Correct;
            remaining[i(g)] -= 1;
        }
    }

    for (pos, &g) in guess.iter().enumerate() {
        if res[pos] == LetterStatus::Correct {
            continue;
        }
        if remaining[i(g)] > 0 {
            res[pos] = LetterStatus::Present;
            remaining[i(g)] -= 1;
        }
    }

    res
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::WordleError;

    fn str_to_statuses(input: &str) -> [LetterStatus; WORD_SIZE] {
        let mut res = [LetterStatus::Absent; WORD_SIZE];
        for (i, c) in input.chars().enumerate() {
            match c {
                'c' => res[i] = LetterStatus::Correct,
                'p' => res[i] = LetterStatus::Present,
                _ => {}
            }
        }
        res
    }

    macro_rules! evaluate_test {
        ($fn_name:ident[$target:expr => $( [$guess:expr, $res:expr] );*]) => {
            #[test]
            fn $fn_name() -> Result<(), WordleError> {
                let target: Word = $target.parse()?;
                $(
                    assert_eq!(
                        evaluate($guess.parse()?, target),
                        str_to_statuses($res),
                        "guess {} against {}",
                        $guess,
                        $target
                    );
                )*
                Ok(())
            }
        };
    }

    evaluate_test! { double_letter_budget ["hello" =>
        ["lelol", "pccpa"];
        ["llama", "ppaaa"];
        ["hello", "ccccc"]]
    }

    evaluate_test! { exact_match_claims_before_misplaced ["sober" =>
        ["spool", "capaa"];
        ["soaks", "ccaaa"]]
    }

    evaluate_test! { repeat_letter_answer ["spoon" =>
        ["odors", "pacap"];
        ["ooooo", "aacca"]]
    }

    evaluate_test! { misplaced_letters_left_to_right ["abbey" =>
        ["kebab", "apcpp"];
        ["babes", "ppcca"]]
    }

    evaluate_test! { nothing_in_common ["crimp" =>
        ["bolts", "aaaaa"];
        ["prick", "pccpa"]]
    }

    #[test]
    fn unscored_guess_is_unknown() -> Result<(), WordleError> {
        let guess = Guess::new("helps".parse()?);
        assert_eq!(guess.statuses(), [LetterStatus::Unknown; WORD_SIZE]);
        let chars: String = guess.letters().iter().map(Letter::char).collect();
        assert_eq!(chars, "HELPS");
        assert_eq!(guess.to_string(), "HELPS");
        Ok(())
    }

    #[test]
    fn scoring_twice_is_stable() -> Result<(), WordleError> {
        let target: Word = "hello".parse()?;
        let once = Guess::new("lelol".parse()?).score(target);
        let twice = once.score(target);
        assert_eq!(once, twice);

        let other: Word = "lolly".parse()?;
        assert_eq!(once.score(other).statuses(), evaluate(once.word(), other));
        Ok(())
    }

    #[test]
    fn status_order() {
        use LetterStatus::*;
        assert!(Unknown < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(LetterStatus::default(), Unknown);
    }

    fn word() -> impl Strategy<Value = Word> {
        // a small alphabet makes repeated letters common
        "[A-E]{5}".prop_map(|s| s.parse().unwrap())
    }

    proptest! {
        #[test]
        fn correct_exactly_where_letters_match(guess in word(), target in word()) {
            let statuses = evaluate(guess, target);
            for (pos, status) in statuses.iter().enumerate() {
                let matches = guess.as_bytes()[pos] == target.as_bytes()[pos];
                prop_assert_eq!(*status == LetterStatus::Correct, matches);
            }
        }

        #[test]
        fn hits_bounded_by_occurrences(guess in word(), target in word()) {
            let statuses = evaluate(guess, target);
            for letter in b'A'..=b'E' {
                let in_target = target.as_bytes().iter().filter(|&&b| b == letter).count();
                let in_guess = guess.as_bytes().iter().filter(|&&b| b == letter).count();
                let hits = guess
                    .as_bytes()
                    .iter()
                    .zip(statuses.iter())
                    .filter(|&(&b, &s)| b == letter && s != LetterStatus::Absent)
                    .count();
                prop_assert!(hits <= in_target);
                // as many copies as possible get credit
                prop_assert_eq!(hits, in_target.min(in_guess));
            }
        }

        #[test]
        fn never_unknown(guess in word(), target in word()) {
            prop_assert!(!evaluate(guess, target).contains(&LetterStatus::Unknown));
        }

        #[test]
        fn self_guess_is_correct(target in word()) {
            prop_assert!(Guess::new(target).score(target).is_correct());
        }
    }
}
