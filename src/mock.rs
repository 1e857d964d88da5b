use crate::{Dictionary, TargetSupplier, Word};

/// A dictionary that knows a fixed set of words, or every word.
#[derive(Debug, Clone)]
pub(crate) struct Fixed {
    words: Option<Vec<&'static str>>,
}

impl Fixed {
    pub(crate) fn new(words: &[&'static str]) -> Self {
        Self {
            words: Some(words.to_vec()),
        }
    }

    pub(crate) fn any() -> Self {
        Self { words: None }
    }
}

impl Dictionary for Fixed {
    fn is_word(&self, word: &str) -> bool {
        match &self.words {
            None => true,
            Some(v) => v.iter().any(|&w| w == word),
        }
    }
}

/// A target supplier that hands out the same list of words in a loop.
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    targets: Vec<&'static str>,
    pub(crate) served: usize,
}

impl Scripted {
    pub(crate) fn new(targets: &[&'static str]) -> Self {
        Self {
            targets: targets.to_vec(),
            served: 0,
        }
    }
}

impl TargetSupplier for Scripted {
    fn next_target(&mut self) -> Word {
        let word = self.targets[self.served % self.targets.len()];
        self.served += 1;
        word.parse().unwrap()
    }
}
