use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    static ref PUNCTUATION: HashSet<char> = {
        ['.', ',', ';', ':', '!', '?', '"', '\n']
            .iter()
            .copied()
            .collect()
    };
}

/// Lowercases text, blanks out punctuation and splits it into words.
///
/// Apostrophes and hyphens are not punctuation here, so "i'd" and
/// "scikit-learn" stay single words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    punctuation: HashSet<char>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            punctuation: PUNCTUATION.clone(),
        }
    }

    /// Build a tokenizer that blanks out a different set of characters
    pub fn with_punctuation<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            punctuation: chars.into_iter().collect(),
        }
    }

    /// Lowercase the text and replace every punctuation character with a space
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if self.punctuation.contains(&c) { ' ' } else { c })
            .collect()
    }

    /// Split normalized text on single spaces, dropping empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Analyze and count term frequencies
    pub fn analyze_with_frequencies(&self, text: &str) -> HashMap<String, usize> {
        let mut frequencies = HashMap::new();
        for token in self.tokenize(text) {
            *frequencies.entry(token).or_insert(0) += 1;
        }
        frequencies
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
