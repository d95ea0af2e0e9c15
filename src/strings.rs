//! The string-ladder puzzle over the uppercase alphabet.
//!
//! A configuration is a word; each move increments or decrements one
//! letter, wrapping around between A and Z. Solved toward an explicit
//! target word of the same length.

use std::fmt;

use crate::config::{Configuration, Neighbors};

/// One word in the ladder. Letters are uppercase ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    word: Vec<u8>,
}

impl StringsConfig {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.bytes().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// The next letter in the alphabet, wrapping Z back to A.
    fn letter_up(letter: u8) -> u8 {
        if letter == b'Z' {
            b'A'
        } else {
            letter + 1
        }
    }

    /// The previous letter in the alphabet, wrapping A back to Z.
    fn letter_down(letter: u8) -> u8 {
        if letter == b'A' {
            b'Z'
        } else {
            letter - 1
        }
    }

    /// A copy of this word with the letter at `index` replaced.
    fn with_letter(&self, index: usize, letter: u8) -> Self {
        let mut word = self.word.clone();
        word[index] = letter;
        Self { word }
    }
}

impl Configuration for StringsConfig {
    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        for (i, &letter) in self.word.iter().enumerate() {
            neighbors.push(self.with_letter(i, Self::letter_up(letter)));
            neighbors.push(self.with_letter(i, Self::letter_down(letter)));
        }
        neighbors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.word {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
