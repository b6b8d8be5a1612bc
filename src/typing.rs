//! Typed-text state machine for the hero banner.
//!
//! Each tick either appends or removes one character of the current phrase
//! and reports how long to wait before the next tick. Reaching the full
//! phrase switches to deleting after a long hold; reaching zero characters
//! advances to the next phrase (cyclically) after a short hold. The host
//! reschedules exactly one tick at a time, so the loop never overlaps itself.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use serde::Deserialize;

/// Per-tick delays in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Hold after the phrase is fully typed.
    pub hold_full_ms: u32,
    /// Hold after the phrase is fully erased.
    pub hold_empty_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self { type_ms: 100, delete_ms: 50, hold_full_ms: 2000, hold_empty_ms: 500 }
    }
}

/// Output of one tick: the text to display and the delay until the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypingTiming,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// Start at the first phrase with nothing typed. `None` if `phrases` is empty.
    #[must_use]
    pub fn new<I, P>(phrases: I, timing: TypingTiming) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases.into_iter().map(|p| p.as_ref().chars().collect()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, timing, phrase_index: 0, char_index: 0, deleting: false })
    }

    /// Advance by one character and return what to show next.
    pub fn tick(&mut self) -> Tick {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase[..self.char_index].iter().collect();

        let mut delay_ms = if self.deleting { self.timing.delete_ms } else { self.timing.type_ms };
        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = self.timing.hold_full_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.timing.hold_empty_ms;
        }

        Tick { text, delay_ms }
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
