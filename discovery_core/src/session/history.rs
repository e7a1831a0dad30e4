//! Guess log - the most recent guesses, newest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::reveal::GuessOutcome;

/// One submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The node's label for correct and repeated guesses, the raw text otherwise.
    pub text: String,
    pub outcome: GuessOutcome,
}

impl std::fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = match self.outcome {
            GuessOutcome::AlreadyFound => "already found",
            GuessOutcome::Correct => "yep!",
            GuessOutcome::Incorrect => "nope",
        };
        write!(f, "{}: {}", self.text, verdict)
    }
}

/// Bounded history of guesses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuessLog {
    records: VecDeque<GuessRecord>,
    capacity: usize,
}

impl GuessLog {
    /// Create a log keeping at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    /// Add a record, dropping the oldest one when full.
    pub fn push(&mut self, record: GuessRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    /// Iterate over records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GuessRecord> {
        self.records.iter()
    }

    /// Get the newest record.
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
