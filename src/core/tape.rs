//! The calculator tape: a record of completed evaluations.
//!
//! The tape is immutable. `record` returns a new tape with the entry added,
//! dropping the oldest entries once the capacity is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// How an evaluation ended.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// Formatted result text.
    Value(String),
    /// Why the evaluation failed.
    Failed(String),
}

impl Outcome {
    /// Check if the evaluation produced a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// One evaluation on the tape.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Outcome, TapeEntry};
/// use chrono::Utc;
///
/// let entry = TapeEntry {
///     expression: "4x5".to_string(),
///     outcome: Outcome::Value("20".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(entry.outcome.is_value());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    /// History line at the moment evaluate was pressed
    pub expression: String,
    /// Result or failure reason
    pub outcome: Outcome,
    /// When the evaluation happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded record of evaluations.
///
/// # Example
///
/// ```rust
/// use keypad::core::{Outcome, Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::with_capacity(2);
/// let tape = tape.record(TapeEntry {
///     expression: "1+1".to_string(),
///     outcome: Outcome::Value("2".to_string()),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.last_value(), Some("2"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

/// Capacity used when none is configured.
pub const DEFAULT_TAPE_CAPACITY: usize = 100;

impl Default for Tape {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TAPE_CAPACITY)
    }
}

impl Tape {
    /// Create an empty tape holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// This is a pure function - the existing tape is left untouched.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        while entries.len() >= self.capacity.max(1) {
            entries.pop_front();
        }
        entries.push_back(entry);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Result text of the most recent successful evaluation.
    pub fn last_value(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match &entry.outcome {
            Outcome::Value(text) => Some(text.as_str()),
            Outcome::Failed(_) => None,
        })
    }

    /// Time between the oldest and newest entries still on the tape.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(expression: &str, outcome: Outcome) -> TapeEntry {
        TapeEntry {
            expression: expression.to_string(),
            outcome,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_tape_is_empty() {
        let tape = Tape::default();
        assert!(tape.is_empty());
        assert_eq!(tape.capacity(), DEFAULT_TAPE_CAPACITY);
        assert!(tape.last_value().is_none());
        assert!(tape.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let tape = Tape::default();
        let new_tape = tape.record(entry("2+2", Outcome::Value("4".into())));
        assert_eq!(tape.len(), 0);
        assert_eq!(new_tape.len(), 1);
    }

    #[test]
    fn oldest_entries_fall_off() {
        let tape = Tape::with_capacity(2)
            .record(entry("1", Outcome::Value("1".into())))
            .record(entry("2", Outcome::Value("2".into())))
            .record(entry("3", Outcome::Value("3".into())));

        let expressions: Vec<&str> = tape.entries().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions, vec!["2", "3"]);
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let tape = Tape::with_capacity(0)
            .record(entry("1", Outcome::Value("1".into())))
            .record(entry("2", Outcome::Value("2".into())));
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.last_value(), Some("2"));
    }

    #[test]
    fn deserialized_tape_over_capacity_is_trimmed() {
        let json = r#"{"entries":[],"capacity":0}"#;
        let tape: Tape = serde_json::from_str(json).unwrap();
        let tape = tape
            .record(entry("1", Outcome::Value("1".into())))
            .record(entry("2", Outcome::Value("2".into())));
        assert_eq!(tape.len(), 1);

        let overfull = Tape::with_capacity(3)
            .record(entry("1", Outcome::Value("1".into())))
            .record(entry("2", Outcome::Value("2".into())))
            .record(entry("3", Outcome::Value("3".into())));
        let mut json = serde_json::to_value(&overfull).unwrap();
        json["capacity"] = serde_json::json!(1);
        let shrunk: Tape = serde_json::from_value(json).unwrap();
        let tape = shrunk.record(entry("4", Outcome::Value("4".into())));
        let expressions: Vec<&str> = tape.entries().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions, vec!["4"]);
    }

    #[test]
    fn last_value_skips_failures() {
        let tape = Tape::default()
            .record(entry("4x5", Outcome::Value("20".into())))
            .record(entry("", Outcome::Failed("empty".into())));
        assert_eq!(tape.last_value(), Some("20"));
    }

    #[test]
    fn single_entry_has_duration_zero() {
        let tape = Tape::default().record(entry("1", Outcome::Value("1".into())));
        assert_eq!(tape.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn tape_serializes_correctly() {
        let tape = Tape::default().record(entry("9/3", Outcome::Value("3".into())));
        let json = serde_json::to_string(&tape).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();
        assert_eq!(tape.len(), deserialized.len());
        assert_eq!(deserialized.last_value(), Some("3"));
    }
}
