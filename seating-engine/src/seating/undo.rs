//! Bounded undo history
//!
//! Snapshots are full deep copies of the arrangement taken before a change.
//! The newest snapshot sits at the front; pushing past capacity evicts the
//! oldest.

use shared::seating::Arrangement;
use std::collections::VecDeque;

/// Maximum number of snapshots retained
pub const MAX_UNDO_HISTORY: usize = 10;

/// Arrangement state as it was before one applied change
#[derive(Debug, Clone, PartialEq)]
pub struct UndoSnapshot {
    pub arrangement: Arrangement,
    /// Label of the change this snapshot rolls back
    pub description: String,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl UndoSnapshot {
    pub fn capture(arrangement: Arrangement, description: impl Into<String>) -> Self {
        Self {
            arrangement,
            description: description.into(),
            timestamp: shared::util::now_millis(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UndoLog {
    history: VecDeque<UndoSnapshot>,
    capacity: usize,
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_UNDO_HISTORY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest beyond capacity
    pub fn push(&mut self, snapshot: UndoSnapshot) {
        self.history.push_front(snapshot);
        self.history.truncate(self.capacity);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        self.history.pop_front()
    }

    pub fn peek(&self) -> Option<&UndoSnapshot> {
        self.history.front()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Labels, newest first
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(|s| s.description.as_str())
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(label: &str) -> UndoSnapshot {
        UndoSnapshot::capture(Arrangement::with_tables(1), label)
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut log = UndoLog::new();
        log.push(snapshot("first"));
        log.push(snapshot("second"));
        assert_eq!(log.peek().map(|s| s.description.as_str()), Some("second"));
        assert_eq!(log.pop().unwrap().description, "second");
        assert_eq!(log.pop().unwrap().description, "first");
        assert!(log.pop().is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = UndoLog::new();
        for i in 0..(MAX_UNDO_HISTORY + 3) {
            log.push(snapshot(&format!("change {}", i)));
        }
        assert_eq!(log.len(), MAX_UNDO_HISTORY);
        let labels: Vec<&str> = log.descriptions().collect();
        assert_eq!(labels.first().copied(), Some("change 12"));
        assert_eq!(labels.last().copied(), Some("change 3"));
    }

    #[test]
    fn test_clear() {
        let mut log = UndoLog::with_capacity(2);
        log.push(snapshot("a"));
        assert!(log.can_undo());
        log.clear();
        assert!(log.is_empty());
    }
}
