// SPDX-License-Identifier: MPL-2.0
//! Bounded transition log.

use std::time::Instant;

use super::buffer::CircularBuffer;
use crate::domain::diagnostics::LogCapacity;
use crate::observer::{Transition, Visibility};

/// One recorded visibility transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRecord {
    /// When the transition was recorded (monotonic).
    pub at: Instant,
    /// Human-readable owner of the region, e.g. the section anchor.
    pub label: String,
    pub transition: Transition,
}

/// Keeps the most recent transitions, oldest first.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    records: CircularBuffer<TransitionRecord>,
}

impl TransitionLog {
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            records: CircularBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, label: impl Into<String>, transition: Transition) {
        self.record_at(Instant::now(), label, transition);
    }

    pub fn record_at(&mut self, at: Instant, label: impl Into<String>, transition: Transition) {
        self.records.push(TransitionRecord {
            at,
            label: label.into(),
            transition,
        });
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    /// Newest record first, at most `limit` entries.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter().rev().take(limit)
    }

    /// Number of recorded reveals (`Hidden -> Visible`).
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.transition.to == Visibility::Visible)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RegionId;

    fn transition(to: Visibility) -> Transition {
        let from = if to == Visibility::Visible {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        Transition {
            region: RegionId::new(),
            from,
            to,
            ratio: 0.5,
        }
    }

    #[test]
    fn records_in_order() {
        let mut log = TransitionLog::default();
        log.record("about", transition(Visibility::Visible));
        log.record("skills", transition(Visibility::Visible));

        let labels: Vec<_> = log.iter().map(|record| record.label.as_str()).collect();
        assert_eq!(labels, vec!["about", "skills"]);
        assert_eq!(log.recent(1).next().map(|r| r.label.as_str()), Some("skills"));
    }

    #[test]
    fn counts_reveals_only() {
        let mut log = TransitionLog::default();
        log.record("a", transition(Visibility::Visible));
        log.record("a", transition(Visibility::Hidden));
        log.record("b", transition(Visibility::Visible));
        assert_eq!(log.reveal_count(), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn capacity_bounds_memory() {
        let mut log = TransitionLog::new(LogCapacity::new(16));
        for index in 0..40 {
            log.record(format!("section-{index}"), transition(Visibility::Visible));
        }
        assert_eq!(log.len(), 16);
        assert_eq!(log.iter().next().map(|r| r.label.as_str()), Some("section-24"));
    }
}
