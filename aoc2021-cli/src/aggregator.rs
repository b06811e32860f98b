//! Re-orders results arriving from worker threads
//!
//! Results are released in (year, day, part) order. Two min-heaps drive
//! this: one of the keys still outstanding, one of results that arrived
//! ahead of their turn.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Heap entry that pops the smallest key first
struct Early(SolverResult);

impl Early {
    fn key(&self) -> ResultKey {
        ResultKey::from(&self.0)
    }
}

impl Ord for Early {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Early {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Early {}

impl PartialEq for Early {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

pub struct ResultAggregator {
    outstanding: BinaryHeap<Reverse<ResultKey>>,
    early: BinaryHeap<Early>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            outstanding: expected_keys.into_iter().map(Reverse).collect(),
            early: BinaryHeap::new(),
        }
    }

    /// Accept `result` and return every result whose turn has come, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.early.push(Early(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(head)) = (self.outstanding.peek(), self.early.peek()) {
            if head.key() != *next {
                break;
            }
            self.outstanding.pop();
            if let Some(Early(result)) = self.early.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Release whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.early.drain().map(|e| e.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.outstanding.is_empty()
    }
}
