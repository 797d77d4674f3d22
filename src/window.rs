//! Bounded, insertion-ordered, deduplicated window of recently seen numbers

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Window contents before and after a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTransition {
    pub previous: Vec<i64>,
    pub current: Vec<i64>,
}

/// Fixed-capacity FIFO of unique values, oldest first
///
/// Only [`NumberWindow::merge`] mutates the contents, so the capacity and
/// uniqueness invariants hold between any two calls.
#[derive(Debug, Clone)]
pub struct NumberWindow {
    values: VecDeque<i64>,
    capacity: NonZeroUsize,
}

impl NumberWindow {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Merge `incoming` into the window.
    ///
    /// Candidates are processed in order. Each one is checked against the
    /// window as it stands at that moment, so a value repeated inside the
    /// batch is appended once and never triggers a second eviction. When the
    /// window is full the oldest value is evicted before the append.
    pub fn merge(&mut self, incoming: &[i64]) -> WindowTransition {
        let previous = self.snapshot();

        for &candidate in incoming {
            if self.values.contains(&candidate) {
                continue;
            }
            if self.values.len() >= self.capacity.get() {
                if let Some(evicted) = self.values.pop_front() {
                    log::debug!("Window full, evicted {}", evicted);
                }
            }
            self.values.push_back(candidate);
        }

        WindowTransition {
            previous,
            current: self.snapshot(),
        }
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}
