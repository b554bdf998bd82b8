//! Edge key generation

use std::cell::Cell;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of fresh integer keys.
pub trait IdGenerator {
    fn next(&self) -> i64;
}

static PROCESS_COUNTER: AtomicI64 = AtomicI64::new(1);

/// Keys unique across the whole process, no matter how many instances exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl IdGenerator for ProcessIds {
    fn next(&self) -> i64 {
        PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed)
    }
}

/// Deterministic counter, for tests and reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Cell<i64>,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        SequentialIds {
            next: Cell::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next(&self) -> i64 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next(&self) -> i64 {
        (**self).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next(), 10);
        assert_eq!(ids.next(), 11);
        assert_eq!(ids.next(), 12);
    }

    #[test]
    fn test_process_ids_are_unique_across_instances() {
        let a = ProcessIds;
        let b = ProcessIds;
        let first = a.next();
        let second = b.next();
        assert_ne!(first, second);
    }
}
