use std::collections::VecDeque;

use thiserror::Error;

/// How many confirmed calculations each calculator keeps.
pub const HISTORY_CAPACITY: usize = 3;

/// Value-equality on the *inputs* of a record, excluding its timestamp
/// and anything derived from the inputs.
pub trait LedgerEntry {
    fn same_inputs(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("an equivalent entry is already in the ledger")]
pub struct DuplicateEntry;

/// Bounded, deduplicated, newest-first record list.
///
/// Insertion prepends; overflow evicts from the tail (oldest). Equality is
/// checked only against what currently remains in the window, so inputs
/// whose record has been evicted may be inserted again.
#[derive(Debug)]
pub struct HistoryLedger<T> {
    entries: VecDeque<T>, // front = newest
    capacity: usize,
}

impl<T: LedgerEntry + Clone> HistoryLedger<T> {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a new record as the newest entry, or reject it without any
    /// mutation when an equivalent record is already present.
    pub fn insert(&mut self, entry: T) -> Result<(), DuplicateEntry> {
        if self.entries.iter().any(|e| e.same_inputs(&entry)) {
            return Err(DuplicateEntry);
        }

        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        Ok(())
    }

    /// Cloned contents, newest first, length ≤ capacity.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    pub fn newest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: LedgerEntry + Clone> Default for HistoryLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec(u32);

    impl LedgerEntry for Rec {
        fn same_inputs(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn newest_entry_goes_to_the_front() {
        let mut ledger = HistoryLedger::new();
        ledger.insert(Rec(1)).unwrap();
        ledger.insert(Rec(2)).unwrap();

        assert_eq!(ledger.snapshot(), vec![Rec(2), Rec(1)]);
        assert_eq!(ledger.newest(), Some(&Rec(2)));
    }

    #[test]
    fn duplicate_insert_is_rejected_without_mutation() {
        let mut ledger = HistoryLedger::new();
        ledger.insert(Rec(1)).unwrap();

        assert_eq!(ledger.insert(Rec(1)), Err(DuplicateEntry));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn overflow_evicts_the_oldest_entry() {
        let mut ledger = HistoryLedger::new();
        for n in 1..=4 {
            ledger.insert(Rec(n)).unwrap();
        }

        assert_eq!(ledger.snapshot(), vec![Rec(4), Rec(3), Rec(2)]);
    }

    #[test]
    fn evicted_inputs_may_be_inserted_again() {
        let mut ledger = HistoryLedger::new();
        for n in 1..=4 {
            ledger.insert(Rec(n)).unwrap();
        }

        // Rec(1) was evicted above, so it no longer counts as a duplicate.
        assert!(ledger.insert(Rec(1)).is_ok());
        assert_eq!(ledger.snapshot(), vec![Rec(1), Rec(4), Rec(3)]);
    }

    #[test]
    fn custom_capacity_is_honored() {
        let mut ledger = HistoryLedger::with_capacity(1);
        ledger.insert(Rec(1)).unwrap();
        ledger.insert(Rec(2)).unwrap();

        assert_eq!(ledger.snapshot(), vec![Rec(2)]);
    }
}
