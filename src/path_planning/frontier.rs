//! Open set for the A* search.
//!
//! A binary min-heap keyed on final cost, with ties served in insertion
//! order so that runs are reproducible. Membership is tracked separately
//! so `contains` does not scan the heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::common::FrontierPolicy;

/// Heap entry for the open set (min-heap)
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: u64,
    sequence: u64,
    index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, earliest insertion first on ties
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    members: Vec<bool>,
    queued: usize,
    policy: FrontierPolicy,
    next_sequence: u64,
}

impl Frontier {
    /// Empty open set for a grid with `capacity` slots
    pub fn new(capacity: usize, policy: FrontierPolicy) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            members: vec![false; capacity],
            queued: 0,
            policy,
            next_sequence: 0,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.get(index).copied().unwrap_or(false)
    }

    /// Number of distinct cells currently queued
    pub fn len(&self) -> usize {
        self.queued
    }

    pub fn is_empty(&self) -> bool {
        self.queued == 0
    }

    /// Number of heap entries, outdated ones included
    pub fn entry_count(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, index: usize, priority: u64) {
        if !self.members[index] {
            self.members[index] = true;
            self.queued += 1;
        }
        self.push_entry(index, priority);
    }

    /// Record a lower priority for a queued cell.
    ///
    /// Under [`FrontierPolicy::LazyDeletion`] a second entry is pushed and the
    /// older one is dropped when it surfaces. Under
    /// [`FrontierPolicy::Faithful`] the queued entry keeps its original
    /// priority.
    pub fn decrease(&mut self, index: usize, priority: u64) {
        if self.policy == FrontierPolicy::LazyDeletion && self.contains(index) {
            self.push_entry(index, priority);
        }
    }

    /// Remove and return the queued cell with the lowest priority
    pub fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            if self.members[entry.index] {
                self.members[entry.index] = false;
                self.queued -= 1;
                return Some(entry.index);
            }
        }
        None
    }

    fn push_entry(&mut self, index: usize, priority: u64) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            index,
        });
        self.next_sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut frontier = Frontier::new(4, FrontierPolicy::LazyDeletion);
        frontier.push(0, 30);
        frontier.push(1, 10);
        frontier.push(2, 20);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_ties_served_in_insertion_order() {
        let mut frontier = Frontier::new(4, FrontierPolicy::LazyDeletion);
        frontier.push(3, 14);
        frontier.push(0, 14);
        frontier.push(2, 14);
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), Some(2));
    }

    #[test]
    fn test_priorities_beyond_u32_range() {
        let mut frontier = Frontier::new(3, FrontierPolicy::LazyDeletion);
        let big = u64::from(u32::MAX);
        frontier.push(0, big + 2);
        frontier.push(1, big + 1);
        frontier.push(2, big);
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(0));
    }

    #[test]
    fn test_membership() {
        let mut frontier = Frontier::new(3, FrontierPolicy::Faithful);
        assert!(frontier.is_empty());
        frontier.push(1, 5);
        assert!(frontier.contains(1));
        assert!(!frontier.contains(0));
        assert!(!frontier.contains(99));
        assert_eq!(frontier.len(), 1);
        frontier.pop();
        assert!(!frontier.contains(1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lazy_deletion_reprioritizes() {
        let mut frontier = Frontier::new(3, FrontierPolicy::LazyDeletion);
        frontier.push(0, 20);
        frontier.push(1, 30);
        frontier.decrease(1, 10);
        assert_eq!(frontier.entry_count(), 3);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(0));
        // the outdated entry for 1 is discarded
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_faithful_keeps_stale_priority() {
        let mut frontier = Frontier::new(3, FrontierPolicy::Faithful);
        frontier.push(0, 20);
        frontier.push(1, 30);
        frontier.decrease(1, 10);
        assert_eq!(frontier.entry_count(), 2);
        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), Some(1));
    }
}
