//! Min-priority frontier for best-first search.
//!
//! Ordering: lowest `f = g + h` first; among equal `f`, deeper nodes (larger `g`) first; among
//! equal `(f, g)`, earliest pushed first. The last rule makes the pop order, and therefore the
//! returned solution, a pure function of the input.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::configuration::Configuration;
use crate::scenario::SearchError;
use crate::search::resources::ResourceTracker;
use crate::state::StateKey;

/// A candidate configuration waiting to be expanded.
#[derive(Debug, Clone)]
pub struct FrontierNode {
    pub f: u32,
    pub g: u32,
    pub key: StateKey,
    pub cfg: Configuration,
}

#[derive(Debug)]
struct Entry {
    node: FrontierNode,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    // BinaryHeap is a max-heap: "greater" means popped first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .f
            .cmp(&self.node.f)
            .then_with(|| self.node.g.cmp(&other.node.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier owned by a single search invocation (or lent to it by the caller).
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: FrontierNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
        self.peak = self.peak.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<FrontierNode> {
        self.heap.pop().map(|e| e.node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest length reached since the last [`Frontier::clear`].
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
        self.peak = 0;
    }

    pub(crate) fn reserve(
        &mut self,
        tracker: &ResourceTracker,
        additional: usize,
    ) -> Result<(), SearchError> {
        tracker.try_reserve_heap("astar", "frontier", &mut self.heap, additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle::Vehicle;

    fn node(f: u32, g: u32, col: i8) -> FrontierNode {
        let cfg = Configuration::new(vec![Vehicle::horizontal(2, 2, col).as_target()]);
        FrontierNode {
            f,
            g,
            key: cfg.key(),
            cfg,
        }
    }

    #[test]
    fn pops_lowest_f_then_deepest_then_oldest() {
        let mut fr = Frontier::new();
        fr.push(node(5, 1, 0));
        fr.push(node(3, 0, 1));
        fr.push(node(3, 2, 2));
        fr.push(node(3, 2, 3));
        fr.push(node(4, 0, 4));

        let order: Vec<i8> = std::iter::from_fn(|| fr.pop())
            .map(|n| n.cfg.vehicle(0).col)
            .collect();
        assert_eq!(order, vec![2, 3, 1, 4, 0]);
        assert_eq!(fr.peak_len(), 5);
    }
}
