//! Open set for the constrained search. The layout follows
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
//! a binary heap of lightweight entries pointing into an insertion-ordered map that holds the
//! best known cost and the predecessor of every node discovered so far.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of nodes pushed without a predecessor.
pub const NO_PARENT: usize = usize::MAX;

/// Heap entry. Only the index is carried; the node itself lives in the parent map.
struct QueueEntry<C> {
    estimate: C,
    cost: C,
    index: usize,
}

impl<C: Ord> Ord for QueueEntry<C> {
    /// Reversed on `estimate` so the max-heap yields the cheapest entry. Ties go to the
    /// entry that has already paid more, which tends to sit nearer the goal.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.cost.cmp(&other.cost))
    }
}

impl<C: Ord> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Ord> Eq for QueueEntry<C> {}

/// Min-priority open set without decrease-key. Pushing a node that is already recorded at
/// an equal or lower cost does nothing; a cheaper push records the new cost and parent and
/// leaves the old heap entry behind, to be skipped by [pop](Frontier::pop).
pub struct Frontier<N, C> {
    to_see: BinaryHeap<QueueEntry<C>>,
    parents: FxIndexMap<N, (usize, C)>,
}

impl<N, C> Default for Frontier<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    fn default() -> Self {
        Frontier::new()
    }
}

impl<N, C> Frontier<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    pub fn new() -> Frontier<N, C> {
        Frontier {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
        }
    }

    /// Offers `node` reached at `cost` from the node at index `parent` ([NO_PARENT] for
    /// seeds). The heuristic is only evaluated when the node is actually queued. Returns
    /// whether the node was queued.
    pub fn push<FH>(&mut self, parent: usize, node: N, cost: C, heuristic: FH) -> bool
    where
        FH: FnOnce(&N) -> C,
    {
        let h;
        let n;
        match self.parents.entry(node) {
            Vacant(e) => {
                h = heuristic(e.key());
                n = e.index();
                e.insert((parent, cost));
            }
            Occupied(mut e) => {
                if e.get().1 > cost {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((parent, cost));
                } else {
                    return false;
                }
            }
        }
        self.to_see.push(QueueEntry {
            estimate: cost + h,
            cost,
            index: n,
        });
        true
    }

    /// Removes the entry with the smallest estimated cost, skipping entries that were
    /// superseded by a cheaper push. Returns the node index and its cost.
    pub fn pop(&mut self) -> Option<(usize, C)> {
        while let Some(QueueEntry { cost, index, .. }) = self.to_see.pop() {
            match self.parents.get_index(index) {
                Some((_, &(_, best))) if cost > best => continue,
                Some(_) => return Some((index, cost)),
                None => continue,
            }
        }
        None
    }

    pub fn node(&self, index: usize) -> Option<&N> {
        self.parents.get_index(index).map(|(node, _)| node)
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents
            .get_index(index)
            .map(|(_, &(parent, _))| parent)
            .filter(|&p| p != NO_PARENT)
    }

    /// The nodes leading to `index`, oldest first, ending with the node at `index`.
    pub fn path_to(&self, index: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut cursor = index;
        while let Some((node, &(parent, _))) = self.parents.get_index(cursor) {
            path.push(node.clone());
            cursor = parent;
        }
        path.reverse();
        path
    }

    /// Number of queued heap entries, stale ones included.
    pub fn queued(&self) -> usize {
        self.to_see.len()
    }

    /// Number of distinct nodes discovered so far.
    pub fn discovered(&self) -> usize {
        self.parents.len()
    }
}
