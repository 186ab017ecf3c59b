//! Indexed binary min-heap over cell indices.
//!
//! Entries are ordered by `f`, then by lower `h`, then by insertion order, so
//! two searches with the same inputs pop cells in exactly the same order. A
//! cell → heap-slot table gives O(1) `contains` and O(log n) `decrease_key`.

use std::cmp::Ordering;

use crate::error::SearchError;

const ABSENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    cell: usize,
    f: f64,
    h: f64,
    seq: u64,
}

impl Entry {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
    }
}

/// The open list of a search.
#[derive(Debug, Clone)]
pub struct Frontier {
    heap: Vec<Entry>,
    slots: Vec<usize>,
    seq: u64,
}

impl Frontier {
    /// Create a frontier able to hold cell indices in `0..cells`.
    pub fn new(cells: usize) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![ABSENT; cells],
            seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove every entry. Costs O(len), not O(cells).
    pub fn clear(&mut self) {
        for e in self.heap.drain(..) {
            self.slots[e.cell] = ABSENT;
        }
        self.seq = 0;
    }

    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        self.slots.get(cell).is_some_and(|&s| s != ABSENT)
    }

    /// Current `f` of `cell`, if queued.
    #[inline]
    pub fn priority(&self, cell: usize) -> Option<f64> {
        self.slots
            .get(cell)
            .filter(|&&s| s != ABSENT)
            .map(|&s| self.heap[s].f)
    }

    /// Queue `cell` with priority `f` and tie-breaker `h`.
    ///
    /// A cell already queued is treated as a [`decrease_key`](Self::decrease_key).
    /// Indices past the capacity given to [`new`](Self::new) grow the slot
    /// table.
    pub fn push(&mut self, cell: usize, f: f64, h: f64) {
        if self.contains(cell) {
            self.decrease_key(cell, f);
            return;
        }
        if cell >= self.slots.len() {
            self.slots.resize(cell + 1, ABSENT);
        }
        let slot = self.heap.len();
        self.heap.push(Entry {
            cell,
            f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
        self.slots[cell] = slot;
        self.sift_up(slot);
    }

    /// Lower the priority of a queued cell to `f`. Returns `false` and does
    /// nothing if the cell is not queued or `f` is not lower than its current
    /// priority.
    pub fn decrease_key(&mut self, cell: usize, f: f64) -> bool {
        let Some(slot) = self.slots.get(cell).copied().filter(|&s| s != ABSENT) else {
            return false;
        };
        if f >= self.heap[slot].f {
            return false;
        }
        self.heap[slot].f = f;
        self.sift_up(slot);
        true
    }

    /// Remove and return the cell with the lowest priority.
    pub fn pop_min(&mut self) -> Result<usize, SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(top) = self.heap.pop() else {
            return Err(SearchError::EmptyFrontier);
        };
        self.slots[top.cell] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(top.cell)
    }

    /// The cell that `pop_min` would return, with its priority.
    pub fn peek_min(&self) -> Option<(usize, f64)> {
        self.heap.first().map(|e| (e.cell, e.f))
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].cell] = a;
        self.slots[self.heap[b].cell] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].cmp_priority(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < n && self.heap[right].cmp_priority(&self.heap[left]) == Ordering::Less {
                child = right;
            }
            if self.heap[child].cmp_priority(&self.heap[i]) != Ordering::Less {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }
}
