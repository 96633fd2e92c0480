//! Range-max index over a zone's reading history.
//!
//! # Layout
//!
//! A recursive segment tree stored in a flat `Vec`, 1-based: node `k` covers
//! `[start, end]`, its children are `2k` (`[start, mid]`) and `2k + 1`
//! (`[mid + 1, end]`), and each node holds the maximum of its range.  The
//! backing array is sized `4n`, which bounds the tree depth for any `n`.
//!
//! Both [`query`](RangeMaxIndex::query) and [`update`](RangeMaxIndex::update)
//! touch O(log n) nodes.  The history window slides, so the registry simply
//! rebuilds the index after each append; with at most a few hundred
//! readings per zone the rebuild is negligible.

use crate::{ZoneError, ZoneResult};

/// Segment tree answering "maximum value in positions `lo..=hi`".
#[derive(Clone, Debug)]
pub struct RangeMaxIndex<T> {
    len:  usize,
    tree: Vec<T>,
}

impl<T: Copy + Ord + Default> RangeMaxIndex<T> {
    /// Build the index over `values`.  An empty input yields an empty index
    /// whose queries all return `None`.
    pub fn build(values: &[T]) -> Self {
        let len = values.len();
        let mut index = Self { len, tree: vec![T::default(); 4 * len] };
        if len > 0 {
            index.build_node(values, 1, 0, len - 1);
        }
        index
    }

    fn build_node(&mut self, values: &[T], node: usize, start: usize, end: usize) {
        if start == end {
            self.tree[node] = values[start];
            return;
        }
        let mid = (start + end) / 2;
        self.build_node(values, 2 * node, start, mid);
        self.build_node(values, 2 * node + 1, mid + 1, end);
        self.tree[node] = self.tree[2 * node].max(self.tree[2 * node + 1]);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum over the whole sequence.
    pub fn max(&self) -> Option<T> {
        if self.len == 0 { None } else { Some(self.tree[1]) }
    }

    /// Maximum over positions `lo..=hi`.
    ///
    /// Returns `None` for an inverted range or one reaching past the end.
    pub fn query(&self, lo: usize, hi: usize) -> Option<T> {
        if lo > hi || hi >= self.len {
            return None;
        }
        self.query_node(1, 0, self.len - 1, lo, hi)
    }

    fn query_node(&self, node: usize, start: usize, end: usize, lo: usize, hi: usize) -> Option<T> {
        if hi < start || end < lo {
            return None;
        }
        if lo <= start && end <= hi {
            return Some(self.tree[node]);
        }
        let mid = (start + end) / 2;
        let left  = self.query_node(2 * node, start, mid, lo, hi);
        let right = self.query_node(2 * node + 1, mid + 1, end, lo, hi);
        // `None < Some(_)`, so `max` keeps whichever side overlapped.
        left.max(right)
    }

    /// Overwrite position `pos` with `value` and repair its ancestors.
    pub fn update(&mut self, pos: usize, value: T) -> ZoneResult<()> {
        if pos >= self.len {
            return Err(ZoneError::HistoryIndex { pos, len: self.len });
        }
        self.update_node(1, 0, self.len - 1, pos, value);
        Ok(())
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, pos: usize, value: T) {
        if start == end {
            self.tree[node] = value;
            return;
        }
        let mid = (start + end) / 2;
        if pos <= mid {
            self.update_node(2 * node, start, mid, pos, value);
        } else {
            self.update_node(2 * node + 1, mid + 1, end, pos, value);
        }
        self.tree[node] = self.tree[2 * node].max(self.tree[2 * node + 1]);
    }
}
