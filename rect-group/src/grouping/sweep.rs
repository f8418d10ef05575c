//! Active-set bookkeeping for the grouping sweep.
//!
//! Rectangles enter the active set when the sweep reaches their leading
//! edge and leave once the sweep passes their trailing edge. A binary heap
//! keyed on the trailing coordinate makes the eviction check a peek at the
//! minimum.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::rect::Rect;

/// A rectangle currently inside the sweep window, tagged with its position
/// in the original input.
#[derive(Debug, Clone, Copy)]
pub(super) struct ActiveRect {
    trailing: i64,
    index: usize,
    rect: Rect,
}

impl ActiveRect {
    fn new(index: usize, rect: Rect) -> Self {
        Self {
            trailing: rect.max_x,
            index,
            rect,
        }
    }
}

impl Ord for ActiveRect {
    /// Trailing edge first, then descending area, then input position.
    /// Distinct entries always differ in `index`, which keeps the order
    /// total.
    fn cmp(&self, other: &Self) -> Ordering {
        self.trailing
            .cmp(&other.trailing)
            .then_with(|| other.rect.area().cmp(&self.rect.area()))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ActiveRect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ActiveRect {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ActiveRect {}

/// Min-heap of the rectangles whose extent still covers the sweep line.
#[derive(Debug, Default)]
pub(super) struct ActiveSet {
    heap: BinaryHeap<Reverse<ActiveRect>>,
}

impl ActiveSet {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Admit a rectangle once the sweep reaches its leading edge.
    pub(super) fn push(&mut self, index: usize, rect: Rect) {
        self.heap.push(Reverse(ActiveRect::new(index, rect)));
    }

    /// Drop every rectangle whose trailing edge sits at `x - 1`.
    ///
    /// The sweep visits consecutive coordinates, so testing the heap
    /// minimum for exact expiry is exhaustive.
    pub(super) fn evict_expired(&mut self, x: i64) {
        // No trailing edge sits below i64::MIN, so a scan starting there
        // has nothing to evict at its first coordinate.
        let expired = match x.checked_sub(1) {
            Some(expired) => expired,
            None => return,
        };
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.trailing != expired {
                break;
            }
            self.heap.pop();
        }
    }

    /// Visit the active rectangles in unspecified order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (usize, &Rect)> + '_ {
        self.heap
            .iter()
            .map(|Reverse(entry)| (entry.index, &entry.rect))
    }
}
