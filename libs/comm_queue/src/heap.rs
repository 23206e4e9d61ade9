//! Binary heap maintenance over [`Storage`], parameterized by an [`Order`] policy.
//!
//! Children of index `i` live at `2i + 1` and `2i + 2`. For every valid parent/child pair,
//! `precedes(child, parent)` must be false.

use crate::storage::Storage;

/// Strict ordering policy of a priority queue.
///
/// `precedes(a, b)` returns `true` if `a` has to be handed out before `b`.
/// The relation must be a strict weak ordering: irreflexive and transitive.
///
/// Closures of the shape `Fn(&T, &T) -> bool` are policies as well, which allows picking the
/// order at construction time.
pub trait Order<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element first (`a < b`). Default policy of the queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

/// Largest element first (`a > b`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl<T: Ord> Order<T> for MinFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord> Order<T> for MaxFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Moves the element at `index` towards the root until its parent precedes it.
pub(crate) fn sift_up<T, O: Order<T>>(heap: &mut Storage<T>, mut index: usize, order: &O) {
    while index > 0 {
        let parent = parent(index);
        if !order.precedes(&heap[index], &heap[parent]) {
            break;
        }
        heap.swap(index, parent);
        index = parent;
    }
}

/// Moves the element at `index` towards the leaves until no child precedes it.
/// On ties between both children, the left one is picked.
pub(crate) fn sift_down<T, O: Order<T>>(heap: &mut Storage<T>, mut index: usize, order: &O) {
    let len = heap.len();

    while 2 * index + 1 < len {
        let left = 2 * index + 1;
        let right = left + 1;

        let mut best = index;
        if order.precedes(&heap[left], &heap[best]) {
            best = left;
        }
        if right < len && order.precedes(&heap[right], &heap[best]) {
            best = right;
        }

        if best == index {
            break;
        }
        heap.swap(index, best);
        index = best;
    }
}

/// Restores the heap property for arbitrarily ordered storage.
pub(crate) fn heapify<T, O: Order<T>>(heap: &mut Storage<T>, order: &O) {
    for index in (0..heap.len() / 2).rev() {
        sift_down(heap, index, order);
    }
}

/// Checks the heap property for every parent/child pair of `items`.
#[cfg(any(test, feature = "testing"))]
pub(crate) fn is_heap<T, O: Order<T>>(items: &[T], order: &O) -> bool {
    (1..items.len()).all(|child| !order.precedes(&items[child], &items[parent(child)]))
}
