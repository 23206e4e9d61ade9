use std::ops::{Index, IndexMut};

/// Growable, exclusively owned backing buffer of the priority queue.
///
/// Capacity is managed explicitly: it only ever grows, either by an explicit [`Storage::reserve`]
/// or by doubling when [`Storage::push_back`] finds the buffer full. Removing elements never
/// releases memory, so the capacity acts as a high-water mark.
///
/// Elements are relocated by move when the buffer grows. Moves never run user code, so a
/// reallocation can not be observed half-done.
#[derive(Debug)]
pub struct Storage<T> {
    items: Vec<T>,
}

impl<T> Storage<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Grows the buffer so it can hold at least `capacity` elements.
    /// Does nothing if the buffer is already large enough.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.items.capacity() {
            return;
        }
        tracing::trace!(from = self.items.capacity(), to = capacity, "growing queue storage");
        self.items.reserve_exact(capacity - self.items.len());
    }

    /// Appends `item`, doubling the capacity first if the buffer is full (minimum capacity 1).
    pub fn push_back(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grown = self.items.capacity().saturating_mul(2).max(1);
            self.reserve(grown);
        }
        self.items.push(item);
    }

    /// Moves the last element out of the buffer. The slot stays allocated.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Storage<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Storage<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
