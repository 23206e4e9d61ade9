use std::{
    fmt,
    sync::{
        Condvar, Mutex, MutexGuard, PoisonError, TryLockError,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    error::EmptyQueueError,
    heap::{self, MinFirst, Order},
    storage::Storage,
};

/// Thread-safe priority queue used to hand items from producer to consumer threads.
///
/// All state sits behind a single [`Mutex`]; a single [`Condvar`] signals "became non-empty",
/// "became empty" and shutdown. Blocking operations wait for `desired state || done` and
/// re-check both after every wake-up.
///
/// The queue is shared by reference (usually through an `Arc`) and is intentionally not
/// [`Clone`]: the backing buffer has exactly one owner.
///
/// # Ordering
/// `O` decides which element is handed out first, see [`Order`]. The default [`MinFirst`]
/// pops the smallest element. Elements that compare equal come out in no particular order.
pub struct PriorityQueue<T, O = MinFirst> {
    heap: Mutex<Storage<T>>,
    changed: Condvar,
    /// Only ever written while `heap` is locked, and only from `false` to `true`.
    done: AtomicBool,
    order: O,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue that hands out the smallest element first.
    pub fn new() -> Self {
        Self::with_order(MinFirst)
    }

    /// Creates an empty min-queue whose buffer can hold `capacity` items before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MinFirst)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Order<T>> PriorityQueue<T, O> {
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            heap: Mutex::new(Storage::with_capacity(capacity)),
            changed: Condvar::new(),
            done: AtomicBool::new(false),
            order,
        }
    }

    // region:    --- Non-blocking access

    /// Adds `item` and wakes up threads blocked on a non-empty queue.
    pub fn push(&self, item: T) {
        let mut heap = self.lock();
        self.push_locked(&mut heap, item);
        drop(heap);

        self.changed.notify_all();
    }

    /// Removes and returns the element with the highest priority.
    ///
    /// # Error
    /// Returns [`EmptyQueueError::Pop`] if the queue is empty.
    pub fn pop(&self) -> Result<T, EmptyQueueError> {
        let mut heap = self.lock();
        let item = self.pop_locked(&mut heap).ok_or(EmptyQueueError::Pop)?;
        self.notify_if_emptied(heap);
        Ok(item)
    }

    /// Removes up to `n` elements in priority order while holding the lock once.
    /// Returns fewer elements if the queue runs empty.
    pub fn drain(&self, n: usize) -> Vec<T> {
        let mut heap = self.lock();

        let mut drained = Vec::with_capacity(n.min(heap.len()));
        for _ in 0..n {
            let Some(item) = self.pop_locked(&mut heap) else {
                break;
            };
            drained.push(item);
        }

        if !drained.is_empty() {
            self.notify_if_emptied(heap);
        }
        drained
    }

    /// Returns a copy of the element with the highest priority without removing it.
    ///
    /// # Error
    /// Returns [`EmptyQueueError::Top`] if the queue is empty.
    pub fn top(&self) -> Result<T, EmptyQueueError>
    where
        T: Clone,
    {
        self.lock().first().cloned().ok_or(EmptyQueueError::Top)
    }

    /// Same as [`PriorityQueue::top`].
    pub fn peek(&self) -> Result<T, EmptyQueueError>
    where
        T: Clone,
    {
        self.top()
    }

    pub fn size(&self) -> usize {
        self.lock().len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Number of items the backing buffer holds before it has to grow again.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    // endregion: --- Non-blocking access

    // region:    --- Blocking access

    /// Blocks until the queue is empty, then pushes `item`.
    ///
    /// If the queue is shut down while waiting, `item` is dropped without being pushed and
    /// `false` is returned. Producers that can not afford to lose items must drain the queue
    /// before calling [`PriorityQueue::done`].
    pub fn wait_empty_push(&self, item: T) -> bool {
        let heap = self.lock();
        let mut heap = self
            .changed
            .wait_while(heap, |heap| !heap.is_empty() && !self.is_done())
            .unwrap_or_else(|poisoned| self.recover(poisoned));

        if self.is_done() {
            tracing::debug!("queue shut down while waiting to push, item discarded");
            return false;
        }

        self.push_locked(&mut heap, item);
        drop(heap);

        self.changed.notify_all();
        true
    }

    /// Blocks until an element is available and removes it.
    ///
    /// Returns `None` once the queue has been shut down and holds no more elements. Elements
    /// that are still queued at shutdown are handed out first.
    pub fn wait_nonempty_pop(&self) -> Option<T> {
        let mut heap = self.wait_nonempty();
        let item = self.pop_locked(&mut heap)?;
        self.notify_if_emptied(heap);
        Some(item)
    }

    /// Blocks until an element is available and returns a copy of it, leaving it queued.
    ///
    /// Returns `None` once the queue has been shut down and holds no more elements.
    pub fn wait_and_get_top(&self) -> Option<T>
    where
        T: Clone,
    {
        self.wait_nonempty().first().cloned()
    }

    // endregion: --- Blocking access

    // region:    --- Shutdown

    /// Shuts the queue down and wakes every blocked thread.
    ///
    /// Blocking calls return instead of waiting forever: pops yield `None` once the queue is
    /// empty, waiting pushes discard their item. Calling this more than once has no additional
    /// effect.
    pub fn done(&self) {
        {
            let _heap = self.lock();
            if !self.done.swap(true, Ordering::AcqRel) {
                tracing::debug!("queue shut down");
            }
        }

        // Every kind of waiter has to re-check its predicate, so wake them all.
        self.changed.notify_all();
    }

    /// Returns whether [`PriorityQueue::done`] has been called.
    ///
    /// The flag is read without taking the lock. It is advisory only: it may turn `true` right
    /// after this returns `false`, but never the other way around.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    // endregion: --- Shutdown

    /// Checks the heap property of the current contents.
    #[cfg(any(test, feature = "testing"))]
    pub fn is_valid_heap(&self) -> bool {
        heap::is_heap(self.lock().as_slice(), &self.order)
    }

    fn lock(&self) -> MutexGuard<'_, Storage<T>> {
        self.heap.lock().unwrap_or_else(|poisoned| self.recover(poisoned))
    }

    /// Takes over the storage after a thread panicked while holding the lock, e.g. inside a
    /// comparison. Sifting only swaps, so every element is still valid, but an interrupted sift
    /// may have left one out of place: the heap is rebuilt before the lock is handed out again.
    fn recover<'a>(
        &self,
        poisoned: PoisonError<MutexGuard<'a, Storage<T>>>,
    ) -> MutexGuard<'a, Storage<T>> {
        let mut heap = poisoned.into_inner();
        tracing::debug!(len = heap.len(), "queue lock poisoned, rebuilding heap");
        heap::heapify(&mut heap, &self.order);
        self.heap.clear_poison();
        heap
    }

    fn wait_nonempty(&self) -> MutexGuard<'_, Storage<T>> {
        let heap = self.lock();
        self.changed
            .wait_while(heap, |heap| heap.is_empty() && !self.is_done())
            .unwrap_or_else(|poisoned| self.recover(poisoned))
    }

    fn push_locked(&self, heap: &mut Storage<T>, item: T) {
        heap.push_back(item);
        let last = heap.len() - 1;
        heap::sift_up(heap, last, &self.order);
    }

    /// Swaps the root with the last element, takes it out and restores the heap.
    fn pop_locked(&self, heap: &mut Storage<T>) -> Option<T> {
        let last = heap.len().checked_sub(1)?;
        heap.swap(0, last);
        let item = heap.pop_back()?;
        if !heap.is_empty() {
            heap::sift_down(heap, 0, &self.order);
        }
        Some(item)
    }

    /// Releases the lock and wakes threads waiting in [`PriorityQueue::wait_empty_push`] if
    /// the last element was just removed.
    fn notify_if_emptied(&self, heap: MutexGuard<'_, Storage<T>>) {
        let emptied = heap.is_empty();
        drop(heap);

        if emptied {
            self.changed.notify_all();
        }
    }
}

impl<T, O> fmt::Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = match self.heap.try_lock() {
            Ok(heap) => Some(heap),
            Err(TryLockError::Poisoned(e)) => Some(e.into_inner()),
            // Formatting from a thread that holds the lock must not deadlock.
            Err(TryLockError::WouldBlock) => None,
        };

        let mut s = f.debug_struct("PriorityQueue");
        if let Some(heap) = heap {
            s.field("len", &heap.len());
            s.field("capacity", &heap.capacity());
        } else {
            s.field("len", &format_args!("<locked>"));
        }
        s.field("done", &self.done.load(Ordering::Acquire)).finish()
    }
}
