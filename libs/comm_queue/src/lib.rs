//! A thread-safe, unbounded priority queue for handing work between threads.
//!
//! Producers [`push`](PriorityQueue::push), consumers block in
//! [`wait_nonempty_pop`](PriorityQueue::wait_nonempty_pop) until an item arrives, and either side
//! ends the exchange with [`done`](PriorityQueue::done), which wakes every blocked thread.
//!
//! ```
//! use std::{sync::Arc, thread};
//!
//! use comm_queue::PriorityQueue;
//!
//! let queue = Arc::new(PriorityQueue::new());
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         let mut received = vec![];
//!         while let Some(item) = queue.wait_nonempty_pop() {
//!             received.push(item);
//!         }
//!         received
//!     })
//! };
//!
//! for item in [3, 1, 2] {
//!     queue.push(item);
//! }
//! queue.done();
//!
//! let mut received = consumer.join().unwrap();
//! received.sort();
//! assert_eq!(received, vec![1, 2, 3]);
//! ```
//!
//! The backing buffer and the heap helpers stay private to the queue:
//!
//! ```compile_fail
//! use comm_queue::Storage;
//! ```
//!
//! ```compile_fail
//! let _ = comm_queue::is_heap(&[1, 2, 3], &comm_queue::MinFirst);
//! ```

mod error;
mod heap;
mod queue;
mod storage;
#[cfg(any(test, feature = "testing"))]
pub mod test;

// region:    --- Exports
pub use error::EmptyQueueError;
pub use heap::{MaxFirst, MinFirst, Order};
pub use queue::PriorityQueue;
// endregion: --- Exports
