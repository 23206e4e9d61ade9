use thiserror::Error;

/// A non-blocking accessor was called on an empty queue.
///
/// This is a usage error: check [`crate::PriorityQueue::empty`] first, or use one of the
/// blocking variants, which never produce it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQueueError {
    #[error("pop() attempted on empty communication queue.")]
    Pop,
    #[error("top() attempted on empty communication queue.")]
    Top,
}
