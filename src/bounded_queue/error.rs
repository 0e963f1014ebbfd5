use serde::Serialize;
use thiserror::Error;

/// Every way an operation on a [`BoundedQueue`](super::BoundedQueue) can be refused.
///
/// A refused operation never changes the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum Error {
	#[error("capacity must be positive")]
	InvalidCapacity,
	#[error("put: element cannot be null")]
	NullElement,
	#[error("put: full bounded queue")]
	QueueFull,
	#[error("get: empty bounded queue")]
	QueueEmpty,
}
