use std::iter::FusedIterator;

/// Front-to-back traversal of a [`BoundedQueue`](super::BoundedQueue).
///
/// Cloning gives an independent cursor at the same position, so a traversal can be restarted from any point.
#[derive(Debug)]
pub struct Iter<'a, T> {
	storage: &'a [Option<T>],
	next: usize,
	remaining: usize,
}

impl<'a, T> Iter<'a, T> {
	pub(super) fn new(storage: &'a [Option<T>], first: usize, len: usize) -> Self {
		Self {
			storage,
			next: first,
			remaining: len,
		}
	}
}

// Derive would demand `T: Clone`.
impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			storage: self.storage,
			next: self.next,
			remaining: self.remaining,
		}
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		if self.remaining == 0 {
			return None;
		}
		let slot = self.next;
		self.next = (self.next + 1) % self.storage.len();
		self.remaining -= 1;
		let element = self.storage[slot]
			.as_ref()
			.unwrap_or_else(|| unreachable!("occupied slot {slot} is vacant"));
		Some(element)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
