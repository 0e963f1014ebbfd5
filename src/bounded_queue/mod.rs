use std::fmt::{self, Debug, Formatter};

use serde::{Serialize, Serializer};

pub use self::error::Error;
pub use self::iter::Iter;

mod error;
mod iter;
#[cfg(test)]
mod test;

/// A first-in first-out queue that holds at most a fixed number of elements.
///
/// Elements live in a circular buffer allocated once at construction. `put` writes behind the newest element and `get` takes the oldest, so neither ever moves the rest of the queue.
///
/// Nothing is ever evicted: a full queue refuses `put` and an empty one refuses `get`.
pub struct BoundedQueue<T> {
	storage: Box<[Option<T>]>,
	/// Physical index of the oldest element. Meaningless while `len == 0`.
	first: usize,
	len: usize,
}

impl<T> BoundedQueue<T> {
	pub fn new(capacity: usize) -> Result<Self, Error> {
		if capacity == 0 {
			log::debug!("refusing to create a queue with capacity 0");
			return Err(Error::InvalidCapacity);
		}

		let storage = std::iter::repeat_with(|| None).take(capacity).collect();
		Ok(Self {
			storage,
			first: 0,
			len: 0,
		})
	}

	/// Appends `element` behind the newest element.
	pub fn put(&mut self, element: T) -> Result<(), Error> {
		self.put_opt(Some(element))
	}

	/// Like [`put`](Self::put), but takes a possibly absent element. `None` is refused with [`Error::NullElement`].
	///
	/// The absence check happens before the fullness check.
	pub fn put_opt(&mut self, element: Option<T>) -> Result<(), Error> {
		let Some(element) = element else {
			log::debug!("put: refusing absent element");
			return Err(Error::NullElement);
		};
		if self.is_full() {
			log::debug!("put: refusing element, all {} slots taken", self.capacity());
			return Err(Error::QueueFull);
		}

		let slot = self.physical(self.len);
		debug_assert!(self.storage[slot].is_none(), "slot {slot} is still occupied");
		self.storage[slot] = Some(element);
		self.len += 1;
		log::trace!("put: slot {slot}, len {}", self.len);
		Ok(())
	}

	/// Removes and returns the oldest element.
	pub fn get(&mut self) -> Result<T, Error> {
		if self.is_empty() {
			log::debug!("get: nothing to take");
			return Err(Error::QueueEmpty);
		}

		let slot = self.first;
		// `take` releases the slot so the queue doesn't keep the value alive.
		let element = self.storage[slot]
			.take()
			.unwrap_or_else(|| unreachable!("occupied slot {slot} is vacant"));
		self.first = self.physical(1);
		self.len -= 1;
		log::trace!("get: slot {slot}, len {}", self.len);
		Ok(element)
	}

	/// The oldest element, left in place.
	pub fn peek(&self) -> Option<&T> {
		if self.is_empty() {
			None
		} else {
			self.storage[self.first].as_ref()
		}
	}

	/// Drops every element and rewinds to the freshly constructed state.
	pub fn clear(&mut self) {
		self.storage.fill_with(|| None);
		self.first = 0;
		self.len = 0;
	}

	pub fn capacity(&self) -> usize {
		self.storage.len()
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn is_full(&self) -> bool {
		self.len == self.capacity()
	}

	/// Storage index of the oldest element. This is a physical position, not a count.
	pub fn first_index(&self) -> usize {
		self.first
	}

	/// `first_index() + len()`, deliberately not wrapped.
	///
	/// Once the occupied window wraps past the end of the storage this exceeds `capacity() - 1` and names no real slot, so it is for diagnostics only.
	pub fn last_index(&self) -> usize {
		self.first + self.len
	}

	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(&self.storage, self.first, self.len)
	}

	/// Maps a logical offset from the front to a storage index.
	fn physical(&self, offset: usize) -> usize {
		debug_assert!(offset <= self.capacity());
		(self.first + offset) % self.capacity()
	}
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

impl<T: Debug> Debug for BoundedQueue<T> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.debug_list().entries(self.iter()).finish()
	}
}

impl<T: Serialize> Serialize for BoundedQueue<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for BoundedQueue<T> {
	fn eq(&self, other: &[U]) -> bool {
		self.len == other.len() && self.iter().zip(other).all(|(ours, theirs)| ours == theirs)
	}
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for BoundedQueue<T> {
	fn eq(&self, other: &[U; N]) -> bool {
		*self == other[..]
	}
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for BoundedQueue<T> {
	fn eq(&self, other: &Vec<U>) -> bool {
		*self == other[..]
	}
}

/// Compares contents only; capacity and physical layout are ignored.
impl<T: PartialEq<U>, U> PartialEq<BoundedQueue<U>> for BoundedQueue<T> {
	fn eq(&self, other: &BoundedQueue<U>) -> bool {
		self.len == other.len && self.iter().zip(other).all(|(ours, theirs)| ours == theirs)
	}
}
