use std::rc::Rc;

use crate::bounded_queue::{BoundedQueue, Error};

const CAPACITY: usize = 5;

fn queue() -> BoundedQueue<i32> {
	BoundedQueue::new(CAPACITY).unwrap()
}

fn filled(values: &[i32]) -> BoundedQueue<i32> {
	let mut queue = queue();
	for &value in values {
		queue.put(value).unwrap();
	}
	queue
}

#[test]
fn zero_capacity() {
	let error = BoundedQueue::<i32>::new(0).unwrap_err();
	assert_eq!(error, Error::InvalidCapacity);
	assert_eq!(error.to_string(), "capacity must be positive");
}

#[test]
fn fresh() {
	for capacity in 1..=16 {
		let queue = BoundedQueue::<u8>::new(capacity).unwrap();
		assert!(queue.is_empty());
		assert!(!queue.is_full());
		assert_eq!(queue.len(), 0);
		assert_eq!(queue.capacity(), capacity);
		assert_eq!(queue.first_index(), 0);
		assert_eq!(queue.iter().next(), None);
	}
}

#[test]
fn put_until_full() {
	let queue = filled(&[1, 2, 3, 4, 5]);
	assert!(!queue.is_empty());
	assert!(queue.is_full());
	assert_eq!(queue.len(), 5);
	assert_eq!(queue, [1, 2, 3, 4, 5]);
	assert_eq!(queue.iter().next(), Some(&1));
	assert_eq!(queue.iter().last(), Some(&5));
}

#[test]
fn len_tracks_puts() {
	let mut queue = queue();
	for k in 1..=5 {
		queue.put(k * 10).unwrap();
		assert_eq!(queue.len(), k as usize);
		assert_eq!(queue.iter().copied().collect::<Vec<_>>(), (1..=k).map(|i| i * 10).collect::<Vec<_>>());
	}
}

#[test]
fn put_absent() {
	let mut queue = filled(&[1, 2]);
	let error = queue.put_opt(None).unwrap_err();
	assert_eq!(error, Error::NullElement);
	assert_eq!(error.to_string(), "put: element cannot be null");
	assert_eq!(queue, [1, 2]);
}

#[test]
fn put_absent_into_full_queue() {
	// Absence is reported ahead of fullness.
	let mut queue = filled(&[1, 2, 3, 4, 5]);
	assert_eq!(queue.put_opt(None), Err(Error::NullElement));
}

#[test]
fn put_present_opt() {
	let mut queue = queue();
	queue.put_opt(Some(7)).unwrap();
	assert_eq!(queue, [7]);
}

#[test]
fn put_full() {
	let mut queue = filled(&[1, 2, 3, 4, 5]);
	let error = queue.put(6).unwrap_err();
	assert_eq!(error, Error::QueueFull);
	assert_eq!(error.to_string(), "put: full bounded queue");
	assert_eq!(queue.len(), 5);
	assert_eq!(queue, [1, 2, 3, 4, 5]);
}

#[test]
fn get_empty() {
	let mut queue = queue();
	let error = queue.get().unwrap_err();
	assert_eq!(error, Error::QueueEmpty);
	assert_eq!(error.to_string(), "get: empty bounded queue");
	assert_eq!(queue.len(), 0);
	assert_eq!(queue.first_index(), 0);
}

#[test]
fn get_returns_oldest() {
	let mut queue = filled(&[1, 2, 3]);
	assert_eq!(queue.get(), Ok(1));
	assert_eq!(queue, [2, 3]);
}

#[test]
fn full_then_get() {
	let mut queue = filled(&[1, 2, 3, 4, 5]);
	assert_eq!(queue.put(6), Err(Error::QueueFull));
	assert_eq!(queue.get(), Ok(1));
	assert_eq!(queue, [2, 3, 4, 5]);
	assert_eq!(queue.len(), 4);
	assert!(!queue.is_full());
}

#[test]
fn fifo_interleaved() {
	let mut queue = queue();
	queue.put(1).unwrap();
	queue.put(2).unwrap();
	assert_eq!(queue.get(), Ok(1));
	queue.put(3).unwrap();
	assert_eq!(queue.get(), Ok(2));
	assert_eq!(queue.get(), Ok(3));
	assert_eq!(queue.get(), Err(Error::QueueEmpty));
}

#[test]
fn repeated_cycles() {
	let mut queue = queue();
	for round in 0..7 {
		let values = (0..5).map(|i| round * 100 + i).collect::<Vec<_>>();
		for &value in &values {
			queue.put(value).unwrap();
		}
		assert!(queue.is_full());
		let drained = (0..5).map(|_| queue.get().unwrap()).collect::<Vec<_>>();
		assert_eq!(drained, values);
		assert!(queue.is_empty());
	}
}

#[test]
fn wraparound() {
	let mut queue = filled(&[1, 2, 3, 4, 5]);
	assert_eq!(queue.get(), Ok(1));
	assert_eq!(queue.get(), Ok(2));
	assert_eq!(queue.get(), Ok(3));
	queue.put(6).unwrap();
	queue.put(7).unwrap();
	// 6 and 7 landed in slots 0 and 1.
	assert_eq!(queue.first_index(), 3);
	assert_eq!(queue.len(), 4);
	assert_eq!(queue, [4, 5, 6, 7]);
	assert_eq!(queue.peek(), Some(&4));
	queue.put(8).unwrap();
	assert!(queue.is_full());
	assert_eq!(queue.put(9), Err(Error::QueueFull));
	assert_eq!((0..5).map(|_| queue.get().unwrap()).collect::<Vec<_>>(), [4, 5, 6, 7, 8]);
	assert_eq!(queue.first_index(), 3);
}

#[test]
fn single_slot() {
	let mut queue = BoundedQueue::new(1).unwrap();
	for value in ["a", "b", "c"] {
		queue.put(value).unwrap();
		assert!(queue.is_full());
		assert_eq!(queue.put("overflow"), Err(Error::QueueFull));
		assert_eq!(queue.first_index(), 0);
		assert_eq!(queue.get(), Ok(value));
		assert!(queue.is_empty());
	}
}

#[test]
fn first_index() {
	let mut queue = queue();
	queue.put(1).unwrap();
	assert_eq!(queue.first_index(), 0);
	queue.put(2).unwrap();
	queue.get().unwrap();
	assert_eq!(queue.first_index(), 1);
}

#[test]
fn last_index() {
	let mut queue = filled(&[1, 2, 3]);
	assert_eq!(queue.last_index(), 3);

	queue.get().unwrap();
	queue.get().unwrap();
	queue.put(4).unwrap();
	queue.put(5).unwrap();
	queue.put(6).unwrap();
	// Wrapped: the window is slots 2, 3, 4, 0 but the index is not reduced.
	assert_eq!(queue.first_index(), 2);
	assert_eq!(queue.last_index(), 6);
}

#[test]
fn traversal_is_restartable() {
	let queue = filled(&[1, 2, 3]);
	let mut iter = queue.iter();
	assert_eq!(iter.len(), 3);
	assert_eq!(iter.next(), Some(&1));
	let rest = iter.clone();
	assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3]);
	assert_eq!(rest.copied().collect::<Vec<_>>(), [2, 3]);
	assert_eq!(queue.iter().count(), 3);
	assert_eq!((&queue).into_iter().sum::<i32>(), 6);
	// Traversal is read-only.
	assert_eq!(queue.len(), 3);
	assert_eq!(queue.first_index(), 0);
}

#[test]
fn get_releases_element() {
	let element = Rc::new(());
	let mut queue = BoundedQueue::new(2).unwrap();
	queue.put(Rc::clone(&element)).unwrap();
	assert_eq!(Rc::strong_count(&element), 2);
	drop(queue.get().unwrap());
	assert_eq!(Rc::strong_count(&element), 1);
}

#[test]
fn clear() {
	let element = Rc::new(());
	let mut queue = BoundedQueue::new(3).unwrap();
	queue.put(Rc::clone(&element)).unwrap();
	queue.put(Rc::clone(&element)).unwrap();
	queue.get().unwrap();
	queue.clear();
	assert!(queue.is_empty());
	assert_eq!(queue.first_index(), 0);
	assert_eq!(Rc::strong_count(&element), 1);
	assert_eq!(queue.peek(), None);
}

#[test]
fn equality_ignores_layout() {
	let mut wrapped = filled(&[0, 0, 1, 2]);
	wrapped.get().unwrap();
	wrapped.get().unwrap();
	wrapped.put(3).unwrap();
	let mut other = BoundedQueue::new(8).unwrap();
	for value in [1, 2, 3] {
		other.put(value).unwrap();
	}
	assert_eq!(wrapped, other);
	assert_eq!(wrapped, vec![1, 2, 3]);
	assert_ne!(wrapped, [1, 2]);
}

#[test]
fn debug_and_serialize() {
	let mut queue = filled(&[9, 1, 2]);
	queue.get().unwrap();
	assert_eq!(format!("{queue:?}"), "[1, 2]");
	assert_eq!(serde_json::to_string(&queue).unwrap(), "[1,2]");
}
