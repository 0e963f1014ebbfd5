//! A fixed-capacity FIFO queue backed by a circular buffer.
//!
//! ```
//! use bqueue::{BoundedQueue, Error};
//!
//! let mut queue = BoundedQueue::new(2)?;
//! queue.put("a")?;
//! queue.put("b")?;
//! assert_eq!(queue.put("c"), Err(Error::QueueFull));
//! assert_eq!(queue.get()?, "a");
//! # Ok::<(), Error>(())
//! ```

pub use self::bounded_queue::{BoundedQueue, Error, Iter};

pub mod bounded_queue;
