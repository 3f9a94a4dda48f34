//! Binary heap priority queue.
//!
//! Ordering comes from a `less` predicate supplied at construction. An optional
//! limit turns the heap into a bounded queue that evicts instead of growing.
//!
//! ```
//! use priority_heap::PriorityHeap;
//!
//! let mut heap = PriorityHeap::new(|a: &i32, b: &i32| a < b, Some(3)).unwrap();
//! heap.extend([3, 2, 1]);
//! heap.push(2);
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.into_sorted_vec(), [1, 2, 2]);
//! ```

mod error;
mod heap;
mod options;

pub use error::HeapError;
pub use heap::PriorityHeap;
pub use options::{HeapOptions, DEFAULT_SLOTS};
