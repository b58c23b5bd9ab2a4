//! A doubly linked list of `u32` values that stores one link word per node:
//! the XOR of the previous and next node addresses.
//!
//! Nodes live in a single growable arena of words and are addressed by their
//! offset into it. Nodes are never freed, so addresses stay valid for the
//! lifetime of the list, including across arena growth.
//!
//! ```
//! use xor_arena_list::{NOT_FOUND, XorLinkedList};
//!
//! let mut list = XorLinkedList::new();
//! let two = list.append(2)?;
//! let zero = list.prepend(0)?;
//! list.insert_between(1, zero, two)?;
//! assert_eq!(vec![0, 1, 2], list.iter().collect::<Vec<_>>());
//!
//! list.reverse();
//! assert_eq!(vec![2, 1, 0], list.iter().collect::<Vec<_>>());
//! assert_eq!(NOT_FOUND, list.address_of(42));
//! # Ok::<(), xor_arena_list::XorListError>(())
//! ```

mod address;
mod arena;
mod config;
mod error;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde_impl;

pub use address::Address;
pub use config::ArenaConfig;
pub use error::{Result, XorListError};
pub use iter::{Addresses, Iter};
pub use list::XorLinkedList;

/// Sentinel address meaning "no node".
pub const NOT_FOUND: Address = Address::NOT_FOUND;

/// Words per node: one value word and one link word.
pub const ELEMENT_SIZE: usize = 2;

/// Bytes per arena word.
pub const WORD_SIZE: usize = size_of::<u32>();

/// Nodes a default arena holds before it first grows.
pub const INITIAL_CAPACITY: usize = 8;

/// Hard node ceiling. Keeps every address below `2^21`, so no address or
/// XOR of two addresses can collide with `NOT_FOUND`.
pub const MAX_CAPACITY: usize = 1 << 20;
