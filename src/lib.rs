#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A HashMap implementation using linear probing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers, plus the
/// dictionary conveniences built on it (`pop`, `from_keys`, union, subset
/// ordering).
pub mod hash_map;

pub mod hash_table;

/// Error type shared by the table and the map.
pub mod error;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when a `HashMap` names none.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when a `HashMap` names none.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// The hasher builder used when a `HashMap` names none.
        ///
        /// Without `std` or `foldhash` there is no source of random keys, so
        /// this falls back to SipHash with fixed keys.
        #[allow(deprecated)]
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<core::hash::SipHasher>;
    }
}
