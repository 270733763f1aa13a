//! chained-hashtable: a fixed-bucket hash table whose buckets are
//! sentinel-bounded doubly linked chains, keyed by one of three built-in
//! data domains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, explicit separate-chaining table where every layer has
//!   a narrow contract and the table never reaches into node internals.
//! - Layers:
//!   - Node<T>: one `Rc<T>` data handle plus prev/next arena keys.
//!   - Chain<T>: a `SlotMap` arena holding two permanent sentinels and the
//!     element nodes between them. Insert/unlink never special-case the
//!     ends because every element always has two neighbours.
//!   - HashTable: a `Vec` of chains, one per bucket, plus the current key
//!     and value `Domain` tags. It picks a bucket and delegates to the
//!     chain.
//!
//! Ownership
//! - Keys and values are `Rc<Datum>` handles shared with the caller. The
//!   table clones the handle on `add`, never the datum, and drops only its
//!   own handle on removal.
//! - Matching is by identity (`Rc::ptr_eq`): two handles to equal content
//!   are different elements.
//! - `Rc` keeps every container `!Send`/`!Sync`; callers that need sharing
//!   across threads must wrap a whole table behind their own lock.
//!
//! Hashing
//! - One pure function per domain, selected by `match` on the table's key
//!   tag. A key whose variant differs from the tag is rejected.
//! - Results are reduced with floor-mod so negative integers stay in range.
//! - Changing a domain retags the table without moving stored elements;
//!   only later `add`/`find`/`delete` calls hash under the new tag.
//!
//! Notes and non-goals
//! - Fixed bucket count: no resizing, no rehashing.
//! - No duplicate detection: adding the same pair twice stores it twice.
//! - Order is only guaranteed within a bucket (insertion order).
//! - Hashes are not collision resistant.

pub mod chain;
mod chain_proptest;
pub mod config;
pub mod domain;
pub mod error;
pub mod hash_table;
pub mod hashing;
pub mod node;

// Public surface
pub use chain::Chain;
pub use config::TableConfig;
pub use domain::{Datum, Domain, Selector};
pub use error::{Error, Result, Status};
pub use hash_table::{Entry, HashTable};
pub use node::{Node, NodeKey};
