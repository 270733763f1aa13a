//! HashTable: a fixed array of chains plus the active key/value domains.
//!
//! The bucket count is fixed at construction; there is no resizing or
//! rehashing. Changing a domain only swaps a tag, existing elements stay in
//! the bucket they were hashed into. Elements are `(key, value)` pairs of
//! `Rc<Datum>` handles shared with the caller and matched by identity.

use crate::chain::Chain;
use crate::config::TableConfig;
use crate::domain::{Datum, Domain, Selector};
use crate::error::{Error, Result};
use crate::hashing;
use core::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// A stored pair. Both handles are shared with the caller.
#[derive(Debug)]
pub struct Entry {
    key: Rc<Datum>,
    value: Rc<Datum>,
}

impl Entry {
    pub fn key(&self) -> &Rc<Datum> {
        &self.key
    }

    pub fn value(&self) -> &Rc<Datum> {
        &self.value
    }
}

#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Chain<Entry>>,
    key_domain: Domain,
    value_domain: Domain,
}

impl HashTable {
    /// Allocate `bucket_count` empty buckets. Zero, negative, or
    /// out-of-range counts are rejected.
    pub fn new<N>(bucket_count: N, key_domain: Domain, value_domain: Domain) -> Result<Self>
    where
        N: TryInto<usize>,
    {
        let bucket_count = bucket_count
            .try_into()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::InvalidArgument("bucket count must be positive".into()))?;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|e| Error::AllocationError(e.to_string()))?;
        buckets.extend((0..bucket_count).map(Chain::new));

        debug!(bucket_count, %key_domain, %value_domain, "created hash table");
        Ok(Self {
            buckets,
            key_domain,
            value_domain,
        })
    }

    pub fn with_config(config: &TableConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.bucket_count, config.key_domain, config.value_domain)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of stored elements across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Chain::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Chain::is_empty)
    }

    pub fn key_domain(&self) -> Domain {
        self.key_domain
    }

    pub fn value_domain(&self) -> Domain {
        self.value_domain
    }

    pub fn domain(&self, which: Selector) -> Domain {
        match which {
            Selector::Key => self.key_domain,
            Selector::Value => self.value_domain,
        }
    }

    /// Retag keys or values. Stored elements are not moved.
    pub fn change_domain(&mut self, which: Selector, domain: Domain) {
        let slot = match which {
            Selector::Key => &mut self.key_domain,
            Selector::Value => &mut self.value_domain,
        };
        let from = *slot;
        debug!(selector = %which, %from, to = %domain, "changing domain");
        *slot = domain;
    }

    pub fn bucket(&self, index: usize) -> Option<&Chain<Entry>> {
        self.buckets.get(index)
    }

    /// Bucket that `key` hashes to under the current key domain.
    pub fn bucket_of(&self, key: &Datum) -> Result<usize> {
        hashing::bucket_index(self.key_domain, key, self.buckets.len())
    }

    fn check_value(&self, value: &Datum) -> Result<()> {
        if value.domain() == self.value_domain {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "value domain is {} but value is {}",
                self.value_domain,
                value.domain()
            )))
        }
    }

    /// Append `(key, value)` to the bucket selected by `key`. No duplicate
    /// check is made.
    pub fn add(&mut self, key: &Rc<Datum>, value: &Rc<Datum>) -> Result<()> {
        let index = self.bucket_of(key)?;
        self.check_value(value)?;
        trace!(bucket = index, %key, %value, "add");
        self.buckets[index].append(Rc::new(Entry {
            key: Rc::clone(key),
            value: Rc::clone(value),
        }));
        Ok(())
    }

    /// Value of the first element of the lowest non-empty bucket.
    pub fn first_data(&self) -> Result<&Rc<Datum>> {
        self.buckets
            .iter()
            .find_map(|c| c.first().ok())
            .map(|e| &e.value)
            .ok_or(Error::Empty)
    }

    /// Value of the last element of the highest non-empty bucket.
    pub fn last_data(&self) -> Result<&Rc<Datum>> {
        self.buckets
            .iter()
            .rev()
            .find_map(|c| c.last().ok())
            .map(|e| &e.value)
            .ok_or(Error::Empty)
    }

    /// Remove the element `first_data` would return and hand back its value.
    pub fn delete_first_data(&mut self) -> Result<Rc<Datum>> {
        let entry = self
            .buckets
            .iter_mut()
            .find(|c| !c.is_empty())
            .and_then(Chain::pop_front)
            .ok_or(Error::Empty)?;
        trace!(value = %entry.value, "delete first");
        Ok(Rc::clone(&entry.value))
    }

    /// Remove the element `last_data` would return and hand back its value.
    pub fn delete_last_data(&mut self) -> Result<Rc<Datum>> {
        let entry = self
            .buckets
            .iter_mut()
            .rev()
            .find(|c| !c.is_empty())
            .and_then(Chain::pop_back)
            .ok_or(Error::Empty)?;
        trace!(value = %entry.value, "delete last");
        Ok(Rc::clone(&entry.value))
    }

    /// Remove the first element in `key`'s bucket whose value is the very
    /// handle `value`.
    pub fn delete(&mut self, key: &Rc<Datum>, value: &Rc<Datum>) -> Result<()> {
        let index = self.bucket_of(key)?;
        let removed = self.buckets[index].remove_where(|e| Rc::ptr_eq(&e.value, value));
        trace!(bucket = index, %key, %value, removed = removed.is_some(), "delete");
        removed.map(|_| ()).ok_or(Error::NotFound)
    }

    /// Whether `key`'s bucket holds an element whose value is the very
    /// handle `value`.
    pub fn find(&self, key: &Rc<Datum>, value: &Rc<Datum>) -> Result<bool> {
        let index = self.bucket_of(key)?;
        Ok(self.buckets[index]
            .iter()
            .any(|e| Rc::ptr_eq(&e.value, value)))
    }

    /// Every element, bucket by bucket in ascending order, each bucket in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets.iter().flat_map(|c| c.iter().map(|e| &**e))
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "HashTable(buckets={}, key={}, value={})",
            self.buckets.len(),
            self.key_domain,
            self.value_domain
        )?;
        for chain in &self.buckets {
            write!(f, "[{}]", chain.index())?;
            for e in chain {
                write!(f, " ({} => {})", e.key, e.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
