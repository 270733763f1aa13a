//! Bucket selection strategies, one pure function per domain.
//!
//! These are deliberately simple and not collision resistant. Every result
//! is reduced with floor-mod, so negative integer keys land in `0..n` as
//! well.

use crate::domain::{Datum, Domain};
use crate::error::{Error, Result};

#[inline]
fn floor_mod(v: i128, n: usize) -> usize {
    // n > 0 and fits in i128; the result is in 0..n.
    v.rem_euclid(n as i128) as usize
}

/// `key mod n`.
pub fn hash_integer(key: i64, n: usize) -> usize {
    floor_mod(i128::from(key), n)
}

/// `(sum of i * c for i in 1..=c) mod n`, where `c` is the code point.
pub fn hash_character(key: char, n: usize) -> usize {
    let c = i128::from(u32::from(key));
    floor_mod(c * (c * (c + 1) / 2), n)
}

/// `(sum of i * s[i] for i in 1..=len) mod n` over the UTF-8 bytes, positions
/// 1-indexed.
pub fn hash_string(key: &str, n: usize) -> usize {
    let m = n as u128;
    let sum = key
        .bytes()
        .enumerate()
        .fold(0u128, |acc, (i, b)| {
            let weight = (i as u128 + 1) % m;
            (acc + weight * u128::from(b)) % m
        });
    sum as usize
}

/// Dispatch on the configured key domain. A datum of a different variant is
/// rejected rather than reinterpreted.
pub fn bucket_index(domain: Domain, key: &Datum, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::InvalidArgument("bucket count must be positive".into()));
    }
    match (domain, key) {
        (Domain::Integer, Datum::Integer(k)) => Ok(hash_integer(*k, n)),
        (Domain::Character, Datum::Character(c)) => Ok(hash_character(*c, n)),
        (Domain::String, Datum::String(s)) => Ok(hash_string(s, n)),
        (expected, other) => Err(Error::InvalidArgument(format!(
            "key domain is {expected} but key is {}",
            other.domain()
        ))),
    }
}
