//! Streaming first-occurrence classification.
//!
//! Purpose
//! - Label every element of a (possibly unbounded) sequence as the first
//!   occurrence of its key or as a duplicate of an earlier one, in one forward
//!   pass, without reordering or dropping anything.
//! - Each label is produced before the next input element is pulled.
//!
//! Hashable vs. unhashable
//! - Keys implement [`TryHash`]. Ordinary `Hash + Eq` types always hash. Types
//!   like [`Value`] decide per element by attempting the hash; a failed attempt
//!   routes that key to a linear-scan store (see [`Seen`]).
//!
//! Cost
//! - Memory grows with the number of distinct keys and is held until the
//!   adapter is dropped. Unbounded input means unbounded memory.

mod seen;
mod value;

pub use seen::{Seen, SeenCfg, TryHash, Unhashable};
pub use value::Value;

use std::fmt;
use std::iter::FusedIterator;

use crate::adapters::StreamError;

/// Yields `(element, is_first_occurrence)` for every input element.
pub struct UniqueEverseen<I, F, K> {
    iter: I,
    key: F,
    seen: Seen<K>,
}

/// Classify elements by themselves.
///
/// Every element is cloned to serve as its key, duplicates included; the clone
/// is dropped again on the duplicate path. Use the `_by_key` form with a cheap
/// key when cloning is expensive.
pub fn is_unique_everseen<I>(
    iterable: I,
) -> UniqueEverseen<I::IntoIter, fn(&I::Item) -> I::Item, I::Item>
where
    I: IntoIterator,
    I::Item: TryHash + Clone,
{
    is_unique_everseen_by_key(iterable, <I::Item as Clone>::clone as fn(&I::Item) -> I::Item)
}

/// Classify elements by a derived key.
pub fn is_unique_everseen_by_key<I, F, K>(iterable: I, key: F) -> UniqueEverseen<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
    UniqueEverseen {
        iter: iterable.into_iter(),
        key,
        seen: Seen::new(),
    }
}

impl<I, F, K> UniqueEverseen<I, F, K> {
    /// Keys recorded so far.
    pub fn seen(&self) -> &Seen<K> {
        &self.seen
    }
}

impl<I, F, K> Iterator for UniqueEverseen<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let first = self.seen.insert((self.key)(&item));
        Some((item, first))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, K> ExactSizeIterator for UniqueEverseen<I, F, K>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
}

impl<I, F, K> FusedIterator for UniqueEverseen<I, F, K>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
}

impl<I: fmt::Debug, F, K> fmt::Debug for UniqueEverseen<I, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueEverseen")
            .field("iter", &self.iter)
            .field("seen", &self.seen.len())
            .finish()
    }
}

/// Outcome of offering a key to a [`DuplicateGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admit {
    First,
    /// The key repeated an earlier one; the gate is now closed.
    Duplicate,
    /// An earlier duplicate already closed the gate.
    Closed,
}

/// First-occurrence check that closes for good at the first duplicate.
///
/// Shared by [`NoDuplicates`] and callers that pull elements themselves.
#[derive(Debug)]
pub struct DuplicateGate<K> {
    seen: Seen<K>,
    closed: bool,
}

impl<K: TryHash> Default for DuplicateGate<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TryHash> DuplicateGate<K> {
    pub fn new() -> Self {
        Self {
            seen: Seen::new(),
            closed: false,
        }
    }

    /// Check callers can make before pulling another element.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn admit(&mut self, key: K) -> Admit {
        if self.closed {
            return Admit::Closed;
        }
        if self.seen.insert(key) {
            Admit::First
        } else {
            self.closed = true;
            Admit::Duplicate
        }
    }
}

/// Passes elements through until the first duplicate, which becomes an error.
pub struct NoDuplicates<I, F, K> {
    iter: I,
    key: F,
    gate: DuplicateGate<K>,
    name: String,
}

/// Check that no element repeats. `name` labels the error message.
pub fn no_duplicates<I>(
    iterable: I,
    name: impl Into<String>,
) -> NoDuplicates<I::IntoIter, fn(&I::Item) -> I::Item, I::Item>
where
    I: IntoIterator,
    I::Item: TryHash + Clone,
{
    no_duplicates_by_key(iterable, <I::Item as Clone>::clone as fn(&I::Item) -> I::Item, name)
}

/// Check that no key repeats.
pub fn no_duplicates_by_key<I, F, K>(
    iterable: I,
    key: F,
    name: impl Into<String>,
) -> NoDuplicates<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
    NoDuplicates {
        iter: iterable.into_iter(),
        key,
        gate: DuplicateGate::new(),
        name: name.into(),
    }
}

impl<I, F, K> Iterator for NoDuplicates<I, F, K>
where
    I: Iterator,
    I::Item: fmt::Debug,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
    type Item = Result<I::Item, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.gate.is_closed() {
            return None;
        }
        let item = self.iter.next()?;
        match self.gate.admit((self.key)(&item)) {
            Admit::First => Some(Ok(item)),
            Admit::Duplicate => {
                let err = StreamError::Duplicate {
                    name: self.name.clone(),
                    element: format!("{item:?}"),
                };
                tracing::debug!(%err, "duplicate rejected");
                Some(Err(err))
            }
            Admit::Closed => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.gate.is_closed() {
            (0, Some(0))
        } else {
            let (_, hi) = self.iter.size_hint();
            (0, hi)
        }
    }
}

impl<I, F, K> FusedIterator for NoDuplicates<I, F, K>
where
    I: FusedIterator,
    I::Item: fmt::Debug,
    F: FnMut(&I::Item) -> K,
    K: TryHash,
{
}

#[cfg(test)]
mod tests;
