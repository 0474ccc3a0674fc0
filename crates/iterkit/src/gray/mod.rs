//! Mixed-radix reflected Gray-code enumeration.
//!
//! Purpose
//! - Walk every tuple of `[0, r_1) × … × [0, r_k)` exactly once so that each
//!   step changes one coordinate by exactly one unit.
//! - Keep state O(k): the current digits plus one direction per dimension.
//!   The total count `∏ r_i` may be far larger than anything we could store.
//!
//! Order
//! - The first coordinate moves fastest. It sweeps up, then back down; every
//!   time it turns around the next coordinate with room in its own direction
//!   takes one unit step. For `(2, 2)` this is the binary reflected code
//!   `(0,0) (1,0) (1,1) (0,1)`.
//! - Radix 1 dimensions never move. Any radix 0 makes the walk empty. No
//!   radices at all give exactly one empty tuple.
//!
//! Code cross-refs: `GrayProduct`, `gray_product` (pool form in `pools.rs`).

mod pools;

pub use pools::{gray_product, GrayPools};

use std::fmt;
use std::iter::FusedIterator;

/// Errors surfaced when validating radices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadixError {
    /// A dimension was given a negative size.
    InvalidRadix { index: usize, radix: i64 },
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::InvalidRadix { index, radix } => write!(
                f,
                "radix {} at position {} is invalid (must be >= 0)",
                radix, index
            ),
        }
    }
}

impl std::error::Error for RadixError {}

/// Current movement sense of one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn flip(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// The unit step that produced the current tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change {
    pub index: usize,
    /// Either `+1` or `-1`.
    pub delta: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Fresh,
    Running,
    Done,
}

/// Lazy, forward-only Gray walk over a mixed-radix product.
///
/// Not restartable: once exhausted it stays exhausted. Build a new instance to
/// enumerate again.
#[derive(Debug)]
pub struct GrayProduct {
    radices: Vec<usize>,
    digits: Vec<usize>,
    direction: Vec<Direction>,
    cursor: Cursor,
    emitted: u128,
    total: Option<u128>,
    last_change: Option<Change>,
}

impl GrayProduct {
    /// Validate signed radices and build the walk.
    ///
    /// Pre: every radix is `>= 0`. Zero is an empty dimension, not an error.
    /// Post: no tuple has been produced yet; the first `next` yields all zeros.
    pub fn new(radices: &[i64]) -> Result<Self, RadixError> {
        let sizes = radices
            .iter()
            .enumerate()
            .map(|(index, &radix)| {
                usize::try_from(radix).map_err(|_| RadixError::InvalidRadix { index, radix })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_sizes(sizes))
    }

    /// Build the walk from sizes that are valid by construction.
    pub fn from_sizes(radices: impl Into<Vec<usize>>) -> Self {
        let radices = radices.into();
        let k = radices.len();
        let total = radices
            .iter()
            .try_fold(1u128, |acc, &r| acc.checked_mul(r as u128));
        tracing::debug!(dimensions = k, total = ?total, "gray product created");
        Self {
            digits: vec![0; k],
            direction: vec![Direction::Up; k],
            cursor: Cursor::Fresh,
            emitted: 0,
            total,
            last_change: None,
            radices,
        }
    }

    /// The validated radices, in input order.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Number of tuples in the whole walk; `None` if it does not fit in `u128`.
    pub fn total(&self) -> Option<u128> {
        self.total
    }

    /// The step that led to the tuple most recently returned.
    pub fn last_change(&self) -> Option<Change> {
        self.last_change
    }

    /// Advance and borrow the next tuple without allocating.
    pub fn next_digits(&mut self) -> Option<&[usize]> {
        match self.cursor {
            Cursor::Fresh => {
                if self.radices.contains(&0) {
                    self.finish();
                    return None;
                }
                self.cursor = Cursor::Running;
            }
            Cursor::Running => {
                if !self.step() {
                    self.finish();
                    return None;
                }
            }
            Cursor::Done => return None,
        }
        self.emitted += 1;
        Some(&self.digits)
    }

    /// Move the lowest dimension that still has room in its direction; every
    /// lower dimension that is blocked reverses. Returns false once no
    /// dimension can move.
    fn step(&mut self) -> bool {
        for j in 0..self.digits.len() {
            let radix = self.radices[j];
            match self.direction[j] {
                Direction::Up if self.digits[j] + 1 < radix => {
                    self.digits[j] += 1;
                    self.last_change = Some(Change { index: j, delta: 1 });
                    return true;
                }
                Direction::Down if self.digits[j] > 0 => {
                    self.digits[j] -= 1;
                    self.last_change = Some(Change { index: j, delta: -1 });
                    return true;
                }
                _ => self.direction[j] = self.direction[j].flip(),
            }
        }
        false
    }

    fn finish(&mut self) {
        tracing::trace!(emitted = self.emitted, "gray product exhausted");
        self.cursor = Cursor::Done;
        self.last_change = None;
    }

    fn remaining(&self) -> Option<u128> {
        match self.cursor {
            Cursor::Done => Some(0),
            _ => self.total.map(|t| t - self.emitted),
        }
    }
}

impl Iterator for GrayProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_digits().map(<[usize]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for GrayProduct {}
