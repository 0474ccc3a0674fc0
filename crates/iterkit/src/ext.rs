//! Method-call forms of the free adapter functions.

use std::fmt;

use crate::adapters::{zip_strict, SizedCallbackIter, ZipStrict};
use crate::unique::{
    is_unique_everseen, is_unique_everseen_by_key, no_duplicates, no_duplicates_by_key,
    NoDuplicates, TryHash, UniqueEverseen,
};

/// Blanket extension on every `Iterator`.
pub trait IterKitExt: Iterator + Sized {
    fn is_unique_everseen(self) -> UniqueEverseen<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self::Item: TryHash + Clone,
    {
        is_unique_everseen(self)
    }

    fn is_unique_everseen_by_key<F, K>(self, key: F) -> UniqueEverseen<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: TryHash,
    {
        is_unique_everseen_by_key(self, key)
    }

    fn no_duplicates(
        self,
        name: impl Into<String>,
    ) -> NoDuplicates<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self::Item: TryHash + Clone + fmt::Debug,
    {
        no_duplicates(self, name)
    }

    fn no_duplicates_by_key<F, K>(self, key: F, name: impl Into<String>) -> NoDuplicates<Self, F, K>
    where
        Self::Item: fmt::Debug,
        F: FnMut(&Self::Item) -> K,
        K: TryHash,
    {
        no_duplicates_by_key(self, key, name)
    }

    fn sized(self, length: usize) -> SizedCallbackIter<Self, fn(usize, &Self::Item)> {
        SizedCallbackIter::new(self, length)
    }

    fn zip_strict<J: IntoIterator>(self, other: J) -> ZipStrict<Self, J::IntoIter> {
        zip_strict(self, other)
    }
}

impl<I: Iterator> IterKitExt for I {}
