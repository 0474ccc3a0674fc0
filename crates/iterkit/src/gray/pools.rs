//! Item-level Gray product: pick one element per pool, changing one pick per step.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::GrayProduct;

/// Gray walk over concrete pools, yielding references into them.
#[derive(Debug)]
pub struct GrayPools<'a, T, S> {
    pools: &'a [S],
    walk: GrayProduct,
    _item: PhantomData<&'a T>,
}

/// Enumerate the Cartesian product of `pools` in mixed-radix Gray order.
///
/// Adjacent outputs differ in exactly one position, and there the element moves
/// to a neighbour within its pool.
pub fn gray_product<'a, T, S>(pools: &'a [S]) -> GrayPools<'a, T, S>
where
    S: AsRef<[T]>,
{
    let sizes: Vec<usize> = pools.iter().map(|p| p.as_ref().len()).collect();
    GrayPools {
        pools,
        walk: GrayProduct::from_sizes(sizes),
        _item: PhantomData,
    }
}

impl<'a, T, S> GrayPools<'a, T, S> {
    /// The underlying index walk, e.g. to read `last_change`.
    pub fn walk(&self) -> &GrayProduct {
        &self.walk
    }
}

impl<'a, T: 'a, S: AsRef<[T]>> Iterator for GrayPools<'a, T, S> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pools = self.pools;
        let digits = self.walk.next_digits()?;
        Some(
            digits
                .iter()
                .zip(pools)
                .map(|(&d, pool)| &pool.as_ref()[d])
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.walk.size_hint()
    }
}

impl<'a, T: 'a, S: AsRef<[T]>> FusedIterator for GrayPools<'a, T, S> {}
