//! Zip that insists every input has the same length.

use std::iter::FusedIterator;

use super::StreamError;

/// Pairwise strict zip; see [`zip_strict`].
#[derive(Clone, Debug)]
pub struct ZipStrict<A, B> {
    a: A,
    b: B,
    done: bool,
}

/// Like `Iterator::zip`, but a length mismatch yields `Err(UnequalLengths)`
/// instead of silently truncating.
pub fn zip_strict<A, B>(a: A, b: B) -> ZipStrict<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    ZipStrict {
        a: a.into_iter(),
        b: b.into_iter(),
        done: false,
    }
}

impl<A: Iterator, B: Iterator> Iterator for ZipStrict<A, B> {
    type Item = Result<(A::Item, B::Item), StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.a.next(), self.b.next()) {
            (Some(x), Some(y)) => Some(Ok((x, y))),
            (None, None) => {
                self.done = true;
                None
            }
            _ => {
                self.done = true;
                tracing::debug!("zip_strict: inputs ended at different points");
                Some(Err(StreamError::UnequalLengths))
            }
        }
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for ZipStrict<A, B> {}

/// Strict zip over any number of same-typed iterators; see [`zip_strict_many`].
#[derive(Clone, Debug)]
pub struct ZipStrictMany<I> {
    iters: Vec<I>,
    done: bool,
}

/// Yields one `Vec` per position. Zero inputs yield nothing.
pub fn zip_strict_many<T>(iterables: T) -> ZipStrictMany<<T::Item as IntoIterator>::IntoIter>
where
    T: IntoIterator,
    T::Item: IntoIterator,
{
    let iters: Vec<_> = iterables.into_iter().map(IntoIterator::into_iter).collect();
    let done = iters.is_empty();
    ZipStrictMany { iters, done }
}

impl<I: Iterator> Iterator for ZipStrictMany<I> {
    type Item = Result<Vec<I::Item>, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row: Vec<Option<I::Item>> = self.iters.iter_mut().map(Iterator::next).collect();
        let present = row.iter().filter(|v| v.is_some()).count();
        if present == row.len() {
            return Some(Ok(row.into_iter().flatten().collect()));
        }
        self.done = true;
        if present == 0 {
            return None;
        }
        tracing::debug!(present, total = row.len(), "zip_strict_many: ragged inputs");
        Some(Err(StreamError::UnequalLengths))
    }
}

impl<I: Iterator> FusedIterator for ZipStrictMany<I> {}
