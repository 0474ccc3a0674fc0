//! Give an iterator a declared length, e.g. for progress reporting.

use std::iter::FusedIterator;

use super::StreamError;

fn no_callback<T>(_: usize, _: &T) {}

/// Wraps an iterator whose output length is known up front.
///
/// `declared_remaining()` reports the declared count; `size_hint` follows the
/// inner iterator. With `strict(true)`, running out after a different number
/// of items yields one `Err(LengthMismatch)`.
#[derive(Debug)]
pub struct SizedCallbackIter<I, C> {
    iter: I,
    length: usize,
    count: usize,
    strict: bool,
    callback: C,
    done: bool,
}

impl<I: Iterator> SizedCallbackIter<I, fn(usize, &I::Item)> {
    pub fn new(iterable: impl IntoIterator<IntoIter = I>, length: usize) -> Self {
        Self {
            iter: iterable.into_iter(),
            length,
            count: 0,
            strict: false,
            callback: no_callback::<I::Item> as fn(usize, &I::Item),
            done: false,
        }
    }
}

impl<I, C> SizedCallbackIter<I, C>
where
    I: Iterator,
    C: FnMut(usize, &I::Item),
{
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Call `callback(index, &item)` for each item before it is handed out.
    pub fn with_callback<C2>(self, callback: C2) -> SizedCallbackIter<I, C2>
    where
        C2: FnMut(usize, &I::Item),
    {
        SizedCallbackIter {
            iter: self.iter,
            length: self.length,
            count: self.count,
            strict: self.strict,
            callback,
            done: self.done,
        }
    }

    /// Items produced so far.
    pub fn count_so_far(&self) -> usize {
        self.count
    }

    /// Declared length minus items produced so far, saturating at zero.
    ///
    /// This is the caller's claim, not a bound: the inner iterator may run
    /// longer or shorter.
    pub fn declared_remaining(&self) -> usize {
        if self.done {
            0
        } else {
            self.length.saturating_sub(self.count)
        }
    }
}

impl<I, C> Iterator for SizedCallbackIter<I, C>
where
    I: Iterator,
    C: FnMut(usize, &I::Item),
{
    type Item = Result<I::Item, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                (self.callback)(self.count, &item);
                self.count += 1;
                Some(Ok(item))
            }
            None => {
                self.done = true;
                if self.strict && self.count != self.length {
                    let err = StreamError::LengthMismatch {
                        expected: self.length,
                        actual: self.count,
                    };
                    tracing::debug!(%err, "sized iterator length mismatch");
                    return Some(Err(err));
                }
                None
            }
        }
    }

    /// Bounds come from the inner iterator; strict mode may add one error item.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        if self.strict {
            (lo, hi.and_then(|h| h.checked_add(1)))
        } else {
            (lo, hi)
        }
    }
}

impl<I, C> FusedIterator for SizedCallbackIter<I, C>
where
    I: Iterator,
    C: FnMut(usize, &I::Item),
{
}
