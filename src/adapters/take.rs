use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Yields at most a fixed number of elements.
///
/// Only elements actually produced count against the limit.
/// Once it is reached, the upstream is not pulled again.
///
/// See [`Iterable::take`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Take<I> {
	iter: I,
	n: usize,
}

impl<I> Take<I> {
	pub(crate) fn new(iter: I, n: usize) -> Self {
		Self { iter, n }
	}
}

impl<I: Iterable> Iterable for Take<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		if self.n == 0 {
			return None;
		}
		let item = self.iter.next()?;
		self.n -= 1;
		Some(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.n == 0 {
			return (0, Some(0));
		}
		let (lower, upper) = self.iter.size_hint();
		(
			lower.min(self.n),
			Some(upper.map_or(self.n, |upper| upper.min(self.n))),
		)
	}
}

impl<I: DoubleEndedIterable + SizeIterable> DoubleEndedIterable for Take<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		if self.n == 0 {
			return None;
		}
		let n = self.n;
		self.n -= 1;
		// Drop the tail beyond the limit first.
		self.iter.nth_back(self.iter.remaining().saturating_sub(n))
	}
}

impl<I: SizeIterable> SizeIterable for Take<I> {
	fn remaining(&self) -> usize {
		self.iter.remaining().min(self.n)
	}
}
