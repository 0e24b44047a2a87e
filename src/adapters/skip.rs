use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Discards a number of leading elements.
///
/// The discarding happens on the first pull, not on construction.
///
/// See [`Iterable::skip`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Skip<I> {
	iter: I,
	n: usize,
}

impl<I> Skip<I> {
	pub(crate) fn new(iter: I, n: usize) -> Self {
		Self { iter, n }
	}
}

impl<I: Iterable> Iterable for Skip<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		if self.n > 0 {
			let n = core::mem::take(&mut self.n);
			self.iter.advance_by(n).ok()?;
		}
		self.iter.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.iter.size_hint();
		(
			lower.saturating_sub(self.n),
			upper.map(|upper| upper.saturating_sub(self.n)),
		)
	}
}

impl<I: DoubleEndedIterable + SizeIterable> DoubleEndedIterable for Skip<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		if self.remaining() > 0 {
			self.iter.next_back()
		} else {
			None
		}
	}
}

impl<I: SizeIterable> SizeIterable for Skip<I> {
	fn remaining(&self) -> usize {
		self.iter.remaining().saturating_sub(self.n)
	}
}
