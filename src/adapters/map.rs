use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Applies a function to each element.
///
/// See [`Iterable::map`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Map<I, F> {
	iter: I,
	f: F,
}

impl<I, F> Map<I, F> {
	pub(crate) fn new(iter: I, f: F) -> Self {
		Self { iter, f }
	}
}

impl<I: Iterable, F, U> Iterable for Map<I, F>
where
	F: FnMut(I::Item) -> U,
{
	type Item = U;

	fn next(&mut self) -> Option<U> {
		self.iter.next().map(&mut self.f)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<I: DoubleEndedIterable, F, U> DoubleEndedIterable for Map<I, F>
where
	F: FnMut(I::Item) -> U,
{
	fn next_back(&mut self) -> Option<U> {
		self.iter.next_back().map(&mut self.f)
	}
}

impl<I: SizeIterable, F, U> SizeIterable for Map<I, F>
where
	F: FnMut(I::Item) -> U,
{
	fn remaining(&self) -> usize {
		self.iter.remaining()
	}
}
