use crate::Iterable;

/// Skips elements that don't satisfy a predicate.
///
/// See [`Iterable::filter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Filter<I, P> {
	iter: I,
	predicate: P,
}

impl<I, P> Filter<I, P> {
	pub(crate) fn new(iter: I, predicate: P) -> Self {
		Self { iter, predicate }
	}
}

impl<I: Iterable, P> Iterable for Filter<I, P>
where
	P: FnMut(&I::Item) -> bool,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		self.iter.find(&mut self.predicate)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.iter.size_hint().1)
	}
}

/// Maps elements and keeps only the [`Some`] results.
///
/// See [`Iterable::filter_map`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct FilterMap<I, F> {
	iter: I,
	f: F,
}

impl<I, F> FilterMap<I, F> {
	pub(crate) fn new(iter: I, f: F) -> Self {
		Self { iter, f }
	}
}

impl<I: Iterable, F, U> Iterable for FilterMap<I, F>
where
	F: FnMut(I::Item) -> Option<U>,
{
	type Item = U;

	fn next(&mut self) -> Option<U> {
		self.iter.find_map(&mut self.f)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.iter.size_hint().1)
	}
}
