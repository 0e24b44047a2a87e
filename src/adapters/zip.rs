use crate::{Iterable, Pair, SizeIterable};

/// Pairs up the elements of two iterables.
///
/// Stops as soon as either side returns [`None`].
/// If `a` runs out first, `b` is not pulled in that step.
///
/// See [`Iterable::zip`] and [`zip`](`crate::zip`).
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
	a: A,
	b: B,
}

impl<A, B> Zip<A, B> {
	pub(crate) fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Iterable, B: Iterable> Iterable for Zip<A, B> {
	type Item = Pair<A::Item, B::Item>;

	fn next(&mut self) -> Option<Self::Item> {
		let a = self.a.next()?;
		let b = self.b.next()?;
		Some(Pair::new(a, b))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (a_lower, a_upper) = self.a.size_hint();
		let (b_lower, b_upper) = self.b.size_hint();
		let upper = match (a_upper, b_upper) {
			(Some(x), Some(y)) => Some(x.min(y)),
			(Some(x), None) | (None, Some(x)) => Some(x),
			(None, None) => None,
		};
		(a_lower.min(b_lower), upper)
	}
}

impl<A: SizeIterable, B: SizeIterable> SizeIterable for Zip<A, B> {
	fn remaining(&self) -> usize {
		self.a.remaining().min(self.b.remaining())
	}
}
