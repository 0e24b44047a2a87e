use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Yields one iterable's elements, then another's.
///
/// Each side is dropped once it returns [`None`], so it is never pulled again.
///
/// See [`Iterable::chain`] and [`chain`](`crate::chain`).
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
	a: Option<A>,
	b: Option<B>,
}

impl<A, B> Chain<A, B> {
	pub(crate) fn new(a: A, b: B) -> Self {
		Self {
			a: Some(a),
			b: Some(b),
		}
	}
}

/// Pulls from `side` and drops it on exhaustion.
fn and_then_or_clear<T, U>(side: &mut Option<T>, pull: impl FnOnce(&mut T) -> Option<U>) -> Option<U> {
	let item = pull(side.as_mut()?);
	if item.is_none() {
		*side = None;
	}
	item
}

impl<A: Iterable, B: Iterable<Item = A::Item>> Iterable for Chain<A, B> {
	type Item = A::Item;

	fn next(&mut self) -> Option<A::Item> {
		and_then_or_clear(&mut self.a, Iterable::next)
			.or_else(|| and_then_or_clear(&mut self.b, Iterable::next))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match (&self.a, &self.b) {
			(Some(a), Some(b)) => {
				let (a_lower, a_upper) = a.size_hint();
				let (b_lower, b_upper) = b.size_hint();
				let lower = a_lower.saturating_add(b_lower);
				let upper = match (a_upper, b_upper) {
					(Some(x), Some(y)) => x.checked_add(y),
					_ => None,
				};
				(lower, upper)
			}
			(Some(a), None) => a.size_hint(),
			(None, Some(b)) => b.size_hint(),
			(None, None) => (0, Some(0)),
		}
	}
}

impl<A, B> DoubleEndedIterable for Chain<A, B>
where
	A: DoubleEndedIterable,
	B: DoubleEndedIterable<Item = A::Item>,
{
	fn next_back(&mut self) -> Option<A::Item> {
		and_then_or_clear(&mut self.b, DoubleEndedIterable::next_back)
			.or_else(|| and_then_or_clear(&mut self.a, DoubleEndedIterable::next_back))
	}
}

impl<A, B> SizeIterable for Chain<A, B>
where
	A: SizeIterable,
	B: SizeIterable<Item = A::Item>,
{
	fn remaining(&self) -> usize {
		self.a.as_ref().map_or(0, SizeIterable::remaining)
			+ self.b.as_ref().map_or(0, SizeIterable::remaining)
	}
}
