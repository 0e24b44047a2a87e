use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Calls a function with a reference to each element before passing it on.
///
/// See [`Iterable::inspect`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Inspect<I, F> {
	iter: I,
	f: F,
}

impl<I, F> Inspect<I, F> {
	pub(crate) fn new(iter: I, f: F) -> Self {
		Self { iter, f }
	}

	fn inspected<T>(&mut self, item: Option<T>) -> Option<T>
	where
		F: FnMut(&T),
	{
		if let Some(item) = &item {
			(self.f)(item);
		}
		item
	}
}

impl<I: Iterable, F> Iterable for Inspect<I, F>
where
	F: FnMut(&I::Item),
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		let item = self.iter.next();
		self.inspected(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<I: DoubleEndedIterable, F> DoubleEndedIterable for Inspect<I, F>
where
	F: FnMut(&I::Item),
{
	fn next_back(&mut self) -> Option<I::Item> {
		let item = self.iter.next_back();
		self.inspected(item)
	}
}

impl<I: SizeIterable, F> SizeIterable for Inspect<I, F>
where
	F: FnMut(&I::Item),
{
	fn remaining(&self) -> usize {
		self.iter.remaining()
	}
}
