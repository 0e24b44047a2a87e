use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Returns only [`None`] after the first [`None`].
///
/// The upstream is dropped at that point.
///
/// See [`Iterable::fuse`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Fuse<I> {
	iter: Option<I>,
}

impl<I> Fuse<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter: Some(iter) }
	}
}

impl<I: Iterable> Iterable for Fuse<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		let item = self.iter.as_mut()?.next();
		if item.is_none() {
			self.iter = None;
		}
		item
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.as_ref().map_or((0, Some(0)), Iterable::size_hint)
	}
}

impl<I: DoubleEndedIterable> DoubleEndedIterable for Fuse<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		let item = self.iter.as_mut()?.next_back();
		if item.is_none() {
			self.iter = None;
		}
		item
	}
}

impl<I: SizeIterable> SizeIterable for Fuse<I> {
	fn remaining(&self) -> usize {
		self.iter.as_ref().map_or(0, SizeIterable::remaining)
	}
}
