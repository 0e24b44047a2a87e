use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Element types that [`Cloned`] knows how to turn into owned values.
///
/// Implemented for shared and exclusive references, and for optional shared references
/// where [`None`] stands in for a default value.
pub trait ClonedItem {
	/// The owned value.
	type Cloned;

	/// Produces the owned value.
	fn cloned_item(self) -> Self::Cloned;
}

impl<T: Clone> ClonedItem for &T {
	type Cloned = T;

	fn cloned_item(self) -> T {
		self.clone()
	}
}

impl<T: Clone> ClonedItem for &mut T {
	type Cloned = T;

	fn cloned_item(self) -> T {
		self.clone()
	}
}

impl<T: Clone + Default> ClonedItem for Option<&T> {
	type Cloned = T;

	fn cloned_item(self) -> T {
		self.map_or_else(T::default, T::clone)
	}
}

/// Clones referenced elements.
///
/// See [`Iterable::cloned`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Cloned<I> {
	iter: I,
}

impl<I> Cloned<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter }
	}
}

impl<I: Iterable> Iterable for Cloned<I>
where
	I::Item: ClonedItem,
{
	type Item = <I::Item as ClonedItem>::Cloned;

	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next().map(ClonedItem::cloned_item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<I: DoubleEndedIterable> DoubleEndedIterable for Cloned<I>
where
	I::Item: ClonedItem,
{
	fn next_back(&mut self) -> Option<Self::Item> {
		self.iter.next_back().map(ClonedItem::cloned_item)
	}
}

impl<I: SizeIterable> SizeIterable for Cloned<I>
where
	I::Item: ClonedItem,
{
	fn remaining(&self) -> usize {
		self.iter.remaining()
	}
}
