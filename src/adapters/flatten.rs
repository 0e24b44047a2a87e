use core::convert::identity;

use crate::{IntoIterable, Iterable};

/// Maps each element to an iterable and yields the inner elements.
///
/// See [`Iterable::flat_map`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlatMap<I, U: IntoIterable, F> {
	iter: I,
	f: F,
	front: Option<U::IntoIter>,
}

impl<I, U: IntoIterable, F> FlatMap<I, U, F> {
	pub(crate) fn new(iter: I, f: F) -> Self {
		Self {
			iter,
			f,
			front: None,
		}
	}
}

impl<I: Clone, U: IntoIterable, F: Clone> Clone for FlatMap<I, U, F>
where
	U::IntoIter: Clone,
{
	fn clone(&self) -> Self {
		Self {
			iter: self.iter.clone(),
			f: self.f.clone(),
			front: self.front.clone(),
		}
	}
}

impl<I: Iterable, U: IntoIterable, F> Iterable for FlatMap<I, U, F>
where
	F: FnMut(I::Item) -> U,
{
	type Item = U::Item;

	fn next(&mut self) -> Option<U::Item> {
		loop {
			if let Some(front) = &mut self.front {
				match front.next() {
					None => self.front = None,
					item @ Some(_) => return item,
				}
			}
			match self.iter.next() {
				None => return None,
				Some(outer) => self.front = Some((self.f)(outer).into_iterable()),
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self
			.front
			.as_ref()
			.map_or((0, Some(0)), Iterable::size_hint);
		// Further inner iterables can only be ruled out if the outer one is known to be exhausted.
		match self.iter.size_hint() {
			(0, Some(0)) => (lower, upper),
			_ => (lower, None),
		}
	}
}

/// Yields the elements of each element.
///
/// See [`Iterable::flatten`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I: Iterable>
where
	I::Item: IntoIterable,
{
	inner: FlatMap<I, I::Item, fn(I::Item) -> I::Item>,
}

impl<I: Iterable> Flatten<I>
where
	I::Item: IntoIterable,
{
	pub(crate) fn new(iter: I) -> Self {
		Self {
			inner: FlatMap::new(iter, identity as fn(I::Item) -> I::Item),
		}
	}
}

impl<I: Iterable + Clone> Clone for Flatten<I>
where
	I::Item: IntoIterable,
	<I::Item as IntoIterable>::IntoIter: Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<I: Iterable> Iterable for Flatten<I>
where
	I::Item: IntoIterable,
{
	type Item = <I::Item as IntoIterable>::Item;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
