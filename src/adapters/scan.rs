//! Adapters steered by a per-element decision that ends a phase.

use crate::Iterable;

/// Discards leading elements while a predicate holds.
///
/// See [`Iterable::skip_while`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct SkipWhile<I, P> {
	iter: I,
	predicate: P,
	done: bool,
}

impl<I, P> SkipWhile<I, P> {
	pub(crate) fn new(iter: I, predicate: P) -> Self {
		Self {
			iter,
			predicate,
			done: false,
		}
	}
}

impl<I: Iterable, P> Iterable for SkipWhile<I, P>
where
	P: FnMut(&I::Item) -> bool,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		if self.done {
			return self.iter.next();
		}
		let predicate = &mut self.predicate;
		let item = self.iter.find(|item| !predicate(item))?;
		self.done = true;
		Some(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.iter.size_hint();
		if self.done {
			(lower, upper)
		} else {
			(0, upper)
		}
	}
}

/// Yields leading elements while a predicate holds.
///
/// The first element that fails the predicate is consumed and discarded.
///
/// See [`Iterable::take_while`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct TakeWhile<I, P> {
	iter: I,
	predicate: P,
	done: bool,
}

impl<I, P> TakeWhile<I, P> {
	pub(crate) fn new(iter: I, predicate: P) -> Self {
		Self {
			iter,
			predicate,
			done: false,
		}
	}
}

impl<I: Iterable, P> Iterable for TakeWhile<I, P>
where
	P: FnMut(&I::Item) -> bool,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		if self.done {
			return None;
		}
		let item = self.iter.next()?;
		if (self.predicate)(&item) {
			Some(item)
		} else {
			self.done = true;
			None
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			(0, Some(0))
		} else {
			(0, self.iter.size_hint().1)
		}
	}
}

/// Threads mutable state through a mapping that can end iteration.
///
/// See [`Iterable::scan`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Scan<I, St, F> {
	iter: I,
	state: St,
	f: F,
	done: bool,
}

impl<I, St, F> Scan<I, St, F> {
	pub(crate) fn new(iter: I, state: St, f: F) -> Self {
		Self {
			iter,
			state,
			f,
			done: false,
		}
	}
}

impl<I: Iterable, St, F, U> Iterable for Scan<I, St, F>
where
	F: FnMut(&mut St, I::Item) -> Option<U>,
{
	type Item = U;

	fn next(&mut self) -> Option<U> {
		if self.done {
			return None;
		}
		let item = self.iter.next()?;
		let mapped = (self.f)(&mut self.state, item);
		self.done = mapped.is_none();
		mapped
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			(0, Some(0))
		} else {
			(0, self.iter.size_hint().1)
		}
	}
}

/// Maps elements until the mapping returns [`None`].
///
/// See [`Iterable::map_while`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct MapWhile<I, F> {
	iter: I,
	f: F,
	done: bool,
}

impl<I, F> MapWhile<I, F> {
	pub(crate) fn new(iter: I, f: F) -> Self {
		Self {
			iter,
			f,
			done: false,
		}
	}
}

impl<I: Iterable, F, U> Iterable for MapWhile<I, F>
where
	F: FnMut(I::Item) -> Option<U>,
{
	type Item = U;

	fn next(&mut self) -> Option<U> {
		if self.done {
			return None;
		}
		let mapped = (self.f)(self.iter.next()?);
		self.done = mapped.is_none();
		mapped
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done {
			(0, Some(0))
		} else {
			(0, self.iter.size_hint().1)
		}
	}
}
