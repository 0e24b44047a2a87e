use alloc::boxed::Box;

use crate::{
	dynamic::DynIter,
	sum::{void_result, VoidResult},
	Iterable, SizeIterable,
};

/// An [`Iterable`] that can also be pulled from the back.
///
/// Both ends draw from the same remaining elements: once they meet, both return [`None`].
pub trait DoubleEndedIterable: Iterable {
	/// Removes and returns the last remaining element, iff available.
	fn next_back(&mut self) -> Option<Self::Item>;

	/// Reverses the direction of iteration.
	fn rev(self) -> Rev<Self>
	where
		Self: Sized,
	{
		Rev { iter: self }
	}

	/// Pulls `n` elements from the back and discards them.
	///
	/// # Errors
	///
	/// Iff the iterable runs dry first, with the number of steps that were still missing.
	fn advance_back_by(&mut self, n: usize) -> VoidResult {
		for done in 0..n {
			if self.next_back().is_none() {
				return void_result(n - done);
			}
		}
		Ok(())
	}

	/// Returns the `n`th (zero-based) element from the back, discarding the ones after it.
	fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
		self.advance_back_by(n).ok()?;
		self.next_back()
	}

	/// Right-folds all elements into an accumulator.
	fn rfold<B, F>(mut self, init: B, mut f: F) -> B
	where
		Self: Sized,
		F: FnMut(B, Self::Item) -> B,
	{
		let mut accumulator = init;
		while let Some(item) = self.next_back() {
			accumulator = f(accumulator, item);
		}
		accumulator
	}

	/// Right-folds until `f` fails.
	///
	/// # Errors
	///
	/// The first error returned by `f`. Nothing is pulled after it.
	fn try_rfold<B, E, F>(&mut self, init: B, mut f: F) -> Result<B, E>
	where
		Self: Sized,
		F: FnMut(B, Self::Item) -> Result<B, E>,
	{
		let mut accumulator = init;
		while let Some(item) = self.next_back() {
			accumulator = f(accumulator, item)?;
		}
		Ok(accumulator)
	}

	/// Returns the last element that satisfies `predicate`.
	fn rfind<P>(&mut self, mut predicate: P) -> Option<Self::Item>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		while let Some(item) = self.next_back() {
			if predicate(&item) {
				return Some(item);
			}
		}
		None
	}

	/// Returns the front-based index of the last element that satisfies `predicate`.
	fn rposition<P>(&mut self, mut predicate: P) -> Option<usize>
	where
		Self: Sized + SizeIterable,
		P: FnMut(Self::Item) -> bool,
	{
		let mut index = self.remaining();
		while let Some(item) = self.next_back() {
			index -= 1;
			if predicate(item) {
				return Some(index);
			}
		}
		None
	}

	/// Erases this iterable's type while keeping track of its back-iteration support.
	fn boxed_double_ended<'a>(self) -> DynIter<'a, Self::Item>
	where
		Self: Sized + 'a,
	{
		DynIter::new_double_ended(self)
	}
}

impl<I: DoubleEndedIterable + ?Sized> DoubleEndedIterable for &mut I {
	fn next_back(&mut self) -> Option<I::Item> {
		(**self).next_back()
	}

	fn advance_back_by(&mut self, n: usize) -> VoidResult {
		(**self).advance_back_by(n)
	}
}

impl<I: DoubleEndedIterable + ?Sized> DoubleEndedIterable for Box<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		(**self).next_back()
	}

	fn advance_back_by(&mut self, n: usize) -> VoidResult {
		(**self).advance_back_by(n)
	}
}

/// Iterates a [`DoubleEndedIterable`] back to front.
///
/// See [`DoubleEndedIterable::rev`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Rev<I> {
	iter: I,
}

impl<I: DoubleEndedIterable> Iterable for Rev<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		self.iter.next_back()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}

	fn advance_by(&mut self, n: usize) -> VoidResult {
		self.iter.advance_back_by(n)
	}
}

impl<I: DoubleEndedIterable> DoubleEndedIterable for Rev<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		self.iter.next()
	}

	fn advance_back_by(&mut self, n: usize) -> VoidResult {
		self.iter.advance_by(n)
	}
}

impl<I: DoubleEndedIterable + SizeIterable> SizeIterable for Rev<I> {
	fn remaining(&self) -> usize {
		self.iter.remaining()
	}
}
