use alloc::vec::{self, Vec};

use crate::{DoubleEndedIterable, IntoIterable, Iterable, SizeIterable, VoidResult};

/// Yields references into a slice, front to back.
///
/// ```
/// use ratchet::{from_slice, DoubleEndedIterable, Iterable};
///
/// let mut slice = from_slice(&[1, 2, 3]);
/// assert_eq!(slice.next_back(), Some(&3));
/// assert_eq!(slice.cloned().collect_vec(), [1, 2]);
/// ```
pub fn from_slice<T>(slice: &[T]) -> Slice<'_, T> {
	Slice { slice }
}

/// Yields the elements of a [`Vec`] by value.
pub fn from_vec<T>(vec: Vec<T>) -> Elements<T> {
	Elements {
		iter: vec.into_iter(),
	}
}

/// Yields the elements of an array by value.
pub fn from_elements<T, const N: usize>(elements: [T; N]) -> Elements<T> {
	from_vec(elements.into())
}

/// See [`from_slice`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct Slice<'a, T> {
	slice: &'a [T],
}

impl<'a, T> Clone for Slice<'a, T> {
	fn clone(&self) -> Self {
		Self { slice: self.slice }
	}
}

impl<'a, T> Slice<'a, T> {
	/// The elements not yet pulled from either end.
	#[must_use]
	pub fn as_slice(&self) -> &'a [T] {
		self.slice
	}
}

impl<'a, T> Iterable for Slice<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		let (first, rest) = self.slice.split_first()?;
		self.slice = rest;
		Some(first)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.slice.len(), Some(self.slice.len()))
	}

	fn advance_by(&mut self, n: usize) -> VoidResult {
		let step = n.min(self.slice.len());
		self.slice = &self.slice[step..];
		crate::void_result(n - step)
	}
}

impl<'a, T> DoubleEndedIterable for Slice<'a, T> {
	fn next_back(&mut self) -> Option<&'a T> {
		let (last, rest) = self.slice.split_last()?;
		self.slice = rest;
		Some(last)
	}

	fn advance_back_by(&mut self, n: usize) -> VoidResult {
		let step = n.min(self.slice.len());
		self.slice = &self.slice[..self.slice.len() - step];
		crate::void_result(n - step)
	}
}

impl<'a, T> SizeIterable for Slice<'a, T> {
	fn remaining(&self) -> usize {
		self.slice.len()
	}
}

/// See [`from_vec`] and [`from_elements`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Elements<T> {
	iter: vec::IntoIter<T>,
}

impl<T> Elements<T> {
	/// The elements not yet pulled from either end.
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		self.iter.as_slice()
	}
}

impl<T> Iterable for Elements<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		Iterator::next(&mut self.iter)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		Iterator::size_hint(&self.iter)
	}
}

impl<T> DoubleEndedIterable for Elements<T> {
	fn next_back(&mut self) -> Option<T> {
		DoubleEndedIterator::next_back(&mut self.iter)
	}
}

impl<T> SizeIterable for Elements<T> {
	fn remaining(&self) -> usize {
		ExactSizeIterator::len(&self.iter)
	}
}

impl<T> IntoIterable for Vec<T> {
	type Item = T;
	type IntoIter = Elements<T>;

	fn into_iterable(self) -> Elements<T> {
		from_vec(self)
	}
}

impl<T, const N: usize> IntoIterable for [T; N] {
	type Item = T;
	type IntoIter = Elements<T>;

	fn into_iterable(self) -> Elements<T> {
		from_elements(self)
	}
}

impl<'a, T> IntoIterable for &'a [T] {
	type Item = &'a T;
	type IntoIter = Slice<'a, T>;

	fn into_iterable(self) -> Slice<'a, T> {
		from_slice(self)
	}
}

impl<'a, T> IntoIterable for &'a Vec<T> {
	type Item = &'a T;
	type IntoIter = Slice<'a, T>;

	fn into_iterable(self) -> Slice<'a, T> {
		from_slice(self)
	}
}

impl<'a, T, const N: usize> IntoIterable for &'a [T; N] {
	type Item = &'a T;
	type IntoIter = Slice<'a, T>;

	fn into_iterable(self) -> Slice<'a, T> {
		from_slice(self)
	}
}
