//! [`Option`] and [`Result`] as return shapes and as zero-or-one element iterables.

use alloc::vec::Vec;
use core::{num::NonZeroUsize, ptr::NonNull};

use crate::{DoubleEndedIterable, IntoIterable, Iterable, SizeIterable};

/// The result of stepping an iterable a fixed number of times.
///
/// `Err` carries how many steps were still missing when it ran out.
pub type VoidResult = Result<(), NonZeroUsize>;

/// The result of pulling a fixed-size chunk.
///
/// `Err` carries the partial chunk accumulated before exhaustion.
pub type ChunkResult<T> = Result<Vec<T>, Vec<T>>;

/// Builds a [`VoidResult`] from a count of missing steps: `Ok` for zero, `Err(remaining)` otherwise.
#[must_use]
pub fn void_result(remaining: usize) -> VoidResult {
	NonZeroUsize::new(remaining).map_or(Ok(()), Err)
}

/// `Some` for a non-null pointer, `None` for null.
#[must_use]
pub fn ptr_opt<T>(ptr: *mut T) -> Option<NonNull<T>> {
	NonNull::new(ptr)
}

/// The raw error payload of a [`Result`], iff it is an [`Err`].
#[must_use]
pub fn err_val<T, E>(result: Result<T, E>) -> Option<E> {
	result.err()
}

/// The iterable over an [`Option`]'s value or a [`Result`]'s [`Ok`] value.
///
/// Yields its value once, from either end, and then nothing.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Singleton<T> {
	item: Option<T>,
}

impl<T> Iterable for Singleton<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		self.item.take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.remaining();
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterable for Singleton<T> {
	fn next_back(&mut self) -> Option<T> {
		self.item.take()
	}
}

impl<T> SizeIterable for Singleton<T> {
	fn remaining(&self) -> usize {
		usize::from(self.item.is_some())
	}
}

impl<T> IntoIterable for Option<T> {
	type Item = T;
	type IntoIter = Singleton<T>;

	fn into_iterable(self) -> Singleton<T> {
		Singleton { item: self }
	}
}

impl<T, E> IntoIterable for Result<T, E> {
	type Item = T;
	type IntoIter = Singleton<T>;

	fn into_iterable(self) -> Singleton<T> {
		Singleton { item: self.ok() }
	}
}
