use core::marker::PhantomData;

use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Yields whatever `f` returns, until it returns [`None`].
///
/// `f` is called again after returning [`None`] if pulled again.
/// Use [`.fuse()`](`Iterable::fuse`) where that matters.
///
/// ```
/// use ratchet::{from_fn, Iterable};
///
/// let mut countdown = 3;
/// let launch = from_fn(|| {
/// 	countdown -= 1;
/// 	(countdown > 0).then_some(countdown)
/// });
/// assert_eq!(launch.collect_vec(), [2, 1]);
/// ```
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F> {
	FromFn { f }
}

/// Yields `value` exactly once.
pub fn once<T>(value: T) -> Once<T> {
	Once { value: Some(value) }
}

/// Yields nothing.
pub fn empty<T>() -> Empty<T> {
	Empty {
		_phantom: PhantomData,
	}
}

/// Yields clones of `value` forever.
///
/// Bound this with [`.take(n)`](`Iterable::take`) or similar.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
	Repeat { value }
}

/// See [`from_fn`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct FromFn<F> {
	f: F,
}

impl<T, F: FnMut() -> Option<T>> Iterable for FromFn<F> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		(self.f)()
	}
}

/// See [`once`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Once<T> {
	value: Option<T>,
}

impl<T> Iterable for Once<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		self.value.take()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = usize::from(self.value.is_some());
		(len, Some(len))
	}
}

impl<T> SizeIterable for Once<T> {
	fn remaining(&self) -> usize {
		usize::from(self.value.is_some())
	}
}

/// See [`empty`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Empty<T> {
	_phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
	fn clone(&self) -> Self {
		empty()
	}
}

impl<T> Iterable for Empty<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(0))
	}
}

impl<T> DoubleEndedIterable for Empty<T> {
	fn next_back(&mut self) -> Option<T> {
		None
	}
}

impl<T> SizeIterable for Empty<T> {
	fn remaining(&self) -> usize {
		0
	}
}

/// See [`repeat`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Repeat<T> {
	value: T,
}

impl<T: Clone> Iterable for Repeat<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		Some(self.value.clone())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, None)
	}
}
