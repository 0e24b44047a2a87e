//! Type-erased iterables that remember whether they can be pulled from the back.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Formatter};

use thiserror::Error;

use crate::{DoubleEndedIterable, Iterable};

/// A boxed, type-erased [`Iterable`].
///
/// Static capability information is lost by erasure, so this handle records at runtime
/// whether the erased iterable was [`DoubleEndedIterable`].
/// Use [`as_double_ended`](`DynIter::as_double_ended`) to check and borrow that capability,
/// [`try_to_double_ended`](`DynIter::try_to_double_ended`) to recover it
/// and [`must_to_double_ended`](`DynIter::must_to_double_ended`) where its absence is a bug.
///
/// # Example
///
/// ```
/// use ratchet::{from_range, from_slice, DoubleEndedIterable, Iterable};
///
/// let forward = from_range(0, 3).boxed();
/// assert!(!forward.is_double_ended());
///
/// let mut back = from_slice(&[1, 2, 3]).boxed_double_ended();
/// assert!(back.is_double_ended());
/// assert_eq!(back.as_double_ended().and_then(|back| back.next_back()), Some(&3));
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DynIter<'a, T> {
	inner: Erased<'a, T>,
}

enum Erased<'a, T> {
	Forward(Box<dyn Iterable<Item = T> + 'a>),
	DoubleEnded(DynDoubleEndedIter<'a, T>),
}

impl<'a, T> DynIter<'a, T> {
	pub(crate) fn new(iter: impl Iterable<Item = T> + 'a) -> Self {
		Self {
			inner: Erased::Forward(Box::new(iter)),
		}
	}

	pub(crate) fn new_double_ended(iter: impl DoubleEndedIterable<Item = T> + 'a) -> Self {
		Self {
			inner: Erased::DoubleEnded(DynDoubleEndedIter {
				inner: Box::new(iter),
			}),
		}
	}

	/// Whether the erased iterable supports [`next_back`](`DoubleEndedIterable::next_back`).
	#[must_use]
	pub fn is_double_ended(&self) -> bool {
		matches!(self.inner, Erased::DoubleEnded(_))
	}

	/// Borrows the back-iteration capability, iff available.
	pub fn as_double_ended(&mut self) -> Option<&mut DynDoubleEndedIter<'a, T>> {
		match &mut self.inner {
			Erased::DoubleEnded(iter) => Some(iter),
			Erased::Forward(_) => None,
		}
	}

	/// Recovers the back-iteration capability.
	///
	/// # Errors
	///
	/// Iff the erased iterable is forward-only. The error gives `self` back unchanged.
	pub fn try_to_double_ended(self) -> Result<DynDoubleEndedIter<'a, T>, NotDoubleEnded<Self>> {
		match self.inner {
			Erased::DoubleEnded(iter) => Ok(iter),
			inner @ Erased::Forward(_) => {
				tracing::trace!("Refused to recover back-iteration from a forward-only `DynIter`.");
				Err(NotDoubleEnded(Self { inner }))
			}
		}
	}

	/// Recovers the back-iteration capability.
	///
	/// # Panics
	///
	/// Iff the erased iterable is forward-only.
	#[track_caller]
	pub fn must_to_double_ended(self) -> DynDoubleEndedIter<'a, T> {
		match self.try_to_double_ended() {
			Ok(iter) => iter,
			Err(error) => panic!("{error}"),
		}
	}
}

impl<'a, T> Iterable for DynIter<'a, T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		match &mut self.inner {
			Erased::Forward(iter) => iter.next(),
			Erased::DoubleEnded(iter) => iter.next(),
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.inner {
			Erased::Forward(iter) => iter.size_hint(),
			Erased::DoubleEnded(iter) => iter.size_hint(),
		}
	}
}

impl<'a, T> Debug for DynIter<'a, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynIter")
			.field("double_ended", &self.is_double_ended())
			.field("size_hint", &self.size_hint())
			.finish_non_exhaustive()
	}
}

/// A boxed, type-erased [`DoubleEndedIterable`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DynDoubleEndedIter<'a, T> {
	inner: Box<dyn DoubleEndedIterable<Item = T> + 'a>,
}

impl<'a, T> DynDoubleEndedIter<'a, T> {
	/// Forgets the back-iteration capability in the type, but not at runtime.
	///
	/// The result can be recovered with [`DynIter::try_to_double_ended`].
	pub fn into_forward(self) -> DynIter<'a, T> {
		DynIter {
			inner: Erased::DoubleEnded(self),
		}
	}
}

impl<'a, T> Iterable for DynDoubleEndedIter<'a, T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, T> DoubleEndedIterable for DynDoubleEndedIter<'a, T> {
	fn next_back(&mut self) -> Option<T> {
		self.inner.next_back()
	}
}

impl<'a, T> Debug for DynDoubleEndedIter<'a, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("DynDoubleEndedIter")
			.field("size_hint", &self.inner.size_hint())
			.finish_non_exhaustive()
	}
}

/// Returned by [`DynIter::try_to_double_ended`] when the erased iterable is forward-only.
#[derive(Error)]
#[error("the erased iterator does not support iteration from the back")]
pub struct NotDoubleEnded<I>(I);

impl<I> NotDoubleEnded<I> {
	/// Gives back the iterable that could not be converted.
	pub fn into_inner(self) -> I {
		self.0
	}
}

impl<I> Debug for NotDoubleEnded<I> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("NotDoubleEnded(..)")
	}
}
