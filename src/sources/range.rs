use crate::{Integer, Iterable};

/// Yields `start`, `start + 1`, … up to but excluding `end`.
///
/// Yields nothing if `start >= end`.
pub fn from_range<T: Integer>(start: T, end: T) -> Range<T> {
	Range { next: start, end }
}

/// See [`from_range`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Range<T> {
	next: T,
	end: T,
}

impl<T: Integer> Iterable for Range<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.next < self.end {
			let current = self.next;
			self.next = current.successor();
			Some(current)
		} else {
			None
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match T::distance(self.next, self.end) {
			Some(distance) => (distance, Some(distance)),
			None => (usize::MAX, None),
		}
	}
}
