use alloc::collections::VecDeque;

use crate::Iterable;

/// Calls a function on each window of consecutive elements.
///
/// Windows overlap and advance by one element.
/// If the upstream has fewer elements than the window size, nothing is yielded.
///
/// See [`Iterable::map_windows`].
///
/// ```
/// use ratchet::{from_range, Iterable};
///
/// let sums = from_range(1, 6).map_windows(3, |window| window.iter().sum::<i32>());
/// assert_eq!(sums.collect_vec(), [6, 9, 12]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct MapWindows<I: Iterable, F> {
	iter: I,
	f: F,
	size: usize,
	window: VecDeque<I::Item>,
}

impl<I: Iterable, F> MapWindows<I, F> {
	#[track_caller]
	pub(crate) fn new(iter: I, size: usize, f: F) -> Self {
		assert!(size != 0, "`map_windows` window size must be non-zero");
		Self {
			iter,
			f,
			size,
			window: VecDeque::with_capacity(size),
		}
	}
}

impl<I: Iterable, F, U> Iterable for MapWindows<I, F>
where
	F: FnMut(&[I::Item]) -> U,
{
	type Item = U;

	fn next(&mut self) -> Option<U> {
		while self.window.len() < self.size {
			self.window.push_back(self.iter.next()?);
		}
		let mapped = (self.f)(&*self.window.make_contiguous());
		self.window.pop_front();
		Some(mapped)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let buffered = self.window.len();
		let overlap = self.size - 1;
		let (lower, upper) = self.iter.size_hint();
		(
			lower.saturating_add(buffered).saturating_sub(overlap),
			upper
				.and_then(|upper| upper.checked_add(buffered))
				.map(|total| total.saturating_sub(overlap)),
		)
	}
}
