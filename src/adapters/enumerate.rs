use crate::{DoubleEndedIterable, Iterable, Pair, SizeIterable, VoidResult};

/// Pairs each element with its zero-based index.
///
/// See [`Iterable::enumerate`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
	iter: I,
	count: usize,
}

impl<I> Enumerate<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter, count: 0 }
	}

	#[track_caller]
	fn bump(&mut self, by: usize) {
		self.count = self
			.count
			.checked_add(by)
			.unwrap_or_else(|| panic!("`Enumerate` index overflowed `usize`"));
	}
}

impl<I: Iterable> Iterable for Enumerate<I> {
	type Item = Pair<usize, I::Item>;

	#[track_caller]
	fn next(&mut self) -> Option<Self::Item> {
		let item = self.iter.next()?;
		let index = self.count;
		self.bump(1);
		Some(Pair::new(index, item))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}

	#[track_caller]
	fn advance_by(&mut self, n: usize) -> VoidResult {
		let result = self.iter.advance_by(n);
		self.bump(n - result.err().map_or(0, usize::from));
		result
	}
}

impl<I: DoubleEndedIterable + SizeIterable> DoubleEndedIterable for Enumerate<I> {
	fn next_back(&mut self) -> Option<Self::Item> {
		let item = self.iter.next_back()?;
		// `remaining` now excludes `item`, which sits right after everything still in front of it.
		Some(Pair::new(self.count + self.iter.remaining(), item))
	}
}

impl<I: SizeIterable> SizeIterable for Enumerate<I> {
	fn remaining(&self) -> usize {
		self.iter.remaining()
	}
}
