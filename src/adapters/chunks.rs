use alloc::{vec, vec::Vec};

use crate::{Iterable, SizeIterable};

/// Groups elements into chunks of a fixed size.
///
/// Only the final chunk may be shorter, and it is never empty.
///
/// See [`Iterable::array_chunks`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct ArrayChunks<I> {
	iter: I,
	size: usize,
}

impl<I> ArrayChunks<I> {
	#[track_caller]
	pub(crate) fn new(iter: I, size: usize) -> Self {
		assert!(size != 0, "`array_chunks` size must be non-zero");
		Self { iter, size }
	}
}

impl<I: Iterable> Iterable for ArrayChunks<I> {
	type Item = Vec<I::Item>;

	fn next(&mut self) -> Option<Vec<I::Item>> {
		match self.iter.next_chunk(self.size) {
			Ok(chunk) => Some(chunk),
			Err(partial) if !partial.is_empty() => Some(partial),
			Err(_) => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.iter.size_hint();
		(
			lower.div_ceil(self.size),
			upper.map(|upper| upper.div_ceil(self.size)),
		)
	}
}

impl<I: SizeIterable> SizeIterable for ArrayChunks<I> {
	fn remaining(&self) -> usize {
		self.iter.remaining().div_ceil(self.size)
	}
}

/// Groups maximal runs of related consecutive elements.
///
/// See [`Iterable::chunk_by`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct ChunkBy<I: Iterable, F> {
	iter: I,
	same: F,
	/// The element that closed the previous run.
	pending: Option<I::Item>,
}

impl<I: Iterable, F> ChunkBy<I, F> {
	pub(crate) fn new(iter: I, same: F) -> Self {
		Self {
			iter,
			same,
			pending: None,
		}
	}
}

impl<I: Iterable, F> Iterable for ChunkBy<I, F>
where
	F: FnMut(&I::Item, &I::Item) -> bool,
{
	type Item = Vec<I::Item>;

	fn next(&mut self) -> Option<Vec<I::Item>> {
		let first = match self.pending.take() {
			Some(first) => first,
			None => self.iter.next()?,
		};
		let mut run = vec![first];
		while let Some(item) = self.iter.next() {
			if run
				.last()
				.is_some_and(|previous| (self.same)(previous, &item))
			{
				run.push(item);
			} else {
				self.pending = Some(item);
				break;
			}
		}
		Some(run)
	}
}
