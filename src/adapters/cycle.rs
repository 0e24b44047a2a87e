use alloc::vec::Vec;
use core::{
	fmt::{self, Debug, Formatter},
	mem,
};

use crate::Iterable;

/// Repeats its upstream's elements endlessly.
///
/// The first pass is recorded into a cache, later passes replay clones from it.
/// The upstream is not pulled again after its first [`None`].
///
/// See [`Iterable::cycle`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cycle<I: Iterable> {
	state: CycleState<I>,
}

enum CycleState<I: Iterable> {
	Filling { iter: I, cache: Vec<I::Item> },
	Replaying { cache: Vec<I::Item>, index: usize },
	Done,
}

impl<I: Iterable> Cycle<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self {
			state: CycleState::Filling {
				iter,
				cache: Vec::new(),
			},
		}
	}
}

impl<I: Iterable + Clone> Clone for Cycle<I>
where
	I::Item: Clone,
{
	fn clone(&self) -> Self {
		Self {
			state: match &self.state {
				CycleState::Filling { iter, cache } => CycleState::Filling {
					iter: iter.clone(),
					cache: cache.clone(),
				},
				CycleState::Replaying { cache, index } => CycleState::Replaying {
					cache: cache.clone(),
					index: *index,
				},
				CycleState::Done => CycleState::Done,
			},
		}
	}
}

impl<I: Iterable + Debug> Debug for Cycle<I>
where
	I::Item: Debug,
{
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.state {
			CycleState::Filling { iter, cache } => f
				.debug_struct("Cycle::Filling")
				.field("iter", iter)
				.field("cache", cache)
				.finish(),
			CycleState::Replaying { cache, index } => f
				.debug_struct("Cycle::Replaying")
				.field("cache", cache)
				.field("index", index)
				.finish(),
			CycleState::Done => f.write_str("Cycle::Done"),
		}
	}
}

impl<I: Iterable> Iterable for Cycle<I>
where
	I::Item: Clone,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		match &mut self.state {
			CycleState::Filling { iter, cache } => {
				if let Some(item) = iter.next() {
					cache.push(item.clone());
					return Some(item);
				}
				let cache = mem::take(cache);
				if cache.is_empty() {
					self.state = CycleState::Done;
					return None;
				}
				self.state = CycleState::Replaying { cache, index: 0 };
				self.next()
			}
			CycleState::Replaying { cache, index } => {
				let item = cache[*index].clone();
				*index = (*index + 1) % cache.len();
				Some(item)
			}
			CycleState::Done => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.state {
			CycleState::Filling { iter, cache } if cache.is_empty() => match iter.size_hint() {
				(_, Some(0)) => (0, Some(0)),
				(lower, _) => (lower, None),
			},
			CycleState::Filling { .. } | CycleState::Replaying { .. } => (0, None),
			CycleState::Done => (0, Some(0)),
		}
	}
}
