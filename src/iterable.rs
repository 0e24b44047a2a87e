//! The pull-next protocol.

use alloc::{boxed::Box, vec::Vec};
use core::cmp::Ordering;

use tap::Pipe;

use crate::{
	adapters::{
		ArrayChunks, Chain, ChunkBy, ClonedItem, Cloned, Cycle, Enumerate, Filter, FilterMap,
		FlatMap, Flatten, Fuse, Inspect, Intersperse, IntersperseWith, Map, MapWhile, MapWindows,
		Peekable, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Zip,
	},
	compare,
	dynamic::DynIter,
	sum::{void_result, ChunkResult, VoidResult},
	Pair, StdIter,
};

/// Upper bound for capacity reserved on the strength of a size hint's *upper* bound alone.
const MAX_SPECULATIVE_CAPACITY: usize = 4096;

/// A source of elements that are pulled one at a time.
///
/// Only [`next`](`Iterable::next`) is required.
/// Everything else is either a lazy adapter (which does no work until pulled from)
/// or an eager consumer (which drains the pipeline, fully or until it short-circuits).
///
/// Returning [`None`] means "no more elements for now".
/// Unless the implementation says otherwise, a later call may still return [`Some`];
/// use [`.fuse()`](`Iterable::fuse`) where monotone exhaustion matters.
pub trait Iterable {
	/// The type of the elements being pulled.
	type Item;

	/// Advances by one step and returns the next element, iff available.
	fn next(&mut self) -> Option<Self::Item>;

	/// Returns `(lower, upper)` bounds on the number of remaining elements.
	///
	/// `lower` is a guaranteed minimum.
	/// `upper` is a known maximum, where [`None`] means unknown or infinite.
	///
	/// The default is `(0, None)`, which is correct for any iterable.
	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, None)
	}

	/// Pulls `n` elements and discards them.
	///
	/// # Errors
	///
	/// Iff the iterable runs dry first, with the number of steps that were still missing.
	fn advance_by(&mut self, n: usize) -> VoidResult {
		for done in 0..n {
			if self.next().is_none() {
				return void_result(n - done);
			}
		}
		Ok(())
	}

	/// Returns the `n`th (zero-based) next element, discarding the ones before it.
	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		self.advance_by(n).ok()?;
		self.next()
	}

	/// Pulls up to `n` elements into a [`Vec`].
	///
	/// # Errors
	///
	/// Iff fewer than `n` elements were available, with the partial chunk.
	fn next_chunk(&mut self, n: usize) -> ChunkResult<Self::Item> {
		let mut chunk = Vec::with_capacity(n.min(MAX_SPECULATIVE_CAPACITY));
		for _ in 0..n {
			match self.next() {
				Some(item) => chunk.push(item),
				None => return Err(chunk),
			}
		}
		Ok(chunk)
	}

	/// Borrows this iterable, so that adapters can be applied without consuming it.
	fn by_ref(&mut self) -> &mut Self
	where
		Self: Sized,
	{
		self
	}

	/// Erases this iterable's type.
	///
	/// The result is forward-only, see [`DoubleEndedIterable::boxed_double_ended`] to keep back-iteration.
	fn boxed<'a>(self) -> DynIter<'a, Self::Item>
	where
		Self: Sized + 'a,
	{
		self.pipe(DynIter::new)
	}

	/// Bridges into [`core::iter::Iterator`], e.g. for use with `for` loops and std collectors.
	fn into_std(self) -> StdIter<Self>
	where
		Self: Sized,
	{
		self.pipe(StdIter::new)
	}

	// Adapters.

	/// Applies `f` to each element.
	fn map<U, F>(self, f: F) -> Map<Self, F>
	where
		Self: Sized,
		F: FnMut(Self::Item) -> U,
	{
		Map::new(self, f)
	}

	/// Skips elements for which `predicate` returns `false`.
	fn filter<P>(self, predicate: P) -> Filter<Self, P>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		Filter::new(self, predicate)
	}

	/// Applies `f` to each element and yields only the [`Some`] results.
	fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
	where
		Self: Sized,
		F: FnMut(Self::Item) -> Option<U>,
	{
		FilterMap::new(self, f)
	}

	/// Maps each element to an iterable and yields their elements back to back.
	fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
	where
		Self: Sized,
		U: IntoIterable,
		F: FnMut(Self::Item) -> U,
	{
		FlatMap::new(self, f)
	}

	/// Yields the elements of each element back to back.
	fn flatten(self) -> Flatten<Self>
	where
		Self: Sized,
		Self::Item: IntoIterable,
	{
		Flatten::new(self)
	}

	/// Yields this iterable's elements, then `other`'s.
	fn chain<J>(self, other: J) -> Chain<Self, J::IntoIter>
	where
		Self: Sized,
		J: IntoIterable<Item = Self::Item>,
	{
		Chain::new(self, other.into_iterable())
	}

	/// Yields [`Pair`]s of elements from both sides until either runs out.
	fn zip<J>(self, other: J) -> Zip<Self, J::IntoIter>
	where
		Self: Sized,
		J: IntoIterable,
	{
		Zip::new(self, other.into_iterable())
	}

	/// Pairs each element with its zero-based index.
	///
	/// # Panics
	///
	/// When pulling an element after the index [`usize::MAX`] was handed out.
	fn enumerate(self) -> Enumerate<Self>
	where
		Self: Sized,
	{
		Enumerate::new(self)
	}

	/// Discards the first `n` elements, on the first pull.
	fn skip(self, n: usize) -> Skip<Self>
	where
		Self: Sized,
	{
		Skip::new(self, n)
	}

	/// Yields at most `n` elements.
	fn take(self, n: usize) -> Take<Self>
	where
		Self: Sized,
	{
		Take::new(self, n)
	}

	/// Yields the first element and then every `step`th one after it.
	///
	/// # Panics
	///
	/// Iff `step` is zero.
	#[track_caller]
	fn step_by(self, step: usize) -> StepBy<Self>
	where
		Self: Sized,
	{
		StepBy::new(self, step)
	}

	/// Discards elements while `predicate` holds, then passes everything through.
	fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		SkipWhile::new(self, predicate)
	}

	/// Yields elements while `predicate` holds. The first element that fails it is discarded and ends iteration.
	fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		TakeWhile::new(self, predicate)
	}

	/// Threads mutable `state` through `f`. The first [`None`] from `f` ends iteration.
	fn scan<St, U, F>(self, state: St, f: F) -> Scan<Self, St, F>
	where
		Self: Sized,
		F: FnMut(&mut St, Self::Item) -> Option<U>,
	{
		Scan::new(self, state, f)
	}

	/// Applies `f` to each element. The first [`None`] from `f` ends iteration.
	fn map_while<U, F>(self, f: F) -> MapWhile<Self, F>
	where
		Self: Sized,
		F: FnMut(Self::Item) -> Option<U>,
	{
		MapWhile::new(self, f)
	}

	/// Adds one element of lookahead.
	fn peekable(self) -> Peekable<Self>
	where
		Self: Sized,
	{
		Peekable::new(self)
	}

	/// Makes sure that after the first [`None`], only [`None`] follows.
	fn fuse(self) -> Fuse<Self>
	where
		Self: Sized,
	{
		Fuse::new(self)
	}

	/// Repeats this iterable's elements endlessly, replaying them from a cache.
	///
	/// Yields nothing at all iff the first pass yields nothing.
	fn cycle(self) -> Cycle<Self>
	where
		Self: Sized,
		Self::Item: Clone,
	{
		Cycle::new(self)
	}

	/// Calls `f` with a reference to each element before passing it on.
	fn inspect<F>(self, f: F) -> Inspect<Self, F>
	where
		Self: Sized,
		F: FnMut(&Self::Item),
	{
		Inspect::new(self, f)
	}

	/// Places a clone of `separator` between adjacent elements.
	fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
	where
		Self: Sized,
		Self::Item: Clone,
	{
		Intersperse::new(self, separator)
	}

	/// Places the result of calling `separator` between adjacent elements.
	fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
	where
		Self: Sized,
		G: FnMut() -> Self::Item,
	{
		IntersperseWith::new(self, separator)
	}

	/// Groups elements into chunks of `size`. The last chunk may be shorter.
	///
	/// # Panics
	///
	/// Iff `size` is zero.
	#[track_caller]
	fn array_chunks(self, size: usize) -> ArrayChunks<Self>
	where
		Self: Sized,
	{
		ArrayChunks::new(self, size)
	}

	/// Groups maximal runs of consecutive elements for which `same(previous, current)` holds.
	fn chunk_by<F>(self, same: F) -> ChunkBy<Self, F>
	where
		Self: Sized,
		F: FnMut(&Self::Item, &Self::Item) -> bool,
	{
		ChunkBy::new(self, same)
	}

	/// Calls `f` on each window of `size` consecutive elements.
	///
	/// # Panics
	///
	/// Iff `size` is zero.
	#[track_caller]
	fn map_windows<U, F>(self, size: usize, f: F) -> MapWindows<Self, F>
	where
		Self: Sized,
		F: FnMut(&[Self::Item]) -> U,
	{
		MapWindows::new(self, size, f)
	}

	/// Clones referenced elements.
	///
	/// For `Option<&T>` elements, [`None`] becomes `T::default()`.
	fn cloned(self) -> Cloned<Self>
	where
		Self: Sized,
		Self::Item: ClonedItem,
	{
		Cloned::new(self)
	}

	// Consumers.

	/// Drains this iterable into any [`FromIterator`] collection.
	fn collect<B>(self) -> B
	where
		Self: Sized,
		B: FromIterator<Self::Item>,
	{
		self.into_std().collect()
	}

	/// Drains this iterable into a [`Vec`].
	///
	/// Capacity is reserved for the larger of the size hint's bounds.
	fn collect_vec(mut self) -> Vec<Self::Item>
	where
		Self: Sized,
	{
		let (lower, upper) = self.size_hint();
		let capacity = upper.map_or(lower, |upper| lower.max(upper.min(MAX_SPECULATIVE_CAPACITY)));
		let mut collected = Vec::with_capacity(capacity);
		while let Some(item) = self.next() {
			collected.push(item);
		}
		collected
	}

	/// Drains this iterable and counts the elements.
	fn count(self) -> usize
	where
		Self: Sized,
	{
		self.fold(0, |count, _| count + 1)
	}

	/// Drains this iterable and returns the final element.
	fn last(self) -> Option<Self::Item>
	where
		Self: Sized,
	{
		self.fold(None, |_, item| Some(item))
	}

	/// Calls `f` with each element.
	fn for_each<F>(self, mut f: F)
	where
		Self: Sized,
		F: FnMut(Self::Item),
	{
		self.fold((), |(), item| f(item))
	}

	/// Left-folds all elements into an accumulator.
	fn fold<B, F>(mut self, init: B, mut f: F) -> B
	where
		Self: Sized,
		F: FnMut(B, Self::Item) -> B,
	{
		let mut accumulator = init;
		while let Some(item) = self.next() {
			accumulator = f(accumulator, item);
		}
		accumulator
	}

	/// Left-folds using the first element as initial accumulator.
	fn reduce<F>(mut self, f: F) -> Option<Self::Item>
	where
		Self: Sized,
		F: FnMut(Self::Item, Self::Item) -> Self::Item,
	{
		let first = self.next()?;
		Some(self.fold(first, f))
	}

	/// Left-folds until `f` fails.
	///
	/// # Errors
	///
	/// The first error returned by `f`. Nothing is pulled after it.
	fn try_fold<B, E, F>(&mut self, init: B, mut f: F) -> Result<B, E>
	where
		Self: Sized,
		F: FnMut(B, Self::Item) -> Result<B, E>,
	{
		let mut accumulator = init;
		while let Some(item) = self.next() {
			accumulator = f(accumulator, item)?;
		}
		Ok(accumulator)
	}

	/// Calls `f` with each element until it fails.
	///
	/// # Errors
	///
	/// The first error returned by `f`.
	fn try_for_each<E, F>(&mut self, mut f: F) -> Result<(), E>
	where
		Self: Sized,
		F: FnMut(Self::Item) -> Result<(), E>,
	{
		self.try_fold((), |(), item| f(item))
	}

	/// Like [`reduce`](`Iterable::reduce`), but stops at the first error.
	///
	/// # Errors
	///
	/// The first error returned by `f`.
	fn try_reduce<E, F>(&mut self, f: F) -> Result<Option<Self::Item>, E>
	where
		Self: Sized,
		F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, E>,
	{
		let Some(first) = self.next() else {
			return Ok(None);
		};
		self.try_fold(first, f).map(Some)
	}

	/// Adds up all elements, starting from the additive identity.
	fn sum<S>(self) -> S
	where
		Self: Sized,
		S: core::iter::Sum<Self::Item>,
	{
		S::sum(self.into_std())
	}

	/// Multiplies all elements, starting from the multiplicative identity.
	fn product<P>(self) -> P
	where
		Self: Sized,
		P: core::iter::Product<Self::Item>,
	{
		P::product(self.into_std())
	}

	/// Returns the greatest element. Of several equal maxima, the **last** one wins.
	fn max(self) -> Option<Self::Item>
	where
		Self: Sized,
		Self::Item: Ord,
	{
		self.max_by(Ord::cmp)
	}

	/// Returns the least element. Of several equal minima, the **first** one wins.
	fn min(self) -> Option<Self::Item>
	where
		Self: Sized,
		Self::Item: Ord,
	{
		self.min_by(Ord::cmp)
	}

	/// Returns the greatest element according to `compare`, the last one on ties.
	fn max_by<F>(mut self, mut compare: F) -> Option<Self::Item>
	where
		Self: Sized,
		F: FnMut(&Self::Item, &Self::Item) -> Ordering,
	{
		let first = self.next()?;
		Some(self.fold(first, |max, item| match compare(&max, &item) {
			Ordering::Greater => max,
			Ordering::Less | Ordering::Equal => item,
		}))
	}

	/// Returns the least element according to `compare`, the first one on ties.
	fn min_by<F>(mut self, mut compare: F) -> Option<Self::Item>
	where
		Self: Sized,
		F: FnMut(&Self::Item, &Self::Item) -> Ordering,
	{
		let first = self.next()?;
		Some(self.fold(first, |min, item| match compare(&min, &item) {
			Ordering::Greater => item,
			Ordering::Less | Ordering::Equal => min,
		}))
	}

	/// Returns the element with the greatest key, the last one on ties.
	fn max_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
	where
		Self: Sized,
		K: Ord,
		F: FnMut(&Self::Item) -> K,
	{
		self.map(|item| (key(&item), item))
			.max_by(|(a, _), (b, _)| a.cmp(b))
			.map(|(_, item)| item)
	}

	/// Returns the element with the least key, the first one on ties.
	fn min_by_key<K, F>(self, mut key: F) -> Option<Self::Item>
	where
		Self: Sized,
		K: Ord,
		F: FnMut(&Self::Item) -> K,
	{
		self.map(|item| (key(&item), item))
			.min_by(|(a, _), (b, _)| a.cmp(b))
			.map(|(_, item)| item)
	}

	/// Checks whether `predicate` holds for every element. `true` when empty.
	fn all<P>(&mut self, mut predicate: P) -> bool
	where
		Self: Sized,
		P: FnMut(Self::Item) -> bool,
	{
		while let Some(item) = self.next() {
			if !predicate(item) {
				return false;
			}
		}
		true
	}

	/// Checks whether `predicate` holds for any element. `false` when empty.
	fn any<P>(&mut self, mut predicate: P) -> bool
	where
		Self: Sized,
		P: FnMut(Self::Item) -> bool,
	{
		while let Some(item) = self.next() {
			if predicate(item) {
				return true;
			}
		}
		false
	}

	/// Returns the first element that satisfies `predicate`.
	fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		while let Some(item) = self.next() {
			if predicate(&item) {
				return Some(item);
			}
		}
		None
	}

	/// Returns the first [`Some`] result of `f`.
	fn find_map<U, F>(&mut self, mut f: F) -> Option<U>
	where
		Self: Sized,
		F: FnMut(Self::Item) -> Option<U>,
	{
		while let Some(item) = self.next() {
			if let found @ Some(_) = f(item) {
				return found;
			}
		}
		None
	}

	/// Returns the index of the first element that satisfies `predicate`.
	fn position<P>(&mut self, mut predicate: P) -> Option<usize>
	where
		Self: Sized,
		P: FnMut(Self::Item) -> bool,
	{
		let mut index = 0;
		while let Some(item) = self.next() {
			if predicate(item) {
				return Some(index);
			}
			index += 1;
		}
		None
	}

	/// Returns the first element for which the fallible `predicate` returns `Ok(true)`.
	///
	/// # Errors
	///
	/// The first error returned by `predicate`.
	fn try_find<E, P>(&mut self, mut predicate: P) -> Result<Option<Self::Item>, E>
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> Result<bool, E>,
	{
		while let Some(item) = self.next() {
			if predicate(&item)? {
				return Ok(Some(item));
			}
		}
		Ok(None)
	}

	/// Drains this iterable into `(matching, not_matching)`.
	fn partition<P>(self, mut predicate: P) -> (Vec<Self::Item>, Vec<Self::Item>)
	where
		Self: Sized,
		P: FnMut(&Self::Item) -> bool,
	{
		self.fold((Vec::new(), Vec::new()), |(mut matching, mut rest), item| {
			if predicate(&item) {
				matching.push(item);
			} else {
				rest.push(item);
			}
			(matching, rest)
		})
	}

	/// Checks that all elements satisfying `predicate` come before all that don't.
	fn is_partitioned<P>(mut self, mut predicate: P) -> bool
	where
		Self: Sized,
		P: FnMut(Self::Item) -> bool,
	{
		self.all(&mut predicate) || !self.any(predicate)
	}

	/// Splits pairs into two [`Vec`]s.
	fn unzip<A, B>(self) -> (Vec<A>, Vec<B>)
	where
		Self: Sized,
		Self::Item: Into<Pair<A, B>>,
	{
		self.fold((Vec::new(), Vec::new()), |(mut a, mut b), item| {
			let pair = item.into();
			a.push(pair.a);
			b.push(pair.b);
			(a, b)
		})
	}

	// Comparisons.

	/// Compares lexicographically. See [`compare::cmp`].
	fn cmp<J>(self, other: J) -> Ordering
	where
		Self: Sized,
		Self::Item: Ord,
		J: IntoIterable<Item = Self::Item>,
	{
		compare::cmp(self, other)
	}

	/// Compares lexicographically with a custom element comparison. See [`compare::cmp_by`].
	fn cmp_by<J, F>(self, other: J, compare: F) -> Ordering
	where
		Self: Sized,
		J: IntoIterable,
		F: FnMut(Self::Item, J::Item) -> Ordering,
	{
		compare::cmp_by(self, other, compare)
	}

	/// Compares lexicographically, [`None`] iff two elements are incomparable. See [`compare::partial_cmp`].
	fn partial_cmp<J>(self, other: J) -> Option<Ordering>
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialOrd<J::Item>,
	{
		compare::partial_cmp(self, other)
	}

	/// Like [`partial_cmp`](`Iterable::partial_cmp`), with a custom element comparison.
	fn partial_cmp_by<J, F>(self, other: J, partial_compare: F) -> Option<Ordering>
	where
		Self: Sized,
		J: IntoIterable,
		F: FnMut(Self::Item, J::Item) -> Option<Ordering>,
	{
		compare::partial_cmp_by(self, other, partial_compare)
	}

	/// Checks for element-wise equality and equal length.
	fn eq<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialEq<J::Item>,
	{
		compare::eq(self, other)
	}

	/// Like [`eq`](`Iterable::eq`), with a custom element equality.
	fn eq_by<J, F>(self, other: J, eq: F) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		F: FnMut(Self::Item, J::Item) -> bool,
	{
		compare::eq_by(self, other, eq)
	}

	/// `!self.eq(other)`
	fn ne<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialEq<J::Item>,
	{
		compare::ne(self, other)
	}

	/// Lexicographically less than. `false` if incomparable.
	fn lt<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialOrd<J::Item>,
	{
		compare::lt(self, other)
	}

	/// Lexicographically less than or equal. `false` if incomparable.
	fn le<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialOrd<J::Item>,
	{
		compare::le(self, other)
	}

	/// Lexicographically greater than. `false` if incomparable.
	fn gt<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialOrd<J::Item>,
	{
		compare::gt(self, other)
	}

	/// Lexicographically greater than or equal. `false` if incomparable.
	fn ge<J>(self, other: J) -> bool
	where
		Self: Sized,
		J: IntoIterable,
		Self::Item: PartialOrd<J::Item>,
	{
		compare::ge(self, other)
	}

	/// Checks that each element is `<=` the next. Empty and single-element iterables are sorted.
	fn is_sorted(self) -> bool
	where
		Self: Sized,
		Self::Item: PartialOrd,
	{
		self.is_sorted_by(partial_le::<Self::Item>())
	}

	/// Checks that `in_order(previous, current)` holds for each adjacent pair.
	fn is_sorted_by<F>(mut self, mut in_order: F) -> bool
	where
		Self: Sized,
		F: FnMut(&Self::Item, &Self::Item) -> bool,
	{
		let Some(mut previous) = self.next() else {
			return true;
		};
		while let Some(current) = self.next() {
			if !in_order(&previous, &current) {
				return false;
			}
			previous = current;
		}
		true
	}

	/// Checks that the keys extracted by `key` are sorted.
	fn is_sorted_by_key<K, F>(self, key: F) -> bool
	where
		Self: Sized,
		K: PartialOrd,
		F: FnMut(Self::Item) -> K,
	{
		self.map(key).is_sorted()
	}
}

fn partial_le<T: PartialOrd>() -> impl FnMut(&T, &T) -> bool {
	|a: &T, b: &T| a <= b
}

/// An [`Iterable`] that knows exactly how many elements remain.
pub trait SizeIterable: Iterable {
	/// The exact number of remaining elements.
	fn remaining(&self) -> usize;

	/// Whether no elements remain.
	fn is_empty(&self) -> bool {
		self.remaining() == 0
	}
}

/// Conversion into an [`Iterable`].
///
/// Every [`Iterable`] converts into itself.
pub trait IntoIterable {
	/// The type of the elements being pulled.
	type Item;
	/// The resulting [`Iterable`].
	type IntoIter: Iterable<Item = Self::Item>;

	/// Performs the conversion.
	fn into_iterable(self) -> Self::IntoIter;
}

impl<I: Iterable> IntoIterable for I {
	type Item = I::Item;
	type IntoIter = I;

	fn into_iterable(self) -> I {
		self
	}
}

impl<I: Iterable + ?Sized> Iterable for &mut I {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		(**self).next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(**self).size_hint()
	}

	fn advance_by(&mut self, n: usize) -> VoidResult {
		(**self).advance_by(n)
	}
}

impl<I: SizeIterable + ?Sized> SizeIterable for &mut I {
	fn remaining(&self) -> usize {
		(**self).remaining()
	}
}

impl<I: Iterable + ?Sized> Iterable for Box<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		(**self).next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(**self).size_hint()
	}

	fn advance_by(&mut self, n: usize) -> VoidResult {
		(**self).advance_by(n)
	}
}

impl<I: SizeIterable + ?Sized> SizeIterable for Box<I> {
	fn remaining(&self) -> usize {
		(**self).remaining()
	}
}
