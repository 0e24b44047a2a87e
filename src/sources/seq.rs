use crate::{
	adapters::Map, pair::from_tuple, DoubleEndedIterable, Iterable, Pair, SizeIterable,
};

/// Wraps any [`core::iter::IntoIterator`] as a forward-only [`Iterable`].
///
/// The host iterator's size hint is passed through.
/// It is released by dropping the returned iterable.
///
/// ```
/// use ratchet::{from_seq, Iterable};
///
/// let words = from_seq("a bc def".split(' ')).map(str::len);
/// assert_eq!(words.collect_vec(), [1, 2, 3]);
/// ```
pub fn from_seq<I: IntoIterator>(seq: I) -> Seq<I::IntoIter> {
	Seq {
		iter: seq.into_iter(),
	}
}

/// Like [`from_seq`], but for sequences of key-value tuples, which are yielded as [`Pair`]s.
pub fn from_seq2<K, V, I>(seq: I) -> SeqPairs<I::IntoIter, K, V>
where
	I: IntoIterator<Item = (K, V)>,
{
	from_seq(seq).map(from_tuple as fn((K, V)) -> Pair<K, V>)
}

/// See [`from_seq`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Seq<I> {
	iter: I,
}

impl<I: Iterator> Iterable for Seq<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		Iterator::next(&mut self.iter)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		Iterator::size_hint(&self.iter)
	}
}

/// See [`from_seq2`].
pub type SeqPairs<I, K, V> = Map<Seq<I>, fn((K, V)) -> Pair<K, V>>;

/// Bridges an [`Iterable`] into [`Iterator`].
///
/// Back-iteration and exact size carry over where the wrapped iterable supports them.
/// See [`Iterable::into_std`].
///
/// ```
/// use ratchet::{from_slice, Iterable};
///
/// let mut total = 0;
/// for x in from_slice(&[1, 2, 3]).into_std().rev() {
/// 	total = total * 10 + x;
/// }
/// assert_eq!(total, 321);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct StdIter<I> {
	iter: I,
}

impl<I> StdIter<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter }
	}

	/// Unwraps the bridged [`Iterable`].
	pub fn into_inner(self) -> I {
		self.iter
	}
}

impl<I: Iterable> Iterator for StdIter<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		Iterable::next(&mut self.iter)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		Iterable::size_hint(&self.iter)
	}
}

impl<I: DoubleEndedIterable> DoubleEndedIterator for StdIter<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		DoubleEndedIterable::next_back(&mut self.iter)
	}
}

impl<I: SizeIterable> ExactSizeIterator for StdIter<I> {
	fn len(&self) -> usize {
		self.iter.remaining()
	}
}
