use crate::{DoubleEndedIterable, Iterable, SizeIterable};

/// Adds one element of lookahead.
///
/// [`peek`](`Peekable::peek`) pulls at most one element from upstream and stashes it,
/// and the next [`next`](`Iterable::next`) hands out the stashed element before pulling again.
/// An upstream [`None`] is stashed too, so peeking at the end doesn't pull repeatedly.
///
/// See [`Iterable::peekable`].
///
/// ```
/// use ratchet::{from_slice, Iterable};
///
/// let mut digits = from_slice(&[1, 2, 3]).peekable();
/// assert_eq!(digits.peek(), Some(&&1));
/// assert_eq!(digits.next_if_eq(&&1), Some(&1));
/// assert_eq!(digits.next_if(|&&x| x > 2), None);
/// assert_eq!(digits.next(), Some(&2));
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Peekable<I: Iterable> {
	iter: I,
	peeked: Option<Option<I::Item>>,
}

impl<I: Iterable> Peekable<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter, peeked: None }
	}

	/// Returns a reference to the element the next call to [`next`](`Iterable::next`) would return.
	pub fn peek(&mut self) -> Option<&I::Item> {
		let iter = &mut self.iter;
		self.peeked.get_or_insert_with(|| iter.next()).as_ref()
	}

	/// Like [`peek`](`Peekable::peek`), but allows modifying the stashed element.
	pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
		let iter = &mut self.iter;
		self.peeked.get_or_insert_with(|| iter.next()).as_mut()
	}

	/// Consumes and returns the next element iff `predicate` holds for it.
	///
	/// Otherwise, the element stays stashed.
	pub fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
		match self.next() {
			Some(matched) if predicate(&matched) => Some(matched),
			other => {
				self.peeked = Some(other);
				None
			}
		}
	}

	/// Consumes and returns the next element iff it equals `expected`.
	pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
	where
		T: ?Sized,
		I::Item: PartialEq<T>,
	{
		self.next_if(|next| next == expected)
	}

	fn peek_len(&self) -> Option<usize> {
		match &self.peeked {
			Some(None) => None,
			Some(Some(_)) => Some(1),
			None => Some(0),
		}
	}
}

impl<I: Iterable> Iterable for Peekable<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		match self.peeked.take() {
			Some(peeked) => peeked,
			None => self.iter.next(),
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let Some(peek_len) = self.peek_len() else {
			return (0, Some(0));
		};
		let (lower, upper) = self.iter.size_hint();
		let lower = if lower > 0 {
			lower.saturating_add(peek_len)
		} else {
			lower
		};
		(lower, upper.and_then(|upper| upper.checked_add(peek_len)))
	}
}

impl<I: DoubleEndedIterable> DoubleEndedIterable for Peekable<I> {
	fn next_back(&mut self) -> Option<I::Item> {
		match &mut self.peeked {
			Some(None) => None,
			Some(peeked @ Some(_)) => self.iter.next_back().or_else(|| peeked.take()),
			None => self.iter.next_back(),
		}
	}
}

impl<I: SizeIterable> SizeIterable for Peekable<I> {
	fn remaining(&self) -> usize {
		self.peek_len()
			.map_or(0, |peek_len| self.iter.remaining() + peek_len)
	}
}
