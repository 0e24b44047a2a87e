use super::Peekable;
use crate::Iterable;

/// Places a clone of a separator between adjacent elements.
///
/// See [`Iterable::intersperse`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Intersperse<I: Iterable>
where
	I::Item: Clone,
{
	iter: Peekable<I>,
	separator: I::Item,
	needs_separator: bool,
}

impl<I: Iterable> Intersperse<I>
where
	I::Item: Clone,
{
	pub(crate) fn new(iter: I, separator: I::Item) -> Self {
		Self {
			iter: iter.peekable(),
			separator,
			needs_separator: false,
		}
	}
}

impl<I: Iterable> Iterable for Intersperse<I>
where
	I::Item: Clone,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		let separator = &self.separator;
		intersperse_next(&mut self.iter, &mut self.needs_separator, || {
			separator.clone()
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		intersperse_size_hint(&self.iter, self.needs_separator)
	}
}

/// Places the result of a function between adjacent elements.
///
/// The function is only called when a separator is actually yielded.
///
/// See [`Iterable::intersperse_with`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntersperseWith<I: Iterable, G> {
	iter: Peekable<I>,
	separator: G,
	needs_separator: bool,
}

impl<I: Iterable + Clone, G: Clone> Clone for IntersperseWith<I, G>
where
	I::Item: Clone,
{
	fn clone(&self) -> Self {
		Self {
			iter: self.iter.clone(),
			separator: self.separator.clone(),
			needs_separator: self.needs_separator,
		}
	}
}

impl<I: Iterable, G> IntersperseWith<I, G> {
	pub(crate) fn new(iter: I, separator: G) -> Self {
		Self {
			iter: iter.peekable(),
			separator,
			needs_separator: false,
		}
	}
}

impl<I: Iterable, G> Iterable for IntersperseWith<I, G>
where
	G: FnMut() -> I::Item,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		intersperse_next(&mut self.iter, &mut self.needs_separator, &mut self.separator)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		intersperse_size_hint(&self.iter, self.needs_separator)
	}
}

fn intersperse_next<I: Iterable>(
	iter: &mut Peekable<I>,
	needs_separator: &mut bool,
	separator: impl FnOnce() -> I::Item,
) -> Option<I::Item> {
	if *needs_separator && iter.peek().is_some() {
		*needs_separator = false;
		Some(separator())
	} else {
		*needs_separator = true;
		iter.next()
	}
}

fn intersperse_size_hint<I: Iterable>(iter: &Peekable<I>, needs_separator: bool) -> (usize, Option<usize>) {
	let (lower, upper) = iter.size_hint();
	if needs_separator {
		(lower.saturating_mul(2), upper.map(|upper| upper.saturating_mul(2)))
	} else {
		(
			lower.saturating_add(lower.saturating_sub(1)),
			upper.map(|upper| upper.saturating_add(upper.saturating_sub(1))),
		)
	}
}
