//! Lexicographic comparison of two iterables.
//!
//! Both sides are pulled in lockstep.
//! The first pair of elements that decides the comparison ends it, without pulling further.
//! If one side runs out first, it is the lesser one.
//!
//! ```
//! use core::cmp::Ordering;
//! use ratchet::{compare, from_slice, Iterable};
//!
//! assert_eq!(compare::cmp(from_slice(&[1, 2]), from_slice(&[1, 2, 3])), Ordering::Less);
//! assert!(compare::eq(vec![1, 2, 3], from_slice(&[1, 2, 3]).cloned()));
//! ```

use core::cmp::Ordering;

use crate::{IntoIterable, Iterable};

/// Walks both sides until `decide` returns [`Some`] or either side runs out.
fn lockstep<A, B, R>(
	a: A,
	b: B,
	mut decide: impl FnMut(A::Item, B::Item) -> Option<R>,
	mut on_end: impl FnMut(Ordering) -> R,
) -> R
where
	A: IntoIterable,
	B: IntoIterable,
{
	let mut a = a.into_iterable();
	let mut b = b.into_iterable();
	loop {
		let x = match a.next() {
			None => {
				return on_end(if b.next().is_none() {
					Ordering::Equal
				} else {
					Ordering::Less
				})
			}
			Some(x) => x,
		};
		let Some(y) = b.next() else {
			return on_end(Ordering::Greater);
		};
		if let Some(decided) = decide(x, y) {
			return decided;
		}
	}
}

/// Total lexicographic order.
pub fn cmp<A, B>(a: A, b: B) -> Ordering
where
	A: IntoIterable,
	A::Item: Ord,
	B: IntoIterable<Item = A::Item>,
{
	cmp_by(a, b, |x, y| x.cmp(&y))
}

/// Total lexicographic order with a custom element comparison.
pub fn cmp_by<A, B, F>(a: A, b: B, mut compare: F) -> Ordering
where
	A: IntoIterable,
	B: IntoIterable,
	F: FnMut(A::Item, B::Item) -> Ordering,
{
	lockstep(
		a,
		b,
		|x, y| match compare(x, y) {
			Ordering::Equal => None,
			decided => Some(decided),
		},
		|end| end,
	)
}

/// Partial lexicographic order. [`None`] iff the first unequal pair is incomparable.
pub fn partial_cmp<A, B>(a: A, b: B) -> Option<Ordering>
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialOrd<B::Item>,
{
	partial_cmp_by(a, b, |x, y| x.partial_cmp(&y))
}

/// Partial lexicographic order with a custom element comparison.
pub fn partial_cmp_by<A, B, F>(a: A, b: B, mut partial_compare: F) -> Option<Ordering>
where
	A: IntoIterable,
	B: IntoIterable,
	F: FnMut(A::Item, B::Item) -> Option<Ordering>,
{
	lockstep(
		a,
		b,
		|x, y| match partial_compare(x, y) {
			Some(Ordering::Equal) => None,
			decided => Some(decided),
		},
		Some,
	)
}

/// Element-wise equality with equal length.
pub fn eq<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialEq<B::Item>,
{
	eq_by(a, b, |x, y| x == y)
}

/// Element-wise equality with equal length, using a custom element equality.
pub fn eq_by<A, B, F>(a: A, b: B, mut eq: F) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	F: FnMut(A::Item, B::Item) -> bool,
{
	lockstep(
		a,
		b,
		|x, y| if eq(x, y) { None } else { Some(false) },
		|end| end == Ordering::Equal,
	)
}

/// `!eq(a, b)`
pub fn ne<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialEq<B::Item>,
{
	!eq(a, b)
}

/// Lexicographically less than. `false` if incomparable.
pub fn lt<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialOrd<B::Item>,
{
	partial_cmp(a, b) == Some(Ordering::Less)
}

/// Lexicographically less than or equal. `false` if incomparable.
pub fn le<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialOrd<B::Item>,
{
	matches!(partial_cmp(a, b), Some(Ordering::Less | Ordering::Equal))
}

/// Lexicographically greater than. `false` if incomparable.
pub fn gt<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialOrd<B::Item>,
{
	partial_cmp(a, b) == Some(Ordering::Greater)
}

/// Lexicographically greater than or equal. `false` if incomparable.
pub fn ge<A, B>(a: A, b: B) -> bool
where
	A: IntoIterable,
	B: IntoIterable,
	A::Item: PartialOrd<B::Item>,
{
	matches!(partial_cmp(a, b), Some(Ordering::Greater | Ordering::Equal))
}
