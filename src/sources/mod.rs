//! Constructors that start a pipeline, and the bridges to and from [`core::iter`].

mod bitset;
mod func;
mod pull;
mod range;
mod seq;
mod slice;

pub use bitset::{
	from_bitset, from_bitset_bytes, from_bitset_bytes_ones, from_bitset_bytes_zeros,
	from_bitset_ones, from_bitset_zeros, BitSet, BitSetLike, BitSetOffsets,
};
pub use func::{empty, from_fn, once, repeat, Empty, FromFn, Once, Repeat};
pub use pull::{from_pull, from_pull2, DeferStop, Pull, PullPairs};
pub use range::{from_range, Range};
pub use seq::{from_seq, from_seq2, Seq, SeqPairs, StdIter};
pub use slice::{from_elements, from_slice, from_vec, Elements, Slice};

use crate::IntoIterable;

/// Converts anything [`IntoIterable`] into its [`Iterable`](`crate::Iterable`).
///
/// That includes [`Option`] and [`Result`] (zero or one element),
/// [`Vec`](`alloc::vec::Vec`) and arrays (by value) as well as slices (by reference).
///
/// ```
/// use ratchet::{from_iterable, Iterable};
///
/// assert_eq!(from_iterable(Some(1)).collect_vec(), [1]);
/// assert_eq!(from_iterable(Err::<i32, _>("nope")).count(), 0);
/// assert_eq!(from_iterable([1, 2, 3]).sum::<i32>(), 6);
/// ```
pub fn from_iterable<I: IntoIterable>(iterable: I) -> I::IntoIter {
	iterable.into_iterable()
}
