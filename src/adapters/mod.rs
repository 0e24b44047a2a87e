//! Lazy adapters.
//!
//! Each adapter wraps its upstream and does no work until pulled from.
//! Construct them through the matching [`Iterable`](`crate::Iterable`) methods.
//!
//! Where an adapter can keep a capability of its upstream, it does:
//! [`DoubleEndedIterable`](`crate::DoubleEndedIterable`) and [`SizeIterable`](`crate::SizeIterable`)
//! are implemented conditionally, per adapter.

mod chain;
mod chunks;
mod cloned;
mod cycle;
mod enumerate;
mod filter;
mod flatten;
mod fuse;
mod inspect;
mod intersperse;
mod map;
mod map_windows;
mod peekable;
mod scan;
mod skip;
mod step_by;
mod take;
mod zip;

pub use crate::double_ended::Rev;
pub use chain::Chain;
pub use chunks::{ArrayChunks, ChunkBy};
pub use cloned::{Cloned, ClonedItem};
pub use cycle::Cycle;
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use inspect::Inspect;
pub use intersperse::{Intersperse, IntersperseWith};
pub use map::Map;
pub use map_windows::MapWindows;
pub use peekable::Peekable;
pub use scan::{MapWhile, Scan, SkipWhile, TakeWhile};
pub use skip::Skip;
pub use step_by::StepBy;
pub use take::Take;
pub use zip::Zip;

use crate::IntoIterable;

/// Yields `a`'s elements, then `b`'s.
///
/// ```
/// use ratchet::{chain, from_slice, Iterable};
///
/// assert_eq!(chain(vec![1, 2], from_slice(&[3]).cloned()).collect_vec(), [1, 2, 3]);
/// ```
pub fn chain<A, B>(a: A, b: B) -> Chain<A::IntoIter, B::IntoIter>
where
	A: IntoIterable,
	B: IntoIterable<Item = A::Item>,
{
	Chain::new(a.into_iterable(), b.into_iterable())
}

/// Yields [`Pair`](`crate::Pair`)s of `a`'s and `b`'s elements until either runs out.
pub fn zip<A, B>(a: A, b: B) -> Zip<A::IntoIter, B::IntoIter>
where
	A: IntoIterable,
	B: IntoIterable,
{
	Zip::new(a.into_iterable(), b.into_iterable())
}
