//! Lazy pull-model iteration over a small, capability-typed protocol.
//!
//! [![Zulip Chat](https://img.shields.io/endpoint?label=chat&url=https%3A%2F%2Fiteration-square-automation.schichler.dev%2F.netlify%2Ffunctions%2Fstream_subscribers_shield%3Fstream%3Dproject%252Fratchet)](https://iteration-square.schichler.dev/#narrow/stream/project.2Fratchet)
//!
//! Every pipeline starts at a source (see [`sources`]), is extended by lazy adapters
//! (see [`adapters`]) and is finally drained by one of [`Iterable`]'s consumers.
//! Nothing happens until something pulls.
//!
//! Capabilities are orthogonal traits:
//!
//! - [`Iterable`] is the pull-next protocol itself.
//! - [`DoubleEndedIterable`] adds pulling from the back.
//! - [`SizeIterable`] adds an exact remaining count.
//! - [`Peekable`](`adapters::Peekable`) adds one element of lookahead.
//!
//! Adapters forward each capability they can preserve.
//! Where static types are erased, [`DynIter`] keeps track of back-iteration support at runtime.
//!
//! # Example
//!
//! ```
//! use ratchet::{from_range, Iterable};
//!
//! let even_squares = from_range(1, 6)
//! 	.filter(|x| x % 2 == 0)
//! 	.map(|x| x * x)
//! 	.collect_vec();
//! assert_eq!(even_squares, [4, 16]);
//! ```
#![no_std]
#![doc(html_root_url = "https://docs.rs/ratchet/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod compare;
mod double_ended;
mod dynamic;
mod iterable;
mod num;
mod pair;
pub mod sources;
mod sum;

pub use adapters::{chain, zip};
pub use double_ended::DoubleEndedIterable;
pub use dynamic::{DynDoubleEndedIter, DynIter, NotDoubleEnded};
pub use iterable::{IntoIterable, Iterable, SizeIterable};
pub use num::Integer;
pub use pair::Pair;
pub use sources::{
	empty, from_bitset, from_bitset_bytes, from_bitset_bytes_ones, from_bitset_bytes_zeros,
	from_bitset_ones, from_bitset_zeros, from_elements, from_fn, from_iterable, from_pull,
	from_pull2, from_range, from_seq, from_seq2, from_slice, from_vec, once, repeat, BitSetLike,
	DeferStop, StdIter,
};
pub use sum::{err_val, ptr_opt, void_result, ChunkResult, Singleton, VoidResult};
