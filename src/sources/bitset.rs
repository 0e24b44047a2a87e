use alloc::vec::Vec;

use crate::{
	adapters::{Filter, Map},
	DoubleEndedIterable, Iterable, Pair, SizeIterable,
};

/// Read access to a fixed number of bits.
pub trait BitSetLike {
	/// The number of bits.
	fn size(&self) -> usize;

	/// Whether the bit at `offset` is set. `false` if `offset` is out of range.
	fn get(&self, offset: usize) -> bool;
}

impl<B: BitSetLike + ?Sized> BitSetLike for &B {
	fn size(&self) -> usize {
		(**self).size()
	}

	fn get(&self, offset: usize) -> bool {
		(**self).get(offset)
	}
}

/// Bytes in order, each from its most significant bit to its least significant bit.
impl BitSetLike for [u8] {
	fn size(&self) -> usize {
		self.len().saturating_mul(8)
	}

	fn get(&self, offset: usize) -> bool {
		<[u8]>::get(self, offset / 8)
			.is_some_and(|&byte| byte & (0b1000_0000_u8 >> (offset % 8)) != 0)
	}
}

impl BitSetLike for Vec<u8> {
	fn size(&self) -> usize {
		self.as_slice().size()
	}

	fn get(&self, offset: usize) -> bool {
		BitSetLike::get(self.as_slice(), offset)
	}
}

/// Yields a [`Pair`] of offset and value for each bit of `bitset`, in offset order.
///
/// The size is read once, up front.
///
/// ```
/// use ratchet::{from_bitset, Iterable, Pair};
///
/// let bits = from_bitset(&[0b1010_0000_u8][..]).take(3).collect_vec();
/// assert_eq!(bits, [Pair::new(0, true), Pair::new(1, false), Pair::new(2, true)]);
/// ```
pub fn from_bitset<B: BitSetLike>(bitset: B) -> BitSet<B> {
	let end = bitset.size();
	BitSet {
		bitset,
		offset: 0,
		end,
	}
}

/// Yields the offsets of the set bits of `bitset`.
pub fn from_bitset_ones<B: BitSetLike>(bitset: B) -> BitSetOffsets<B> {
	from_bitset(bitset)
		.filter(is_set as fn(&Pair<usize, bool>) -> bool)
		.map(offset as fn(Pair<usize, bool>) -> usize)
}

/// Yields the offsets of the unset bits of `bitset`.
pub fn from_bitset_zeros<B: BitSetLike>(bitset: B) -> BitSetOffsets<B> {
	from_bitset(bitset)
		.filter(is_unset as fn(&Pair<usize, bool>) -> bool)
		.map(offset as fn(Pair<usize, bool>) -> usize)
}

/// [`from_bitset`] over `bytes`, MSB first.
pub fn from_bitset_bytes(bytes: &[u8]) -> BitSet<&[u8]> {
	from_bitset(bytes)
}

/// [`from_bitset_ones`] over `bytes`, MSB first.
///
/// ```
/// use ratchet::{from_bitset_bytes_ones, Iterable};
///
/// assert_eq!(from_bitset_bytes_ones(&[0b1010_1010]).collect_vec(), [0, 2, 4, 6]);
/// ```
pub fn from_bitset_bytes_ones(bytes: &[u8]) -> BitSetOffsets<&[u8]> {
	from_bitset_ones(bytes)
}

/// [`from_bitset_zeros`] over `bytes`, MSB first.
pub fn from_bitset_bytes_zeros(bytes: &[u8]) -> BitSetOffsets<&[u8]> {
	from_bitset_zeros(bytes)
}

fn is_set(bit: &Pair<usize, bool>) -> bool {
	bit.b
}

fn is_unset(bit: &Pair<usize, bool>) -> bool {
	!bit.b
}

fn offset(bit: Pair<usize, bool>) -> usize {
	bit.a
}

/// See [`from_bitset_ones`] and [`from_bitset_zeros`].
pub type BitSetOffsets<B> =
	Map<Filter<BitSet<B>, fn(&Pair<usize, bool>) -> bool>, fn(Pair<usize, bool>) -> usize>;

/// See [`from_bitset`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct BitSet<B> {
	bitset: B,
	offset: usize,
	end: usize,
}

impl<B: BitSetLike> Iterable for BitSet<B> {
	type Item = Pair<usize, bool>;

	fn next(&mut self) -> Option<Pair<usize, bool>> {
		if self.offset >= self.end {
			return None;
		}
		let offset = self.offset;
		self.offset += 1;
		Some(Pair::new(offset, self.bitset.get(offset)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.remaining();
		(remaining, Some(remaining))
	}
}

impl<B: BitSetLike> DoubleEndedIterable for BitSet<B> {
	fn next_back(&mut self) -> Option<Pair<usize, bool>> {
		if self.offset >= self.end {
			return None;
		}
		self.end -= 1;
		Some(Pair::new(self.end, self.bitset.get(self.end)))
	}
}

impl<B: BitSetLike> SizeIterable for BitSet<B> {
	fn remaining(&self) -> usize {
		self.end - self.offset
	}
}
