use core::cell::Cell;
use ratchet::{
	empty, from_bitset, from_bitset_bytes, from_bitset_bytes_ones, from_bitset_bytes_zeros,
	from_bitset_ones, from_elements, from_fn, from_iterable, from_pull, from_pull2, from_range,
	from_seq, from_seq2, from_slice, from_vec, once, repeat, BitSetLike, DoubleEndedIterable,
	Iterable, Pair, SizeIterable,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn slice_from_both_ends() {
	let mut slice = from_slice(&[1, 2, 3, 4]);
	assert_eq!(slice.remaining(), 4);
	assert_eq!(slice.next(), Some(&1));
	assert_eq!(slice.next_back(), Some(&4));
	assert_eq!(slice.as_slice(), &[2, 3]);
	assert_eq!(slice.size_hint(), (2, Some(2)));
	assert_eq!(slice.next_back(), Some(&3));
	assert_eq!(slice.next(), Some(&2));
	assert_eq!(slice.next(), None);
	assert_eq!(slice.next_back(), None);
}

#[test]
fn slice_advance() {
	let mut slice = from_slice(&[1, 2, 3]);
	assert_eq!(slice.advance_by(2), Ok(()));
	assert_eq!(slice.next(), Some(&3));

	let mut slice = from_slice(&[1, 2, 3]);
	assert_eq!(slice.advance_by(5).map_err(usize::from), Err(2));
	assert!(slice.is_empty());

	let mut slice = from_slice(&[1, 2, 3]);
	assert_eq!(slice.advance_back_by(1), Ok(()));
	assert_eq!(slice.nth_back(0), Some(&2));
}

#[test]
fn owned_elements() {
	let mut elements = from_elements([String::from("a"), String::from("b"), String::from("c")]);
	assert_eq!(elements.next_back().as_deref(), Some("c"));
	assert_eq!(elements.remaining(), 2);
	assert_eq!(elements.collect_vec(), ["a", "b"]);

	assert_eq!(from_vec(vec![1, 2, 3]).rev().collect_vec(), [3, 2, 1]);
}

#[test]
fn ranges() {
	assert_eq!(from_range(0_u8, 4).collect_vec(), [0, 1, 2, 3]);
	assert_eq!(from_range(-2_i64, 1).collect_vec(), [-2, -1, 0]);
	assert_eq!(from_range(5, 5).count(), 0);
	assert_eq!(from_range(5, 1).count(), 0);
	assert_eq!(from_range(3_u32, 10).size_hint(), (7, Some(7)));
	assert_eq!(from_range(i8::MIN, i8::MAX).size_hint(), (255, Some(255)));
	assert_eq!(from_range(250_u8, u8::MAX).last(), Some(254));
}

#[test]
fn range_hint_overflow() {
	assert_eq!(from_range(0_u128, u128::MAX).size_hint(), (usize::MAX, None));
}

#[test]
fn functions() {
	let mut state = 0;
	let counter = from_fn(|| {
		state += 1;
		(state <= 3).then_some(state)
	});
	assert_eq!(counter.collect_vec(), [1, 2, 3]);

	let mut single = once("x");
	assert_eq!(single.size_hint(), (1, Some(1)));
	assert_eq!(single.next(), Some("x"));
	assert_eq!(single.next(), None);

	let mut nothing = empty::<u8>();
	assert_eq!(nothing.size_hint(), (0, Some(0)));
	assert_eq!(nothing.next(), None);
	assert_eq!(nothing.next_back(), None);

	let mut sevens = repeat(7);
	assert_eq!(sevens.size_hint(), (0, None));
	assert_eq!(sevens.nth(1000), Some(7));
}

#[test]
fn option_and_result_are_iterables() {
	let mut some = from_iterable(Some(1));
	assert_eq!(some.size_hint(), (1, Some(1)));
	assert_eq!(some.next_back(), Some(1));
	assert_eq!(some.next(), None);

	assert_eq!(from_iterable(None::<u8>).count(), 0);
	assert_eq!(from_iterable(Ok::<_, ()>('a')).collect_vec(), ['a']);
	assert!(from_iterable(Err::<char, _>(5)).collect_vec().is_empty());
}

#[test]
fn from_iterable_passes_iterables_through() {
	let mut slice = from_slice(&[1, 2, 3]);
	slice.next();
	let rest = from_iterable(slice);
	assert_eq!(rest.remaining(), 2);
}

#[test]
fn pull_bridge_stops_once() {
	let stops = Cell::new(0);
	let mut values = vec![3, 2, 1];
	let (mut pull, defer_stop) = from_pull(|| values.pop(), || stops.set(stops.get() + 1));
	assert_eq!(pull.next(), Some(1));
	assert_eq!(pull.next(), Some(2));
	defer_stop.stop();
	assert_eq!(stops.get(), 1);
	assert_eq!(pull.next(), Some(3));
	assert_eq!(pull.next(), None);
	drop(pull);
	assert_eq!(stops.get(), 1);
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn pull_bridge_stops_once_on_unwind() {
	use std::panic::{catch_unwind, AssertUnwindSafe};

	let stops = Cell::new(0);
	let unwound = catch_unwind(AssertUnwindSafe(|| {
		let mut values = vec![3, 2, 1];
		let (pull, _defer_stop) = from_pull(|| values.pop(), || stops.set(stops.get() + 1));
		pull.map(|x| {
			assert!(x < 2, "pipeline failed at {x}");
			x
		})
		.collect_vec()
	}));
	assert!(unwound.is_err());
	assert_eq!(stops.get(), 1);
}

#[test]
fn pull_bridge_stays_exhausted() {
	let calls = Cell::new(0);
	let (mut pull, _defer_stop) = from_pull(
		|| {
			calls.set(calls.get() + 1);
			// Would resume after a `None` if asked again.
			(calls.get() != 2).then_some(calls.get())
		},
		|| (),
	);
	assert_eq!(pull.next(), Some(1));
	assert_eq!(pull.next(), None);
	assert_eq!(pull.next(), None);
	assert_eq!(calls.get(), 2);
}

#[test]
fn pull_bridge_stops_on_drop() {
	let stopped = Cell::new(false);
	{
		let (pull, _defer_stop) = from_pull2(
			{
				let mut entries = vec![("b", 2), ("a", 1)];
				move || entries.pop()
			},
			|| stopped.set(true),
		);
		assert_eq!(pull.collect_vec(), [Pair::new("a", 1), Pair::new("b", 2)]);
		assert!(!stopped.get());
	}
	assert!(stopped.get());
}

#[test]
fn seq_bridges() {
	let mut seq = from_seq(vec![1, 2, 3]);
	assert_eq!(seq.size_hint(), (3, Some(3)));
	assert_eq!(seq.next(), Some(1));
	assert_eq!(seq.collect_vec(), [2, 3]);

	let pairs = from_seq2([(1, 'x'), (2, 'y')]).collect_vec();
	assert_eq!(pairs, [Pair::new(1, 'x'), Pair::new(2, 'y')]);
}

#[test]
fn bit_sets_are_msb_first() {
	let bytes = [0b1010_1010_u8, 0b1100_1100];
	assert_eq!(bytes[..].size(), 16);
	assert!(BitSetLike::get(&bytes[..], 0));
	assert!(!BitSetLike::get(&bytes[..], 1));
	assert!(BitSetLike::get(&bytes[..], 9));
	assert!(!BitSetLike::get(&bytes[..], 16));

	let first = from_bitset_bytes(&bytes).take(4).collect_vec();
	assert_eq!(
		first,
		[
			Pair::new(0, true),
			Pair::new(1, false),
			Pair::new(2, true),
			Pair::new(3, false)
		]
	);
	assert_eq!(
		from_bitset_bytes_ones(&bytes).collect_vec(),
		[0, 2, 4, 6, 8, 9, 12, 13]
	);
	assert_eq!(
		from_bitset_bytes_zeros(&bytes).collect_vec(),
		[1, 3, 5, 7, 10, 11, 14, 15]
	);
}

#[test]
fn custom_bit_set() {
	struct Evens(usize);
	impl BitSetLike for Evens {
		fn size(&self) -> usize {
			self.0
		}

		fn get(&self, offset: usize) -> bool {
			offset < self.0 && offset % 2 == 0
		}
	}

	let mut bits = from_bitset(Evens(5));
	assert_eq!(bits.remaining(), 5);
	assert_eq!(bits.next_back(), Some(Pair::new(4, true)));
	assert_eq!(from_bitset_ones(Evens(5)).collect_vec(), [0, 2, 4]);
	assert_eq!(from_bitset(Evens(0)).next(), None);
}
