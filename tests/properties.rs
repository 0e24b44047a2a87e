//! Laws that hold across input lengths rather than for one hand-picked case.

use ratchet::{chain, from_fn, from_range, from_slice, zip, Iterable};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

const LENGTHS: [i32; 6] = [0, 1, 2, 3, 7, 10];

/// Checks `size_hint` against what is actually left, at every position.
fn assert_hints_hold<I: Iterable>(make: impl Fn() -> I) {
	let total = make().count();
	for position in 0..=total {
		let mut iter = make();
		assert!(iter.advance_by(position).is_ok());
		let (lower, upper) = iter.size_hint();
		let remaining = total - position;
		assert!(lower <= remaining, "lower {lower} > {remaining} at {position}");
		if let Some(upper) = upper {
			assert!(remaining <= upper, "upper {upper} < {remaining} at {position}");
		}
	}
}

#[test]
fn size_hints_are_bounds() {
	for n in LENGTHS {
		assert_hints_hold(|| from_range(0, n));
		assert_hints_hold(|| from_range(0, n).filter(|x| x % 3 != 0));
		assert_hints_hold(|| from_range(0, n).skip(2).take(4));
		assert_hints_hold(|| from_range(0, n).step_by(3));
		assert_hints_hold(|| from_range(0, n).peekable());
		assert_hints_hold(|| from_range(0, n).intersperse(-1));
		assert_hints_hold(|| from_range(0, n).array_chunks(3));
		assert_hints_hold(|| from_range(0, n).map_windows(3, <[i32]>::len));
		assert_hints_hold(|| from_range(0, n).flat_map(|x| from_range(0, x)));
		assert_hints_hold(|| from_range(0, n).take_while(|&x| x < 4));
		assert_hints_hold(|| chain(from_range(0, n), Some(n)));
		assert_hints_hold(|| zip(from_range(0, n), from_range(0, 5)));
		assert_hints_hold(|| from_range(0, n).cycle().take(12));
	}
}

#[test]
fn fuse_is_idempotent_after_exhaustion() {
	let mut calls = 0;
	let mut fused = from_fn(|| {
		calls += 1;
		(calls != 3).then_some(calls)
	})
	.fuse();
	assert_eq!(fused.next(), Some(1));
	assert_eq!(fused.next(), Some(2));
	for _ in 0..5 {
		assert_eq!(fused.next(), None);
	}
	// Double fusing changes nothing.
	assert_eq!(from_range(0, 3).fuse().fuse().collect_vec(), [0, 1, 2]);
}

#[test]
fn chain_is_associative() {
	for n in LENGTHS {
		let left = chain(chain(from_range(0, n), from_range(n, 2 * n)), from_range(2 * n, 3 * n));
		let right = chain(from_range(0, n), chain(from_range(n, 2 * n), from_range(2 * n, 3 * n)));
		assert_eq!(left.collect_vec(), right.collect_vec());
	}
}

#[test]
fn zip_truncates_to_the_shorter_side() {
	for a in LENGTHS {
		for b in LENGTHS {
			let zipped = zip(from_range(0, a), from_range(0, b)).collect_vec();
			assert_eq!(zipped.len(), a.min(b) as usize);
			assert!(zipped.iter().all(|pair| pair.a == pair.b));
		}
	}
}

#[test]
fn step_by_keeps_aligned_elements() {
	for n in LENGTHS {
		for step in 1..5 {
			let stepped = from_range(0, n).step_by(step).collect_vec();
			let expected = from_range(0, n)
				.filter(|x| *x as usize % step == 0)
				.collect_vec();
			assert_eq!(stepped, expected, "n = {n}, step = {step}");
		}
	}
}

#[test]
fn intersperse_alternates() {
	for n in LENGTHS {
		let spaced = from_range(1, n + 1).intersperse(0).collect_vec();
		assert_eq!(spaced.len(), (2 * n - 1).max(0) as usize);
		for (index, x) in spaced.iter().enumerate() {
			assert_eq!(*x == 0, index % 2 == 1);
		}
	}
}

#[test]
fn chunks_and_windows_cover_the_input() {
	for n in LENGTHS {
		let values = from_range(0, n).collect_vec();
		for size in 1..5 {
			let chunks = from_slice(&values).cloned().array_chunks(size).collect_vec();
			assert_eq!(chunks.len(), values.len().div_ceil(size));
			assert!(chunks.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
			assert_eq!(chunks.concat(), values);

			let windows = from_slice(&values)
				.cloned()
				.map_windows(size, <[i32]>::to_vec)
				.collect_vec();
			assert_eq!(windows, values.windows(size).map(<[i32]>::to_vec).collect::<Vec<_>>());
		}
	}
}

#[test]
fn cycle_is_periodic() {
	for n in LENGTHS {
		let cycled = from_range(0, n).cycle().take(30).collect_vec();
		if n == 0 {
			assert!(cycled.is_empty());
			continue;
		}
		assert_eq!(cycled.len(), 30);
		for (index, x) in cycled.iter().enumerate() {
			assert_eq!(*x as usize, index % n as usize);
		}
	}
}
