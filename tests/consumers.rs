use core::{cell::Cell, cmp::Ordering};
use ratchet::{from_range, from_seq, from_slice, from_vec, repeat, Iterable, Pair};
use std::collections::{BTreeSet, HashMap};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn collect_into_std_collections() {
	let set: BTreeSet<_> = from_slice(&[3, 1, 3, 2]).cloned().collect();
	assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

	let map: HashMap<_, _> = from_slice(&["a", "bb"])
		.map(|s| (*s, s.len()))
		.collect();
	assert_eq!(map["bb"], 2);
}

#[test]
fn collect_vec_capacity() {
	// Exact hints are used as-is.
	assert!(from_range(0, 10).collect_vec().capacity() >= 10);
	// Unbounded upper hints reserve only the lower bound.
	let sparse = from_seq(core::iter::successors(Some(1), |x| (*x < 4).then_some(x + 1))).collect_vec();
	assert_eq!(sparse, [1, 2, 3, 4]);
}

#[test]
fn count_last_nth() {
	assert_eq!(from_range(0, 5).count(), 5);
	assert_eq!(from_range(0, 5).last(), Some(4));
	assert_eq!(from_range(0, 0).last(), None);
	assert_eq!(from_range(0, 5).nth(2), Some(2));
	assert_eq!(from_range(0, 5).nth(5), None);

	let mut range = from_range(0, 5);
	assert_eq!(range.nth(1), Some(1));
	assert_eq!(range.nth(1), Some(3));
	assert_eq!(range.nth(0), Some(4));
}

#[test]
fn advance_by_reports_missing_steps() {
	let mut range = from_range(0, 3);
	assert_eq!(range.advance_by(0), Ok(()));
	assert_eq!(range.advance_by(2), Ok(()));
	assert_eq!(range.advance_by(4).map_err(usize::from), Err(3));
}

#[test]
fn next_chunk() {
	let mut range = from_range(0, 5);
	assert_eq!(range.next_chunk(0), Ok(vec![]));
	assert_eq!(range.next_chunk(2), Ok(vec![0, 1]));
	assert_eq!(range.next_chunk(4), Err(vec![2, 3, 4]));
	assert_eq!(range.next_chunk(1), Err(vec![]));
}

#[test]
fn next_chunk_does_not_trust_huge_requests() {
	let chunk = from_range(0, 3).next_chunk(usize::MAX);
	assert_eq!(chunk, Err(vec![0, 1, 2]));
}

#[test]
fn for_each_and_fold() {
	let mut seen = Vec::new();
	from_range(0, 3).for_each(|x| seen.push(x));
	assert_eq!(seen, [0, 1, 2]);

	let digits = from_slice(&[1, 2, 3]).fold(0, |number, digit| number * 10 + digit);
	assert_eq!(digits, 123);
}

#[test]
fn reduce() {
	assert_eq!(from_range(1, 5).reduce(|a, b| a * b), Some(24));
	assert_eq!(from_range(0, 0).reduce(|a, b| a + b), None);
	assert_eq!(from_range(7, 8).reduce(|_, _| unreachable!()), Some(7));
}

#[test]
fn try_fold_short_circuits() {
	let pulls = Cell::new(0);
	let mut source = from_range(0, 10).inspect(|_| pulls.set(pulls.get() + 1));
	let result = source.try_fold(0, |sum, x| if x < 3 { Ok(sum + x) } else { Err(x) });
	assert_eq!(result, Err(3));
	assert_eq!(pulls.get(), 4);
	assert_eq!(source.next(), Some(4));

	let total: Result<i32, ()> = from_range(0, 4).try_fold(0, |sum, x| Ok(sum + x));
	assert_eq!(total, Ok(6));
}

#[test]
fn try_for_each() {
	let mut seen = Vec::new();
	let result = from_range(0, 10).try_for_each(|x| {
		if x == 2 {
			return Err("two");
		}
		seen.push(x);
		Ok(())
	});
	assert_eq!(result, Err("two"));
	assert_eq!(seen, [0, 1]);
}

#[test]
fn try_reduce() {
	let max = from_slice(&[3, 7, 2]).cloned().try_reduce(|a, b| Ok::<_, ()>(a.max(b)));
	assert_eq!(max, Ok(Some(7)));

	let empty = from_range(0, 0).try_reduce(|a, b| Ok::<_, ()>(a + b));
	assert_eq!(empty, Ok(None));

	let overflowing = from_slice(&[200_u8, 50, 10])
		.cloned()
		.try_reduce(|a, b| a.checked_add(b).ok_or("overflow"));
	assert_eq!(overflowing, Err("overflow"));
}

#[test]
fn sum_and_product() {
	assert_eq!(from_range(1, 5).sum::<i32>(), 10);
	assert_eq!(from_range(0, 0).sum::<i32>(), 0);
	assert_eq!(from_range(0, 0).product::<i32>(), 1);
	assert_eq!(from_slice(&[1.5, 2.0]).product::<f64>(), 3.0);
}

#[test]
fn min_and_max_tie_breaking() {
	let items = [Pair::new(1, 'a'), Pair::new(0, 'b'), Pair::new(1, 'c'), Pair::new(0, 'd')];

	let max = from_slice(&items).max_by_key(|pair| pair.a);
	assert_eq!(max.map(|pair| pair.b), Some('c'));
	let min = from_slice(&items).min_by_key(|pair| pair.a);
	assert_eq!(min.map(|pair| pair.b), Some('b'));

	let max = from_slice(&items).max_by(|x, y| x.a.cmp(&y.a));
	assert_eq!(max.map(|pair| pair.b), Some('c'));
	let min = from_slice(&items).min_by(|x, y| x.a.cmp(&y.a));
	assert_eq!(min.map(|pair| pair.b), Some('b'));

	assert_eq!(from_slice(&[2, 9, 4]).max(), Some(&9));
	assert_eq!(from_slice(&[2, 9, 4]).min(), Some(&2));
	assert_eq!(from_range(0, 0).max(), None);
}

#[test]
fn all_and_any() {
	assert!(from_range(0, 0).all(|_| false));
	assert!(!from_range(0, 0).any(|_| true));
	assert!(from_range(0, 5).all(|x| x < 5));
	assert!(from_range(0, 5).any(|x| x == 4));

	let mut range = from_range(0, 10);
	assert!(!range.all(|x| x < 3));
	assert_eq!(range.next(), Some(4));
	assert!(range.any(|x| x == 6));
	assert_eq!(range.next(), Some(7));
}

#[test]
fn find_family() {
	let mut range = from_range(0, 10);
	assert_eq!(range.find(|&x| x > 2), Some(3));
	assert_eq!(range.find_map(|x| (x % 3 == 0).then_some(x * 10)), Some(60));
	assert_eq!(range.position(|x| x == 9), Some(2));
	assert_eq!(range.find(|_| true), None);

	let found = from_range(0, 10).try_find(|&x| if x < 5 { Ok(x == 3) } else { Err(x) });
	assert_eq!(found, Ok(Some(3)));
	let failed = from_range(0, 10).try_find(|&x| if x < 2 { Ok(false) } else { Err(x) });
	assert_eq!(failed, Err(2));
	let missing = from_range(0, 3).try_find(|_| Ok::<_, ()>(false));
	assert_eq!(missing, Ok(None));
}

#[test]
fn partition() {
	let (even, odd) = from_range(0, 7).partition(|x| x % 2 == 0);
	assert_eq!(even, [0, 2, 4, 6]);
	assert_eq!(odd, [1, 3, 5]);

	assert!(from_slice(&[2, 4, 1, 3]).is_partitioned(|x| x % 2 == 0));
	assert!(!from_slice(&[2, 1, 4]).is_partitioned(|x| x % 2 == 0));
	assert!(from_range(0, 0).is_partitioned(|_| false));
}

#[test]
fn unzip() {
	let (numbers, letters) = from_slice(&[1, 2]).cloned().zip(from_slice(&['a', 'b'])).unzip();
	assert_eq!(numbers, [1, 2]);
	assert_eq!(letters, [&'a', &'b']);

	let (keys, values): (Vec<&str>, Vec<i32>) = from_vec(vec![("x", 1), ("y", 2)]).unzip();
	assert_eq!(keys, ["x", "y"]);
	assert_eq!(values, [1, 2]);
}

#[test]
fn sortedness() {
	assert!(from_range(0, 0).is_sorted());
	assert!(from_slice(&[1]).is_sorted());
	assert!(from_slice(&[1, 1, 2, 5]).is_sorted());
	assert!(!from_slice(&[1, 3, 2]).is_sorted());
	assert!(!from_slice(&[1.0, f64::NAN]).is_sorted());

	assert!(from_slice(&[5, 3, 3]).is_sorted_by(|a, b| a >= b));
	assert!(from_slice(&["ccc", "a", "bb"]).is_sorted_by_key(|s| s.len() % 3));
	assert!(!from_slice(&[-2, 1]).is_sorted_by_key(|x: &i32| x.abs()));
}

#[test]
fn comparisons_as_methods() {
	assert_eq!(from_range(0, 3).cmp(from_range(0, 3)), Ordering::Equal);
	assert!(from_range(0, 3).eq(vec![0, 1, 2]));
	assert!(from_range(0, 3).ne(vec![0, 1]));
	assert!(from_range(0, 3).lt(from_range(0, 4)));
	assert!(repeat(1).take(2).gt(Some(0)));
}

#[test]
fn by_ref_keeps_the_rest() {
	let mut range = from_range(0, 6);
	let head = range.by_ref().take(2).collect_vec();
	assert_eq!(head, [0, 1]);
	assert_eq!(range.collect_vec(), [2, 3, 4, 5]);
}
