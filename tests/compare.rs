use core::{cell::Cell, cmp::Ordering};
use ratchet::{compare, empty, from_range, from_slice, Iterable};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn total_order() {
	assert_eq!(compare::cmp(from_slice(&[1, 2]), from_slice(&[1, 2])), Ordering::Equal);
	assert_eq!(compare::cmp(empty::<u8>(), empty::<u8>()), Ordering::Equal);
	assert_eq!(compare::cmp(empty(), Some(1)), Ordering::Less);
	assert_eq!(compare::cmp(vec![2], vec![1, 9, 9]), Ordering::Greater);
}

#[test]
fn custom_order() {
	let by_length = compare::cmp_by(
		from_slice(&["aa", "b"]),
		from_slice(&["x", "yy"]),
		|a, b| a.len().cmp(&b.len()),
	);
	assert_eq!(by_length, Ordering::Greater);

	let reversed = compare::cmp_by(vec![1, 2], vec![1, 3], |a, b| b.cmp(&a));
	assert_eq!(reversed, Ordering::Greater);
}

#[test]
fn partial_order() {
	assert_eq!(
		compare::partial_cmp(vec![1.0, 2.0], vec![1.0, 2.5]),
		Some(Ordering::Less)
	);
	assert_eq!(compare::partial_cmp(vec![f64::NAN], vec![1.0]), None);
	// Decided before the incomparable pair is reached.
	assert_eq!(
		compare::partial_cmp(vec![0.0, f64::NAN], vec![1.0, 1.0]),
		Some(Ordering::Less)
	);
	// Length decides once one side runs out.
	assert_eq!(
		compare::partial_cmp(vec![1.0], vec![1.0, f64::NAN]),
		Some(Ordering::Less)
	);

	let by_parity = compare::partial_cmp_by(vec![3, 4], vec![5, 6], |a, b| {
		(a % 2 == b % 2).then_some(Ordering::Equal)
	});
	assert_eq!(by_parity, Some(Ordering::Equal));
}

#[test]
fn equality() {
	assert!(compare::eq(from_slice(&[1, 2]), from_slice(&[1, 2])));
	assert!(!compare::eq(from_slice(&[1, 2]), from_slice(&[1])));
	assert!(!compare::eq(vec![1], vec![1, 1]));
	assert!(compare::eq(None::<i32>, empty::<i32>()));
	assert!(compare::ne(Some(1), Some(2)));
	assert!(!compare::eq(vec![f64::NAN], vec![f64::NAN]));

	assert!(compare::eq_by(
		from_slice(&["A", "b"]),
		from_slice(&["a", "B"]),
		|a, b| a.eq_ignore_ascii_case(b)
	));
	// Mixed element types.
	assert!(compare::eq_by(vec![1, 2], vec!["1", "2"], |n, s| n.to_string() == s));
}

#[test]
fn relational_helpers() {
	assert!(compare::lt(vec![1, 2], vec![1, 3]));
	assert!(!compare::lt(vec![1, 2], vec![1, 2]));
	assert!(compare::le(vec![1, 2], vec![1, 2]));
	assert!(compare::gt(vec![1, 2, 0], vec![1, 2]));
	assert!(compare::ge(vec![1, 2], vec![1, 2]));
	assert!(!compare::ge(vec![1], vec![1, 0]));

	// Incomparable is neither.
	let helpers: [fn(Vec<f64>, Vec<f64>) -> bool; 4] =
		[compare::lt, compare::le, compare::gt, compare::ge];
	for helper in helpers {
		assert!(!helper(vec![f64::NAN], vec![0.0]));
	}
}

#[test]
fn stops_at_the_first_difference() {
	let pulls = Cell::new(0);
	let left = from_range(0, 100).inspect(|_| pulls.set(pulls.get() + 1));
	assert_eq!(compare::cmp(left, vec![0, 1, 5]), Ordering::Less);
	assert_eq!(pulls.get(), 3);
}

#[test]
fn same_as_method_forms() {
	assert_eq!(
		from_slice(&[1, 2]).cmp(from_slice(&[1, 3])),
		compare::cmp(from_slice(&[1, 2]), from_slice(&[1, 3]))
	);
	assert!(from_slice(&[1, 2]).le(from_slice(&[1, 2])));
	assert!(from_range(0_u8, 3).eq_by(vec!['a', 'b', 'c'], |i, c| (b'a' + i) as char == c));
}
