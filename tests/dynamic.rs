use ratchet::{
	from_range, from_slice, DoubleEndedIterable, DynDoubleEndedIter, DynIter, Iterable,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn forward_only() {
	let mut forward = from_range(0, 3).boxed();
	assert!(!forward.is_double_ended());
	assert!(forward.as_double_ended().is_none());
	assert_eq!(forward.next(), Some(0));
	assert_eq!(forward.size_hint(), (2, Some(2)));
}

#[test]
fn boxed_double_ended_keeps_its_capability() {
	let mut erased = from_slice(&[1, 2, 3]).cloned().boxed_double_ended();
	assert!(erased.is_double_ended());
	assert_eq!(erased.as_double_ended().and_then(|back| back.next_back()), Some(3));
	assert_eq!(erased.next(), Some(1));

	let mut recovered = erased.try_to_double_ended().unwrap();
	assert_eq!(recovered.next_back(), Some(2));
	assert_eq!(recovered.next(), None);
}

#[test]
fn failed_recovery_returns_the_iterable() {
	let mut forward = from_range(0, 3).boxed();
	forward.next();

	let error = forward.try_to_double_ended().unwrap_err();
	assert_eq!(
		error.to_string(),
		"the erased iterator does not support iteration from the back"
	);
	assert_eq!(format!("{error:?}"), "NotDoubleEnded(..)");

	let forward = error.into_inner();
	assert_eq!(forward.collect_vec(), [1, 2]);
}

#[test]
#[should_panic = "does not support iteration from the back"]
fn must_to_double_ended_panics_for_forward_only() {
	let _ = from_range(0, 3).boxed().must_to_double_ended();
}

#[test]
fn into_forward_round_trip() {
	let double_ended: DynDoubleEndedIter<'_, _> = from_slice(&['a', 'b', 'c'])
		.boxed_double_ended()
		.must_to_double_ended();
	let forward: DynIter<'_, _> = double_ended.into_forward();
	assert!(forward.is_double_ended());

	let mut back = forward.must_to_double_ended();
	assert_eq!(back.next_back(), Some(&'c'));
	assert_eq!(back.rev().collect_vec(), [&'b', &'a']);
}

#[test]
fn borrowing_erasure() {
	let values = vec![String::from("x"), String::from("yz")];
	let lengths: DynIter<'_, usize> = from_slice(&values).map(|s| s.len()).boxed();
	assert_eq!(lengths.sum::<usize>(), 3);
}

#[test]
fn debug_output() {
	let erased = from_slice(&[1, 2]).boxed_double_ended();
	assert_eq!(
		format!("{erased:?}"),
		"DynIter { double_ended: true, size_hint: (2, Some(2)), .. }"
	);
}
