use crate::{Iterable, SizeIterable};

/// Yields the first element and then every `step`th one.
///
/// See [`Iterable::step_by`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct StepBy<I> {
	iter: I,
	step_minus_one: usize,
	first_take: bool,
}

impl<I> StepBy<I> {
	#[track_caller]
	pub(crate) fn new(iter: I, step: usize) -> Self {
		assert!(step != 0, "`step_by` step must be non-zero");
		Self {
			iter,
			step_minus_one: step - 1,
			first_take: true,
		}
	}

	/// How many elements `n` remaining upstream elements turn into.
	fn stepped(&self, n: usize) -> usize {
		let step = self.step_minus_one + 1;
		if !self.first_take {
			n / step
		} else if n == 0 {
			0
		} else {
			1 + (n - 1) / step
		}
	}
}

impl<I: Iterable> Iterable for StepBy<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		let skip = if self.first_take {
			self.first_take = false;
			0
		} else {
			self.step_minus_one
		};
		self.iter.nth(skip)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let (lower, upper) = self.iter.size_hint();
		(self.stepped(lower), upper.map(|upper| self.stepped(upper)))
	}
}

impl<I: SizeIterable> SizeIterable for StepBy<I> {
	fn remaining(&self) -> usize {
		self.stepped(self.iter.remaining())
	}
}
