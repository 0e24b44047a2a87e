/// A heterogeneous 2-tuple with named fields.
///
/// [`Zip`](`crate::adapters::Zip`), [`Enumerate`](`crate::adapters::Enumerate`) and the key-value bridges yield these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
	/// The first component.
	pub a: A,
	/// The second component.
	pub b: B,
}

impl<A, B> Pair<A, B> {
	/// Creates a new [`Pair`].
	pub const fn new(a: A, b: B) -> Self {
		Self { a, b }
	}

	/// Converts this [`Pair`] into a plain tuple.
	pub fn into_tuple(self) -> (A, B) {
		(self.a, self.b)
	}
}

impl<A, B> From<(A, B)> for Pair<A, B> {
	fn from((a, b): (A, B)) -> Self {
		Self { a, b }
	}
}

impl<A, B> From<Pair<A, B>> for (A, B) {
	fn from(pair: Pair<A, B>) -> Self {
		pair.into_tuple()
	}
}

/// A nameable function item for building [`Pair`]s from tuples in adapter types.
pub(crate) fn from_tuple<A, B>((a, b): (A, B)) -> Pair<A, B> {
	Pair::new(a, b)
}
