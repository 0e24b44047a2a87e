//! Integer classification for [`from_range`](`crate::from_range`).

mod sealed {
	pub trait Sealed {}
}

/// Primitive integer types that can be walked one step at a time.
///
/// This trait is sealed.
pub trait Integer: Copy + Ord + sealed::Sealed {
	/// `self + 1`. Only called with `self` below some other value, so it can't overflow.
	#[must_use]
	fn successor(self) -> Self;

	/// The number of values in `start..end`, iff that fits into a [`usize`].
	fn distance(start: Self, end: Self) -> Option<usize>;
}

macro_rules! integer {
	($($t:ty),* $(,)?) => {$(
		impl sealed::Sealed for $t {}
		impl Integer for $t {
			fn successor(self) -> Self {
				self + 1
			}

			fn distance(start: Self, end: Self) -> Option<usize> {
				if start >= end {
					Some(0)
				} else {
					usize::try_from(end.abs_diff(start)).ok()
				}
			}
		}
	)*};
}

integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
