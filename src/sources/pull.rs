use scopeguard::ScopeGuard;

use crate::{adapters::Map, pair::from_tuple, Iterable, Pair};

/// Wraps a pull-style producer.
///
/// `next` is called until it returns [`None`] once, after which the iterable stays exhausted.
/// `stop` is returned separately as [`DeferStop`], which calls it exactly once:
/// when [`DeferStop::stop`] is called, or when it is dropped.
///
/// ```
/// use core::cell::Cell;
/// use ratchet::{from_pull, Iterable};
///
/// let stopped = Cell::new(false);
/// let mut n = 0;
/// {
/// 	let (numbers, defer_stop) = from_pull(
/// 		|| {
/// 			n += 1;
/// 			(n <= 3).then_some(n)
/// 		},
/// 		|| stopped.set(true),
/// 	);
/// 	assert_eq!(numbers.collect_vec(), [1, 2, 3]);
/// 	assert!(!stopped.get());
/// 	drop(defer_stop);
/// }
/// assert!(stopped.get());
/// ```
pub fn from_pull<T, N, S>(next: N, stop: S) -> (Pull<N>, DeferStop<S>)
where
	N: FnMut() -> Option<T>,
	S: FnOnce(),
{
	(Pull { next, done: false }, DeferStop::new(stop))
}

/// Like [`from_pull`], but for producers of key-value tuples, which are yielded as [`Pair`]s.
pub fn from_pull2<K, V, N, S>(next: N, stop: S) -> (PullPairs<N, K, V>, DeferStop<S>)
where
	N: FnMut() -> Option<(K, V)>,
	S: FnOnce(),
{
	let (pull, defer_stop) = from_pull(next, stop);
	(pull.map(from_tuple as fn((K, V)) -> Pair<K, V>), defer_stop)
}

/// See [`from_pull`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Pull<N> {
	next: N,
	done: bool,
}

impl<T, N: FnMut() -> Option<T>> Iterable for Pull<N> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.done {
			return None;
		}
		let item = (self.next)();
		self.done = item.is_none();
		item
	}
}

/// See [`from_pull2`].
pub type PullPairs<N, K, V> = Map<Pull<N>, fn((K, V)) -> Pair<K, V>>;

/// Calls a pull bridge's stop callback exactly once, at the latest when dropped.
#[must_use = "dropping this immediately stops the pull bridge"]
pub struct DeferStop<S: FnOnce()> {
	guard: ScopeGuard<S, fn(S)>,
}

fn release<S: FnOnce()>(stop: S) {
	tracing::trace!("Releasing pull bridge.");
	stop();
}

impl<S: FnOnce()> DeferStop<S> {
	fn new(stop: S) -> Self {
		Self {
			guard: scopeguard::guard(stop, release::<S> as fn(S)),
		}
	}

	/// Calls the stop callback now.
	pub fn stop(self) {
		drop(self.guard);
	}
}
