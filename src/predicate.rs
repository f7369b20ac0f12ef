//! Inclusion predicates for conditional class entries

use std::fmt;
use std::sync::Arc;

/// Shared callback type for lazily evaluated predicates
pub type PredicateFn = Arc<dyn Fn() -> bool + Send + Sync + 'static>;

/// Decides whether a class entry is included in the rendered output
///
/// A predicate is either a plain boolean, fixed when the entry is built,
/// or a callback that is invoked once per render. Callbacks run on the
/// rendering thread; a panic inside one propagates to the caller.
///
/// # Examples
///
/// ```
/// use flatattr::Predicate;
///
/// let fixed = Predicate::from(true);
/// assert!(fixed.evaluate());
///
/// let count = 3;
/// let lazy = Predicate::from_fn(move || count > 0);
/// assert!(lazy.evaluate());
/// ```
#[derive(Clone)]
pub enum Predicate {
	/// Fixed outcome known at construction time
	Bool(bool),
	/// Callback evaluated at render time
	Fn(PredicateFn),
}

impl Predicate {
	/// Wrap a callback as a lazily evaluated predicate
	pub fn from_fn<F>(callback: F) -> Self
	where
		F: Fn() -> bool + Send + Sync + 'static,
	{
		Self::Fn(Arc::new(callback))
	}

	/// Evaluate the predicate
	///
	/// Boolean predicates return their stored value; callback predicates
	/// are invoked.
	pub fn evaluate(&self) -> bool {
		match self {
			Predicate::Bool(value) => *value,
			Predicate::Fn(callback) => callback(),
		}
	}
}

impl From<bool> for Predicate {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl fmt::Debug for Predicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Predicate::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
			Predicate::Fn(_) => f.write_str("Fn(..)"),
		}
	}
}
