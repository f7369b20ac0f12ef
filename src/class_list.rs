//! Ordered class entries with optional inclusion predicates

use std::borrow::Cow;

use crate::escape::escape;
use crate::predicate::Predicate;

/// A single class name together with its inclusion predicate
///
/// An entry without a predicate is always included. Entries are kept in
/// insertion order and never deduplicated; whatever name was pushed is
/// what gets escaped and rendered.
#[derive(Debug, Clone)]
pub struct ClassEntry {
	name: Cow<'static, str>,
	predicate: Option<Predicate>,
}

impl ClassEntry {
	/// Create an unconditional entry
	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			predicate: None,
		}
	}

	/// Create an entry gated by a predicate
	pub fn gated(name: impl Into<Cow<'static, str>>, predicate: impl Into<Predicate>) -> Self {
		Self {
			name: name.into(),
			predicate: Some(predicate.into()),
		}
	}

	/// The class name as pushed, unescaped
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The inclusion predicate, if the entry has one
	pub fn predicate(&self) -> Option<&Predicate> {
		self.predicate.as_ref()
	}

	pub(crate) fn is_included(&self) -> bool {
		self.predicate.as_ref().is_none_or(Predicate::evaluate)
	}
}

/// An ordered list of class entries
///
/// # Examples
///
/// ```
/// use flatattr::ClassList;
///
/// let classes = ClassList::new()
///     .push("card")
///     .push_if("card-active", true)
///     .push_if("card-hidden", false);
/// assert_eq!(classes.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassList {
	entries: Vec<ClassEntry>,
}

impl ClassList {
	/// Create an empty list
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an unconditional entry
	pub fn push(self, name: impl Into<Cow<'static, str>>) -> Self {
		self.push_entry(ClassEntry::new(name))
	}

	/// Append an entry gated by a predicate
	///
	/// The predicate can be a plain `bool` or a prebuilt [`Predicate`].
	pub fn push_if(
		self,
		name: impl Into<Cow<'static, str>>,
		predicate: impl Into<Predicate>,
	) -> Self {
		self.push_entry(ClassEntry::gated(name, predicate))
	}

	/// Append an entry gated by a callback evaluated at render time
	pub fn push_when<F>(self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
	where
		F: Fn() -> bool + Send + Sync + 'static,
	{
		self.push_entry(ClassEntry::gated(name, Predicate::from_fn(predicate)))
	}

	/// Append a prebuilt entry
	pub fn push_entry(mut self, entry: ClassEntry) -> Self {
		self.entries.push(entry);
		self
	}

	/// Number of entries, counting excluded ones
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the list holds no entries at all
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over the entries in insertion order
	pub fn iter(&self) -> std::slice::Iter<'_, ClassEntry> {
		self.entries.iter()
	}

	/// Render the `class="..."` fragment with a trailing space
	///
	/// Entries whose predicate evaluates false are skipped. When nothing
	/// survives the fragment is empty; otherwise surviving names are
	/// escaped and joined with single spaces, preserving order and
	/// duplicates.
	pub(crate) fn fragment(&self) -> String {
		let mut names = String::new();
		let mut survivors = 0usize;
		for entry in &self.entries {
			if !entry.is_included() {
				continue;
			}
			names.push_str(&escape(entry.name()));
			names.push(' ');
			survivors += 1;
		}
		if survivors == 0 {
			return String::new();
		}
		format!("class=\"{}\" ", names.trim())
	}
}

impl From<&'static str> for ClassList {
	fn from(name: &'static str) -> Self {
		Self::new().push(name)
	}
}

impl From<String> for ClassList {
	fn from(name: String) -> Self {
		Self::new().push(name)
	}
}

impl From<Cow<'static, str>> for ClassList {
	fn from(name: Cow<'static, str>) -> Self {
		Self::new().push(name)
	}
}

impl<const N: usize> From<[&'static str; N]> for ClassList {
	fn from(names: [&'static str; N]) -> Self {
		let mut list = Self::new();
		for name in names {
			list = list.push(name);
		}
		list
	}
}

impl From<Vec<ClassEntry>> for ClassList {
	fn from(entries: Vec<ClassEntry>) -> Self {
		Self { entries }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fragment_keeps_insertion_order() {
		let classes = ClassList::new().push("one").push("two").push("three");
		assert_eq!(classes.fragment(), "class=\"one two three\" ");
	}

	#[test]
	fn test_fragment_skips_false_predicates() {
		let classes = ClassList::new()
			.push("one")
			.push_if("two", true)
			.push_if("three", false);
		assert_eq!(classes.fragment(), "class=\"one two\" ");
	}

	#[test]
	fn test_fragment_empty_when_nothing_survives() {
		let classes = ClassList::new()
			.push_if("one", false)
			.push_if("two", false);
		assert_eq!(classes.fragment(), "");
	}

	#[test]
	fn test_fragment_empty_for_empty_list() {
		assert_eq!(ClassList::new().fragment(), "");
	}

	#[test]
	fn test_fragment_preserves_duplicates() {
		let classes = ClassList::new().push("dup").push("dup");
		assert_eq!(classes.fragment(), "class=\"dup dup\" ");
	}

	#[test]
	fn test_fragment_preserves_embedded_whitespace() {
		// A single entry can carry several space-separated names.
		let classes = ClassList::new().push("one").push("two three");
		assert_eq!(classes.fragment(), "class=\"one two three\" ");
	}

	#[test]
	fn test_fragment_escapes_names() {
		let classes = ClassList::new().push("a<b");
		assert_eq!(classes.fragment(), "class=\"a&lt;b\" ");
	}

	#[test]
	fn test_fragment_surviving_empty_name_still_renders() {
		let classes = ClassList::new().push("");
		assert_eq!(classes.fragment(), "class=\"\" ");
	}

	#[test]
	fn test_push_when_defers_evaluation() {
		let classes = ClassList::new().push_when("lazy", || true);
		assert_eq!(classes.fragment(), "class=\"lazy\" ");
		// Invoked once per render.
		assert_eq!(classes.fragment(), "class=\"lazy\" ");
	}

	#[test]
	fn test_from_array() {
		let classes = ClassList::from(["one", "two"]);
		assert_eq!(classes.fragment(), "class=\"one two\" ");
	}

	#[test]
	fn test_from_single_name() {
		let classes = ClassList::from("solo");
		assert_eq!(classes.len(), 1);
		assert_eq!(classes.fragment(), "class=\"solo\" ");
	}

	#[test]
	fn test_from_entry_vec() {
		let classes = ClassList::from(vec![
			ClassEntry::new("one"),
			ClassEntry::gated("two", false),
		]);
		assert_eq!(classes.len(), 2);
		assert_eq!(classes.fragment(), "class=\"one\" ");
	}

	#[test]
	fn test_entry_accessors() {
		let entry = ClassEntry::gated("active", true);
		assert_eq!(entry.name(), "active");
		assert!(entry.predicate().is_some());

		let plain = ClassEntry::new("plain");
		assert!(plain.predicate().is_none());
	}
}
