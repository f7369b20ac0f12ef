//! Attribute sets and the flattened attribute string renderer

use std::borrow::Cow;
use std::fmt;

use crate::class_list::ClassList;
use crate::escape::escape;
use crate::predicate::Predicate;
use crate::style::Style;

/// Value of a generic attribute
///
/// Booleans render bare (`true`) or not at all (`false`). `Absent`
/// behaves like `false` and exists so optional values can flow through
/// without an intermediate `Option` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Attribute is omitted from the output
	Absent,
	/// Boolean attribute, rendered as a bare name when true
	Bool(bool),
	/// Valued attribute, rendered as `name="value"`
	Text(Cow<'static, str>),
}

impl AttrValue {
	/// Whether this value renders as nothing
	pub fn is_absent(&self) -> bool {
		matches!(self, AttrValue::Absent)
	}

	/// Render the fragment for this value with a trailing space
	pub(crate) fn fragment(&self, name: &str) -> String {
		match self {
			AttrValue::Absent | AttrValue::Bool(false) => String::new(),
			AttrValue::Bool(true) => format!("{} ", escape(name)),
			AttrValue::Text(value) => format!("{}=\"{}\" ", escape(name), escape(value)),
		}
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<&'static str> for AttrValue {
	fn from(value: &'static str) -> Self {
		AttrValue::Text(Cow::Borrowed(value))
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		AttrValue::Text(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

/// A structured set of HTML attributes
///
/// Holds the class list, the style specification and the generic
/// attributes in insertion order, and flattens them into a single
/// escaped attribute string.
///
/// # Examples
///
/// ```
/// use flatattr::{Attributes, StyleMap};
///
/// let attrs = Attributes::new()
///     .add_class("card")
///     .add_class_if("card-active", true)
///     .style(StyleMap::new().decl("color", "red"))
///     .attr("data-id", "42")
///     .attr("disabled", true);
///
/// assert_eq!(
///     attrs.render(),
///     r#"class="card card-active" style="color:red;" data-id="42" disabled"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes {
	class: ClassList,
	style: Style,
	extra: Vec<(Cow<'static, str>, AttrValue)>,
}

impl Attributes {
	/// Create an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the class list
	pub fn class(mut self, class: impl Into<ClassList>) -> Self {
		self.class = class.into();
		self
	}

	/// Replace the style specification
	pub fn style(mut self, style: impl Into<Style>) -> Self {
		self.style = style.into();
		self
	}

	/// Append an unconditional class entry
	pub fn add_class(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.class = self.class.push(name);
		self
	}

	/// Append a class entry gated by a predicate
	pub fn add_class_if(
		mut self,
		name: impl Into<Cow<'static, str>>,
		predicate: impl Into<Predicate>,
	) -> Self {
		self.class = self.class.push_if(name, predicate);
		self
	}

	/// Append a class entry gated by a callback evaluated at render time
	pub fn add_class_when<F>(mut self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
	where
		F: Fn() -> bool + Send + Sync + 'static,
	{
		self.class = self.class.push_when(name, predicate);
		self
	}

	/// Set a generic attribute
	///
	/// The reserved names `class` and `style` never become generic
	/// attributes. A string value under a reserved name replaces the
	/// structured field, `Absent` clears it, and a boolean clears it
	/// with a debug trace. Setting an already present generic name
	/// overwrites the value in place, keeping the position of the first
	/// assignment.
	pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
		let name = name.into();
		let value = value.into();
		if name == "class" {
			match value {
				AttrValue::Text(text) => self.class = ClassList::from(text),
				AttrValue::Absent => self.class = ClassList::new(),
				AttrValue::Bool(flag) => {
					tracing::debug!(value = flag, "dropping boolean under reserved `class` key");
					self.class = ClassList::new();
				}
			}
		} else if name == "style" {
			match value {
				AttrValue::Text(text) => self.style = Style::Raw(text),
				AttrValue::Absent => self.style = Style::None,
				AttrValue::Bool(flag) => {
					tracing::debug!(value = flag, "dropping boolean under reserved `style` key");
					self.style = Style::None;
				}
			}
		} else if let Some(existing) = self
			.extra
			.iter_mut()
			.find(|(existing_name, _)| *existing_name == name)
		{
			existing.1 = value;
		} else {
			self.extra.push((name, value));
		}
		self
	}

	/// Look up a generic attribute by name
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.extra
			.iter()
			.find(|(existing, _)| existing.as_ref() == name)
			.map(|(_, value)| value)
	}

	/// The class list
	pub fn class_list(&self) -> &ClassList {
		&self.class
	}

	/// The style specification
	pub fn style_spec(&self) -> &Style {
		&self.style
	}

	/// Whether no class entries, style or generic attributes were set
	pub fn is_empty(&self) -> bool {
		self.class.is_empty() && self.style.is_none() && self.extra.is_empty()
	}

	/// Flatten the set into a single attribute string
	///
	/// Fragments come out in a fixed order: class, style, then generic
	/// attributes in insertion order, joined by single spaces. Attributes
	/// that render nothing leave no separator behind, and the result
	/// carries no leading or trailing whitespace.
	pub fn render(&self) -> String {
		let mut rendered = String::new();
		rendered.push_str(&self.class.fragment());
		rendered.push_str(&self.style.fragment());
		for (name, value) in &self.extra {
			rendered.push_str(&value.fragment(name));
		}
		rendered.trim().to_string()
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

/// Flatten an attribute set into a single attribute string
///
/// Free-function form of [`Attributes::render`].
pub fn render(attributes: &Attributes) -> String {
	attributes.render()
}

/// Render a standalone `class="..."` attribute
///
/// Accepts anything that converts into a [`ClassList`]. Returns the
/// empty string when no entry survives its predicate.
///
/// # Examples
///
/// ```
/// use flatattr::{render_class, ClassList};
///
/// assert_eq!(render_class("card"), r#"class="card""#);
///
/// let classes = ClassList::new()
///     .push("card")
///     .push_if("card-active", false);
/// assert_eq!(render_class(classes), r#"class="card""#);
/// ```
pub fn render_class(classes: impl Into<ClassList>) -> String {
	let fragment = classes.into().fragment();
	fragment.trim_end().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::{Style, StyleMap, StyleValue};

	#[test]
	fn test_render_orders_class_style_then_generics() {
		let attrs = Attributes::new()
			.attr("data-id", "42")
			.style(StyleMap::new().decl("color", "red"))
			.add_class("card");
		assert_eq!(
			attrs.render(),
			"class=\"card\" style=\"color:red;\" data-id=\"42\""
		);
	}

	#[test]
	fn test_render_joins_fragments_with_single_spaces() {
		let attrs = Attributes::new()
			.attr("data-one", "1")
			.attr("data-two", "2")
			.attr("data-three", "3");
		assert_eq!(
			attrs.render(),
			"data-one=\"1\" data-two=\"2\" data-three=\"3\""
		);
	}

	#[test]
	fn test_render_empty_set_is_empty_string() {
		assert_eq!(Attributes::new().render(), "");
		assert!(Attributes::new().is_empty());
	}

	#[test]
	fn test_boolean_true_renders_bare_name() {
		let attrs = Attributes::new().attr("disabled", true);
		assert_eq!(attrs.render(), "disabled");
	}

	#[test]
	fn test_boolean_false_renders_nothing() {
		let attrs = Attributes::new().attr("disabled", false).attr("data-id", "42");
		assert_eq!(attrs.render(), "data-id=\"42\"");
	}

	#[test]
	fn test_absent_renders_nothing() {
		let attrs = Attributes::new()
			.attr("data-gone", AttrValue::Absent)
			.attr("data-kept", "yes");
		assert_eq!(attrs.render(), "data-kept=\"yes\"");
	}

	#[test]
	fn test_option_values_convert() {
		let attrs = Attributes::new()
			.attr("data-some", Some("yes"))
			.attr("data-none", None::<&str>);
		assert_eq!(attrs.render(), "data-some=\"yes\"");
		assert_eq!(attrs.get("data-none"), Some(&AttrValue::Absent));
	}

	#[test]
	fn test_attr_value_absent_predicate() {
		assert!(AttrValue::Absent.is_absent());
		assert!(!AttrValue::Bool(false).is_absent());
		assert!(!AttrValue::from("x").is_absent());
	}

	#[test]
	fn test_attr_overwrites_in_place() {
		let attrs = Attributes::new()
			.attr("data-id", "1")
			.attr("data-order", "2")
			.attr("data-id", "3");
		assert_eq!(attrs.render(), "data-id=\"3\" data-order=\"2\"");
	}

	#[test]
	fn test_attr_escapes_names_and_values() {
		let attrs = Attributes::new().attr("data-<odd>", "a\"b");
		assert_eq!(attrs.render(), "data-&lt;odd&gt;=\"a&quot;b\"");
	}

	#[test]
	fn test_reserved_class_string_replaces_class_list() {
		let attrs = Attributes::new()
			.add_class("old")
			.attr("class", "new-one new-two");
		assert_eq!(attrs.render(), "class=\"new-one new-two\"");
		assert!(attrs.get("class").is_none());
	}

	#[test]
	fn test_reserved_style_string_replaces_style() {
		let attrs = Attributes::new()
			.style(StyleMap::new().decl("color", "red"))
			.attr("style", "margin: 0");
		assert_eq!(attrs.render(), "style=\"margin: 0\"");
		assert!(attrs.get("style").is_none());
	}

	#[test]
	fn test_reserved_absent_clears_the_slot() {
		let attrs = Attributes::new()
			.add_class("old")
			.attr("class", AttrValue::Absent);
		assert_eq!(attrs.render(), "");
	}

	#[test]
	fn test_reserved_boolean_clears_the_slot() {
		let attrs = Attributes::new()
			.style("margin: 0")
			.attr("style", true)
			.attr("data-id", "42");
		assert_eq!(attrs.render(), "data-id=\"42\"");
	}

	#[test]
	fn test_class_with_no_survivors_leaves_no_gap() {
		let attrs = Attributes::new()
			.add_class_if("hidden", false)
			.attr("data-id", "42");
		assert_eq!(attrs.render(), "data-id=\"42\"");
	}

	#[test]
	fn test_style_value_null_flows_through_builder() {
		let attrs = Attributes::new().style(
			StyleMap::new()
				.decl("color", "red")
				.decl("background-color", StyleValue::Null),
		);
		assert_eq!(attrs.render(), "style=\"color:red;\"");
	}

	#[test]
	fn test_display_matches_render() {
		let attrs = Attributes::new().add_class("card").attr("data-id", "42");
		assert_eq!(attrs.to_string(), attrs.render());
	}

	#[test]
	fn test_free_render_delegates() {
		let attrs = Attributes::new().add_class("card");
		assert_eq!(render(&attrs), attrs.render());
	}

	#[test]
	fn test_structured_field_accessors() {
		let attrs = Attributes::new().add_class("card").style("margin: 0");
		assert_eq!(attrs.class_list().len(), 1);
		assert!(matches!(attrs.style_spec(), Style::Raw(_)));
		assert!(Attributes::new().style_spec().is_none());
	}

	#[test]
	fn test_render_class_trims_trailing_space() {
		assert_eq!(render_class("card"), "class=\"card\"");
		assert_eq!(render_class(ClassList::new()), "");
	}

	#[test]
	fn test_add_class_when_sees_render_time_state() {
		let attrs = Attributes::new().add_class_when("lazy", || true);
		assert_eq!(attrs.render(), "class=\"lazy\"");
	}
}
