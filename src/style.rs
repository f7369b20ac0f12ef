//! Inline style specifications, raw or as ordered declaration maps

use std::borrow::Cow;

use crate::escape::escape;

/// Value of a single style declaration
///
/// `Null` marks a declaration that is kept in the map but skipped when
/// rendering, which gives callers a way to knock out a property without
/// removing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
	/// Declaration is skipped at render time
	Null,
	/// Literal CSS value
	Text(Cow<'static, str>),
}

impl StyleValue {
	/// Whether this value renders as nothing
	pub fn is_null(&self) -> bool {
		matches!(self, StyleValue::Null)
	}
}

impl From<&'static str> for StyleValue {
	fn from(value: &'static str) -> Self {
		StyleValue::Text(Cow::Borrowed(value))
	}
}

impl From<String> for StyleValue {
	fn from(value: String) -> Self {
		StyleValue::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for StyleValue {
	fn from(value: Cow<'static, str>) -> Self {
		StyleValue::Text(value)
	}
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(StyleValue::Null, Into::into)
	}
}

macro_rules! style_value_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for StyleValue {
				fn from(value: $ty) -> Self {
					StyleValue::Text(Cow::Owned(value.to_string()))
				}
			}
		)*
	};
}

style_value_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// An ordered map of CSS declarations
///
/// Declarations keep insertion order. Re-declaring a property overwrites
/// the value in place without moving the property to the back.
///
/// # Examples
///
/// ```
/// use flatattr::StyleMap;
///
/// let map = StyleMap::new()
///     .decl("color", "red")
///     .decl("margin", 0)
///     .decl("color", "blue");
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
	decls: Vec<(Cow<'static, str>, StyleValue)>,
}

impl StyleMap {
	/// Create an empty map
	pub fn new() -> Self {
		Self::default()
	}

	/// Add or overwrite a declaration
	pub fn decl(
		mut self,
		property: impl Into<Cow<'static, str>>,
		value: impl Into<StyleValue>,
	) -> Self {
		let property = property.into();
		let value = value.into();
		if let Some(existing) = self.decls.iter_mut().find(|(name, _)| *name == property) {
			existing.1 = value;
		} else {
			self.decls.push((property, value));
		}
		self
	}

	/// Number of declarations, counting null ones
	pub fn len(&self) -> usize {
		self.decls.len()
	}

	/// Whether the map holds no declarations
	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}

	/// Iterate over declarations in insertion order
	pub fn iter(&self) -> std::slice::Iter<'_, (Cow<'static, str>, StyleValue)> {
		self.decls.iter()
	}

	/// Assemble the declaration block, escaping properties and values
	///
	/// Null declarations are skipped. Each surviving declaration becomes
	/// `property:value;` with no separator in between.
	pub(crate) fn declaration_block(&self) -> String {
		let mut block = String::new();
		for (property, value) in &self.decls {
			let StyleValue::Text(text) = value else {
				continue;
			};
			block.push_str(&escape(property));
			block.push(':');
			block.push_str(&escape(text));
			block.push(';');
		}
		block
	}
}

/// Inline style specification for an attribute set
///
/// A raw style string is escaped once and emitted as-is. A map is
/// assembled from per-declaration escaped parts and the assembled block
/// is escaped once more when wrapped, so entity ampersands inside map
/// values come out double-escaped. Callers that need the block verbatim
/// should use [`Style::Raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Style {
	/// No style attribute at all
	#[default]
	None,
	/// Preassembled style string, escaped once
	Raw(Cow<'static, str>),
	/// Ordered declaration map
	Map(StyleMap),
}

impl Style {
	/// Whether no style was specified
	pub fn is_none(&self) -> bool {
		matches!(self, Style::None)
	}

	/// Render the `style="..."` fragment with a trailing space
	///
	/// `None` renders nothing. `Raw` always renders, even when empty. A
	/// map renders nothing when no declaration survives.
	pub(crate) fn fragment(&self) -> String {
		match self {
			Style::None => String::new(),
			Style::Raw(text) => format!("style=\"{}\" ", escape(text)),
			Style::Map(map) => {
				let block = map.declaration_block();
				if block.is_empty() {
					String::new()
				} else {
					format!("style=\"{}\" ", escape(&block))
				}
			}
		}
	}
}

impl From<&'static str> for Style {
	fn from(text: &'static str) -> Self {
		Style::Raw(Cow::Borrowed(text))
	}
}

impl From<String> for Style {
	fn from(text: String) -> Self {
		Style::Raw(Cow::Owned(text))
	}
}

impl From<Cow<'static, str>> for Style {
	fn from(text: Cow<'static, str>) -> Self {
		Style::Raw(text)
	}
}

impl From<StyleMap> for Style {
	fn from(map: StyleMap) -> Self {
		Style::Map(map)
	}
}

impl<T: Into<Style>> From<Option<T>> for Style {
	fn from(style: Option<T>) -> Self {
		style.map_or(Style::None, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_raw_style_escapes_once() {
		let style = Style::from("color: red; content: \"x\"");
		assert_eq!(
			style.fragment(),
			"style=\"color: red; content: &quot;x&quot;\" "
		);
	}

	#[test]
	fn test_raw_empty_string_still_renders() {
		assert_eq!(Style::from("").fragment(), "style=\"\" ");
	}

	#[test]
	fn test_none_renders_nothing() {
		assert_eq!(Style::None.fragment(), "");
	}

	#[test]
	fn test_map_renders_ordered_declarations() {
		let style = Style::from(StyleMap::new().decl("color", "red").decl("margin", 0));
		assert_eq!(style.fragment(), "style=\"color:red;margin:0;\" ");
	}

	#[test]
	fn test_map_skips_null_declarations() {
		let style = Style::from(
			StyleMap::new()
				.decl("color", "red")
				.decl("background-color", StyleValue::Null),
		);
		assert_eq!(style.fragment(), "style=\"color:red;\" ");
	}

	#[test]
	fn test_map_with_only_nulls_renders_nothing() {
		let style = Style::from(StyleMap::new().decl("color", StyleValue::Null));
		assert_eq!(style.fragment(), "");
	}

	#[test]
	fn test_empty_map_renders_nothing() {
		assert_eq!(Style::from(StyleMap::new()).fragment(), "");
	}

	#[test]
	fn test_map_double_escapes_entities() {
		// The assembled block is escaped again when wrapped, so the
		// &quot; produced for the value becomes &amp;quot;.
		let style = Style::from(StyleMap::new().decl("font-family", "\"Fira Sans\""));
		assert_eq!(
			style.fragment(),
			"style=\"font-family:&amp;quot;Fira Sans&amp;quot;;\" "
		);
	}

	#[test]
	fn test_decl_overwrites_in_place() {
		let map = StyleMap::new()
			.decl("color", "red")
			.decl("margin", "4px")
			.decl("color", "blue");
		assert_eq!(map.declaration_block(), "color:blue;margin:4px;");
	}

	#[test]
	fn test_decl_overwrite_with_null_knocks_out_property() {
		let map = StyleMap::new()
			.decl("color", "red")
			.decl("color", StyleValue::Null);
		assert_eq!(map.declaration_block(), "");
		assert_eq!(map.len(), 1);
	}

	#[test]
	fn test_numeric_values_are_stringified() {
		let map = StyleMap::new().decl("z-index", 10).decl("opacity", 0.5);
		assert_eq!(map.declaration_block(), "z-index:10;opacity:0.5;");
	}

	#[test]
	fn test_option_value_maps_to_null() {
		let map = StyleMap::new()
			.decl("width", None::<&str>)
			.decl("height", Some("4px"));
		assert_eq!(map.declaration_block(), "height:4px;");
	}

	#[test]
	fn test_iter_yields_declarations_in_order() {
		let map = StyleMap::new()
			.decl("color", "red")
			.decl("margin", StyleValue::Null);
		let decls: Vec<(&str, bool)> = map
			.iter()
			.map(|(property, value)| (property.as_ref(), value.is_null()))
			.collect();
		assert_eq!(decls, [("color", false), ("margin", true)]);
	}
}
