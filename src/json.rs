//! Building attribute sets from untyped JSON specifications

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::attrs::{AttrValue, Attributes};
use crate::class_list::ClassList;
use crate::error::{AttrError, AttrResult};
use crate::style::{Style, StyleMap, StyleValue};

impl Attributes {
	/// Build an attribute set from a parsed JSON object
	///
	/// The object's `class` key accepts a string, an array mixing plain
	/// names with `{name: bool}` predicate objects, or a map of names to
	/// booleans. The `style` key accepts a raw string or a map of
	/// declarations where `null` knocks a property out. Every other key
	/// becomes a generic attribute: strings render as `name="value"`,
	/// `true` as a bare name, and `false` or `null` render nothing.
	/// Value kinds outside those rules are dropped with a debug trace.
	///
	/// # Errors
	///
	/// Returns [`AttrError::NotAnObject`] when the root value is not an
	/// object.
	///
	/// # Examples
	///
	/// ```
	/// use flatattr::Attributes;
	/// use serde_json::json;
	///
	/// let attrs = Attributes::from_json(&json!({
	///     "class": ["card", {"card-active": true}],
	///     "style": {"color": "red", "background-color": null},
	///     "data-id": "42",
	///     "disabled": true,
	///     "hidden": null,
	/// }))?;
	/// assert_eq!(
	///     attrs.render(),
	///     r#"class="card card-active" style="color:red;" data-id="42" disabled"#
	/// );
	/// # Ok::<(), flatattr::AttrError>(())
	/// ```
	pub fn from_json(value: &Value) -> AttrResult<Self> {
		let Value::Object(entries) = value else {
			return Err(AttrError::NotAnObject(json_kind(value)));
		};
		let mut attrs = Attributes::new();
		for (name, value) in entries {
			if name == "class" {
				attrs = attrs.class(class_from_json(value));
			} else if name == "style" {
				attrs = attrs.style(style_from_json(value));
			} else {
				attrs = attrs.attr(Cow::Owned(name.clone()), attr_value_from_json(name, value));
			}
		}
		Ok(attrs)
	}

	/// Parse a JSON string and build an attribute set from it
	///
	/// # Errors
	///
	/// Returns [`AttrError::JsonError`] when the input is not valid JSON
	/// and [`AttrError::NotAnObject`] when it parses to anything other
	/// than an object.
	pub fn from_json_str(input: &str) -> AttrResult<Self> {
		let value: Value = serde_json::from_str(input)?;
		Self::from_json(&value)
	}
}

fn class_from_json(value: &Value) -> ClassList {
	match value {
		Value::String(name) => ClassList::from(name.clone()),
		Value::Array(entries) => {
			let mut classes = ClassList::new();
			for entry in entries {
				match entry {
					Value::String(name) => classes = classes.push(name.clone()),
					Value::Object(pairs) => classes = push_flag_pairs(classes, pairs),
					other => {
						tracing::debug!(
							kind = json_kind(other),
							"dropping class entry with unsupported kind"
						);
					}
				}
			}
			classes
		}
		Value::Object(pairs) => push_flag_pairs(ClassList::new(), pairs),
		Value::Null => ClassList::new(),
		other => {
			tracing::debug!(
				kind = json_kind(other),
				"dropping class specification with unsupported kind"
			);
			ClassList::new()
		}
	}
}

fn push_flag_pairs(mut classes: ClassList, pairs: &Map<String, Value>) -> ClassList {
	for (name, flag) in pairs {
		match flag {
			Value::Bool(flag) => classes = classes.push_if(name.clone(), *flag),
			other => {
				tracing::debug!(
					class = name.as_str(),
					kind = json_kind(other),
					"dropping class entry with non-boolean flag"
				);
			}
		}
	}
	classes
}

fn style_from_json(value: &Value) -> Style {
	match value {
		Value::String(text) => Style::Raw(Cow::Owned(text.clone())),
		Value::Object(decls) => {
			let mut map = StyleMap::new();
			for (property, value) in decls {
				let value = match value {
					Value::Null => StyleValue::Null,
					Value::String(text) => StyleValue::Text(Cow::Owned(text.clone())),
					Value::Number(number) => StyleValue::Text(Cow::Owned(number.to_string())),
					Value::Bool(flag) => StyleValue::Text(Cow::Owned(flag.to_string())),
					other => {
						tracing::debug!(
							property = property.as_str(),
							kind = json_kind(other),
							"dropping style declaration with unsupported kind"
						);
						continue;
					}
				};
				map = map.decl(property.clone(), value);
			}
			Style::Map(map)
		}
		Value::Null => Style::None,
		other => {
			tracing::debug!(
				kind = json_kind(other),
				"dropping style specification with unsupported kind"
			);
			Style::None
		}
	}
}

fn attr_value_from_json(name: &str, value: &Value) -> AttrValue {
	match value {
		Value::Null => AttrValue::Absent,
		Value::Bool(flag) => AttrValue::Bool(*flag),
		Value::String(text) => AttrValue::Text(Cow::Owned(text.clone())),
		other => {
			tracing::debug!(
				attribute = name,
				kind = json_kind(other),
				"dropping attribute with unsupported value kind"
			);
			AttrValue::Absent
		}
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
