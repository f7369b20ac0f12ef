//! Declarative macros for building attribute sets and class lists
//!
//! The macros mirror the builder API. `attrs!` assembles a full
//! [`Attributes`](crate::Attributes) set, `classes!` a standalone
//! [`ClassList`](crate::ClassList). Both accept trailing commas.

/// Builds an [`Attributes`](crate::Attributes) set from a declarative body
///
/// The body is a comma-separated list of entries:
///
/// * `class: [...]` takes the same entry forms as [`classes!`](crate::classes).
/// * `class: expr` takes anything convertible into a class list.
/// * `style: { "prop" => value, ... }` builds an ordered declaration
///   map; `null` keeps the property but renders nothing.
/// * `style: expr` takes anything convertible into a style, such as a
///   raw string.
/// * `"name" => value` sets a generic attribute. Strings render as
///   `name="value"`, `true` as a bare name, `false` renders nothing,
///   and `null` marks the attribute absent.
///
/// # Examples
///
/// ```
/// use flatattr::attrs;
///
/// let frames = 3;
/// let attrs = attrs! {
///     class: ["card", "card-active" => true, "pulse" => || frames > 0],
///     style: { "color" => "red", "background-color" => null },
///     "data-id" => "42",
///     "aria-hidden" => true,
///     "data-legacy" => null,
/// };
/// assert_eq!(
///     attrs.render(),
///     r#"class="card card-active pulse" style="color:red;" data-id="42" aria-hidden"#
/// );
/// ```
#[macro_export]
macro_rules! attrs {
	// Internal: body fully consumed.
	(@build $attrs:expr $(,)?) => { $attrs };

	// Internal: class sublist.
	(@build $attrs:expr, class: [ $($classes:tt)* ] $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build $attrs.class($crate::classes!($($classes)*)) $(, $($rest)*)?)
	};
	// Internal: class expression.
	(@build $attrs:expr, class: $class:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build $attrs.class($class) $(, $($rest)*)?)
	};
	// Internal: style declaration map.
	(@build $attrs:expr, style: { $($decls:tt)* } $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build
			$attrs.style($crate::attrs!(@style $crate::StyleMap::new(); $($decls)*))
			$(, $($rest)*)?
		)
	};
	// Internal: style expression.
	(@build $attrs:expr, style: $style:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build $attrs.style($style) $(, $($rest)*)?)
	};
	// Internal: absent generic attribute.
	(@build $attrs:expr, $name:literal => null $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build $attrs.attr($name, $crate::AttrValue::Absent) $(, $($rest)*)?)
	};
	// Internal: generic attribute.
	(@build $attrs:expr, $name:literal => $value:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@build $attrs.attr($name, $value) $(, $($rest)*)?)
	};

	// Internal: style map fully consumed.
	(@style $map:expr; ) => { $map };
	// Internal: null declaration, kept but skipped at render time.
	(@style $map:expr; $property:literal => null $(, $($rest:tt)*)?) => {
		$crate::attrs!(@style $map.decl($property, $crate::StyleValue::Null); $($($rest)*)?)
	};
	// Internal: valued declaration.
	(@style $map:expr; $property:literal => $value:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@style $map.decl($property, $value); $($($rest)*)?)
	};

	() => { $crate::Attributes::new() };
	( $($body:tt)+ ) => {
		$crate::attrs!(@build $crate::Attributes::new(), $($body)+)
	};
}

/// Builds a [`ClassList`](crate::ClassList) from a declarative body
///
/// Entries come in three forms:
///
/// * `"name"` is always included.
/// * `"name" => predicate` gates the entry on a boolean expression
///   evaluated immediately.
/// * `"name" => || predicate` gates the entry on a callback evaluated
///   at render time. The callback captures by move.
///
/// # Examples
///
/// ```
/// use flatattr::{classes, render_class};
///
/// let selected = false;
/// let classes = classes!["chip", "chip-selected" => selected, "chip-round" => true];
/// assert_eq!(render_class(classes), r#"class="chip chip-round""#);
/// ```
#[macro_export]
macro_rules! classes {
	// Internal: body fully consumed.
	(@list $classes:expr $(,)?) => { $classes };

	// Internal: render-time callback predicate.
	(@list $classes:expr, $name:literal => move || $predicate:expr $(, $($rest:tt)*)?) => {
		$crate::classes!(@list $classes.push_when($name, move || $predicate) $(, $($rest)*)?)
	};
	(@list $classes:expr, $name:literal => || $predicate:expr $(, $($rest:tt)*)?) => {
		$crate::classes!(@list $classes.push_when($name, move || $predicate) $(, $($rest)*)?)
	};
	// Internal: immediate predicate.
	(@list $classes:expr, $name:literal => $predicate:expr $(, $($rest:tt)*)?) => {
		$crate::classes!(@list $classes.push_if($name, $predicate) $(, $($rest)*)?)
	};
	// Internal: unconditional entry.
	(@list $classes:expr, $name:literal $(, $($rest:tt)*)?) => {
		$crate::classes!(@list $classes.push($name) $(, $($rest)*)?)
	};

	() => { $crate::ClassList::new() };
	( $($body:tt)+ ) => {
		$crate::classes!(@list $crate::ClassList::new(), $($body)+)
	};
}
