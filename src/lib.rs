//! Flattening structured HTML attributes into escaped attribute strings.
//!
//! This crate turns a structured description of element attributes into
//! the single string that goes between the element name and the closing
//! `>`:
//!
//! - **Class lists**: ordered entries, each optionally gated by a
//!   boolean or a render-time callback
//! - **Styles**: raw strings or ordered declaration maps where `null`
//!   knocks a property out
//! - **Generic attributes**: strings render as `name="value"`, booleans
//!   as bare names or nothing, absent values render nothing
//! - **JSON boundary**: build attribute sets from untyped JSON objects
//!
//! Every name and value is HTML-escaped on the way out. Rendering is
//! deterministic: class first, style second, then generic attributes in
//! insertion order.
//!
//! # Features
//!
//! - `full` - All features enabled
//!
//! # Quick Start
//!
//! ## Using the builder
//!
//! ```
//! use flatattr::{Attributes, StyleMap};
//!
//! let attrs = Attributes::new()
//!     .add_class("card")
//!     .add_class_if("card-active", true)
//!     .style(StyleMap::new().decl("color", "red"))
//!     .attr("data-id", "42")
//!     .attr("disabled", true);
//!
//! assert_eq!(
//!     attrs.render(),
//!     r#"class="card card-active" style="color:red;" data-id="42" disabled"#
//! );
//! ```
//!
//! ## Using the macros
//!
//! ```
//! use flatattr::{attrs, classes, render_class};
//!
//! let unread = 3;
//! let attrs = attrs! {
//!     class: ["inbox", "inbox-unread" => || unread > 0],
//!     "aria-label" => "Inbox",
//! };
//! assert_eq!(attrs.render(), r#"class="inbox inbox-unread" aria-label="Inbox""#);
//!
//! assert_eq!(render_class(classes!["a", "b" => false]), r#"class="a""#);
//! ```
//!
//! ## From JSON
//!
//! ```
//! use flatattr::Attributes;
//!
//! let attrs = Attributes::from_json_str(
//!     r#"{"class": {"card": true, "hidden": false}, "data-id": "42"}"#,
//! )?;
//! assert_eq!(attrs.render(), r#"class="card" data-id="42""#);
//! # Ok::<(), flatattr::AttrError>(())
//! ```
//!
//! # Escaping
//!
//! Raw style strings are escaped exactly once. Style maps escape each
//! property and value while assembling the declaration block, then the
//! block is escaped once more when wrapped, so entities inside map
//! values come out double-escaped. See [`Style`] for details.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attrs;
pub mod class_list;
pub mod error;
pub mod escape;
pub mod predicate;
pub mod style;

mod json;
mod macros;

// Re-export commonly used types at crate root
pub use attrs::{AttrValue, Attributes, render, render_class};
pub use class_list::{ClassEntry, ClassList};
pub use error::{AttrError, AttrResult};
pub use escape::escape;
pub use predicate::{Predicate, PredicateFn};
pub use style::{Style, StyleMap, StyleValue};
