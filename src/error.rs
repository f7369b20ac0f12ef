//! Error types for attribute rendering.
//!
//! This module defines the error types used at the JSON boundary of the
//! flatattr crate. Rendering itself is infallible; only conversion from
//! untyped input can fail.

use thiserror::Error;

/// Errors that can occur while building an attribute set from JSON.
#[derive(Debug, Error)]
pub enum AttrError {
	/// The root of an attribute specification was not a JSON object.
	#[error("Expected a JSON object of attributes, got {0}")]
	NotAnObject(&'static str),

	/// JSON deserialization error.
	#[error("JSON error: {0}")]
	JsonError(#[from] serde_json::Error),
}

/// Result type alias for attribute operations.
pub type AttrResult<T> = Result<T, AttrError>;
