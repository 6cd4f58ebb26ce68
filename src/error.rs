//! Error types for navigation.

use thiserror::Error;

/// Error type for path pattern construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
	/// Pattern string exceeds the maximum allowed length.
	#[error("pattern length {len} exceeds maximum allowed length of {max} bytes")]
	TooLong {
		/// Actual pattern length in bytes.
		len: usize,
		/// Maximum allowed length.
		max: usize,
	},
	/// Pattern has too many path segments.
	#[error("pattern has {count} path segments, exceeding maximum of {max}")]
	TooManySegments {
		/// Actual segment count.
		count: usize,
		/// Maximum allowed segment count.
		max: usize,
	},
	/// Placeholder name is not a well-formed identifier.
	#[error("invalid placeholder name '{0}'")]
	InvalidPlaceholder(String),
	/// The compiled regex was rejected.
	#[error("failed to compile pattern regex: {0}")]
	Regex(String),
}

/// Error type for typed parameter extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
	/// Failed to parse a captured value as the requested type.
	#[error("failed to parse parameter '{raw}' as {ty}: {message}")]
	Parse {
		/// Expected type name.
		ty: &'static str,
		/// Raw captured value that failed to parse.
		raw: String,
		/// Error message from parsing.
		message: String,
	},
	/// Number of captured values does not match the extractor.
	#[error("parameter count mismatch: expected {expected}, got {actual}")]
	CountMismatch {
		/// Expected number of captured values.
		expected: usize,
		/// Actual number of captured values.
		actual: usize,
	},
}

/// Error type for router construction and navigation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
	/// No route matches the given path.
	#[error("no route matches path: {0}")]
	NotFound(String),
	/// No route is registered under the given name.
	#[error("unknown route name: {0}")]
	UnknownName(String),
	/// A reverse lookup was missing a placeholder value.
	#[error("missing parameter for placeholder: {0}")]
	MissingParameter(String),
	/// A route with the same pattern is already registered.
	#[error("duplicate route pattern: {0}")]
	DuplicatePattern(String),
	/// A route with the same name is already registered.
	#[error("duplicate route name: {0}")]
	DuplicateName(String),
	/// The pattern string was rejected.
	#[error(transparent)]
	Pattern(#[from] PatternError),
	/// Typed parameter extraction failed.
	#[error("parameter extraction failed: {0}")]
	Param(#[from] ParamError),
}
