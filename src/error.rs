use thiserror::Error;

/// A set of different errors that can occur when using this crate.
///
/// Malformed path text is not among them: parsing is permissive, substituting
/// `0.0` for unreadable numbers and dropping unrecognized chunks. Degenerate
/// geometry (zero-length lines, flat curves) is normal data with defined
/// fallback behavior, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	/// The path description contained no text to parse.
	#[error("the path description is empty")]
	EmptyInput,
	/// A position query was made against a path with no segments.
	#[error("cannot calculate a position on a path with no segments")]
	EmptyPath,
}
