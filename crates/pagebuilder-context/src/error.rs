//! Error types for pagebuilder-context

use thiserror::Error;

/// Error type for page-builder context operations
#[derive(Debug, Error)]
pub enum ContextError {
	/// A mode name did not match any known rendering mode
	#[error("Unknown page builder mode: {0}")]
	UnknownMode(String),
}

/// Result type for page-builder context operations
pub type ContextResult<T> = std::result::Result<T, ContextError>;
