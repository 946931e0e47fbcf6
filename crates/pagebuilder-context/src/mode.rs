//! Rendering mode enumeration
//!
//! The three states a page-builder request can be in. A mode value is
//! derived from host signals per evaluation and never stored; see
//! [`ModeContext`](crate::ModeContext) for the derivation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// The rendering mode of a page-builder request
///
/// Exactly one mode holds for any given request evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderMode {
	/// The published page, as site visitors see it
	Live,
	/// A preview of unpublished content, with editing disabled
	LivePreview,
	/// The page-builder editing experience
	Edit,
}

impl RenderMode {
	/// All modes, in derivation order
	pub const ALL: [RenderMode; 3] = [RenderMode::Live, RenderMode::LivePreview, RenderMode::Edit];

	/// Returns the mode name as used in include/exclude lists
	///
	/// # Examples
	///
	/// ```
	/// use pagebuilder_context::RenderMode;
	///
	/// assert_eq!(RenderMode::Live.as_str(), "Live");
	/// assert_eq!(RenderMode::LivePreview.as_str(), "LivePreview");
	/// assert_eq!(RenderMode::Edit.as_str(), "Edit");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Live => "Live",
			Self::LivePreview => "LivePreview",
			Self::Edit => "Edit",
		}
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RenderMode {
	type Err = ContextError;

	/// Parses a mode name, ignoring ASCII case
	///
	/// # Examples
	///
	/// ```
	/// use pagebuilder_context::RenderMode;
	///
	/// assert_eq!("Edit".parse::<RenderMode>().unwrap(), RenderMode::Edit);
	/// assert_eq!("livepreview".parse::<RenderMode>().unwrap(), RenderMode::LivePreview);
	/// assert!("Draft".parse::<RenderMode>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| ContextError::UnknownMode(s.to_string()))
	}
}
