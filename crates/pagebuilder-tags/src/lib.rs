//! # Pagebuilder Tags
//!
//! Mode and data-context tag helpers for page-builder driven rendering.
//!
//! Two composable helpers decide whether a markup fragment's children
//! render, and both drop their own wrapping tag on every evaluation:
//!
//! - [`PageBuilderModeTag`] filters by the current rendering mode against
//!   comma-separated include/exclude lists; exclude wins over include
//! - [`PageDataContextTag`] filters by whether the host resolved a page
//!   data context, against an expected-presence flag
//!
//! The decisions themselves are the pure functions [`mode_suppresses`]
//! and [`data_context_suppresses`]; the helpers wire them to a
//! [`RenderOutput`] sink through the [`TagHelper`] seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
//! use pagebuilder_tags::{PageBuilderModeTag, TagHelper, TagOutput};
//!
//! let context = ModeContext::new(StaticModeSignals::for_mode(RenderMode::Live));
//! let tag = PageBuilderModeTag::new(context).with_exclude("Edit");
//!
//! let mut output = TagOutput::new("page-builder-mode");
//! output.content = "<p>hidden while editing</p>".to_string();
//! tag.process(&mut output);
//!
//! assert_eq!(output.tag_name(), None);
//! assert_eq!(output.content, "<p>hidden while editing</p>");
//! ```
//!
//! ## Module Organization
//!
//! - [`mode`]: Include/exclude mode filtering and its tag helper
//! - [`data`]: Data-context presence filtering and its tag helper
//! - [`helper`]: The [`TagHelper`] trait hosts drive
//! - [`output`]: The [`RenderOutput`] sink and the [`TagOutput`] buffer
//! - `tera_functions` (feature `tera`): the decisions as Tera functions

pub mod data;
pub mod helper;
pub mod mode;
pub mod output;
#[cfg(feature = "tera")]
pub mod tera_functions;

// Re-export commonly used types at the crate root for convenience
pub use data::{PageDataContextTag, PageDataLookup, data_context_suppresses};
pub use helper::TagHelper;
pub use mode::{ModeList, PageBuilderModeTag, mode_suppresses};
pub use output::{RenderOutput, TagOutput};
