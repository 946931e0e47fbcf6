//! Conditional rendering tag helpers
//!
//! This module provides access to pagebuilder-tags: the mode and
//! data-context tag helpers, the pure decision functions behind them,
//! and the [`RenderOutput`](crate::RenderOutput) seam they mutate. With
//! the `tera` feature enabled, the `tera_functions` submodule exposes
//! the same decisions as registered Tera template functions.
//!
//! ## Example
//!
//! ```rust
//! use pagebuilder::context::{ModeContext, StaticModeSignals};
//! use pagebuilder::tags::{PageBuilderModeTag, TagHelper, TagOutput};
//!
//! // Live request; fragment excluded from Edit renders its children.
//! let context = ModeContext::new(StaticModeSignals::default());
//! let tag = PageBuilderModeTag::new(context).with_exclude("Edit");
//!
//! let mut output = TagOutput::new("page-builder-mode");
//! output.content = "<p>visible to visitors</p>".to_string();
//! tag.process(&mut output);
//!
//! assert!(!output.content.is_empty());
//! ```

// Re-export all pagebuilder-tags functionality
pub use pagebuilder_tags::*;
