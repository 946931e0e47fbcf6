//! # Pagebuilder
//!
//! View-layer helpers for a CMS page-builder: conditional rendering of
//! markup fragments driven by the request's rendering mode and by page
//! data-context presence.
//!
//! A page-builder request is in exactly one of three modes: `Live` (the
//! published page), `LivePreview` (read-only preview of unpublished
//! content), or `Edit` (the in-page editor). Fragment helpers decide from
//! that mode, or from whether the host resolved a page data context,
//! whether a fragment's children render. The decisions are pure string
//! and boolean logic; everything request-scoped reaches the helpers
//! through two small capability traits.
//!
//! ## Core Principles
//!
//! - **Pure decisions**: every filter is a total, deterministic function
//!   of its inputs; no caching, no shared state, no I/O
//! - **Explicit context**: per-request signals are passed in through
//!   [`ModeSignalSource`] and [`PageDataLookup`], never read from
//!   ambient global state
//! - **Host-agnostic**: rendering effects go through the
//!   [`RenderOutput`] seam, so any buffering pipeline can drive the tags
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `context` | enabled | Rendering mode enum, signal traits, mode context adapter |
//! | `tags` | enabled | Mode and data-context tag helpers |
//! | `tera` | disabled | The decisions as registered Tera template functions |
//! | `serde` | disabled | Serde derives on mode and signal types |
//! | `full` | disabled | Everything above |
//!
//! ## Quick Example
//!
//! ```rust
//! use pagebuilder::prelude::*;
//!
//! // Per-request signals from the host, here: the in-page editor.
//! let context = ModeContext::new(StaticModeSignals { preview: true, edit: true });
//! assert_eq!(context.mode(), RenderMode::Edit);
//!
//! // Fragment configured to render only while editing.
//! let tag = PageBuilderModeTag::new(context).with_include("Edit");
//!
//! let mut output = TagOutput::new("page-builder-mode");
//! output.content = "<div class=\"editor-hints\">drag widgets here</div>".to_string();
//! tag.process(&mut output);
//!
//! // The wrapping tag never renders; the children survived the filter.
//! assert_eq!(output.tag_name(), None);
//! assert!(!output.content.is_empty());
//! ```

// Module re-exports mirroring the member crates
#[cfg(feature = "context")]
pub mod context;
#[cfg(feature = "tags")]
pub mod tags;

// Re-export mode and context types
#[cfg(feature = "context")]
pub use pagebuilder_context::{
	ContextError, ContextResult, ModeContext, ModeSignalSource, RenderMode, StaticModeSignals,
};

// Re-export tag helpers and rendering seams
#[cfg(feature = "tags")]
pub use pagebuilder_tags::{
	ModeList, PageBuilderModeTag, PageDataContextTag, PageDataLookup, RenderOutput, TagHelper,
	TagOutput, data_context_suppresses, mode_suppresses,
};

pub mod prelude {
	// Mode context - enabled by default
	#[cfg(feature = "context")]
	pub use crate::{ModeContext, ModeSignalSource, RenderMode, StaticModeSignals};

	// Tag helpers - enabled by default
	#[cfg(feature = "tags")]
	pub use crate::{
		PageBuilderModeTag, PageDataContextTag, PageDataLookup, RenderOutput, TagHelper, TagOutput,
	};

	// Tera bridge feature
	#[cfg(feature = "tera")]
	pub use pagebuilder_tags::tera_functions::register_functions;
}
