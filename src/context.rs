//! Rendering-mode signals and the mode context adapter
//!
//! This module provides access to pagebuilder-context: the three-valued
//! [`RenderMode`](crate::RenderMode) enum, the
//! [`ModeSignalSource`](crate::ModeSignalSource) capability trait, and
//! the [`ModeContext`](crate::ModeContext) adapter that derives the mode
//! and its boolean flags from the host's two per-request signals.
//!
//! ## Example
//!
//! ```rust
//! use pagebuilder::context::{ModeContext, RenderMode, StaticModeSignals};
//!
//! let context = ModeContext::new(StaticModeSignals { preview: true, edit: false });
//! assert_eq!(context.mode(), RenderMode::LivePreview);
//! assert!(context.is_live_preview_mode());
//! ```

// Re-export all pagebuilder-context functionality
pub use pagebuilder_context::*;
