//! # Pagebuilder Context
//!
//! Rendering-mode signals and context adapter for page-builder aware views.
//!
//! A CMS host knows two booleans about a request: whether content preview
//! is enabled and whether the page-builder editor is enabled. This crate
//! reduces them to a single [`RenderMode`] plus the four flags views ask
//! about, so template-side helpers never touch host internals directly.
//!
//! ## Features
//!
//! - **Two-signal derivation**: [`ModeContext`] computes live, preview,
//!   live-preview, and edit flags from one [`ModeSignalSource`]
//! - **Absent-state defaults**: an `Option` source reads as both signals
//!   off, so unpopulated request state means live mode
//! - **Mode names**: [`RenderMode`] parses and prints the names used in
//!   include/exclude filter lists
//!
//! ## Quick Start
//!
//! ```rust
//! use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
//!
//! let context = ModeContext::new(StaticModeSignals { preview: true, edit: true });
//! assert_eq!(context.mode(), RenderMode::Edit);
//! assert!(context.is_edit_mode());
//! assert!(!context.is_live_mode());
//! ```
//!
//! ## Module Organization
//!
//! - [`mode`]: The [`RenderMode`] enum and its name handling
//! - [`signals`]: The [`ModeSignalSource`] trait and carriers
//! - [`context`]: The [`ModeContext`] adapter
//! - [`error`]: Error types for mode-name parsing

pub mod context;
pub mod error;
pub mod mode;
pub mod signals;

// Re-export commonly used types at the crate root for convenience
pub use context::ModeContext;
pub use error::{ContextError, ContextResult};
pub use mode::RenderMode;
pub use signals::{ModeSignalSource, StaticModeSignals};
