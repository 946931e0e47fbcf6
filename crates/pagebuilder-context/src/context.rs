//! Mode context adapter
//!
//! [`ModeContext`] turns the two raw host signals into the flags and the
//! single [`RenderMode`] that views ask about. Flags are recomputed on
//! every call, so a context stays correct when its source is live
//! per-request state rather than a snapshot.

use crate::mode::RenderMode;
use crate::signals::ModeSignalSource;

/// Derives rendering flags and the current mode from host signals
///
/// The derivation rules:
///
/// * preview mode is the preview signal as-is
/// * edit mode is the edit signal as-is
/// * live mode is the negation of preview mode
/// * live-preview mode is preview mode with edit mode off
///
/// The edit signal is authoritative for [`mode`](Self::mode): whenever it
/// is set the mode is [`Edit`](RenderMode::Edit), regardless of the
/// preview signal.
///
/// # Examples
///
/// ```
/// use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
///
/// let context = ModeContext::new(StaticModeSignals { preview: true, edit: false });
/// assert!(context.is_preview_mode());
/// assert!(context.is_live_preview_mode());
/// assert!(!context.is_live_mode());
/// assert_eq!(context.mode(), RenderMode::LivePreview);
/// assert_eq!(context.mode_name(), "LivePreview");
/// ```
#[derive(Debug, Clone)]
pub struct ModeContext<S> {
	signals: S,
}

impl<S: ModeSignalSource> ModeContext<S> {
	/// Creates a context over the given signal source
	pub fn new(signals: S) -> Self {
		Self { signals }
	}

	/// Whether content preview is enabled
	pub fn is_preview_mode(&self) -> bool {
		self.signals.preview_enabled()
	}

	/// Whether the page-builder editor is enabled
	pub fn is_edit_mode(&self) -> bool {
		self.signals.edit_enabled()
	}

	/// Whether the page renders as visitors see it
	pub fn is_live_mode(&self) -> bool {
		!self.is_preview_mode()
	}

	/// Whether the page renders as a read-only preview
	pub fn is_live_preview_mode(&self) -> bool {
		self.is_preview_mode() && !self.is_edit_mode()
	}

	/// The single mode the current signals resolve to
	pub fn mode(&self) -> RenderMode {
		if self.is_edit_mode() {
			RenderMode::Edit
		} else if self.is_preview_mode() {
			RenderMode::LivePreview
		} else {
			RenderMode::Live
		}
	}

	/// The current mode's name, as used in include/exclude lists
	pub fn mode_name(&self) -> &'static str {
		self.mode().as_str()
	}
}
