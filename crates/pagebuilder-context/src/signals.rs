//! Host signal sources
//!
//! A [`ModeSignalSource`] exposes the two booleans a CMS host knows about
//! a request: whether preview is enabled and whether the page-builder
//! editor is enabled. Everything else in this crate is derived from them.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mode::RenderMode;

/// Source of the raw per-request signals a host CMS provides
///
/// Implementations read whatever the host keeps per request (feature
/// toggles, request extensions, middleware state) and reduce it to two
/// booleans. Derivation into modes and flags lives in
/// [`ModeContext`](crate::ModeContext), so sources stay trivial.
pub trait ModeSignalSource: Send + Sync {
	/// Whether content preview is enabled for the current request
	fn preview_enabled(&self) -> bool;

	/// Whether the page-builder editor is enabled for the current request
	fn edit_enabled(&self) -> bool;
}

impl<S: ModeSignalSource + ?Sized> ModeSignalSource for &S {
	fn preview_enabled(&self) -> bool {
		(**self).preview_enabled()
	}

	fn edit_enabled(&self) -> bool {
		(**self).edit_enabled()
	}
}

impl<S: ModeSignalSource + ?Sized> ModeSignalSource for Arc<S> {
	fn preview_enabled(&self) -> bool {
		(**self).preview_enabled()
	}

	fn edit_enabled(&self) -> bool {
		(**self).edit_enabled()
	}
}

/// Absent per-request state reads as both signals off
///
/// Hosts that may not have populated request state yet can hand over an
/// `Option` and get live-mode defaults instead of special-casing `None`.
impl<S: ModeSignalSource> ModeSignalSource for Option<S> {
	fn preview_enabled(&self) -> bool {
		self.as_ref().is_some_and(S::preview_enabled)
	}

	fn edit_enabled(&self) -> bool {
		self.as_ref().is_some_and(S::edit_enabled)
	}
}

/// Fixed signal values
///
/// Useful in tests and in hosts that resolve their request state up
/// front and only need a carrier for the two booleans.
///
/// # Examples
///
/// ```
/// use pagebuilder_context::{ModeSignalSource, StaticModeSignals};
///
/// let signals = StaticModeSignals { preview: true, edit: false };
/// assert!(signals.preview_enabled());
/// assert!(!signals.edit_enabled());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaticModeSignals {
	/// Content preview is enabled
	pub preview: bool,
	/// The page-builder editor is enabled
	pub edit: bool,
}

impl StaticModeSignals {
	/// Returns the signal pair that yields the given mode
	///
	/// # Examples
	///
	/// ```
	/// use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
	///
	/// let signals = StaticModeSignals::for_mode(RenderMode::LivePreview);
	/// assert_eq!(ModeContext::new(signals).mode(), RenderMode::LivePreview);
	/// ```
	pub fn for_mode(mode: RenderMode) -> Self {
		match mode {
			RenderMode::Live => Self { preview: false, edit: false },
			RenderMode::LivePreview => Self { preview: true, edit: false },
			RenderMode::Edit => Self { preview: true, edit: true },
		}
	}
}

impl ModeSignalSource for StaticModeSignals {
	fn preview_enabled(&self) -> bool {
		self.preview
	}

	fn edit_enabled(&self) -> bool {
		self.edit
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_signals_report_their_fields() {
		let signals = StaticModeSignals { preview: true, edit: true };
		assert!(signals.preview_enabled());
		assert!(signals.edit_enabled());

		let signals = StaticModeSignals::default();
		assert!(!signals.preview_enabled());
		assert!(!signals.edit_enabled());
	}

	#[test]
	fn test_reference_and_arc_delegate() {
		let signals = StaticModeSignals { preview: true, edit: false };

		let by_ref: &StaticModeSignals = &signals;
		assert!(by_ref.preview_enabled());
		assert!(!by_ref.edit_enabled());

		let shared: Arc<StaticModeSignals> = Arc::new(signals);
		assert!(shared.preview_enabled());
		assert!(!shared.edit_enabled());
	}

	#[test]
	fn test_none_reads_as_signals_off() {
		let absent: Option<StaticModeSignals> = None;
		assert!(!absent.preview_enabled());
		assert!(!absent.edit_enabled());
	}

	#[test]
	fn test_some_delegates_to_inner_source() {
		let present = Some(StaticModeSignals { preview: true, edit: true });
		assert!(present.preview_enabled());
		assert!(present.edit_enabled());
	}

	#[test]
	fn test_for_mode_produces_distinct_pairs() {
		assert_eq!(
			StaticModeSignals::for_mode(RenderMode::Live),
			StaticModeSignals { preview: false, edit: false }
		);
		assert_eq!(
			StaticModeSignals::for_mode(RenderMode::LivePreview),
			StaticModeSignals { preview: true, edit: false }
		);
		assert_eq!(
			StaticModeSignals::for_mode(RenderMode::Edit),
			StaticModeSignals { preview: true, edit: true }
		);
	}
}
