//! Tag helper trait
//!
//! The seam a host rendering pipeline drives. Each helper declares the
//! element it targets and a run order, and applies its effects to the
//! element's [`RenderOutput`](crate::RenderOutput).

use crate::output::RenderOutput;

/// A view-layer helper bound to one element tag
///
/// Helpers are stateless between evaluations: every call to
/// [`process`](Self::process) decides from the helper's configuration and
/// its injected per-request context alone. Hosts run helpers targeting
/// the same element in ascending [`order`](Self::order).
pub trait TagHelper: Send + Sync {
	/// The element tag this helper targets
	fn target(&self) -> &'static str;

	/// Run order among helpers on the same element; lower runs first
	fn order(&self) -> i32 {
		0
	}

	/// Applies this helper's rendering decision to the element output
	fn process(&self, output: &mut dyn RenderOutput);
}
