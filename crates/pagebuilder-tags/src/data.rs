//! Data-context presence filter
//!
//! Some fragments only make sense once the host resolved a page data
//! context for the request (or, for fallback markup, only when it did
//! not). [`PageDataContextTag`] renders its children exactly when
//! presence matches expectation.

use std::sync::Arc;

use crate::helper::TagHelper;
use crate::output::RenderOutput;

/// Looks up the page data context the host resolved for the request
///
/// The record type is opaque to the filter; only presence matters here.
/// Hosts implement this over their per-request state. A resolved record
/// can also be passed directly as an `Option`.
pub trait PageDataLookup: Send + Sync {
	/// The resolved page or content record type
	type Data;

	/// The resolved data context, when the host found one
	fn try_retrieve(&self) -> Option<Self::Data>;
}

impl<L: PageDataLookup + ?Sized> PageDataLookup for &L {
	type Data = L::Data;

	fn try_retrieve(&self) -> Option<Self::Data> {
		(**self).try_retrieve()
	}
}

impl<L: PageDataLookup + ?Sized> PageDataLookup for Arc<L> {
	type Data = L::Data;

	fn try_retrieve(&self) -> Option<Self::Data> {
		(**self).try_retrieve()
	}
}

/// A resolved record, or its absence, used as a lookup directly
impl<T: Clone + Send + Sync> PageDataLookup for Option<T> {
	type Data = T;

	fn try_retrieve(&self) -> Option<T> {
		self.clone()
	}
}

/// Decides whether data-context-gated content must be suppressed
///
/// Render exactly when presence matches expectation:
///
/// # Examples
///
/// ```
/// use pagebuilder_tags::data_context_suppresses;
///
/// assert!(!data_context_suppresses(true, true));
/// assert!(data_context_suppresses(true, false));
/// assert!(data_context_suppresses(false, true));
/// assert!(!data_context_suppresses(false, false));
/// ```
pub fn data_context_suppresses(present: bool, expected: bool) -> bool {
	present != expected
}

/// Conditionally renders children based on data-context presence
///
/// With [`initialized`](Self::initialized) left at its default `true`,
/// children render only when the lookup finds a data context. Set it to
/// `false` for fallback markup shown when no context was resolved. The
/// wrapping tag itself is dropped on every evaluation.
///
/// # Examples
///
/// ```
/// use pagebuilder_tags::{PageDataContextTag, TagHelper, TagOutput};
///
/// let tag = PageDataContextTag::new(None::<String>);
///
/// let mut output = TagOutput::new("page-data-context");
/// output.content = "<p>needs page data</p>".to_string();
/// tag.process(&mut output);
///
/// assert_eq!(output.tag_name(), None);
/// assert!(output.content.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PageDataContextTag<L> {
	lookup: L,
	/// Whether children expect a resolved data context; defaults to `true`
	pub initialized: bool,
}

impl<L: PageDataLookup> PageDataContextTag<L> {
	/// Creates a tag expecting a resolved data context
	pub fn new(lookup: L) -> Self {
		Self { lookup, initialized: true }
	}

	/// Sets the expected presence
	pub fn with_initialized(mut self, initialized: bool) -> Self {
		self.initialized = initialized;
		self
	}
}

impl<L: PageDataLookup> TagHelper for PageDataContextTag<L> {
	fn target(&self) -> &'static str {
		"page-data-context"
	}

	fn process(&self, output: &mut dyn RenderOutput) {
		output.drop_tag();

		let present = self.lookup.try_retrieve().is_some();
		if data_context_suppresses(present, self.initialized) {
			tracing::debug!(
				present,
				expected = self.initialized,
				"suppressing data-context-gated content"
			);
			output.suppress_children();
		}
	}
}
