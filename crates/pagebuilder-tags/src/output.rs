//! Render output sink
//!
//! Tag helpers never build markup. They receive the host's buffered
//! output for one element and apply two effects through [`RenderOutput`]:
//! dropping the wrapping tag and suppressing the buffered children.
//! [`TagOutput`] is the shipped buffer for hosts without one of their own.

/// Sink for the rendering effects a tag helper can apply
///
/// Implemented by whatever buffers element output in the host pipeline.
/// Both effects are one-way: an output stays dropped or suppressed for
/// the rest of its evaluation.
pub trait RenderOutput {
	/// Never render the wrapping element tag, keeping its children
	fn drop_tag(&mut self);

	/// Drop every buffered content segment of the element
	fn suppress_children(&mut self);
}

/// Buffered output for a single element
///
/// Holds the element tag name and the five content segments the host
/// renders around and inside it. Hosts fill the segments before helpers
/// run; helpers mutate the buffer only through [`RenderOutput`].
///
/// # Examples
///
/// ```
/// use pagebuilder_tags::{RenderOutput, TagOutput};
///
/// let mut output = TagOutput::new("page-builder-mode");
/// output.content = "<p>editor toolbar</p>".to_string();
///
/// output.drop_tag();
/// output.suppress_children();
///
/// assert_eq!(output.tag_name(), None);
/// assert!(output.content.is_empty());
/// assert!(output.is_content_modified());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagOutput {
	/// Markup rendered before the element
	pub pre_element: String,
	/// Markup rendered after the opening tag, before the children
	pub pre_content: String,
	/// The buffered child content
	pub content: String,
	/// Markup rendered after the children, before the closing tag
	pub post_content: String,
	/// Markup rendered after the element
	pub post_element: String,
	tag_name: Option<String>,
	/// Set once a helper replaced or dropped the buffered children
	content_modified: bool,
}

impl TagOutput {
	/// Creates an empty output for the given element tag
	///
	/// # Examples
	///
	/// ```
	/// use pagebuilder_tags::TagOutput;
	///
	/// let output = TagOutput::new("page-data-context");
	/// assert_eq!(output.tag_name(), Some("page-data-context"));
	/// assert!(!output.is_content_modified());
	/// ```
	pub fn new(tag_name: impl Into<String>) -> Self {
		Self {
			tag_name: Some(tag_name.into()),
			..Self::default()
		}
	}

	/// The element tag name, or `None` once the tag was dropped
	pub fn tag_name(&self) -> Option<&str> {
		self.tag_name.as_deref()
	}

	/// Whether a helper changed the buffered children
	pub fn is_content_modified(&self) -> bool {
		self.content_modified
	}

	/// Whether every content segment is empty
	pub fn is_empty(&self) -> bool {
		self.pre_element.is_empty()
			&& self.pre_content.is_empty()
			&& self.content.is_empty()
			&& self.post_content.is_empty()
			&& self.post_element.is_empty()
	}
}

impl RenderOutput for TagOutput {
	fn drop_tag(&mut self) {
		self.tag_name = None;
	}

	fn suppress_children(&mut self) {
		self.pre_element.clear();
		self.pre_content.clear();
		self.content.clear();
		self.post_content.clear();
		self.post_element.clear();
		self.content_modified = true;
	}
}
