//! Mode-filtered rendering
//!
//! The include/exclude mode filter: a comma-separated list of mode names
//! on each side, matched against the current mode name per evaluation.
//! Exclude always wins over include. [`PageBuilderModeTag`] packages the
//! decision as a tag helper over a [`ModeContext`].

use pagebuilder_context::{ModeContext, ModeSignalSource};

use crate::helper::TagHelper;
use crate::output::RenderOutput;

/// A comma-separated list of mode names
///
/// Parsed lazily on every use: no tokens are cached between evaluations.
/// Tokens are trimmed and empty tokens are discarded, so `"Live, ,Edit"`
/// and `"Live,Edit"` carry the same modes.
#[derive(Debug, Clone, Copy)]
pub struct ModeList<'a> {
	raw: &'a str,
}

impl<'a> ModeList<'a> {
	/// Wraps a raw configuration string
	pub fn new(raw: &'a str) -> Self {
		Self { raw }
	}

	/// Whether the raw string holds no text at all, commas aside
	///
	/// A blank list takes part in the both-sides-blank short circuit; a
	/// list like `" , "` is not blank yet still yields no tokens.
	pub fn is_blank(&self) -> bool {
		self.raw.trim().is_empty()
	}

	/// The trimmed, non-empty mode names in the list
	///
	/// # Examples
	///
	/// ```
	/// use pagebuilder_tags::ModeList;
	///
	/// let list = ModeList::new(" Edit, LivePreview,, ");
	/// let tokens: Vec<&str> = list.tokens().collect();
	/// assert_eq!(tokens, ["Edit", "LivePreview"]);
	/// ```
	pub fn tokens(&self) -> impl Iterator<Item = &'a str> {
		self.raw
			.split(',')
			.map(str::trim)
			.filter(|token| !token.is_empty())
	}

	/// Whether any token equals the given mode name, ignoring ASCII case
	pub fn contains(&self, mode_name: &str) -> bool {
		self.tokens()
			.any(|token| token.eq_ignore_ascii_case(mode_name))
	}
}

/// Decides whether mode-filtered content must be suppressed
///
/// The decision, in order:
///
/// 1. Both lists blank: render, whatever the mode is.
/// 2. No current mode name: render.
/// 3. Any exclude token matches the current mode: suppress. Exclude wins
///    over include.
/// 4. Any include token matches the current mode: render.
/// 5. Include had tokens but none matched: suppress.
/// 6. Otherwise (exclude-only configuration, no match): render.
///
/// Matching is ordinal ASCII case-insensitive and token order never
/// matters. The function is pure: identical inputs always yield the
/// identical decision.
///
/// # Examples
///
/// ```
/// use pagebuilder_tags::mode_suppresses;
///
/// // Exclude wins even when include also matches.
/// assert!(mode_suppresses("Edit", "Edit", "Edit"));
///
/// // An include list without a match suppresses.
/// assert!(mode_suppresses("LivePreview", "", "Edit"));
///
/// // Blank configuration renders everywhere.
/// assert!(!mode_suppresses("", "", "Live"));
/// ```
pub fn mode_suppresses(include: &str, exclude: &str, current_mode_name: &str) -> bool {
	let include = ModeList::new(include);
	let exclude = ModeList::new(exclude);

	if include.is_blank() && exclude.is_blank() {
		return false;
	}
	if current_mode_name.is_empty() {
		return false;
	}
	if exclude.contains(current_mode_name) {
		return true;
	}

	let mut has_modes = false;
	for token in include.tokens() {
		has_modes = true;
		if token.eq_ignore_ascii_case(current_mode_name) {
			return false;
		}
	}
	has_modes
}

/// Conditionally renders children based on the current rendering mode
///
/// The helper drops its own wrapping tag on every evaluation; only the
/// children are conditionally kept. Configure with comma-separated mode
/// names on [`include`](Self::include) and [`exclude`](Self::exclude);
/// blank on both sides means render everywhere.
///
/// # Examples
///
/// ```
/// use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
/// use pagebuilder_tags::{PageBuilderModeTag, TagHelper, TagOutput};
///
/// let context = ModeContext::new(StaticModeSignals::for_mode(RenderMode::Edit));
/// let tag = PageBuilderModeTag::new(context).with_include("Live,Edit");
///
/// let mut output = TagOutput::new("page-builder-mode");
/// output.content = "<p>shown in Live and Edit</p>".to_string();
/// tag.process(&mut output);
///
/// assert_eq!(output.tag_name(), None);
/// assert_eq!(output.content, "<p>shown in Live and Edit</p>");
/// ```
#[derive(Debug, Clone)]
pub struct PageBuilderModeTag<S> {
	context: ModeContext<S>,
	/// Comma-separated mode names that allow rendering
	pub include: String,
	/// Comma-separated mode names that forbid rendering; wins over include
	pub exclude: String,
}

impl<S: ModeSignalSource> PageBuilderModeTag<S> {
	/// Creates an unconfigured tag over the given mode context
	pub fn new(context: ModeContext<S>) -> Self {
		Self {
			context,
			include: String::new(),
			exclude: String::new(),
		}
	}

	/// Sets the include list
	pub fn with_include(mut self, include: impl Into<String>) -> Self {
		self.include = include.into();
		self
	}

	/// Sets the exclude list
	pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
		self.exclude = exclude.into();
		self
	}
}

impl<S: ModeSignalSource> TagHelper for PageBuilderModeTag<S> {
	fn target(&self) -> &'static str {
		"page-builder-mode"
	}

	/// Runs before ordinary helpers so suppression precedes their work
	fn order(&self) -> i32 {
		-999
	}

	fn process(&self, output: &mut dyn RenderOutput) {
		output.drop_tag();

		let mode_name = self.context.mode_name();
		if mode_suppresses(&self.include, &self.exclude, mode_name) {
			tracing::debug!(
				mode = mode_name,
				include = %self.include,
				exclude = %self.exclude,
				"suppressing mode-filtered content"
			);
			output.suppress_children();
		}
	}
}
