//! Mode Tag Decision Table Tests
//!
//! Systematic tables for the include/exclude mode filter as applied by
//! the tag helper: matching include lists render, exclude always wins,
//! blank configuration renders everywhere, and the wrapping tag is
//! dropped whatever the decision.

use mockall::mock;
use pagebuilder_context::{ModeContext, RenderMode, StaticModeSignals};
use pagebuilder_tags::{PageBuilderModeTag, RenderOutput, TagHelper, TagOutput};
use rstest::*;

mock! {
	Output {}

	impl RenderOutput for Output {
		fn drop_tag(&mut self);
		fn suppress_children(&mut self);
	}
}

fn mode_tag(include: &str, exclude: &str, mode: RenderMode) -> PageBuilderModeTag<StaticModeSignals> {
	let context = ModeContext::new(StaticModeSignals::for_mode(mode));
	PageBuilderModeTag::new(context)
		.with_include(include)
		.with_exclude(exclude)
}

fn filled_output() -> TagOutput {
	let mut output = TagOutput::new("page-builder-mode");
	output.pre_element = "<!-- widget zone -->".to_string();
	output.pre_content = "<section>".to_string();
	output.content = "<p>Hello</p>".to_string();
	output.post_content = "</section>".to_string();
	output.post_element = "<!-- /widget zone -->".to_string();
	output
}

fn assert_rendered(output: &TagOutput, desc: &str) {
	assert_eq!(output.tag_name(), None, "tag must drop for: {}", desc);
	assert!(!output.is_content_modified(), "content must survive for: {}", desc);
	assert_eq!(output.content, "<p>Hello</p>", "content changed for: {}", desc);
}

fn assert_suppressed(output: &TagOutput, desc: &str) {
	assert_eq!(output.tag_name(), None, "tag must drop for: {}", desc);
	assert!(output.is_content_modified(), "content must be suppressed for: {}", desc);
	assert!(output.is_empty(), "segments must empty for: {}", desc);
}

// =============================================================================
// Include List Decision Table
// =============================================================================

#[rstest]
#[case("Live", RenderMode::Live, "Single mode, exact match")]
#[case("LivePreview", RenderMode::LivePreview, "Single mode, live-preview")]
#[case("Edit", RenderMode::Edit, "Single mode, edit")]
#[case("Live,Edit", RenderMode::Live, "Two modes, first matches")]
#[case("Live,Edit", RenderMode::Edit, "Two modes, second matches")]
#[case("Edit, LivePreview", RenderMode::LivePreview, "Spaces around tokens")]
#[case("edit", RenderMode::Edit, "Lowercase include token")]
#[case("LIVE", RenderMode::Live, "Uppercase include token")]
fn test_matching_include_renders(
	#[case] include: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, "", mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_rendered(&output, desc);
}

#[rstest]
#[case("LivePreview", RenderMode::Edit, "Single non-matching mode")]
#[case("Live, LivePreview", RenderMode::Edit, "No token matches edit")]
#[case("LivePreview,Live", RenderMode::Edit, "Order does not rescue a miss")]
fn test_unmatched_include_suppresses(
	#[case] include: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, "", mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_suppressed(&output, desc);
}

// =============================================================================
// Blank Configuration
// =============================================================================

#[rstest]
#[case("", RenderMode::Live, "Empty include, live")]
#[case("", RenderMode::LivePreview, "Empty include, live-preview")]
#[case("", RenderMode::Edit, "Empty include, edit")]
#[case("   ", RenderMode::Live, "Whitespace-only include")]
fn test_blank_configuration_renders_everywhere(
	#[case] include: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, "", mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_rendered(&output, desc);
}

// =============================================================================
// Exclude List Decision Table
// =============================================================================

#[rstest]
#[case("Edit", "ABC", RenderMode::Edit, "Unknown exclude token is inert")]
#[case("Live", "DEF", RenderMode::Live, "Unknown exclude beside matching include")]
#[case("LivePreview", "1, 3, 4", RenderMode::LivePreview, "Numeric junk tokens are inert")]
#[case("Edit,LivePreview", "Live", RenderMode::LivePreview, "Exclude names a different mode")]
fn test_unmatched_exclude_keeps_render(
	#[case] include: &str,
	#[case] exclude: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, exclude, mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_rendered(&output, desc);
}

#[rstest]
#[case("Edit", "Edit", RenderMode::Edit, "Exclude wins over matching include")]
#[case("", "Edit,LivePreview", RenderMode::Edit, "Exclude-only configuration")]
#[case("LivePreview,Live", "Edit", RenderMode::Edit, "Exclude match plus include miss")]
#[case("Live,Edit", "edit", RenderMode::Edit, "Lowercase exclude token still wins")]
fn test_matching_exclude_suppresses(
	#[case] include: &str,
	#[case] exclude: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, exclude, mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_suppressed(&output, desc);
}

#[rstest]
#[case("", "Edit", RenderMode::Live, "Exclude names another mode")]
#[case("", "Edit, LivePreview", RenderMode::Live, "Exclude list without live")]
fn test_exclude_only_renders_other_modes(
	#[case] include: &str,
	#[case] exclude: &str,
	#[case] mode: RenderMode,
	#[case] desc: &str,
) {
	let tag = mode_tag(include, exclude, mode);
	let mut output = filled_output();

	tag.process(&mut output);

	assert_rendered(&output, desc);
}

// =============================================================================
// Output Interaction
// =============================================================================

#[test]
fn test_rendering_still_drops_the_wrapping_tag() {
	let tag = mode_tag("Live", "", RenderMode::Live);

	let mut output = MockOutput::new();
	output.expect_drop_tag().times(1).return_const(());
	output.expect_suppress_children().never();

	tag.process(&mut output);
}

#[test]
fn test_suppression_drops_tag_and_children() {
	let tag = mode_tag("LivePreview", "", RenderMode::Edit);

	let mut output = MockOutput::new();
	output.expect_drop_tag().times(1).return_const(());
	output.expect_suppress_children().times(1).return_const(());

	tag.process(&mut output);
}

#[test]
fn test_helper_metadata() {
	let tag = mode_tag("", "", RenderMode::Live);

	assert_eq!(tag.target(), "page-builder-mode");
	assert_eq!(tag.order(), -999, "mode filtering must run before ordinary helpers");
}

#[test]
fn test_process_is_idempotent_for_identical_inputs() {
	let tag = mode_tag("Edit", "", RenderMode::Edit);

	for _ in 0..3 {
		let mut output = filled_output();
		tag.process(&mut output);
		assert_rendered(&output, "repeated evaluation");
	}
}
