//! Tera template functions
//!
//! The tag decisions exposed inside Tera templates, for sites that gate
//! fragments with `{% if %}` blocks instead of host-side tag helpers.
//! Each function closes over the per-request context it needs, so
//! templates never see host signals directly.

use std::collections::HashMap;

use tera::{Function, Result as TeraResult, Tera, Value};

use pagebuilder_context::{ModeContext, ModeSignalSource};

use crate::data::{PageDataLookup, data_context_suppresses};
use crate::mode::mode_suppresses;

fn string_arg<'a>(
	args: &'a HashMap<String, Value>,
	name: &str,
	function: &str,
) -> TeraResult<&'a str> {
	match args.get(name) {
		None => Ok(""),
		Some(value) => value
			.as_str()
			.ok_or_else(|| tera::Error::msg(format!("{} requires a string '{}'", function, name))),
	}
}

/// Mode-filtered rendering test
///
/// Returns `true` when the fragment should render in the current mode,
/// with the same include/exclude semantics as the mode tag helper. Both
/// arguments are optional; omitted lists are blank.
///
/// # Example
/// ```tera
/// {% if pagebuilder_mode(include="Edit") %}
///   <div class="editor-hints">...</div>
/// {% endif %}
/// ```
pub fn mode_function<S>(context: ModeContext<S>) -> impl Function
where
	S: ModeSignalSource + 'static,
{
	move |args: &HashMap<String, Value>| -> TeraResult<Value> {
		let include = string_arg(args, "include", "pagebuilder_mode")?;
		let exclude = string_arg(args, "exclude", "pagebuilder_mode")?;
		let renders = !mode_suppresses(include, exclude, context.mode_name());
		Ok(Value::Bool(renders))
	}
}

/// Current mode name
///
/// # Example
/// ```tera
/// <body data-mode="{{ pagebuilder_mode_name() }}">
/// ```
/// Output: `<body data-mode="Edit">`
pub fn mode_name_function<S>(context: ModeContext<S>) -> impl Function
where
	S: ModeSignalSource + 'static,
{
	move |_args: &HashMap<String, Value>| -> TeraResult<Value> {
		Ok(Value::String(context.mode_name().to_string()))
	}
}

/// Data-context presence test
///
/// Returns `true` when data-context presence matches the `initialized`
/// argument, which defaults to `true`.
///
/// # Example
/// ```tera
/// {% if pagebuilder_data(initialized=false) %}
///   <p>No page data was resolved for this request.</p>
/// {% endif %}
/// ```
pub fn data_function<L>(lookup: L) -> impl Function
where
	L: PageDataLookup + 'static,
{
	move |args: &HashMap<String, Value>| -> TeraResult<Value> {
		let expected = match args.get("initialized") {
			None => true,
			Some(value) => value.as_bool().ok_or_else(|| {
				tera::Error::msg("pagebuilder_data requires a boolean 'initialized'")
			})?,
		};
		let present = lookup.try_retrieve().is_some();
		Ok(Value::Bool(!data_context_suppresses(present, expected)))
	}
}

/// Registers all page-builder functions on a Tera instance
///
/// Registers `pagebuilder_mode`, `pagebuilder_mode_name`, and
/// `pagebuilder_data` under those names. Call once per request-scoped
/// Tera configuration, with that request's signals and lookup.
pub fn register_functions<S, L>(tera: &mut Tera, signals: S, lookup: L)
where
	S: ModeSignalSource + Clone + 'static,
	L: PageDataLookup + 'static,
{
	tera.register_function("pagebuilder_mode", mode_function(ModeContext::new(signals.clone())));
	tera.register_function("pagebuilder_mode_name", mode_name_function(ModeContext::new(signals)));
	tera.register_function("pagebuilder_data", data_function(lookup));
}
