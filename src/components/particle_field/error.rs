//! Error types for constructing a particle field.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while setting up a field. Once running, a field never fails.
#[derive(Debug, Error)]
pub enum FieldError {
	/// No global `window` (not running in a browser main thread).
	#[error("no global window available")]
	NoWindow,

	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,

	/// The created element could not be cast to a canvas.
	#[error("created element is not a canvas")]
	NotACanvas,

	/// The browser refused to hand out a 2D rendering context.
	#[error("2d rendering context unavailable")]
	ContextUnavailable,

	/// A configuration document failed to parse.
	#[error("invalid field config: {0}")]
	Config(#[from] serde_json::Error),

	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for FieldError {
	fn from(value: JsValue) -> Self {
		FieldError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
