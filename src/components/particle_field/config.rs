//! Field configuration with per-option defaults.
//!
//! Configs deserialize from the same camelCase keys a page would write in its
//! `<script id="particle-config">` block. Missing keys keep their default and
//! unknown keys are ignored, so a page only lists what it wants to change.
//! A key whose value does not fit its option (or is `null`) is skipped on its
//! own; the rest of the block still applies.

use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::FieldError;

/// Palette used in [`ColorType::Custom`] mode when none is supplied.
pub const DEFAULT_COLORS: [&str; 3] = ["#FF6B6B", "#4ECDC4", "#45B7D1"];

/// How particle colors are chosen at creation.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorType {
	/// Uniform pick from [`FieldConfig::colors`].
	Custom,
	/// Random hue per particle.
	#[default]
	#[serde(other)]
	Rainbow,
}

/// How connection lines are stroked.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
	/// Linear gradient between the two endpoint colors.
	#[default]
	Gradient,
	/// Solid color of the first endpoint.
	#[serde(other)]
	Flat,
}

/// Immutable configuration snapshot for one field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
	pub color_type: ColorType,
	/// CSS colors used in custom mode.
	pub colors: Vec<String>,
	pub line_type: LineType,
	/// Fixed for the lifetime of the field.
	#[serde(deserialize_with = "count_from_number")]
	pub particle_count: usize,
	/// Squared distance below which two points are connected.
	pub max_distance: f64,
	/// Side length of the square glyph.
	pub particle_size: f64,
	/// Stroke width of a connection between coincident points.
	pub line_width: f64,
	/// CSS opacity of the canvas.
	pub opacity: f64,
	/// CSS stacking order of the canvas.
	pub z_index: i32,
	/// Global speed multiplier.
	pub velocity: f64,
	/// Fractional spread of per-particle base speed.
	pub speed_variation: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			color_type: ColorType::Rainbow,
			colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
			line_type: LineType::Gradient,
			particle_count: 80,
			max_distance: 6000.0,
			particle_size: 2.0,
			line_width: 1.0,
			opacity: 0.6,
			z_index: -1,
			velocity: 0.8,
			speed_variation: 0.3,
		}
	}
}

impl FieldConfig {
	/// Denser, faster look used by the page bootstrap when it finds no config.
	pub fn page_preset() -> Self {
		Self {
			line_width: 2.0,
			particle_size: 3.0,
			max_distance: 8000.0,
			velocity: 1.2,
			opacity: 0.7,
			..Self::default()
		}
	}

	/// Parse a JSON config, overlaying provided keys onto the defaults.
	///
	/// Only malformed JSON or a non-object top level is an error.
	pub fn from_json(json: &str) -> Result<Self, FieldError> {
		let provided: Map<String, Value> = serde_json::from_str(json)?;
		let mut accepted = Map::new();
		for (key, value) in provided {
			if value.is_null() {
				continue;
			}
			let mut candidate = accepted.clone();
			candidate.insert(key.clone(), value);
			match serde_json::from_value::<Self>(Value::Object(candidate.clone())) {
				Ok(_) => accepted = candidate,
				Err(err) => warn!("particle-backdrop: ignoring config key {key:?}: {err}"),
			}
		}
		Ok(serde_json::from_value(Value::Object(accepted))?)
	}
}

/// Counts come from JS numbers; fractional values truncate and negatives clamp to 0.
fn count_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
	let n = f64::deserialize(deserializer)?;
	if !n.is_finite() {
		return Err(serde::de::Error::custom("particle count must be finite"));
	}
	Ok(n.max(0.0) as usize)
}
