//! particle-backdrop: animated particle field behind web page content.
//!
//! This crate provides a WASM-based canvas effect: drifting particles joined
//! by lines when close to each other or to the mouse pointer, with
//! configurable colors, speed and density.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	ColorType, FieldConfig, FieldError, FieldState, LineType, ParticleBackground, ParticleField,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Read the page's field config from a script element with id="particle-config".
///
/// Falls back to [`FieldConfig::page_preset`] when the element is missing or
/// its JSON does not parse.
pub fn load_field_config() -> FieldConfig {
	let Some(json_text) = config_script_text() else {
		return FieldConfig::page_preset();
	};

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-backdrop: loaded config with {} particles",
				config.particle_count
			);
			config
		}
		Err(e) => {
			warn!("particle-backdrop: {}, using page preset", e);
			FieldConfig::page_preset()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads the field config from the DOM and renders the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Particle Backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config>
			<div class="backdrop-overlay">
				<h1>"Particle Backdrop"</h1>
				<p class="subtitle">"Move the mouse to pull lines toward the pointer."</p>
			</div>
		</ParticleBackground>
	}
}
