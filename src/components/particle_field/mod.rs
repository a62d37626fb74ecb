//! Animated particle field rendered on a canvas behind page content.
//!
//! Renders drifting particles with:
//! - Elastic bounces off the canvas edges
//! - Lines between every pair closer than a squared-distance threshold
//! - Lines to the mouse pointer while it is over the container
//! - Debounced resizing to the container's client box
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{FieldConfig, ParticleBackground};
//!
//! let config = FieldConfig { particle_count: 120, ..FieldConfig::default() };
//!
//! view! {
//!     <ParticleBackground config=config>
//!         <main>"Page content"</main>
//!     </ParticleBackground>
//! }
//! ```

mod component;
mod config;
mod context;
mod error;
mod field;
mod particles;
mod random;
mod render;
mod size_watcher;
mod state;
mod surface;

pub use component::ParticleBackground;
pub use config::{ColorType, DEFAULT_COLORS, FieldConfig, LineType};
pub use context::FieldContext;
pub use error::FieldError;
pub use field::ParticleField;
pub use particles::{Particle, ParticleSystem};
pub use random::{BrowserRandom, RandomSource};
pub use render::{for_each_connection, render, stroke_width};
pub use size_watcher::{DEFAULT_DEBOUNCE_MS, Debounce, SizeWatcher};
pub use state::{Endpoint, FieldState, PointerState};
pub use surface::{CanvasSurface, Stroke, Surface};
