//! Simulation state paired with the surface it draws on.
//!
//! Every host callback (animation frame, debounced resize, mouse move and
//! leave) lands on one of these methods. Once [`FieldContext::teardown`] has
//! run, all of them are ignored.

use super::render;
use super::state::FieldState;
use super::surface::Surface;

pub struct FieldContext<S: Surface> {
	state: FieldState,
	surface: S,
	torn_down: bool,
}

impl<S: Surface> FieldContext<S> {
	pub fn new(state: FieldState, surface: S) -> Self {
		Self {
			state,
			surface,
			torn_down: false,
		}
	}

	pub fn state(&self) -> &FieldState {
		&self.state
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Resize the draw area and the particle bounds together.
	pub fn resize(&mut self, width: u32, height: u32) {
		if self.torn_down {
			return;
		}
		self.surface.set_size(width, height);
		self.state.resize(width as f64, height as f64);
	}

	/// One animation frame: advance the particles, then draw them.
	pub fn frame(&mut self) {
		if self.torn_down {
			return;
		}
		self.state.tick();
		render::render(&self.state, &mut self.surface);
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.torn_down {
			self.state.pointer_move(x, y);
		}
	}

	pub fn pointer_leave(&mut self) {
		if !self.torn_down {
			self.state.pointer_leave();
		}
	}

	/// Mark the context dead. True only on the first call.
	pub fn teardown(&mut self) -> bool {
		!std::mem::replace(&mut self.torn_down, true)
	}

	pub fn is_torn_down(&self) -> bool {
		self.torn_down
	}
}
