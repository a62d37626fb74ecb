//! Host-independent field state and the operations the host drives.
//!
//! The browser host calls [`FieldState::tick`] once per animation frame and
//! forwards resize and mouse events to [`FieldState::resize`],
//! [`FieldState::pointer_move`] and [`FieldState::pointer_leave`]. Nothing in
//! here touches the DOM, so a field can be stepped and inspected natively.

use super::config::FieldConfig;
use super::particles::ParticleSystem;
use super::random::RandomSource;

/// Last pointer position inside the container, if the pointer is over it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	position: Option<(f64, f64)>,
}

impl PointerState {
	pub fn set(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	pub fn clear(&mut self) {
		self.position = None;
	}

	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}
}

/// One point taking part in the connection pass.
///
/// The pointer joins as an endpoint without a color of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoint<'a> {
	pub x: f64,
	pub y: f64,
	pub color: Option<&'a str>,
}

/// Particles, pointer and bounds of one field.
pub struct FieldState {
	pub config: FieldConfig,
	pub particles: ParticleSystem,
	pub pointer: PointerState,
	pub width: f64,
	pub height: f64,
}

impl FieldState {
	pub fn new(config: FieldConfig, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let particles = ParticleSystem::new(&config, width, height, rng);
		Self {
			config,
			particles,
			pointer: PointerState::default(),
			width,
			height,
		}
	}

	/// Advance every particle by one frame.
	pub fn tick(&mut self) {
		self.particles
			.update(self.config.velocity, self.width, self.height);
	}

	/// Adopt new bounds. Particles are left in place until the next tick clamps them.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.pointer.set(x, y);
	}

	pub fn pointer_leave(&mut self) {
		self.pointer.clear();
	}

	/// All particles in index order, then the pointer when present.
	pub fn endpoints(&self) -> Vec<Endpoint<'_>> {
		let mut points: Vec<Endpoint<'_>> = self
			.particles
			.particles
			.iter()
			.map(|p| Endpoint {
				x: p.x,
				y: p.y,
				color: Some(p.color.as_str()),
			})
			.collect();
		if let Some((x, y)) = self.pointer.position() {
			points.push(Endpoint { x, y, color: None });
		}
		points
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn state(count: usize, w: f64, h: f64) -> FieldState {
		let config = FieldConfig {
			particle_count: count,
			..FieldConfig::default()
		};
		FieldState::new(config, w, h, &mut SmallRng::seed_from_u64(11))
	}

	#[test]
	fn pointer_is_appended_last_and_cleared_on_leave() {
		let mut s = state(4, 200.0, 200.0);
		assert_eq!(s.endpoints().len(), 4);

		s.pointer_move(10.0, 20.0);
		let points = s.endpoints();
		assert_eq!(points.len(), 5);
		assert_eq!(
			points[4],
			Endpoint {
				x: 10.0,
				y: 20.0,
				color: None
			}
		);

		s.pointer_leave();
		assert_eq!(s.pointer.position(), None);
		assert!(s.endpoints().iter().all(|p| p.color.is_some()));
	}

	#[test]
	fn pointer_is_never_integrated() {
		let mut s = state(3, 200.0, 200.0);
		s.pointer_move(5.0, 6.0);
		for _ in 0..10 {
			s.tick();
		}
		assert_eq!(s.pointer.position(), Some((5.0, 6.0)));
	}

	#[test]
	fn resize_defers_clamping_to_next_tick() {
		let mut s = state(50, 1000.0, 1000.0);
		s.resize(100.0, 50.0);
		assert_eq!((s.width, s.height), (100.0, 50.0));
		assert!(
			s.particles
				.particles
				.iter()
				.any(|p| p.x > 100.0 || p.y > 50.0),
			"seeded layout should leave someone outside the shrunken box"
		);

		s.tick();
		for p in &s.particles.particles {
			assert!(p.x <= 100.0 && p.y <= 50.0, "({}, {}) not clamped", p.x, p.y);
		}
	}

	#[test]
	fn particle_count_survives_resize_and_ticks() {
		let mut s = state(9, 300.0, 300.0);
		s.resize(10.0, 10.0);
		s.tick();
		s.resize(0.0, 0.0);
		s.tick();
		assert_eq!(s.particles.len(), 9);
	}
}
