//! Particle collection and its per-frame integrator.

use log::warn;

use super::config::{ColorType, FieldConfig};
use super::random::RandomSource;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// CSS color string.
	pub color: String,
}

/// Fixed-size set of particles living inside a `width × height` box.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
}

impl ParticleSystem {
	/// Seed `config.particle_count` particles uniformly over the box.
	///
	/// Each particle gets its own base speed in
	/// `velocity * (1 ± speed_variation / 2)` and a random direction.
	pub fn new(
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut impl RandomSource,
	) -> Self {
		let use_palette = config.color_type == ColorType::Custom && !config.colors.is_empty();
		if config.color_type == ColorType::Custom && config.colors.is_empty() {
			warn!("particle-backdrop: custom color type with empty palette, using rainbow hues");
		}

		let particles = (0..config.particle_count)
			.map(|id| {
				let base_speed =
					config.velocity * (1.0 + config.speed_variation * (rng.next_f64() - 0.5));
				let x = rng.next_f64() * width;
				let y = rng.next_f64() * height;
				let vx = (rng.next_f64() - 0.5) * base_speed;
				let vy = (rng.next_f64() - 0.5) * base_speed;
				let color = if use_palette {
					pick_color(&config.colors, &mut *rng)
				} else {
					rainbow_color(&mut *rng)
				};
				Particle {
					id,
					x,
					y,
					vx,
					vy,
					color,
				}
			})
			.collect();

		Self { particles }
	}

	/// Advance one frame: integrate, reflect off the edges, clamp into bounds.
	///
	/// `velocity` multiplies a displacement whose base speed already carries
	/// it, so the effective speed grows with `velocity²`.
	pub fn update(&mut self, velocity: f64, width: f64, height: f64) {
		for p in &mut self.particles {
			p.x += p.vx * velocity;
			p.y += p.vy * velocity;

			if p.x < 0.0 || p.x > width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > height {
				p.vy = -p.vy;
			}

			p.x = p.x.clamp(0.0, width);
			p.y = p.y.clamp(0.0, height);
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

fn rainbow_color(rng: &mut impl RandomSource) -> String {
	format!("hsl({}, 70%, 60%)", rng.next_f64() * 360.0)
}

fn pick_color(palette: &[String], rng: &mut impl RandomSource) -> String {
	let idx = ((rng.next_f64() * palette.len() as f64) as usize).min(palette.len() - 1);
	palette[idx].clone()
}
