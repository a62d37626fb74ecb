//! Frame rendering for the particle field.
//!
//! Two passes, in z-order:
//! 1. Connections between every close pair of endpoints (particles + pointer)
//! 2. Particle glyphs on top

use super::config::LineType;
use super::state::{Endpoint, FieldState};
use super::surface::{Stroke, Surface};

/// Squared distance between two endpoints. No square root on the hot path.
fn distance_sq(a: &Endpoint<'_>, b: &Endpoint<'_>) -> f64 {
	let (dx, dy) = (a.x - b.x, a.y - b.y);
	dx * dx + dy * dy
}

/// Stroke width for a pair at `dist_sq`: full at 0, nothing at `max_distance`.
pub fn stroke_width(dist_sq: f64, max_distance: f64, line_width: f64) -> f64 {
	line_width * (1.0 - dist_sq / max_distance)
}

/// Calls `f(a, b, dist_sq)` for every unordered pair `i < j` closer than `max_distance`.
pub fn for_each_connection<'a>(
	points: &[Endpoint<'a>],
	max_distance: f64,
	mut f: impl FnMut(&Endpoint<'a>, &Endpoint<'a>, f64),
) {
	for (i, a) in points.iter().enumerate() {
		for b in &points[i + 1..] {
			let dist_sq = distance_sq(a, b);
			if dist_sq < max_distance {
				f(a, b, dist_sq);
			}
		}
	}
}

/// Clears the surface and draws one frame of `state`.
pub fn render(state: &FieldState, surface: &mut impl Surface) {
	surface.clear();
	draw_connections(state, surface);
	draw_particles(state, surface);
}

fn draw_connections(state: &FieldState, surface: &mut impl Surface) {
	let config = &state.config;
	let points = state.endpoints();

	for_each_connection(&points, config.max_distance, |a, b, dist_sq| {
		// The pointer sorts last, so at most one side is colorless.
		let Some(start) = a.color.or(b.color) else {
			return;
		};
		let stroke = match config.line_type {
			LineType::Gradient => Stroke::Gradient {
				from: start,
				to: b.color.unwrap_or(start),
			},
			LineType::Flat => Stroke::Solid(start),
		};
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			stroke,
			stroke_width(dist_sq, config.max_distance, config.line_width),
		);
	});
}

fn draw_particles(state: &FieldState, surface: &mut impl Surface) {
	let size = state.config.particle_size;
	for p in &state.particles.particles {
		surface.fill_square((p.x, p.y), size, &p.color);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::FieldConfig;
	use crate::components::particle_field::particles::{Particle, ParticleSystem};
	use crate::components::particle_field::state::PointerState;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Line {
			from: (f64, f64),
			to: (f64, f64),
			stroke: (String, String, bool),
			width: f64,
		},
		Square {
			center: (f64, f64),
			side: f64,
			color: String,
		},
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
	}

	impl Recorder {
		fn lines(&self) -> Vec<&Op> {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Line { .. }))
				.collect()
		}
	}

	impl Surface for Recorder {
		fn size(&self) -> (f64, f64) {
			(0.0, 0.0)
		}

		fn set_size(&mut self, _width: u32, _height: u32) {}

		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke<'_>, width: f64) {
			let stroke = match stroke {
				Stroke::Solid(c) => (c.to_string(), c.to_string(), false),
				Stroke::Gradient { from, to } => (from.to_string(), to.to_string(), true),
			};
			self.ops.push(Op::Line {
				from,
				to,
				stroke,
				width,
			});
		}

		fn fill_square(&mut self, center: (f64, f64), side: f64, color: &str) {
			self.ops.push(Op::Square {
				center,
				side,
				color: color.to_string(),
			});
		}
	}

	fn particle(id: usize, x: f64, y: f64, color: &str) -> Particle {
		Particle {
			id,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			color: color.to_string(),
		}
	}

	fn field(particles: Vec<Particle>, config: FieldConfig) -> FieldState {
		FieldState {
			config,
			particles: ParticleSystem { particles },
			pointer: PointerState::default(),
			width: 100.0,
			height: 100.0,
		}
	}

	#[test]
	fn stroke_width_endpoints_and_monotonic() {
		assert_eq!(stroke_width(0.0, 6000.0, 2.0), 2.0);
		assert_eq!(stroke_width(6000.0, 6000.0, 2.0), 0.0);
		let mut prev = f64::INFINITY;
		for step in 0..=60 {
			let w = stroke_width(step as f64 * 100.0, 6000.0, 2.0);
			assert!(w < prev, "width not decreasing at step {step}");
			prev = w;
		}
	}

	#[test]
	fn connection_predicate_is_symmetric() {
		let points = [
			Endpoint { x: 0.0, y: 0.0, color: Some("a") },
			Endpoint { x: 3.0, y: 4.0, color: Some("b") },
			Endpoint { x: 30.0, y: 40.0, color: Some("c") },
		];
		let reversed: Vec<_> = points.iter().rev().copied().collect();

		let mut forward = Vec::new();
		for_each_connection(&points, 26.0, |a, b, d| {
			let mut pair = [a.color.unwrap(), b.color.unwrap()];
			pair.sort();
			forward.push((pair, d));
		});
		let mut backward = Vec::new();
		for_each_connection(&reversed, 26.0, |a, b, d| {
			let mut pair = [a.color.unwrap(), b.color.unwrap()];
			pair.sort();
			backward.push((pair, d));
		});

		assert_eq!(forward, vec![(["a", "b"], 25.0)]);
		assert_eq!(backward, forward);
	}

	#[test]
	fn threshold_is_exclusive() {
		let points = [
			Endpoint { x: 0.0, y: 0.0, color: Some("a") },
			Endpoint { x: 3.0, y: 4.0, color: Some("b") },
		];
		let mut count = 0;
		for_each_connection(&points, 25.0, |_, _, _| count += 1);
		assert_eq!(count, 0);
	}

	#[test]
	fn gradient_mode_spans_endpoint_colors() {
		let state = field(
			vec![particle(0, 0.0, 0.0, "red"), particle(1, 10.0, 0.0, "blue")],
			FieldConfig::default(),
		);
		let mut rec = Recorder::default();
		render(&state, &mut rec);

		assert_eq!(
			rec.lines(),
			vec![&Op::Line {
				from: (0.0, 0.0),
				to: (10.0, 0.0),
				stroke: ("red".into(), "blue".into(), true),
				width: 1.0 - 100.0 / 6000.0,
			}]
		);
	}

	#[test]
	fn flat_mode_uses_first_endpoint_color() {
		let config = FieldConfig {
			line_type: LineType::Flat,
			..FieldConfig::default()
		};
		let state = field(
			vec![particle(0, 0.0, 0.0, "red"), particle(1, 10.0, 0.0, "blue")],
			config,
		);
		let mut rec = Recorder::default();
		render(&state, &mut rec);

		let lines = rec.lines();
		let Op::Line { stroke, .. } = lines[0] else {
			unreachable!()
		};
		assert_eq!(stroke, &("red".to_string(), "red".to_string(), false));
	}

	#[test]
	fn pointer_connections_take_the_particle_color() {
		let mut state = field(vec![particle(0, 0.0, 0.0, "red")], FieldConfig::default());
		state.pointer_move(5.0, 5.0);

		let mut rec = Recorder::default();
		render(&state, &mut rec);
		let lines = rec.lines();
		assert_eq!(lines.len(), 1);
		let Op::Line { to, stroke, .. } = lines[0] else {
			unreachable!()
		};
		assert_eq!(*to, (5.0, 5.0));
		assert_eq!(stroke, &("red".to_string(), "red".to_string(), true));
	}

	#[test]
	fn no_pointer_lines_after_leave() {
		let mut state = field(vec![particle(0, 0.0, 0.0, "red")], FieldConfig::default());
		state.pointer_move(5.0, 5.0);
		state.pointer_leave();

		let mut rec = Recorder::default();
		render(&state, &mut rec);
		assert!(rec.lines().is_empty());
	}

	#[test]
	fn frame_clears_then_lines_then_glyphs() {
		let config = FieldConfig {
			particle_size: 4.0,
			..FieldConfig::default()
		};
		let state = field(
			vec![particle(0, 1.0, 1.0, "red"), particle(1, 2.0, 2.0, "blue")],
			config,
		);
		let mut rec = Recorder::default();
		render(&state, &mut rec);

		assert_eq!(rec.ops.len(), 4);
		assert_eq!(rec.ops[0], Op::Clear);
		assert!(matches!(rec.ops[1], Op::Line { .. }));
		assert_eq!(
			rec.ops[2],
			Op::Square {
				center: (1.0, 1.0),
				side: 4.0,
				color: "red".into()
			}
		);
		assert_eq!(
			rec.ops[3],
			Op::Square {
				center: (2.0, 2.0),
				side: 4.0,
				color: "blue".into()
			}
		);
	}
}
