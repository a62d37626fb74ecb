//! Drawing surface abstraction and its `<canvas>` implementation.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Stroke paint for a connection line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke<'a> {
	Solid(&'a str),
	/// Linear gradient running from the segment start to its end.
	Gradient { from: &'a str, to: &'a str },
}

/// The 2D operations a frame needs.
pub trait Surface {
	/// Current draw-area size in pixels.
	fn size(&self) -> (f64, f64);
	fn set_size(&mut self, width: u32, height: u32);
	fn clear(&mut self);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke<'_>, width: f64);
	/// Fill an axis-aligned square of side `side` centered on `center`.
	fn fill_square(&mut self, center: (f64, f64), side: f64, color: &str);
}

/// A [`Surface`] backed by an HTML canvas and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w, h);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: Stroke<'_>, width: f64) {
		match stroke {
			Stroke::Solid(color) => self.ctx.set_stroke_style_str(color),
			Stroke::Gradient { from: c0, to: c1 } => {
				let gradient = self.ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
				// Unparseable colors throw; the stop is skipped like the canvas would.
				let _ = gradient.add_color_stop(0.0, c0);
				let _ = gradient.add_color_stop(1.0, c1);
				#[allow(deprecated)]
				self.ctx.set_stroke_style(&gradient);
			}
		}
		self.ctx.set_line_width(width);

		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}

	fn fill_square(&mut self, center: (f64, f64), side: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx
			.fill_rect(center.0 - side / 2.0, center.1 - side / 2.0, side, side);
	}
}
