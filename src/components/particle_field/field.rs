//! Browser host for a particle field.
//!
//! Creates the canvas inside a container element and routes page events into
//! a [`FieldContext`]: a `requestAnimationFrame` loop drives frames, a
//! [`SizeWatcher`] resizes the canvas, and mouse listeners on the container
//! feed the pointer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::config::FieldConfig;
use super::context::FieldContext;
use super::error::FieldError;
use super::random::BrowserRandom;
use super::size_watcher::SizeWatcher;
use super::state::FieldState;
use super::surface::CanvasSurface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running particle field attached to one container element.
///
/// The field runs until [`ParticleField::destroy`] is called or the value is
/// dropped.
pub struct ParticleField {
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	context: Rc<RefCell<FieldContext<CanvasSurface>>>,
	watcher: SizeWatcher,
	animate: FrameCallback,
	frame_handle: Rc<Cell<Option<i32>>>,
	on_mousemove: Closure<dyn FnMut(MouseEvent)>,
	on_mouseleave: Closure<dyn FnMut(MouseEvent)>,
}

impl ParticleField {
	/// Attach a new field to `container` and start animating.
	pub fn new(container: &HtmlElement, config: FieldConfig) -> Result<Self, FieldError> {
		let window = web_sys::window().ok_or(FieldError::NoWindow)?;
		let document = window.document().ok_or(FieldError::NoDocument)?;

		let canvas: HtmlCanvasElement = document
			.create_element("canvas")?
			.dyn_into()
			.map_err(|_| FieldError::NotACanvas)?;
		let style = canvas.style();
		style.set_property("position", "absolute")?;
		style.set_property("top", "0")?;
		style.set_property("left", "0")?;
		style.set_property("z-index", &config.z_index.to_string())?;
		style.set_property("opacity", &config.opacity.to_string())?;
		container.append_child(&canvas)?;

		let (w, h) = client_size(container);
		canvas.set_width(w);
		canvas.set_height(h);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(FieldError::ContextUnavailable)?
			.dyn_into()
			.map_err(|_| FieldError::ContextUnavailable)?;

		info!(
			"particle-backdrop: {} particles on {}x{} canvas",
			config.particle_count, w, h
		);
		let state = FieldState::new(config, w as f64, h as f64, &mut BrowserRandom);
		let context = Rc::new(RefCell::new(FieldContext::new(
			state,
			CanvasSurface::new(canvas.clone(), ctx),
		)));

		let mut watcher = SizeWatcher::new()?;
		let context_resize = context.clone();
		watcher.observe(container, move |el: &Element| {
			let (nw, nh) = client_size(el);
			debug!("particle-backdrop: resized to {}x{}", nw, nh);
			context_resize.borrow_mut().resize(nw, nh);
		})?;

		let (context_mm, container_mm) = (context.clone(), container.clone());
		let on_mousemove: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let rect = container_mm.get_bounding_client_rect();
			context_mm.borrow_mut().pointer_move(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		});
		let context_ml = context.clone();
		let on_mouseleave: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
			context_ml.borrow_mut().pointer_leave();
		});
		container
			.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref())?;
		container.add_event_listener_with_callback(
			"mouseleave",
			on_mouseleave.as_ref().unchecked_ref(),
		)?;

		let animate: FrameCallback = Rc::new(RefCell::new(None));
		let frame_handle = Rc::new(Cell::new(None));

		let (context_anim, animate_inner, handle_inner) =
			(context.clone(), animate.clone(), frame_handle.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			{
				let mut c = context_anim.borrow_mut();
				if c.is_torn_down() {
					return;
				}
				c.frame();
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				handle_inner.set(
					win.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_handle.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(Self {
			container: container.clone(),
			canvas,
			context,
			watcher,
			animate,
			frame_handle,
			on_mousemove,
			on_mouseleave,
		})
	}

	/// Stop animating, drop all subscriptions and remove the canvas.
	///
	/// Calling this more than once is a no-op.
	pub fn destroy(&mut self) {
		if !self.context.borrow_mut().teardown() {
			return;
		}

		if let (Some(handle), Some(window)) = (self.frame_handle.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(handle);
		}
		// Breaks the closure's self-reference cycle.
		self.animate.borrow_mut().take();

		self.watcher.unobserve(&self.container);
		let _ = self.container.remove_event_listener_with_callback(
			"mousemove",
			self.on_mousemove.as_ref().unchecked_ref(),
		);
		let _ = self.container.remove_event_listener_with_callback(
			"mouseleave",
			self.on_mouseleave.as_ref().unchecked_ref(),
		);
		self.canvas.remove();

		info!("particle-backdrop: field destroyed");
	}
}

impl Drop for ParticleField {
	fn drop(&mut self) {
		self.destroy();
	}
}

fn client_size(el: &Element) -> (u32, u32) {
	(el.client_width().max(0) as u32, el.client_height().max(0) as u32)
}
