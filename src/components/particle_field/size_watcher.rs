//! Debounced element size observation.
//!
//! Each observed element gets its own `ResizeObserver`. Observer callbacks
//! restart a `setTimeout`; only when the element has been quiet for the
//! debounce window does the user callback run.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver, Window};

use super::error::FieldError;

/// Default quiet period before a resize is reported, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: i32 = 30;

/// Timer bookkeeping for one debounced subscription.
///
/// Holds the handle of the pending timeout (if any) so a new trigger can
/// cancel it, and a disposed flag so a timeout that was already queued when
/// the subscription ended never reaches the callback.
#[derive(Debug, Default)]
pub struct Debounce {
	pending: Option<i32>,
	disposed: bool,
}

impl Debounce {
	/// Record a freshly scheduled timeout. Returns the superseded handle to cancel.
	pub fn rearm(&mut self, handle: i32) -> Option<i32> {
		self.pending.replace(handle)
	}

	/// Called when a timeout fires. True if the callback should run.
	pub fn fire(&mut self) -> bool {
		self.pending.take().is_some() && !self.disposed
	}

	/// End the subscription. Returns the pending handle to cancel, once.
	pub fn dispose(&mut self) -> Option<i32> {
		self.disposed = true;
		self.pending.take()
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed
	}
}

struct Sensor {
	element: Element,
	observer: ResizeObserver,
	debounce: Rc<RefCell<Debounce>>,
	_on_resize: Closure<dyn FnMut(js_sys::Array)>,
	_on_quiet: Rc<Closure<dyn FnMut()>>,
}

impl Sensor {
	fn release(self, window: &Window) {
		self.observer.disconnect();
		if let Some(handle) = self.debounce.borrow_mut().dispose() {
			window.clear_timeout_with_handle(handle);
		}
	}
}

/// Watches elements for box-size changes and reports them after a quiet period.
pub struct SizeWatcher {
	window: Window,
	wait_ms: i32,
	sensors: Vec<Sensor>,
}

impl SizeWatcher {
	pub fn new() -> Result<Self, FieldError> {
		Self::with_debounce(DEFAULT_DEBOUNCE_MS)
	}

	pub fn with_debounce(wait_ms: i32) -> Result<Self, FieldError> {
		let window = web_sys::window().ok_or(FieldError::NoWindow)?;
		Ok(Self {
			window,
			wait_ms,
			sensors: Vec::new(),
		})
	}

	/// Start reporting size changes of `element` to `callback`.
	///
	/// Observing an element twice replaces the earlier subscription.
	pub fn observe(
		&mut self,
		element: &Element,
		callback: impl Fn(&Element) + 'static,
	) -> Result<(), FieldError> {
		self.unobserve(element);

		let debounce = Rc::new(RefCell::new(Debounce::default()));

		let (debounce_quiet, element_quiet) = (debounce.clone(), element.clone());
		let on_quiet: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new(move || {
			if debounce_quiet.borrow_mut().fire() {
				callback(&element_quiet);
			}
		}));

		let (debounce_resize, on_quiet_resize, window, wait_ms) =
			(debounce.clone(), on_quiet.clone(), self.window.clone(), self.wait_ms);
		let on_resize: Closure<dyn FnMut(js_sys::Array)> = Closure::new(move |_entries| {
			if debounce_resize.borrow().is_disposed() {
				return;
			}
			let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
				(*on_quiet_resize).as_ref().unchecked_ref(),
				wait_ms,
			) else {
				return;
			};
			if let Some(previous) = debounce_resize.borrow_mut().rearm(handle) {
				window.clear_timeout_with_handle(previous);
			}
		});

		let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
		observer.observe(element);
		debug!("particle-backdrop: observing size, {}ms debounce", self.wait_ms);

		self.sensors.push(Sensor {
			element: element.clone(),
			observer,
			debounce,
			_on_resize: on_resize,
			_on_quiet: on_quiet,
		});
		Ok(())
	}

	/// Stop reporting for `element`. Unwatched elements are ignored.
	pub fn unobserve(&mut self, element: &Element) {
		if let Some(pos) = self.sensors.iter().position(|s| &s.element == element) {
			self.sensors.swap_remove(pos).release(&self.window);
		}
	}
}

impl Drop for SizeWatcher {
	fn drop(&mut self) {
		for sensor in self.sensors.drain(..) {
			sensor.release(&self.window);
		}
	}
}
