//! Leptos component mounting a particle field behind its children.
//!
//! The component renders a relatively positioned container `<div>`. Once the
//! div is in the DOM, a [`ParticleField`] attaches its canvas to it; the field
//! is destroyed when the component is unmounted.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use send_wrapper::SendWrapper;
use web_sys::HtmlElement;

use super::config::FieldConfig;
use super::field::ParticleField;

/// Renders an animated particle field behind `children`.
///
/// The field fills the container's client box, tracks its size, and connects
/// particles to the mouse while it is over the container.
#[component]
pub fn ParticleBackground(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(optional)] children: Option<Children>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let field_init = field.clone();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if field_init.borrow().is_some() {
			return;
		}
		let container: HtmlElement = container.into();
		match ParticleField::new(&container, config.clone()) {
			Ok(f) => *field_init.borrow_mut() = Some(f),
			Err(e) => error!("particle-backdrop: failed to start field: {}", e),
		}
	});

	let field_cleanup = SendWrapper::new(field);
	on_cleanup(move || {
		if let Some(mut f) = field_cleanup.borrow_mut().take() {
			f.destroy();
		}
	});

	view! {
		<div
			node_ref=container_ref
			class="particle-background"
			style="position: relative; min-height: 100vh;"
		>
			{children.map(|c| c())}
		</div>
	}
}
