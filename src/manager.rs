use crate::{ToastConfig, ToastOptions};
use core::cell::RefCell;
use std::rc::Rc;
use tracing::{error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Class of the shared container that holds all active toasts.
pub const CONTAINER_CLASS: &str = "toast__container";
/// Base class of each toast's root element.
pub const WRAPPER_CLASS: &str = "toast__wrapper";
pub const HEADER_CLASS: &str = "toast__header";
pub const HEADER_CONTENT_CLASS: &str = "toast__header-content";
pub const CLOSE_CLASS: &str = "toast__close";
pub const CONTENT_CLASS: &str = "toast__content";

/// Creates toasts inside a shared container below a root element, and removes them again on click or timeout.
///
/// The container is created with the first toast and removed along with the last one.
///
/// Cloning a [`ToastManager`] is cheap and yields a handle to the same state.
///
/// # Dropping
///
/// Click handlers only hold a weak reference to the manager's state.
/// Once the last clone of the manager, every [`Toast`] handle and every pending timeout are gone,
/// the container is removed from the document along with any toasts still in it.
#[derive(Debug, Clone)]
pub struct ToastManager {
	state: Rc<RefCell<State>>,
}

#[derive(Debug)]
struct State {
	root: web_sys::Element,
	config: ToastConfig,
	container: Option<web_sys::Element>,
	/// In display order.
	active: Vec<ActiveToast>,
}

#[derive(Debug)]
struct ActiveToast {
	element: web_sys::Element,
	/// Either `element` or its close button.
	listener_target: web_sys::Element,
	on_dismiss: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ActiveToast {
	fn drop(&mut self) {
		if let Err(error) = self.listener_target.remove_event_listener_with_callback("click", self.on_dismiss.as_ref().unchecked_ref()) {
			error!("Failed to remove click listener: {:?}", error);
		}
	}
}

impl ToastManager {
	/// Creates a manager that places its container at the end of the current document's `<body>`.
	///
	/// # Errors
	///
	/// Iff there is no [***Window***](https://developer.mozilla.org/en-US/docs/Web/API/Window), [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document) or `<body>`.
	#[instrument]
	pub fn new() -> Result<Self, JsValue> {
		let body = web_sys::window()
			.and_then(|window| window.document())
			.and_then(|document| document.body())
			.ok_or_else(|| JsValue::from_str("toast-dom: No document body found."))?;
		Ok(Self::with_config(body.into(), ToastConfig::default()))
	}

	#[must_use]
	#[instrument]
	pub fn with_config(root: web_sys::Element, config: ToastConfig) -> Self {
		Self {
			state: Rc::new(RefCell::new(State { root, config, container: None, active: Vec::new() })),
		}
	}

	/// Builds a toast from `options` and appends it to the shared container, creating the container if necessary.
	///
	/// Unless the effective timeout is zero, the toast is dismissed automatically once it elapses.
	///
	/// Attributes the browser rejects are logged and skipped.
	///
	/// Caller-supplied nodes may react to being connected (e.g. custom elements' `connectedCallback`) and use this manager from there.
	/// If that dismisses the new toast right away, the returned [`Toast`] is already [dismissed](`Toast::is_dismissed`).
	///
	/// # Errors
	///
	/// Iff the browser fails to create or insert an element, or the root element has no window to schedule the timeout on.
	/// No container is left behind in that case.
	#[instrument(skip(self, options), fields(dispose_on_click = options.dispose_on_click, timeout = ?options.timeout))]
	pub fn create(&self, options: ToastOptions) -> Result<Toast, JsValue> {
		if cfg!(feature = "dangerous-logging") {
			trace!(header = ?options.header, message = ?options.message, attributes = ?options.attributes, "Toast content");
		}

		let (root, timeout) = {
			let state = self.state.borrow();
			(state.root.clone(), options.effective_timeout(&state.config))
		};
		let document = root.owner_document().ok_or_else(|| JsValue::from_str("toast-dom: No owner document found for root element."))?;

		let wrapper = create_with_class(&document, "div", &options.wrapper_class(WRAPPER_CLASS))?;
		for (name, value) in options.plain_attributes() {
			if let Err(error) = wrapper.set_attribute(name, value) {
				error!("Could not set attribute {:?}: {:?}", name, error);
			}
		}

		let on_dismiss = {
			let state = Rc::downgrade(&self.state);
			let wrapper = wrapper.clone();
			// Close button clicks stay inside the toast.
			let stop_propagation = !options.dispose_on_click;
			Closure::wrap(Box::new(move |event: web_sys::Event| {
				let span = trace_span!("on_dismiss", event = ?&event);
				let _enter = span.enter();

				if stop_propagation {
					event.stop_propagation();
				}
				match state.upgrade() {
					Some(state) => dismiss(&state, &wrapper),
					None => warn!("Toast clicked after its manager was dropped."),
				}
			}) as Box<dyn FnMut(web_sys::Event)>)
		};

		let header = create_with_class(&document, "div", HEADER_CLASS)?;
		let header_content = create_with_class(&document, "div", HEADER_CONTENT_CLASS)?;
		if let Some(content) = &options.header {
			content.render_into(&document, &header_content)?;
		}
		header.append_child(&header_content)?;
		let listener_target = if options.dispose_on_click {
			wrapper.clone()
		} else {
			let close = create_with_class(&document, "button", CLOSE_CLASS)?;
			close.set_attribute("type", "button")?;
			header.append_child(&close)?;
			close
		};
		listener_target.add_event_listener_with_callback("click", on_dismiss.as_ref().unchecked_ref())?;
		let toast = ActiveToast { element: wrapper.clone(), listener_target, on_dismiss };
		wrapper.append_child(&header)?;

		let body = create_with_class(&document, "div", CONTENT_CLASS)?;
		if let Some(content) = &options.message {
			content.render_into(&document, &body)?;
		}
		wrapper.append_child(&body)?;

		// Callbacks only run once this call has returned, so scheduling before insertion is fine.
		if let Some(millis) = ToastConfig::timer_millis(timeout) {
			let window = document.default_view().ok_or_else(|| JsValue::from_str("toast-dom: No window to schedule the timeout on."))?;
			let state = Rc::clone(&self.state);
			let wrapper = wrapper.clone();
			let on_timeout = Closure::once_into_js(move || {
				let span = trace_span!("on_timeout");
				let _enter = span.enter();
				dismiss(&state, &wrapper);
			});
			window.set_timeout_with_callback_and_timeout_and_arguments_0(on_timeout.unchecked_ref::<js_sys::Function>(), millis)?;
		}

		push(&self.state, &document, toast)?;
		Ok(Toast { element: wrapper, state: Rc::clone(&self.state) })
	}

	/// The number of toasts currently displayed.
	#[must_use]
	pub fn len(&self) -> usize {
		self.state.borrow().active.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The shared container, iff any toast is displayed.
	#[must_use]
	pub fn container(&self) -> Option<web_sys::Element> {
		self.state.borrow().container.clone()
	}

	#[must_use]
	pub fn root(&self) -> web_sys::Element {
		self.state.borrow().root.clone()
	}

	#[must_use]
	pub fn config(&self) -> ToastConfig {
		self.state.borrow().config.clone()
	}
}

/// A handle to a toast created by a [`ToastManager`].
///
/// Holding on to it keeps the manager's state alive, but not the toast on screen.
#[derive(Debug, Clone)]
pub struct Toast {
	element: web_sys::Element,
	state: Rc<RefCell<State>>,
}

impl Toast {
	/// The toast's root element (`.toast__wrapper`).
	#[must_use]
	pub fn element(&self) -> &web_sys::Element {
		&self.element
	}

	#[must_use]
	pub fn is_dismissed(&self) -> bool {
		let state = self.state.borrow();
		!(state.root.contains(Some(&*self.element)) && state.active.iter().any(|active| active.element == self.element))
	}

	/// Removes the toast, exactly like clicking it (or its close button) would.
	///
	/// Does nothing if the toast was already dismissed.
	#[instrument(skip(self), fields(element = ?self.element))]
	pub fn dismiss(&self) {
		dismiss(&self.state, &self.element);
	}
}

fn create_with_class(document: &web_sys::Document, tag: &str, class: &str) -> Result<web_sys::Element, JsValue> {
	let element = document.create_element(tag)?;
	element.set_class_name(class);
	Ok(element)
}

/// DOM insertions happen outside of any borrow of `state`:
/// they can run custom element reactions of caller-supplied content, which may use the same manager again.
fn push(state: &RefCell<State>, document: &web_sys::Document, toast: ActiveToast) -> Result<(), JsValue> {
	let (root, container, container_id) = {
		let state = state.borrow();
		(state.root.clone(), state.container.clone(), state.config.container_id.clone())
	};

	let container = match container {
		Some(container) => container,
		None => {
			let container = create_with_class(document, "div", CONTAINER_CLASS)?;
			if let Some(id) = &container_id {
				container.set_id(id);
			}
			root.append_child(&container)?;
			trace!("Created toast container.");
			state.borrow_mut().container = Some(container.clone());
			container
		}
	};

	let inserted = container.append_child(&toast.element);

	let (released, stale_container) = {
		let mut state = state.borrow_mut();
		// Reactions may have dismissed the toast (or torn down the container) already.
		let released = if inserted.is_ok() && state.root.contains(Some(&*toast.element)) {
			state.active.push(toast);
			trace!(active = state.active.len(), "Displayed toast.");
			None
		} else {
			Some(toast)
		};
		let stale_container = if state.active.is_empty() { state.container.take() } else { None };
		(released, stale_container)
	};

	if let Some(stale_container) = stale_container {
		stale_container.remove();
		trace!("Removed toast container.");
	}
	drop(released);
	inserted.map(drop)
}

/// Removes `element` and stops tracking every toast that isn't attached anymore.
/// Removes the container if that was the last one.
///
/// Idempotent, so a click and a timeout can both trigger it.
/// Like in [`push`], the DOM is only modified while `state` isn't borrowed.
fn dismiss(state: &RefCell<State>, element: &web_sys::Element) {
	element.remove();

	let (released, container) = {
		let mut state = state.borrow_mut();
		let State { root, container, active, .. } = &mut *state;

		let (kept, released): (Vec<_>, Vec<_>) = active.drain(..).partition(|toast| root.contains(Some(&*toast.element)));
		*active = kept;

		let container = if active.is_empty() { container.take() } else { None };
		(released, container)
	};

	if released.is_empty() {
		trace!("Toast was already dismissed.");
	} else {
		trace!(count = released.len(), "Dismissed toast(s).");
	}
	if let Some(container) = container {
		container.remove();
		trace!("Removed toast container.");
	}

	// This may drop the closure that's currently running and unregister listeners.
	drop(released);
}

impl Drop for State {
	fn drop(&mut self) {
		if let Some(container) = self.container.take() {
			container.remove();
			trace!(abandoned = self.active.len(), "Removed toast container of dropped manager.");
		}
	}
}
