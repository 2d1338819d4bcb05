#![doc(html_root_url = "https://docs.rs/toast-dom/0.0.1")]
#![warn(clippy::pedantic)]

//! Small toast notifications for the browser DOM.
//!
//! Toasts are appended to a shared container (`.toast__container`) that exists only while at least one toast does.
//! Each toast is removed when its timeout elapses or when it's clicked, whichever comes first.
//!
//! For styling, the following structure is generated:
//!
//! ```html
//! <div id="toast__container" class="toast__container">
//!   <div class="toast__wrapper">
//!     <div class="toast__header">
//!       <div class="toast__header-content">…</div>
//!       <button type="button" class="toast__close"></button> <!-- unless dispose-on-click -->
//!     </div>
//!     <div class="toast__content">…</div>
//!   </div>
//! </div>
//! ```

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod content;
mod manager;
mod options;

pub use content::ToastContent;
pub use manager::{Toast, ToastManager, CLOSE_CLASS, CONTAINER_CLASS, CONTENT_CLASS, HEADER_CLASS, HEADER_CONTENT_CLASS, WRAPPER_CLASS};
pub use options::{ToastConfig, ToastOptions, DEFAULT_CONTAINER_ID, DEFAULT_TIMEOUT};

use core::cell::RefCell;
use wasm_bindgen::JsValue;

thread_local! {
	static DEFAULT_MANAGER: RefCell<Option<ToastManager>> = RefCell::new(None);
}

/// Runs `f` with this thread's default [`ToastManager`], which is created on first use and attached to the document's `<body>`.
///
/// # Errors
///
/// Iff the default manager doesn't exist yet and can't be created. See [`ToastManager::new`].
pub fn with_default_manager<R>(f: impl FnOnce(&ToastManager) -> R) -> Result<R, JsValue> {
	let manager = DEFAULT_MANAGER.with(|default_manager| -> Result<_, JsValue> {
		let mut default_manager = default_manager.borrow_mut();
		if let Some(manager) = &*default_manager {
			return Ok(manager.clone());
		}
		let manager = ToastManager::new()?;
		*default_manager = Some(manager.clone());
		Ok(manager)
	})?;
	Ok(f(&manager))
}

/// Creates a toast on the [default manager](`with_default_manager`).
///
/// # Errors
///
/// See [`with_default_manager`] and [`ToastManager::create`].
pub fn create(options: ToastOptions) -> Result<Toast, JsValue> {
	with_default_manager(|manager| manager.create(options))?
}
