//! Header and message content of a toast.

use core::fmt::{self, Debug, Formatter};
use tracing::instrument;
use wasm_bindgen::JsValue;

/// What to show in a toast's header or body region.
///
/// [`Text`](`ToastContent::Text`) is parsed as **markup** (it is assigned to [***innerHTML***](https://developer.mozilla.org/en-US/docs/Web/API/Element/innerHTML)
/// of a generated `<div>`), so don't pass untrusted strings through it.
///
/// [`Node`](`ToastContent::Node`) is inserted as-is. It's *moved*, not cloned:
/// if it is already attached elsewhere in the document, it will be taken from there.
///
/// The [`Debug`] output only contains the text's length unless the `dangerous-logging` feature is enabled.
#[derive(Clone)]
pub enum ToastContent {
	Text(String),
	Node(web_sys::Node),
}

impl ToastContent {
	/// The variant's name, which is safe to log.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			ToastContent::Text(_) => "Text",
			ToastContent::Node(_) => "Node",
		}
	}

	/// Appends this content to `parent`.
	///
	/// Empty [`Text`](`ToastContent::Text`) renders nothing at all, not even the text container.
	#[instrument(skip(self, document, parent), fields(kind = self.kind()))]
	pub(crate) fn render_into(&self, document: &web_sys::Document, parent: &web_sys::Element) -> Result<(), JsValue> {
		match self {
			ToastContent::Text(text) if text.is_empty() => Ok(()),
			ToastContent::Text(text) => {
				let text_container = document.create_element("div")?;
				text_container.set_inner_html(text);
				parent.append_child(&text_container).map(drop)
			}
			ToastContent::Node(node) => parent.append_child(node).map(drop),
		}
	}
}

impl Debug for ToastContent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ToastContent::Text(text) if cfg!(feature = "dangerous-logging") => f.debug_tuple("Text").field(text).finish(),
			ToastContent::Text(text) => f.debug_struct("Text").field("len", &text.len()).finish_non_exhaustive(),
			ToastContent::Node(node) => f.debug_tuple("Node").field(node).finish(),
		}
	}
}

impl From<String> for ToastContent {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for ToastContent {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<web_sys::Node> for ToastContent {
	fn from(node: web_sys::Node) -> Self {
		Self::Node(node)
	}
}

impl From<web_sys::Element> for ToastContent {
	fn from(element: web_sys::Element) -> Self {
		Self::Node(element.into())
	}
}

impl From<web_sys::HtmlElement> for ToastContent {
	fn from(element: web_sys::HtmlElement) -> Self {
		Self::Node(element.into())
	}
}
