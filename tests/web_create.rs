use core::time::Duration;
use toast_dom::{ToastConfig, ToastContent, ToastManager, ToastOptions, CONTAINER_CLASS};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_setup_::{count, document, isolated_manager, select};

fn persistent_manager() -> ToastManager {
	isolated_manager(ToastConfig::new().default_timeout(Duration::ZERO))
}

#[wasm_bindgen_test]
fn close_button_by_default() {
	let manager = persistent_manager();
	assert!(manager.container().is_none());

	let toast = manager.create(ToastOptions::new("Saved")).unwrap();

	assert_eq!(count(toast.element(), ".toast__close"), 1);
	assert_eq!(select(toast.element(), ".toast__close").get_attribute("type").as_deref(), Some("button"));
	assert_eq!(select(toast.element(), ".toast__content > div").inner_html(), "Saved");
	assert_eq!(manager.len(), 1);
	assert!(!toast.is_dismissed());

	let container = manager.container().unwrap();
	assert_eq!(container.class_name(), CONTAINER_CLASS);
	assert!(manager.root().contains(Some(&*container)));
	assert!(container.contains(Some(&**toast.element())));
}

#[wasm_bindgen_test]
fn dispose_on_click_has_no_close_button() {
	let manager = persistent_manager();
	let toast = manager.create(ToastOptions::new("Click me").dispose_on_click(true)).unwrap();

	assert_eq!(count(toast.element(), ".toast__close"), 0);
	assert_eq!(count(toast.element(), ".toast__header"), 1);
}

#[wasm_bindgen_test]
fn structure() {
	let manager = persistent_manager();
	let toast = manager.create(ToastOptions::new("Body").header("Head")).unwrap();
	let element = toast.element();

	assert_eq!(element.class_name(), "toast__wrapper");
	assert_eq!(element.child_element_count(), 2);
	assert_eq!(element.first_element_child().unwrap().class_name(), "toast__header");
	assert_eq!(element.last_element_child().unwrap().class_name(), "toast__content");
	assert_eq!(select(element, ".toast__header > .toast__header-content > div").inner_html(), "Head");
}

#[wasm_bindgen_test]
fn missing_content_renders_empty_regions() {
	let manager = persistent_manager();

	let toast = manager.create(ToastOptions::default()).unwrap();
	assert_eq!(select(toast.element(), ".toast__header-content").child_element_count(), 0);
	assert_eq!(select(toast.element(), ".toast__content").child_element_count(), 0);

	let toast = manager.create(ToastOptions::new("")).unwrap();
	assert_eq!(select(toast.element(), ".toast__content").child_element_count(), 0);
}

#[wasm_bindgen_test]
fn text_is_markup() {
	let manager = persistent_manager();
	let toast = manager.create(ToastOptions::new("<b>Saved</b> <i>twice</i>")).unwrap();

	assert_eq!(count(toast.element(), ".toast__content > div > b"), 1);
	assert_eq!(count(toast.element(), ".toast__content > div > i"), 1);
}

#[wasm_bindgen_test]
fn nodes_are_moved_not_cloned() {
	let manager = persistent_manager();
	let document = document();

	let span = document.create_element("span").unwrap();
	span.set_text_content(Some("Live"));
	let previous_parent = document.create_element("div").unwrap();
	previous_parent.append_child(&span).unwrap();

	let toast = manager.create(ToastOptions::new(ToastContent::from(span.clone()))).unwrap();

	assert_eq!(select(toast.element(), ".toast__content > span"), span);
	assert_eq!(previous_parent.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn header_nodes_are_moved_not_cloned() {
	let manager = persistent_manager();
	let document = document();

	let strong = document.create_element("strong").unwrap();
	strong.set_text_content(Some("Heads up"));
	let previous_parent = document.create_element("div").unwrap();
	previous_parent.append_child(&strong).unwrap();

	let toast = manager.create(ToastOptions::new("Body").header(ToastContent::Node(strong.clone().into()))).unwrap();

	assert_eq!(select(toast.element(), ".toast__header > .toast__header-content > strong"), strong);
	assert_eq!(count(toast.element(), "strong"), 1);
	assert_eq!(previous_parent.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn attributes() {
	let manager = persistent_manager();
	let toast = manager
		.create(
			ToastOptions::new("Hi")
				.attribute("className", "toast--warning big")
				.attribute("data-kind", "warning")
				.attribute("role", "status")
				.attribute("1invalid", "skipped"),
		)
		.unwrap();
	let element = toast.element();

	assert_eq!(element.class_name(), "toast__wrapper toast--warning big");
	assert_eq!(element.get_attribute("data-kind").as_deref(), Some("warning"));
	assert_eq!(element.get_attribute("role").as_deref(), Some("status"));
	assert!(!element.has_attribute("className"));
	assert_eq!(manager.len(), 1);
}

#[wasm_bindgen_test]
fn toasts_stack_in_call_order() {
	let manager = persistent_manager();
	let toasts: Vec<_> = ["first", "second", "third"].iter().map(|&message| manager.create(ToastOptions::new(message)).unwrap()).collect();

	let container = manager.container().unwrap();
	assert_eq!(container.child_element_count(), 3);
	let children = container.children();
	for (i, toast) in toasts.iter().enumerate() {
		assert_eq!(&children.item(i as u32).unwrap(), toast.element());
	}
	assert_eq!(manager.len(), 3);
}

#[wasm_bindgen_test]
fn container_id() {
	let manager = isolated_manager(ToastConfig::new().default_timeout(Duration::ZERO));
	assert_eq!(manager.config().container_id, None);

	let root = manager.root();
	let manager = ToastManager::with_config(root, ToastConfig::new().default_timeout(Duration::ZERO).container_id("toast-dom-test"));
	let toast = manager.create(ToastOptions::new("With id")).unwrap();

	let container = document().get_element_by_id("toast-dom-test").unwrap();
	assert_eq!(Some(container), manager.container());
	toast.dismiss();
	assert!(document().get_element_by_id("toast-dom-test").is_none());
}
