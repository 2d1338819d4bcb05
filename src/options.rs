use crate::ToastContent;
use core::{convert::TryFrom, time::Duration};
use hashbrown::HashMap;
use std::borrow::Cow;

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// The container's `id` unless configured otherwise.
pub const DEFAULT_CONTAINER_ID: &str = "toast__container";

/// Per-toast options for [`ToastManager::create`](`crate::ToastManager::create`).
///
/// ```
/// use core::time::Duration;
/// use toast_dom::ToastOptions;
///
/// let options = ToastOptions::new("Saved")
/// 	.header("Settings")
/// 	.timeout(Duration::from_secs(5))
/// 	.attribute("className", "toast--success");
/// # assert_eq!(options.timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ToastOptions {
	pub header: Option<ToastContent>,
	/// Rendered into the body region. [`None`] leaves the body empty.
	pub message: Option<ToastContent>,
	/// [`None`] uses the manager's [`ToastConfig::default_timeout`]. [`Duration::ZERO`] disables automatic dismissal.
	pub timeout: Option<Duration>,
	/// Extra attributes for the toast's root element.
	///
	/// `className` (or `class`) is *added* to the base class `toast__wrapper` instead of replacing it.
	/// This includes a literal `class` entry, so attributes can't remove the base class (unlike `setAttribute("class", …)` would).
	pub attributes: HashMap<String, String>,
	/// Dismiss on clicks anywhere on the toast, and don't render a close button.
	pub dispose_on_click: bool,
}

impl ToastOptions {
	#[must_use]
	pub fn new(message: impl Into<ToastContent>) -> Self {
		Self { message: Some(message.into()), ..Self::default() }
	}

	#[must_use]
	pub fn header(mut self, header: impl Into<ToastContent>) -> Self {
		self.header = Some(header.into());
		self
	}

	#[must_use]
	pub fn message(mut self, message: impl Into<ToastContent>) -> Self {
		self.message = Some(message.into());
		self
	}

	#[must_use]
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Shorthand for `.timeout(Duration::ZERO)`.
	#[must_use]
	pub fn persistent(self) -> Self {
		self.timeout(Duration::ZERO)
	}

	#[must_use]
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn dispose_on_click(mut self, dispose_on_click: bool) -> Self {
		self.dispose_on_click = dispose_on_click;
		self
	}

	/// The class attribute value for the toast root, merging any caller-supplied class into `base`.
	pub(crate) fn wrapper_class(&self, base: &str) -> String {
		let extra = self.attributes.get("className").into_iter().chain(self.attributes.get("class")).filter(|class| !class.is_empty());
		let mut class = base.to_owned();
		for extra in extra {
			class.push(' ');
			class.push_str(extra);
		}
		class
	}

	/// Attributes that are set verbatim, i.e. everything except the merged class entries.
	pub(crate) fn plain_attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.attributes.iter().filter(|(name, _)| !matches!(name.as_str(), "className" | "class")).map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub(crate) fn effective_timeout(&self, config: &ToastConfig) -> Duration {
		self.timeout.unwrap_or(config.default_timeout)
	}
}

/// Per-manager configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ToastConfig {
	/// Used for toasts that don't specify [`ToastOptions::timeout`].
	pub default_timeout: Duration,
	/// The `id` given to the shared container.
	///
	/// Set this to [`None`] if more than one manager can be active in the same document.
	pub container_id: Option<Cow<'static, str>>,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self { default_timeout: DEFAULT_TIMEOUT, container_id: Some(Cow::Borrowed(DEFAULT_CONTAINER_ID)) }
	}
}

impl ToastConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn default_timeout(mut self, default_timeout: Duration) -> Self {
		self.default_timeout = default_timeout;
		self
	}

	#[must_use]
	pub fn container_id(mut self, container_id: impl Into<Cow<'static, str>>) -> Self {
		self.container_id = Some(container_id.into());
		self
	}

	/// Leaves the container without `id`.
	#[must_use]
	pub fn without_container_id(mut self) -> Self {
		self.container_id = None;
		self
	}

	/// Converts `timeout` into the millisecond argument of [***setTimeout***](https://developer.mozilla.org/en-US/docs/Web/API/setTimeout),
	/// or [`None`] if no timer should be scheduled.
	pub(crate) fn timer_millis(timeout: Duration) -> Option<i32> {
		if timeout == Duration::ZERO {
			None
		} else {
			// Sub-millisecond timeouts still fire, just on the next task.
			Some(i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX))
		}
	}
}
