/// The DOM capabilities this crate needs from a live element.
///
/// Implemented for [`web_sys::Element`] and [`MemoryElement`](`crate::MemoryElement`).
///
/// Failures of individual operations are the implementation's business to report.
/// None of them interrupt a diff application.
pub trait Element {
	/// The event handler type.
	type Listener: Clone + PartialEq;

	/// The element's [***tagName***](https://developer.mozilla.org/en-US/docs/Web/API/Element/tagName), if it has one.
	fn tag_name(&self) -> Option<String>;

	fn text_content(&self) -> Option<String>;

	/// Lists the present attribute names in document order,
	/// or [`None`] if the host can't enumerate attributes.
	fn attribute_names(&self) -> Option<Vec<String>>;

	fn get_attribute(&self, name: &str) -> Option<String>;
	fn set_attribute(&mut self, name: &str, value: &str);
	fn remove_attribute(&mut self, name: &str);

	/// Sets a property of the inline style. `name` is camelCase.
	fn set_style_property(&mut self, name: &str, value: &str);
	/// Clears a property of the inline style. `name` is camelCase.
	fn remove_style_property(&mut self, name: &str);

	/// Sets a dataset entry. `key` is camelCase.
	fn set_data(&mut self, key: &str, value: &str);
	/// Deletes a dataset entry. `key` is camelCase.
	fn delete_data(&mut self, key: &str);

	fn add_class(&mut self, token: &str);
	fn remove_class(&mut self, token: &str);

	/// Assigns an element property directly (like `element.value = …`).
	fn set_property(&mut self, name: &str, value: &str);

	fn add_event_listener(&mut self, event: &str, listener: &Self::Listener);
	fn remove_event_listener(&mut self, event: &str, listener: &Self::Listener);
}
