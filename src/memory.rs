//! A detached, in-memory [`Element`], for rendering without a browser and for tests.
//!
//! Inline style, dataset and class changes are reflected into the respective attributes,
//! like a browser would do it.

use crate::{
	case::to_hyphen_case,
	css::{parse_inline_style, style_key, to_css_text},
	host::Element,
	props::set_all,
};
use std::collections::BTreeMap;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement<L> {
	tag_name: Option<String>,
	text_content: Option<String>,
	attributes: Vec<(String, String)>,
	properties: BTreeMap<String, String>,
	listeners: Vec<(String, L)>,
}

impl<L> MemoryElement<L> {
	/// Creates an empty element. `tag_name` is stored as given.
	#[must_use]
	pub fn new(tag_name: impl Into<String>) -> Self {
		Self {
			tag_name: Some(tag_name.into()),
			text_content: None,
			attributes: Vec::new(),
			properties: BTreeMap::new(),
			listeners: Vec::new(),
		}
	}

	/// Creates a text node, which has no tag name and no attributes.
	#[must_use]
	pub fn text_node(text: impl Into<String>) -> Self {
		Self {
			tag_name: None,
			text_content: Some(text.into()),
			attributes: Vec::new(),
			properties: BTreeMap::new(),
			listeners: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.put_attribute(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text_content = Some(text.into());
		self
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(n, _)| n == name).map(|(_, value)| value.as_str())
	}

	#[must_use]
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attribute(name).is_some()
	}

	/// Attributes in insertion order.
	#[must_use]
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// A property assigned through [`Element::set_property`].
	#[must_use]
	pub fn property(&self, name: &str) -> Option<&str> {
		self.properties.get(name).map(String::as_str)
	}

	/// Registered listeners for `event`, in registration order.
	pub fn listeners<'a>(&'a self, event: &'a str) -> impl 'a + Iterator<Item = &'a L> {
		self.listeners.iter().filter(move |(e, _)| e == event).map(|(_, listener)| listener)
	}

	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	fn put_attribute(&mut self, name: String, value: String) {
		match self.attributes.iter_mut().find(|(n, _)| *n == name) {
			Some((_, existing)) => *existing = value,
			None => self.attributes.push((name, value)),
		}
	}

	fn take_attribute(&mut self, name: &str) {
		self.attributes.retain(|(n, _)| n != name);
	}

	fn class_tokens(&self) -> Vec<String> {
		self.attribute("class").map_or_else(Vec::new, |class| class.split_whitespace().map(str::to_owned).collect())
	}

	fn update_style(&mut self, update: impl FnOnce(&mut BTreeMap<String, String>)) {
		let mut style = self.attribute("style").and_then(|text| parse_inline_style(text, true)).unwrap_or_default();
		update(&mut style);
		if style.is_empty() {
			self.take_attribute("style");
		} else {
			self.put_attribute("style".to_owned(), to_css_text(&set_all(style)));
		}
	}
}

impl<L: Clone + PartialEq> Element for MemoryElement<L> {
	type Listener = L;

	fn tag_name(&self) -> Option<String> {
		self.tag_name.clone()
	}

	fn text_content(&self) -> Option<String> {
		self.text_content.clone()
	}

	fn attribute_names(&self) -> Option<Vec<String>> {
		self.tag_name.as_ref()?;
		Some(self.attributes.iter().map(|(name, _)| name.clone()).collect())
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		self.attribute(name).map(str::to_owned)
	}

	fn set_attribute(&mut self, name: &str, value: &str) {
		trace!("Setting attribute {:?}.", name);
		self.put_attribute(name.to_owned(), value.to_owned());
	}

	fn remove_attribute(&mut self, name: &str) {
		trace!("Removing attribute {:?}.", name);
		self.take_attribute(name);
	}

	fn set_style_property(&mut self, name: &str, value: &str) {
		let name = style_key(name);
		self.update_style(|style| {
			style.insert(name, value.to_owned());
		});
	}

	fn remove_style_property(&mut self, name: &str) {
		let name = style_key(name);
		self.update_style(|style| {
			style.remove(&name);
		});
	}

	fn set_data(&mut self, key: &str, value: &str) {
		self.put_attribute(format!("data-{}", to_hyphen_case(key)), value.to_owned());
	}

	fn delete_data(&mut self, key: &str) {
		self.take_attribute(&format!("data-{}", to_hyphen_case(key)));
	}

	fn add_class(&mut self, token: &str) {
		let mut tokens = self.class_tokens();
		if !tokens.iter().any(|t| t == token) {
			tokens.push(token.to_owned());
		}
		self.put_attribute("class".to_owned(), tokens.join(" "));
	}

	fn remove_class(&mut self, token: &str) {
		if !self.has_attribute("class") {
			return;
		}
		let mut tokens = self.class_tokens();
		tokens.retain(|t| t != token);
		self.put_attribute("class".to_owned(), tokens.join(" "));
	}

	fn set_property(&mut self, name: &str, value: &str) {
		trace!("Assigning property {:?}.", name);
		self.properties.insert(name.to_owned(), value.to_owned());
	}

	fn add_event_listener(&mut self, event: &str, listener: &L) {
		// Identical registrations are ignored, as in the DOM.
		if !self.listeners.iter().any(|(e, l)| e == event && l == listener) {
			self.listeners.push((event.to_owned(), listener.clone()));
		}
	}

	fn remove_event_listener(&mut self, event: &str, listener: &L) {
		self.listeners.retain(|(e, l)| !(e == event && l == listener));
	}
}
