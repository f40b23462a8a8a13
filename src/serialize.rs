//! Rendering of [`PropertySet`]s as HTML tags.
//!
//! Values are **not** escaped. Callers that render untrusted values must sanitize them first.

use crate::{
	case::to_hyphen_case,
	css::to_css_text,
	host::Element,
	load::read_element_properties,
	props::{Dict, Prop, PropertySet},
	tables::is_protected,
};
use core::fmt::Write as _;

/// The content of a serialized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Children<'a> {
	/// `<tag/>`
	Omitted,
	/// `<tag></tag>`
	Empty,
	/// `<tag>content</tag>`
	Content(&'a str),
}

/// Renders `props` as a `tag` element.
///
/// Attributes are written in this order: `class`, `style` (if any property is set), `data-*`, then everything else.
/// Listeners, cleared entries and protected attributes are omitted.
/// Boolean-like attributes are written as given, so `disabled="false"` still renders (and means *disabled* to a browser).
///
/// ```
/// use dom_props::{serialize_to_html, Children, PropertySet};
///
/// let props = PropertySet::<()>::new().with_class_name("a b").with_attribute("id", "x");
/// assert_eq!(serialize_to_html("div", &props, Children::Content("hi")), r#"<div class="a b" id="x">hi</div>"#);
/// ```
#[must_use]
pub fn serialize_to_html<L>(tag: &str, props: &PropertySet<L>, children: Children<'_>) -> String {
	render(tag, props.class_name.as_deref(), props.style.as_ref(), props.data.as_ref(), props.attributes.as_ref(), children)
}

/// Like [`serialize_to_html`], but merges in the properties currently found on `element`.
///
/// Explicit `props` take precedence: the class name is replaced entirely,
/// style and dataset entries are overlaid per key, and the element's attributes only fill in missing keys.
///
/// Without `tag`, the element's (lower-cased) tag name is used.
/// If that doesn't exist either, the element's text content is returned instead.
#[must_use]
pub fn serialize_element_to_html<L, E: Element + ?Sized>(tag: Option<&str>, props: &PropertySet<L>, children: Children<'_>, element: &E) -> String {
	let tag = match tag.map(str::to_owned).or_else(|| element.tag_name().map(|name| name.to_lowercase())) {
		Some(tag) => tag,
		None => return element.text_content().unwrap_or_default(),
	};

	let read = read_element_properties(element);
	let class_name = props.class_name.as_deref().or(read.class_name.as_deref());
	let style = overlay(read.style, props.style.as_ref());
	let data = overlay(read.data, props.data.as_ref());

	let mut attributes = props.attributes.clone().unwrap_or_default();
	for (name, value) in read.attributes.unwrap_or_default() {
		attributes.entry(name).or_insert(value);
	}

	render(&tag, class_name, style.as_ref(), data.as_ref(), Some(&attributes), children)
}

fn overlay(base: Option<Dict<String>>, explicit: Option<&Dict<String>>) -> Option<Dict<String>> {
	match (base, explicit) {
		(base, None) => base,
		(None, Some(explicit)) => Some(explicit.clone()),
		(Some(mut base), Some(explicit)) => {
			base.extend(explicit.iter().map(|(key, value)| (key.clone(), value.clone())));
			Some(base)
		}
	}
}

fn render(tag: &str, class_name: Option<&str>, style: Option<&Dict<String>>, data: Option<&Dict<String>>, attributes: Option<&Dict<String>>, children: Children<'_>) -> String {
	let mut html = String::new();
	html.push('<');
	html.push_str(tag);

	if let Some(class_name) = class_name.filter(|class_name| !class_name.is_empty()) {
		write_attribute(&mut html, "class", class_name);
	}

	if let Some(style) = style {
		let css_text = to_css_text(style);
		if !css_text.is_empty() {
			write_attribute(&mut html, "style", &css_text);
		}
	}

	for (key, value) in data.into_iter().flatten() {
		if let Prop::Set(value) = value {
			write_attribute(&mut html, &format!("data-{}", to_hyphen_case(key)), value);
		}
	}

	for (name, value) in attributes.into_iter().flatten() {
		let value = match value {
			Prop::Set(value) => value,
			Prop::Clear => continue,
		};
		if is_protected(name) {
			continue;
		}
		write_attribute(&mut html, name, value);
	}

	match children {
		Children::Omitted => html.push_str("/>"),
		Children::Empty => {
			let _ = write!(html, "></{}>", tag);
		}
		Children::Content(content) => {
			let _ = write!(html, ">{}</{}>", content, tag);
		}
	}
	html
}

fn write_attribute(html: &mut String, name: &str, value: &str) {
	let _ = write!(html, " {}=\"{}\"", name, value);
}
