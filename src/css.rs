use crate::{case::to_camel_case, case::to_hyphen_case, props::Dict};
use std::collections::BTreeMap;

/// Parses inline style text (as found in [***style.cssText***](https://developer.mozilla.org/en-US/docs/Web/API/CSSStyleDeclaration/cssText))
/// into a map from camelCase property names to values.
///
/// Comments are stripped. Declarations without a `:` or with an empty name or value are dropped, and later duplicates win.
///
/// Returns [`None`] only if `text` is blank (after removing comments) and `null_if_empty` is set.
///
/// ```
/// let style = dom_props::parse_inline_style("color: red; font-size: 12px;", false).unwrap();
/// assert_eq!(style["color"], "red");
/// assert_eq!(style["fontSize"], "12px");
/// ```
#[must_use]
pub fn parse_inline_style(text: &str, null_if_empty: bool) -> Option<BTreeMap<String, String>> {
	let text = collapse_whitespace(&strip_comments(text));
	if text.is_empty() {
		return if null_if_empty { None } else { Some(BTreeMap::new()) };
	}

	let mut style = BTreeMap::new();
	for declaration in text.split(';') {
		let (property, value) = match declaration.split_once(':') {
			Some(pair) => pair,
			None => continue,
		};
		let (property, value) = (property.trim(), value.trim());
		if property.is_empty() || value.is_empty() {
			continue;
		}
		style.insert(style_key(property), value.to_owned());
	}
	Some(style)
}

/// Renders `style` as inline style text with hyphen-cased property names.
///
/// Cleared entries are skipped.
#[must_use]
pub fn to_css_text(style: &Dict<String>) -> String {
	let mut css_text = String::new();
	for (property, value) in style {
		if let Some(value) = value.as_set() {
			if !css_text.is_empty() {
				css_text.push(' ');
			}
			css_text.push_str(&css_property_name(property));
			css_text.push_str(": ");
			css_text.push_str(value);
			css_text.push(';');
		}
	}
	css_text
}

/// The camelCase key of a CSS property name. Custom properties (`--*`) are case-sensitive and kept as they are.
#[must_use]
pub fn style_key(property: &str) -> String {
	if is_custom_property(property) {
		property.to_owned()
	} else {
		to_camel_case(property)
	}
}

/// The CSS property name of a camelCase style key. Custom properties (`--*`) are kept as they are.
#[must_use]
pub fn css_property_name(key: &str) -> String {
	if is_custom_property(key) {
		key.to_owned()
	} else {
		to_hyphen_case(key)
	}
}

#[must_use]
pub fn is_custom_property(name: &str) -> bool {
	name.starts_with("--")
}

fn strip_comments(text: &str) -> String {
	let mut stripped = String::with_capacity(text.len());
	let mut rest = text;
	while let Some(start) = rest.find("/*") {
		match rest[start + 2..].find("*/") {
			Some(end) => {
				stripped.push_str(&rest[..start]);
				rest = &rest[start + 2 + end + 2..];
			}
			// Unterminated comments are kept as text.
			None => break,
		}
	}
	stripped.push_str(rest);
	stripped
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
