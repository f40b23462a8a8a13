//! Conversion of framework-style property bags into [`PropertySet`]s.

use crate::{
	case::to_camel_case,
	css::parse_inline_style,
	props::{set_all, Dict, Prop, PropertySet},
	tables::{lookup, lookup_ignore_case, LISTENER_NAMES, RENAMED_ATTRIBUTES},
};
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// A loosely-typed property value, as found in framework-style property bags.
#[derive(Debug, Clone, PartialEq)]
pub enum Loose<L> {
	/// Clears listeners. Elsewhere, the key is ignored.
	Undefined,
	Null,
	Bool(bool),
	Number(f64),
	Text(String),
	/// A whole `style` or dataset map.
	Map(BTreeMap<String, String>),
	Listener(L),
}
impl<L> Loose<L> {
	/// `null`, `false`, `0`, `NaN` and `""`.
	#[must_use]
	pub fn is_falsy(&self) -> bool {
		match self {
			Loose::Undefined | Loose::Null | Loose::Bool(false) => true,
			Loose::Number(n) => *n == 0.0 || n.is_nan(),
			Loose::Text(text) => text.is_empty(),
			Loose::Bool(true) | Loose::Map(_) | Loose::Listener(_) => false,
		}
	}

	/// The attribute value this stands for, if it can be one.
	#[must_use]
	pub fn into_text(self) -> Option<String> {
		match self {
			Loose::Text(text) => Some(text),
			Loose::Bool(b) => Some(b.to_string()),
			Loose::Number(n) => Some(number_to_string(n)),
			Loose::Undefined | Loose::Null | Loose::Map(_) | Loose::Listener(_) => None,
		}
	}
}
impl<L> From<&str> for Loose<L> {
	fn from(text: &str) -> Self {
		Loose::Text(text.to_owned())
	}
}
impl<L> From<String> for Loose<L> {
	fn from(text: String) -> Self {
		Loose::Text(text)
	}
}
impl<L> From<bool> for Loose<L> {
	fn from(b: bool) -> Self {
		Loose::Bool(b)
	}
}
impl<L> From<i32> for Loose<L> {
	fn from(n: i32) -> Self {
		Loose::Number(n.into())
	}
}
impl<L> From<f64> for Loose<L> {
	fn from(n: f64) -> Self {
		Loose::Number(n)
	}
}
impl<L> From<BTreeMap<String, String>> for Loose<L> {
	fn from(map: BTreeMap<String, String>) -> Self {
		Loose::Map(map)
	}
}

/// [`normalize_properties_with`] the built-in [`LISTENER_NAMES`] and [`RENAMED_ATTRIBUTES`].
///
/// ```
/// use dom_props::{normalize_properties, Loose, Prop};
///
/// let props = normalize_properties(vec![
/// 	("className", Loose::<()>::from("a")),
/// 	("class", "b".into()),
/// 	("style", "font-size: 2em".into()),
/// 	("data-user-id", "7".into()),
/// 	("ariaLabel", "Close".into()),
/// 	("tabIndex", 0.into()),
/// ]);
/// assert_eq!(props.class_name.as_deref(), Some("a b"));
/// assert_eq!(props.style.unwrap()["fontSize"], Prop::Set("2em".to_owned()));
/// assert_eq!(props.data.unwrap()["userId"], Prop::Set("7".to_owned()));
/// let attributes = props.attributes.unwrap();
/// assert_eq!(attributes["aria-label"], Prop::Set("Close".to_owned()));
/// assert_eq!(attributes["tabindex"], Prop::Set("0".to_owned()));
/// ```
pub fn normalize_properties<L, K: Into<String>>(bag: impl IntoIterator<Item = (K, Loose<L>)>) -> PropertySet<L> {
	normalize_properties_with(bag, LISTENER_NAMES, RENAMED_ATTRIBUTES)
}

/// Normalizes a framework-style property bag.
///
/// Per key, the first matching rule applies:
///
/// 1. `class` and `className` are appended to the class name, space-separated.
/// 2. `style` is parsed if it's text or taken as-is if it's a map, and merged into the style if not empty.
/// 3. Keys found in `listener_names` (ignoring ASCII case) become listeners under the event name.
///    Other falsy values are skipped, but [`Loose::Undefined`] clears the listener.
/// 4. `data-*` keys become camelCase dataset entries. Other `data…` keys with a map value are merged into the dataset.
/// 5. Anything else is an attribute, unless its value is [`Loose::Undefined`] or [`Loose::Null`].
///    Keys found in `renamed_attributes` are renamed, and `aria…` keys (like `ariaLabel`) become `aria-…`.
pub fn normalize_properties_with<L, K: Into<String>>(
	bag: impl IntoIterator<Item = (K, Loose<L>)>,
	listener_names: &[(&str, &str)],
	renamed_attributes: &[(&str, &str)],
) -> PropertySet<L> {
	let mut props = PropertySet::new();

	for (key, value) in bag {
		let key: String = key.into();

		if key == "class" || key == "className" {
			if let Some(class_name) = value.into_text().filter(|text| !text.is_empty()) {
				match &mut props.class_name {
					Some(merged) if !merged.is_empty() => {
						merged.push(' ');
						merged.push_str(&class_name);
					}
					merged => *merged = Some(class_name),
				}
			}
			continue;
		}

		if key == "style" {
			let style = match value {
				Loose::Text(text) => parse_inline_style(&text, true).unwrap_or_default(),
				Loose::Map(map) => map,
				_ => continue,
			};
			if !style.is_empty() {
				props.style.get_or_insert_with(Dict::new).extend(set_all(style));
			}
			continue;
		}

		if let Some(event) = lookup_ignore_case(listener_names, &key) {
			match value {
				Loose::Undefined => insert(&mut props.listeners, event.to_owned(), Prop::Clear),
				Loose::Listener(listener) => insert(&mut props.listeners, event.to_owned(), Prop::Set(listener)),
				falsy if falsy.is_falsy() => trace!("Skipping falsy listener {:?}.", key),
				// Inline handler source.
				other => {
					if let Some(source) = other.into_text() {
						insert(&mut props.attributes, key.to_ascii_lowercase(), Prop::Set(source));
					}
				}
			}
			continue;
		}

		if let Some(rest) = key.strip_prefix("data") {
			if let Some(name) = rest.strip_prefix('-') {
				if let Some(text) = value.into_text() {
					insert(&mut props.data, to_camel_case(name), Prop::Set(text));
				}
				continue;
			}
			if let Loose::Map(map) = value {
				props.data.get_or_insert_with(Dict::new).extend(set_all(map));
				continue;
			}
			normalize_attribute(&mut props, key, value, renamed_attributes);
			continue;
		}

		normalize_attribute(&mut props, key, value, renamed_attributes);
	}

	props
}

fn normalize_attribute<L>(props: &mut PropertySet<L>, key: String, value: Loose<L>, renamed_attributes: &[(&str, &str)]) {
	let value = match value {
		Loose::Undefined | Loose::Null => return,
		Loose::Listener(listener) => {
			// Unknown event handler keys still start with "on".
			if key.len() > 2 && key.get(..2).map_or(false, |prefix| prefix.eq_ignore_ascii_case("on")) {
				insert(&mut props.listeners, key[2..].to_ascii_lowercase(), Prop::Set(listener));
			} else {
				warn!("Dropping callable value of non-listener property {:?}.", key);
			}
			return;
		}
		Loose::Map(_) => {
			warn!("Dropping map value of property {:?}.", key);
			return;
		}
		Loose::Bool(b) => b.to_string(),
		Loose::Number(n) => number_to_string(n),
		Loose::Text(text) => text,
	};

	let name = if let Some(renamed) = lookup(renamed_attributes, &key) {
		renamed.to_owned()
	} else if is_camel_aria(&key) {
		format!("aria-{}", key[4..].to_ascii_lowercase())
	} else {
		key
	};
	insert(&mut props.attributes, name, Prop::Set(value));
}

/// Formats `n` the way JavaScript's `String(n)` does.
#[must_use]
pub fn number_to_string(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_owned()
	} else if n.is_infinite() {
		let infinity = if n > 0.0 { "Infinity" } else { "-Infinity" };
		infinity.to_owned()
	} else if n == 0.0 {
		"0".to_owned()
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		// `{:e}` writes "1e21" and "1.5e-7". JavaScript signs positive exponents.
		let exponential = format!("{:e}", n);
		match exponential.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
			_ => exponential,
		}
	} else {
		n.to_string()
	}
}

fn is_camel_aria(key: &str) -> bool {
	key.len() > 4 && key.get(..4).map_or(false, |prefix| prefix.eq_ignore_ascii_case("aria")) && key.as_bytes()[4] != b'-'
}

fn insert<T>(dict: &mut Option<Dict<T>>, key: String, value: Prop<T>) {
	dict.get_or_insert_with(Dict::new).insert(key, value);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set(value: &str) -> Prop<String> {
		Prop::Set(value.to_owned())
	}

	#[test]
	fn class_names_are_joined() {
		let props = normalize_properties(vec![("class", Loose::<()>::from("a b")), ("className", "b c".into()), ("class", Loose::Undefined), ("class", "".into())]);
		assert_eq!(props.class_name.as_deref(), Some("a b b c"));
	}

	#[test]
	fn style_text_and_map() {
		let mut map = BTreeMap::new();
		map.insert("marginTop".to_owned(), "1px".to_owned());
		let props = normalize_properties(vec![("style", Loose::<()>::from("color: red")), ("style", map.into())]);
		let style = props.style.unwrap();
		assert_eq!(style.len(), 2);
		assert_eq!(style["color"], set("red"));
		assert_eq!(style["marginTop"], set("1px"));
	}

	#[test]
	fn empty_style_is_not_recorded() {
		let props = normalize_properties(vec![("style", Loose::<()>::from("  ")), ("style", BTreeMap::new().into())]);
		assert_eq!(props.style, None);
	}

	#[test]
	fn listeners() {
		let props = normalize_properties(vec![
			("onClick", Loose::Listener(1)),
			("ONKEYDOWN", Loose::Listener(2)),
			("onDoubleClick", Loose::Undefined),
			("onFocus", Loose::Null),
			("onBlur", Loose::Bool(false)),
		]);
		let listeners = props.listeners.unwrap();
		assert_eq!(listeners.len(), 3);
		assert_eq!(listeners["click"], Prop::Set(1));
		assert_eq!(listeners["keydown"], Prop::Set(2));
		assert_eq!(listeners["dblclick"], Prop::Clear);
		assert_eq!(props.attributes, None);
	}

	#[test]
	fn inline_handler_source_is_an_attribute() {
		let props = normalize_properties(vec![("onClick", Loose::<()>::from("go()"))]);
		assert_eq!(props.listeners, None);
		assert_eq!(props.attributes.unwrap()["onclick"], set("go()"));
	}

	#[test]
	fn unknown_event_keys_with_listeners() {
		let props = normalize_properties(vec![("onMyEvent", Loose::Listener(5)), ("handler", Loose::Listener(6))]);
		assert_eq!(props.listeners.unwrap().into_iter().collect::<Vec<_>>(), vec![("myevent".to_owned(), Prop::Set(5))]);
		assert_eq!(props.attributes, None);
	}

	#[test]
	fn data() {
		let mut map = BTreeMap::new();
		map.insert("itemId".to_owned(), "3".to_owned());
		let props = normalize_properties(vec![
			("data-user-id", Loose::<()>::from("7")),
			("data-flag", true.into()),
			("data-gone", Loose::Undefined),
			("dataset", map.into()),
			("database", "main".into()),
		]);
		let data = props.data.unwrap();
		assert_eq!(data.len(), 3);
		assert_eq!(data["userId"], set("7"));
		assert_eq!(data["flag"], set("true"));
		assert_eq!(data["itemId"], set("3"));
		assert_eq!(props.attributes.unwrap()["database"], set("main"));
	}

	#[test]
	fn attributes() {
		let props = normalize_properties(vec![
			("id", Loose::<()>::from("x")),
			("tabIndex", 0.into()),
			("xlinkHref", "#a".into()),
			("htmlFor", "name".into()),
			("ariaDescribedBy", "hint".into()),
			("aria-hidden", true.into()),
			("title", Loose::Undefined),
			("lang", Loose::Null),
			("width", 1.5.into()),
		]);
		let attributes = props.attributes.unwrap();
		assert_eq!(attributes.len(), 7);
		assert_eq!(attributes["id"], set("x"));
		assert_eq!(attributes["tabindex"], set("0"));
		assert_eq!(attributes["xlink:href"], set("#a"));
		assert_eq!(attributes["for"], set("name"));
		assert_eq!(attributes["aria-describedby"], set("hint"));
		assert_eq!(attributes["aria-hidden"], set("true"));
		assert_eq!(attributes["width"], set("1.5"));
	}

	#[test]
	fn numbers_format_like_javascript() {
		assert_eq!(number_to_string(0.0), "0");
		assert_eq!(number_to_string(-0.0), "0");
		assert_eq!(number_to_string(42.0), "42");
		assert_eq!(number_to_string(-1.5), "-1.5");
		assert_eq!(number_to_string(0.000_001), "0.000001");
		assert_eq!(number_to_string(1.5e-7), "1.5e-7");
		assert_eq!(number_to_string(1e21), "1e+21");
		assert_eq!(number_to_string(-2.5e30), "-2.5e+30");
		assert_eq!(number_to_string(f64::INFINITY), "Infinity");
		assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
		assert_eq!(number_to_string(f64::NAN), "NaN");

		let props = normalize_properties(vec![("width", Loose::<()>::Number(f64::INFINITY)), ("height", 1e21.into())]);
		let attributes = props.attributes.unwrap();
		assert_eq!(attributes["width"], set("Infinity"));
		assert_eq!(attributes["height"], set("1e+21"));
	}

	#[test]
	fn custom_tables() {
		let props = normalize_properties_with(vec![("onTap", Loose::Listener(()),), ("fooBar", "1".into())], &[("ontap", "pointerup")], &[("fooBar", "foo-bar")]);
		assert!(props.listeners.unwrap().contains_key("pointerup"));
		assert!(props.attributes.unwrap().contains_key("foo-bar"));
	}
}
