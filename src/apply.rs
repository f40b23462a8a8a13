use crate::{
	diff::{diff_dictionary, diff_token_set},
	host::Element,
	props::{Dict, Prop, PropertyDiff, PropertySet},
	tables::{is_boolean_attribute, is_direct_property, is_falsy_value, is_protected},
};
use std::collections::BTreeMap;
use tracing::{instrument, trace, trace_span, warn};

/// Computes the changes from `old` to `new` without applying them anywhere.
///
/// Equivalent to [`apply_properties`] without an element.
#[must_use]
pub fn diff_properties<L: Clone + PartialEq>(new: &PropertySet<L>, old: &PropertySet<L>) -> Option<PropertyDiff<L>> {
	let diff = PropertyDiff {
		style: diff_optional(old.style.as_ref(), new.style.as_ref()),
		data: diff_optional(old.data.as_ref(), new.data.as_ref()),
		class_name: diff_token_set(old.class_name.as_deref().unwrap_or(""), new.class_name.as_deref().unwrap_or("")),
		attributes: diff_optional(old.attributes.as_ref(), new.attributes.as_ref()),
		listeners: diff_optional(old.listeners.as_ref(), new.listeners.as_ref()),
	};

	if diff.is_empty() {
		None
	} else {
		Some(diff)
	}
}

/// Updates `element` from `old` to `new`, touching only what changed, and returns the changes.
///
/// With `element` set to [`None`], this only computes the changes.
///
/// Properties of the element that neither `old` nor `new` mention are left alone.
/// Entries in [`PROTECTED_ATTRIBUTES`](`crate::tables::PROTECTED_ATTRIBUTES`) are never applied
/// (with a warning if `warn` is set), but are still part of the returned diff.
///
/// ```
/// use dom_props::{apply_properties, MemoryElement, PropertySet};
///
/// let mut button = MemoryElement::<()>::new("button").with_attribute("class", "a");
/// let old = PropertySet::new().with_class_name("a");
/// let new = PropertySet::new().with_class_name("b").with_attribute("disabled", "false");
///
/// let diff = apply_properties(Some(&mut button), &new, &old, true).unwrap();
/// assert_eq!(diff.class_name.unwrap().len(), 2);
/// assert_eq!(button.attribute("class"), Some("b"));
/// assert!(!button.has_attribute("disabled"));
/// ```
#[instrument(skip(element, new, old))]
pub fn apply_properties<E: Element + ?Sized>(element: Option<&mut E>, new: &PropertySet<E::Listener>, old: &PropertySet<E::Listener>, warn: bool) -> Option<PropertyDiff<E::Listener>> {
	let diff = diff_properties(new, old)?;

	let element = match element {
		Some(element) => element,
		None => {
			trace!("No element given. Returning the diff only.");
			return Some(diff);
		}
	};

	if let Some(style) = &diff.style {
		let span = trace_span!("Applying style", count = style.len());
		let _enter = span.enter();
		apply_style(element, style);
	}
	if let Some(data) = &diff.data {
		let span = trace_span!("Applying dataset", count = data.len());
		let _enter = span.enter();
		apply_data(element, data);
	}
	if let Some(class_name) = &diff.class_name {
		let span = trace_span!("Applying class name", count = class_name.len());
		let _enter = span.enter();
		apply_class_name(element, class_name);
	}
	if let Some(attributes) = &diff.attributes {
		let span = trace_span!("Applying attributes", count = attributes.len());
		let _enter = span.enter();
		apply_attributes(element, attributes, warn);
	}
	if let Some(listeners) = &diff.listeners {
		let span = trace_span!("Applying listeners", count = listeners.len());
		let _enter = span.enter();
		apply_listeners(element, listeners, old.listeners.as_ref());
	}

	Some(diff)
}

/// Skips the comparison if neither side mentions the category.
fn diff_optional<V: PartialEq + Clone>(orig: Option<&Dict<V>>, update: Option<&Dict<V>>) -> Option<Dict<V>> {
	match (orig, update) {
		(None, None) => None,
		(Some(orig), Some(update)) => diff_dictionary(orig, update),
		(Some(orig), None) => diff_dictionary(orig, &Dict::new()),
		(None, Some(update)) => diff_dictionary(&Dict::new(), update),
	}
}

fn apply_style<E: Element + ?Sized>(element: &mut E, style: &Dict<String>) {
	for (name, value) in style {
		match value {
			Prop::Set(value) => element.set_style_property(name, value),
			Prop::Clear => element.remove_style_property(name),
		}
	}
}

fn apply_data<E: Element + ?Sized>(element: &mut E, data: &Dict<String>) {
	for (key, value) in data {
		match value {
			Prop::Set(value) => element.set_data(key, value),
			Prop::Clear => element.delete_data(key),
		}
	}
}

fn apply_class_name<E: Element + ?Sized>(element: &mut E, class_name: &BTreeMap<String, bool>) {
	for (token, &added) in class_name {
		if added {
			element.add_class(token)
		} else {
			element.remove_class(token)
		}
	}
}

fn apply_attributes<E: Element + ?Sized>(element: &mut E, attributes: &Dict<String>, warn: bool) {
	for (name, value) in attributes {
		if is_protected(name) {
			if warn {
				if cfg!(feature = "dangerous-logging") {
					warn!("Refusing to apply protected attribute {:?} (value {:?}), since it would replace the element's content.", name, value)
				} else {
					warn!("Refusing to apply protected attribute {:?}, since it would replace the element's content.", name)
				}
			}
			continue;
		}

		if is_direct_property(name) {
			element.set_property(name, value.as_set().map_or("", String::as_str));
		} else if is_boolean_attribute(name) {
			match value.as_set() {
				Some(value) if !is_falsy_value(value) => element.set_attribute(name, value),
				_ => element.remove_attribute(name),
			}
		} else {
			match value {
				Prop::Set(value) => element.set_attribute(name, value),
				Prop::Clear => element.remove_attribute(name),
			}
		}
	}
}

fn apply_listeners<E: Element + ?Sized>(element: &mut E, listeners: &Dict<E::Listener>, old: Option<&Dict<E::Listener>>) {
	for (event, listener) in listeners {
		if let Some(previous) = old.and_then(|old| old.get(event)).and_then(Prop::as_set) {
			element.remove_event_listener(event, previous);
		}
		if let Prop::Set(listener) = listener {
			element.add_event_listener(event, listener);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_changes() {
		let props = PropertySet::<()>::new().with_class_name("a").with_style("color", "red").with_attribute("id", "x");
		assert_eq!(diff_properties(&props, &props.clone()), None);
		assert_eq!(diff_properties::<()>(&PropertySet::new(), &PropertySet::new()), None);
	}

	#[test]
	fn empty_categories_are_skipped() {
		let diff = diff_properties::<()>(&PropertySet::new().with_attribute("id", "x"), &PropertySet::new()).unwrap();
		assert_eq!(diff.style, None);
		assert_eq!(diff.data, None);
		assert_eq!(diff.class_name, None);
		assert_eq!(diff.listeners, None);
		assert_eq!(diff.attributes.unwrap()["id"], Prop::Set("x".to_owned()));
	}

	#[test]
	fn dropped_category_is_cleared() {
		let old = PropertySet::<()>::new().with_style("color", "red").with_data("id", "1");
		let diff = diff_properties(&PropertySet::new(), &old).unwrap();
		assert_eq!(diff.style.unwrap()["color"], Prop::Clear);
		assert_eq!(diff.data.unwrap()["id"], Prop::Clear);
	}
}
