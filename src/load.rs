use crate::{
	case::to_camel_case,
	css::parse_inline_style,
	host::Element,
	props::{set_all, Dict, Prop, PropertySet},
};
use tracing::trace;

/// Reads the current class name, inline style, dataset and other attributes of `element`.
///
/// Listeners can't be read back and are always [`None`].
/// If the element can't enumerate its attributes, the result is empty.
pub fn read_element_properties<E: Element + ?Sized>(element: &E) -> PropertySet<E::Listener> {
	let mut props = PropertySet::new();
	let names = match element.attribute_names() {
		Some(names) => names,
		None => {
			trace!("Element can't enumerate attributes.");
			return props;
		}
	};

	for name in names {
		let value = element.get_attribute(&name);
		if name == "style" {
			if let Some(style) = value.as_deref().and_then(|text| parse_inline_style(text, true)) {
				props.style = Some(set_all(style));
			}
		} else if name == "class" {
			props.class_name = Some(value.unwrap_or_default());
		} else {
			match name.strip_prefix("data-").map(to_camel_case) {
				Some(key) => load_attribute(&mut props.data, key, value),
				None => load_attribute(&mut props.attributes, name, value),
			}
		}
	}
	props
}

fn load_attribute(dict: &mut Option<Dict<String>>, name: String, value: Option<String>) {
	dict.get_or_insert_with(Dict::new).insert(name, Prop::from(value));
}
