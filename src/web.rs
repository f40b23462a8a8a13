//! [`Element`] for the browser DOM.

use crate::{case::to_hyphen_case, css::is_custom_property, host::Element};
use js_sys::{Function, Reflect};
use tracing::{error, trace};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, DomStringMap, HtmlElement, SvgElement};

impl Element for web_sys::Element {
	type Listener = Function;

	fn tag_name(&self) -> Option<String> {
		Some(web_sys::Element::tag_name(self))
	}

	fn text_content(&self) -> Option<String> {
		web_sys::Node::text_content(self)
	}

	fn attribute_names(&self) -> Option<Vec<String>> {
		Some(web_sys::Element::get_attribute_names(self).iter().filter_map(|name| name.as_string()).collect())
	}

	fn get_attribute(&self, name: &str) -> Option<String> {
		web_sys::Element::get_attribute(self, name)
	}

	fn set_attribute(&mut self, name: &str, value: &str) {
		trace!("Setting attribute {:?}.", name);
		if let Err(error) = web_sys::Element::set_attribute(self, name, value) {
			if cfg!(feature = "dangerous-logging") {
				error!("Failed to set attribute {:?}={:?}: {:?}", name, value, error)
			} else {
				error!("Failed to set attribute {:?}: {:?}", name, error)
			}
		}
	}

	fn remove_attribute(&mut self, name: &str) {
		trace!("Removing attribute {:?}.", name);
		if let Err(error) = web_sys::Element::remove_attribute(self, name) {
			error!("Failed to remove attribute {:?}: {:?}", name, error)
		}
	}

	fn set_style_property(&mut self, name: &str, value: &str) {
		match inline_style(self) {
			Some(style) => {
				if let Err(error) = write_style(&style, name, value) {
					error!("Failed to set style property {:?}: {:?}", name, error)
				}
			}
			None => error!("Can't set style property {:?} on <{}>: No inline style.", name, web_sys::Element::tag_name(self)),
		}
	}

	fn remove_style_property(&mut self, name: &str) {
		match inline_style(self) {
			Some(style) => {
				if let Err(error) = write_style(&style, name, "") {
					error!("Failed to remove style property {:?}: {:?}", name, error)
				}
			}
			None => error!("Can't remove style property {:?} from <{}>: No inline style.", name, web_sys::Element::tag_name(self)),
		}
	}

	fn set_data(&mut self, key: &str, value: &str) {
		match dataset(self) {
			Some(dataset) => {
				if let Err(error) = Reflect::set(&dataset, &JsValue::from_str(key), &JsValue::from_str(value)) {
					error!("Failed to set dataset entry {:?}: {:?}", key, error)
				}
			}
			None => Element::set_attribute(self, &data_attribute_name(key), value),
		}
	}

	fn delete_data(&mut self, key: &str) {
		match dataset(self) {
			Some(dataset) => {
				if let Err(error) = Reflect::delete_property(&dataset, &JsValue::from_str(key)) {
					error!("Failed to delete dataset entry {:?}: {:?}", key, error)
				}
			}
			None => Element::remove_attribute(self, &data_attribute_name(key)),
		}
	}

	fn add_class(&mut self, token: &str) {
		if let Err(error) = self.class_list().add_1(token) {
			error!("Failed to add class {:?}: {:?}", token, error)
		}
	}

	fn remove_class(&mut self, token: &str) {
		if let Err(error) = self.class_list().remove_1(token) {
			error!("Failed to remove class {:?}: {:?}", token, error)
		}
	}

	fn set_property(&mut self, name: &str, value: &str) {
		trace!("Assigning property {:?}.", name);
		if let Err(error) = Reflect::set(self.unchecked_ref::<JsValue>(), &JsValue::from_str(name), &JsValue::from_str(value)) {
			error!("Failed to assign property {:?}: {:?}", name, error)
		}
	}

	fn add_event_listener(&mut self, event: &str, listener: &Function) {
		if let Err(error) = self.add_event_listener_with_callback(event, listener) {
			error!("Failed to add event listener {:?}: {:?}", event, error)
		}
	}

	fn remove_event_listener(&mut self, event: &str, listener: &Function) {
		if let Err(error) = self.remove_event_listener_with_callback(event, listener) {
			error!("Failed to remove event listener {:?}: {:?}", event, error)
		}
	}
}

fn inline_style(element: &web_sys::Element) -> Option<CssStyleDeclaration> {
	if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
		Some(html_element.style())
	} else {
		element.dyn_ref::<SvgElement>().map(SvgElement::style)
	}
}

fn dataset(element: &web_sys::Element) -> Option<DomStringMap> {
	if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
		Some(html_element.dataset())
	} else {
		element.dyn_ref::<SvgElement>().map(SvgElement::dataset)
	}
}

/// Writes `key` on the live style object, where an empty `value` clears it.
///
/// camelCase keys (`cssFloat`, `msTransform`) go through the object's own properties, so the browser maps them to CSS names.
/// Custom properties (`--*`) only exist as CSS names.
fn write_style(style: &CssStyleDeclaration, key: &str, value: &str) -> Result<(), JsValue> {
	if is_custom_property(key) {
		if value.is_empty() {
			style.remove_property(key).map(drop)
		} else {
			style.set_property(key, value)
		}
	} else {
		Reflect::set(style, &JsValue::from_str(key), &JsValue::from_str(value)).map(drop)
	}
}

fn data_attribute_name(key: &str) -> String {
	format!("data-{}", to_hyphen_case(key))
}
