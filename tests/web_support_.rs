#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlBodyElement};

static mut LOG_INITIALIZED: bool = false;

pub fn init_log() {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}
}

pub fn document() -> Document {
	window().unwrap().document().unwrap()
}

pub fn body() -> HtmlBodyElement {
	document().body().unwrap().dyn_into::<HtmlBodyElement>().unwrap()
}

/// Creates a `tag` element and attaches it to the body.
pub fn create(tag: &str) -> web_sys::Element {
	let element = document().create_element(tag).unwrap();
	body().append_child(&element).unwrap();
	element
}
