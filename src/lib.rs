#![doc(html_root_url = "https://docs.rs/dom-props/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Diffing and application of DOM element properties.
//!
//! A [`PropertySet`] bundles the class name, inline style, dataset, attributes and event listeners of one element.
//! [`apply_properties`] computes the difference between two of them and applies only that difference to a live [`Element`],
//! [`read_element_properties`] goes the other way, and [`serialize_to_html`] renders a set as markup without touching any DOM at all.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod apply;
pub mod case;
pub mod css;
pub mod diff;
pub mod host;
pub mod load;
pub mod memory;
pub mod normalize;
pub mod props;
pub mod serialize;
pub mod tables;
mod web;

pub use apply::{apply_properties, diff_properties};
pub use case::{to_camel_case, to_hyphen_case};
pub use css::parse_inline_style;
pub use diff::{diff_dictionary, diff_token_set};
pub use host::Element;
pub use load::read_element_properties;
pub use memory::MemoryElement;
pub use normalize::{normalize_properties, normalize_properties_with, Loose};
pub use props::{Dict, Prop, PropertyDiff, PropertySet};
pub use serialize::{serialize_element_to_html, serialize_to_html, Children};
