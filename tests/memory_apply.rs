use dom_props::{apply_properties, diff_properties, read_element_properties, Element as _, MemoryElement, Prop, PropertySet};

fn set(value: &str) -> Prop<String> {
	Prop::Set(value.to_owned())
}

#[test]
fn create_update_remove() {
	let mut element = MemoryElement::<u8>::new("div");

	let first = PropertySet::new()
		.with_class_name("card active")
		.with_style("backgroundColor", "red")
		.with_data("userId", "7")
		.with_attribute("id", "main")
		.with_listener("click", 1);
	let diff = apply_properties(Some(&mut element), &first, &PropertySet::new(), true).unwrap();
	assert_eq!(diff.class_name.unwrap().len(), 2);
	assert_eq!(element.attribute("class"), Some("active card"));
	assert_eq!(element.attribute("style"), Some("background-color: red;"));
	assert_eq!(element.attribute("data-user-id"), Some("7"));
	assert_eq!(element.attribute("id"), Some("main"));
	assert_eq!(element.listeners("click").copied().collect::<Vec<_>>(), vec![1]);

	let second = PropertySet::new()
		.with_class_name("card")
		.with_style("backgroundColor", "blue")
		.with_attribute("id", "main")
		.with_listener("click", 2);
	let diff = apply_properties(Some(&mut element), &second, &first, true).unwrap();
	assert_eq!(diff.attributes, None);
	assert_eq!(diff.data.unwrap()["userId"], Prop::Clear);
	assert_eq!(element.attribute("class"), Some("card"));
	assert_eq!(element.attribute("style"), Some("background-color: blue;"));
	assert!(!element.has_attribute("data-user-id"));
	assert_eq!(element.listeners("click").copied().collect::<Vec<_>>(), vec![2]);

	let diff = apply_properties(Some(&mut element), &PropertySet::new(), &second, true).unwrap();
	assert_eq!(diff.listeners.unwrap()["click"], Prop::Clear);
	assert_eq!(element.attribute("class"), Some(""));
	assert!(!element.has_attribute("style"));
	assert!(!element.has_attribute("id"));
	assert_eq!(element.listener_count(), 0);
}

#[test]
fn identical_sets_touch_nothing() {
	let props = PropertySet::<u8>::new().with_class_name("a").with_attribute("id", "x");
	// The element deliberately disagrees with `props`, to show that nothing is written.
	let mut element = MemoryElement::new("div").with_attribute("id", "other");
	assert_eq!(apply_properties(Some(&mut element), &props, &props, true), None);
	assert_eq!(element.attribute("id"), Some("other"));
	assert!(!element.has_attribute("class"));
}

#[test]
fn unmanaged_properties_are_left_alone() {
	let mut element = MemoryElement::<u8>::new("div").with_attribute("class", "external").with_attribute("title", "external").with_attribute("style", "color: red");
	let props = PropertySet::new().with_class_name("managed").with_style("margin", "0");
	apply_properties(Some(&mut element), &props, &PropertySet::new(), true);
	assert_eq!(element.attribute("class"), Some("external managed"));
	assert_eq!(element.attribute("title"), Some("external"));
	assert_eq!(element.attribute("style"), Some("color: red; margin: 0;"));

	apply_properties(Some(&mut element), &PropertySet::new(), &props, true);
	assert_eq!(element.attribute("class"), Some("external"));
	assert_eq!(element.attribute("style"), Some("color: red;"));
}

#[test]
fn protected_attributes_are_skipped_but_reported() {
	let mut element = MemoryElement::<u8>::new("div").with_text("content");
	let props = PropertySet::new().with_attribute("innerHTML", "<b>x</b>").with_attribute("textContent", "y");
	let before = element.clone();

	let diff = apply_properties(Some(&mut element), &props, &PropertySet::new(), true).unwrap();
	let attributes = diff.attributes.unwrap();
	assert_eq!(attributes["innerHTML"], set("<b>x</b>"));
	assert_eq!(attributes["textContent"], set("y"));
	assert_eq!(element, before);

	// Without the warning, too.
	assert!(apply_properties(Some(&mut element), &props, &PropertySet::new(), false).is_some());
	assert_eq!(element, before);
}

#[test]
fn boolean_like_attributes() {
	let mut element = MemoryElement::<u8>::new("input").with_attribute("disabled", "");

	apply_properties(Some(&mut element), &PropertySet::new().with_attribute("disabled", "false"), &PropertySet::new(), true);
	assert!(!element.has_attribute("disabled"));

	let yes = PropertySet::new().with_attribute("disabled", "yes");
	apply_properties(Some(&mut element), &yes, &PropertySet::new(), true);
	assert_eq!(element.attribute("disabled"), Some("yes"));

	for falsy in &["0", ""] {
		let mut element = element.clone();
		apply_properties(Some(&mut element), &PropertySet::new().with_attribute("disabled", *falsy), &yes, true);
		assert!(!element.has_attribute("disabled"));
	}

	apply_properties(Some(&mut element), &PropertySet::new(), &yes, true);
	assert!(!element.has_attribute("disabled"));
}

#[test]
fn value_is_assigned_as_property() {
	let mut element = MemoryElement::<u8>::new("input");
	let typed = PropertySet::new().with_attribute("value", "typed");

	apply_properties(Some(&mut element), &typed, &PropertySet::new(), true);
	assert_eq!(element.property("value"), Some("typed"));
	assert!(!element.has_attribute("value"));

	apply_properties(Some(&mut element), &PropertySet::new(), &typed, true);
	assert_eq!(element.property("value"), Some(""));
}

#[test]
fn cleared_listener_is_removed() {
	let mut element = MemoryElement::<u8>::new("button");
	let on = PropertySet::new().with_listener("click", 1).with_listener("focus", 2);
	apply_properties(Some(&mut element), &on, &PropertySet::new(), true);
	assert_eq!(element.listener_count(), 2);

	let off = PropertySet::new().without_listener("click").with_listener("focus", 2);
	let diff = apply_properties(Some(&mut element), &off, &on, true).unwrap();
	assert_eq!(diff.listeners.unwrap().len(), 1);
	assert_eq!(element.listeners("click").count(), 0);
	assert_eq!(element.listeners("focus").copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn without_element_only_diffs() {
	let new = PropertySet::<u8>::new().with_class_name("b c").with_data("x", "1");
	let old = PropertySet::new().with_class_name("a b");
	let diff = apply_properties::<MemoryElement<u8>>(None, &new, &old, true).unwrap();
	assert_eq!(Some(diff), diff_properties(&new, &old));
}

#[test]
fn read_back_after_apply() {
	let mut element = MemoryElement::<u8>::new("a");
	let props = PropertySet::new()
		.with_class_name("link")
		.with_style("fontWeight", "bold")
		.with_data("trackingId", "42")
		.with_attribute("href", "/home")
		.with_attribute("aria-current", "page");
	apply_properties(Some(&mut element), &props, &PropertySet::new(), true);

	let read = read_element_properties(&element);
	assert_eq!(read, props);
	assert_eq!(element.tag_name().as_deref(), Some("a"));
}

#[test]
fn custom_style_properties_round_trip() {
	let mut element = MemoryElement::<u8>::new("div");
	let props = PropertySet::new().with_style("--main-color", "red").with_style("fontSize", "1em");
	apply_properties(Some(&mut element), &props, &PropertySet::new(), true);
	assert_eq!(element.attribute("style"), Some("--main-color: red; font-size: 1em;"));
	assert_eq!(read_element_properties(&element).style, props.style);

	apply_properties(Some(&mut element), &PropertySet::new(), &props, true);
	assert!(!element.has_attribute("style"));
}
