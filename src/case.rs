//! Conversion between hyphen-case (CSS, `data-*` attributes) and camelCase (`style` and `dataset` keys).
//!
//! These are deliberately simple and not inverse to each other in general:
//! consecutive capitals, leading capitals and digits after a separator don't survive a round trip.

/// Inserts `-` before every ASCII upper-case letter, then lower-cases the whole string.
///
/// ```
/// assert_eq!(dom_props::to_hyphen_case("fontSize"), "font-size");
/// assert_eq!(dom_props::to_hyphen_case("WebkitTransform"), "-webkit-transform");
/// ```
#[must_use]
pub fn to_hyphen_case(s: &str) -> String {
	to_hyphen_case_with(s, "-")
}

/// Like [`to_hyphen_case`], but with a custom `delimiter`.
#[must_use]
pub fn to_hyphen_case_with(s: &str, delimiter: &str) -> String {
	let mut hyphenated = String::with_capacity(s.len() + 4);
	for c in s.chars() {
		if c.is_ascii_uppercase() {
			hyphenated.push_str(delimiter);
		}
		hyphenated.push(c);
	}
	hyphenated.to_lowercase()
}

/// Splits on `-` and upper-cases the first letter of every segment but the first.
///
/// ```
/// assert_eq!(dom_props::to_camel_case("font-size"), "fontSize");
/// assert_eq!(dom_props::to_camel_case("a--b"), "aB");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
	to_camel_case_with(s, "-")
}

/// Like [`to_camel_case`], but splitting on `splitter`.
#[must_use]
pub fn to_camel_case_with(s: &str, splitter: &str) -> String {
	let mut segments = s.split(splitter);
	let mut camel = String::with_capacity(s.len());
	if let Some(first) = segments.next() {
		camel.push_str(first);
	}
	for segment in segments {
		let mut chars = segment.chars();
		if let Some(initial) = chars.next() {
			camel.extend(initial.to_uppercase());
			camel.push_str(chars.as_str());
		}
	}
	camel
}
