use std::collections::BTreeMap;

/// A value that is present in a property map.
///
/// A key that is missing from a [`Dict`] altogether is *unset*: it is left alone when diffing.
/// A key that maps to [`Prop::Clear`] was explicitly cleared and is removed from the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop<T> {
	Clear,
	Set(T),
}
impl<T> Prop<T> {
	#[must_use]
	pub fn as_set(&self) -> Option<&T> {
		match self {
			Prop::Clear => None,
			Prop::Set(value) => Some(value),
		}
	}

	#[must_use]
	pub fn into_set(self) -> Option<T> {
		match self {
			Prop::Clear => None,
			Prop::Set(value) => Some(value),
		}
	}

	#[must_use]
	pub fn is_set(&self) -> bool {
		matches!(self, Prop::Set(_))
	}
}
impl<T> From<Option<T>> for Prop<T> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Prop::Clear, Prop::Set)
	}
}

/// A flat, string-keyed property map.
pub type Dict<T> = BTreeMap<String, Prop<T>>;

/// Converts a plain map into a [`Dict`] where every entry is [`Prop::Set`].
pub fn set_all<T>(map: impl IntoIterator<Item = (String, T)>) -> Dict<T> {
	map.into_iter().map(|(key, value)| (key, Prop::Set(value))).collect()
}

/// The normalized properties of one element.
///
/// `L` is the host's event handler type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySet<L> {
	/// Space-delimited class names. Diffed as an unordered token set.
	pub class_name: Option<String>,
	/// camelCase CSS property names to values.
	pub style: Option<Dict<String>>,
	/// camelCase dataset keys, mirroring `data-*` attributes.
	pub data: Option<Dict<String>>,
	pub attributes: Option<Dict<String>>,
	/// Event names without the `on` prefix.
	pub listeners: Option<Dict<L>>,
}
impl<L> Default for PropertySet<L> {
	fn default() -> Self {
		Self {
			class_name: None,
			style: None,
			data: None,
			attributes: None,
			listeners: None,
		}
	}
}
impl<L> PropertySet<L> {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.class_name.as_deref().map_or(true, str::is_empty)
			&& self.style.as_ref().map_or(true, Dict::is_empty)
			&& self.data.as_ref().map_or(true, Dict::is_empty)
			&& self.attributes.as_ref().map_or(true, Dict::is_empty)
			&& self.listeners.as_ref().map_or(true, Dict::is_empty)
	}

	#[must_use]
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	#[must_use]
	pub fn with_style(mut self, name: impl Into<String>, value: impl Into<Prop<String>>) -> Self {
		self.style.get_or_insert_with(Dict::new).insert(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn with_data(mut self, name: impl Into<String>, value: impl Into<Prop<String>>) -> Self {
		self.data.get_or_insert_with(Dict::new).insert(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Prop<String>>) -> Self {
		self.attributes.get_or_insert_with(Dict::new).insert(name.into(), value.into());
		self
	}

	#[must_use]
	pub fn with_listener(mut self, event: impl Into<String>, handler: L) -> Self {
		self.listeners.get_or_insert_with(Dict::new).insert(event.into(), Prop::Set(handler));
		self
	}

	#[must_use]
	pub fn without_listener(mut self, event: impl Into<String>) -> Self {
		self.listeners.get_or_insert_with(Dict::new).insert(event.into(), Prop::Clear);
		self
	}
}

impl From<&str> for Prop<String> {
	fn from(value: &str) -> Self {
		Prop::Set(value.to_owned())
	}
}
impl From<String> for Prop<String> {
	fn from(value: String) -> Self {
		Prop::Set(value)
	}
}

/// What [`apply_properties`](`crate::apply_properties`) changed (or would change), per category.
///
/// Each field is [`None`] if that category is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDiff<L> {
	/// Class tokens: `true` if added, `false` if removed.
	pub class_name: Option<BTreeMap<String, bool>>,
	pub style: Option<Dict<String>>,
	pub data: Option<Dict<String>>,
	/// Includes protected attributes that were skipped during application.
	pub attributes: Option<Dict<String>>,
	pub listeners: Option<Dict<L>>,
}
impl<L> Default for PropertyDiff<L> {
	fn default() -> Self {
		Self {
			class_name: None,
			style: None,
			data: None,
			attributes: None,
			listeners: None,
		}
	}
}
impl<L> PropertyDiff<L> {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.class_name.is_none() && self.style.is_none() && self.data.is_none() && self.attributes.is_none() && self.listeners.is_none()
	}
}
