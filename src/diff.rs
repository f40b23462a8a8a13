use crate::props::{Dict, Prop};
use hashbrown::HashSet;
use std::collections::BTreeMap;

/// Computes the entries that change from `orig` to `update`.
///
/// - A key that is set in `orig` but missing or cleared in `update` maps to [`Prop::Clear`].
/// - A key whose value differs maps to its value in `update`.
/// - Unchanged keys are omitted.
///
/// Missing and cleared keys compare equal.
///
/// Returns [`None`] rather than an empty map if nothing changed.
#[must_use]
pub fn diff_dictionary<V: PartialEq + Clone>(orig: &Dict<V>, update: &Dict<V>) -> Option<Dict<V>> {
	let mut diff = Dict::new();

	for (key, value) in orig {
		if value.is_set() && update.get(key).map_or(true, |update| !update.is_set()) {
			diff.insert(key.clone(), Prop::Clear);
		}
	}

	for (key, value) in update {
		let previous = orig.get(key).and_then(Prop::as_set);
		if previous != value.as_set() {
			diff.insert(key.clone(), value.clone());
		}
	}

	if diff.is_empty() {
		None
	} else {
		Some(diff)
	}
}

/// Diffs two space-delimited token lists (like `class` attribute values) as unordered sets.
///
/// Tokens only in `update` map to `true`, tokens only in `orig` map to `false`.
///
/// Returns [`None`] if the sets are equal, which includes both being blank.
///
/// ```
/// let diff = dom_props::diff_token_set("a b", "b c").unwrap();
/// assert_eq!(diff.into_iter().collect::<Vec<_>>(), vec![("a".to_owned(), false), ("c".to_owned(), true)]);
/// ```
#[must_use]
pub fn diff_token_set(orig: &str, update: &str) -> Option<BTreeMap<String, bool>> {
	if orig == update {
		return None;
	}

	let orig_tokens: HashSet<&str> = orig.split_whitespace().collect();
	let update_tokens: HashSet<&str> = update.split_whitespace().collect();

	let diff: BTreeMap<String, bool> = orig_tokens
		.difference(&update_tokens)
		.map(|&removed| (removed.to_owned(), false))
		.chain(update_tokens.difference(&orig_tokens).map(|&added| (added.to_owned(), true)))
		.collect();

	if diff.is_empty() {
		None
	} else {
		Some(diff)
	}
}
