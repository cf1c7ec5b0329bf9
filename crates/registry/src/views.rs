//! Views of a catalog restricted to one object or behavior type.

use crate::catalog::{Catalog, CatalogView};

/// Collects the entries of `catalog` whose key starts with `type_name`.
///
/// This is a linear scan that keeps the catalog's order. No match yields an
/// empty view.
pub fn with_prefix<'a, T>(catalog: &'a Catalog<T>, type_name: &str) -> CatalogView<'a, T> {
	catalog
		.iter()
		.filter(|(key, _)| key.starts_with(type_name))
		.map(|(key, record)| (key.as_str(), record))
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn catalog_of(keys: &[&str]) -> Catalog<usize> {
		keys.iter().enumerate().map(|(i, key)| (key.to_string(), i)).collect()
	}

	#[test]
	fn keeps_prefixed_entries_in_order() {
		let catalog = catalog_of(&["MyExt::Sprite::Flip", "MyExt::Jump", "MyExt::Sprite::Play", "Other::Sprite::Flip"]);
		let view = with_prefix(&catalog, "MyExt::Sprite");

		let keys: Vec<&str> = view.keys().copied().collect();
		assert_eq!(keys, ["MyExt::Sprite::Flip", "MyExt::Sprite::Play"]);
		assert_eq!(view["MyExt::Sprite::Play"], &2);
	}

	#[test]
	fn no_match_is_empty() {
		let catalog = catalog_of(&["MyExt::Jump"]);
		assert!(with_prefix(&catalog, "MyExt::Text").is_empty());
	}

	proptest! {
		#[test]
		fn view_is_the_prefixed_subset(keys in proptest::collection::vec("[AB]{1,3}(::[ab]{1,2})?", 0..16), prefix in "[AB]{1,2}") {
			let catalog: Catalog<()> = keys.iter().map(|key| (key.clone(), ())).collect();
			let view = with_prefix(&catalog, &prefix);

			let expected: Vec<&str> = catalog.keys().map(String::as_str).filter(|key| key.starts_with(prefix.as_str())).collect();
			let actual: Vec<&str> = view.keys().copied().collect();
			prop_assert_eq!(actual, expected);
		}
	}
}
