//! Per-category metadata catalogs.
//!
//! A [`Catalog`] maps capability keys to records in insertion order. Keys are
//! unique within a catalog: inserting an existing key replaces the record in
//! place (last write wins) without raising an error.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use trellis_metadata::{BehaviorMetadata, EventMetadata, ExpressionMetadata, InstructionMetadata, ObjectMetadata};

/// Ordered mapping from capability key to metadata record.
pub type Catalog<T> = IndexMap<String, T, FxBuildHasher>;

/// Borrowed subset of a [`Catalog`], in the catalog's order.
pub type CatalogView<'a, T> = IndexMap<&'a str, &'a T, FxBuildHasher>;

/// Capability category, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Condition,
	Action,
	Expression,
	StrExpression,
	Object,
	Behavior,
	Event,
}

impl Category {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Condition => "condition",
			Self::Action => "action",
			Self::Expression => "expression",
			Self::StrExpression => "str_expression",
			Self::Object => "object",
			Self::Behavior => "behavior",
			Self::Event => "event",
		}
	}

	/// Returns true if the category only exists in the IDE flavor.
	pub const fn is_ide_only(self) -> bool {
		!matches!(self, Self::Object | Self::Behavior)
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Inserts `record` under `key` and returns the stored record.
///
/// An existing record under `key` is replaced and keeps its position.
/// Replacement and empty keys are accepted as-is; both are logged since an
/// empty key produces a record no lookup will ever reach.
pub(crate) fn insert<'a, T>(catalog: &'a mut Catalog<T>, category: Category, key: &str, record: T) -> &'a mut T {
	if key.is_empty() {
		tracing::debug!(domain = "extension", %category, "registered empty key; record is unreachable by lookup");
	}

	let (index, previous) = catalog.insert_full(key.to_string(), record);
	if previous.is_some() {
		tracing::debug!(domain = "extension", %category, key, "replaced existing registration");
	}

	&mut catalog[index]
}

/// Stores `record` in a discard slot for a category the flavor does not keep.
///
/// The slot only backs the builder reference; the next discarded
/// registration overwrites it.
pub(crate) fn discard<'a, T>(slot: &'a mut T, category: Category, key: &str, record: T) -> &'a mut T {
	debug_assert!(category.is_ide_only(), "{category} records are kept in every flavor");
	tracing::trace!(domain = "extension", %category, key, "ignored in runtime-only flavor");
	*slot = record;
	slot
}

/// Catalogs only present in the IDE flavor.
#[derive(Debug, Default)]
pub(crate) struct IdeCatalogs {
	pub conditions: Catalog<InstructionMetadata>,
	pub actions: Catalog<InstructionMetadata>,
	pub expressions: Catalog<ExpressionMetadata>,
	pub str_expressions: Catalog<ExpressionMetadata>,
	pub events: Catalog<EventMetadata>,
}

impl IdeCatalogs {
	pub fn instructions_mut(&mut self, category: Category) -> &mut Catalog<InstructionMetadata> {
		match category {
			Category::Condition => &mut self.conditions,
			_ => &mut self.actions,
		}
	}

	pub fn expressions_mut(&mut self, category: Category) -> &mut Catalog<ExpressionMetadata> {
		match category {
			Category::StrExpression => &mut self.str_expressions,
			_ => &mut self.expressions,
		}
	}

	/// Number of instructions and expressions across all four catalogs.
	pub fn instruction_count(&self) -> usize {
		self.conditions.len() + self.actions.len() + self.expressions.len() + self.str_expressions.len()
	}
}

/// Catalogs present in both flavors.
#[derive(Debug, Default)]
pub(crate) struct RuntimeCatalogs {
	pub objects: Catalog<ObjectMetadata>,
	pub behaviors: Catalog<BehaviorMetadata>,
}

/// Discard slots handed out by IDE-only registrations in the runtime-only
/// flavor. Each registration resets its slot, so nothing persists.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
	pub instruction: InstructionMetadata,
	pub expression: ExpressionMetadata,
	pub event: EventMetadata,
}

#[cfg(test)]
mod tests;
