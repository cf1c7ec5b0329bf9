//! Sentinel ("bad") records returned when a lookup misses.
//!
//! Every category has its own process-wide sentinel, built once on first use and
//! never mutated afterwards. Sentinels carry an empty key and empty display
//! text, so a miss renders as blank rather than requiring a null check.
//! Use [`is_fallback`] to tell a sentinel apart from a stored record.

use std::sync::LazyLock;

use trellis_metadata::{BehaviorMetadata, EventMetadata, ExpressionMetadata, InstructionMetadata, ObjectMetadata, ReturnType};

use crate::catalog::{Catalog, Category};

static BAD_CONDITION: LazyLock<InstructionMetadata> = LazyLock::new(|| InstructionMetadata {
	is_condition: true,
	..Default::default()
});
static BAD_ACTION: LazyLock<InstructionMetadata> = LazyLock::new(InstructionMetadata::default);
static BAD_EXPRESSION: LazyLock<ExpressionMetadata> = LazyLock::new(ExpressionMetadata::default);
static BAD_STR_EXPRESSION: LazyLock<ExpressionMetadata> = LazyLock::new(|| ExpressionMetadata {
	return_type: ReturnType::String,
	..Default::default()
});
static BAD_OBJECT: LazyLock<ObjectMetadata> = LazyLock::new(ObjectMetadata::default);
static BAD_BEHAVIOR: LazyLock<BehaviorMetadata> = LazyLock::new(BehaviorMetadata::default);
static BAD_EVENT: LazyLock<EventMetadata> = LazyLock::new(EventMetadata::default);

static EMPTY_INSTRUCTIONS: LazyLock<Catalog<InstructionMetadata>> = LazyLock::new(Catalog::default);
static EMPTY_EXPRESSIONS: LazyLock<Catalog<ExpressionMetadata>> = LazyLock::new(Catalog::default);
static EMPTY_OBJECTS: LazyLock<Catalog<ObjectMetadata>> = LazyLock::new(Catalog::default);
static EMPTY_BEHAVIORS: LazyLock<Catalog<BehaviorMetadata>> = LazyLock::new(Catalog::default);
static EMPTY_EVENTS: LazyLock<Catalog<EventMetadata>> = LazyLock::new(Catalog::default);

/// Record types with per-category sentinels and a shared empty catalog.
pub trait Fallback: Sized + Sync + 'static {
	/// Categories whose records have this type.
	const CATEGORIES: &'static [Category];

	/// Returns the sentinel record for `category`.
	///
	/// Categories outside [`Fallback::CATEGORIES`] resolve to the last
	/// listed category's sentinel.
	fn fallback(category: Category) -> &'static Self;

	/// Returns an empty catalog, used when a category is absent from an
	/// extension's flavor.
	fn empty_catalog() -> &'static Catalog<Self>;
}

impl Fallback for InstructionMetadata {
	const CATEGORIES: &'static [Category] = &[Category::Condition, Category::Action];

	fn fallback(category: Category) -> &'static Self {
		match category {
			Category::Condition => &BAD_CONDITION,
			_ => &BAD_ACTION,
		}
	}

	fn empty_catalog() -> &'static Catalog<Self> {
		&EMPTY_INSTRUCTIONS
	}
}

impl Fallback for ExpressionMetadata {
	const CATEGORIES: &'static [Category] = &[Category::Expression, Category::StrExpression];

	fn fallback(category: Category) -> &'static Self {
		match category {
			Category::Expression => &BAD_EXPRESSION,
			_ => &BAD_STR_EXPRESSION,
		}
	}

	fn empty_catalog() -> &'static Catalog<Self> {
		&EMPTY_EXPRESSIONS
	}
}

macro_rules! impl_single_fallback {
	($type:ty, $category:ident, $bad:ident, $empty:ident) => {
		impl Fallback for $type {
			const CATEGORIES: &'static [Category] = &[Category::$category];

			fn fallback(_category: Category) -> &'static Self {
				&$bad
			}

			fn empty_catalog() -> &'static Catalog<Self> {
				&$empty
			}
		}
	};
}

impl_single_fallback!(ObjectMetadata, Object, BAD_OBJECT, EMPTY_OBJECTS);
impl_single_fallback!(BehaviorMetadata, Behavior, BAD_BEHAVIOR, EMPTY_BEHAVIORS);
impl_single_fallback!(EventMetadata, Event, BAD_EVENT, EMPTY_EVENTS);

/// Returns true if `record` is the sentinel of one of its type's categories.
///
/// Compares addresses, so a stored record is never mistaken for a
/// sentinel, even one registered under an empty key.
#[inline]
pub fn is_fallback<T: Fallback>(record: &T) -> bool {
	T::CATEGORIES.iter().any(|&category| std::ptr::eq(record, T::fallback(category)))
}

/// Looks up `key`, resolving a miss to the category's sentinel.
pub(crate) fn resolve<'a, T: Fallback>(catalog: &'a Catalog<T>, category: Category, key: &str) -> &'a T {
	match catalog.get(key) {
		Some(record) => record,
		None => {
			tracing::trace!(domain = "extension", %category, key, "lookup miss; using fallback record");
			T::fallback(category)
		}
	}
}
