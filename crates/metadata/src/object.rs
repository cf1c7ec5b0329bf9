use crate::descriptor::Descriptor;
use crate::factory::ObjectFactory;

/// Metadata describing an object type.
///
/// `factory` is `None` only for default-constructed records, such as the
/// registry's fallback record. Every registered object type has one.
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
	pub descriptor: Descriptor,
	pub factory: Option<ObjectFactory>,
	/// Free-form tags (e.g. "Visual", "Text") used to sort object types in editors.
	pub categories: Vec<String>,
}

crate::impl_metadata_record!(ObjectMetadata);

impl ObjectMetadata {
	pub fn factory(&self) -> Option<&ObjectFactory> {
		self.factory.as_ref()
	}

	pub fn categories(&self) -> &[String] {
		&self.categories
	}

	pub fn add_category(&mut self, category: impl Into<String>) -> &mut Self {
		self.categories.push(category.into());
		self
	}
}
