use crate::descriptor::Descriptor;
use crate::instance::{Behavior, BehaviorsSharedData};

/// Metadata describing a behavior type.
#[derive(Debug, Clone, Default)]
pub struct BehaviorMetadata {
	pub descriptor: Descriptor,
	/// Name given to the behavior when first attached to an object.
	pub default_name: String,
	/// Runtime class resolving the behavior, independent of the display key.
	pub class_name: String,
	pub instance: Option<Box<dyn Behavior>>,
	/// Shared by every behavior of this type attached under the same name.
	pub shared_data_instance: Option<Box<dyn BehaviorsSharedData>>,
}

crate::impl_metadata_record!(BehaviorMetadata);

impl BehaviorMetadata {
	pub fn default_name(&self) -> &str {
		&self.default_name
	}

	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	/// Returns the exemplar behavior, borrowed from the record.
	pub fn get(&self) -> Option<&dyn Behavior> {
		self.instance.as_deref()
	}

	/// Returns the exemplar shared data, borrowed from the record.
	pub fn get_shared_data_instance(&self) -> Option<&dyn BehaviorsSharedData> {
		self.shared_data_instance.as_deref()
	}

	pub fn set_default_name(&mut self, default_name: impl Into<String>) -> &mut Self {
		self.default_name = default_name.into();
		self
	}

	pub fn set_class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
		self.class_name = class_name.into();
		self
	}
}
