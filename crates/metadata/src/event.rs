use crate::descriptor::Descriptor;
use crate::instance::BaseEvent;

/// Metadata describing a custom event type.
#[derive(Debug, Clone, Default)]
pub struct EventMetadata {
	pub descriptor: Descriptor,
	/// Prototype cloned for every new event of this type.
	pub instance: Option<Box<dyn BaseEvent>>,
}

crate::impl_metadata_record!(EventMetadata);

impl EventMetadata {
	pub fn instance(&self) -> Option<&dyn BaseEvent> {
		self.instance.as_deref()
	}

	/// Returns a fresh copy of the prototype.
	pub fn create(&self) -> Option<Box<dyn BaseEvent>> {
		self.instance.as_ref().map(|event| event.clone_boxed())
	}
}
