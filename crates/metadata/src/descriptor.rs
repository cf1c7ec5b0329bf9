/// Descriptive fields shared by every metadata record.
///
/// `key` is the capability key the record is stored under. It is kept
/// verbatim; prefixing it with the owning extension's namespace is the
/// registering code's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
	/// Unique key within the record's category (e.g. `"MyExt::Jump"`).
	pub key: String,
	/// Human-readable name for UI display.
	pub full_name: String,
	/// Help text.
	pub description: String,
	/// Group shown in editor lists.
	pub group: String,
	/// Large (24x24) icon path.
	pub icon: String,
	/// Small list icon path.
	pub small_icon: String,
	/// Help page, relative to the documentation root.
	pub help_path: String,
}

/// Trait for accessing the [`Descriptor`] of a metadata record.
///
/// The setters return `&mut Self` so registrations can be configured in a
/// single chain:
///
/// ```rust,ignore
/// extension
///     .add_action("MyExt::Jump", "Jump", "Make the object jump", "Jump _PARAM0_", "", "", "")
///     .set_help_path("/objects/jump")
///     .set_group("Movement");
/// ```
pub trait MetadataRecord {
	/// Returns the descriptor.
	fn descriptor(&self) -> &Descriptor;

	/// Returns the descriptor mutably.
	fn descriptor_mut(&mut self) -> &mut Descriptor;

	fn key(&self) -> &str {
		&self.descriptor().key
	}

	fn full_name(&self) -> &str {
		&self.descriptor().full_name
	}

	fn description(&self) -> &str {
		&self.descriptor().description
	}

	fn group(&self) -> &str {
		&self.descriptor().group
	}

	fn icon(&self) -> &str {
		&self.descriptor().icon
	}

	fn small_icon(&self) -> &str {
		&self.descriptor().small_icon
	}

	fn help_path(&self) -> &str {
		&self.descriptor().help_path
	}

	fn set_full_name(&mut self, full_name: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().full_name = full_name.into();
		self
	}

	fn set_description(&mut self, description: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().description = description.into();
		self
	}

	fn set_group(&mut self, group: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().group = group.into();
		self
	}

	fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().icon = icon.into();
		self
	}

	fn set_small_icon(&mut self, small_icon: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().small_icon = small_icon.into();
		self
	}

	/// Overrides the help path inherited from the owning extension.
	fn set_help_path(&mut self, help_path: impl Into<String>) -> &mut Self
	where
		Self: Sized,
	{
		self.descriptor_mut().help_path = help_path.into();
		self
	}
}

/// Implements [`MetadataRecord`] for a type with a `descriptor: Descriptor` field.
#[macro_export]
macro_rules! impl_metadata_record {
	($type:ty) => {
		impl $crate::MetadataRecord for $type {
			fn descriptor(&self) -> &$crate::Descriptor {
				&self.descriptor
			}

			fn descriptor_mut(&mut self) -> &mut $crate::Descriptor {
				&mut self.descriptor
			}
		}
	};
}
