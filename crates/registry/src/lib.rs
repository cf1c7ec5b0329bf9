//! Extension metadata registry.
//!
//! An [`Extension`] is a named bundle of capability declarations: conditions,
//! actions, numeric and string expressions, object types, behavior types and
//! custom events. Each capability is stored under a unique string key in a
//! per-category [`Catalog`].
//!
//! - [`identity`]: extension name, namespace and builtin list
//! - [`catalog`]: ordered key-to-record maps and the insertion policy
//! - [`fallback`]: shared sentinel records returned on lookup miss
//! - [`views`]: per-object and per-behavior filtered views
//! - [`compilation`]: IDE vs runtime-only flavor and the compilation stamp
//! - [`config`]: TOML registry configuration
//!
//! Registration always succeeds. Re-registering a key replaces the previous
//! record, and lookups of unknown keys resolve to a [`fallback`] record or
//! `None` rather than an error.
//!
//! ```rust,ignore
//! let mut extension = Extension::new();
//! extension.set_extension_information("MyExt", "My extension", "Does things", "Me", "MIT");
//! extension
//!     .add_action("MyExt::Jump", "Jump", "Make the object jump", "Make _PARAM0_ jump", "", "", "")
//!     .set_function_name("jump");
//!
//! assert_eq!(extension.get_action_metadata("MyExt::Jump").full_name(), "Jump");
//! assert!(is_fallback(extension.get_action_metadata("MyExt::Fly")));
//! ```

pub mod catalog;
pub mod compilation;
pub mod config;
mod extension;
pub mod fallback;
pub mod identity;
mod resources;
pub mod views;

pub use catalog::{Catalog, CatalogView, Category};
pub use compilation::{CORE_VERSION, CompilationInfo, Flavor};
pub use config::{ConfigError, RegistryConfig};
pub use extension::Extension;
pub use fallback::{Fallback, is_fallback};
pub use identity::{BUILTIN_EXTENSION_NAMES, NAMESPACE_SEPARATOR, builtin_extensions_names, namespace_separator};
pub use resources::ExposeResources;
pub use trellis_metadata as metadata;
pub use trellis_metadata::{
	BaseEvent, Behavior, BehaviorMetadata, BehaviorsSharedData, CodeGenerator, Descriptor, EventMetadata, ExpressionMetadata, Instruction,
	InstructionMetadata, MetadataRecord, Object, ObjectFactory, ObjectMetadata, ObjectType, ResourceWorker, ReturnType,
};
