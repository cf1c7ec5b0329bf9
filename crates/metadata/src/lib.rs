//! Metadata records and instance traits for extension capabilities.
//!
//! The extension registry stores these records and hands out references to
//! them. This crate only defines their shape:
//!
//! - [`Descriptor`]: fields shared by every record (key, names, icons, help)
//! - [`MetadataRecord`]: generic access to a record's descriptor
//! - [`InstructionMetadata`] / [`ExpressionMetadata`]: conditions, actions and expressions
//! - [`ObjectMetadata`] / [`BehaviorMetadata`] / [`EventMetadata`]: instantiable capabilities
//! - [`instance`]: the polymorphic runtime types the factories produce
//! - [`ObjectFactory`]: type-erased object constructor
//! - [`ResourceWorker`]: visitor used when inventorying resources

pub mod behavior;
pub mod descriptor;
pub mod event;
pub mod expression;
pub mod factory;
pub mod instance;
pub mod instruction;
pub mod object;
pub mod resources;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use behavior::BehaviorMetadata;
pub use descriptor::{Descriptor, MetadataRecord};
pub use event::EventMetadata;
pub use expression::{ExpressionMetadata, ReturnType};
pub use factory::ObjectFactory;
pub use instance::{BaseEvent, Behavior, BehaviorsSharedData, Object, ObjectType};
pub use instruction::{CodeGenerator, Instruction, InstructionMetadata};
pub use object::ObjectMetadata;
pub use resources::ResourceWorker;
