//! Polymorphic runtime types produced from registered capabilities.
//!
//! The registry never looks inside these. It only needs to construct
//! them (`clone_boxed`, [`ObjectType::with_name`]), describe them
//! (`name`, `type_name`) and compare them (`same_as`). Every trait is `Send + Sync` because exemplars
//! live inside records that may be shared across threads once built.

use std::any::Any;
use std::fmt;

/// A runtime object created from an object type.
pub trait Object: fmt::Debug + Send + Sync {
	/// Returns the instance name chosen by the user.
	fn name(&self) -> &str;

	/// Renames the instance.
	fn set_name(&mut self, name: &str);

	/// Returns the capability key of the object type.
	fn type_name(&self) -> &str;

	/// Returns an independent copy of this object.
	fn clone_boxed(&self) -> Box<dyn Object>;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// Returns true if `other` describes the same object.
	///
	/// Defaults to comparing type and name. Implementations holding more
	/// state should downcast through [`Object::as_any`] and compare it too.
	fn same_as(&self, other: &dyn Object) -> bool {
		self.type_name() == other.type_name() && self.name() == other.name()
	}
}

impl Clone for Box<dyn Object> {
	fn clone(&self) -> Self {
		self.clone_boxed()
	}
}

/// An object type that can be constructed directly from a name.
///
/// Used by the generic object registration, which synthesizes a factory
/// calling [`ObjectType::with_name`].
pub trait ObjectType: Object + Sized + 'static {
	fn with_name(name: &str) -> Self;
}

/// A behavior attached to objects.
pub trait Behavior: fmt::Debug + Send + Sync {
	/// Returns the name the behavior is attached under.
	fn name(&self) -> &str;

	fn set_name(&mut self, name: &str);

	/// Returns the capability key of the behavior type.
	fn type_name(&self) -> &str;

	fn clone_boxed(&self) -> Box<dyn Behavior>;

	fn as_any(&self) -> &dyn Any;

	/// Returns true if `other` is the same behavior. Defaults to comparing
	/// type and name.
	fn same_as(&self, other: &dyn Behavior) -> bool {
		self.type_name() == other.type_name() && self.name() == other.name()
	}
}

impl Clone for Box<dyn Behavior> {
	fn clone(&self) -> Self {
		self.clone_boxed()
	}
}

/// Data shared by all behaviors of one type attached under the same name.
pub trait BehaviorsSharedData: fmt::Debug + Send + Sync {
	fn name(&self) -> &str;

	fn set_name(&mut self, name: &str);

	fn type_name(&self) -> &str;

	fn clone_boxed(&self) -> Box<dyn BehaviorsSharedData>;

	fn as_any(&self) -> &dyn Any;

	fn same_as(&self, other: &dyn BehaviorsSharedData) -> bool {
		self.type_name() == other.type_name() && self.name() == other.name()
	}
}

impl Clone for Box<dyn BehaviorsSharedData> {
	fn clone(&self) -> Self {
		self.clone_boxed()
	}
}

/// A custom event placed in event sheets.
pub trait BaseEvent: fmt::Debug + Send + Sync {
	/// Returns the capability key of the event type.
	fn event_type(&self) -> &str;

	/// Returns true if the event carries conditions/actions to execute.
	fn is_executable(&self) -> bool {
		false
	}

	fn clone_boxed(&self) -> Box<dyn BaseEvent>;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// Returns true if `other` is an equivalent event. Defaults to comparing
	/// the event type only.
	fn same_as(&self, other: &dyn BaseEvent) -> bool {
		self.event_type() == other.event_type()
	}
}

impl Clone for Box<dyn BaseEvent> {
	fn clone(&self) -> Self {
		self.clone_boxed()
	}
}
