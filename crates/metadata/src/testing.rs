//! Minimal concrete instance types for tests.

use std::any::Any;

use crate::instance::{BaseEvent, Behavior, BehaviorsSharedData, Object, ObjectType};

/// Object carrying a name, a type key and one mutable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestObject {
	pub name: String,
	pub type_name: String,
	pub value: i64,
}

impl TestObject {
	pub fn new(type_name: &str, name: &str) -> Self {
		Self {
			name: name.to_string(),
			type_name: type_name.to_string(),
			value: 0,
		}
	}
}

impl Object for TestObject {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_name(&mut self, name: &str) {
		self.name = name.to_string();
	}

	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn clone_boxed(&self) -> Box<dyn Object> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn same_as(&self, other: &dyn Object) -> bool {
		other.as_any().downcast_ref::<Self>() == Some(self)
	}
}

impl ObjectType for TestObject {
	fn with_name(name: &str) -> Self {
		Self::new("Test::Object", name)
	}
}

/// Behavior with a name and a type key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestBehavior {
	pub name: String,
	pub type_name: String,
}

impl TestBehavior {
	pub fn new(type_name: &str, name: &str) -> Self {
		Self {
			name: name.to_string(),
			type_name: type_name.to_string(),
		}
	}
}

impl Behavior for TestBehavior {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_name(&mut self, name: &str) {
		self.name = name.to_string();
	}

	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn clone_boxed(&self) -> Box<dyn Behavior> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Shared data with a name and a type key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSharedData {
	pub name: String,
	pub type_name: String,
}

impl TestSharedData {
	pub fn new(type_name: &str) -> Self {
		Self {
			name: String::new(),
			type_name: type_name.to_string(),
		}
	}
}

impl BehaviorsSharedData for TestSharedData {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_name(&mut self, name: &str) {
		self.name = name.to_string();
	}

	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn clone_boxed(&self) -> Box<dyn BehaviorsSharedData> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Event with a type key and an editable body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestEvent {
	pub event_type: String,
	pub body: String,
}

impl TestEvent {
	pub fn new(event_type: &str) -> Self {
		Self {
			event_type: event_type.to_string(),
			body: String::new(),
		}
	}
}

impl BaseEvent for TestEvent {
	fn event_type(&self) -> &str {
		&self.event_type
	}

	fn is_executable(&self) -> bool {
		true
	}

	fn clone_boxed(&self) -> Box<dyn BaseEvent> {
		Box::new(self.clone())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn same_as(&self, other: &dyn BaseEvent) -> bool {
		other.as_any().downcast_ref::<Self>() == Some(self)
	}
}
