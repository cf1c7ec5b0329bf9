use std::fmt;
use std::sync::Arc;

use crate::instance::{Object, ObjectType};

/// Host-supplied object constructor.
pub type ObjectConstructor = dyn Fn(&str) -> Box<dyn Object> + Send + Sync;

/// Type-erased factory producing objects of one registered type.
///
/// Both variants yield an independently owned instance on every call, so
/// two objects created from the same factory never share mutable state.
/// Cloning the factory is cheap and shares the underlying exemplar or
/// constructor.
#[derive(Clone)]
pub enum ObjectFactory {
	/// Clone this exemplar, then rename the copy.
	Exemplar(Arc<dyn Object>),
	/// Invoke a host-supplied constructor.
	Constructor(Arc<ObjectConstructor>),
}

impl ObjectFactory {
	/// Creates a factory that clones `exemplar`.
	pub fn from_exemplar(exemplar: Box<dyn Object>) -> Self {
		Self::Exemplar(Arc::from(exemplar))
	}

	/// Creates a factory from a constructor closure.
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(&str) -> Box<dyn Object> + Send + Sync + 'static,
	{
		Self::Constructor(Arc::new(f))
	}

	/// Creates a factory for a concrete [`ObjectType`].
	pub fn of<T: ObjectType>() -> Self {
		Self::from_fn(|name| Box::new(T::with_name(name)))
	}

	/// Produces a new object named `name`.
	pub fn create(&self, name: &str) -> Box<dyn Object> {
		match self {
			Self::Exemplar(exemplar) => {
				let mut object = exemplar.clone_boxed();
				object.set_name(name);
				object
			}
			Self::Constructor(ctor) => ctor(name),
		}
	}

	/// Returns the exemplar if this factory clones one.
	pub fn exemplar(&self) -> Option<&dyn Object> {
		match self {
			Self::Exemplar(exemplar) => Some(exemplar.as_ref()),
			Self::Constructor(_) => None,
		}
	}
}

impl fmt::Debug for ObjectFactory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exemplar(exemplar) => f.debug_tuple("Exemplar").field(&exemplar.type_name()).finish(),
			Self::Constructor(_) => f.write_str("Constructor(..)"),
		}
	}
}
