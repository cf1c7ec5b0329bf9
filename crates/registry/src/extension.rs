use trellis_metadata::{
	BaseEvent, Behavior, BehaviorMetadata, BehaviorsSharedData, Descriptor, EventMetadata, ExpressionMetadata, Instruction,
	InstructionMetadata, Object, ObjectFactory, ObjectMetadata, ObjectType, ResourceWorker, ReturnType,
};

use crate::catalog::{self, Catalog, CatalogView, Category, IdeCatalogs, RuntimeCatalogs, Scratch};
use crate::compilation::{CompilationInfo, Flavor};
use crate::fallback::{self, Fallback};
use crate::identity::Identity;
use crate::resources::ExposeResources;
use crate::views;

/// A named bundle of capability declarations.
///
/// Built once by the host: set the identity with
/// [`set_extension_information`](Self::set_extension_information), then call
/// one `add_*` method per capability. Each `add_*` returns the stored record
/// for in-place configuration. Afterwards the extension is queried by key.
///
/// Registration never fails. A key registered twice keeps the last record.
/// Lookups of unknown keys return the category's [`fallback`] record, an
/// empty view, or `None` for factories and exemplars.
///
/// In the [`Flavor::RuntimeOnly`] flavor, conditions, actions, expressions and
/// events are not kept. Registering one has no effect on the catalogs, and
/// querying them sees empty catalogs.
pub struct Extension {
	/// Build stamp, filled by [`complete_compilation_information!`](crate::complete_compilation_information).
	pub compilation_info: CompilationInfo,
	identity: Identity,
	flavor: Flavor,
	runtime: RuntimeCatalogs,
	ide: Option<IdeCatalogs>,
	scratch: Scratch,
	resource_exposer: Option<Box<dyn ExposeResources>>,
}

impl Default for Extension {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Extension {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Extension")
			.field("name", &self.identity.name)
			.field("flavor", &self.flavor)
			.field("objects", &self.runtime.objects.len())
			.field("behaviors", &self.runtime.behaviors.len())
			.field("instructions", &self.ide.as_ref().map_or(0, IdeCatalogs::instruction_count))
			.finish_non_exhaustive()
	}
}

impl Extension {
	/// Creates an empty extension with the build's default [`Flavor`].
	pub fn new() -> Self {
		Self::with_flavor(Flavor::default())
	}

	/// Creates an empty extension with the given flavor.
	pub fn with_flavor(flavor: Flavor) -> Self {
		Self {
			compilation_info: CompilationInfo::default(),
			identity: Identity::default(),
			flavor,
			runtime: RuntimeCatalogs::default(),
			ide: (!flavor.is_runtime_only()).then(IdeCatalogs::default),
			scratch: Scratch::default(),
			resource_exposer: None,
		}
	}

	pub fn flavor(&self) -> Flavor {
		self.flavor
	}

	/// Declares the main information about the extension.
	///
	/// Overwrites any previous identity and derives the namespace
	/// (`name` followed by `"::"`).
	pub fn set_extension_information(
		&mut self,
		name: &str,
		full_name: &str,
		description: &str,
		author: &str,
		license: &str,
	) -> &mut Self {
		self.identity.set(name, full_name, description, author, license);
		tracing::debug!(domain = "extension", name, flavor = %self.flavor, "declared extension");
		self
	}

	/// Sets the help path, relative to the documentation root.
	///
	/// Records registered afterwards use it as their default help path.
	pub fn set_extension_help_path(&mut self, help_path: &str) -> &mut Self {
		self.identity.help_path = help_path.to_string();
		self
	}

	/// Flags the extension as deprecated, hiding it from editors.
	pub fn mark_as_deprecated(&mut self) {
		self.identity.deprecated = true;
	}

	pub fn name(&self) -> &str {
		&self.identity.name
	}

	pub fn full_name(&self) -> &str {
		&self.identity.full_name
	}

	pub fn description(&self) -> &str {
		&self.identity.description
	}

	pub fn author(&self) -> &str {
		&self.identity.author
	}

	pub fn license(&self) -> &str {
		&self.identity.license
	}

	pub fn help_path(&self) -> &str {
		&self.identity.help_path
	}

	pub fn is_deprecated(&self) -> bool {
		self.identity.deprecated
	}

	/// Returns true if the extension is provided by the platform and cannot be removed.
	pub fn is_builtin(&self) -> bool {
		self.identity.is_builtin()
	}

	/// Treats `names` as builtin in addition to the default builtin list.
	pub fn set_extra_builtins(&mut self, names: Vec<String>) -> &mut Self {
		self.identity.extra_builtins = names;
		self
	}

	/// Returns the namespace prefixed onto capability keys by convention.
	pub fn namespace(&self) -> &str {
		&self.identity.namespace
	}

	fn descriptor(&self, key: &str, full_name: &str, description: &str, group: &str, icon: &str, small_icon: &str) -> Descriptor {
		Descriptor {
			key: key.to_string(),
			full_name: full_name.to_string(),
			description: description.to_string(),
			group: group.to_string(),
			icon: icon.to_string(),
			small_icon: small_icon.to_string(),
			help_path: self.identity.help_path.clone(),
		}
	}

	fn insert_instruction(&mut self, category: Category, record: InstructionMetadata) -> &mut InstructionMetadata {
		match self.ide.as_mut() {
			Some(ide) => {
				let key = record.descriptor.key.clone();
				catalog::insert(ide.instructions_mut(category), category, &key, record)
			}
			None => {
				let key = record.descriptor.key.clone();
				catalog::discard(&mut self.scratch.instruction, category, &key, record)
			}
		}
	}

	fn insert_expression(&mut self, category: Category, record: ExpressionMetadata) -> &mut ExpressionMetadata {
		match self.ide.as_mut() {
			Some(ide) => {
				let key = record.descriptor.key.clone();
				catalog::insert(ide.expressions_mut(category), category, &key, record)
			}
			None => {
				let key = record.descriptor.key.clone();
				catalog::discard(&mut self.scratch.expression, category, &key, record)
			}
		}
	}

	/// Declares a new condition.
	///
	/// Does nothing to the catalogs in the runtime-only flavor.
	#[allow(clippy::too_many_arguments, reason = "one argument per descriptive field")]
	pub fn add_condition(
		&mut self,
		key: &str,
		full_name: &str,
		description: &str,
		sentence: &str,
		group: &str,
		icon: &str,
		small_icon: &str,
	) -> &mut InstructionMetadata {
		let record = InstructionMetadata {
			descriptor: self.descriptor(key, full_name, description, group, icon, small_icon),
			sentence: sentence.to_string(),
			is_condition: true,
			..Default::default()
		};
		self.insert_instruction(Category::Condition, record)
	}

	/// Declares a new action.
	///
	/// Does nothing to the catalogs in the runtime-only flavor.
	#[allow(clippy::too_many_arguments, reason = "one argument per descriptive field")]
	pub fn add_action(
		&mut self,
		key: &str,
		full_name: &str,
		description: &str,
		sentence: &str,
		group: &str,
		icon: &str,
		small_icon: &str,
	) -> &mut InstructionMetadata {
		let record = InstructionMetadata {
			descriptor: self.descriptor(key, full_name, description, group, icon, small_icon),
			sentence: sentence.to_string(),
			is_condition: false,
			..Default::default()
		};
		self.insert_instruction(Category::Action, record)
	}

	/// Declares a new numeric expression.
	pub fn add_expression(&mut self, key: &str, full_name: &str, description: &str, group: &str, small_icon: &str) -> &mut ExpressionMetadata {
		let record = ExpressionMetadata {
			descriptor: self.descriptor(key, full_name, description, group, "", small_icon),
			return_type: ReturnType::Number,
			..Default::default()
		};
		self.insert_expression(Category::Expression, record)
	}

	/// Declares a new string expression.
	pub fn add_str_expression(&mut self, key: &str, full_name: &str, description: &str, group: &str, small_icon: &str) -> &mut ExpressionMetadata {
		let record = ExpressionMetadata {
			descriptor: self.descriptor(key, full_name, description, group, "", small_icon),
			return_type: ReturnType::String,
			..Default::default()
		};
		self.insert_expression(Category::StrExpression, record)
	}

	/// Declares a new object type constructed through [`ObjectType::with_name`].
	pub fn add_object<T: ObjectType>(&mut self, key: &str, full_name: &str, description: &str, icon24: &str) -> &mut ObjectMetadata {
		self.add_object_with_factory(key, full_name, description, icon24, ObjectFactory::of::<T>())
	}

	/// Declares a new object type whose objects are copies of `instance`.
	pub fn add_object_instance(
		&mut self,
		key: &str,
		full_name: &str,
		description: &str,
		icon24: &str,
		instance: Box<dyn Object>,
	) -> &mut ObjectMetadata {
		self.add_object_with_factory(key, full_name, description, icon24, ObjectFactory::from_exemplar(instance))
	}

	/// Declares a new object type created by `factory`.
	pub fn add_object_with_factory(
		&mut self,
		key: &str,
		full_name: &str,
		description: &str,
		icon24: &str,
		factory: ObjectFactory,
	) -> &mut ObjectMetadata {
		let record = ObjectMetadata {
			descriptor: self.descriptor(key, full_name, description, "", icon24, ""),
			factory: Some(factory),
			categories: Vec::new(),
		};
		catalog::insert(&mut self.runtime.objects, Category::Object, key, record)
	}

	/// Declares a new behavior type.
	///
	/// `instance` is the exemplar handed out by [`get_behavior`](Self::get_behavior).
	/// `shared_data_instance` is the optional exemplar of the data shared by
	/// behaviors of this type attached under the same name.
	#[allow(clippy::too_many_arguments, reason = "one argument per descriptive field")]
	pub fn add_behavior(
		&mut self,
		key: &str,
		full_name: &str,
		default_name: &str,
		description: &str,
		group: &str,
		icon24: &str,
		class_name: &str,
		instance: Box<dyn Behavior>,
		shared_data_instance: Option<Box<dyn BehaviorsSharedData>>,
	) -> &mut BehaviorMetadata {
		let record = BehaviorMetadata {
			descriptor: self.descriptor(key, full_name, description, group, icon24, ""),
			default_name: default_name.to_string(),
			class_name: class_name.to_string(),
			instance: Some(instance),
			shared_data_instance,
		};
		catalog::insert(&mut self.runtime.behaviors, Category::Behavior, key, record)
	}

	/// Declares a new custom event type, cloned from `instance` on creation.
	///
	/// Does nothing to the catalogs in the runtime-only flavor.
	pub fn add_event(
		&mut self,
		key: &str,
		full_name: &str,
		description: &str,
		group: &str,
		small_icon: &str,
		instance: Box<dyn BaseEvent>,
	) -> &mut EventMetadata {
		let record = EventMetadata {
			descriptor: self.descriptor(key, full_name, description, group, "", small_icon),
			instance: Some(instance),
		};
		match self.ide.as_mut() {
			Some(ide) => catalog::insert(&mut ide.events, Category::Event, key, record),
			None => catalog::discard(&mut self.scratch.event, Category::Event, key, record),
		}
	}

	fn ide_catalog<T: Fallback>(&self, select: impl FnOnce(&IdeCatalogs) -> &Catalog<T>) -> &Catalog<T> {
		match &self.ide {
			Some(ide) => select(ide),
			None => T::empty_catalog(),
		}
	}

	pub fn get_all_conditions(&self) -> &Catalog<InstructionMetadata> {
		self.ide_catalog(|ide| &ide.conditions)
	}

	/// Returns all actions keyed by capability key, in registration order.
	///
	/// Empty in the runtime-only flavor; the same applies to conditions,
	/// expressions and events.
	pub fn get_all_actions(&self) -> &Catalog<InstructionMetadata> {
		self.ide_catalog(|ide| &ide.actions)
	}

	pub fn get_all_expressions(&self) -> &Catalog<ExpressionMetadata> {
		self.ide_catalog(|ide| &ide.expressions)
	}

	pub fn get_all_str_expressions(&self) -> &Catalog<ExpressionMetadata> {
		self.ide_catalog(|ide| &ide.str_expressions)
	}

	pub fn get_all_events(&self) -> &Catalog<EventMetadata> {
		self.ide_catalog(|ide| &ide.events)
	}

	pub fn get_all_objects(&self) -> &Catalog<ObjectMetadata> {
		&self.runtime.objects
	}

	pub fn get_all_behaviors(&self) -> &Catalog<BehaviorMetadata> {
		&self.runtime.behaviors
	}

	/// Mutable access to the conditions, or `None` in the runtime-only flavor.
	pub fn get_all_conditions_mut(&mut self) -> Option<&mut Catalog<InstructionMetadata>> {
		self.ide.as_mut().map(|ide| &mut ide.conditions)
	}

	pub fn get_all_actions_mut(&mut self) -> Option<&mut Catalog<InstructionMetadata>> {
		self.ide.as_mut().map(|ide| &mut ide.actions)
	}

	pub fn get_all_expressions_mut(&mut self) -> Option<&mut Catalog<ExpressionMetadata>> {
		self.ide.as_mut().map(|ide| &mut ide.expressions)
	}

	pub fn get_all_str_expressions_mut(&mut self) -> Option<&mut Catalog<ExpressionMetadata>> {
		self.ide.as_mut().map(|ide| &mut ide.str_expressions)
	}

	pub fn get_all_events_mut(&mut self) -> Option<&mut Catalog<EventMetadata>> {
		self.ide.as_mut().map(|ide| &mut ide.events)
	}

	/// Returns the condition registered under `key`, or the shared fallback record.
	pub fn get_condition_metadata(&self, key: &str) -> &InstructionMetadata {
		fallback::resolve(self.get_all_conditions(), Category::Condition, key)
	}

	pub fn get_action_metadata(&self, key: &str) -> &InstructionMetadata {
		fallback::resolve(self.get_all_actions(), Category::Action, key)
	}

	pub fn get_expression_metadata(&self, key: &str) -> &ExpressionMetadata {
		fallback::resolve(self.get_all_expressions(), Category::Expression, key)
	}

	pub fn get_str_expression_metadata(&self, key: &str) -> &ExpressionMetadata {
		fallback::resolve(self.get_all_str_expressions(), Category::StrExpression, key)
	}

	/// Returns the object type registered under `key`, or the shared fallback record.
	pub fn get_object_metadata(&self, key: &str) -> &ObjectMetadata {
		fallback::resolve(&self.runtime.objects, Category::Object, key)
	}

	pub fn get_behavior_metadata(&self, key: &str) -> &BehaviorMetadata {
		fallback::resolve(&self.runtime.behaviors, Category::Behavior, key)
	}

	pub fn get_event_metadata(&self, key: &str) -> &EventMetadata {
		fallback::resolve(self.get_all_events(), Category::Event, key)
	}

	/// Mutable access to a stored condition. Fallback records are never
	/// handed out mutably, so a miss is `None`.
	pub fn get_condition_metadata_mut(&mut self, key: &str) -> Option<&mut InstructionMetadata> {
		self.get_all_conditions_mut()?.get_mut(key)
	}

	pub fn get_action_metadata_mut(&mut self, key: &str) -> Option<&mut InstructionMetadata> {
		self.get_all_actions_mut()?.get_mut(key)
	}

	pub fn get_expression_metadata_mut(&mut self, key: &str) -> Option<&mut ExpressionMetadata> {
		self.get_all_expressions_mut()?.get_mut(key)
	}

	pub fn get_str_expression_metadata_mut(&mut self, key: &str) -> Option<&mut ExpressionMetadata> {
		self.get_all_str_expressions_mut()?.get_mut(key)
	}

	pub fn get_object_metadata_mut(&mut self, key: &str) -> Option<&mut ObjectMetadata> {
		self.runtime.objects.get_mut(key)
	}

	pub fn get_behavior_metadata_mut(&mut self, key: &str) -> Option<&mut BehaviorMetadata> {
		self.runtime.behaviors.get_mut(key)
	}

	pub fn get_event_metadata_mut(&mut self, key: &str) -> Option<&mut EventMetadata> {
		self.get_all_events_mut()?.get_mut(key)
	}

	pub fn has_condition(&self, key: &str) -> bool {
		self.get_all_conditions().contains_key(key)
	}

	pub fn has_action(&self, key: &str) -> bool {
		self.get_all_actions().contains_key(key)
	}

	pub fn has_expression(&self, key: &str) -> bool {
		self.get_all_expressions().contains_key(key)
	}

	pub fn has_str_expression(&self, key: &str) -> bool {
		self.get_all_str_expressions().contains_key(key)
	}

	pub fn has_object(&self, key: &str) -> bool {
		self.runtime.objects.contains_key(key)
	}

	pub fn has_behavior(&self, key: &str) -> bool {
		self.runtime.behaviors.contains_key(key)
	}

	pub fn has_event(&self, key: &str) -> bool {
		self.get_all_events().contains_key(key)
	}

	/// Returns the actions whose key starts with `object_type`.
	pub fn get_all_actions_for_object(&self, object_type: &str) -> CatalogView<'_, InstructionMetadata> {
		views::with_prefix(self.get_all_actions(), object_type)
	}

	pub fn get_all_conditions_for_object(&self, object_type: &str) -> CatalogView<'_, InstructionMetadata> {
		views::with_prefix(self.get_all_conditions(), object_type)
	}

	pub fn get_all_expressions_for_object(&self, object_type: &str) -> CatalogView<'_, ExpressionMetadata> {
		views::with_prefix(self.get_all_expressions(), object_type)
	}

	pub fn get_all_str_expressions_for_object(&self, object_type: &str) -> CatalogView<'_, ExpressionMetadata> {
		views::with_prefix(self.get_all_str_expressions(), object_type)
	}

	/// Returns the actions whose key starts with `behavior_type`.
	pub fn get_all_actions_for_behavior(&self, behavior_type: &str) -> CatalogView<'_, InstructionMetadata> {
		views::with_prefix(self.get_all_actions(), behavior_type)
	}

	pub fn get_all_conditions_for_behavior(&self, behavior_type: &str) -> CatalogView<'_, InstructionMetadata> {
		views::with_prefix(self.get_all_conditions(), behavior_type)
	}

	pub fn get_all_expressions_for_behavior(&self, behavior_type: &str) -> CatalogView<'_, ExpressionMetadata> {
		views::with_prefix(self.get_all_expressions(), behavior_type)
	}

	pub fn get_all_str_expressions_for_behavior(&self, behavior_type: &str) -> CatalogView<'_, ExpressionMetadata> {
		views::with_prefix(self.get_all_str_expressions(), behavior_type)
	}

	/// Returns the keys of all object types, in registration order.
	pub fn get_extension_objects_types(&self) -> Vec<&str> {
		self.runtime.objects.keys().map(String::as_str).collect()
	}

	/// Returns the keys of all behavior types, in registration order.
	pub fn get_behaviors_types(&self) -> Vec<&str> {
		self.runtime.behaviors.keys().map(String::as_str).collect()
	}

	/// Returns the factory for `object_type`, or `None` if the type is not
	/// provided by this extension.
	pub fn get_object_creation_function(&self, object_type: &str) -> Option<ObjectFactory> {
		self.runtime.objects.get(object_type)?.factory.clone()
	}

	/// Creates an object of `object_type` named `name`.
	pub fn create_object(&self, object_type: &str, name: &str) -> Option<Box<dyn Object>> {
		Some(self.runtime.objects.get(object_type)?.factory.as_ref()?.create(name))
	}

	/// Creates a custom event, or returns `None` if `event_type` is not
	/// provided by this extension.
	pub fn create_event(&self, event_type: &str) -> Option<Box<dyn BaseEvent>> {
		self.get_all_events().get(event_type)?.create()
	}

	/// Borrows the exemplar behavior registered under `behavior_type`.
	pub fn get_behavior(&self, behavior_type: &str) -> Option<&dyn Behavior> {
		self.runtime.behaviors.get(behavior_type)?.get()
	}

	/// Borrows the exemplar shared data registered under `behavior_type`.
	pub fn get_behavior_shared_datas(&self, behavior_type: &str) -> Option<&dyn BehaviorsSharedData> {
		self.runtime.behaviors.get(behavior_type)?.get_shared_data_instance()
	}

	/// Installs the hook used by the `expose_*_resources` methods.
	pub fn set_resource_exposer(&mut self, exposer: Box<dyn ExposeResources>) -> &mut Self {
		self.resource_exposer = Some(exposer);
		self
	}

	/// Lets the extension expose the resources used by `condition`.
	pub fn expose_conditions_resources(&self, condition: &mut Instruction, worker: &mut dyn ResourceWorker) {
		if let Some(exposer) = &self.resource_exposer {
			exposer.expose_conditions_resources(condition, worker);
		}
	}

	/// Lets the extension expose the resources used by `action`.
	pub fn expose_actions_resources(&self, action: &mut Instruction, worker: &mut dyn ResourceWorker) {
		if let Some(exposer) = &self.resource_exposer {
			exposer.expose_actions_resources(action, worker);
		}
	}

	/// Removes conditions, actions and expressions having neither a
	/// function name nor a custom code generator.
	///
	/// Returns the number of removed records.
	pub fn strip_unimplemented_instructions_and_expressions(&mut self) -> usize {
		let Some(ide) = self.ide.as_mut() else {
			return 0;
		};

		let before = ide.instruction_count();
		ide.conditions.retain(|_, record| record.is_implemented());
		ide.actions.retain(|_, record| record.is_implemented());
		ide.expressions.retain(|_, record| record.is_implemented());
		ide.str_expressions.retain(|_, record| record.is_implemented());
		let removed = before - ide.instruction_count();

		if removed > 0 {
			tracing::debug!(domain = "extension", name = %self.identity.name, removed, "stripped unimplemented instructions and expressions");
		}
		removed
	}
}
