use std::fmt;
use std::sync::Arc;

use crate::descriptor::Descriptor;

/// A condition or action placed in an event, as seen by resource passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instruction {
	/// Capability key of the condition or action.
	pub type_key: String,
	/// Raw parameter values, in declaration order.
	pub parameters: Vec<String>,
}

impl Instruction {
	pub fn new(type_key: impl Into<String>, parameters: Vec<String>) -> Self {
		Self {
			type_key: type_key.into(),
			parameters,
		}
	}
}

/// Custom code-generation hook for an instruction or expression.
///
/// Receives the instruction being compiled and returns the generated code.
#[derive(Clone)]
pub struct CodeGenerator(Arc<dyn Fn(&Instruction) -> String + Send + Sync>);

impl CodeGenerator {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&Instruction) -> String + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	pub fn generate(&self, instruction: &Instruction) -> String {
		(self.0)(instruction)
	}
}

impl fmt::Debug for CodeGenerator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("CodeGenerator(..)")
	}
}

/// Metadata describing a condition or an action.
#[derive(Debug, Clone, Default)]
pub struct InstructionMetadata {
	pub descriptor: Descriptor,
	/// Human-readable phrasing with `_PARAMn_` placeholders.
	pub sentence: String,
	/// Runtime function implementing the instruction.
	pub function_name: String,
	pub code_generator: Option<CodeGenerator>,
	pub is_condition: bool,
	pub hidden: bool,
	pub advanced: bool,
}

crate::impl_metadata_record!(InstructionMetadata);

impl InstructionMetadata {
	pub fn sentence(&self) -> &str {
		&self.sentence
	}

	pub fn function_name(&self) -> &str {
		&self.function_name
	}

	pub fn is_condition(&self) -> bool {
		self.is_condition
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	pub fn is_advanced(&self) -> bool {
		self.advanced
	}

	/// Returns true if the instruction can be compiled, either through a
	/// runtime function or a custom code generator.
	pub fn is_implemented(&self) -> bool {
		!self.function_name.is_empty() || self.code_generator.is_some()
	}

	pub fn set_function_name(&mut self, function_name: impl Into<String>) -> &mut Self {
		self.function_name = function_name.into();
		self
	}

	pub fn set_code_generator(&mut self, generator: CodeGenerator) -> &mut Self {
		self.code_generator = Some(generator);
		self
	}

	/// Hides the instruction from editor lists.
	pub fn set_hidden(&mut self) -> &mut Self {
		self.hidden = true;
		self
	}

	pub fn mark_as_advanced(&mut self) -> &mut Self {
		self.advanced = true;
		self
	}

	pub fn mark_as_simple(&mut self) -> &mut Self {
		self.advanced = false;
		self
	}
}
