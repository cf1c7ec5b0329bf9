use crate::descriptor::Descriptor;
use crate::instruction::CodeGenerator;

/// Value type returned by an expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReturnType {
	#[default]
	Number,
	String,
}

impl std::fmt::Display for ReturnType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ReturnType::Number => write!(f, "number"),
			ReturnType::String => write!(f, "string"),
		}
	}
}

/// Metadata describing a numeric or string expression.
#[derive(Debug, Clone, Default)]
pub struct ExpressionMetadata {
	pub descriptor: Descriptor,
	pub return_type: ReturnType,
	pub function_name: String,
	pub code_generator: Option<CodeGenerator>,
	pub hidden: bool,
}

crate::impl_metadata_record!(ExpressionMetadata);

impl ExpressionMetadata {
	pub fn return_type(&self) -> ReturnType {
		self.return_type
	}

	pub fn function_name(&self) -> &str {
		&self.function_name
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Returns true if the expression has a runtime function or a custom code generator.
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

	pub fn set_hidden(&mut self) -> &mut Self {
		self.hidden = true;
		self
	}
}
