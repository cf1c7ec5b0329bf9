//! Extension identity and namespacing.

/// Separator between an extension's name and the capability it declares.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Extensions provided by the platform itself. These cannot be removed
/// from a project.
pub const BUILTIN_EXTENSION_NAMES: &[&str] = &[
	"Sprite",
	"BuiltinObject",
	"BuiltinAudio",
	"BuiltinMouse",
	"BuiltinKeyboard",
	"BuiltinJoystick",
	"BuiltinTime",
	"BuiltinFile",
	"BuiltinVariables",
	"BuiltinCamera",
	"BuiltinWindow",
	"BuiltinNetwork",
	"BuiltinScene",
	"BuiltinAdvanced",
	"BuiltinCommonConversions",
	"BuiltinStringInstructions",
	"BuiltinMathematicalTools",
	"BuiltinExternalLayouts",
	"BuiltinCommonInstructions",
];

/// Returns the string separating an extension name from a capability name.
#[inline]
pub fn namespace_separator() -> &'static str {
	NAMESPACE_SEPARATOR
}

/// Returns the names of all builtin extensions.
#[inline]
pub fn builtin_extensions_names() -> &'static [&'static str] {
	BUILTIN_EXTENSION_NAMES
}

/// Descriptive identity of an extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Identity {
	pub name: String,
	/// `name` followed by [`NAMESPACE_SEPARATOR`], or empty before the
	/// identity is first set.
	pub namespace: String,
	pub full_name: String,
	pub description: String,
	pub author: String,
	pub license: String,
	/// Help page relative to the documentation root. Inherited by records
	/// registered after it is set.
	pub help_path: String,
	pub deprecated: bool,
	/// Names treated as builtin on top of [`BUILTIN_EXTENSION_NAMES`].
	/// Kept across [`Identity::set`].
	pub extra_builtins: Vec<String>,
}

impl Identity {
	pub fn set(&mut self, name: &str, full_name: &str, description: &str, author: &str, license: &str) {
		self.name = name.to_string();
		self.namespace = format!("{name}{NAMESPACE_SEPARATOR}");
		self.full_name = full_name.to_string();
		self.description = description.to_string();
		self.author = author.to_string();
		self.license = license.to_string();
	}

	pub fn is_builtin(&self) -> bool {
		is_builtin_name(&self.name, &self.extra_builtins)
	}
}

/// Returns true if `name` is a default builtin or one of `extra_builtins`.
pub(crate) fn is_builtin_name(name: &str, extra_builtins: &[String]) -> bool {
	BUILTIN_EXTENSION_NAMES.contains(&name) || extra_builtins.iter().any(|extra| extra == name)
}
