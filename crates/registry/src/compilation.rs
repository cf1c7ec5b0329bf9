//! Build flavor and compilation stamp of an extension.

use serde::{Deserialize, Serialize};

/// Version of this registry crate, stamped into [`CompilationInfo`].
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which capability catalogs an extension keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
	/// All catalogs: conditions, actions, expressions, events, objects and behaviors.
	Ide,
	/// Only objects and behaviors, which are needed to run a game.
	RuntimeOnly,
}

impl Flavor {
	#[inline]
	pub const fn is_runtime_only(self) -> bool {
		matches!(self, Self::RuntimeOnly)
	}
}

impl Default for Flavor {
	/// [`Flavor::Ide`] when built with the `ide` feature, else [`Flavor::RuntimeOnly`].
	fn default() -> Self {
		if cfg!(feature = "ide") { Self::Ide } else { Self::RuntimeOnly }
	}
}

impl std::fmt::Display for Flavor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Ide => write!(f, "ide"),
			Self::RuntimeOnly => write!(f, "runtime-only"),
		}
	}
}

/// Records how an extension was built, for compatibility diagnostics.
///
/// Never consulted by the registry itself. Fill it through
/// [`complete_compilation_information!`](crate::complete_compilation_information).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompilationInfo {
	pub information_completed: bool,
	pub runtime_only: bool,
	/// Registry version the extension was built against.
	pub core_version: String,
	/// Crate declaring the extension.
	pub host_crate: String,
	pub host_version: String,
	/// Pointer width in bytes.
	pub pointer_width: usize,
}

impl CompilationInfo {
	/// Builds a completed stamp for the given flavor and host crate.
	pub fn complete(flavor: Flavor, host_crate: &str, host_version: &str) -> Self {
		Self {
			information_completed: true,
			runtime_only: flavor.is_runtime_only(),
			core_version: CORE_VERSION.to_string(),
			host_crate: host_crate.to_string(),
			host_version: host_version.to_string(),
			pointer_width: size_of::<*const ()>(),
		}
	}

	/// Returns true if both stamps are complete and agree on flavor,
	/// registry version and pointer width.
	pub fn is_compatible_with(&self, other: &CompilationInfo) -> bool {
		self.information_completed
			&& other.information_completed
			&& self.runtime_only == other.runtime_only
			&& self.core_version == other.core_version
			&& self.pointer_width == other.pointer_width
	}
}

/// Stamps an extension with its flavor and the calling crate's name and version.
///
/// ```rust,ignore
/// let mut extension = Extension::new();
/// trellis_registry::complete_compilation_information!(extension);
/// assert!(extension.compilation_info.information_completed);
/// ```
#[macro_export]
macro_rules! complete_compilation_information {
	($extension:expr) => {{
		let extension: &mut $crate::Extension = &mut $extension;
		extension.compilation_info =
			$crate::CompilationInfo::complete(extension.flavor(), env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
	}};
}
