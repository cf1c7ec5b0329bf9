//! Registry configuration.
//!
//! Loaded from a TOML document:
//!
//! ```toml
//! flavor = "runtime-only"
//! extra_builtin_extensions = ["Physics2", "Tween"]
//! ```
//!
//! Every key is optional. A missing `flavor` falls back to the build's
//! default [`Flavor`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compilation::Flavor;
use crate::extension::Extension;
use crate::identity;

/// Errors raised while loading a [`RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid registry config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Process-level settings applied to newly constructed extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Flavor given to extensions built through [`RegistryConfig::new_extension`].
	pub flavor: Flavor,
	/// Extension names treated as builtin in addition to
	/// [`BUILTIN_EXTENSION_NAMES`](crate::BUILTIN_EXTENSION_NAMES).
	pub extra_builtin_extensions: Vec<String>,
}

impl RegistryConfig {
	/// Parses a configuration from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(
			domain = "extension",
			path = %path.display(),
			flavor = %config.flavor,
			extra_builtins = config.extra_builtin_extensions.len(),
			"loaded registry config",
		);
		Ok(config)
	}

	/// Creates an empty extension with the configured flavor and builtin names.
	pub fn new_extension(&self) -> Extension {
		let mut extension = Extension::with_flavor(self.flavor);
		extension.set_extra_builtins(self.extra_builtin_extensions.clone());
		extension
	}

	/// Returns true if `extension_name` is builtin, either by default or
	/// through `extra_builtin_extensions`.
	pub fn is_builtin(&self, extension_name: &str) -> bool {
		identity::is_builtin_name(extension_name, &self.extra_builtin_extensions)
	}
}

#[cfg(test)]
mod tests;
