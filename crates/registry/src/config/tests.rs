use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn empty_document_uses_defaults() {
	let config = RegistryConfig::from_toml_str("").unwrap();
	assert_eq!(config, RegistryConfig::default());
	assert_eq!(config.flavor, Flavor::default());
}

#[rstest]
#[case("flavor = \"ide\"", Flavor::Ide)]
#[case("flavor = \"runtime-only\"", Flavor::RuntimeOnly)]
fn parses_flavor(#[case] content: &str, #[case] expected: Flavor) {
	let config = RegistryConfig::from_toml_str(content).unwrap();
	assert_eq!(config.flavor, expected);
	assert_eq!(config.new_extension().flavor(), expected);
}

#[test]
fn unknown_flavor_is_rejected() {
	let err = RegistryConfig::from_toml_str("flavor = \"editor\"").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_key_is_rejected() {
	let err = RegistryConfig::from_toml_str("flavour = \"ide\"").unwrap_err();
	assert!(err.to_string().starts_with("invalid registry config"));
}

#[test]
fn extra_builtins_extend_the_default_list() {
	let config = RegistryConfig::from_toml_str("extra_builtin_extensions = [\"Physics2\"]").unwrap();
	assert!(config.is_builtin("Physics2"));
	assert!(config.is_builtin("BuiltinAudio"));
	assert!(!config.is_builtin("MyExt"));
}

#[test]
fn extensions_from_config_see_extra_builtins() {
	let config = RegistryConfig::from_toml_str("extra_builtin_extensions = [\"Physics2\"]").unwrap();

	let mut extension = config.new_extension();
	extension.set_extension_information("Physics2", "Physics", "", "", "");
	assert_eq!(extension.is_builtin(), config.is_builtin("Physics2"));
	assert!(extension.is_builtin());

	extension.set_extension_information("MyExt", "", "", "", "");
	assert!(!extension.is_builtin());

	let mut plain = Extension::new();
	plain.set_extension_information("Physics2", "Physics", "", "", "");
	assert!(!plain.is_builtin());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "flavor = \"runtime-only\"").unwrap();

	let config = RegistryConfig::load(file.path()).unwrap();
	assert_eq!(config.flavor, Flavor::RuntimeOnly);
}

#[test]
fn load_missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("registry.toml");

	let err = RegistryConfig::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
	assert!(err.to_string().contains("registry.toml"));
}
