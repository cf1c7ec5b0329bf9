use pretty_assertions::assert_eq;
use trellis_metadata::{InstructionMetadata, MetadataRecord};

use super::*;

fn named(full_name: &str) -> InstructionMetadata {
	let mut record = InstructionMetadata::default();
	record.set_full_name(full_name);
	record
}

#[test]
fn insert_returns_the_stored_record() {
	let mut catalog = Catalog::default();
	insert(&mut catalog, Category::Action, "MyExt::Jump", named("Jump")).set_group("Movement");

	assert_eq!(catalog.len(), 1);
	assert_eq!(catalog["MyExt::Jump"].group(), "Movement");
}

#[test]
fn last_write_wins_and_keeps_position() {
	let mut catalog = Catalog::default();
	insert(&mut catalog, Category::Action, "MyExt::Jump", named("Jump"));
	insert(&mut catalog, Category::Action, "MyExt::Run", named("Run"));
	insert(&mut catalog, Category::Action, "MyExt::Jump", named("Leap"));

	let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
	assert_eq!(keys, ["MyExt::Jump", "MyExt::Run"]);
	assert_eq!(catalog["MyExt::Jump"].full_name(), "Leap");
}

#[test]
fn empty_key_is_accepted() {
	let mut catalog = Catalog::default();
	insert(&mut catalog, Category::Condition, "", named("Nameless"));

	assert_eq!(catalog.len(), 1);
	assert_eq!(catalog[""].full_name(), "Nameless");
}

#[test]
fn ide_only_categories() {
	assert!(Category::Condition.is_ide_only());
	assert!(Category::Event.is_ide_only());
	assert!(!Category::Object.is_ide_only());
	assert!(!Category::Behavior.is_ide_only());
	assert_eq!(Category::StrExpression.to_string(), "str_expression");
}

#[test]
fn discard_overwrites_the_slot() {
	let mut slot = InstructionMetadata::default();
	discard(&mut slot, Category::Action, "MyExt::Jump", named("Jump")).set_group("Movement");
	assert_eq!(slot.full_name(), "Jump");
	assert_eq!(slot.group(), "Movement");

	discard(&mut slot, Category::Condition, "MyExt::IsOn", named("Is on"));
	assert_eq!(slot.full_name(), "Is on");
	assert_eq!(slot.group(), "");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "kept in every flavor")]
fn discard_rejects_runtime_categories() {
	let mut slot = InstructionMetadata::default();
	discard(&mut slot, Category::Object, "MyExt::Thing", named("Thing"));
}
