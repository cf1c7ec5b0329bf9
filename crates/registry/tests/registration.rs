//! End-to-end registration and lookup through the public API.

use pretty_assertions::assert_eq;
use rstest::rstest;
use trellis_metadata::testing::{TestEvent, TestObject};
use trellis_registry::{Category, Extension, Fallback, Flavor, InstructionMetadata, MetadataRecord, NAMESPACE_SEPARATOR, is_fallback, namespace_separator};

fn my_ext() -> Extension {
	let mut extension = Extension::with_flavor(Flavor::Ide);
	extension.set_extension_information("MyExt", "My extension", "", "", "");
	extension
}

#[test]
fn jump_is_found_and_fly_is_not() {
	let mut extension = my_ext();
	let key = format!("{}Jump", extension.namespace());
	extension.add_action(&key, "Jump", "", "", "", "", "");

	let all: Vec<&str> = extension.get_all_actions().keys().map(String::as_str).collect();
	assert_eq!(all, ["MyExt::Jump"]);

	let jump = extension.get_action_metadata("MyExt::Jump");
	assert!(!is_fallback(jump));
	assert_eq!(jump.full_name(), "Jump");

	let fly = extension.get_action_metadata("MyExt::Fly");
	assert!(is_fallback(fly));
	assert_eq!(fly.full_name(), "");
}

#[test]
fn separator_is_process_wide() {
	assert_eq!(namespace_separator(), "::");
	assert_eq!(NAMESPACE_SEPARATOR, "::");
	assert!(my_ext().namespace().ends_with(namespace_separator()));
}

#[test]
fn sentinels_are_shared_across_extensions() {
	let a = my_ext();
	let mut b = Extension::with_flavor(Flavor::Ide);
	b.set_extension_information("Other", "", "", "", "");

	assert!(std::ptr::eq(a.get_action_metadata("x"), b.get_action_metadata("y")));
	assert!(std::ptr::eq(a.get_condition_metadata("x"), b.get_condition_metadata("y")));
	assert!(std::ptr::eq(a.get_action_metadata("x"), InstructionMetadata::fallback(Category::Action)));
	assert!(!std::ptr::eq(a.get_action_metadata("x"), b.get_condition_metadata("y")));
	assert!(std::ptr::eq(a.get_object_metadata("x"), b.get_object_metadata("y")));
}

#[rstest]
#[case::ide(Flavor::Ide)]
#[case::runtime_only(Flavor::RuntimeOnly)]
fn objects_exist_in_every_flavor(#[case] flavor: Flavor) {
	let mut extension = Extension::with_flavor(flavor);
	extension.add_object::<TestObject>("MyExt::Thing", "Thing", "A thing", "thing24.png").add_category("Visual");

	let metadata = extension.get_object_metadata("MyExt::Thing");
	assert_eq!(metadata.icon(), "thing24.png");
	assert_eq!(metadata.categories(), ["Visual"]);

	let factory = extension.get_object_creation_function("MyExt::Thing").expect("registered");
	assert_eq!(factory.create("A").name(), "A");
	assert_eq!(factory.create("B").name(), "B");
}

#[test]
fn create_event_returns_fresh_instances() {
	let mut extension = my_ext();
	extension.add_event("MyExt::Loop", "Loop", "", "", "", Box::new(TestEvent::new("MyExt::Loop")));

	let mut created = extension.create_event("MyExt::Loop").expect("registered");
	created.as_any_mut().downcast_mut::<TestEvent>().expect("test event").body = "edited".to_string();

	let again = extension.create_event("MyExt::Loop").expect("registered");
	assert_eq!(again.event_type(), "MyExt::Loop");
	assert!(again.is_executable());
	assert_eq!(again.as_any().downcast_ref::<TestEvent>().map(|event| event.body.as_str()), Some(""));
}

#[test]
fn extensions_build_on_separate_threads() {
	let handles: Vec<_> = ["A", "B", "C"]
		.into_iter()
		.map(|name| {
			std::thread::spawn(move || {
				let mut extension = Extension::with_flavor(Flavor::Ide);
				extension.set_extension_information(name, "", "", "", "");
				extension.add_action(&format!("{name}::Act"), name, "", "", "", "", "");
				let missing = extension.get_action_metadata("missing") as *const InstructionMetadata as usize;
				(extension.get_action_metadata(&format!("{name}::Act")).full_name().to_string(), missing)
			})
		})
		.collect();

	let results: Vec<(String, usize)> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
	assert_eq!(results.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(), ["A", "B", "C"]);
	assert!(results.iter().all(|(_, missing)| *missing == results[0].1));
}
