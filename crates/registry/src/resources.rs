use trellis_metadata::{Instruction, ResourceWorker};

/// Host hook exposing the resources used by an extension's instructions.
///
/// Called during compilation passes so the worker can inventory files and
/// rewrite their paths. Both methods default to doing nothing.
pub trait ExposeResources: Send + Sync {
	fn expose_conditions_resources(&self, _condition: &mut Instruction, _worker: &mut dyn ResourceWorker) {}

	fn expose_actions_resources(&self, _action: &mut Instruction, _worker: &mut dyn ResourceWorker) {}
}
