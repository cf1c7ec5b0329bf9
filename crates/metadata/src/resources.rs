/// Visitor used to inventory the resources referenced by instructions.
///
/// Implementations may rewrite the path in place (e.g. to point at a
/// copied or resolved file).
pub trait ResourceWorker {
	fn expose_file(&mut self, path: &mut String);

	fn expose_image(&mut self, name: &mut String);
}
