use std::collections::HashMap;

/// The single global name-to-value mapping mutated during execution.
///
/// Created empty when evaluation starts and alive for the whole run. There
/// is no scoping; every lookup and every definition sees the same map.
#[derive(Default, Debug)]
pub(crate) struct Environment {
	variables: HashMap<String, i64>,
}

impl Environment {
	pub fn new() -> Self { Self::default() }

	/// An assignment doesn't just define a new variable, it can also redefine
	/// an existing one.
	pub fn define(&mut self, name: String, value: i64) { self.variables.insert(name, value); }

	pub fn get(&self, name: &str) -> Option<i64> { self.variables.get(name).copied() }
}
