use std::collections::{BTreeSet, HashSet};

use crate::StringSet;

#[cfg(test)]
mod tests;

/// Symbolic name of the main cluster of an element.
///
/// A mapping for this name redirects whichever cluster an element requests
/// first.
pub const CLUSTER_MAIN: &str = "<MAIN>";

/// Renders a symbolic cluster name for messages.
pub fn cluster_name(name: &str) -> &str {
	if name == CLUSTER_MAIN { "<MAIN>" } else { name }
}

/// A catalog of physical clusters known to the process.
pub trait ClusterCatalog {
	/// Returns true if a physical cluster with this name is known.
	fn has_cluster(&self, name: &str) -> bool;
}

impl ClusterCatalog for StringSet {
	fn has_cluster(&self, name: &str) -> bool {
		self.contains(name)
	}
}

impl ClusterCatalog for HashSet<String> {
	fn has_cluster(&self, name: &str) -> bool {
		self.contains(name)
	}
}

impl ClusterCatalog for BTreeSet<String> {
	fn has_cluster(&self, name: &str) -> bool {
		self.contains(name)
	}
}

impl ClusterCatalog for [&str] {
	fn has_cluster(&self, name: &str) -> bool {
		self.iter().any(|n| *n == name)
	}
}
