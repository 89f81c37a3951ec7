//! Mapping definitions.
//!
//! # Role
//!
//! This module defines the [`Definition`] capability and its registered variant,
//! [`DefinitionImpl`]. The composite variant lives in [`crate::aggregation`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use clustermap_primitives::{StringSet, cluster_name};
use rustc_hash::FxHashMap;


/// Definition type for mappings shared by all members of a group.
pub const TYPE_GROUP: &str = "group";
/// Definition type for mappings of a single controller.
pub const TYPE_CONTROLLER: &str = "controller";

/// A table mapping symbolic cluster names to physical cluster names.
///
/// Names without an entry map to themselves.
pub trait Definition: fmt::Debug + fmt::Display + Send + Sync {
	/// Category the definition is registered under (e.g. [`TYPE_GROUP`]).
	fn def_type(&self) -> &str;

	/// Unique name within [`Self::def_type`].
	fn name(&self) -> &str;

	/// Maps a symbolic cluster name, falling back to the name itself.
	fn map_cluster<'a>(&'a self, name: &'a str) -> &'a str;

	/// Symbolic names with an explicit entry.
	fn mapped_clusters(&self) -> StringSet;

	/// Returns the target of an explicit entry for `name`, if there is one.
	///
	/// Unlike [`Self::map_cluster`] this distinguishes an explicit identity entry
	/// from no entry at all.
	fn explicit_mapping<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		if self.mapped_clusters().contains(name) {
			Some(self.map_cluster(name))
		} else {
			None
		}
	}

	/// Describes how `name` is mapped, for log and error messages.
	fn map_info(&self, name: &str) -> String {
		let mapped = self.map_cluster(name);
		if mapped != name {
			format!("{:?} (mapped to {:?})", cluster_name(name), mapped)
		} else {
			name.to_string()
		}
	}
}

/// A directly registered mapping definition.
///
/// The table is copy-on-write: clones share it until one of them is modified,
/// so a registered definition never observes later edits made through a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionImpl {
	def_type: String,
	name: String,
	mappings: Arc<FxHashMap<String, String>>,
}

impl DefinitionImpl {
	/// Creates a definition with an empty table.
	pub fn new(def_type: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			def_type: def_type.into(),
			name: name.into(),
			mappings: Arc::default(),
		}
	}

	pub fn for_controller(name: impl Into<String>) -> Self {
		Self::new(TYPE_CONTROLLER, name)
	}

	pub fn for_group(name: impl Into<String>) -> Self {
		Self::new(TYPE_GROUP, name)
	}

	/// Adds every `(cluster, target)` pair, see [`Self::set_mapping`].
	pub fn with_mappings<I, K, V>(mut self, mappings: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (cluster, to) in mappings {
			self.set_mapping(cluster, to);
		}
		self
	}

	/// Inserts or overwrites the entry for `cluster`.
	///
	/// An empty target removes the entry, restoring the identity mapping.
	pub fn set_mapping(&mut self, cluster: impl Into<String>, to: impl Into<String>) {
		let (cluster, to) = (cluster.into(), to.into());
		let table = Arc::make_mut(&mut self.mappings);
		if to.is_empty() {
			table.remove(&cluster);
		} else {
			table.insert(cluster, to);
		}
	}

	/// Ensures this definition owns its table exclusively.
	pub fn detach(&mut self) {
		Arc::make_mut(&mut self.mappings);
	}

	/// Number of explicit entries.
	pub fn len(&self) -> usize {
		self.mappings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.mappings.is_empty()
	}
}

impl Definition for DefinitionImpl {
	fn def_type(&self) -> &str {
		&self.def_type
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn map_cluster<'a>(&'a self, name: &'a str) -> &'a str {
		self.mappings.get(name).map_or(name, String::as_str)
	}

	fn mapped_clusters(&self) -> StringSet {
		self.mappings.keys().cloned().collect()
	}

	fn explicit_mapping<'a>(&'a self, name: &'a str) -> Option<&'a str> {
		self.mappings.get(name).map(String::as_str)
	}

	fn map_info(&self, name: &str) -> String {
		match self.mappings.get(name) {
			Some(to) => format!("{:?} (mapped to {:?})", cluster_name(name), to),
			None => name.to_string(),
		}
	}
}

impl fmt::Display for DefinitionImpl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut entries: Vec<_> = self.mappings.iter().collect();
		entries.sort_unstable();
		f.write_str("[")?;
		for (i, (cluster, to)) in entries.into_iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{cluster}:{to}")?;
		}
		f.write_str("]")
	}
}

static IDENTITY: LazyLock<Arc<dyn Definition>> =
	LazyLock::new(|| Arc::new(DefinitionImpl::new("", "<identity>")));

/// The shared definition that maps every name to itself.
///
/// Returned by point lookups when nothing is registered for a `(type, name)` pair.
pub fn identity() -> Arc<dyn Definition> {
	Arc::clone(&*IDENTITY)
}
