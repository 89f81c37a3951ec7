use std::fmt;
use std::sync::Arc;

use clustermap_primitives::StringSet;

use crate::definition::Definition;


/// Several definitions presented as one.
///
/// Produced per effective-mapping query and never registered. Constituents are
/// consulted in insertion order; for a given name the last constituent with a
/// non-identity mapping wins. Resolution guarantees constituents never disagree on
/// an explicit entry, so in practice the winner is unique.
#[derive(Debug, Clone)]
pub struct Aggregation {
	elem_type: String,
	list: Vec<Arc<dyn Definition>>,
}

impl Aggregation {
	/// Name reported by every aggregation.
	pub const NAME: &'static str = "<aggregated>";

	pub fn new(elem_type: impl Into<String>) -> Self {
		Self {
			elem_type: elem_type.into(),
			list: Vec::new(),
		}
	}

	/// Appends a constituent; later constituents override earlier ones.
	pub fn push(&mut self, def: Arc<dyn Definition>) {
		self.list.push(def);
	}

	/// Constituents in insertion order.
	pub fn constituents(&self) -> &[Arc<dyn Definition>] {
		&self.list
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	/// Returns the first non-identity target for `cluster` that differs from `target`.
	///
	/// Identity entries, incoming or already present, claim nothing.
	pub(crate) fn conflicting_claim<'a>(&'a self, cluster: &'a str, target: &str) -> Option<&'a str> {
		if target == cluster {
			return None;
		}
		self.list
			.iter()
			.filter_map(|d| d.explicit_mapping(cluster))
			.find(|claimed| *claimed != cluster && *claimed != target)
	}
}

impl Definition for Aggregation {
	fn def_type(&self) -> &str {
		&self.elem_type
	}

	fn name(&self) -> &str {
		Self::NAME
	}

	fn map_cluster<'a>(&'a self, name: &'a str) -> &'a str {
		self.list.iter().fold(name, |mapped, d| {
			let m = d.map_cluster(name);
			if m != name { m } else { mapped }
		})
	}

	fn mapped_clusters(&self) -> StringSet {
		let mut set = StringSet::new();
		for def in &self.list {
			set.add_set(&def.mapped_clusters());
		}
		set
	}
}

impl fmt::Display for Aggregation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, def) in self.list.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{def}")?;
		}
		f.write_str("]")
	}
}
