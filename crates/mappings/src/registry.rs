//! Mapping registry and snapshots.
//!
//! # Role
//!
//! [`Registry`] owns the type and name index of registered definitions behind a
//! single reader/writer lock. [`Definitions`] is an owned copy of that index: the
//! outer maps are copied, the definitions are shared.
//!
//! # Invariants
//!
//! - A `(type, name)` pair is registered at most once; a rejected registration
//!   leaves the registry untouched.
//! - Point lookups never fail: unknown pairs resolve to [`identity`].

use std::fmt;
use std::sync::Arc;

use clustermap_groups::GroupMembership;
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::aggregation::Aggregation;
use crate::definition::{Definition, DefinitionImpl, TYPE_CONTROLLER, TYPE_GROUP, identity};
use crate::error::{MappingError, Result};


/// Anything that can produce a definition to register.
pub trait Registerable {
	fn definition(&self) -> Option<Arc<dyn Definition>>;
}

impl Registerable for DefinitionImpl {
	fn definition(&self) -> Option<Arc<dyn Definition>> {
		Some(Arc::new(self.clone()))
	}
}

impl Registerable for Arc<dyn Definition> {
	fn definition(&self) -> Option<Arc<dyn Definition>> {
		Some(Arc::clone(self))
	}
}

/// Read access shared by the registry and its snapshots.
pub trait DefinitionLookup {
	/// Returns the definition registered for `(def_type, name)`, or [`identity`].
	fn get(&self, def_type: &str, name: &str) -> Arc<dyn Definition>;

	/// Computes the effective mapping of `element`.
	///
	/// Folds the element's own definition with the definition of every group
	/// containing the element. Every registered group definition is checked
	/// against `groups`, whether or not it concerns `element`.
	///
	/// # Errors
	///
	/// - [`MappingError::UnknownGroup`] if `groups` does not know a group that has
	///   a registered definition.
	/// - [`MappingError::AmbiguousMapping`] if two applicable definitions map the
	///   same cluster to different targets.
	fn get_effective(&self, element: &str, groups: &dyn GroupMembership) -> Result<Aggregation>;
}

type NameTable = IndexMap<String, Arc<dyn Definition>>;

#[derive(Debug, Clone)]
struct DefinitionTable {
	/// Definition type of the elements resolved by [`DefinitionLookup::get_effective`].
	elem_type: String,
	/// Definitions by type, then name, both in registration order.
	by_type: IndexMap<String, NameTable>,
}

impl DefinitionTable {
	fn new(elem_type: String) -> Self {
		Self {
			elem_type,
			by_type: IndexMap::new(),
		}
	}

	fn lookup(&self, def_type: &str, name: &str) -> Option<&Arc<dyn Definition>> {
		self.by_type.get(def_type)?.get(name)
	}

	fn get(&self, def_type: &str, name: &str) -> Arc<dyn Definition> {
		self.lookup(def_type, name)
			.map(Arc::clone)
			.unwrap_or_else(identity)
	}

	fn for_type(&self, def_type: &str) -> impl Iterator<Item = (&String, &Arc<dyn Definition>)> + '_ {
		self.by_type.get(def_type).into_iter().flatten()
	}

	fn insert(&mut self, def: Arc<dyn Definition>) -> Result<()> {
		let defs = self.by_type.entry(def.def_type().to_string()).or_default();
		if defs.contains_key(def.name()) {
			return Err(MappingError::DuplicateRegistration {
				def_type: def.def_type().to_string(),
				name: def.name().to_string(),
			});
		}
		defs.insert(def.name().to_string(), def);
		Ok(())
	}

	fn effective(&self, element: &str, groups: &dyn GroupMembership) -> Result<Aggregation> {
		let elem_type = &self.elem_type;
		let mut aggr = Aggregation::new(elem_type.as_str());
		if let Some(direct) = self.lookup(elem_type, element) {
			aggr.push(Arc::clone(direct));
		}

		for (group, def) in self.for_type(TYPE_GROUP) {
			let Some(members) = groups.group(group) else {
				warn!(elem_type = %elem_type, group = %group, "mapping references unknown group");
				return Err(MappingError::UnknownGroup {
					elem_type: elem_type.clone(),
					group: group.clone(),
				});
			};
			if !members.contains(element) {
				continue;
			}

			for cluster in def.mapped_clusters().iter() {
				let incoming = def.map_cluster(cluster);
				if let Some(existing) = aggr.conflicting_claim(cluster, incoming) {
					warn!(
						elem_type = %elem_type,
						element,
						group = %group,
						cluster,
						existing,
						incoming,
						"ambiguous cluster mapping"
					);
					return Err(MappingError::AmbiguousMapping {
						elem_type: elem_type.clone(),
						element: element.to_string(),
						group: group.clone(),
						cluster: cluster.to_string(),
						existing: existing.to_string(),
						incoming: incoming.to_string(),
					});
				}
			}
			trace!(element, group = %group, mappings = %def, "folding group mappings");
			aggr.push(Arc::clone(def));
		}
		Ok(aggr)
	}
}

impl fmt::Display for DefinitionTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, (def_type, defs)) in self.by_type.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{def_type}: {{")?;
			for (j, (name, def)) in defs.iter().enumerate() {
				if j > 0 {
					f.write_str(", ")?;
				}
				write!(f, "{name}: {def}")?;
			}
			f.write_str("}")?;
		}
		f.write_str("}")
	}
}

/// Writable mapping registry.
///
/// One registry is constructed per application context and passed by reference
/// to whatever declares or resolves mappings.
pub struct Registry {
	state: RwLock<DefinitionTable>,
}

impl Registry {
	/// Creates an empty registry resolving controllers.
	pub fn new() -> Self {
		Self::with_element_type(TYPE_CONTROLLER)
	}

	/// Creates an empty registry resolving elements of `elem_type`.
	pub fn with_element_type(elem_type: impl Into<String>) -> Self {
		Self {
			state: RwLock::new(DefinitionTable::new(elem_type.into())),
		}
	}

	pub fn element_type(&self) -> String {
		self.state.read().elem_type.clone()
	}

	/// Registers the definition produced by `reg`.
	///
	/// # Errors
	///
	/// - [`MappingError::MissingDefinition`] if `reg` produces no definition.
	/// - [`MappingError::DuplicateRegistration`] if its `(type, name)` pair is taken.
	pub fn register_mapping<R: Registerable + ?Sized>(&self, reg: &R) -> Result<()> {
		let def = reg.definition().ok_or(MappingError::MissingDefinition)?;
		let (def_type, name) = (def.def_type().to_string(), def.name().to_string());
		let mapped = def.mapped_clusters();

		let inserted = self.state.write().insert(def);
		match inserted {
			Ok(()) => {
				debug!(def_type = %def_type, name = %name, %mapped, "mapping registered");
				Ok(())
			}
			Err(err) => {
				warn!(def_type = %def_type, name = %name, "duplicate mapping registration rejected");
				Err(err)
			}
		}
	}

	/// Like [`Self::register_mapping`], but any failure is a fatal setup error.
	pub fn must_register_mapping<R: Registerable + ?Sized>(&self, reg: &R) -> &Self {
		if let Err(err) = self.register_mapping(reg) {
			panic!("{err}");
		}
		self
	}

	/// Returns an independent snapshot of the registered definitions.
	pub fn get_definitions(&self) -> Definitions {
		Definitions {
			table: self.state.read().clone(),
		}
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl DefinitionLookup for Registry {
	fn get(&self, def_type: &str, name: &str) -> Arc<dyn Definition> {
		self.state.read().get(def_type, name)
	}

	fn get_effective(&self, element: &str, groups: &dyn GroupMembership) -> Result<Aggregation> {
		self.state.read().effective(element, groups)
	}
}

impl fmt::Display for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&*self.state.read(), f)
	}
}

/// Immutable snapshot of a [`Registry`].
#[derive(Debug, Clone)]
pub struct Definitions {
	table: DefinitionTable,
}

impl Definitions {
	pub fn element_type(&self) -> &str {
		&self.table.elem_type
	}

	/// Definitions of one type in registration order.
	pub fn for_type(&self, def_type: &str) -> impl Iterator<Item = &Arc<dyn Definition>> + '_ {
		self.table.for_type(def_type).map(|(_, def)| def)
	}
}

impl DefinitionLookup for Definitions {
	fn get(&self, def_type: &str, name: &str) -> Arc<dyn Definition> {
		self.table.get(def_type, name)
	}

	fn get_effective(&self, element: &str, groups: &dyn GroupMembership) -> Result<Aggregation> {
		self.table.effective(element, groups)
	}
}

impl fmt::Display for Definitions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.table, f)
	}
}
