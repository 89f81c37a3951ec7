use clustermap_groups::GroupRegistry;
use clustermap_mappings::{Aggregation, DefinitionImpl, DefinitionLookup, Registry, TYPE_GROUP};
use tracing::info;

use crate::{Config, Result};

/// Registries populated from a [`Config`].
pub struct Setup {
	pub groups: GroupRegistry,
	pub mappings: Registry,
}

impl Config {
	/// Registers every declared group and mapping into fresh registries.
	///
	/// Groups are registered before any mapping, in declaration order. Empty
	/// mapping tables are not registered.
	pub fn build(&self) -> Result<Setup> {
		let element_type = self.element_type();
		let groups = GroupRegistry::new(element_type);
		let mappings = Registry::with_element_type(element_type);

		for (name, decl) in &self.groups {
			groups
				.register_group(name)?
				.members(&decl.members)?
				.activate_explicitly(&decl.explicit);
		}
		for (name, decl) in &self.groups {
			if !decl.mappings.is_empty() {
				mappings.register_mapping(&DefinitionImpl::new(TYPE_GROUP, name).with_mappings(&decl.mappings))?;
			}
		}
		for (name, decl) in &self.elements {
			if !decl.mappings.is_empty() {
				mappings.register_mapping(&DefinitionImpl::new(element_type, name).with_mappings(&decl.mappings))?;
			}
		}

		info!(
			element_type,
			groups = self.groups.len(),
			elements = self.elements.len(),
			"cluster mapping setup built"
		);
		Ok(Setup { groups, mappings })
	}
}

impl Setup {
	/// Computes the effective mapping of `element` from snapshots of both registries.
	pub fn effective(&self, element: &str) -> Result<Aggregation> {
		let groups = self.groups.get_definitions();
		Ok(self.mappings.get_definitions().get_effective(element, &groups)?)
	}
}
