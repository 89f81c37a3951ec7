use std::sync::Arc;

use crate::definition::{Definition, DefinitionImpl, TYPE_CONTROLLER, TYPE_GROUP};
use crate::error::Result;
use crate::registry::{Registerable, Registry};


/// Fluent builder for a mapping definition.
///
/// # Example
///
/// ```
/// use clustermap_mappings::{DefinitionLookup, MappingConfig, Registry, TYPE_CONTROLLER};
///
/// let registry = Registry::new();
/// MappingConfig::for_controller("dns-source")
///     .map("source", "garden")
///     .must_register_at(&registry);
///
/// let def = registry.get(TYPE_CONTROLLER, "dns-source");
/// assert_eq!(def.map_cluster("source"), "garden");
/// ```
#[derive(Debug, Clone)]
pub struct MappingConfig {
	definition: DefinitionImpl,
}

impl MappingConfig {
	/// Starts a definition for one element of `elem_type`.
	pub fn for_element(elem_type: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			definition: DefinitionImpl::new(elem_type, name),
		}
	}

	pub fn for_controller(name: impl Into<String>) -> Self {
		Self::for_element(TYPE_CONTROLLER, name)
	}

	/// Starts a definition inherited by every member of group `name`.
	pub fn for_group(name: impl Into<String>) -> Self {
		Self::for_element(TYPE_GROUP, name)
	}

	/// Maps symbolic cluster `cluster` to physical cluster `to`.
	///
	/// Definitions already registered from an earlier state of this builder
	/// keep their own table.
	pub fn map(mut self, cluster: impl Into<String>, to: impl Into<String>) -> Self {
		self.definition.detach();
		self.definition.set_mapping(cluster, to);
		self
	}

	pub fn definition_ref(&self) -> &DefinitionImpl {
		&self.definition
	}

	/// Registers the current state into `registry`.
	pub fn register_at(&self, registry: &Registry) -> Result<()> {
		registry.register_mapping(self)
	}

	/// Like [`Self::register_at`], but any failure is a fatal setup error.
	pub fn must_register_at(self, registry: &Registry) -> Self {
		registry.must_register_mapping(&self);
		self
	}
}

impl Registerable for MappingConfig {
	fn definition(&self) -> Option<Arc<dyn Definition>> {
		self.definition.definition()
	}
}
