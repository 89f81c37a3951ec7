//! Group registration and snapshots.
//!
//! # Role
//!
//! [`GroupRegistry`] is the writable side: groups are declared and populated at
//! setup time under an exclusive lock. [`GroupRegistry::get_definitions`] hands
//! out an owned [`GroupDefinitions`] copy that later declarations do not touch.
//!
//! # Invariants
//!
//! - A name is either a group or an element, never both.
//! - Group declaration is idempotent: registering a known group returns a handle
//!   to the existing definition.

use std::fmt;

use clustermap_primitives::StringSet;
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::definition::{Group, GroupDefinition, GroupMembership};
use crate::error::{GroupError, Result};

#[cfg(test)]
mod tests;

/// Activation keyword selecting every non-explicit member of every group.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default)]
struct GroupTable {
	/// Element type the groups collect (e.g. "controller").
	type_name: String,
	/// Declared groups in declaration order.
	groups: IndexMap<String, GroupDefinition>,
	/// Every name added as a member of some group.
	elements: StringSet,
}

impl GroupTable {
	fn name_clash(&self, name: &str) -> GroupError {
		GroupError::NameClash {
			type_name: self.type_name.clone(),
			name: name.to_string(),
		}
	}
}

/// Writable registry of element groups.
pub struct GroupRegistry {
	state: RwLock<GroupTable>,
}

impl GroupRegistry {
	/// Creates an empty registry for groups of `element_type` elements.
	pub fn new(element_type: impl Into<String>) -> Self {
		Self {
			state: RwLock::new(GroupTable {
				type_name: element_type.into(),
				..Default::default()
			}),
		}
	}

	pub fn element_type(&self) -> String {
		self.state.read().type_name.clone()
	}

	/// Declares a group, or returns a handle to it if it is already declared.
	///
	/// Fails if `name` is already used as a member of some group.
	pub fn register_group(&self, name: &str) -> Result<GroupConfig<'_>> {
		let mut state = self.state.write();
		if !state.groups.contains_key(name) {
			if state.elements.contains(name) {
				return Err(state.name_clash(name));
			}
			state
				.groups
				.insert(name.to_string(), GroupDefinition::new(name));
			debug!(type_name = %state.type_name, group = name, "group registered");
		}
		Ok(GroupConfig {
			registry: self,
			name: name.to_string(),
		})
	}

	/// Like [`Self::register_group`], but a name clash is a fatal setup error.
	pub fn must_register_group(&self, name: &str) -> GroupConfig<'_> {
		match self.register_group(name) {
			Ok(cfg) => cfg,
			Err(err) => panic!("{err}"),
		}
	}

	/// Returns an independent snapshot of all declared groups.
	pub fn get_definitions(&self) -> GroupDefinitions {
		GroupDefinitions {
			table: self.state.read().clone(),
		}
	}
}

impl Default for GroupRegistry {
	fn default() -> Self {
		Self::new("controller")
	}
}

/// Handle for populating one declared group.
pub struct GroupConfig<'a> {
	registry: &'a GroupRegistry,
	name: String,
}

impl GroupConfig<'_> {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Adds members to the group.
	///
	/// Fails on the first name that is itself a declared group; names before it
	/// have already been added.
	pub fn members<I, S>(&self, names: I) -> Result<&Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut guard = self.registry.state.write();
		let state = &mut *guard;
		for name in names {
			let name = name.as_ref();
			if state.groups.contains_key(name) {
				return Err(state.name_clash(name));
			}
			if let Some(group) = state.groups.get_mut(&self.name) {
				group.members.add(name);
			}
			state.elements.add(name);
		}
		Ok(self)
	}

	/// Marks members that must be activated by their own name.
	pub fn activate_explicitly<I, S>(&self, names: I) -> &Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut state = self.registry.state.write();
		if let Some(group) = state.groups.get_mut(&self.name) {
			group.explicit.add_all(names.into_iter().map(|n| n.as_ref().to_string()));
		}
		self
	}
}

/// Immutable snapshot of declared groups.
#[derive(Debug, Clone, Default)]
pub struct GroupDefinitions {
	table: GroupTable,
}

impl GroupDefinitions {
	pub fn element_type(&self) -> &str {
		&self.table.type_name
	}

	pub fn get(&self, name: &str) -> Option<&GroupDefinition> {
		self.table.groups.get(name)
	}

	/// Group names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.table.groups.keys().map(String::as_str)
	}

	/// Resolves an activation request into the set of active elements.
	///
	/// An empty request, or the keyword [`ALL`], activates every non-explicit
	/// member. A group name activates the group's non-explicit members and an
	/// element name activates just that element.
	pub fn members<S: AsRef<str>>(&self, requested: &[S]) -> Result<StringSet> {
		let type_name = &self.table.type_name;
		let mut active = StringSet::new();
		if requested.is_empty() {
			info!("activating all {type_name}s");
			active = self.all_non_explicit_members();
		} else {
			for name in requested {
				let name = name.as_ref();
				if let Some(group) = self.table.groups.get(name) {
					info!("activating {type_name} group {name:?}");
					active.add_set(&group.implicit_members());
				} else if name == ALL {
					info!("activating all {type_name}s");
					active.add_set(&self.all_non_explicit_members());
				} else if self.table.elements.contains(name) {
					info!("activating {type_name} {name:?}");
					active.add(name);
				} else {
					return Err(GroupError::Unknown {
						type_name: type_name.clone(),
						name: name.to_string(),
					});
				}
			}
		}
		info!("activated {type_name}s: {active}");
		Ok(active)
	}

	/// Members of every group, keyed by group name.
	pub fn all_groups(&self) -> IndexMap<String, StringSet> {
		self.table
			.groups
			.iter()
			.map(|(name, g)| (name.clone(), g.members.clone()))
			.collect()
	}

	pub fn all_members(&self) -> StringSet {
		let mut all = StringSet::new();
		for group in self.table.groups.values() {
			all.add_set(&group.members);
		}
		all
	}

	/// Union of every group's members that are not marked explicit in that group.
	pub fn all_non_explicit_members(&self) -> StringSet {
		let mut all = StringSet::new();
		for group in self.table.groups.values() {
			all.add_set(&group.implicit_members());
		}
		all
	}
}

impl GroupMembership for GroupDefinitions {
	fn group(&self, name: &str) -> Option<&dyn Group> {
		self.get(name).map(|g| g as &dyn Group)
	}
}

impl fmt::Display for GroupDefinitions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, (name, group)) in self.table.groups.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{name}: {}", group.members)?;
		}
		f.write_str("}")
	}
}
