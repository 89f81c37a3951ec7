use std::collections::{BTreeMap, HashMap};

use clustermap_primitives::StringSet;


/// A resolved group: a set of element names.
pub trait Group {
	fn members(&self) -> &StringSet;

	/// Returns true if `element` belongs to this group.
	fn contains(&self, element: &str) -> bool {
		self.members().contains(element)
	}
}

/// Resolves group names to groups.
///
/// This is the only view of groups that mapping resolution needs. Implementors
/// must not register mappings from inside a lookup, since resolution holds the
/// mapping registry's read lock while calling in.
pub trait GroupMembership {
	/// Looks up a group by name.
	fn group(&self, name: &str) -> Option<&dyn Group>;
}

impl Group for StringSet {
	fn members(&self) -> &StringSet {
		self
	}
}

impl GroupMembership for HashMap<String, StringSet> {
	fn group(&self, name: &str) -> Option<&dyn Group> {
		self.get(name).map(|g| g as &dyn Group)
	}
}

impl GroupMembership for BTreeMap<String, StringSet> {
	fn group(&self, name: &str) -> Option<&dyn Group> {
		self.get(name).map(|g| g as &dyn Group)
	}
}

/// A declared group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDefinition {
	pub(crate) name: String,
	pub(crate) members: StringSet,
	/// Members that are only activated when named directly.
	pub(crate) explicit: StringSet,
}

impl GroupDefinition {
	pub(crate) fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Members that must be activated explicitly rather than through the group.
	pub fn activate_explicitly_members(&self) -> &StringSet {
		&self.explicit
	}

	/// Members activated when the group itself is requested.
	pub fn implicit_members(&self) -> StringSet {
		self.members.difference(&self.explicit)
	}
}

impl Group for GroupDefinition {
	fn members(&self) -> &StringSet {
		&self.members
	}
}
