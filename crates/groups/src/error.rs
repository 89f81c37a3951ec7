/// Errors raised while declaring or activating groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
	/// A group and an element would share the same name.
	#[error("name {name:?} already used by a {type_name} or group with this name")]
	NameClash {
		/// Element type of the registry (e.g. "controller").
		type_name: String,
		name: String,
	},
	/// An activation request named neither a group nor an element.
	#[error("unknown {type_name} or group {name:?}")]
	Unknown {
		/// Element type of the registry (e.g. "controller").
		type_name: String,
		name: String,
	},
}

pub type Result<T, E = GroupError> = std::result::Result<T, E>;
