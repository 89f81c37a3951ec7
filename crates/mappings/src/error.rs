/// Errors raised by mapping registration and resolution.
///
/// None of these are transient: registration and lookup do no I/O, so an error
/// always reflects the registered data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
	/// A [`crate::Registerable`] produced no definition.
	#[error("no definition found")]
	MissingDefinition,

	/// A definition for this `(type, name)` pair is already registered.
	#[error("mapping for {def_type} {name:?} already defined")]
	DuplicateRegistration { def_type: String, name: String },

	/// A group-type definition names a group the membership source does not know.
	#[error("unknown {elem_type} group {group:?}")]
	UnknownGroup { elem_type: String, group: String },

	/// Two applicable definitions map the same cluster to different targets.
	#[error(
		"ambiguous cluster mapping for {elem_type} {element:?} in group {group:?}: {cluster:?} -> {existing:?} and {incoming:?}"
	)]
	AmbiguousMapping {
		elem_type: String,
		element: String,
		group: String,
		cluster: String,
		/// Target already claimed by an earlier constituent.
		existing: String,
		/// Target claimed by the group being folded in.
		incoming: String,
	},

	/// The main cluster of an element does not resolve to a known cluster.
	#[error("unknown cluster {info}")]
	UnknownCluster { info: String },
}

pub type Result<T, E = MappingError> = std::result::Result<T, E>;
