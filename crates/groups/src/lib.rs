//! Element groups.
//!
//! A group is a named set of elements (controllers, extensions, ...). Groups are
//! declared once at setup time in a [`GroupRegistry`] and read through immutable
//! [`GroupDefinitions`] snapshots. Mapping resolution consumes membership only
//! through the [`GroupMembership`] trait, so plain maps of name sets work as well.

mod definition;
mod error;
mod registry;

pub use definition::{Group, GroupDefinition, GroupMembership};
pub use error::{GroupError, Result};
pub use registry::{ALL, GroupConfig, GroupDefinitions, GroupRegistry};
