//! Declarative setup of element groups and cluster mappings.
//!
//! A configuration is a TOML document:
//!
//! ```toml
//! element_type = "controller"
//!
//! [groups.dns]
//! members = ["dnsentry-source", "dnsprovider"]
//! explicit = ["dnsprovider"]
//! mappings = { target = "runtime" }
//!
//! [elements.dnsentry-source]
//! mappings = { source = "garden" }
//! ```
//!
//! Documents are layered with [`Config::merge`] and turned into live registries
//! with [`Config::build`]. Groups and elements keep their declaration order.

mod error;
mod load;
mod setup;

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use load::{load_config_file, load_config_files};
pub use setup::Setup;


/// A parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Element type resolved by the built registries. Defaults to `controller`.
	#[serde(default)]
	pub element_type: Option<String>,
	#[serde(default)]
	pub groups: IndexMap<String, GroupDecl>,
	#[serde(default)]
	pub elements: IndexMap<String, ElementDecl>,
}

/// Declaration of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDecl {
	#[serde(default)]
	pub members: Vec<String>,
	/// Members activated only by their own name.
	#[serde(default)]
	pub explicit: Vec<String>,
	/// Mappings inherited by every member.
	#[serde(default)]
	pub mappings: IndexMap<String, String>,
}

/// Mappings of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDecl {
	#[serde(default)]
	pub mappings: IndexMap<String, String>,
}

impl Config {
	/// Layers `other` over this config.
	///
	/// A group or element declared in both is replaced by `other`'s declaration
	/// and keeps its original position.
	pub fn merge(&mut self, other: Config) {
		if other.element_type.is_some() {
			self.element_type = other.element_type;
		}
		self.groups.extend(other.groups);
		self.elements.extend(other.elements);
	}

	pub fn element_type(&self) -> &str {
		self.element_type.as_deref().unwrap_or(clustermap_mappings::TYPE_CONTROLLER)
	}
}

/// Parses a configuration document.
pub fn parse_config_str(input: &str) -> Result<Config> {
	Ok(toml::from_str(input)?)
}
