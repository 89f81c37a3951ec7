//! Error types for loading and applying configuration.

use std::path::PathBuf;

use clustermap_groups::GroupError;
use clustermap_mappings::MappingError;
use thiserror::Error;

/// Errors that can occur when loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {}: {source}", path.display())]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		source: std::io::Error,
	},

	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A declared mapping could not be registered.
	#[error(transparent)]
	Mapping(#[from] MappingError),

	/// A declared group could not be registered.
	#[error(transparent)]
	Group(#[from] GroupError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
