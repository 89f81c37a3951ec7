//! Config file loading utilities.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, Result, parse_config_str};

/// Reads and parses a single configuration file.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Config> {
	let path = path.as_ref();
	let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let config = parse_config_str(&content)?;
	debug!(
		path = %path.display(),
		groups = config.groups.len(),
		elements = config.elements.len(),
		"loaded config layer"
	);
	Ok(config)
}

/// Loads `paths` in order and merges them, later files taking precedence.
///
/// Missing files are skipped. Any other read or parse failure aborts.
pub fn load_config_files<I, P>(paths: I) -> Result<Config>
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
{
	let mut merged = Config::default();
	for path in paths {
		let path = path.as_ref();
		if !path.exists() {
			debug!(path = %path.display(), "config layer not present");
			continue;
		}
		merged.merge(load_config_file(path)?);
	}
	Ok(merged)
}
