//! Resolving the clusters an element requests.

use clustermap_primitives::{CLUSTER_MAIN, ClusterCatalog, StringSet, cluster_name};

use crate::definition::Definition;
use crate::error::{MappingError, Result};


/// Maps one requested cluster name, returning the physical name and a
/// description of how it was obtained.
///
/// For the main (first) cluster a mapping of [`CLUSTER_MAIN`] takes precedence
/// over a mapping of the requested name itself.
pub fn map_cluster(main: bool, name: &str, def: &dyn Definition) -> (String, String) {
	let main_name = cluster_name(CLUSTER_MAIN);
	if main {
		let mapped = def.map_cluster(CLUSTER_MAIN);
		if mapped != CLUSTER_MAIN {
			return (
				mapped.to_string(),
				format!("{mapped} (mapped from {main_name}={name:?}) as {main_name}"),
			);
		}
		let mapped = def.map_cluster(name);
		return (mapped.to_string(), format!("{} as {main_name}", def.map_info(name)));
	}
	(def.map_cluster(name).to_string(), def.map_info(name))
}

/// Maps the clusters requested by an element onto `catalog`.
///
/// The first name is the element's main cluster and must resolve to a known
/// cluster. Later names that do not resolve fall back to the main cluster.
/// Returns the set of physical clusters and one description per requested name.
pub fn determine_clusters<C, S>(
	catalog: &C,
	def: &dyn Definition,
	names: &[S],
) -> Result<(StringSet, Vec<String>)>
where
	C: ClusterCatalog + ?Sized,
	S: AsRef<str>,
{
	let mut clusters = StringSet::new();
	let mut found: Vec<String> = Vec::with_capacity(names.len());
	let mut main_cluster = String::new();

	for (i, name) in names.iter().enumerate() {
		let name = name.as_ref();
		let (mut real, mut info) = map_cluster(i == 0, name, def);
		if !catalog.has_cluster(&real) {
			if i == 0 {
				return Err(MappingError::UnknownCluster { info });
			}
			real = main_cluster.clone();
			info = format!(
				"{} ({name} mapped to {} cluster)",
				found[0],
				cluster_name(CLUSTER_MAIN)
			);
		}
		if i == 0 {
			main_cluster = real.clone();
		}
		found.push(info);
		clusters.add(real);
	}
	Ok((clusters, found))
}
