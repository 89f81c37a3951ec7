use std::collections::HashSet;

use super::*;

#[test]
fn test_cluster_name_passthrough() {
	assert_eq!(cluster_name("garden"), "garden");
	assert_eq!(cluster_name(CLUSTER_MAIN), "<MAIN>");
}

#[test]
fn test_catalog_impls_agree() {
	let set: StringSet = ["runtime", "garden"].into_iter().collect();
	let hash: HashSet<String> = ["runtime".to_string(), "garden".to_string()].into();
	let slice: &[&str] = &["runtime", "garden"];

	for name in ["runtime", "garden", "target"] {
		let expected = name != "target";
		assert_eq!(set.has_cluster(name), expected, "StringSet: {name}");
		assert_eq!(hash.has_cluster(name), expected, "HashSet: {name}");
		assert_eq!(slice.has_cluster(name), expected, "slice: {name}");
	}
}
