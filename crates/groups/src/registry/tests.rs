use rstest::rstest;

use super::*;

fn set(names: &[&str]) -> StringSet {
	names.iter().copied().collect()
}

/// Two groups, one of them with an explicitly activated member.
fn sample_registry() -> GroupRegistry {
	let registry = GroupRegistry::new("controller");
	registry
		.register_group("dns")
		.unwrap()
		.members(["source", "provider", "annotation"])
		.unwrap()
		.activate_explicitly(["annotation"]);
	registry
		.register_group("certs")
		.unwrap()
		.members(["issuer", "source"])
		.unwrap();
	registry
}

#[test]
fn test_register_group_is_idempotent() {
	let registry = GroupRegistry::new("controller");
	registry.register_group("dns").unwrap().members(["a"]).unwrap();
	registry.register_group("dns").unwrap().members(["b"]).unwrap();

	let defs = registry.get_definitions();
	assert_eq!(defs.get("dns").unwrap().members(), &set(&["a", "b"]));
	assert_eq!(defs.names().collect::<Vec<_>>(), vec!["dns"]);
}

#[test]
fn test_group_name_clashes_with_member() {
	let registry = GroupRegistry::new("controller");
	registry.register_group("dns").unwrap().members(["source"]).unwrap();

	let err = registry.register_group("source").err().unwrap();
	assert_eq!(
		err,
		GroupError::NameClash {
			type_name: "controller".into(),
			name: "source".into(),
		}
	);
}

#[test]
fn test_member_clashes_with_group() {
	let registry = GroupRegistry::new("controller");
	registry.register_group("dns").unwrap();
	let certs = registry.register_group("certs").unwrap();

	let err = certs.members(["issuer", "dns"]).err().unwrap();
	assert!(matches!(err, GroupError::NameClash { ref name, .. } if name == "dns"));
	// Names before the clash were kept
	assert!(registry.get_definitions().get("certs").unwrap().contains("issuer"));
}

#[test]
#[should_panic(expected = "already used")]
fn test_must_register_group_panics_on_clash() {
	let registry = GroupRegistry::new("controller");
	registry.register_group("dns").unwrap().members(["source"]).unwrap();
	registry.must_register_group("source");
}

#[test]
fn test_snapshot_is_isolated_from_later_declarations() {
	let registry = sample_registry();
	let before = registry.get_definitions();

	registry.register_group("late").unwrap().members(["x"]).unwrap();
	registry.register_group("dns").unwrap().members(["y"]).unwrap();

	assert!(before.get("late").is_none());
	assert!(!before.get("dns").unwrap().contains("y"));
	assert!(registry.get_definitions().get("dns").unwrap().contains("y"));
}

#[rstest]
#[case::empty_request(&[], &["issuer", "provider", "source"])]
#[case::all_keyword(&["all"], &["issuer", "provider", "source"])]
#[case::group(&["dns"], &["provider", "source"])]
#[case::explicit_element(&["annotation"], &["annotation"])]
#[case::group_and_element(&["certs", "annotation"], &["annotation", "issuer", "source"])]
fn test_activation(#[case] requested: &[&str], #[case] expected: &[&str]) {
	let defs = sample_registry().get_definitions();
	assert_eq!(defs.members(requested).unwrap(), set(expected));
}

#[test]
fn test_activation_of_unknown_name_fails() {
	let defs = sample_registry().get_definitions();
	let err = defs.members(&["dns", "nope"]).unwrap_err();
	assert_eq!(
		err,
		GroupError::Unknown {
			type_name: "controller".into(),
			name: "nope".into(),
		}
	);
}

#[test]
fn test_aggregate_views() {
	let defs = sample_registry().get_definitions();

	assert_eq!(
		defs.all_members(),
		set(&["annotation", "issuer", "provider", "source"])
	);
	assert_eq!(
		defs.all_non_explicit_members(),
		set(&["issuer", "provider", "source"])
	);

	let groups = defs.all_groups();
	assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["dns", "certs"]);
	assert_eq!(groups["certs"], set(&["issuer", "source"]));
}

#[test]
fn test_membership_through_trait() {
	let defs = sample_registry().get_definitions();
	let groups: &dyn GroupMembership = &defs;

	assert!(groups.group("dns").unwrap().contains("annotation"));
	assert!(!groups.group("certs").unwrap().contains("provider"));
	assert!(groups.group("source").is_none());
}

#[test]
fn test_display_lists_groups_in_declaration_order() {
	let defs = sample_registry().get_definitions();
	assert_eq!(
		defs.to_string(),
		"{dns: [annotation, provider, source], certs: [issuer, source]}"
	);
}
