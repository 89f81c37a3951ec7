//! Core types shared by the group and mapping registries: name sets and
//! cluster naming.

/// Cluster naming constants and catalogs of known clusters.
pub mod cluster;
/// Ordered string sets.
pub mod set;

pub use cluster::{CLUSTER_MAIN, ClusterCatalog, cluster_name};
pub use set::StringSet;
