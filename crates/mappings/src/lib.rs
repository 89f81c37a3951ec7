//! Cluster name mappings.
//!
//! # Purpose
//!
//! Elements (controllers and similar named units) refer to clusters by symbolic
//! names. A mapping [`Definition`] translates those names into physical cluster
//! names. Definitions are registered for a single element or for a group of
//! elements; the effective mapping of an element folds its own definition together
//! with the definitions of every group it belongs to.
//!
//! # Mental Model
//!
//! 1. **Setup:** definitions are built with [`MappingConfig`] (or [`DefinitionImpl`]
//!    directly) and registered once into a [`Registry`].
//! 2. **Snapshot:** [`Registry::get_definitions`] copies the type and name index into
//!    an immutable [`Definitions`] value. Definitions themselves are shared.
//! 3. **Resolution:** [`DefinitionLookup::get_effective`] returns an [`Aggregation`]
//!    for one element, or an error if two applicable sources disagree.
//!
//! # Invariants
//!
//! - `(type, name)` pairs are registered at most once.
//!   - Enforced in: [`Registry::register_mapping`].
//!   - Failure symptom: a second registration silently replacing the first.
//!
//! - Registered mapping tables are never mutated.
//!   - Enforced in: [`DefinitionImpl`] (copy-on-write table; the registry only holds
//!     `Arc<dyn Definition>`).
//!
//! - Effective resolution is deterministic and order-independent with respect to
//!   conflicts.
//!   - Enforced in: [`DefinitionLookup::get_effective`] (groups are folded in
//!     registration order; every group is checked against all non-identity entries of
//!     the aggregation so far).
//!   - Failure symptom: an ambiguity reported or missed depending on group order.
//!
//! # Concurrency
//!
//! - **Registration:** exclusive write lock on the registry.
//! - **Lookups on the registry:** shared read lock, held for the whole effective
//!   resolution including calls into the group membership collaborator.
//! - **Snapshots:** immutable, lock-free.

mod aggregation;
mod builder;
mod clusters;
mod definition;
mod error;
mod registry;

pub use aggregation::Aggregation;
pub use builder::MappingConfig;
pub use clusters::{determine_clusters, map_cluster};
pub use definition::{Definition, DefinitionImpl, TYPE_CONTROLLER, TYPE_GROUP, identity};
pub use error::{MappingError, Result};
pub use registry::{DefinitionLookup, Definitions, Registerable, Registry};
