//!
//! # Volume Snapshot Metadata
//!
//! Snapshot request, snapshot class and snapshot content definitions
//! for the `snapshot.storage.k8s.io` API group.
//!
pub mod class;
pub mod content;
pub mod error;
pub mod reference;
pub mod snapshot;
pub mod time;

#[cfg(feature = "k8")]
pub mod binding;
#[cfg(feature = "k8")]
pub mod crd;
#[cfg(feature = "k8")]
pub mod manifest;

pub use error::SnapshotError;
pub use reference::{ObjectReference, VolumeError};
pub use time::Time;

#[cfg(feature = "k8")]
pub use k8_types;

/// API group of all snapshot resources
pub const GROUP: &str = "snapshot.storage.k8s.io";

/// current API version of snapshot resources
pub const V1ALPHA1: &str = "v1alpha1";

pub const VOLUME_SNAPSHOT_RESOURCE_PLURAL: &str = "volumesnapshots";
pub const VOLUME_SNAPSHOT_CLASS_RESOURCE_PLURAL: &str = "volumesnapshotclasses";
pub const VOLUME_SNAPSHOT_CONTENT_RESOURCE_PLURAL: &str = "volumesnapshotcontents";

#[cfg(feature = "use_serde")]
pub(crate) fn is_zero(val: &i64) -> bool {
    *val == 0
}

/// treat empty string the same as absent value
pub(crate) fn non_empty(val: &Option<String>) -> Option<&str> {
    val.as_deref().filter(|s| !s.is_empty())
}
