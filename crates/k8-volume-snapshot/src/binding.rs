//!
//! # Binding
//!
//! Read only checks of the two sided reference between a snapshot and its content.
//! A snapshot is bound when it names the content, the content refers back to
//! the snapshot and the snapshot status reports it as ready.
//!
use thiserror::Error;
use tracing::{debug, trace};

use crate::content::VolumeSnapshotContent;
use crate::snapshot::VolumeSnapshot;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BindingError {
    #[error("snapshot {snapshot} does not name any content")]
    SnapshotUnbound { snapshot: String },
    #[error("snapshot {snapshot} names content {expected}, found: {found}")]
    ContentMismatch {
        snapshot: String,
        expected: String,
        found: String,
    },
    #[error("content {content} does not refer to any snapshot")]
    ContentUnbound { content: String },
    #[error("content {content} refers to snapshot {found}, expected: {expected}")]
    SnapshotMismatch {
        content: String,
        expected: String,
        found: String,
    },
    #[error("content {content} refers to snapshot uid {found}, expected: {expected}")]
    UidMismatch {
        content: String,
        expected: String,
        found: String,
    },
}

fn qualified_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_owned()
    } else {
        format!("{namespace}/{name}")
    }
}

/// check that snapshot and content refer to each other
pub fn check_binding(
    snapshot: &VolumeSnapshot,
    content: &VolumeSnapshotContent,
) -> Result<(), BindingError> {
    let snapshot_name = qualified_name(&snapshot.metadata.namespace, &snapshot.metadata.name);
    let content_name = content.metadata.name.clone();

    trace!(%snapshot_name, %content_name, "checking binding");

    match snapshot.spec.snapshot_content_name() {
        None => {
            return Err(BindingError::SnapshotUnbound {
                snapshot: snapshot_name,
            });
        }
        Some(name) if name != content_name => {
            return Err(BindingError::ContentMismatch {
                snapshot: snapshot_name,
                expected: name.to_owned(),
                found: content_name,
            });
        }
        Some(_) => {}
    }

    let Some(reference) = content.spec.volume_snapshot_ref.as_ref() else {
        return Err(BindingError::ContentUnbound {
            content: content_name,
        });
    };

    let referenced = qualified_name(&reference.namespace, &reference.name);
    if referenced != snapshot_name {
        return Err(BindingError::SnapshotMismatch {
            content: content_name,
            expected: snapshot_name,
            found: referenced,
        });
    }

    // uid only counts when both sides carry one
    if !reference.uid.is_empty()
        && !snapshot.metadata.uid.is_empty()
        && reference.uid != snapshot.metadata.uid
    {
        return Err(BindingError::UidMismatch {
            content: content_name,
            expected: snapshot.metadata.uid.clone(),
            found: reference.uid.clone(),
        });
    }

    Ok(())
}

/// mutually referenced and reported ready
pub fn is_bound(snapshot: &VolumeSnapshot, content: &VolumeSnapshotContent) -> bool {
    match check_binding(snapshot, content) {
        Ok(()) => snapshot.status.bound,
        Err(err) => {
            debug!(%err, "snapshot not bound");
            false
        }
    }
}
