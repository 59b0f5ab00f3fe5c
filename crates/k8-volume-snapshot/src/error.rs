use std::io::Error as IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot source must specify exactly one member, none found")]
    NoSnapshotSource,
    #[error("snapshot source must specify exactly one member, found: {0}")]
    MultipleSnapshotSources(usize),
    #[error("snapshot source driver is required")]
    MissingDriver,
    #[error("snapshot handle is required")]
    MissingSnapshotHandle,
    #[error("snapshot creation time must not be negative: {0}")]
    NegativeCreationTime(i64),
    #[error("snapshot class must name a snapshotter")]
    MissingSnapshotter,
    #[error("unknown snapshot kind: {0}")]
    UnknownKind(String),
    #[error("unsupported api version: {found}, expected: {expected}")]
    ApiVersion { found: String, expected: String },
    #[error("IoError: {0}")]
    Io(#[from] IoError),
    #[cfg(feature = "use_serde")]
    #[error("Yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[cfg(feature = "use_serde")]
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
}
