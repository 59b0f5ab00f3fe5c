//!
//! # Shared sub-records
//!
//! Object reference and volume error as they appear inside snapshot objects
//!
use std::fmt;

use fluvio_protocol::{Decoder, Encoder};

use crate::time::Time;

/// Reference to another object in the K8 key value store
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase", default)
)]
pub struct ObjectReference {
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub kind: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub namespace: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub name: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub uid: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub api_version: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub resource_version: String,
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "String::is_empty"))]
    pub field_path: String,
}

impl ObjectReference {
    pub fn new<N>(kind: N, name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_namespace<N: Into<String>>(mut self, namespace: N) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_uid<N: Into<String>>(mut self, uid: N) -> Self {
        self.uid = uid.into();
        self
    }

    /// build reference from an existing object
    #[cfg(feature = "k8")]
    pub fn for_object<S>(obj: &k8_types::K8Obj<S>) -> Self
    where
        S: k8_types::Spec,
    {
        Self {
            kind: obj.kind.clone(),
            api_version: obj.api_version.clone(),
            namespace: obj.metadata.namespace.clone(),
            name: obj.metadata.name.clone(),
            uid: obj.metadata.uid.clone(),
            resource_version: obj.metadata.resource_version.clone(),
            ..Default::default()
        }
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}/{}", self.kind, self.name)
        } else {
            write!(f, "{}/{}/{}", self.kind, self.namespace, self.name)
        }
    }
}

/// Error reported by the entity completing a volume operation
#[derive(Encoder, Decoder, Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema),
    serde(rename_all = "camelCase", default)
)]
pub struct VolumeError {
    /// time the error was encountered
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub time: Option<Time>,
    /// human readable message, may be logged
    #[cfg_attr(feature = "use_serde", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
}

impl VolumeError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            time: Some(Time::now()),
            message: Some(message.into()),
        }
    }

    pub fn at<M: Into<String>>(time: Time, message: M) -> Self {
        Self {
            time: Some(time),
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.time {
            Some(time) => write!(f, "{} at {}", self.message(), time),
            None => write!(f, "{}", self.message()),
        }
    }
}
