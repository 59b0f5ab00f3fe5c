//!
//! # Custom Resource Definitions
//!
//! Generates the CRD manifests that register the snapshot kinds with the cluster.
//! Validation schemas are derived from the spec types.
//!
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde_json::{Map, Value, json};
use tracing::debug;

use k8_types::Spec;

use crate::SnapshotError;
use crate::class::{VolumeSnapshotClassHeader, VolumeSnapshotClassSpec};
use crate::content::VolumeSnapshotContentSpec;
use crate::snapshot::{VolumeSnapshotSpec, VolumeSnapshotStatus};

pub const CRD_API_VERSION: &str = "apiextensions.k8s.io/v1";
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// Spec that can be registered as a custom resource
pub trait CrdSchema: Spec {
    /// expose status as a subresource
    const STATUS_SUBRESOURCE: bool = false;

    /// schema of the object fields beside `apiVersion`, `kind` and `metadata`
    fn properties() -> Result<Map<String, Value>, SnapshotError>;
}

impl CrdSchema for VolumeSnapshotSpec {
    const STATUS_SUBRESOURCE: bool = true;

    fn properties() -> Result<Map<String, Value>, SnapshotError> {
        let mut properties = Map::new();
        properties.insert("spec".to_owned(), schema_of::<VolumeSnapshotSpec>()?);
        properties.insert("status".to_owned(), schema_of::<VolumeSnapshotStatus>()?);
        Ok(properties)
    }
}

impl CrdSchema for VolumeSnapshotClassSpec {
    fn properties() -> Result<Map<String, Value>, SnapshotError> {
        // class fields live at the top level of the object
        let header = schema_of::<VolumeSnapshotClassHeader>()?;
        Ok(header
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default())
    }
}

impl CrdSchema for VolumeSnapshotContentSpec {
    fn properties() -> Result<Map<String, Value>, SnapshotError> {
        let mut properties = Map::new();
        properties.insert("spec".to_owned(), schema_of::<VolumeSnapshotContentSpec>()?);
        Ok(properties)
    }
}

/// inlined openAPI v3 schema, as required by structural CRD schemas
fn schema_of<T: JsonSchema>() -> Result<Value, SnapshotError> {
    let generator = SchemaSettings::openapi3()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let mut value = serde_json::to_value(&schema)?;
    if let Some(root) = value.as_object_mut() {
        root.remove("$schema");
        root.remove("title");
    }
    Ok(value)
}

/// CRD manifest for a snapshot kind
pub fn definition<S: CrdSchema>() -> Result<Value, SnapshotError> {
    let crd = S::metadata();
    let name = format!("{}.{}", crd.names.plural, crd.group);
    debug!(%name, "generating custom resource definition");

    let scope = if S::NAME_SPACED { "Namespaced" } else { "Cluster" };

    let mut version = json!({
        "name": crd.version,
        "served": true,
        "storage": true,
        "schema": {
            "openAPIV3Schema": {
                "type": "object",
                "properties": S::properties()?
            }
        }
    });
    if S::STATUS_SUBRESOURCE {
        version["subresources"] = json!({ "status": {} });
    }

    Ok(json!({
        "apiVersion": CRD_API_VERSION,
        "kind": CRD_KIND,
        "metadata": { "name": name },
        "spec": {
            "group": crd.group,
            "names": {
                "kind": crd.names.kind,
                "listKind": format!("{}List", crd.names.kind),
                "plural": crd.names.plural,
                "singular": crd.names.singular
            },
            "scope": scope,
            "versions": [version]
        }
    }))
}

/// manifests of all snapshot kinds, as one multi document YAML
pub fn definitions_yaml() -> Result<String, SnapshotError> {
    let definitions = [
        definition::<VolumeSnapshotSpec>()?,
        definition::<VolumeSnapshotClassSpec>()?,
        definition::<VolumeSnapshotContentSpec>()?,
    ];

    let mut output = String::new();
    for definition in definitions.iter() {
        output.push_str("---\n");
        output.push_str(&serde_yaml::to_string(definition)?);
    }
    Ok(output)
}
