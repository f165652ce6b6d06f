//! JSON output, and loading a JSON artifact back for validation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{GlTypesError, Result};
use crate::registry::TypeRegistry;
use crate::types::{TypeCode, TypeDescriptor, TypeName};

use super::{sorted_descriptors, sorted_type_codes, FIELD_DOCS};

/// One TYPE_INFO entry as it appears in the JSON artifact.
///
/// Field order here is the field order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEntry {
    pub name: String,
    pub element_type: String,
    pub nelements: u32,
    pub nattributes: u32,
    pub nbytes: u32,
    pub storage_representation: String,
    pub uniformv: Option<String>,
    pub is_sampler: bool,
}

impl From<&TypeDescriptor> for ArtifactEntry {
    fn from(d: &TypeDescriptor) -> Self {
        Self {
            name: d.name.to_string(),
            element_type: d.element_type.to_string(),
            nelements: d.element_count,
            nattributes: d.attribute_slots,
            nbytes: d.byte_size,
            storage_representation: d.storage.typed_array().to_string(),
            uniformv: d.setter_name(),
            is_sampler: d.is_opaque_handle,
        }
    }
}

/// A JSON artifact loaded from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(rename = "TYPE_INFO")]
    pub type_info: BTreeMap<u32, ArtifactEntry>,
    #[serde(rename = "TYPE_CODES")]
    pub type_codes: BTreeMap<String, u32>,
}

impl Artifact {
    /// Load an artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlTypesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read artifact: {}", e),
        })?;

        Self::from_json(&content)
    }

    /// Parse an artifact from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| GlTypesError::Parse {
            message: format!("Invalid artifact: {}", e),
            help: Some("Regenerate it with `gltypes generate --format json`".to_string()),
        })
    }

    /// TYPE_INFO as (code, name) pairs.
    pub fn type_info_names(&self) -> impl Iterator<Item = (TypeCode, &str)> {
        self.type_info
            .iter()
            .map(|(code, entry)| (TypeCode(*code), entry.name.as_str()))
    }
}

/// TYPE_INFO table, written in the order given.
struct TypeInfoTable<'a>(Vec<&'a TypeDescriptor>);

impl Serialize for TypeInfoTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for d in &self.0 {
            map.serialize_entry(&d.code.to_string(), &ArtifactEntry::from(*d))?;
        }
        map.end()
    }
}

/// TYPE_CODES table, written in the order given.
struct TypeCodesTable(Vec<(TypeName, TypeCode)>);

impl Serialize for TypeCodesTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, code) in &self.0 {
            map.serialize_entry(name.as_str(), &code.value())?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct JsonArtifact<'a> {
    header: &'a [&'a str],
    #[serde(rename = "TYPE_INFO")]
    type_info: TypeInfoTable<'a>,
    #[serde(rename = "TYPE_CODES")]
    type_codes: TypeCodesTable,
}

pub(super) fn emit(registry: &TypeRegistry) -> Result<String> {
    let artifact = JsonArtifact {
        header: FIELD_DOCS,
        type_info: TypeInfoTable(sorted_descriptors(registry)),
        type_codes: TypeCodesTable(sorted_type_codes(registry)),
    };

    to_pretty_json(&artifact)
}

/// Pretty-printed JSON with a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| GlTypesError::Emit {
        message: format!("Failed to serialize registry: {}", e),
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TypeRegistry {
        TypeRegistry::webgl1().unwrap()
    }

    #[test]
    fn test_json_round_trip_matches_registry() {
        let registry = registry();
        let artifact = Artifact::from_json(&emit(&registry).unwrap()).unwrap();

        assert_eq!(artifact.type_info.len(), registry.len());
        assert_eq!(artifact.type_codes.len(), registry.len());
        for d in registry.descriptors() {
            assert_eq!(artifact.type_info[&d.code.value()], ArtifactEntry::from(d));
            assert_eq!(artifact.type_codes[d.name.as_str()], d.code.value());
        }
    }

    #[test]
    fn test_json_keys_in_code_order() {
        let text = emit(&registry()).unwrap();
        let byte = text.find("\"5120\": {").unwrap();
        let float_mat4 = text.find("\"35676\": {").unwrap();
        assert!(byte < float_mat4);
    }

    #[test]
    fn test_float_mat4_entry_snapshot() {
        let registry = registry();
        let d = registry.get_by_name(TypeName::FloatMat4).unwrap();

        insta::assert_json_snapshot!(ArtifactEntry::from(d), @r###"
        {
          "name": "FLOAT_MAT4",
          "elementType": "FLOAT",
          "nelements": 16,
          "nattributes": 4,
          "nbytes": 64,
          "storageRepresentation": "Float32Array",
          "uniformv": "uniformMatrix4fv",
          "isSampler": false
        }
        "###);
    }

    #[test]
    fn test_serialize_failure_is_emit_error() {
        let mut bad = BTreeMap::new();
        bad.insert((1u8, 2u8), "non-string key");

        let err = to_pretty_json(&bad).unwrap_err();
        assert!(matches!(err, GlTypesError::Emit { .. }));
        assert!(err.to_string().starts_with("Emit error: Failed to serialize registry"));
        assert_eq!(
            miette::Diagnostic::code(&err).map(|c| c.to_string()).as_deref(),
            Some("gltypes::emit")
        );
    }

    #[test]
    fn test_invalid_artifact() {
        let err = Artifact::from_json("{\"TYPE_INFO\": 3}").unwrap_err();
        assert!(matches!(err, GlTypesError::Parse { .. }));
    }

    #[test]
    fn test_load_artifact_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webgltypes.json");
        std::fs::write(&path, emit(&registry()).unwrap()).unwrap();

        let artifact = Artifact::load(&path).unwrap();
        assert_eq!(artifact.type_codes["SAMPLER_CUBE"], 0x8B60);
        assert_eq!(artifact.header.len(), FIELD_DOCS.len());
    }
}
