//! Registry serialization.
//!
//! Output is byte-identical across runs for the same registry: codes are
//! sorted numerically and names lexicographically before anything is
//! written, and descriptor fields always appear in the same order.

mod js;
mod json;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GlTypesError, Result};
use crate::registry::TypeRegistry;
use crate::types::{TypeCode, TypeDescriptor, TypeName};

pub use json::{Artifact, ArtifactEntry};

/// Artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// ES module exporting TYPE_INFO and TYPE_CODES
    #[default]
    Js,
    /// JSON document with TYPE_INFO and TYPE_CODES objects
    Json,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Js => "js",
            Format::Json => "json",
        }
    }
}

/// Options controlling what goes into the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub format: Format,
    /// Include the `TYPE_INFO_test(gl)` runtime check (JS only).
    pub validator: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            format: Format::Js,
            validator: true,
        }
    }
}

/// Field documentation shared by every format.
const FIELD_DOCS: &[&str] = &[
    "TYPE_INFO has one entry per GL type code. Each entry has, as fields:",
    "- name                  GL constant name, such that ''+gl[TYPE_INFO[code].name] === ''+code",
    "- elementType           base type of the elements (FLOAT for FLOAT_MAT4, BOOL for BOOL_VEC2)",
    "- nelements             primitive elements per value (16 for FLOAT_MAT4, 3 for FLOAT_VEC3)",
    "- nattributes           vertex attribute locations taken up (1 except for matrices)",
    "- nbytes                bytes needed to store one value (64 for FLOAT_MAT4)",
    "- storageRepresentation TypedArray able to hold the elements (Float32Array for FLOAT_MAT4)",
    "- uniformv              uniform setter, called as gl[uniformv](location, value), or",
    "                        gl[uniformv](location, transpose, value) for matrices; null if none",
    "- isSampler             true for opaque sampler handles, which are not numeric data",
    "",
    "TYPE_CODES maps names to codes, such that gl[name] === TYPE_CODES[name].",
];

/// Descriptors sorted by code.
fn sorted_descriptors(registry: &TypeRegistry) -> Vec<&TypeDescriptor> {
    let mut descriptors: Vec<&TypeDescriptor> = registry.descriptors().collect();
    descriptors.sort_by_key(|d| d.code);
    descriptors
}

/// The name → code table sorted by name.
fn sorted_type_codes(registry: &TypeRegistry) -> Vec<(TypeName, TypeCode)> {
    let mut codes: Vec<(TypeName, TypeCode)> = registry.type_codes().collect();
    codes.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    codes
}

/// Serialize a registry to artifact text.
pub fn emit(registry: &TypeRegistry, options: &EmitOptions) -> Result<String> {
    match options.format {
        Format::Js => Ok(js::emit(registry, options.validator)),
        Format::Json => json::emit(registry),
    }
}

/// Serialize a registry and write it to `path`.
pub fn write_artifact(registry: &TypeRegistry, options: &EmitOptions, path: &Path) -> Result<()> {
    let text = emit(registry, options)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GlTypesError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, text).map_err(|e| GlTypesError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write artifact: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> TypeRegistry {
        TypeRegistry::webgl1().unwrap()
    }

    #[test]
    fn test_emit_is_deterministic() {
        for format in [Format::Js, Format::Json] {
            let options = EmitOptions {
                format,
                validator: true,
            };
            let a = emit(&registry(), &options).unwrap();
            let b = emit(&registry(), &options).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        use crate::registry::RegistryBuilder;
        use crate::types::webgl1_type_codes;

        let mut reversed: Vec<_> = webgl1_type_codes().collect();
        reversed.reverse();
        let mut builder = RegistryBuilder::new();
        builder.add_types(reversed);
        let shuffled = builder.build().unwrap();

        let options = EmitOptions::default();
        assert_eq!(
            emit(&registry(), &options).unwrap(),
            emit(&shuffled, &options).unwrap()
        );
    }

    #[test]
    fn test_sorted_type_codes_by_name() {
        let registry = registry();
        let names: Vec<_> = sorted_type_codes(&registry)
            .into_iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"BOOL"));
        assert_eq!(names.last(), Some(&"UNSIGNED_SHORT"));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_write_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gen").join("webgltypes.js");

        write_artifact(&registry(), &EmitOptions::default(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("export const TYPE_INFO = {"));
        assert!(content.contains("export const TYPE_CODES = {"));
    }
}
