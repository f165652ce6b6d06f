//! Capability contexts: anything that exposes GL constants by name.
//!
//! In a browser this is the WebGL context itself. Here it is either an
//! in-memory map or a JSON dump of the context's constants.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::emit::Artifact;
use crate::error::{GlTypesError, Result};
use crate::registry::TypeRegistry;
use crate::types::TypeCode;

/// A live object exposing named numeric constants.
pub trait CapabilityContext {
    /// Numeric value of the constant `name`, if it exists and is a code.
    fn constant(&self, name: &str) -> Option<u32>;

    /// Canonical string form of the constant, `"undefined"` when absent.
    fn constant_string(&self, name: &str) -> String {
        self.constant(name)
            .map_or_else(|| "undefined".to_string(), |value| value.to_string())
    }
}

impl<S: BuildHasher> CapabilityContext for HashMap<String, u32, S> {
    fn constant(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

impl CapabilityContext for BTreeMap<String, u32> {
    fn constant(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

/// Constants dumped from a live context, e.g. with
/// `JSON.stringify(Object.fromEntries(Object.entries(Object.getPrototypeOf(gl))))`.
///
/// Values that are not codes (strings, booleans, nested objects) are kept so
/// their string form can still be compared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ConstantTable {
    values: BTreeMap<String, Value>,
}

impl ConstantTable {
    /// Load constants from a JSON object file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlTypesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read constants: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse constants from a JSON object.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| GlTypesError::Parse {
            message: format!("Invalid constants file: {}", e),
            help: Some("Expected a JSON object mapping constant names to values".to_string()),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A JSON number as a code. `35678.0` counts: JavaScript has one number type.
fn as_code(value: &Value) -> Option<u32> {
    if let Some(v) = value.as_u64() {
        return u32::try_from(v).ok();
    }
    let v = value.as_f64()?;
    if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
        Some(v as u32)
    } else {
        None
    }
}

/// String form of a JSON value as `''+value` would produce it.
fn js_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // Integral floats below 1e21 print without a fraction.
            Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e21 => {
                if v == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.0}", v)
                }
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

impl CapabilityContext for ConstantTable {
    fn constant(&self, name: &str) -> Option<u32> {
        self.values.get(name).and_then(as_code)
    }

    fn constant_string(&self, name: &str) -> String {
        self.values
            .get(name)
            .map_or_else(|| "undefined".to_string(), js_string)
    }
}

/// Generated tables that can be checked against a context.
pub trait TypeTables {
    /// TYPE_INFO as (code, name) pairs.
    fn type_info(&self) -> Vec<(TypeCode, &str)>;

    /// TYPE_CODES as (name, code) pairs.
    fn type_codes(&self) -> Vec<(&str, TypeCode)>;
}

impl TypeTables for TypeRegistry {
    fn type_info(&self) -> Vec<(TypeCode, &str)> {
        self.descriptors().map(|d| (d.code, d.name.as_str())).collect()
    }

    fn type_codes(&self) -> Vec<(&str, TypeCode)> {
        TypeRegistry::type_codes(self)
            .map(|(name, code)| (name.as_str(), code))
            .collect()
    }
}

impl TypeTables for Artifact {
    fn type_info(&self) -> Vec<(TypeCode, &str)> {
        self.type_info_names().collect()
    }

    fn type_codes(&self) -> Vec<(&str, TypeCode)> {
        self.type_codes
            .iter()
            .map(|(name, code)| (name.as_str(), TypeCode(*code)))
            .collect()
    }
}
