//! Type registry: every descriptor keyed by code, plus the name → code
//! inverse.
//!
//! # Example
//!
//! ```ignore
//! use gltypes::registry::{RegistryBuilder, TypeRegistry};
//!
//! let registry = RegistryBuilder::webgl1().build()?;
//! let mat4 = registry.get_by_name(TypeName::FloatMat4).unwrap();
//! assert_eq!(mat4.attribute_slots, 4);
//! ```

use std::collections::BTreeMap;

use crate::error::{ConstructionError, Result};
use crate::resolve::{attribute_slots, uniform_setter};
use crate::types::{derive, webgl1_type_codes, TypeCode, TypeDescriptor, TypeName};

/// Complete, immutable set of type descriptors.
///
/// The code ↔ name mapping is a bijection; `RegistryBuilder::build` refuses
/// to produce a registry where it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    by_code: BTreeMap<TypeCode, TypeDescriptor>,
    by_name: BTreeMap<TypeName, TypeCode>,
}

impl TypeRegistry {
    /// The full WebGL 1 registry.
    pub fn webgl1() -> Result<Self> {
        RegistryBuilder::webgl1().build()
    }

    /// Get a descriptor by code.
    pub fn get(&self, code: TypeCode) -> Option<&TypeDescriptor> {
        self.by_code.get(&code)
    }

    /// Get a descriptor by name.
    pub fn get_by_name(&self, name: TypeName) -> Option<&TypeDescriptor> {
        self.code_of(name).and_then(|code| self.get(code))
    }

    /// Get the code registered for a name.
    pub fn code_of(&self, name: TypeName) -> Option<TypeCode> {
        self.by_name.get(&name).copied()
    }

    /// All descriptors in ascending code order.
    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.by_code.values()
    }

    /// The name → code table.
    pub fn type_codes(&self) -> impl Iterator<Item = (TypeName, TypeCode)> + '_ {
        self.by_name.iter().map(|(name, code)| (*name, *code))
    }

    /// Opaque sampler handles.
    pub fn samplers(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.descriptors().filter(|d| d.is_opaque_handle)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Builder for constructing a TypeRegistry from (name, code) pairs.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(TypeName, TypeCode)>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding the WebGL 1 code table.
    pub fn webgl1() -> Self {
        let mut builder = Self::new();
        builder.add_types(webgl1_type_codes());
        builder
    }

    /// Register a type under a code.
    pub fn add_type(&mut self, name: TypeName, code: impl Into<TypeCode>) -> &mut Self {
        self.entries.push((name, code.into()));
        self
    }

    /// Register multiple types.
    pub fn add_types(
        &mut self,
        types: impl IntoIterator<Item = (TypeName, TypeCode)>,
    ) -> &mut Self {
        for (name, code) in types {
            self.add_type(name, code);
        }
        self
    }

    /// Derive every descriptor and check the bijection.
    ///
    /// Stops at the first construction error.
    pub fn build(self) -> Result<TypeRegistry> {
        let mut by_code: BTreeMap<TypeCode, TypeDescriptor> = BTreeMap::new();
        let mut by_name: BTreeMap<TypeName, TypeCode> = BTreeMap::new();

        for (name, code) in self.entries {
            if let Some(&first) = by_name.get(&name) {
                return Err(ConstructionError::DuplicateName {
                    name,
                    first,
                    second: code,
                }
                .into());
            }
            if let Some(existing) = by_code.get(&code) {
                return Err(ConstructionError::DuplicateCode {
                    code,
                    first: existing.name,
                    second: name,
                }
                .into());
            }

            let composed = derive(name)?;
            let setter = uniform_setter(&composed)?;
            let descriptor =
                TypeDescriptor::resolved(composed, code, attribute_slots(name), setter);

            by_name.insert(name, code);
            by_code.insert(code, descriptor);
        }

        Ok(TypeRegistry { by_code, by_name })
    }
}
