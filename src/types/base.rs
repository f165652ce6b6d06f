//! Base type table.
//!
//! The only place where byte sizes and storage kinds are written by hand.
//! Everything else in the registry is derived from these entries.

use super::descriptor::{ComposedType, ScalarKind, StorageKind, TypeShape};
use super::name::{TypeCode, TypeName};

/// One hand-authored base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseType {
    pub name: TypeName,
    pub kind: ScalarKind,
    pub byte_size: u32,
    pub storage: StorageKind,
    pub is_opaque_handle: bool,
}

const fn base(
    name: TypeName,
    kind: ScalarKind,
    byte_size: u32,
    storage: StorageKind,
    is_opaque_handle: bool,
) -> BaseType {
    BaseType {
        name,
        kind,
        byte_size,
        storage,
        is_opaque_handle,
    }
}

/// Scalar and sampler types everything else is composed from.
///
/// BOOL is stored as a 32-bit signed integer: GLES 2.0 (2.10.4) accepts both
/// the integer and float setters for booleans, 0 is false and anything else
/// is true. Samplers are signed because `getUniform` returns a GLint for them.
pub const BASE_TYPES: [BaseType; 10] = [
    base(TypeName::Byte, ScalarKind::Integer, 1, StorageKind::Int8, false),
    base(TypeName::UnsignedByte, ScalarKind::Integer, 1, StorageKind::Uint8, false),
    base(TypeName::Short, ScalarKind::Integer, 2, StorageKind::Int16, false),
    base(TypeName::UnsignedShort, ScalarKind::Integer, 2, StorageKind::Uint16, false),
    base(TypeName::Int, ScalarKind::Integer, 4, StorageKind::Int32, false),
    base(TypeName::UnsignedInt, ScalarKind::Integer, 4, StorageKind::Uint32, false),
    base(TypeName::Float, ScalarKind::Float, 4, StorageKind::Float32, false),
    base(TypeName::Bool, ScalarKind::Integer, 4, StorageKind::Int32, false),
    base(TypeName::Sampler2d, ScalarKind::Integer, 4, StorageKind::Int32, true),
    base(TypeName::SamplerCube, ScalarKind::Integer, 4, StorageKind::Int32, true),
];

/// Types that can appear in WebGL 1 attributes and uniforms.
pub const UNIFORM_TYPE_CODES: [(TypeName, u32); 15] = [
    (TypeName::FloatVec2, 0x8B50),
    (TypeName::FloatVec3, 0x8B51),
    (TypeName::FloatVec4, 0x8B52),
    (TypeName::IntVec2, 0x8B53),
    (TypeName::IntVec3, 0x8B54),
    (TypeName::IntVec4, 0x8B55),
    (TypeName::Bool, 0x8B56),
    (TypeName::BoolVec2, 0x8B57),
    (TypeName::BoolVec3, 0x8B58),
    (TypeName::BoolVec4, 0x8B59),
    (TypeName::FloatMat2, 0x8B5A),
    (TypeName::FloatMat3, 0x8B5B),
    (TypeName::FloatMat4, 0x8B5C),
    (TypeName::Sampler2d, 0x8B5E),
    (TypeName::SamplerCube, 0x8B60),
];

/// WebGL 1 buffer data types.
pub const DATA_TYPE_CODES: [(TypeName, u32); 7] = [
    (TypeName::Byte, 0x1400),
    (TypeName::UnsignedByte, 0x1401),
    (TypeName::Short, 0x1402),
    (TypeName::UnsignedShort, 0x1403),
    (TypeName::Int, 0x1404),
    (TypeName::UnsignedInt, 0x1405),
    (TypeName::Float, 0x1406),
];

impl BaseType {
    /// Look up a base type by name.
    pub fn get(name: TypeName) -> Option<&'static BaseType> {
        BASE_TYPES.iter().find(|b| b.name == name)
    }

    /// This type used as a scalar.
    pub fn composed(&self) -> ComposedType {
        ComposedType {
            name: self.name,
            element_type: self.name,
            kind: self.kind,
            shape: TypeShape::Scalar,
            element_count: 1,
            byte_size: self.byte_size,
            storage: self.storage,
            is_opaque_handle: self.is_opaque_handle,
        }
    }
}

/// Every (name, code) pair in the input table, uniform types first.
pub fn webgl1_type_codes() -> impl Iterator<Item = (TypeName, TypeCode)> {
    UNIFORM_TYPE_CODES
        .iter()
        .chain(DATA_TYPE_CODES.iter())
        .map(|&(name, code)| (name, TypeCode(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_matches_storage() {
        for b in &BASE_TYPES {
            assert_eq!(b.byte_size, b.storage.byte_width(), "{}", b.name);
        }
    }

    #[test]
    fn test_bool_is_int32() {
        let b = BaseType::get(TypeName::Bool).unwrap();
        assert_eq!(b.kind, ScalarKind::Integer);
        assert_eq!(b.storage, StorageKind::Int32);
        assert!(!b.is_opaque_handle);
    }

    #[test]
    fn test_only_samplers_are_opaque() {
        let opaque: Vec<_> = BASE_TYPES
            .iter()
            .filter(|b| b.is_opaque_handle)
            .map(|b| b.name)
            .collect();
        assert_eq!(opaque, vec![TypeName::Sampler2d, TypeName::SamplerCube]);
    }

    #[test]
    fn test_code_table_size() {
        assert_eq!(webgl1_type_codes().count(), 22);
    }
}
