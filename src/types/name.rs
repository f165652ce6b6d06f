//! Type names and numeric type codes.
//!
//! Every type the registry knows about is a variant of `TypeName`; its
//! symbolic form is the GL constant name (`FLOAT_MAT4`), which is also the
//! property a live context exposes the code under.

use std::fmt;
use std::str::FromStr;

use crate::error::ConstructionError;

/// Numeric GL type code (e.g. `0x8B5C` for `FLOAT_MAT4`).
///
/// `Display` gives the canonical decimal form, which is what a context value
/// or a JavaScript object key holding the code stringifies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode(pub u32);

impl TypeCode {
    /// Hex literal form used in generated source, e.g. `0x8B5C`.
    pub fn hex(&self) -> String {
        format!("0x{:04X}", self.0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TypeCode {
    fn from(value: u32) -> Self {
        TypeCode(value)
    }
}

/// Every type name the registry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeName {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
    FloatVec2,
    FloatVec3,
    FloatVec4,
    IntVec2,
    IntVec3,
    IntVec4,
    Bool,
    BoolVec2,
    BoolVec3,
    BoolVec4,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    Sampler2d,
    SamplerCube,
}

impl TypeName {
    pub const ALL: [TypeName; 22] = [
        TypeName::Byte,
        TypeName::UnsignedByte,
        TypeName::Short,
        TypeName::UnsignedShort,
        TypeName::Int,
        TypeName::UnsignedInt,
        TypeName::Float,
        TypeName::FloatVec2,
        TypeName::FloatVec3,
        TypeName::FloatVec4,
        TypeName::IntVec2,
        TypeName::IntVec3,
        TypeName::IntVec4,
        TypeName::Bool,
        TypeName::BoolVec2,
        TypeName::BoolVec3,
        TypeName::BoolVec4,
        TypeName::FloatMat2,
        TypeName::FloatMat3,
        TypeName::FloatMat4,
        TypeName::Sampler2d,
        TypeName::SamplerCube,
    ];

    /// The GL constant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Byte => "BYTE",
            TypeName::UnsignedByte => "UNSIGNED_BYTE",
            TypeName::Short => "SHORT",
            TypeName::UnsignedShort => "UNSIGNED_SHORT",
            TypeName::Int => "INT",
            TypeName::UnsignedInt => "UNSIGNED_INT",
            TypeName::Float => "FLOAT",
            TypeName::FloatVec2 => "FLOAT_VEC2",
            TypeName::FloatVec3 => "FLOAT_VEC3",
            TypeName::FloatVec4 => "FLOAT_VEC4",
            TypeName::IntVec2 => "INT_VEC2",
            TypeName::IntVec3 => "INT_VEC3",
            TypeName::IntVec4 => "INT_VEC4",
            TypeName::Bool => "BOOL",
            TypeName::BoolVec2 => "BOOL_VEC2",
            TypeName::BoolVec3 => "BOOL_VEC3",
            TypeName::BoolVec4 => "BOOL_VEC4",
            TypeName::FloatMat2 => "FLOAT_MAT2",
            TypeName::FloatMat3 => "FLOAT_MAT3",
            TypeName::FloatMat4 => "FLOAT_MAT4",
            TypeName::Sampler2d => "SAMPLER_2D",
            TypeName::SamplerCube => "SAMPLER_CUBE",
        }
    }

    /// Whether this name denotes a matrix type.
    pub fn is_matrix(&self) -> bool {
        matches!(
            self,
            TypeName::FloatMat2 | TypeName::FloatMat3 | TypeName::FloatMat4
        )
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeName {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConstructionError::UnknownTypeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code_forms() {
        let code = TypeCode(0x8B5C);
        assert_eq!(code.to_string(), "35676");
        assert_eq!(code.hex(), "0x8B5C");
        assert_eq!(TypeCode(0x1400).hex(), "0x1400");
    }

    #[test]
    fn test_name_round_trip() {
        for name in TypeName::ALL {
            assert_eq!(name.as_str().parse::<TypeName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "FLOAT_MAT5".parse::<TypeName>().unwrap_err();
        assert_eq!(err, ConstructionError::UnknownTypeName("FLOAT_MAT5".to_string()));
    }

    #[test]
    fn test_is_matrix() {
        assert!(TypeName::FloatMat3.is_matrix());
        assert!(!TypeName::FloatVec3.is_matrix());
        assert!(!TypeName::Sampler2d.is_matrix());
    }
}
