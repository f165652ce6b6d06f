//! Type descriptors: the complete metadata for one registry entry.

use std::fmt;

use super::name::{TypeCode, TypeName};

/// Scalar class of a type's underlying storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Float,
}

impl ScalarKind {
    /// Tag used in uniform setter names (`uniform3iv`, `uniform3fv`).
    pub fn tag(&self) -> char {
        match self {
            ScalarKind::Integer => 'i',
            ScalarKind::Float => 'f',
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Integer => write!(f, "integer"),
            ScalarKind::Float => write!(f, "float"),
        }
    }
}

/// Fixed-width numeric representation that holds values of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
}

impl StorageKind {
    /// Width of one scalar in bytes.
    pub fn byte_width(&self) -> u32 {
        match self {
            StorageKind::Int8 | StorageKind::Uint8 => 1,
            StorageKind::Int16 | StorageKind::Uint16 => 2,
            StorageKind::Int32 | StorageKind::Uint32 | StorageKind::Float32 => 4,
        }
    }

    /// JavaScript typed array constructor able to hold the scalars.
    pub fn typed_array(&self) -> &'static str {
        match self {
            StorageKind::Int8 => "Int8Array",
            StorageKind::Uint8 => "Uint8Array",
            StorageKind::Int16 => "Int16Array",
            StorageKind::Uint16 => "Uint16Array",
            StorageKind::Int32 => "Int32Array",
            StorageKind::Uint32 => "Uint32Array",
            StorageKind::Float32 => "Float32Array",
        }
    }
}

/// How a descriptor was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Scalar,
    Vector(u32),
    Matrix(u32),
}

/// The call that uploads a value of a type to a shader uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSetter {
    /// `uniform{components}{i|f}v`
    Vector { components: u32, kind: ScalarKind },
    /// `uniformMatrix{dimension}fv`
    Matrix { dimension: u32 },
}

impl UniformSetter {
    /// Matrix setters take a `transpose` argument before the value.
    pub fn takes_transpose(&self) -> bool {
        matches!(self, UniformSetter::Matrix { .. })
    }
}

impl fmt::Display for UniformSetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformSetter::Vector { components, kind } => {
                write!(f, "uniform{}{}v", components, kind.tag())
            }
            UniformSetter::Matrix { dimension } => write!(f, "uniformMatrix{}fv", dimension),
        }
    }
}

/// A type as produced by composition, before the registry assigns its code,
/// attribute slots and uniform setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedType {
    pub name: TypeName,
    /// Base type this was composed from (`BOOL` for `BOOL_VEC4`).
    pub element_type: TypeName,
    pub kind: ScalarKind,
    pub shape: TypeShape,
    pub element_count: u32,
    pub byte_size: u32,
    pub storage: StorageKind,
    pub is_opaque_handle: bool,
}

impl ComposedType {
    pub fn is_matrix(&self) -> bool {
        matches!(self.shape, TypeShape::Matrix(_))
    }
}

/// Complete metadata for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Code the type is registered under.
    pub code: TypeCode,
    pub name: TypeName,
    /// Base type this was composed from (`BOOL` for `BOOL_VEC4`).
    pub element_type: TypeName,
    pub kind: ScalarKind,
    pub shape: TypeShape,
    /// Number of primitive scalar components.
    pub element_count: u32,
    /// Vertex attribute locations consumed.
    pub attribute_slots: u32,
    pub byte_size: u32,
    pub storage: StorageKind,
    /// Samplers: stored as an integer, never numeric data.
    pub is_opaque_handle: bool,
    pub uniform_setter: Option<UniformSetter>,
}

impl TypeDescriptor {
    /// Completes a composed type with its registry-assigned facts.
    pub(crate) fn resolved(
        composed: ComposedType,
        code: TypeCode,
        attribute_slots: u32,
        uniform_setter: Option<UniformSetter>,
    ) -> Self {
        TypeDescriptor {
            code,
            name: composed.name,
            element_type: composed.element_type,
            kind: composed.kind,
            shape: composed.shape,
            element_count: composed.element_count,
            attribute_slots,
            byte_size: composed.byte_size,
            storage: composed.storage,
            is_opaque_handle: composed.is_opaque_handle,
            uniform_setter,
        }
    }

    pub fn is_matrix(&self) -> bool {
        matches!(self.shape, TypeShape::Matrix(_))
    }

    /// Components fed to each attribute location (the `size` argument of a
    /// vertex attribute pointer).
    pub fn components_per_slot(&self) -> u32 {
        self.element_count / self.attribute_slots.max(1)
    }

    /// Setter name as emitted in the artifact.
    pub fn setter_name(&self) -> Option<String> {
        self.uniform_setter.map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_display() {
        let v = UniformSetter::Vector {
            components: 3,
            kind: ScalarKind::Integer,
        };
        assert_eq!(v.to_string(), "uniform3iv");
        assert!(!v.takes_transpose());

        let m = UniformSetter::Matrix { dimension: 4 };
        assert_eq!(m.to_string(), "uniformMatrix4fv");
        assert!(m.takes_transpose());
    }

    #[test]
    fn test_storage_widths() {
        assert_eq!(StorageKind::Uint8.byte_width(), 1);
        assert_eq!(StorageKind::Int16.byte_width(), 2);
        assert_eq!(StorageKind::Float32.byte_width(), 4);
        assert_eq!(StorageKind::Uint16.typed_array(), "Uint16Array");
    }

    #[test]
    fn test_kind_tag() {
        assert_eq!(ScalarKind::Integer.tag(), 'i');
        assert_eq!(ScalarKind::Float.tag(), 'f');
    }
}
