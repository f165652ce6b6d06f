//! Type composition.
//!
//! Vectors are `n` copies of a base scalar, matrices are `n` copies of the
//! float vector of the same dimension. `compose` is the single rule both are
//! built with.

use crate::error::ConstructionError;

use super::base::BaseType;
use super::descriptor::{ComposedType, ScalarKind, TypeShape};
use super::name::TypeName;

/// Where a type's descriptor comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Taken as-is from the base table.
    Base,
    /// `multiplier` copies of `from`.
    Compose { from: TypeName, multiplier: u32 },
}

/// The derivation of every type name.
pub fn derivation(name: TypeName) -> Derivation {
    use TypeName::*;

    let compose = |from, multiplier| Derivation::Compose { from, multiplier };
    match name {
        Byte | UnsignedByte | Short | UnsignedShort | Int | UnsignedInt | Float | Bool
        | Sampler2d | SamplerCube => Derivation::Base,
        FloatVec2 => compose(Float, 2),
        FloatVec3 => compose(Float, 3),
        FloatVec4 => compose(Float, 4),
        IntVec2 => compose(Int, 2),
        IntVec3 => compose(Int, 3),
        IntVec4 => compose(Int, 4),
        BoolVec2 => compose(Bool, 2),
        BoolVec3 => compose(Bool, 3),
        BoolVec4 => compose(Bool, 4),
        FloatMat2 => compose(FloatVec2, 2),
        FloatMat3 => compose(FloatVec3, 3),
        FloatMat4 => compose(FloatVec4, 4),
    }
}

/// Compose `multiplier` copies of `base` into a new type called `name`.
///
/// A scalar composes into a vector. A matrix name needs a float vector whose
/// dimension equals `multiplier`. Kind, storage, element type and the opaque
/// flag carry over unchanged.
pub fn compose(
    base: &ComposedType,
    multiplier: u32,
    name: TypeName,
) -> Result<ComposedType, ConstructionError> {
    if !(2..=4).contains(&multiplier) {
        return Err(ConstructionError::UnsupportedMultiplier {
            name: base.name,
            multiplier,
        });
    }

    let invalid = |reason: String| ConstructionError::InvalidType { name, reason };

    let shape = if name.is_matrix() {
        match base.shape {
            TypeShape::Vector(n) if n == multiplier => {}
            TypeShape::Vector(n) => {
                return Err(invalid(format!(
                    "a {m}x{m} matrix needs {m}-component columns, but {} has {}",
                    base.name,
                    n,
                    m = multiplier
                )));
            }
            _ => {
                return Err(invalid(format!(
                    "matrix columns must be vectors, but {} is not",
                    base.name
                )));
            }
        }
        if base.kind != ScalarKind::Float {
            return Err(invalid(format!(
                "matrices must be float, but {} is {}",
                base.name, base.kind
            )));
        }
        TypeShape::Matrix(multiplier)
    } else {
        if base.shape != TypeShape::Scalar {
            return Err(invalid(format!(
                "{} only composes from a scalar, but {} is not one",
                name, base.name
            )));
        }
        TypeShape::Vector(multiplier)
    };

    Ok(ComposedType {
        name,
        shape,
        element_count: base.element_count * multiplier,
        byte_size: base.byte_size * multiplier,
        ..base.clone()
    })
}

/// Build `name` by walking its derivation chain.
///
/// The result has no code, attribute slots or uniform setter yet; the
/// registry resolves those.
pub fn derive(name: TypeName) -> Result<ComposedType, ConstructionError> {
    match derivation(name) {
        Derivation::Base => BaseType::get(name).map(BaseType::composed).ok_or_else(|| {
            ConstructionError::InvalidType {
                name,
                reason: "missing from the base type table".to_string(),
            }
        }),
        Derivation::Compose { from, multiplier } => compose(&derive(from)?, multiplier, name),
    }
}
