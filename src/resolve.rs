//! Attribute-slot and uniform-setter resolution.

use crate::error::ConstructionError;
use crate::types::{ComposedType, ScalarKind, TypeName, UniformSetter};

/// Number of vertex attribute locations a type occupies.
///
/// A matrix of dimension n binds n consecutive locations, one per column.
/// Written out per name: the square root of the element count only holds
/// for matrices.
pub fn attribute_slots(name: TypeName) -> u32 {
    match name {
        TypeName::FloatMat2 => 2,
        TypeName::FloatMat3 => 3,
        TypeName::FloatMat4 => 4,
        _ => 1,
    }
}

/// Matrix dimension for a matrix element count.
fn matrix_dimension(composed: &ComposedType) -> Result<u32, ConstructionError> {
    match composed.element_count {
        4 => Ok(2),
        9 => Ok(3),
        16 => Ok(4),
        elements => Err(ConstructionError::MatrixDimension {
            name: composed.name,
            elements,
        }),
    }
}

/// The uniform upload call for a type.
///
/// Returns `Ok(None)` when no setter applies; matrices that are not float or
/// not 2x2, 3x3 or 4x4 are construction errors.
pub fn uniform_setter(
    composed: &ComposedType,
) -> Result<Option<UniformSetter>, ConstructionError> {
    if composed.name.is_matrix() || composed.is_matrix() {
        if composed.kind != ScalarKind::Float {
            return Err(ConstructionError::InvalidType {
                name: composed.name,
                reason: "matrices must be float".to_string(),
            });
        }
        let dimension = matrix_dimension(composed)?;
        return Ok(Some(UniformSetter::Matrix { dimension }));
    }

    // Samplers upload as single integers, same as scalars.
    if composed.element_count <= 4 {
        return Ok(Some(UniformSetter::Vector {
            components: composed.element_count,
            kind: composed.kind,
        }));
    }

    Ok(None)
}
