//! Core domain types for gltypes.
//!
//! - `TypeName` / `TypeCode` - the closed set of GL type names and their codes
//! - `ComposedType` - a derived type before the registry resolves it
//! - `TypeDescriptor` - complete metadata for one type
//! - `BASE_TYPES` - the hand-authored base table
//! - `compose` - the rule vectors and matrices are derived with

mod base;
mod compose;
mod descriptor;
mod name;

pub use base::{webgl1_type_codes, BaseType, BASE_TYPES, DATA_TYPE_CODES, UNIFORM_TYPE_CODES};
pub use compose::{compose, derivation, derive, Derivation};
pub use descriptor::{
    ComposedType, ScalarKind, StorageKind, TypeDescriptor, TypeShape, UniformSetter,
};
pub use name::{TypeCode, TypeName};
