//! gltypes - WebGL type registry generator
//!
//! Derives the metadata of every WebGL 1 data type (scalars, vectors,
//! matrices and samplers) from a small table of base types, emits it as a
//! deterministic `TYPE_INFO` / `TYPE_CODES` artifact, and cross-checks
//! generated tables against a live context.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod output;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod validation;

pub use config::Manifest;
pub use emit::{emit, write_artifact, Artifact, ArtifactEntry, EmitOptions, Format};
pub use error::{ConstructionError, GlTypesError, Result};
pub use registry::{RegistryBuilder, TypeRegistry};
pub use resolve::{attribute_slots, uniform_setter};
pub use types::{
    compose, derive, ComposedType, ScalarKind, StorageKind, TypeCode, TypeDescriptor, TypeName, TypeShape,
    UniformSetter,
};
pub use validation::{
    validate, CapabilityContext, ConstantTable, Diagnostic, Mismatch, Severity, TypeTables,
    ValidationResult,
};
