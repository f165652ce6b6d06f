use miette::Diagnostic;
use thiserror::Error;

use crate::types::{TypeCode, TypeName};

/// A violation of the type algebra while building the registry.
///
/// These are fatal: a registry that fails any of them is never emitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("unsupported multiplier {multiplier} for {name} (expected 2, 3 or 4)")]
    UnsupportedMultiplier { name: TypeName, multiplier: u32 },

    #[error("invalid type {name}: {reason}")]
    InvalidType { name: TypeName, reason: String },

    #[error("matrix {name} has {elements} elements, which is not 4, 9 or 16")]
    MatrixDimension { name: TypeName, elements: u32 },

    #[error("type {name} is registered twice (codes {first} and {second})")]
    DuplicateName {
        name: TypeName,
        first: TypeCode,
        second: TypeCode,
    },

    #[error("code {code} is shared by {first} and {second}")]
    DuplicateCode {
        code: TypeCode,
        first: TypeName,
        second: TypeName,
    },

    #[error("unknown type name '{0}'")]
    UnknownTypeName(String),
}

/// Main error type for gltypes operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlTypesError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gltypes::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gltypes::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(gltypes::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Construction error: {0}")]
    #[diagnostic(
        code(gltypes::construct),
        help("The base type table or code table is malformed; fix it before regenerating")
    )]
    Construction(#[from] ConstructionError),

    #[error("Emit error: {message}")]
    #[diagnostic(code(gltypes::emit))]
    Emit { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(gltypes::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GlTypesError>;
