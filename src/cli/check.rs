//! Check command implementation.
//!
//! Validates a JSON artifact against constants dumped from a live context,
//! and warns when the artifact is out of date with the generator.

use std::path::PathBuf;

use clap::Args;

use crate::emit::Artifact;
use crate::error::{GlTypesError, Result};
use crate::output::{display_path, Printer};
use crate::registry::TypeRegistry;
use crate::validation::{check_stale_entries, print_diagnostics, validate, ConstantTable};

/// Check a JSON artifact against constants dumped from a live context
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON artifact produced by `gltypes generate --format json`
    pub artifact: PathBuf,

    /// JSON object of constant names to values, dumped from the context
    #[arg(long, short)]
    pub constants: PathBuf,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let artifact = Artifact::load(&args.artifact)?;
    let constants = ConstantTable::load(&args.constants)?;
    let registry = TypeRegistry::webgl1()?;

    printer.status(
        "Checking",
        &format!(
            "{} against {}",
            display_path(&args.artifact),
            display_path(&args.constants)
        ),
    );

    let mut result = validate(&artifact, &constants);
    result.merge(check_stale_entries(&artifact, &registry));
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(GlTypesError::Validation {
            message: format!(
                "{} constant(s) do not match the context",
                result.mismatches().len()
            ),
            help: Some(
                "The context targets a different API version than the artifact was generated for"
                    .to_string(),
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{write_artifact, EmitOptions, Format};

    fn write_fixtures(dir: &std::path::Path, constants: &str) -> CheckArgs {
        let registry = TypeRegistry::webgl1().unwrap();
        let artifact = dir.join("webgltypes.json");
        let options = EmitOptions {
            format: Format::Json,
            validator: false,
        };
        write_artifact(&registry, &options, &artifact).unwrap();

        let path = dir.join("constants.json");
        std::fs::write(&path, constants).unwrap();

        CheckArgs {
            artifact,
            constants: path,
        }
    }

    #[test]
    fn test_check_passes_for_matching_context() {
        let registry = TypeRegistry::webgl1().unwrap();
        let constants: std::collections::BTreeMap<String, u32> = registry
            .descriptors()
            .map(|d| (d.name.to_string(), d.code.value()))
            .collect();
        let dir = tempfile::tempdir().unwrap();
        let args = write_fixtures(dir.path(), &serde_json::to_string(&constants).unwrap());

        assert!(run(args, &Printer::plain()).is_ok());
    }

    #[test]
    fn test_check_fails_for_drift() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_fixtures(dir.path(), r#"{"FLOAT": 5126}"#);

        let err = run(args, &Printer::plain()).unwrap_err();
        match err {
            GlTypesError::Validation { message, .. } => {
                assert_eq!(message, "21 constant(s) do not match the context");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
