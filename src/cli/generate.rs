//! Generate command implementation.
//!
//! Builds the registry and writes the artifact to a file or stdout.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILE};
use crate::emit::{emit, write_artifact, EmitOptions, Format};
use crate::error::{GlTypesError, Result};
use crate::output::{display_path, plural, Printer};
use crate::registry::TypeRegistry;

/// Generate the TYPE_INFO / TYPE_CODES artifact
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file (default: manifest `output`, or stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Artifact format (default: manifest `format`, or js)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Leave the TYPE_INFO_test runtime check out of JS output
    #[arg(long)]
    pub no_validator: bool,

    /// Manifest file
    #[arg(long, default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,
}

/// Merge command-line flags over the manifest.
fn resolve_options(args: &GenerateArgs, manifest: &Manifest) -> (EmitOptions, Option<PathBuf>) {
    let mut options = manifest.emit_options();
    if let Some(format) = args.format {
        options.format = format;
    }
    if args.no_validator {
        options.validator = false;
    }
    let output = args.output.clone().or_else(|| manifest.output.clone());
    (options, output)
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(&args.manifest)?;
    let (options, output) = resolve_options(&args, &manifest);

    let registry = TypeRegistry::webgl1()?;
    printer.status(
        "Generating",
        &format!(
            "{} ({})",
            plural(registry.len(), "type", "types"),
            options.format.extension()
        ),
    );

    match output {
        Some(path) => {
            write_artifact(&registry, &options, &path)?;
            printer.status("Finished", &printer.cyan(&display_path(&path)));
        }
        None => {
            let text = emit(&registry, &options)?;
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .map_err(GlTypesError::IoError)?;
        }
    }

    Ok(())
}
