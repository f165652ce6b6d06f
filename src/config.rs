//! Generator manifest (gltypes.yaml) parsing.
//!
//! The manifest holds defaults for `gltypes generate`; command-line flags
//! override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::{EmitOptions, Format};
use crate::error::{GlTypesError, Result};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "gltypes.yaml";

/// Generator settings loaded from gltypes.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Where to write the artifact. Stdout when unset.
    pub output: Option<PathBuf>,

    /// Artifact format.
    pub format: Format,

    /// Include the `TYPE_INFO_test(gl)` runtime check in JS output.
    #[serde(default = "default_validator")]
    pub validator: bool,
}

fn default_validator() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: None,
            format: Format::Js,
            validator: default_validator(),
        }
    }
}

impl Manifest {
    /// Load manifest from a gltypes.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlTypesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GlTypesError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check gltypes.yaml syntax".to_string()),
        })
    }

    /// Emit options described by this manifest.
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            format: self.format,
            validator: self.validator,
        }
    }
}
