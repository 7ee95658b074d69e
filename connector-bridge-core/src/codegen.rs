//! Codegen configuration for the typed query bindings
//!
//! Declarative input for the external GraphQL code generator: where the
//! schema lives, which frontend source files to scan for embedded queries,
//! and how the generated module is shaped. The generator runs as a separate
//! tool; this module only models and (de)serializes its configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Scalar name to frontend type mapping passed to the generator
pub type ScalarMap = BTreeMap<String, String>;

/// Plugin options applied to one output target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Emit type-only imports in generated code
    pub use_type_imports: bool,
    /// Wrap fragment results in masking helpers
    pub fragment_masking: bool,
    /// Collapse duplicate fragment definitions
    pub dedupe_fragments: bool,
    /// Scalar type overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scalars: ScalarMap,
}

/// Preset options (fragment handling mirrors `ClientConfig`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub fragment_masking: bool,
    pub dedupe_fragments: bool,
}

/// One output directory and how it is generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTarget {
    /// Generator preset name
    pub preset: String,
    /// Plugin options
    pub config: ClientConfig,
    /// Preset options
    pub preset_config: PresetConfig,
    /// Extra plugins beyond the preset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Schema endpoint url
    pub schema: String,
    /// Source globs scanned for embedded queries
    pub documents: Vec<String>,
    /// Keep the watcher quiet when a glob matches nothing
    pub ignore_no_documents: bool,
    /// Output path to generation settings
    pub generates: BTreeMap<String, OutputTarget>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        let mut scalars = ScalarMap::new();
        scalars.insert("JSONObject".to_string(), "{}".to_string());
        scalars.insert("DateTime".to_string(), "string".to_string());

        let target = OutputTarget {
            preset: "client".to_string(),
            config: ClientConfig {
                use_type_imports: true,
                fragment_masking: false,
                dedupe_fragments: true,
                scalars,
            },
            preset_config: PresetConfig {
                fragment_masking: false,
                dedupe_fragments: true,
            },
            plugins: Vec::new(),
        };

        let mut generates = BTreeMap::new();
        generates.insert("./lib/common/generated/gql/".to_string(), target);

        Self {
            schema: "http://localhost:4000/graphql".to_string(),
            documents: vec![
                "{lib,components,layouts,pages,middleware}/**/*.{vue,js,ts}".to_string(),
            ],
            ignore_no_documents: true,
            generates,
        }
    }
}

impl CodegenConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::StorageError(format!("Failed to read codegen config: {e}"))
        })?;
        serde_json::from_str(&raw).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// Write the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::StorageError(format!("Failed to create directory: {e}"))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| {
            CoreError::StorageError(format!("Failed to write codegen config: {e}"))
        })
    }
}
