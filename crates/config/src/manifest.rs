//! Manifest loading
//!
//! The manifest is a `package.json`. Its `scripts` object is the name table
//! plans are compiled against, and its optional `runglob` object carries
//! project-level plan options.

use crate::options::PartialOptions;
use indexmap::IndexMap;
use runglob_core::{Error, Result, MANIFEST_FILENAME, MANIFEST_OPTIONS_KEY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Script name to command string, in declaration order
pub type ScriptTable = IndexMap<String, String>;

/// A loaded manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    scripts: ScriptTable,
    options: PartialOptions,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    scripts: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default, rename = "runglob")]
    options: Option<PartialOptions>,
}

impl Manifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
        Self::from_json(path, &text)
    }

    /// Parse manifest text; `path` is only used for diagnostics
    pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let raw: RawManifest = serde_json::from_str(text).map_err(|e| {
            if e.classify() == serde_json::error::Category::Data {
                Error::manifest(&path, format!("unexpected `scripts` or `{MANIFEST_OPTIONS_KEY}` shape: {e}"))
            } else {
                Error::from(e)
            }
        })?;

        let mut scripts = ScriptTable::new();
        for (name, value) in raw.scripts.unwrap_or_default() {
            match value {
                serde_json::Value::String(command) => {
                    scripts.insert(name, command);
                }
                other => {
                    tracing::warn!(
                        script = %name,
                        value = %other,
                        "skipping script whose command is not a string"
                    );
                }
            }
        }

        tracing::debug!(path = %path.display(), scripts = scripts.len(), "loaded manifest");

        Ok(Self {
            path,
            scripts,
            options: raw.options.unwrap_or_default(),
        })
    }

    /// Find the nearest manifest in `dir` or one of its ancestors
    pub fn discover(dir: &Path) -> Result<PathBuf> {
        dir.ancestors()
            .map(|ancestor| ancestor.join(MANIFEST_FILENAME))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "no {MANIFEST_FILENAME} found in '{}' or any parent directory",
                    dir.display()
                ))
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the manifest
    pub fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn scripts(&self) -> &ScriptTable {
        &self.scripts
    }

    /// Options from the manifest's `runglob` section
    pub fn options(&self) -> &PartialOptions {
        &self.options
    }

    pub fn into_scripts(self) -> ScriptTable {
        self.scripts
    }
}
