//! Plugin descriptor files.
//!
//! A manifest is the only way to extend the operation table at runtime. It is
//! parsed and fully validated before anything is registered, so a bad file
//! never leaves a half-populated registry behind.
//!
//! ```json
//! {
//!   "include_builtins": true,
//!   "operations": [
//!     { "name": "plus", "kind": "add" },
//!     { "name": "times", "kind": "multiply" }
//!   ]
//! }
//! ```

use super::registry::normalize;
use super::{OperationRegistry, builtin_by_kind, builtin_operations};
use crate::core::{CalcError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Name the operation is registered under
    pub name: String,
    /// Built-in operation that implements it
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(default = "default_include_builtins")]
    pub include_builtins: bool,
    #[serde(default)]
    pub operations: Vec<ManifestEntry>,
}

fn default_include_builtins() -> bool {
    true
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            include_builtins: true,
            operations: Vec::new(),
        }
    }
}

impl PluginManifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| CalcError::Io(format!("{}: {}", path.display(), e)))?;

        let manifest = Self::from_json(&raw)?;
        info!(
            "Loaded plugin manifest {} ({} operations)",
            path.display(),
            manifest.operations.len()
        );
        Ok(manifest)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| CalcError::InvalidPlugin(format!("malformed manifest: {}", e)))
    }

    /// Check every entry without touching any registry.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<String> = HashSet::new();

        if self.include_builtins {
            for op in builtin_operations() {
                seen.insert(op.name().to_string());
            }
        } else if self.operations.is_empty() {
            warn!("Plugin manifest disables built-ins and declares no operations");
        }

        for entry in &self.operations {
            let key = normalize(&entry.name);
            if key.is_empty() {
                return Err(CalcError::InvalidPlugin(format!(
                    "empty operation name for kind '{}'",
                    entry.kind
                )));
            }
            if builtin_by_kind(&entry.kind).is_none() {
                return Err(CalcError::InvalidPlugin(format!(
                    "unknown operation kind '{}' for '{}'",
                    entry.kind, key
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(CalcError::DuplicateRegistration(key));
            }
        }

        Ok(())
    }

    /// Validate, then build a registry holding the declared operations.
    pub fn build_registry(&self) -> Result<OperationRegistry> {
        self.validate()?;

        let mut registry = if self.include_builtins {
            OperationRegistry::with_default_operations()?
        } else {
            OperationRegistry::new()
        };

        for entry in &self.operations {
            let operation = builtin_by_kind(&entry.kind).ok_or_else(|| {
                CalcError::InvalidPlugin(format!("unknown operation kind '{}'", entry.kind))
            })?;
            registry.register(&entry.name, operation)?;
        }

        Ok(registry)
    }
}
