//! Uploaded reference document handling

use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// The session's optional reference document: a single plain-text blob used
/// as context for assistant prompts. A new load replaces the previous
/// document wholesale.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDoc {
    pub name: String,
    pub content: String,
}

impl ReferenceDoc {
    /// Read an entire file into memory as the reference document. The bytes
    /// must decode as UTF-8; anything else is rejected with a diagnostic and
    /// leaves the caller's current document untouched.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read reference file {}", path.display()))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| anyhow!("reference file {} is not valid UTF-8 text", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, content })
    }
}
