//! Markdown export of the accumulated form state

use crate::state::FormStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The export is always written under this name, regardless of content
pub const EXPORT_FILENAME: &str = "health_universe_intake.md";

/// Serialize the store to the intake Markdown document. Sections and fields
/// appear in the order they were first touched; a field that exists in the
/// state is emitted even when its value is blank. User text is not escaped.
pub fn render_markdown(store: &FormStore) -> String {
    let mut lines = vec!["# Health Universe App Intake Form".to_string()];
    for (section, fields) in store.iter() {
        lines.push(format!("\n## {section}"));
        for (key, value) in fields {
            lines.push(format!("**{}**: {}", title_case(key), value.display_value()));
        }
    }
    lines.join("\n")
}

/// Write the export to `dir` under the fixed filename
pub fn write_export(store: &FormStore, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, render_markdown(store))
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    Ok(path)
}

/// Display form of a field key: underscores become spaces and every word is
/// title-cased, so "upload_types" renders as "Upload Types" and "a2a_role"
/// as "A2A Role".
fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
