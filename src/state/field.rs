//! Form field value objects

/// A single stored field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// One selected option of a radio group
    Choice(String),
    /// Checkbox flag
    Flag(bool),
    /// Multiselect picks, in the order the user selected them
    Selections(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Whether the value counts toward section completion
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Choice(s) => !s.is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::Selections(v) => !v.is_empty(),
        }
    }

    /// Render the value as it appears in the export and in read-only views.
    /// Selections are comma-joined in selection order.
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(s) => s.clone(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Selections(v) => v.join(", "),
        }
    }

    /// Toggle an option in a multiselect value: absent options are appended
    /// (preserving selection order), present ones are removed.
    pub fn toggle_selection(&mut self, option: &str) {
        if let FieldValue::Selections(picks) = self {
            if let Some(pos) = picks.iter().position(|p| p == option) {
                picks.remove(pos);
            } else {
                picks.push(option.to_string());
            }
        }
    }

    /// Whether a multiselect value currently contains an option
    pub fn has_selection(&self, option: &str) -> bool {
        matches!(self, FieldValue::Selections(picks) if picks.iter().any(|p| p == option))
    }
}
