//! Application state definitions

use super::reference::ReferenceDoc;
use super::store::FormStore;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Overview of all sections with completion progress
    #[default]
    Sections,
    /// Editing the fields of one section
    SectionForm,
    /// Assistant question/reply overlay for the current section
    Assistant,
    /// Path prompt for loading a reference document
    ReferencePrompt,
}

/// Transient per-section assistant exchange. Nothing here reaches the form
/// store unless the user explicitly inserts the reply.
#[derive(Debug, Clone, Default)]
pub struct AssistantExchange {
    /// Section the exchange belongs to
    pub section_id: String,
    /// Question being composed
    pub question: String,
    /// Latest reply (success text or boundary-rendered failure message)
    pub reply: Option<String>,
    /// Whether a request is currently in flight
    pub waiting: bool,
}

/// All state owned by one user session: the form values, the optional
/// reference document, and the open assistant exchange. One session per
/// process run; torn down with the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub store: FormStore,
    pub reference: Option<ReferenceDoc>,
    pub exchange: Option<AssistantExchange>,
}

impl Session {
    /// Text passed to the prompt builder: the reference document's content,
    /// or empty when none is loaded.
    pub fn reference_text(&self) -> &str {
        self.reference.as_ref().map(|d| d.content.as_str()).unwrap_or("")
    }

    /// Replace the reference document wholesale. The previous document, if
    /// any, is discarded entirely.
    pub fn set_reference(&mut self, doc: ReferenceDoc) {
        self.reference = Some(doc);
    }
}

/// Top-level UI state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub session: Session,
    /// Selected section index on the overview (0-based)
    pub selected_section: usize,
    /// Active field index within the open section form
    pub active_field: usize,
    /// Highlighted option within the active radio/multiselect field
    pub option_cursor: usize,
    /// Path being typed in the reference prompt
    pub reference_input: String,
    /// Transient status line (export result, load errors, ...)
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_sections() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Sections);
    }

    #[test]
    fn test_reference_text_empty_without_document() {
        let session = Session::default();
        assert_eq!(session.reference_text(), "");
    }

    #[test]
    fn test_set_reference_replaces_previous() {
        let mut session = Session::default();
        session.set_reference(ReferenceDoc {
            name: "first.md".into(),
            content: "first document".into(),
        });
        session.set_reference(ReferenceDoc {
            name: "second.md".into(),
            content: "second document".into(),
        });
        assert_eq!(session.reference_text(), "second document");
        assert!(!session.reference_text().contains("first"));
    }
}
