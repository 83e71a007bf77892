//! Application state and core logic

use crate::assistant::{AssistantClient, OllamaClient};
use crate::config::TuiConfig;
use crate::export;
use crate::schema::{self, FieldKind, FieldSpec, SectionSpec};
use crate::state::{AppState, AssistantExchange, FieldValue, ReferenceDoc, Session, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the assistant endpoint
    client: OllamaClient,
    /// Loaded user configuration
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let client = OllamaClient::new(&config);
        Self {
            state: AppState::default(),
            client,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The section currently selected on the overview
    pub fn current_section(&self) -> &'static SectionSpec {
        &schema::SECTIONS[self.state.selected_section]
    }

    /// The field the form cursor is on
    pub fn active_field(&self) -> &'static FieldSpec {
        &self.current_section().fields[self.state.active_field]
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Sections => self.handle_sections_key(key).await,
            View::SectionForm => self.handle_section_form_key(key).await,
            View::Assistant => self.handle_assistant_key(key).await,
            View::ReferencePrompt => self.handle_reference_key(key),
        }
    }

    async fn handle_sections_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.selected_section > 0 {
                    self.state.selected_section -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.selected_section + 1 < schema::SECTIONS.len() {
                    self.state.selected_section += 1;
                }
            }
            KeyCode::Enter => {
                self.state.active_field = 0;
                self.sync_option_cursor();
                self.state.current_view = View::SectionForm;
            }
            KeyCode::Char('a') => {
                self.open_assistant();
            }
            KeyCode::Char('r') => {
                self.state.reference_input.clear();
                self.state.current_view = View::ReferencePrompt;
            }
            KeyCode::Char('e') => {
                self.export();
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_section_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+A opens the assistant for this section from anywhere in the form
        if key.code == KeyCode::Char('a') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.open_assistant();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.state.current_view = View::Sections;
            }
            KeyCode::Tab => {
                self.next_field();
            }
            KeyCode::BackTab => {
                self.prev_field();
            }
            _ => self.handle_field_edit_key(key),
        }
        Ok(())
    }

    /// Edit keys for the active field, by field kind. Every edit writes
    /// through to the store immediately.
    fn handle_field_edit_key(&mut self, key: KeyEvent) {
        match self.active_field().kind {
            FieldKind::Text { .. } => match key.code {
                KeyCode::Char(c) => self.push_field_char(c),
                KeyCode::Enter => self.push_field_char('\n'),
                KeyCode::Backspace => self.pop_field_char(),
                _ => {}
            },
            FieldKind::Radio { options } => match key.code {
                KeyCode::Left => {
                    self.state.option_cursor = self.state.option_cursor.saturating_sub(1);
                }
                KeyCode::Right => {
                    if self.state.option_cursor + 1 < options.len() {
                        self.state.option_cursor += 1;
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.commit_radio(),
                _ => {}
            },
            FieldKind::Checkbox => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.toggle_checkbox();
                }
            }
            FieldKind::MultiSelect { options } => match key.code {
                KeyCode::Left => {
                    self.state.option_cursor = self.state.option_cursor.saturating_sub(1);
                }
                KeyCode::Right => {
                    if self.state.option_cursor + 1 < options.len() {
                        self.state.option_cursor += 1;
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle_multiselect(),
                _ => {}
            },
        }
    }

    async fn handle_assistant_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+Y inserts the latest reply into the section's target field
        if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.insert_reply();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.state.session.exchange = None;
                self.state.current_view = View::SectionForm;
            }
            KeyCode::Char(c) => {
                if let Some(exchange) = self.state.session.exchange.as_mut() {
                    exchange.question.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(exchange) = self.state.session.exchange.as_mut() {
                    exchange.question.pop();
                }
            }
            KeyCode::Enter => {
                // Synchronous round-trip: the interface blocks until the
                // reply (or the failure text) is in.
                if let Some(exchange) = self.state.session.exchange.as_mut() {
                    exchange.waiting = true;
                }
                run_exchange(&self.client, &mut self.state.session).await;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_reference_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state.current_view = View::Sections;
            }
            KeyCode::Char(c) => {
                self.state.reference_input.push(c);
            }
            KeyCode::Backspace => {
                self.state.reference_input.pop();
            }
            KeyCode::Enter => {
                let path = PathBuf::from(self.state.reference_input.trim());
                match ReferenceDoc::load(&path) {
                    Ok(doc) => {
                        self.state.status_message = Some(format!("Loaded reference {}", doc.name));
                        self.state.session.set_reference(doc);
                        self.state.current_view = View::Sections;
                    }
                    Err(e) => {
                        // A failed load keeps the previous document
                        self.state.status_message = Some(e.to_string());
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn next_field(&mut self) {
        let count = self.current_section().fields.len();
        self.state.active_field = (self.state.active_field + 1) % count;
        self.sync_option_cursor();
    }

    fn prev_field(&mut self) {
        let count = self.current_section().fields.len();
        if self.state.active_field == 0 {
            self.state.active_field = count - 1;
        } else {
            self.state.active_field -= 1;
        }
        self.sync_option_cursor();
    }

    /// Park the option cursor on the stored radio choice (or the implied
    /// first-option default), and at the start for other kinds.
    fn sync_option_cursor(&mut self) {
        let section = self.current_section();
        let field = &section.fields[self.state.active_field];
        self.state.option_cursor = match field.kind {
            FieldKind::Radio { options } => self
                .state
                .session
                .store
                .get(section.id, field.key)
                .and_then(|v| match v {
                    FieldValue::Choice(c) => options.iter().position(|o| o == c),
                    _ => None,
                })
                .unwrap_or(0),
            _ => 0,
        };
    }

    /// Current text of the active field (empty when unset)
    fn field_text(&self) -> String {
        let section = self.current_section();
        let field = &section.fields[self.state.active_field];
        self.state
            .session
            .store
            .get(section.id, field.key)
            .map(|v| v.as_text().to_string())
            .unwrap_or_default()
    }

    fn push_field_char(&mut self, c: char) {
        let mut text = self.field_text();
        text.push(c);
        let section = self.current_section();
        let key = section.fields[self.state.active_field].key;
        self.state.session.store.set(section.id, key, FieldValue::Text(text));
    }

    fn pop_field_char(&mut self) {
        let mut text = self.field_text();
        text.pop();
        let section = self.current_section();
        let key = section.fields[self.state.active_field].key;
        self.state.session.store.set(section.id, key, FieldValue::Text(text));
    }

    fn commit_radio(&mut self) {
        let section = self.current_section();
        let field = &section.fields[self.state.active_field];
        if let FieldKind::Radio { options } = field.kind {
            let choice = options[self.state.option_cursor.min(options.len() - 1)];
            self.state
                .session
                .store
                .set(section.id, field.key, FieldValue::Choice(choice.to_string()));
        }
    }

    fn toggle_checkbox(&mut self) {
        let section = self.current_section();
        let field = &section.fields[self.state.active_field];
        let current = matches!(
            self.state.session.store.get(section.id, field.key),
            Some(FieldValue::Flag(true))
        );
        self.state
            .session
            .store
            .set(section.id, field.key, FieldValue::Flag(!current));
    }

    fn toggle_multiselect(&mut self) {
        let section = self.current_section();
        let field = &section.fields[self.state.active_field];
        if let FieldKind::MultiSelect { options } = field.kind {
            let option = options[self.state.option_cursor.min(options.len() - 1)];
            let mut value = self
                .state
                .session
                .store
                .get(section.id, field.key)
                .cloned()
                .unwrap_or(FieldValue::Selections(Vec::new()));
            value.toggle_selection(option);
            self.state.session.store.set(section.id, field.key, value);
        }
    }

    /// Open the assistant overlay for the currently selected section
    fn open_assistant(&mut self) {
        self.state.session.exchange = Some(AssistantExchange {
            section_id: self.current_section().id.to_string(),
            ..Default::default()
        });
        self.state.current_view = View::Assistant;
    }

    /// Append the latest reply to the section's target text field, separated
    /// from existing text by a newline. Repeat inserts accumulate.
    fn insert_reply(&mut self) {
        let Some(reply) = self
            .state
            .session
            .exchange
            .as_ref()
            .and_then(|ex| ex.reply.clone())
        else {
            return;
        };
        let section = self.current_section();
        insert_reply_into(&mut self.state.session, section, &reply);
        self.state.status_message = Some(format!(
            "Inserted reply into {}",
            section.assistant_target().map(|f| f.label).unwrap_or(section.id)
        ));
    }

    /// Export the form state to the fixed-name Markdown file
    fn export(&mut self) {
        let dir = self
            .config
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        match export::write_export(&self.state.session.store, &dir) {
            Ok(path) => {
                self.state.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("export failed: {e:#}");
                self.state.status_message = Some(format!("Export failed: {e}"));
            }
        }
    }
}

/// Run the open exchange against the assistant. Success text and the
/// boundary-rendered failure sentinel land in the same reply slot the UI
/// shows; the form store is never touched by the call itself.
pub async fn run_exchange(client: &dyn AssistantClient, session: &mut Session) {
    let Some((section_id, question)) = session
        .exchange
        .as_ref()
        .map(|ex| (ex.section_id.clone(), ex.question.clone()))
    else {
        return;
    };

    let result = client.ask(&section_id, session.reference_text(), &question).await;
    if let Some(exchange) = session.exchange.as_mut() {
        exchange.reply = Some(match result {
            Ok(text) => text,
            Err(e) => e.to_reply_text(),
        });
        exchange.waiting = false;
    }
}

/// Append `reply` to the section's designated target field, never replacing
/// what is already there.
pub fn insert_reply_into(session: &mut Session, section: &SectionSpec, reply: &str) {
    let Some(target) = section.assistant_target() else {
        return;
    };
    let current = session
        .store
        .get(section.id, target.key)
        .map(|v| v.as_text().to_string())
        .unwrap_or_default();
    let combined = if current.is_empty() {
        reply.to_string()
    } else {
        format!("{current}\n{reply}")
    };
    session.store.set(section.id, target.key, FieldValue::Text(combined));
}

/// Load a reference document from a path, replacing the session's current
/// one on success and keeping it on failure.
#[allow(dead_code)]
pub fn load_reference(session: &mut Session, path: &Path) -> Result<()> {
    let doc = ReferenceDoc::load(path)?;
    session.set_reference(doc);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantError, MockAssistantClient, FAILURE_PREFIX};
    use crate::schema::SECTIONS;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::new(TuiConfig::default())
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_selection_moves_and_clamps() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Up)).await.unwrap();
            assert_eq!(app.state.selected_section, 0);

            for _ in 0..20 {
                app.handle_key(key(KeyCode::Down)).await.unwrap();
            }
            assert_eq!(app.state.selected_section, SECTIONS.len() - 1);
        }

        #[tokio::test]
        async fn test_enter_opens_section_form() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::SectionForm);
            assert_eq!(app.state.active_field, 0);
        }

        #[tokio::test]
        async fn test_esc_leaves_form_then_quits() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Sections);
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_tab_wraps_through_fields() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            let count = app.current_section().fields.len();
            for _ in 0..count {
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
            }
            assert_eq!(app.state.active_field, 0); // wrapped back

            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.active_field, count - 1);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_text_edits_write_through() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "Risk Calc").await;

            // No save step: the store already holds the value
            assert_eq!(
                app.state.session.store.get("Section 1", "app_name").unwrap().as_text(),
                "Risk Calc"
            );

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(
                app.state.session.store.get("Section 1", "app_name").unwrap().as_text(),
                "Risk Cal"
            );
        }

        #[tokio::test]
        async fn test_untouched_fields_stay_absent() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            // Rendering establishes nothing; only edits do
            assert!(app.state.session.store.is_empty());
        }

        #[tokio::test]
        async fn test_radio_commit_writes_choice() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            // Section 1: app_name, purpose, user_type (radio), explain_user
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();

            // Unset radio shows the first option but stores nothing
            assert!(app.state.session.store.get("Section 1", "user_type").is_none());

            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                app.state.session.store.get("Section 1", "user_type"),
                Some(&FieldValue::Choice("Researcher".to_string()))
            );
        }

        #[tokio::test]
        async fn test_radio_cursor_restored_from_store() {
            let mut app = test_app();
            app.state
                .session
                .store
                .set("Section 1", "user_type", FieldValue::Choice("Patient".into()));
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.option_cursor, 2); // Patient
        }

        #[tokio::test]
        async fn test_checkbox_toggles() {
            let mut app = test_app();
            app.state.selected_section = 9; // Section 10: UI/UX & Branding
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                app.state.session.store.get("Section 10", "logo"),
                Some(&FieldValue::Flag(true))
            );
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                app.state.session.store.get("Section 10", "logo"),
                Some(&FieldValue::Flag(false))
            );
        }

        #[tokio::test]
        async fn test_multiselect_preserves_selection_order() {
            let mut app = test_app();
            app.state.selected_section = 2; // Section 3: Inputs & Data Entry
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap(); // upload_types

            // Select CSV, then PDF, then JSON: options are CSV JSON PDF Image
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap(); // CSV
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap(); // PDF
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap(); // JSON

            assert_eq!(
                app.state.session.store.get("Section 3", "upload_types"),
                Some(&FieldValue::Selections(vec![
                    "CSV".to_string(),
                    "PDF".to_string(),
                    "JSON".to_string(),
                ]))
            );
        }

        #[tokio::test]
        async fn test_last_write_wins_across_edits() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "one").await;
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            }
            type_text(&mut app, "two").await;
            assert_eq!(
                app.state.session.store.get("Section 1", "app_name").unwrap().as_text(),
                "two"
            );
        }
    }

    mod assistant_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_open_assistant_records_section() {
            let mut app = test_app();
            app.state.selected_section = 1;
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Assistant);
            assert_eq!(
                app.state.session.exchange.as_ref().unwrap().section_id,
                "Section 2"
            );
        }

        #[tokio::test]
        async fn test_ctrl_a_opens_assistant_from_form() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(ctrl('a')).await.unwrap();
            assert_eq!(app.state.current_view, View::Assistant);
        }

        #[tokio::test]
        async fn test_run_exchange_success() {
            let mut mock = MockAssistantClient::new();
            mock.expect_ask()
                .withf(|section, reference, question| {
                    section == "Section 2" && reference.is_empty() && question == "what model?"
                })
                .returning(|_, _, _| Ok("Use logistic regression.".to_string()));

            let mut session = Session::default();
            session.exchange = Some(AssistantExchange {
                section_id: "Section 2".to_string(),
                question: "what model?".to_string(),
                ..Default::default()
            });

            run_exchange(&mock, &mut session).await;
            let exchange = session.exchange.unwrap();
            assert_eq!(exchange.reply.as_deref(), Some("Use logistic regression."));
            assert!(!exchange.waiting);
        }

        #[tokio::test]
        async fn test_run_exchange_passes_reference_text() {
            let mut mock = MockAssistantClient::new();
            mock.expect_ask()
                .withf(|_, reference, _| reference == "# Guideline\nUse age and smoking status.")
                .returning(|_, _, _| Ok("ok".to_string()));

            let mut session = Session::default();
            session.set_reference(ReferenceDoc {
                name: "guideline.md".into(),
                content: "# Guideline\nUse age and smoking status.".into(),
            });
            session.exchange = Some(AssistantExchange {
                section_id: "Section 3".to_string(),
                question: "What inputs are needed?".to_string(),
                ..Default::default()
            });

            run_exchange(&mock, &mut session).await;
            assert_eq!(session.exchange.unwrap().reply.as_deref(), Some("ok"));
        }

        #[tokio::test]
        async fn test_failed_exchange_yields_sentinel_and_leaves_store_alone() {
            let mut mock = MockAssistantClient::new();
            mock.expect_ask().returning(|_, _, _| {
                Err(AssistantError::MalformedReply("connection refused".to_string()))
            });

            let mut session = Session::default();
            session.exchange = Some(AssistantExchange {
                section_id: "Section 2".to_string(),
                question: "what model should I use?".to_string(),
                ..Default::default()
            });

            run_exchange(&mock, &mut session).await;
            let reply = session.exchange.as_ref().unwrap().reply.clone().unwrap();
            assert!(reply.starts_with(FAILURE_PREFIX));
            assert!(session.store.is_empty());
        }

        #[tokio::test]
        async fn test_insert_reply_appends_with_newline() {
            let mut session = Session::default();
            let section = &SECTIONS[1]; // target field: model_logic

            insert_reply_into(&mut session, section, "First reply.");
            insert_reply_into(&mut session, section, "Second reply.");

            assert_eq!(
                session.store.get("Section 2", "model_logic").unwrap().as_text(),
                "First reply.\nSecond reply."
            );
        }

        #[tokio::test]
        async fn test_insert_reply_appends_to_typed_text() {
            let mut session = Session::default();
            let section = &SECTIONS[0];
            session
                .store
                .set("Section 1", "app_name", FieldValue::Text("Drafted by hand".into()));

            insert_reply_into(&mut session, section, "Assistant suggestion");
            assert_eq!(
                session.store.get("Section 1", "app_name").unwrap().as_text(),
                "Drafted by hand\nAssistant suggestion"
            );
        }

        #[tokio::test]
        async fn test_ctrl_y_inserts_via_keyboard() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            if let Some(exchange) = app.state.session.exchange.as_mut() {
                exchange.reply = Some("Suggested name".to_string());
            }
            app.handle_key(ctrl('y')).await.unwrap();
            assert_eq!(
                app.state.session.store.get("Section 1", "app_name").unwrap().as_text(),
                "Suggested name"
            );
        }

        #[tokio::test]
        async fn test_esc_discards_exchange() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            type_text(&mut app, "pending question").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.session.exchange.is_none());
            assert!(app.state.session.store.is_empty());
        }
    }

    mod reference_flow {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::io::Write;

        #[tokio::test]
        async fn test_load_reference_via_prompt() {
            let path = std::env::temp_dir().join(format!("intake-app-ref-{}.md", std::process::id()));
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(b"# Guideline\nUse age and smoking status.").unwrap();

            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            assert_eq!(app.state.current_view, View::ReferencePrompt);
            type_text(&mut app, path.to_str().unwrap()).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(
                app.state.session.reference_text(),
                "# Guideline\nUse age and smoking status."
            );
            assert_eq!(app.state.current_view, View::Sections);
            std::fs::remove_file(path).ok();
        }

        #[tokio::test]
        async fn test_failed_load_keeps_previous_document() {
            let mut app = test_app();
            app.state.session.set_reference(ReferenceDoc {
                name: "kept.md".into(),
                content: "kept".into(),
            });

            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            type_text(&mut app, "/no/such/file.md").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.session.reference_text(), "kept");
            assert_eq!(app.state.current_view, View::ReferencePrompt);
            assert!(app.state.status_message.is_some());
        }
    }
}
