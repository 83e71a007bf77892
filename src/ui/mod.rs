//! UI module for rendering the TUI

mod assistant_panel;
mod field_renderer;
mod layout;
mod sections;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match &app.state.current_view {
        View::Sections => sections::draw_list(frame, main_area, app),
        View::SectionForm => sections::draw_form(frame, main_area, app),
        View::Assistant => {
            // Keep the form visible underneath the overlay
            sections::draw_form(frame, main_area, app);
            assistant_panel::draw(frame, main_area, app);
        }
        View::ReferencePrompt => {
            sections::draw_list(frame, main_area, app);
            sections::draw_reference_prompt(frame, main_area, app);
        }
    }

    layout::draw_status_bar(frame, app);
}
