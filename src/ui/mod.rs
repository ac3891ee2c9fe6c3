//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, preview_area) = layout::create_layout(area);

    forms::draw_request_form(frame, form_area, app);
    preview::draw(frame, preview_area, app);

    layout::draw_status_bar(frame, app);

    // Notices sit above everything else
    if let Some(toast) = &app.editor.toast {
        components::render_toast(frame, toast);
    }
}
