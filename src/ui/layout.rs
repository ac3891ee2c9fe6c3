//! Layout components (panels and status bar)

use crate::app::App;
use crate::catalog::AGGREGATION_FUNCTIONS;
use crate::platform::{COPY_SHORTCUT, GENERATE_SHORTCUT, RESET_SHORTCUT};
use crate::state::{PreviewMode, Slot, SlotKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form panel and the preview panel
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Form
            Constraint::Percentage(40), // Preview
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", slot_hints(app.editor.active())),
        Style::default().fg(Color::Gray),
    )];

    spans.push(Span::raw("| "));
    spans.push(Span::styled(
        format!("{GENERATE_SHORTCUT}:generate  {COPY_SHORTCUT}:copy  {RESET_SHORTCUT}:reset  "),
        Style::default().fg(Color::Gray),
    ));

    let preview_hint = match app.editor.preview_mode {
        PreviewMode::Json => "^P:sql",
        PreviewMode::Sql => "^P:json",
    };
    spans.push(Span::styled(preview_hint, Style::default().fg(Color::Gray)));

    let quit_hint = " ^Q:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused input
fn slot_hints(slot: Slot) -> String {
    if slot == Slot::Aggregation {
        return format!("Tab:next  e.g. {}", AGGREGATION_FUNCTIONS.join(","));
    }
    match slot.kind() {
        SlotKind::Checkbox => "Tab:next  Space:toggle".to_string(),
        SlotKind::Text => "Tab:next  ^N:column  ^F:filter".to_string(),
        SlotKind::Choice => "Tab:next  ←/→:pick  ^D:remove row".to_string(),
        SlotKind::Buttons => "←/→:select  Enter:press".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_hint_lists_functions() {
        let hint = slot_hints(Slot::Aggregation);
        assert!(hint.contains("sum,avg,min,max,count,any_value"));
    }

    #[test]
    fn test_row_hint_mentions_removal() {
        assert!(slot_hints(Slot::FilterType(0)).contains("^D"));
    }

    #[test]
    fn test_layout_reserves_status_line() {
        let (form, preview) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(form.height, 29);
        assert_eq!(form.width + preview.width, 100);
        assert_eq!(preview.x, form.width);
    }
}
