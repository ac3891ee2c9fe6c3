//! Request form panel

use super::field_renderer::slot_line;
use crate::app::App;
use crate::state::{FormButton, Slot};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the form inputs with the buttons row underneath
pub fn draw_request_form(frame: &mut Frame, area: Rect, app: &App) {
    let editor = &app.editor;
    let buttons_focused = editor.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let active = editor.active();
    let slots: Vec<Slot> = editor
        .slots()
        .into_iter()
        .filter(|slot| *slot != Slot::Buttons)
        .collect();
    let selected = slots.iter().position(|slot| *slot == active);

    let items: Vec<ListItem> = slots
        .iter()
        .map(|slot| {
            ListItem::new(slot_line(
                *slot,
                &editor.form,
                *slot == active,
                editor.is_missing(*slot),
            ))
        })
        .collect();

    let border_style = if buttons_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let list = List::new(items).block(
        Block::default()
            .title(" Request ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    render_scrollable_list(frame, chunks[0], list, selected);

    let button_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(FormButton::ALL.map(|_| Constraint::Ratio(1, FormButton::ALL.len() as u32)))
        .split(chunks[1]);

    let selected_button = editor.selected_button();
    for (button, button_area) in FormButton::ALL.iter().zip(button_areas.iter()) {
        render_button(
            frame,
            *button_area,
            button.label(),
            *button == selected_button,
            buttons_focused,
        );
    }
}
