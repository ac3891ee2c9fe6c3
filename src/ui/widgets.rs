//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list that scrolls to keep the selected item in view.
/// `None` renders from the top with nothing highlighted.
pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    list: List,
    selected_index: Option<usize>,
) {
    let mut list_state = ListState::default().with_selected(selected_index);
    frame.render_stateful_widget(list, area, &mut list_state);
}
