//! Field rendering utilities for forms

use crate::catalog::operator_label;
use crate::request::FormState;
use crate::state::{Slot, SlotKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width the labels are padded to so values line up
const LABEL_WIDTH: usize = 32;

/// Render one form input as a single line
pub fn slot_line(slot: Slot, form: &FormState, is_active: bool, is_missing: bool) -> Line<'static> {
    let label_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", slot.label(), width = LABEL_WIDTH),
        label_style,
    )];

    match slot.kind() {
        SlotKind::Checkbox => {
            let mark = if slot.checked(form).unwrap_or(false) { "[x]" } else { "[ ]" };
            spans.push(Span::styled(mark, value_style));
        }
        SlotKind::Text | SlotKind::Choice => {
            let value = slot.text(form).unwrap_or_default().to_string();
            let is_choice = slot.kind() == SlotKind::Choice;

            if is_choice && is_active {
                spans.push(Span::styled("◂ ", Style::default().fg(Color::DarkGray)));
            }
            if value.is_empty() && !is_active {
                spans.push(Span::styled("(empty)", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::styled(value.clone(), value_style));
            }
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            if is_choice && is_active {
                spans.push(Span::styled(" ▸", Style::default().fg(Color::DarkGray)));
            }

            if let Slot::FilterType(_) = slot {
                if let Some(label) = operator_label(&value) {
                    spans.push(Span::styled(
                        format!("  ({label})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
        }
        SlotKind::Buttons => {}
    }

    if is_missing {
        spans.push(Span::styled("  (required)", Style::default().fg(Color::Red)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_checkbox_line() {
        let mut form = FormState::new();
        form.official = true;
        let line = slot_line(Slot::Official, &form, false, false);
        assert!(text_of(&line).ends_with("[x]"));
    }

    #[test]
    fn test_empty_inactive_text_shows_placeholder() {
        let form = FormState::new();
        let line = slot_line(Slot::JobIds, &form, false, false);
        assert!(text_of(&line).ends_with("(empty)"));
    }

    #[test]
    fn test_active_text_shows_cursor() {
        let mut form = FormState::new();
        form.job_ids = "1,2".to_string();
        let line = slot_line(Slot::JobIds, &form, true, false);
        assert!(text_of(&line).ends_with("1,2▌"));
    }

    #[test]
    fn test_filter_type_shows_operator_label() {
        let mut form = FormState::new();
        form.add_filter();
        form.filters[0].filter_type = "not_equal".to_string();
        let line = slot_line(Slot::FilterType(0), &form, true, false);
        let text = text_of(&line);
        assert!(text.contains("◂ not_equal▌ ▸"));
        assert!(text.contains("(Not Equal)"));
    }

    #[test]
    fn test_missing_marker() {
        let mut form = FormState::new();
        form.add_value_column();
        let line = slot_line(Slot::ValueColumn(0), &form, false, true);
        assert!(text_of(&line).ends_with("(required)"));
    }
}
