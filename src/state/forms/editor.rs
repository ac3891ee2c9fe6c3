//! Editing session state: the request form plus focus, preview and notices

use std::time::Duration;

use chrono::{DateTime, Local};

use super::field::{Slot, SlotKind};
use crate::catalog::{self, FieldCatalog};
use crate::request::{build_request_document, FormState, RequestDocument, RequestError};
use crate::state::Toast;

pub const VALIDATION_NOTICE: &str = "Please fill in all required fields.";
pub const COPIED_NOTICE: &str = "JSON copied to clipboard!";
pub const NOTHING_TO_COPY_NOTICE: &str = "Generate the request first.";
pub const DISMISS_LABEL: &str = "Close";

/// Buttons in the action row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    AddColumn,
    AddFilter,
    Generate,
    Copy,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 5] = [
        FormButton::AddColumn,
        FormButton::AddFilter,
        FormButton::Generate,
        FormButton::Copy,
        FormButton::Reset,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormButton::AddColumn => "+ Column",
            FormButton::AddFilter => "+ Filter",
            FormButton::Generate => "Generate",
            FormButton::Copy => "Copy",
            FormButton::Reset => "Reset",
        }
    }
}

/// What the preview pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    Json,
    Sql,
}

impl PreviewMode {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Json => Self::Sql,
            Self::Sql => Self::Json,
        };
    }
}

/// The last successfully generated document and its rendered text
#[derive(Debug, Clone)]
pub struct Generated {
    pub document: RequestDocument,
    pub json: String,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub form: FormState,
    pub active_slot: usize,
    /// Which button is selected when the buttons row is active
    pub selected_button: usize,
    pub generated: Option<Generated>,
    pub preview_mode: PreviewMode,
    pub preview_scroll: u16,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    /// Set after a failed generate so empty required inputs are highlighted
    pub show_missing: bool,
}

impl EditorState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            form: FormState::new(),
            active_slot: 0,
            selected_button: 2, // Default to "Generate"
            generated: None,
            preview_mode: PreviewMode::default(),
            preview_scroll: 0,
            toast: None,
            toast_duration,
            show_missing: false,
        }
    }

    pub fn slots(&self) -> Vec<Slot> {
        Slot::layout(&self.form)
    }

    pub fn active(&self) -> Slot {
        let slots = self.slots();
        slots[self.active_slot.min(slots.len() - 1)]
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active() == Slot::Buttons
    }

    pub fn selected_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    pub fn next_slot(&mut self) {
        let count = self.slots().len();
        self.active_slot = (self.active_slot + 1) % count;
    }

    pub fn prev_slot(&mut self) {
        let count = self.slots().len();
        if self.active_slot == 0 {
            self.active_slot = count - 1;
        } else {
            self.active_slot -= 1;
        }
    }

    pub fn focus(&mut self, slot: Slot) {
        if let Some(index) = self.slots().iter().position(|s| *s == slot) {
            self.active_slot = index;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn input_char(&mut self, c: char) {
        let slot = self.active();
        if let Some(text) = slot.text_mut(&mut self.form) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let slot = self.active();
        if let Some(text) = slot.text_mut(&mut self.form) {
            text.pop();
        }
    }

    pub fn toggle_active(&mut self) -> bool {
        let slot = self.active();
        slot.toggle(&mut self.form)
    }

    /// Replace the active choice input with the next or previous known value
    pub fn cycle_choice(&mut self, catalog: &FieldCatalog, forward: bool) {
        let slot = self.active();
        if slot.kind() != SlotKind::Choice {
            return;
        }
        let operators;
        let options: &[String] = match slot {
            Slot::FilterType(_) => {
                operators = catalog::operator_values();
                &operators
            }
            _ => catalog.fields(),
        };
        let Some(text) = slot.text_mut(&mut self.form) else {
            return;
        };
        let picked = if forward {
            catalog::next_option(options, text)
        } else {
            catalog::prev_option(options, text)
        };
        if let Some(value) = picked {
            *text = value.to_string();
        }
    }

    /// Append a value column and focus it
    pub fn add_value_column(&mut self) {
        self.form.add_value_column();
        self.focus(Slot::ValueColumn(self.form.value_cols.len() - 1));
    }

    /// Append a filter and focus its field input
    pub fn add_filter(&mut self) {
        self.form.add_filter();
        self.focus(Slot::FilterField(self.form.filters.len() - 1));
    }

    /// Remove the row the focus is in. Returns `Ok(false)` when the focus
    /// is not inside a value column or filter row.
    pub fn remove_active_row(&mut self) -> Result<bool, RequestError> {
        match self.active() {
            Slot::ValueColumn(i) => {
                self.form.remove_value_column(i)?;
            }
            Slot::FilterField(i) | Slot::FilterType(i) | Slot::FilterValue(i) => {
                self.form.remove_filter(i)?;
            }
            _ => return Ok(false),
        }
        self.clamp_active();
        Ok(true)
    }

    /// Build the request document. On failure the previous document is kept
    /// and a notice is shown; the form stays as it is.
    pub fn generate(&mut self) -> Result<(), RequestError> {
        match build_request_document(&self.form) {
            Ok(document) => {
                let json = document
                    .to_pretty_json()
                    .unwrap_or_else(|e| format!("Failed to render request: {e}"));
                tracing::info!(
                    "Generated request ({} value cols, {} filters)",
                    document.value_cols.len(),
                    document.filter_model.len()
                );
                self.generated = Some(Generated {
                    document,
                    json,
                    generated_at: Local::now(),
                });
                self.preview_scroll = 0;
                self.show_missing = false;
                Ok(())
            }
            Err(e) => {
                tracing::info!("Generate rejected: {e:?}");
                self.show_missing = true;
                self.notify(VALIDATION_NOTICE);
                Err(e)
            }
        }
    }

    /// Text to hand to the clipboard, if a document has been generated
    pub fn copy_text(&self) -> Option<String> {
        self.generated.as_ref().map(|g| g.json.clone())
    }

    /// Reset the form and drop any generated document
    pub fn clear(&mut self) {
        self.form.clear();
        self.generated = None;
        self.show_missing = false;
        self.preview_scroll = 0;
        self.active_slot = 0;
        tracing::info!("Form reset");
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, DISMISS_LABEL, self.toast_duration));
    }

    pub fn dismiss_toast(&mut self) -> bool {
        self.toast.take().is_some()
    }

    /// Drop the notice once its time is up
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Whether `slot` should be highlighted as missing
    pub fn is_missing(&self, slot: Slot) -> bool {
        self.show_missing
            && slot.text(&self.form).is_some_and(str::is_empty)
            && slot.required_path().is_some()
    }

    pub fn scroll_preview_down(&mut self, lines: u16) {
        self.preview_scroll = self.preview_scroll.saturating_add(lines);
    }

    pub fn scroll_preview_up(&mut self, lines: u16) {
        self.preview_scroll = self.preview_scroll.saturating_sub(lines);
    }

    fn clamp_active(&mut self) {
        let count = self.slots().len();
        self.active_slot = self.active_slot.min(count - 1);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TOAST_DURATION_MS))
    }
}
