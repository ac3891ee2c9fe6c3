//! Application state and core logic

use crate::catalog::FieldCatalog;
use crate::clipboard::{spawn_copy, ClipboardEvent, ClipboardWriter, SystemClipboard};
use crate::config::BuilderConfig;
use crate::state::{
    EditorState, FormButton, SlotKind, COPIED_NOTICE, NOTHING_TO_COPY_NOTICE,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Lines moved by PageUp/PageDown in the preview pane
const PREVIEW_PAGE: u16 = 10;

/// Main application struct
pub struct App {
    /// Form editing session
    pub editor: EditorState,
    /// Field names offered by the pickers
    pub catalog: FieldCatalog,
    /// Table named in the SQL preview
    pub results_table: String,
    clipboard: Arc<dyn ClipboardWriter>,
    clipboard_tx: UnboundedSender<ClipboardEvent>,
    clipboard_rx: UnboundedReceiver<ClipboardEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App using the system clipboard
    pub fn new(config: &BuilderConfig) -> Self {
        Self::with_clipboard(config, Arc::new(SystemClipboard::default()))
    }

    pub fn with_clipboard(config: &BuilderConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let (clipboard_tx, clipboard_rx) = unbounded_channel();
        Self {
            editor: EditorState::new(config.toast_duration()),
            catalog: FieldCatalog::new(config.extra_fields()),
            results_table: config.results_table().to_string(),
            clipboard,
            clipboard_tx,
            clipboard_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping: expire notices and pick up clipboard outcomes
    pub fn tick(&mut self) {
        while let Ok(event) = self.clipboard_rx.try_recv() {
            match event {
                ClipboardEvent::Copied { chars } => {
                    tracing::debug!("Clipboard holds {chars} chars");
                    self.editor.notify(COPIED_NOTICE);
                }
                ClipboardEvent::Failed(reason) => self
                    .editor
                    .notify(format!("Clipboard unavailable: {reason}")),
            }
        }
        self.editor.expire_toast();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.editor.dismiss_toast();
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => return self.generate(),
                KeyCode::Char('r') => return self.reset(),
                KeyCode::Char('n') => return self.editor.add_value_column(),
                KeyCode::Char('f') => return self.editor.add_filter(),
                KeyCode::Char('d') => return self.remove_active_row(),
                KeyCode::Char('p') => return self.editor.preview_mode.toggle(),
                KeyCode::Char('q') => {
                    self.quit = true;
                    return;
                }
                _ => {}
            }
        }
        if key.code == KeyCode::Char('y') && key.modifiers.contains(crate::platform::COPY_MODIFIER)
        {
            return self.copy();
        }
        // Unbound shortcuts must not type into the focused input
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.editor.next_slot(),
            KeyCode::BackTab | KeyCode::Up => self.editor.prev_slot(),
            KeyCode::PageDown => self.editor.scroll_preview_down(PREVIEW_PAGE),
            KeyCode::PageUp => self.editor.scroll_preview_up(PREVIEW_PAGE),
            _ => self.handle_slot_key(key),
        }
    }

    /// Keys that depend on what kind of input has focus
    fn handle_slot_key(&mut self, key: KeyEvent) {
        match (self.editor.active().kind(), key.code) {
            (SlotKind::Buttons, KeyCode::Left) => self.editor.prev_button(),
            (SlotKind::Buttons, KeyCode::Right) => self.editor.next_button(),
            (SlotKind::Buttons, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.press(self.editor.selected_button())
            }
            (SlotKind::Checkbox, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.editor.toggle_active();
            }
            (SlotKind::Choice, KeyCode::Left) => self.editor.cycle_choice(&self.catalog, false),
            (SlotKind::Choice, KeyCode::Right) => self.editor.cycle_choice(&self.catalog, true),
            (SlotKind::Text | SlotKind::Choice, KeyCode::Char(c)) => self.editor.input_char(c),
            (SlotKind::Text | SlotKind::Choice, KeyCode::Backspace) => self.editor.backspace(),
            (SlotKind::Text | SlotKind::Choice, KeyCode::Enter) => self.editor.next_slot(),
            _ => {}
        }
    }

    /// Run the action behind a button
    pub fn press(&mut self, button: FormButton) {
        match button {
            FormButton::AddColumn => self.editor.add_value_column(),
            FormButton::AddFilter => self.editor.add_filter(),
            FormButton::Generate => self.generate(),
            FormButton::Copy => self.copy(),
            FormButton::Reset => self.reset(),
        }
    }

    fn generate(&mut self) {
        // A rejected form is reported through the notice
        let _ = self.editor.generate();
    }

    fn copy(&mut self) {
        match self.editor.copy_text() {
            Some(text) => spawn_copy(self.clipboard.clone(), text, self.clipboard_tx.clone()),
            None => self.editor.notify(NOTHING_TO_COPY_NOTICE),
        }
    }

    fn reset(&mut self) {
        self.editor.clear();
    }

    fn remove_active_row(&mut self) {
        // Only rows that are on screen can have focus, so this is a wiring bug
        if let Err(e) = self.editor.remove_active_row() {
            tracing::warn!("Row removal rejected: {e}");
        }
    }
}
