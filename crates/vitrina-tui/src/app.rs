use std::time::Instant;

use tracing::warn;

use vitrina_core::effects::login::{PASSWORD_FIELD, USERNAME_FIELD};
use vitrina_core::page::ElementId;
use vitrina_core::{EngineEvent, Page, PageEngine};

/// Login form field addressed by insert mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Password,
}

impl FormField {
    pub fn dom_id(self) -> &'static str {
        match self {
            FormField::Username => USERNAME_FIELD,
            FormField::Password => PASSWORD_FIELD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Password => "Password",
        }
    }
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Editing a login form field
    Insert(FormField),
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Engine driving the simulated page
    pub engine: PageEngine,
    /// Current application mode
    pub mode: Mode,
    /// Selected anchor index into the page's anchor list
    pub selected_anchor: usize,
    /// Text being typed into the active form field
    pub input_buffer: String,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Wall clock reading at the previous engine advance
    last_tick: Instant,
}

impl App {
    pub fn new(engine: PageEngine) -> Self {
        Self {
            engine,
            mode: Mode::Normal,
            selected_anchor: 0,
            input_buffer: String::new(),
            should_quit: false,
            status_message: None,
            pending_key: None,
            last_tick: Instant::now(),
        }
    }

    /// Advance the engine by the wall time since the previous tick.
    pub fn on_tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        self.advance(elapsed.as_millis() as u64);
    }

    /// Advance the engine clock and surface what happened.
    pub fn advance(&mut self, ms: u64) {
        if ms > 0 {
            self.engine.advance(ms);
        }
        self.process_engine_events();
    }

    /// Scroll down one step
    pub fn scroll_down(&mut self) {
        let step = self.engine.config().scroll.scroll_step_px;
        self.engine.scroll_by(step);
        self.process_engine_events();
    }

    /// Scroll up one step
    pub fn scroll_up(&mut self) {
        let step = self.engine.config().scroll.scroll_step_px;
        self.engine.scroll_by(-step);
        self.process_engine_events();
    }

    /// Scroll down by half a viewport
    pub fn scroll_half_page_down(&mut self) {
        let half = self.engine.viewport().height / 2.0;
        self.engine.scroll_by(half);
        self.process_engine_events();
    }

    /// Scroll up by half a viewport
    pub fn scroll_half_page_up(&mut self) {
        let half = self.engine.viewport().height / 2.0;
        self.engine.scroll_by(-half);
        self.process_engine_events();
    }

    /// Jump to the top of the page
    pub fn jump_to_top(&mut self) {
        self.engine.user_scroll(0.0);
        self.process_engine_events();
    }

    /// Jump to the bottom of the page
    pub fn jump_to_bottom(&mut self) {
        let max = self.engine.page().max_scroll(self.engine.viewport().height);
        self.engine.user_scroll(max);
        self.process_engine_events();
    }

    /// Move anchor selection forward, wrapping
    pub fn next_anchor(&mut self) {
        let count = self.engine.anchors().len();
        if count == 0 {
            self.set_status("No anchors on this page");
            return;
        }
        self.selected_anchor = (self.selected_anchor + 1) % count;
        self.show_selected_anchor();
    }

    /// Move anchor selection backward, wrapping
    pub fn prev_anchor(&mut self) {
        let count = self.engine.anchors().len();
        if count == 0 {
            self.set_status("No anchors on this page");
            return;
        }
        self.selected_anchor = if self.selected_anchor == 0 {
            count - 1
        } else {
            self.selected_anchor - 1
        };
        self.show_selected_anchor();
    }

    /// Click the selected anchor.
    pub fn activate_anchor(&mut self) {
        let Some(&anchor) = self.engine.anchors().get(self.selected_anchor) else {
            self.set_status("No anchors on this page");
            return;
        };
        if !self.engine.click(anchor) {
            self.set_status("Link target not on this page");
        }
        self.process_engine_events();
    }

    /// Begin editing a login field, seeded with its current value.
    pub fn start_editing(&mut self, field: FormField) {
        let Some(id) = self.engine.page().by_id(field.dom_id()) else {
            self.set_status("No login form on this page");
            return;
        };
        self.input_buffer = self.engine.page().element(id).value.clone();
        self.mode = Mode::Insert(field);
        self.clear_status();
    }

    /// Append a character to the active field.
    pub fn input_char(&mut self, c: char) {
        if let Mode::Insert(field) = self.mode {
            self.input_buffer.push(c);
            self.sync_field(field);
        }
    }

    /// Delete the last character of the active field.
    pub fn input_backspace(&mut self) {
        if let Mode::Insert(field) = self.mode {
            self.input_buffer.pop();
            self.sync_field(field);
        }
    }

    /// Leave insert mode, keeping what was typed.
    pub fn stop_editing(&mut self) {
        if let Mode::Insert(field) = self.mode {
            self.mode = Mode::Normal;
            self.set_status(format!("{} set", field.label()));
        }
    }

    fn sync_field(&mut self, field: FormField) {
        if self
            .engine
            .set_field_value(field.dom_id(), &self.input_buffer)
            .is_err()
        {
            warn!("Form field #{} vanished while being edited", field.dom_id());
            self.mode = Mode::Normal;
            self.set_status("Field disappeared from the page");
        }
    }

    /// Submit the login form through its guard.
    pub fn submit(&mut self) {
        if self.engine.submit().is_none() {
            self.set_status("No login form on this page");
        }
        self.process_engine_events();
    }

    /// Close the login notice popup.
    pub fn dismiss_modal(&mut self) {
        if self.engine.dismiss_modal() {
            self.set_status("Notice dismissed");
        }
    }

    /// Whether the login notice popup is showing.
    pub fn modal_open(&self) -> bool {
        self.engine.modal_message().is_some()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if we're in a mode that accepts text input
    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Insert(_))
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    fn show_selected_anchor(&mut self) {
        if let Some(&anchor) = self.engine.anchors().get(self.selected_anchor) {
            let element = self.engine.page().element(anchor);
            let text = element.text.clone();
            let href = element.attr("href").unwrap_or("#").to_string();
            self.set_status(format!("Anchor: {} ({})", text, href));
        }
    }

    fn process_engine_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                EngineEvent::Revealed { element } => {
                    let label = element_label(self.engine.page(), element);
                    self.set_status(format!("Revealed {}", label));
                }
                EngineEvent::AlertDismissed { element } => {
                    let label = element_label(self.engine.page(), element);
                    self.set_status(format!("Alert {} dismissed", label));
                }
                EngineEvent::SubmitAllowed => {
                    self.set_status("Login submitted");
                }
                EngineEvent::TypewriterFinished => {
                    self.set_status("Headline finished typing");
                }
                EngineEvent::NavbarChanged { .. }
                | EngineEvent::ScrollStarted { .. }
                | EngineEvent::ScrollFinished { .. }
                | EngineEvent::SubmitBlocked { .. } => {}
            }
        }
    }
}

/// Short display label for an element: its id, first class, or tag.
pub fn element_label(page: &Page, id: ElementId) -> String {
    let element = page.element(id);
    if let Some(ref dom_id) = element.id {
        format!("#{}", dom_id)
    } else if let Some(class) = element.classes.first() {
        format!(".{}", class)
    } else {
        element.tag.clone()
    }
}
