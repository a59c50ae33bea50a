use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use vitrina_core::page::markup::parse_page_file;
use vitrina_core::{AppConfig, PageEngine};
use vitrina_tui::{
    app::{App, FormField, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{PageViewWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig, page: Option<PathBuf>) -> Result<()> {
    let path = super::page_path(page);

    // Wire the page before touching the terminal so wiring logs stay readable
    let page = parse_page_file(&path)?;
    let engine = PageEngine::new(page, config)?;
    let mut app = App::new(engine);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Vitrina")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        app.engine.config().ui.tick_rate_ms,
        app.engine.config().scroll.animation_fps,
    );

    // Track if we need high frame rate for smooth scrolling
    // This is checked at the END of each iteration to determine NEXT iteration's tick rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            PageViewWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);

            // Render popup dialogs on top
            if let Some(message) = app.engine.modal_message() {
                PopupWidget::render_notice(frame, message);
            } else if app.mode == Mode::Help {
                PopupWidget::render_help(frame);
            }
        })?;

        // Handle events (use faster tick rate while a glide is in flight)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {
                    app.on_tick();
                }
            }
        }

        // Update fast update flag for next iteration
        // This ensures we use high frame rate immediately after a scroll action
        needs_fast_update = app.engine.is_scrolling();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG && action != Action::JumpToTop {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::JumpToTop => {
            app.clear_pending_key();
            app.jump_to_top();
        }
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextAnchor => app.next_anchor(),
        Action::PrevAnchor => app.prev_anchor(),
        Action::Activate => app.activate_anchor(),
        Action::EditUsername => app.start_editing(FormField::Username),
        Action::EditPassword => app.start_editing(FormField::Password),
        Action::Submit => app.submit(),
        Action::DismissNotice => app.dismiss_modal(),
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.clear_status();
        }
        Action::Confirm | Action::Cancel => app.stop_editing(),
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.input_backspace(),
        Action::None => {}
    }
}
