use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, FormField, Mode};
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = if app.modal_open() {
            "NOTICE"
        } else {
            match app.mode {
                Mode::Normal => "NORMAL",
                Mode::Insert(FormField::Username) => "INSERT user",
                Mode::Insert(FormField::Password) => "INSERT pass",
                Mode::Help => "HELP",
            }
        };

        let engine = &app.engine;
        let max_scroll = engine.page().max_scroll(engine.viewport().height);
        let glide = if engine.is_scrolling() { " (gliding)" } else { "" };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | Scroll: {:.0}/{:.0}px{} | Revealed: {}/{} | Clock: {:.1}s",
                mode_str,
                engine.scroll_position(),
                max_scroll,
                glide,
                engine.revealed_count(),
                engine.reveal_total(),
                engine.clock_ms() as f64 / 1000.0,
            )
        };

        let help_hint = " q:quit j/k:scroll Tab:anchor Enter:go i/p:fields s:submit ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREY2)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
