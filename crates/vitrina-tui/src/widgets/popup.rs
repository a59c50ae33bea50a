use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::GruvboxMaterial;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the login notice popup
    pub fn render_notice(frame: &mut Frame, message: &str) {
        let area = frame.area();

        // Centered, reasonable width
        let popup_width = 50u16.min(area.width.saturating_sub(4));
        let popup_height = 7u16.min(area.height.saturating_sub(2));

        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Notice ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::WARNING))
            .style(Style::default().bg(GruvboxMaterial::BG1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Message
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Hint
            ])
            .split(inner_area);

        let message_paragraph = Paragraph::new(Line::from(vec![Span::styled(
            truncate_str(message, popup_width.saturating_sub(4) as usize),
            Style::default()
                .fg(GruvboxMaterial::FG0)
                .add_modifier(Modifier::BOLD),
        )]))
        .alignment(Alignment::Center);

        frame.render_widget(message_paragraph, chunks[0]);

        let hint_paragraph = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(GruvboxMaterial::GREY1)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(GruvboxMaterial::GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] close", Style::default().fg(GruvboxMaterial::GREY1)),
        ]))
        .alignment(Alignment::Center);

        frame.render_widget(hint_paragraph, chunks[2]);
    }

    /// Render the key reference overlay
    pub fn render_help(frame: &mut Frame) {
        let area = frame.area();

        let entries: &[(&str, &str)] = &[
            ("j / k", "Scroll down / up"),
            ("Ctrl-d / Ctrl-u", "Half page down / up"),
            ("gg / G", "Jump to top / bottom"),
            ("Tab / Shift-Tab", "Select next / previous anchor"),
            ("Enter", "Click the selected anchor"),
            ("i / p", "Edit username / password"),
            ("s", "Submit the login form"),
            ("?", "This help"),
            ("q", "Quit"),
        ];

        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::ACCENT))
            .style(Style::default().bg(GruvboxMaterial::BG1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines = vec![Line::from("")];
        for (keys, action) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", keys),
                    Style::default().fg(GruvboxMaterial::YELLOW),
                ),
                Span::styled(*action, Style::default().fg(GruvboxMaterial::FG0)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  press any key to close",
            Style::default().fg(GruvboxMaterial::GREY1),
        )));

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
