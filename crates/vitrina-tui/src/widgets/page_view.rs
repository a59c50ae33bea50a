use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use vitrina_core::effects::login::PASSWORD_FIELD;
use vitrina_core::page::{Element, ElementId};
use vitrina_core::Page;

use crate::app::{App, Mode};
use crate::theme::GruvboxMaterial;

pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" Page ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::GREY0))
            .style(Style::default().bg(GruvboxMaterial::BG0));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        // The navbar strip stays pinned, like a fixed header
        let nav_area = Rect::new(inner.x, inner.y, inner.width, 1);
        let content_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);

        Self::render_navbar(frame, nav_area, app);
        Self::render_content(frame, content_area, app);
    }

    fn render_navbar(frame: &mut Frame, area: Rect, app: &App) {
        let page = app.engine.page();
        let config = app.engine.config();

        let translucent = page
            .iter()
            .find(|(_, e)| e.has_class("navbar-custom"))
            .and_then(|(_, e)| e.style.background.as_deref())
            .map(|bg| bg == config.navbar.scrolled_background.as_str())
            .unwrap_or(false);

        let bg = if translucent {
            GruvboxMaterial::BG2
        } else {
            GruvboxMaterial::BG1
        };

        let mut spans = vec![Span::styled(
            " Nav ",
            Style::default().fg(GruvboxMaterial::GREY2).bg(bg),
        )];
        for (i, &anchor) in app.engine.anchors().iter().enumerate() {
            let element = page.element(anchor);
            let style = if i == app.selected_anchor {
                Style::default()
                    .fg(GruvboxMaterial::BG0)
                    .bg(GruvboxMaterial::ACCENT)
            } else {
                Style::default().fg(GruvboxMaterial::INFO).bg(bg)
            };
            spans.push(Span::styled(format!(" {} ", element.text), style));
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        if translucent {
            spans.push(Span::styled(
                "[scrolled]",
                Style::default().fg(GruvboxMaterial::GREY2).bg(bg),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
    }

    fn render_content(frame: &mut Frame, area: Rect, app: &App) {
        let page = app.engine.page();
        let viewport = app.engine.viewport();

        let rows = area.height as usize;
        let px_per_row = viewport.height / rows as f64;

        let mut slots: Vec<Option<Line>> = vec![None; rows];

        for (id, element) in page.iter() {
            let Some(layout) = element.layout else {
                continue;
            };
            if in_navbar(page, id) {
                continue;
            }

            let top = layout.top + element.style.effective_translate_y();
            let offset = top - viewport.scroll_y;
            if offset + layout.height <= 0.0 || offset >= viewport.height {
                continue;
            }

            // Drop to the next free row when two elements land on one
            let mut row = (offset.max(0.0) / px_per_row) as usize;
            while row < rows && slots[row].is_some() {
                row += 1;
            }
            if row >= rows {
                continue;
            }
            slots[row] = Some(Self::element_line(app, page, id, element, area.width));
        }

        let lines: Vec<Line> = slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Line::from("")))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn element_line<'a>(
        app: &App,
        page: &Page,
        id: ElementId,
        element: &Element,
        width: u16,
    ) -> Line<'a> {
        let indent = "  ".repeat(depth(page, id).saturating_sub(1));
        let label = if let Some(ref dom_id) = element.id {
            format!("#{}", dom_id)
        } else if let Some(class) = element.classes.first() {
            format!(".{}", class)
        } else {
            format!("<{}>", element.tag)
        };

        let editing = matches!(
            (app.mode, element.id.as_deref()),
            (Mode::Insert(field), Some(dom_id)) if dom_id == field.dom_id()
        );

        let body = if element.tag == "input" {
            Self::field_text(element, editing)
        } else {
            element.text.clone()
        };

        let body_style = if editing {
            Style::default()
                .fg(GruvboxMaterial::YELLOW)
                .bg(GruvboxMaterial::SELECTION)
        } else if element.has_class("hero-title") {
            Style::default()
                .fg(GruvboxMaterial::FG1)
                .add_modifier(Modifier::BOLD)
        } else if element.has_class("alert") {
            Style::default().fg(GruvboxMaterial::WARNING)
        } else if element.style.effective_opacity() < 1.0 {
            Style::default().fg(GruvboxMaterial::HIDDEN)
        } else {
            Style::default().fg(GruvboxMaterial::REVEALED)
        };

        let max = (width as usize).saturating_sub(indent.len() + label.len() + 2);
        Line::from(vec![
            Span::raw(indent),
            Span::styled(label, Style::default().fg(GruvboxMaterial::GREY1)),
            Span::raw(" "),
            Span::styled(truncate_to_width(&body, max), body_style),
        ])
    }

    fn field_text(element: &Element, editing: bool) -> String {
        let masked = element.id.as_deref() == Some(PASSWORD_FIELD);
        let shown: String = if masked {
            "*".repeat(element.value.chars().count())
        } else {
            element.value.clone()
        };
        if editing {
            format!("[{}_]", shown)
        } else {
            format!("[{}]", shown)
        }
    }
}

fn depth(page: &Page, id: ElementId) -> usize {
    let mut depth = 0;
    let mut current = page.element(id).parent;
    while let Some(id) = current {
        depth += 1;
        current = page.element(id).parent;
    }
    depth
}

fn in_navbar(page: &Page, id: ElementId) -> bool {
    let mut current = Some(id);
    while let Some(id) = current {
        let element = page.element(id);
        if element.has_class("navbar-custom") {
            return true;
        }
        current = element.parent;
    }
    false
}

/// Truncate a string to a display width, with ellipsis
fn truncate_to_width(s: &str, max_cols: usize) -> String {
    let total: usize = s
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum();
    if total <= max_cols {
        return s.to_string();
    }

    let mut cols = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(1);
        if cols + w > max_cols.saturating_sub(1) {
            break;
        }
        cols += w;
        out.push(ch);
    }
    out.push('…');
    out
}
