use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{Element, ElementId, LayoutBox, Page};
use crate::Result;

/// Parse a page markup file.
pub fn parse_page_file(path: &Path) -> Result<Page> {
    let content = std::fs::read_to_string(path)?;
    parse_page(&content)
}

/// Parse page markup into a [`Page`].
///
/// The markup is well-formed XML. `id`, `class` (space separated) and
/// `value` populate the dedicated element fields; `top` and `height` give
/// the element a layout box when both are present; every other attribute
/// is kept verbatim.
pub fn parse_page(content: &str) -> Result<Page> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut page = Page::new();
    let mut stack: Vec<ElementId> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let id = push_element(&mut page, &e, stack.last().copied())?;
                stack.push(id);
            }
            Ok(Event::Empty(e)) => {
                push_element(&mut page, &e, stack.last().copied())?;
            }
            Ok(Event::Text(t)) => {
                if let Some(&current) = stack.last() {
                    let text = t
                        .unescape()
                        .map_err(|e| crate::Error::Markup(format!("Bad text content: {}", e)))?;
                    let element = page.element_mut(current);
                    if !element.text.is_empty() {
                        element.text.push(' ');
                    }
                    element.text.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(crate::Error::Markup(format!("Failed to parse page: {}", e)));
            }
            _ => {}
        }
    }

    Ok(page)
}

fn push_element(page: &mut Page, e: &BytesStart, parent: Option<ElementId>) -> Result<ElementId> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let mut element = Element::new(&tag);
    element.parent = parent;

    let mut top = None;
    let mut height = None;

    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value).to_string();
        match attr.key.as_ref() {
            b"id" => element.id = Some(value),
            b"class" => {
                element.classes = value.split_whitespace().map(String::from).collect();
            }
            b"value" => element.value = value,
            b"top" => top = Some(parse_px(&tag, "top", &value)?),
            b"height" => height = Some(parse_px(&tag, "height", &value)?),
            key => {
                element
                    .attrs
                    .push((String::from_utf8_lossy(key).to_string(), value));
            }
        }
    }

    if let (Some(top), Some(height)) = (top, height) {
        element.layout = Some(LayoutBox { top, height });
    }

    Ok(page.push(element))
}

fn parse_px(tag: &str, attr: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| crate::Error::Markup(format!("<{}> has non-numeric {}: {:?}", tag, attr, value)))
}
