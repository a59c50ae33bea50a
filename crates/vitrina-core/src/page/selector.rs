use std::str::FromStr;

use super::Element;
use crate::{Error, Result};

/// A small selector subset: optional tag, `#id`, `.class` (repeatable),
/// and a single `[attr^="prefix"]` test.
///
/// Covers exactly the queries the page enhancements make; anything more
/// elaborate is rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attr_prefix: Option<(String, String)>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(Error::Selector("empty selector".to_string()));
        }

        let mut sel = Selector::default();
        let mut i = 0;

        if s.chars().next().is_some_and(|c| c.is_alphanumeric()) {
            let end = ident_end(s, 0);
            sel.tag = Some(s[..end].to_string());
            i = end;
        }

        while i < s.len() {
            let rest = &s[i..];
            if let Some(stripped) = rest.strip_prefix('#') {
                let end = ident_end(stripped, 0);
                if end == 0 {
                    return Err(Error::Selector(input.to_string()));
                }
                sel.id = Some(stripped[..end].to_string());
                i += 1 + end;
            } else if let Some(stripped) = rest.strip_prefix('.') {
                let end = ident_end(stripped, 0);
                if end == 0 {
                    return Err(Error::Selector(input.to_string()));
                }
                sel.classes.push(stripped[..end].to_string());
                i += 1 + end;
            } else if let Some(stripped) = rest.strip_prefix('[') {
                let close = stripped
                    .find(']')
                    .ok_or_else(|| Error::Selector(input.to_string()))?;
                let inner = &stripped[..close];
                let (name, value) = inner
                    .split_once("^=")
                    .ok_or_else(|| Error::Selector(input.to_string()))?;
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .ok_or_else(|| Error::Selector(input.to_string()))?;
                if sel.attr_prefix.is_some() {
                    return Err(Error::Selector(input.to_string()));
                }
                sel.attr_prefix = Some((name.to_string(), value.to_string()));
                i += 1 + close + 1;
            } else {
                return Err(Error::Selector(input.to_string()));
            }
        }

        Ok(sel)
    }

    /// Check whether an element satisfies every component of the selector.
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(ref tag) = self.tag {
            if element.tag != *tag {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            if !element.has_class(class) {
                return false;
            }
        }
        if let Some((ref name, ref prefix)) = self.attr_prefix {
            match element.attr(name) {
                Some(value) if value.starts_with(prefix.as_str()) => {}
                _ => return false,
            }
        }
        true
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selector::parse(s)
    }
}

fn ident_end(s: &str, start: usize) -> usize {
    s[start..]
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '-' || *c == '_'))
        .map(|(off, _)| start + off)
        .unwrap_or(s.len())
}
