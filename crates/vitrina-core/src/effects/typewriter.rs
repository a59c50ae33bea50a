//! Typewriter text effect for the hero title.

use crate::page::{ElementId, Page, Selector};
use crate::Result;

pub const HERO_SELECTOR: &str = ".hero-title";

/// Milliseconds between characters when no speed is configured
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Reveals a captured string one character at a time.
///
/// `start` clears the element; each later `tick` appends one character.
/// Characters are Unicode scalar values, never bytes. The effect runs
/// once and is never restarted.
#[derive(Debug)]
pub struct Typewriter {
    element: ElementId,
    chars: Vec<char>,
    position: usize,
    speed_ms: u64,
    started: bool,
}

impl Typewriter {
    /// Bind to the hero title if present, capturing its current text.
    pub fn bind(page: &Page) -> Result<Option<Self>> {
        let Some(element) = page.select_first(&Selector::parse(HERO_SELECTOR)?) else {
            return Ok(None);
        };
        let text = page.element(element).text.clone();
        Ok(Some(Self {
            element,
            chars: text.chars().collect(),
            position: 0,
            speed_ms: DEFAULT_SPEED_MS,
            started: false,
        }))
    }

    /// Set the typing interval
    pub fn with_speed(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Length of the captured text in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Clear the element; typing begins on the following ticks.
    pub fn start(&mut self, page: &mut Page) {
        page.element_mut(self.element).text.clear();
        self.started = true;
    }

    /// Append the next character. Returns true while more remain.
    pub fn tick(&mut self, page: &mut Page) -> bool {
        if let Some(&c) = self.chars.get(self.position) {
            page.element_mut(self.element).text.push(c);
            self.position += 1;
        }
        !self.is_done()
    }
}
