pub mod markup;
pub mod selector;
pub mod style;

pub use selector::Selector;
pub use style::{fade_transition, InlineStyle};

/// Stable handle to an element in a [`Page`].
///
/// Ids are arena indices: they stay valid for the life of the page,
/// including after the element is detached. An id is only meaningful for
/// the page that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of an element in the page flow, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The window onto the page: a fixed height sliding over the content.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub height: f64,
    pub scroll_y: f64,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    /// Current value for form fields
    pub value: String,
    pub style: InlineStyle,
    pub layout: Option<LayoutBox>,
    pub parent: Option<ElementId>,
    detached: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: String::new(),
            value: String::new(),
            style: InlineStyle::default(),
            layout: None,
            parent: None,
            detached: false,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Flat arena of page elements in document order.
///
/// Detaching marks an element and hides it from queries and iteration;
/// the record itself stays addressable so late style writes and event
/// reporting keep working.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn is_detached(&self, id: ElementId) -> bool {
        self.elements[id.0].detached
    }

    /// Remove an element from the live page. The id stays valid.
    pub fn detach(&mut self, id: ElementId) {
        self.elements[id.0].detached = true;
    }

    /// Attached elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.detached)
            .map(|(i, e)| (ElementId(i), e))
    }

    /// All attached elements matching a selector, in document order.
    pub fn select(&self, selector: &Selector) -> Vec<ElementId> {
        self.iter()
            .filter(|(_, e)| selector.matches(e))
            .map(|(id, _)| id)
            .collect()
    }

    /// First attached element matching a selector.
    pub fn select_first(&self, selector: &Selector) -> Option<ElementId> {
        self.iter()
            .find(|(_, e)| selector.matches(e))
            .map(|(id, _)| id)
    }

    /// Look up an attached element by its markup id.
    pub fn by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.iter()
            .find(|(_, e)| e.id.as_deref() == Some(dom_id))
            .map(|(id, _)| id)
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.elements.iter().filter(|e| !e.detached).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bottom edge of the lowest attached element, in pixels.
    pub fn content_height(&self) -> f64 {
        self.iter()
            .filter_map(|(_, e)| e.layout.map(|l| l.bottom()))
            .fold(0.0, f64::max)
    }

    /// Largest scroll offset that still shows a full viewport of content.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.content_height() - viewport_height).max(0.0)
    }
}
