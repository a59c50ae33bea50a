//! Navbar restyle on scroll.

use crate::config::NavbarConfig;
use crate::page::{ElementId, Page, Selector};
use crate::Result;

pub const NAVBAR_SELECTOR: &str = ".navbar-custom";

/// Switches the navbar between its top-of-page and scrolled styles.
///
/// A pure function of the scroll offset, re-applied on every update;
/// pages without a navbar get a no-op toggle.
#[derive(Debug)]
pub struct NavbarToggle {
    element: Option<ElementId>,
    /// Last applied state, None until the first update
    translucent: Option<bool>,
}

impl NavbarToggle {
    pub fn bind(page: &Page) -> Result<Self> {
        let element = page.select_first(&Selector::parse(NAVBAR_SELECTOR)?);
        Ok(Self {
            element,
            translucent: None,
        })
    }

    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Re-evaluate against the scroll offset. Past the threshold the bar
    /// goes translucent and blurred; at the top it is opaque white with no
    /// filter. Returns the new state when the applied style flipped.
    pub fn update(&mut self, page: &mut Page, scroll_y: f64, config: &NavbarConfig) -> Option<bool> {
        let id = self.element?;
        let translucent = scroll_y > config.threshold_px;

        let element = page.element_mut(id);
        if translucent {
            element.style.background = Some(config.scrolled_background.clone());
            element.style.backdrop_filter = Some(config.scrolled_backdrop_filter.clone());
        } else {
            element.style.background = Some(config.top_background.clone());
            element.style.backdrop_filter = None;
        }

        let flipped = self.translucent != Some(translucent);
        self.translucent = Some(translucent);
        flipped.then_some(translucent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn navbar_page() -> (Page, ElementId) {
        let mut page = Page::new();
        let mut nav = Element::new("nav");
        nav.classes.push("navbar-custom".to_string());
        let id = page.push(nav);
        (page, id)
    }

    #[test]
    fn test_scrolled_past_threshold() {
        let (mut page, id) = navbar_page();
        let config = NavbarConfig::default();
        let mut toggle = NavbarToggle::bind(&page).unwrap();

        assert_eq!(toggle.update(&mut page, 150.0, &config), Some(true));
        let nav = page.element(id);
        assert_eq!(
            nav.style.background.as_deref(),
            Some("rgba(255, 255, 255, 0.95)")
        );
        assert_eq!(nav.style.backdrop_filter.as_deref(), Some("blur(10px)"));
    }

    #[test]
    fn test_near_top() {
        let (mut page, id) = navbar_page();
        let config = NavbarConfig::default();
        let mut toggle = NavbarToggle::bind(&page).unwrap();

        assert_eq!(toggle.update(&mut page, 50.0, &config), Some(false));
        let nav = page.element(id);
        assert_eq!(nav.style.background.as_deref(), Some("#ffffff"));
        assert_eq!(nav.style.backdrop_filter, None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (mut page, id) = navbar_page();
        let config = NavbarConfig::default();
        let mut toggle = NavbarToggle::bind(&page).unwrap();

        toggle.update(&mut page, 100.0, &config);
        assert_eq!(page.element(id).style.background.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_flip_reported_once() {
        let (mut page, _) = navbar_page();
        let config = NavbarConfig::default();
        let mut toggle = NavbarToggle::bind(&page).unwrap();

        assert_eq!(toggle.update(&mut page, 150.0, &config), Some(true));
        assert_eq!(toggle.update(&mut page, 160.0, &config), None);
        assert_eq!(toggle.update(&mut page, 20.0, &config), Some(false));
    }

    #[test]
    fn test_missing_navbar_skips() {
        let mut page = Page::new();
        page.push(Element::new("div"));
        let mut toggle = NavbarToggle::bind(&page).unwrap();

        assert!(toggle.element().is_none());
        assert_eq!(toggle.update(&mut page, 500.0, &NavbarConfig::default()), None);
    }
}
