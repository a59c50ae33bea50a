//! In-page anchor navigation.

use crate::page::{ElementId, Page, Selector};
use crate::Result;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Resolves clicks on in-page anchors to their target elements.
///
/// Only clicks that resolve are consumed; a dangling fragment or a bare
/// `#` leaves the click to default handling.
#[derive(Debug)]
pub struct AnchorNavigator {
    anchors: Vec<ElementId>,
}

impl AnchorNavigator {
    pub fn bind(page: &Page) -> Result<Self> {
        let anchors = page.select(&Selector::parse(ANCHOR_SELECTOR)?);
        Ok(Self { anchors })
    }

    pub fn anchors(&self) -> &[ElementId] {
        &self.anchors
    }

    /// Resolve a click to a scroll target. None means the click was not
    /// on a registered anchor, or its fragment matched nothing.
    pub fn resolve(&self, page: &Page, clicked: ElementId) -> Option<ElementId> {
        if !self.anchors.contains(&clicked) {
            return None;
        }
        let href = page.element(clicked).attr("href")?;
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            return None;
        }
        page.by_id(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::markup::parse_page;

    fn anchored_page() -> Page {
        parse_page(
            r##"<body>
  <a id="nav-productos" href="#productos">Productos</a>
  <a id="nav-missing" href="#inventario">Inventario</a>
  <a id="nav-top" href="#">Inicio</a>
  <a id="nav-external" href="https://example.com">Fuera</a>
  <section id="productos" top="700" height="900">Catalogo</section>
</body>"##,
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_existing_target() {
        let page = anchored_page();
        let nav = AnchorNavigator::bind(&page).unwrap();
        assert_eq!(nav.anchors().len(), 3);

        let clicked = page.by_id("nav-productos").unwrap();
        let target = page.by_id("productos").unwrap();
        assert_eq!(nav.resolve(&page, clicked), Some(target));
    }

    #[test]
    fn test_dangling_fragment_not_consumed() {
        let page = anchored_page();
        let nav = AnchorNavigator::bind(&page).unwrap();

        let clicked = page.by_id("nav-missing").unwrap();
        assert_eq!(nav.resolve(&page, clicked), None);
    }

    #[test]
    fn test_bare_hash_not_consumed() {
        let page = anchored_page();
        let nav = AnchorNavigator::bind(&page).unwrap();

        let clicked = page.by_id("nav-top").unwrap();
        assert_eq!(nav.resolve(&page, clicked), None);
    }

    #[test]
    fn test_external_link_not_registered() {
        let page = anchored_page();
        let nav = AnchorNavigator::bind(&page).unwrap();

        let clicked = page.by_id("nav-external").unwrap();
        assert!(!nav.anchors().contains(&clicked));
        assert_eq!(nav.resolve(&page, clicked), None);
    }
}
