//! Scroll-triggered reveal animation.
//!
//! Elements register Hidden with their group's offset and transition
//! already applied, so the later style change presents as an animated
//! fade-and-rise. The Hidden to Revealed transition happens at most once
//! per element, no matter how often the observer reports it.

use std::collections::HashMap;

use tracing::debug;

use crate::config::RevealConfig;
use crate::observe::IntersectionEntry;
use crate::page::{fade_transition, ElementId, Page, Selector};
use crate::Result;

/// Visibility state of an observed element. One-way: Revealed never
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    Revealed,
}

/// Drives the reveal animation over a fixed element set.
#[derive(Debug)]
pub struct RevealAnimator {
    states: HashMap<ElementId, VisibilityState>,
    /// Registration order, for stable iteration
    order: Vec<ElementId>,
}

impl RevealAnimator {
    /// Collect every group's elements, apply the hidden visual, and record
    /// them as Hidden. The caller registers the same elements with its
    /// observer; membership is fixed from here on.
    pub fn register(page: &mut Page, config: &RevealConfig) -> Result<Self> {
        let mut states = HashMap::new();
        let mut order = Vec::new();

        for group in &config.groups {
            let selector = Selector::parse(&group.selector)?;
            let mut count = 0;
            for id in page.select(&selector) {
                if states.contains_key(&id) {
                    continue;
                }
                let element = page.element_mut(id);
                element.style.opacity = Some(0.0);
                element.style.translate_y = Some(group.offset_px);
                element.style.transition = Some(fade_transition(group.duration_ms));
                states.insert(id, VisibilityState::Hidden);
                order.push(id);
                count += 1;
            }
            debug!("Reveal group {:?}: {} elements", group.selector, count);
        }

        Ok(Self { states, order })
    }

    /// Registered elements in registration order.
    pub fn elements(&self) -> &[ElementId] {
        &self.order
    }

    pub fn state(&self, id: ElementId) -> Option<VisibilityState> {
        self.states.get(&id).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == VisibilityState::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Apply a batch of observer entries.
    ///
    /// A Hidden element reported intersecting gets the revealed visual and
    /// flips state; entries for Revealed or unregistered elements are
    /// absorbed. Batch order does not matter. Returns the ids revealed by
    /// this batch.
    pub fn on_report(&mut self, page: &mut Page, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut revealed = Vec::new();

        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            match self.states.get_mut(&entry.element) {
                Some(state) if *state == VisibilityState::Hidden => {
                    *state = VisibilityState::Revealed;
                    let element = page.element_mut(entry.element);
                    element.style.opacity = Some(1.0);
                    element.style.translate_y = Some(0.0);
                    revealed.push(entry.element);
                }
                _ => {}
            }
        }

        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Element, LayoutBox};

    fn card_page() -> (Page, ElementId, ElementId, ElementId) {
        let mut page = Page::new();

        let mut producto = Element::new("div");
        producto.classes.push("producto-card".to_string());
        producto.layout = Some(LayoutBox {
            top: 900.0,
            height: 300.0,
        });
        let producto_id = page.push(producto);

        let mut dashboard = Element::new("div");
        dashboard.classes.push("dashboard-card".to_string());
        dashboard.layout = Some(LayoutBox {
            top: 1300.0,
            height: 200.0,
        });
        let dashboard_id = page.push(dashboard);

        let mut plain = Element::new("p");
        plain.layout = Some(LayoutBox {
            top: 100.0,
            height: 40.0,
        });
        let plain_id = page.push(plain);

        (page, producto_id, dashboard_id, plain_id)
    }

    fn intersecting(id: ElementId) -> IntersectionEntry {
        IntersectionEntry {
            element: id,
            ratio: 1.0,
            is_intersecting: true,
        }
    }

    #[test]
    fn test_register_applies_hidden_visual_per_group() {
        let (mut page, producto_id, dashboard_id, plain_id) = card_page();
        let animator = RevealAnimator::register(&mut page, &RevealConfig::default()).unwrap();

        assert_eq!(animator.len(), 2);
        assert_eq!(animator.state(producto_id), Some(VisibilityState::Hidden));
        assert_eq!(animator.state(plain_id), None);

        let producto = page.element(producto_id);
        assert_eq!(producto.style.opacity, Some(0.0));
        assert_eq!(producto.style.translate_y, Some(30.0));
        assert_eq!(
            producto.style.transition.as_deref(),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );

        let dashboard = page.element(dashboard_id);
        assert_eq!(dashboard.style.translate_y, Some(20.0));
        assert_eq!(
            dashboard.style.transition.as_deref(),
            Some("opacity 0.5s ease, transform 0.5s ease")
        );
    }

    #[test]
    fn test_reveal_fires_once() {
        let (mut page, producto_id, _, _) = card_page();
        let mut animator = RevealAnimator::register(&mut page, &RevealConfig::default()).unwrap();

        let revealed = animator.on_report(&mut page, &[intersecting(producto_id)]);
        assert_eq!(revealed, vec![producto_id]);
        assert_eq!(animator.state(producto_id), Some(VisibilityState::Revealed));
        assert_eq!(page.element(producto_id).style.opacity, Some(1.0));
        assert_eq!(page.element(producto_id).style.translate_y, Some(0.0));

        // A repeat report is absorbed by the guard
        let again = animator.on_report(&mut page, &[intersecting(producto_id)]);
        assert!(again.is_empty());
        assert_eq!(page.element(producto_id).style.opacity, Some(1.0));
    }

    #[test]
    fn test_non_intersecting_entries_ignored() {
        let (mut page, producto_id, _, _) = card_page();
        let mut animator = RevealAnimator::register(&mut page, &RevealConfig::default()).unwrap();

        let entry = IntersectionEntry {
            element: producto_id,
            ratio: 0.05,
            is_intersecting: false,
        };
        assert!(animator.on_report(&mut page, &[entry]).is_empty());
        assert_eq!(animator.state(producto_id), Some(VisibilityState::Hidden));
        assert_eq!(page.element(producto_id).style.opacity, Some(0.0));
    }

    #[test]
    fn test_revealed_never_reverts() {
        let (mut page, producto_id, _, _) = card_page();
        let mut animator = RevealAnimator::register(&mut page, &RevealConfig::default()).unwrap();

        animator.on_report(&mut page, &[intersecting(producto_id)]);

        // A later non-intersecting report must not hide it again
        let away = IntersectionEntry {
            element: producto_id,
            ratio: 0.0,
            is_intersecting: false,
        };
        animator.on_report(&mut page, &[away]);
        assert_eq!(animator.state(producto_id), Some(VisibilityState::Revealed));
        assert_eq!(page.element(producto_id).style.opacity, Some(1.0));
        assert_eq!(animator.revealed_count(), 1);
    }

    #[test]
    fn test_unregistered_entries_absorbed() {
        let (mut page, _, _, plain_id) = card_page();
        let mut animator = RevealAnimator::register(&mut page, &RevealConfig::default()).unwrap();

        assert!(animator.on_report(&mut page, &[intersecting(plain_id)]).is_empty());
        assert_eq!(page.element(plain_id).style.opacity, None);
    }
}
