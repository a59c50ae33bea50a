//! Viewport intersection observation.
//!
//! A [`ViewportObserver`] watches a fixed set of elements and reports when
//! their intersection status flips. It never acts on the page itself;
//! consumers receive [`IntersectionEntry`] batches and decide what to do,
//! which also makes them easy to drive with synthetic entries in tests.

use std::collections::HashMap;

use crate::page::{ElementId, LayoutBox, Page, Viewport};

/// One observation delivered by a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Visible fraction of the element's height, 0.0 to 1.0
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Watches elements and reports intersection status changes.
///
/// The bottom margin adjusts the effective viewport edge (negative
/// shrinks it upward). The threshold is the visible fraction of the
/// element's own height required to count as intersecting.
///
/// `sweep` reports only status changes, except that every element gets
/// one entry on its first sweep after [`observe`](Self::observe).
#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f64,
    root_margin_bottom: f64,
    watched: Vec<ElementId>,
    last_status: HashMap<ElementId, bool>,
}

impl ViewportObserver {
    pub fn new(threshold: f64, root_margin_bottom: f64) -> Self {
        Self {
            threshold,
            root_margin_bottom,
            watched: Vec::new(),
            last_status: HashMap::new(),
        }
    }

    /// Register an element. Watching never stops for the observer's life.
    pub fn observe(&mut self, element: ElementId) {
        if !self.watched.contains(&element) {
            self.watched.push(element);
        }
    }

    pub fn watched(&self) -> &[ElementId] {
        &self.watched
    }

    /// Measure every watched element and report the ones whose status
    /// changed since the previous sweep.
    pub fn sweep(&mut self, page: &Page, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();

        for &id in &self.watched {
            let ratio = if page.is_detached(id) {
                0.0
            } else {
                page.element(id)
                    .layout
                    .map(|layout| intersection_ratio(layout, viewport, self.root_margin_bottom))
                    .unwrap_or(0.0)
            };
            let is_intersecting = ratio >= self.threshold;

            let changed = match self.last_status.get(&id) {
                None => true,
                Some(&prev) => prev != is_intersecting,
            };
            if changed {
                self.last_status.insert(id, is_intersecting);
                entries.push(IntersectionEntry {
                    element: id,
                    ratio,
                    is_intersecting,
                });
            }
        }

        entries
    }
}

/// Visible fraction of a box within the margin-adjusted viewport.
///
/// Zero-height boxes count as fully visible when their top edge lies
/// inside the window.
pub fn intersection_ratio(layout: LayoutBox, viewport: &Viewport, root_margin_bottom: f64) -> f64 {
    let view_top = viewport.scroll_y;
    let view_bottom = viewport.scroll_y + viewport.height + root_margin_bottom;
    if view_bottom <= view_top {
        return 0.0;
    }

    if layout.height <= 0.0 {
        return if layout.top >= view_top && layout.top <= view_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = layout.bottom().min(view_bottom) - layout.top.max(view_top);
    (overlap / layout.height).clamp(0.0, 1.0)
}
