//! Alert banner auto-dismissal.
//!
//! The engine schedules one dismissal timer per banner at wiring time;
//! this module finds the banners and performs the dismissal itself.

use tracing::debug;

use crate::page::{ElementId, Page, Selector};
use crate::Result;

pub const ALERT_SELECTOR: &str = ".alert";

/// Every alert banner present on the page, in document order.
pub fn find_alerts(page: &Page) -> Result<Vec<ElementId>> {
    let alerts = page.select(&Selector::parse(ALERT_SELECTOR)?);
    debug!("Found {} alert banners", alerts.len());
    Ok(alerts)
}

/// Fade an alert out and remove it from the live page.
pub fn dismiss(page: &mut Page, id: ElementId) {
    page.element_mut(id).style.opacity = Some(0.0);
    page.detach(id);
}
