//! The page behavior engine.
//!
//! Wires every enhancement to a parsed page once, then advances a virtual
//! millisecond clock. Timers fire at absolute deadlines and scroll
//! animations sample on their own frame grid, so behavior is a function of
//! the clock and the injected inputs rather than of how callers slice
//! their `advance` calls.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::effects::{
    alerts, AnchorNavigator, LoginGuard, NavbarToggle, RevealAnimator, SubmitOutcome, Typewriter,
};
use crate::observe::ViewportObserver;
use crate::page::{ElementId, Page, Viewport};
use crate::scroll::ScrollAnimator;
use crate::timer::{TimerId, TimerQueue};
use crate::{Error, Result};

/// Deferred work queued against the virtual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledTask {
    /// Fade out and detach an alert banner
    DismissAlert(ElementId),
    /// Clear the hero title and begin typing
    StartTypewriter,
    /// Type the next hero title character
    TypewriterTick,
}

/// Events emitted by the engine to notify embedders of changes
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// An element completed its one-time reveal
    Revealed { element: ElementId },
    /// The navbar switched between its top and scrolled styles
    NavbarChanged { translucent: bool },
    /// An animated scroll started towards `target`
    ScrollStarted { target: f64 },
    /// An animated scroll reached its target
    ScrollFinished { position: f64 },
    /// An alert banner dismissed itself
    AlertDismissed { element: ElementId },
    /// A submit was stopped by the required-field check
    SubmitBlocked { message: String },
    /// A submit passed the required-field check
    SubmitAllowed,
    /// The hero title finished typing
    TypewriterFinished,
}

/// Drives all page enhancements against a virtual clock.
///
/// Construction wires each enhancement to the elements present at that
/// moment, mirroring load-time registration; elements added later are not
/// picked up. Inputs (`advance`, scrolling, clicks, form edits) mutate the
/// page and queue [`EngineEvent`]s for [`drain_events`](Self::drain_events).
pub struct PageEngine {
    page: Page,
    viewport: Viewport,
    config: AppConfig,
    clock_ms: u64,
    timers: TimerQueue<ScheduledTask>,
    observer: ViewportObserver,
    reveal: RevealAnimator,
    navbar: NavbarToggle,
    anchors: AnchorNavigator,
    login: Option<LoginGuard>,
    typewriter: Option<Typewriter>,
    scroll: ScrollAnimator,
    alert_timers: Vec<(ElementId, TimerId)>,
    modal: Option<String>,
    events: VecDeque<EngineEvent>,
}

impl PageEngine {
    /// Wire every enhancement to the page at clock zero.
    pub fn new(mut page: Page, config: AppConfig) -> Result<Self> {
        let viewport = Viewport {
            height: config.page.viewport_height,
            scroll_y: 0.0,
        };

        let mut navbar = NavbarToggle::bind(&page)?;
        // Define the initial style; not a flip, so no event
        navbar.update(&mut page, 0.0, &config.navbar);

        let reveal = RevealAnimator::register(&mut page, &config.reveal)?;
        let mut observer =
            ViewportObserver::new(config.reveal.threshold, config.reveal.root_margin_bottom_px);
        for &id in reveal.elements() {
            observer.observe(id);
        }

        let mut timers = TimerQueue::new();
        let mut alert_timers = Vec::new();
        for id in alerts::find_alerts(&page)? {
            let timer = timers.schedule(
                config.alerts.dismiss_after_ms,
                ScheduledTask::DismissAlert(id),
            );
            alert_timers.push((id, timer));
        }

        let login = LoginGuard::bind(&page)?;

        let typewriter =
            Typewriter::bind(&page)?.map(|tw| tw.with_speed(config.typewriter.speed_ms));
        if typewriter.is_some() {
            timers.schedule(
                config.typewriter.start_delay_ms,
                ScheduledTask::StartTypewriter,
            );
        }

        let anchors = AnchorNavigator::bind(&page)?;
        let scroll = ScrollAnimator::new(config.scroll.clone());

        let mut engine = Self {
            page,
            viewport,
            config,
            clock_ms: 0,
            timers,
            observer,
            reveal,
            navbar,
            anchors,
            login,
            typewriter,
            scroll,
            alert_timers,
            modal: None,
            events: VecDeque::new(),
        };

        // Elements already in view reveal on the first sweep
        engine.sweep_and_reveal();

        info!(
            "Page wired: {} elements, {} watched, {} alerts, login={}, typewriter={}",
            engine.page.len(),
            engine.observer.watched().len(),
            engine.alert_timers.len(),
            engine.login.is_some(),
            engine.typewriter.is_some(),
        );
        Ok(engine)
    }

    /// Advance the virtual clock by `ms`.
    ///
    /// Due timers fire in deadline order and any running scroll animation
    /// is sampled on its frame grid, interleaved by clock reading.
    /// Splitting an advance into smaller ones reaches the same state.
    pub fn advance(&mut self, ms: u64) {
        let target = self.clock_ms.saturating_add(ms);
        loop {
            let frame = self.scroll.next_frame_ms(self.clock_ms);
            let mut next = target;
            if let Some(deadline) = self.timers.next_deadline() {
                next = next.min(deadline.max(self.clock_ms));
            }
            if let Some(frame) = frame {
                next = next.min(frame);
            }
            self.clock_ms = next;

            while let Some((_, task)) = self.timers.pop_due(self.clock_ms) {
                self.run_task(task);
            }
            if frame == Some(self.clock_ms) {
                self.sample_animation();
            }

            if self.clock_ms >= target {
                break;
            }
        }
    }

    /// Jump the viewport to an absolute offset, as direct user scrolling.
    /// Cancels any animated glide in flight.
    pub fn user_scroll(&mut self, to: f64) {
        let max_scroll = self.page.max_scroll(self.viewport.height);
        let position = to.clamp(0.0, max_scroll);
        self.scroll.set_scroll(position);
        self.apply_scroll(position);
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, delta: f64) {
        self.user_scroll(self.viewport.scroll_y + delta);
    }

    /// Click an element.
    ///
    /// An in-page anchor whose fragment resolves glides the viewport to
    /// the destination's top and consumes the click. Anything else,
    /// including anchors pointing at missing ids, falls through.
    pub fn click(&mut self, target: ElementId) -> bool {
        let Some(dest) = self.anchors.resolve(&self.page, target) else {
            return false;
        };
        let top = self
            .page
            .element(dest)
            .layout
            .map(|layout| layout.top)
            .unwrap_or(0.0);
        let max_scroll = self.page.max_scroll(self.viewport.height);
        self.scroll.scroll_to(top, max_scroll, self.clock_ms);

        if self.scroll.is_animating() {
            let target = self.scroll.target_scroll();
            debug!("Scroll started towards {:.1}px", target);
            self.events.push_back(EngineEvent::ScrollStarted { target });
        } else {
            // Instant jump (smooth disabled) or already there
            self.apply_scroll(self.scroll.current_scroll());
        }
        true
    }

    /// Set a form field's value by its markup id.
    pub fn set_field_value(&mut self, dom_id: &str, value: &str) -> Result<()> {
        let id = self
            .page
            .by_id(dom_id)
            .ok_or_else(|| Error::ElementNotFound(dom_id.to_string()))?;
        self.page.element_mut(id).value = value.to_string();
        Ok(())
    }

    /// Submit the login form.
    ///
    /// Returns the outcome, or None when the page has no login form. A
    /// blocked submit opens the notice modal with the configured message.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        let guard = self.login.as_ref()?;
        let outcome = guard.on_submit(&self.page, &self.config.login);
        match &outcome {
            SubmitOutcome::Blocked { message } => {
                debug!("Submit blocked: {}", message);
                self.modal = Some(message.clone());
                self.events.push_back(EngineEvent::SubmitBlocked {
                    message: message.clone(),
                });
            }
            SubmitOutcome::Allowed => {
                self.events.push_back(EngineEvent::SubmitAllowed);
            }
        }
        Some(outcome)
    }

    /// Message of the open notice modal, if one is showing.
    pub fn modal_message(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    /// Close the notice modal. Returns false if none was open.
    pub fn dismiss_modal(&mut self) -> bool {
        self.modal.take().is_some()
    }

    /// Take every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    /// Cancel a pending timer before it fires.
    pub fn cancel_timer(&mut self, timer: TimerId) -> bool {
        let cancelled = self.timers.cancel(timer);
        if cancelled {
            self.alert_timers.retain(|(_, t)| *t != timer);
        }
        cancelled
    }

    /// Pending alert dismissals as (alert, timer) pairs.
    pub fn alert_timers(&self) -> &[(ElementId, TimerId)] {
        &self.alert_timers
    }

    /// In-page anchors in document order.
    pub fn anchors(&self) -> &[ElementId] {
        self.anchors.anchors()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn scroll_position(&self) -> f64 {
        self.viewport.scroll_y
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn revealed_count(&self) -> usize {
        self.reveal.revealed_count()
    }

    pub fn reveal_total(&self) -> usize {
        self.reveal.len()
    }

    fn run_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::DismissAlert(element) => {
                alerts::dismiss(&mut self.page, element);
                self.alert_timers.retain(|(alert, _)| *alert != element);
                self.events.push_back(EngineEvent::AlertDismissed { element });
            }
            ScheduledTask::StartTypewriter => {
                if let Some(tw) = self.typewriter.as_mut() {
                    tw.start(&mut self.page);
                    if tw.is_done() {
                        self.events.push_back(EngineEvent::TypewriterFinished);
                    } else {
                        self.timers
                            .schedule(self.clock_ms + tw.speed_ms(), ScheduledTask::TypewriterTick);
                    }
                }
            }
            ScheduledTask::TypewriterTick => {
                if let Some(tw) = self.typewriter.as_mut() {
                    if tw.tick(&mut self.page) {
                        self.timers
                            .schedule(self.clock_ms + tw.speed_ms(), ScheduledTask::TypewriterTick);
                    } else {
                        debug!("Typewriter finished");
                        self.events.push_back(EngineEvent::TypewriterFinished);
                    }
                }
            }
        }
    }

    fn sample_animation(&mut self) {
        let max_scroll = self.page.max_scroll(self.viewport.height);
        let position = self.scroll.update(self.clock_ms, max_scroll);
        let finished = !self.scroll.is_animating();
        self.apply_scroll(position);
        if finished {
            debug!("Scroll finished at {:.1}px", position);
            self.events.push_back(EngineEvent::ScrollFinished { position });
        }
    }

    /// Move the viewport and run everything that watches scroll position.
    fn apply_scroll(&mut self, position: f64) {
        if (self.viewport.scroll_y - position).abs() < f64::EPSILON {
            return;
        }
        self.viewport.scroll_y = position;

        if let Some(translucent) =
            self.navbar
                .update(&mut self.page, position, &self.config.navbar)
        {
            self.events
                .push_back(EngineEvent::NavbarChanged { translucent });
        }
        self.sweep_and_reveal();
    }

    fn sweep_and_reveal(&mut self) {
        let entries = self.observer.sweep(&self.page, &self.viewport);
        for element in self.reveal.on_report(&mut self.page, &entries) {
            self.events.push_back(EngineEvent::Revealed { element });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::markup::parse_page;

    const STOREFRONT: &str = r##"<body>
  <nav class="navbar-custom" top="0" height="60">
    <a href="#productos" top="10" height="20">Productos</a>
    <a href="#acceso" top="10" height="20">Acceso</a>
    <a href="#nada" top="10" height="20">Roto</a>
  </nav>
  <h1 class="hero-title" top="200" height="80">Hola</h1>
  <div class="alert" id="alerta-venta" top="300" height="40">Venta registrada</div>
  <section id="productos" top="1200" height="900">
    <div class="producto-card" id="sofa" top="1250" height="300">Sofa tres plazas</div>
    <div class="producto-card" id="mesa" top="1600" height="300">Mesa de roble</div>
  </section>
  <section id="acceso" top="2200" height="400">
    <form class="login-form" top="2250" height="260">
      <input id="username" value=""/>
      <input id="password" value=""/>
    </form>
  </section>
  <div class="dashboard-card" id="ventas" top="2700" height="200">Ventas del mes</div>
</body>"##;

    fn engine() -> PageEngine {
        let page = parse_page(STOREFRONT).unwrap();
        PageEngine::new(page, AppConfig::default()).unwrap()
    }

    fn id(engine: &PageEngine, dom_id: &str) -> ElementId {
        engine.page().by_id(dom_id).unwrap()
    }

    #[test]
    fn test_wiring_initial_state() {
        let mut engine = engine();

        // Nothing animatable is in view at the top, so no events yet
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.clock_ms(), 0);
        assert_eq!(engine.scroll_position(), 0.0);
        assert_eq!(engine.alert_timers().len(), 1);
        assert_eq!(engine.anchors().len(), 3);
        assert_eq!(engine.reveal_total(), 3);
        assert_eq!(engine.revealed_count(), 0);

        // Navbar starts in its top-of-page style
        let nav = engine
            .page()
            .select_first(&"nav".parse().unwrap())
            .unwrap();
        assert_eq!(
            engine.page().element(nav).style.background.as_deref(),
            Some("#ffffff")
        );

        // Cards start hidden and offset
        let sofa = id(&engine, "sofa");
        let style = &engine.page().element(sofa).style;
        assert_eq!(style.effective_opacity(), 0.0);
        assert_eq!(style.effective_translate_y(), 30.0);
    }

    #[test]
    fn test_elements_in_view_at_wiring_reveal_immediately() {
        let page = parse_page(
            r#"<div class="producto-card" id="visible" top="100" height="200">En vista</div>"#,
        )
        .unwrap();
        let mut engine = PageEngine::new(page, AppConfig::default()).unwrap();

        let element = id(&engine, "visible");
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::Revealed { element }]
        );
        assert_eq!(engine.page().element(element).style.effective_opacity(), 1.0);
    }

    #[test]
    fn test_user_scroll_reveals_and_restyles_navbar() {
        let mut engine = engine();
        engine.drain_events();

        engine.user_scroll(1000.0);
        let sofa = id(&engine, "sofa");
        let mesa = id(&engine, "mesa");
        assert_eq!(
            engine.drain_events(),
            vec![
                EngineEvent::NavbarChanged { translucent: true },
                EngineEvent::Revealed { element: sofa },
                EngineEvent::Revealed { element: mesa },
            ]
        );

        let style = &engine.page().element(sofa).style;
        assert_eq!(style.effective_opacity(), 1.0);
        assert_eq!(style.effective_translate_y(), 0.0);
    }

    #[test]
    fn test_reveal_survives_scrolling_away() {
        let mut engine = engine();
        engine.user_scroll(1000.0);
        engine.drain_events();

        engine.user_scroll(0.0);
        engine.user_scroll(1000.0);

        // Cards leave and re-enter the viewport without re-revealing
        let events = engine.drain_events();
        assert!(events
            .iter()
            .all(|e| !matches!(e, EngineEvent::Revealed { .. })));
        assert_eq!(engine.revealed_count(), 2);
    }

    #[test]
    fn test_navbar_threshold_is_strict() {
        let mut engine = engine();
        engine.drain_events();

        engine.user_scroll(100.0);
        assert!(engine.drain_events().is_empty());

        engine.user_scroll(101.0);
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::NavbarChanged { translucent: true }]
        );

        engine.user_scroll(100.0);
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::NavbarChanged { translucent: false }]
        );
    }

    #[test]
    fn test_alert_dismisses_at_deadline() {
        let mut engine = engine();
        let alert = id(&engine, "alerta-venta");

        engine.advance(4999);
        assert!(engine.page().by_id("alerta-venta").is_some());
        assert!(engine
            .drain_events()
            .iter()
            .all(|e| !matches!(e, EngineEvent::AlertDismissed { .. })));

        engine.advance(1);
        assert_eq!(engine.clock_ms(), 5000);
        assert!(engine
            .drain_events()
            .contains(&EngineEvent::AlertDismissed { element: alert }));
        assert!(engine.page().by_id("alerta-venta").is_none());
        assert!(engine.page().is_detached(alert));
        assert!(engine.alert_timers().is_empty());

        // Long after, nothing fires twice
        engine.advance(10_000);
        assert!(engine
            .drain_events()
            .iter()
            .all(|e| !matches!(e, EngineEvent::AlertDismissed { .. })));
    }

    #[test]
    fn test_cancelled_alert_timer_never_fires() {
        let mut engine = engine();
        let (alert, timer) = engine.alert_timers()[0];

        assert!(engine.cancel_timer(timer));
        assert!(!engine.cancel_timer(timer));
        assert!(engine.alert_timers().is_empty());

        engine.advance(10_000);
        assert!(engine
            .drain_events()
            .iter()
            .all(|e| !matches!(e, EngineEvent::AlertDismissed { .. })));
        assert!(!engine.page().is_detached(alert));
    }

    #[test]
    fn test_typewriter_timeline() {
        let mut engine = engine();
        let hero = engine
            .page()
            .select_first(&".hero-title".parse().unwrap())
            .unwrap();

        // Original text holds through the start delay
        engine.advance(999);
        assert_eq!(engine.page().element(hero).text, "Hola");

        // Cleared at the delay, first character one interval later
        engine.advance(1);
        assert_eq!(engine.page().element(hero).text, "");
        engine.advance(149);
        assert_eq!(engine.page().element(hero).text, "");
        engine.advance(1);
        assert_eq!(engine.page().element(hero).text, "H");

        engine.advance(450);
        assert_eq!(engine.clock_ms(), 1600);
        assert_eq!(engine.page().element(hero).text, "Hola");

        let finishes = engine
            .drain_events()
            .into_iter()
            .filter(|e| *e == EngineEvent::TypewriterFinished)
            .count();
        assert_eq!(finishes, 1);
    }

    #[test]
    fn test_zero_interval_types_everything_at_once() {
        let mut config = AppConfig::default();
        config.typewriter.speed_ms = 0;
        let page = parse_page(STOREFRONT).unwrap();
        let mut engine = PageEngine::new(page, config).unwrap();
        let hero = engine
            .page()
            .select_first(&".hero-title".parse().unwrap())
            .unwrap();

        engine.advance(1000);
        assert_eq!(engine.page().element(hero).text, "Hola");
        assert!(engine
            .drain_events()
            .contains(&EngineEvent::TypewriterFinished));
    }

    #[test]
    fn test_empty_title_finishes_at_start_delay() {
        let page = parse_page(r#"<h1 class="hero-title" top="0" height="80"></h1>"#).unwrap();
        let mut engine = PageEngine::new(page, AppConfig::default()).unwrap();

        engine.advance(999);
        assert!(engine.drain_events().is_empty());
        engine.advance(1);
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::TypewriterFinished]
        );
    }

    #[test]
    fn test_anchor_click_glides_to_destination() {
        let mut engine = engine();
        engine.drain_events();

        let productos_link = engine.anchors()[0];
        assert!(engine.click(productos_link));
        assert!(engine.is_scrolling());
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::ScrollStarted { target: 1200.0 }]
        );

        engine.advance(400);
        assert_eq!(engine.scroll_position(), 1200.0);
        assert!(!engine.is_scrolling());

        let events = engine.drain_events();
        assert!(events.contains(&EngineEvent::ScrollFinished { position: 1200.0 }));
        assert!(events.contains(&EngineEvent::NavbarChanged { translucent: true }));
        let sofa = id(&engine, "sofa");
        assert!(events.contains(&EngineEvent::Revealed { element: sofa }));
    }

    #[test]
    fn test_click_misses_fall_through() {
        let mut engine = engine();
        engine.drain_events();

        // Anchor to a missing id
        let broken_link = engine.anchors()[2];
        assert!(!engine.click(broken_link));

        // Not an anchor at all
        let sofa = id(&engine, "sofa");
        assert!(!engine.click(sofa));

        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.scroll_position(), 0.0);
    }

    #[test]
    fn test_user_scroll_cancels_glide() {
        let mut engine = engine();
        engine.drain_events();

        let productos_link = engine.anchors()[0];
        engine.click(productos_link);
        engine.advance(100);
        assert!(engine.is_scrolling());

        engine.user_scroll(50.0);
        assert!(!engine.is_scrolling());
        assert_eq!(engine.scroll_position(), 50.0);

        engine.advance(1000);
        assert_eq!(engine.scroll_position(), 50.0);
        assert!(engine
            .drain_events()
            .iter()
            .all(|e| !matches!(e, EngineEvent::ScrollFinished { .. })));
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let mut config = AppConfig::default();
        config.scroll.smooth_enabled = false;
        let page = parse_page(STOREFRONT).unwrap();
        let mut engine = PageEngine::new(page, config).unwrap();
        engine.drain_events();

        let productos_link = engine.anchors()[0];
        assert!(engine.click(productos_link));
        assert!(!engine.is_scrolling());
        assert_eq!(engine.scroll_position(), 1200.0);

        let events = engine.drain_events();
        assert!(events
            .iter()
            .all(|e| !matches!(e, EngineEvent::ScrollStarted { .. })));
        assert!(events.contains(&EngineEvent::NavbarChanged { translucent: true }));
    }

    #[test]
    fn test_scroll_by_clamps_at_edges() {
        let mut engine = engine();

        engine.scroll_by(-100.0);
        assert_eq!(engine.scroll_position(), 0.0);

        // Content ends at 2900 with an 800 viewport
        engine.scroll_by(1e9);
        assert_eq!(engine.scroll_position(), 2100.0);
    }

    #[test]
    fn test_submit_guard_flow() {
        let mut engine = engine();
        engine.drain_events();

        let outcome = engine.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Blocked { .. }));
        assert_eq!(
            engine.modal_message(),
            Some("Por favor, completa todos los campos")
        );
        assert_eq!(
            engine.drain_events(),
            vec![EngineEvent::SubmitBlocked {
                message: "Por favor, completa todos los campos".to_string()
            }]
        );

        assert!(engine.dismiss_modal());
        assert!(!engine.dismiss_modal());
        assert_eq!(engine.modal_message(), None);

        engine.set_field_value("username", "admin").unwrap();
        engine.set_field_value("password", "secreto").unwrap();
        assert_eq!(engine.submit(), Some(SubmitOutcome::Allowed));
        assert_eq!(engine.modal_message(), None);
        assert_eq!(engine.drain_events(), vec![EngineEvent::SubmitAllowed]);
    }

    #[test]
    fn test_submit_without_form() {
        let page = parse_page("<body><p>Sin formulario</p></body>").unwrap();
        let mut engine = PageEngine::new(page, AppConfig::default()).unwrap();
        assert_eq!(engine.submit(), None);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_set_field_value_unknown_id() {
        let mut engine = engine();
        assert!(matches!(
            engine.set_field_value("telefono", "555"),
            Err(Error::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_chunked_advance_matches_single_advance() {
        let mut single = engine();
        let mut chunked = engine();
        single.drain_events();
        chunked.drain_events();

        let link = single.anchors()[0];
        single.click(link);
        chunked.click(link);

        single.advance(10_000);
        for _ in 0..100 {
            chunked.advance(100);
        }

        assert_eq!(single.clock_ms(), chunked.clock_ms());
        assert_eq!(single.scroll_position(), chunked.scroll_position());
        assert_eq!(single.revealed_count(), chunked.revealed_count());
        assert_eq!(single.drain_events(), chunked.drain_events());

        let hero_text = |e: &PageEngine| {
            let hero = e
                .page()
                .select_first(&".hero-title".parse().unwrap())
                .unwrap();
            e.page().element(hero).text.clone()
        };
        assert_eq!(hero_text(&single), hero_text(&chunked));
        assert_eq!(hero_text(&single), "Hola");
    }
}
