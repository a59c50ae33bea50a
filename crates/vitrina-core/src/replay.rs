//! Scenario playback.
//!
//! Plays a [`Scenario`] against a [`PageEngine`], either headless (virtual
//! time only) or paced against the wall clock for watching live. Engine
//! events are forwarded over an optional channel as they happen.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::engine::{EngineEvent, PageEngine};
use crate::scenario::{Scenario, Step};
use crate::{Error, Result};

/// Apply one scripted step to the engine.
///
/// Steps referencing a missing element id are errors; steps that merely
/// fall through (an unconsumed click, a submit with no form) are logged
/// and skipped.
pub fn apply_step(engine: &mut PageEngine, step: &Step) -> Result<()> {
    match step {
        Step::Advance { ms } => engine.advance(*ms),
        Step::Scroll { to } => engine.user_scroll(*to),
        Step::ScrollBy { delta } => engine.scroll_by(*delta),
        Step::Click { target } => {
            let id = engine
                .page()
                .by_id(target)
                .ok_or_else(|| Error::ElementNotFound(target.clone()))?;
            if !engine.click(id) {
                warn!("Click on #{} fell through", target);
            }
        }
        Step::SetField { field, value } => engine.set_field_value(field, value)?,
        Step::Submit => {
            if engine.submit().is_none() {
                warn!("Submit step with no login form on the page");
            }
        }
        Step::DismissModal => {
            engine.dismiss_modal();
        }
    }
    Ok(())
}

/// Plays a scenario against an engine it owns, returning the engine at
/// the end so callers can inspect the final page state.
pub struct ReplayService {
    engine: PageEngine,
    scenario: Scenario,
    event_tx: Option<mpsc::UnboundedSender<EngineEvent>>,
}

impl ReplayService {
    pub fn new(engine: PageEngine, scenario: Scenario) -> Self {
        Self {
            engine,
            scenario,
            event_tx: None,
        }
    }

    /// Set the event sender for live updates
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Play every step without waiting; time passes only on the virtual
    /// clock.
    pub fn run_headless(mut self) -> Result<PageEngine> {
        let steps = std::mem::take(&mut self.scenario.steps);
        self.log_start(steps.len());

        for (i, step) in steps.iter().enumerate() {
            debug!("Step {}: {:?}", i + 1, step);
            apply_step(&mut self.engine, step)?;
            self.flush_events();
        }

        info!("Replay finished at {}ms", self.engine.clock_ms());
        Ok(self.engine)
    }

    /// Play every step paced against the wall clock, until done or until
    /// the shutdown signal flips.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Result<PageEngine> {
        let steps = std::mem::take(&mut self.scenario.steps);
        self.log_start(steps.len());

        let slice_ms = self.engine.config().ui.tick_rate_ms.max(1);

        for (i, step) in steps.iter().enumerate() {
            debug!("Step {}: {:?}", i + 1, step);
            match step {
                Step::Advance { ms } => {
                    let mut remaining = *ms;
                    while remaining > 0 {
                        let slice = remaining.min(slice_ms);
                        tokio::select! {
                            result = shutdown.changed() => {
                                if result.is_ok() && *shutdown.borrow() {
                                    info!("Replay received shutdown signal");
                                    return Ok(self.engine);
                                }
                            }
                            _ = tokio::time::sleep(Duration::from_millis(slice)) => {
                                self.engine.advance(slice);
                                remaining -= slice;
                                self.flush_events();
                            }
                        }
                    }
                }
                other => {
                    apply_step(&mut self.engine, other)?;
                    self.flush_events();
                }
            }
        }

        info!("Replay finished at {}ms", self.engine.clock_ms());
        Ok(self.engine)
    }

    fn log_start(&self, steps: usize) {
        match &self.scenario.name {
            Some(name) => info!("Replaying '{}': {} steps", name, steps),
            None => info!("Replaying {} steps", steps),
        }
    }

    fn flush_events(&mut self) {
        for event in self.engine.drain_events() {
            self.send_event(event);
        }
    }

    /// Send an event to the listener (if an event channel is configured)
    fn send_event(&self, event: EngineEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send replay event: receiver dropped");
            }
        }
    }
}
