use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tracing::warn;

use vitrina_core::page::markup::parse_page_file;
use vitrina_core::replay::ReplayService;
use vitrina_core::scenario::parse_scenario_file;
use vitrina_core::{AppConfig, EngineEvent, Page, PageEngine};
use vitrina_tui::app::element_label;

pub async fn run(
    config: AppConfig,
    scenario_path: &Path,
    page: Option<PathBuf>,
    real_time: bool,
) -> Result<()> {
    let page_path = super::page_path(page);

    let page = parse_page_file(&page_path)?;
    let engine = PageEngine::new(page, config)?;
    let scenario = parse_scenario_file(scenario_path)?;

    let name = scenario.name.clone();
    let step_count = scenario.steps.len();
    if step_count == 0 {
        warn!("Scenario {} has no steps", scenario_path.display());
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let service = ReplayService::new(engine, scenario).with_event_sender(event_tx);

    let engine = if real_time {
        // Ctrl-C flips the shutdown flag; the replay hands the engine back as-is
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = shutdown_tx.send(true);
            }
        });
        service.run(shutdown_rx).await?
    } else {
        service.run_headless()?
    };

    match name {
        Some(name) => println!(
            "Replayed '{}' ({} steps) against {}",
            name,
            step_count,
            page_path.display()
        ),
        None => println!(
            "Replayed {} steps against {}",
            step_count,
            page_path.display()
        ),
    }
    println!();

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }
    if events.is_empty() {
        println!("No engine events fired");
    } else {
        println!("Engine events ({}):", events.len());
        for event in &events {
            println!("  {}", describe_event(event, engine.page()));
        }
    }
    println!();

    println!(
        "Final state: clock {}ms, scroll {:.0}px, revealed {}/{}",
        engine.clock_ms(),
        engine.scroll_position(),
        engine.revealed_count(),
        engine.reveal_total()
    );
    if let Some(message) = engine.modal_message() {
        println!("Notice still open: {}", message);
    }

    Ok(())
}

fn describe_event(event: &EngineEvent, page: &Page) -> String {
    match event {
        EngineEvent::Revealed { element } => {
            format!("revealed {}", element_label(page, *element))
        }
        EngineEvent::NavbarChanged { translucent: true } => {
            "navbar switched to translucent".to_string()
        }
        EngineEvent::NavbarChanged { translucent: false } => "navbar back to solid".to_string(),
        EngineEvent::ScrollStarted { target } => {
            format!("scroll started towards {:.0}px", target)
        }
        EngineEvent::ScrollFinished { position } => {
            format!("scroll finished at {:.0}px", position)
        }
        EngineEvent::AlertDismissed { element } => {
            format!("alert {} dismissed", element_label(page, *element))
        }
        EngineEvent::SubmitBlocked { message } => format!("submit blocked: {}", message),
        EngineEvent::SubmitAllowed => "submit allowed".to_string(),
        EngineEvent::TypewriterFinished => "hero title finished typing".to_string(),
    }
}
