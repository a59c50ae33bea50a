use std::path::PathBuf;

use anyhow::Result;

use vitrina_core::effects::alerts::ALERT_SELECTOR;
use vitrina_core::effects::login::{FORM_SELECTOR, PASSWORD_FIELD, USERNAME_FIELD};
use vitrina_core::effects::navbar::NAVBAR_SELECTOR;
use vitrina_core::effects::typewriter::HERO_SELECTOR;
use vitrina_core::page::markup::parse_page_file;
use vitrina_core::page::Selector;
use vitrina_core::{AppConfig, PageEngine};

/// Print what each enhancement wired up to, without running anything.
pub fn run(config: AppConfig, page: Option<PathBuf>) -> Result<()> {
    let path = super::page_path(page);
    let page = parse_page_file(&path)?;
    let engine = PageEngine::new(page, config)?;

    let page = engine.page();
    let config = engine.config();

    println!(
        "Page: {} ({} elements, {:.0}px tall, viewport {:.0}px)\n",
        path.display(),
        page.len(),
        page.content_height(),
        config.page.viewport_height
    );

    match page.select_first(&Selector::parse(NAVBAR_SELECTOR)?) {
        Some(_) => println!(
            "Navbar: {} switches style past {:.0}px",
            NAVBAR_SELECTOR, config.navbar.threshold_px
        ),
        None => println!("Navbar: none"),
    }

    let anchors = engine.anchors();
    if anchors.is_empty() {
        println!("Anchors: none");
    } else {
        println!("Anchors ({}):", anchors.len());
        for &anchor in anchors {
            let element = page.element(anchor);
            let href = element.attr("href").unwrap_or("");
            let note = match href.strip_prefix('#') {
                Some("") => " [no fragment]",
                Some(target) if page.by_id(target).is_none() => " [no such target]",
                _ => "",
            };
            println!("  {} -> {}{}", element.text, href, note);
        }
    }

    if config.reveal.groups.is_empty() {
        println!("Reveal groups: none");
    } else {
        println!("Reveal groups ({}):", config.reveal.groups.len());
        for group in &config.reveal.groups {
            let matched = page.select(&Selector::parse(&group.selector)?).len();
            println!(
                "  {} matches {} elements (offset {:.0}px, {}ms fade)",
                group.selector, matched, group.offset_px, group.duration_ms
            );
        }
        println!("  watching {} elements in total", engine.reveal_total());
    }

    let alerts = page.select(&Selector::parse(ALERT_SELECTOR)?);
    if alerts.is_empty() {
        println!("Alerts: none");
    } else {
        println!(
            "Alerts: {} dismissing after {}ms",
            alerts.len(),
            config.alerts.dismiss_after_ms
        );
    }

    match page.select_first(&Selector::parse(FORM_SELECTOR)?) {
        Some(_) => {
            let username = page.by_id(USERNAME_FIELD).is_some();
            let password = page.by_id(PASSWORD_FIELD).is_some();
            println!(
                "Login form: {} (username field: {}, password field: {})",
                FORM_SELECTOR,
                if username { "present" } else { "MISSING" },
                if password { "present" } else { "MISSING" },
            );
        }
        None => println!("Login form: none"),
    }

    match page.select_first(&Selector::parse(HERO_SELECTOR)?) {
        Some(hero) => println!(
            "Typewriter: {} types \"{}\" at {}ms/char after {}ms",
            HERO_SELECTOR,
            page.element(hero).text,
            config.typewriter.speed_ms,
            config.typewriter.start_delay_ms
        ),
        None => println!("Typewriter: none"),
    }

    Ok(())
}
