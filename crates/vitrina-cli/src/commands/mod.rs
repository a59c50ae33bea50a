use std::path::PathBuf;

pub mod inspect;
pub mod replay;
pub mod run;

/// Page loaded when no path is given on the command line
pub const DEFAULT_PAGE: &str = "demos/storefront.html";

pub fn page_path(page: Option<PathBuf>) -> PathBuf {
    page.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE))
}
