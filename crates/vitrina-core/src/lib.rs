pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod observe;
pub mod page;
pub mod replay;
pub mod scenario;
pub mod scroll;
pub mod timer;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use engine::{EngineEvent, PageEngine};
pub use error::{Error, Result};
pub use page::{ElementId, Page, Viewport};
