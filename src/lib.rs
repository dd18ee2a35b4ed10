pub mod config;
pub mod filters;
pub mod utils;

pub use config::{BuildConfig, ColorValue};
pub use filters::{myna_id, FilterRegistry, MynaId, TemplateFilter};
pub use utils::error::{MynaError, Result};
