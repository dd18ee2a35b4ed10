pub mod myna_id;
pub mod registry;

pub use myna_id::myna_id;
pub use registry::{FilterRegistry, MynaId, TemplateFilter};
