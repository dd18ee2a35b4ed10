pub mod build_config;
pub mod cli;
pub mod palette;

pub use build_config::{BuildConfig, ColorValue, ThemeConfig};
pub use cli::{Cli, Command};
