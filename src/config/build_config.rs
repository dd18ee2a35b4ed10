use crate::config::palette;
use crate::utils::error::{MynaError, Result};
use crate::utils::validation::{
    validate_color, validate_glob_pattern, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Declarative configuration for the external CSS build tool: which source
/// files to scan for utility-class usage, the theme palette, and plugins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    pub purge: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<String>,
    pub theme: ThemeConfig,
    #[serde(default)]
    pub variants: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub colors: BTreeMap<String, ColorValue>,
}

/// A palette entry is either a single color or a map of shades.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Shades(BTreeMap<String, String>),
}

impl Default for BuildConfig {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(
            "transparent".to_string(),
            ColorValue::Single("transparent".to_string()),
        );
        colors.insert(
            "current".to_string(),
            ColorValue::Single("currentColor".to_string()),
        );
        colors.insert("gray".to_string(), ColorValue::Shades(palette::cool_gray()));
        colors.insert(
            "black".to_string(),
            ColorValue::Single(palette::BLACK.to_string()),
        );
        colors.insert("green".to_string(), ColorValue::Shades(palette::emerald()));
        colors.insert("teal".to_string(), ColorValue::Shades(palette::teal()));

        Self {
            purge: vec![
                "./templates/**/*.html".to_string(),
                "./theme/**/*.html".to_string(),
            ],
            plugins: vec!["@tailwindcss/typography".to_string()],
            theme: ThemeConfig { colors },
            variants: BTreeMap::new(),
        }
    }
}

impl BuildConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MynaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MynaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with environment values.
    /// Unset variables are left as-is so the build tool can report them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MynaError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }

    /// The JSON object the CSS build tool consumes, carrying
    /// `purge`, `plugins`, `theme.colors`, and `variants`.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Expands the purge globs under `base` and returns the matched files,
    /// sorted and deduplicated. Unreadable paths are skipped with a warning.
    pub fn scan_content(&self, base: &Path) -> Result<Vec<PathBuf>> {
        let mut matched = Vec::new();

        for pattern in &self.purge {
            let full_pattern = base.join(pattern);
            let full_pattern = full_pattern.to_string_lossy();
            tracing::debug!("Scanning content pattern: {}", full_pattern);

            let paths = glob::glob(&full_pattern).map_err(|e| MynaError::GlobError {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for entry in paths {
                match entry {
                    Ok(path) if path.is_file() => matched.push(path),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!("Skipping unreadable path while scanning: {}", e);
                    }
                }
            }
        }

        matched.sort();
        matched.dedup();
        Ok(matched)
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        if self.purge.is_empty() {
            return Err(MynaError::MissingConfig {
                field: "purge".to_string(),
            });
        }
        for pattern in &self.purge {
            validate_glob_pattern("purge", pattern)?;
        }

        if self.theme.colors.is_empty() {
            return Err(MynaError::MissingConfig {
                field: "theme.colors".to_string(),
            });
        }
        for (name, value) in &self.theme.colors {
            let field = format!("theme.colors.{}", name);
            validate_non_empty_string("theme.colors", name)?;
            match value {
                ColorValue::Single(color) => validate_color(&field, color)?,
                ColorValue::Shades(shades) => {
                    if shades.is_empty() {
                        return Err(MynaError::InvalidConfigValue {
                            field,
                            value: String::new(),
                            reason: "Shade map cannot be empty".to_string(),
                        });
                    }
                    for (shade, color) in shades {
                        let shade_field = format!("{}.{}", field, shade);
                        validate_non_empty_string(&shade_field, shade)?;
                        validate_color(&shade_field, color)?;
                    }
                }
            }
        }

        for plugin in &self.plugins {
            validate_non_empty_string("plugins", plugin)?;
        }

        for (utility, variant_list) in &self.variants {
            validate_non_empty_string("variants", utility)?;
            for variant in variant_list {
                validate_non_empty_string(&format!("variants.{}", utility), variant)?;
            }
        }

        Ok(())
    }
}
