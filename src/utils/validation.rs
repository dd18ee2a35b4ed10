use crate::utils::error::{MynaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CSS-wide keywords accepted anywhere a color is expected.
const COLOR_KEYWORDS: &[&str] = &["transparent", "currentColor", "inherit"];

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MynaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_glob_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;

    glob::Pattern::new(pattern).map_err(|e| MynaError::GlobError {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    if pattern.contains('\0') {
        return Err(MynaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Accepts the CSS keywords above or a `#RGB` / `#RRGGBB` hex literal.
pub fn validate_color(field_name: &str, value: &str) -> Result<()> {
    if COLOR_KEYWORDS.contains(&value) {
        return Ok(());
    }

    if let Some(hex) = value.strip_prefix('#') {
        let valid_len = hex.len() == 3 || hex.len() == 6;
        if valid_len && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(());
        }
        return Err(MynaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Hex colors must be #RGB or #RRGGBB".to_string(),
        });
    }

    Err(MynaError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!(
            "Expected a hex color or one of: {}",
            COLOR_KEYWORDS.join(", ")
        ),
    })
}
