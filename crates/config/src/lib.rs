pub mod schema;
pub mod watcher;
pub mod widgets;

pub use schema::{GridConfig, IconSpec, LabelSpec, Size, ThemeConfig, WidgetSpec};
pub use watcher::{affects_stylesheet, watch_stylesheet};
pub use widgets::{load_widgets, parse_widgets, MAX_CELL_EXTENT};

use dash_core::{DashError, Result};
use std::path::{Path, PathBuf};

/// Load the stylesheet from a TOML file.  Returns `ThemeConfig::default()` if
/// the file doesn't exist so the dashboard always has a usable look.
pub fn load_theme(path: impl AsRef<Path>) -> Result<ThemeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Stylesheet not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ThemeConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| DashError::Theme(format!("cannot read '{}': {e}", path.display())))?;

    parse_theme(&raw)
}

/// Parse a stylesheet from TOML text.
pub fn parse_theme(raw: &str) -> Result<ThemeConfig> {
    toml::from_str(raw).map_err(|e| DashError::Theme(format!("TOML parse error: {e}")))
}

/// Directory holding the dashboard's files, honouring `$XDG_CONFIG_HOME`.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("rice-dash")
}

/// Default widget list path: `<config_dir>/widgets.json`.
pub fn default_widgets_path() -> PathBuf {
    config_dir().join("widgets.json")
}

/// Stylesheet path: `$RICE_DASH_THEME` if set, else `<config_dir>/theme.toml`.
pub fn default_theme_path() -> PathBuf {
    std::env::var_os("RICE_DASH_THEME")
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir().join("theme.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_stylesheet_keeps_defaults() {
        let theme = parse_theme("background = \"#000000\"\nshadow_blur = 4.0\n").unwrap();
        assert_eq!(theme.background, "#000000");
        assert_eq!(theme.shadow_blur, 4.0);
        assert_eq!(theme.foreground, ThemeConfig::default().foreground);
        assert_eq!(theme.shadow_offset, [0.0, 6.0]);
    }

    #[test]
    fn malformed_stylesheet_is_a_theme_error() {
        let err = parse_theme("font_size = \"big\"").unwrap_err();
        assert!(matches!(err, DashError::Theme(_)));
    }

    #[test]
    fn missing_stylesheet_falls_back_to_defaults() {
        let theme = load_theme("/nonexistent/rice-dash/theme.toml").unwrap();
        assert_eq!(theme.background, ThemeConfig::default().background);
    }
}
