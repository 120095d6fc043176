pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{CellStyle, ShadowStyle};

use dash_config::ThemeConfig;

/// Compiled theme derived from the stylesheet.
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:      Color,
    pub opacity:         f32,
    pub foreground:      Color,
    pub font_size:       f32,
    pub cell:            CellStyle,
}

impl Theme {
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let foreground = Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE);
        let cell_background = if cfg.cell_background.is_empty() {
            None
        } else {
            Color::from_hex(&cfg.cell_background)
        };

        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            opacity:    cfg.opacity.clamp(0.0, 1.0),
            foreground,
            font_size:  cfg.font_size,
            cell: CellStyle {
                background:    cell_background,
                foreground,
                border_radius: cfg.border_radius,
                shadow: ShadowStyle {
                    color:       Color::from_hex(&cfg.shadow_color).unwrap_or(Color::SHADOW),
                    blur_radius: cfg.shadow_blur.max(0.0),
                    offset:      (cfg.shadow_offset[0], cfg.shadow_offset[1]),
                },
            },
        }
    }

    /// Window background with the configured opacity applied.
    pub fn window_background(&self) -> Color {
        self.background.with_alpha(self.opacity)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            background:   "nope".into(),
            shadow_color: "#zz".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.background, Color::DARK);
        assert_eq!(theme.cell.shadow.color, Color::SHADOW);
    }

    #[test]
    fn empty_cell_background_is_transparent() {
        let cfg = ThemeConfig {
            cell_background: String::new(),
            ..ThemeConfig::default()
        };
        assert!(Theme::from_config(&cfg).cell.background.is_none());
    }

    #[test]
    fn default_shadow_matches_stylesheet_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.cell.shadow.blur_radius, 20.0);
        assert_eq!(theme.cell.shadow.offset, (0.0, 6.0));
        assert_eq!(theme.window_background().a, 0.55);
    }
}
