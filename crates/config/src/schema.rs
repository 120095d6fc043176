use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Declared pixel size of a widget entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width:  u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<[u32; 2]> for Size {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

/// One validated entry of the widget list.
///
/// The `type` string of the file is resolved into this enum once, at load
/// time; nothing downstream branches on strings.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSpec {
    Icon(IconSpec),
    Label(LabelSpec),
}

impl WidgetSpec {
    pub fn size(&self) -> Size {
        match self {
            Self::Icon(icon)   => icon.size,
            Self::Label(label) => label.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub size:      Size,
    pub icon_path: PathBuf,
    /// Whitespace-separated program and arguments; empty = inert icon.
    pub command:   String,
    pub tooltip:   String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub size: Size,
    pub text: String,
}

/// Grid constants used by the layout sizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Entries per row before wrapping.  Values below 1 are treated as 1.
    pub max_columns: usize,
    /// Gap between neighbouring cells, in pixels.
    pub spacing:     u32,
    /// Margin between the outermost cells and the window edge, in pixels.
    pub padding:     u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_columns: 3,
            spacing:     8,
            padding:     10,
        }
    }
}

/// Stylesheet parsed from `theme.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Window background opacity (0.0 – 1.0); the window itself is translucent.
    pub opacity: f32,
    /// Text color.
    pub foreground: String,
    /// Per-cell background.  Empty = transparent cells.
    pub cell_background: String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius of each cell (pixels).
    pub border_radius: f32,
    /// Drop shadow color, `#RRGGBBAA` accepted.
    pub shadow_color: String,
    /// Drop shadow blur radius (pixels).
    pub shadow_blur: f32,
    /// Drop shadow offset `[x, y]` (pixels).
    pub shadow_offset: [f32; 2],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:      "#1e1e2e".to_string(), // Catppuccin Mocha — base
            opacity:         0.55,
            foreground:      "#cdd6f4".to_string(), // Catppuccin Mocha — text
            cell_background: "#ffffff1f".to_string(),
            font_size:       16.0,
            border_radius:   14.0,
            shadow_color:    "#000000a0".to_string(),
            shadow_blur:     20.0,
            shadow_offset:   [0.0, 6.0],
        }
    }
}
