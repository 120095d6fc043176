use crate::colors::Color;
use iced::{border, widget::container, Shadow, Vector};

/// Drop shadow cast by every dashboard cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub color:       Color,
    pub blur_radius: f32,
    pub offset:      (f32, f32),
}

impl ShadowStyle {
    pub fn to_iced(self) -> Shadow {
        Shadow {
            color:       self.color.to_iced(),
            offset:      Vector::new(self.offset.0, self.offset.1),
            blur_radius: self.blur_radius,
        }
    }
}

/// Visual settings for a single grid cell (icon or label).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    /// `None` = transparent cell.
    pub background:    Option<Color>,
    pub foreground:    Color,
    pub border_radius: f32,
    pub shadow:        ShadowStyle,
}

impl CellStyle {
    /// Container style for the cell wrapper.
    pub fn container(self) -> container::Style {
        container::Style {
            text_color: Some(self.foreground.to_iced()),
            background: self.background.map(|c| c.to_iced().into()),
            border:     border::rounded(self.border_radius),
            shadow:     self.shadow.to_iced(),
            ..container::Style::default()
        }
    }
}
