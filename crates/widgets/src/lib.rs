pub mod icon;
pub mod label;

pub use icon::IconWidget;
pub use label::LabelWidget;

use dash_core::{event::Message, RenderedKind, RenderedWidget};
use dash_theme::Theme;
use iced::Element;

/// Draws any dashboard cell by dispatching on its kind.
#[derive(Debug, Default)]
pub struct CellView {
    icon:  IconWidget,
    label: LabelWidget,
}

impl CellView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view<'a>(&'a self, widget: &'a RenderedWidget, theme: &'a Theme) -> Element<'a, Message> {
        match &widget.kind {
            RenderedKind::Icon(icon)   => self.icon.view(widget, icon, theme),
            RenderedKind::Label(label) => self.label.view(widget, label, theme),
        }
    }
}
