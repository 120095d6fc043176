use dash_core::{event::Message, LabelCell, RenderedWidget};
use dash_theme::Theme;
use iced::{
    widget::{container, text},
    Element, Length,
};

/// Centered text filling its grid cell.  The text itself is rewritten by the
/// stats publisher; this only draws whatever is current.
#[derive(Debug, Default)]
pub struct LabelWidget;

impl LabelWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        widget: &'a RenderedWidget,
        label: &'a LabelCell,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let style = theme.cell;

        container(
            text(label.text.as_str())
                .size(theme.font_size)
                .color(theme.foreground.to_iced()),
        )
        .center_x(Length::Fixed(widget.width as f32))
        .center_y(Length::Fixed(widget.height as f32))
        .style(move |_| style.container())
        .into()
    }
}
