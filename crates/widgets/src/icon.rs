use dash_core::{event::Message, IconCell, RenderedWidget};
use dash_theme::Theme;
use iced::{
    mouse,
    widget::{container, image, mouse_area, text, tooltip},
    ContentFit, Element, Length,
};

/// Clickable image filling its grid cell.
///
/// Pressing it emits [`Message::Launch`] with the cell's layout index; the
/// window decides what to spawn.  A missing image file renders blank.
#[derive(Debug, Default)]
pub struct IconWidget;

impl IconWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        widget: &'a RenderedWidget,
        icon: &'a IconCell,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let (width, height) = (widget.width as f32, widget.height as f32);
        let style = theme.cell;

        let picture = image(image::Handle::from_path(&icon.icon_path))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Fill);

        let cell = container(picture)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .style(move |_| style.container());

        let clickable = mouse_area(cell)
            .on_press(Message::Launch(widget.index))
            .interaction(mouse::Interaction::Pointer);

        if icon.tooltip.is_empty() {
            return clickable.into();
        }

        tooltip(
            clickable,
            container(text(icon.tooltip.as_str()).size(theme.font_size * 0.8))
                .padding(4)
                .style(move |_| style.container()),
            tooltip::Position::Bottom,
        )
        .into()
    }
}
