pub mod map;

use iced::{
    Element, Length,
    widget::{column, container, container::bordered_box, text},
};

use crate::core::model::Color;

pub fn to_iced(color: Color) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}

/// Coloured status label, as shown on cards and the details panel.
pub fn badge<'a, Message: 'a>(label: impl ToString, color: Color) -> Element<'a, Message> {
    container(text(label.to_string()).size(12).color(to_iced(color)))
        .padding([2, 8])
        .style(bordered_box)
        .into()
}

/// Page frame: a header row above the main content.
pub fn layout<'a, Message>(
    header: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(column![
        container(text("siteboard").size(20).width(Length::Fill))
            .padding(10)
            .style(bordered_box),
        container(header.into()).padding([10, 20]),
        container(main_content.into())
            .padding([0, 20])
            .height(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
