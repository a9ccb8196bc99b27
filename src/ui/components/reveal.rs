// SPDX-License-Identifier: MPL-2.0
//! Wrappers placing animated content on the page.

use crate::ui::animation::{preset, Frame, Preset};
use crate::ui::design_tokens::sizing;
use iced::widget::Container;
use iced::{alignment::Horizontal, Element, Length};

/// Shifts `content` by the offset of `frame`, inside a box sized for the
/// full travel of `kind`. The box keeps the content's own width, so fixed
/// cards stay fixed in a wrapping row. Opacity is left to the caller, which
/// fades the colors it draws.
pub fn animated<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    frame: Frame,
    kind: Preset,
) -> Element<'a, Message> {
    Container::new(content)
        .padding(frame.padding(preset(kind).from.offset))
        .into()
}

/// Centers `content` in a column no wider than the page content width.
pub fn bounded<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
