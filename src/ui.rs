pub mod components;
pub mod detail_view;
pub mod listing_view;

use iced::widget::{container, text};
use iced::{Element, Fill};

/// Placeholder while a page's data is on its way.
pub fn loading<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(16).color(components::MUTED))
        .padding(30)
        .center_x(Fill)
        .into()
}
