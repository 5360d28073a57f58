//! Reusable UI components.

use hackboard::domain::{CountdownStatus, Gradient, Rgb};
use iced::widget::{button, container, row, text, Row, Text};
use iced::{gradient, Background, Color, Element, Fill, Length, Radians};

pub const MUTED: Color = Color::from_rgb(0.7, 0.7, 0.7);
pub const CARD_BG: Color = Color::from_rgb(0.15, 0.17, 0.22);
pub const CARD_BORDER: Color = Color::from_rgb(0.3, 0.34, 0.42);
pub const SAVED: Color = Color::from_rgb(0.85, 0.65, 0.15);

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

pub fn status_color(status: CountdownStatus) -> Color {
    match status {
        CountdownStatus::Expired => Color::from_rgb(0.55, 0.55, 0.55),
        CountdownStatus::Urgent => Color::from_rgb(1.0, 0.4, 0.4),
        CountdownStatus::Soon => Color::from_rgb(1.0, 0.75, 0.3),
        CountdownStatus::Normal => Color::from_rgb(0.4, 1.0, 0.4),
    }
}

/// Countdown text tinted by urgency.
pub fn countdown_text<'a>(label: impl text::IntoFragment<'a>, status: CountdownStatus, size: f32) -> Text<'a> {
    text(label).size(size).color(status_color(status))
}

pub fn info_row<'a, M: 'a>(label: &'a str, value: impl Into<Element<'a, M>>) -> Row<'a, M> {
    row![
        text(label).size(15).color(MUTED).width(140),
        value.into()
    ]
    .spacing(10)
}

/// Small rounded label, e.g. the source platform or urgency.
pub fn badge<'a, M: 'a>(label: impl text::IntoFragment<'a>, color: Color) -> container::Container<'a, M> {
    container(text(label).size(12).color(Color::WHITE))
        .padding([3, 8])
        .style(move |_| container::Style {
            background: Some(Background::Color(Color { a: 0.85, ..color })),
            border: iced::Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

/// Placeholder artwork: a diagonal two-stop gradient.
pub fn gradient_banner<'a, M: 'a>(
    colors: Gradient,
    height: impl Into<Length>,
    content: impl Into<Element<'a, M>>,
) -> container::Container<'a, M> {
    let fill = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, to_color(colors.from))
        .add_stop(1.0, to_color(colors.to));

    container(content)
        .width(Fill)
        .height(height)
        .padding(12)
        .style(move |_| container::Style {
            background: Some(Background::Gradient(fill.into())),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

pub fn card_container<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    bg: Color,
    border: Color,
) -> container::Container<'a, M> {
    container(content)
        .padding(16)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: iced::Border {
                color: border,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
}

/// Toggle-style chip used for skill filters.
pub fn chip<'a, M: Clone + 'a>(label: &'a str, selected: bool, on_press: M) -> button::Button<'a, M> {
    button(text(label).size(13))
        .on_press(on_press)
        .padding([4, 10])
        .style(move |theme, status| {
            if selected {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            }
        })
}

/// Transient notice strip; errors are tinted red.
pub fn notice_box<'a, M: Clone + 'a>(
    message: &'a str,
    is_error: bool,
    on_dismiss: M,
) -> container::Container<'a, M> {
    let (bg, border) = if is_error {
        (Color::from_rgb(0.3, 0.15, 0.15), Color::from_rgb(0.7, 0.35, 0.35))
    } else {
        (Color::from_rgb(0.2, 0.25, 0.15), Color::from_rgb(0.5, 0.6, 0.3))
    };

    container(
        row![
            text(message).size(14).width(Fill),
            button(text("Dismiss").size(13))
                .on_press(on_dismiss)
                .padding([4, 10])
                .style(button::text),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .padding(10)
    .style(move |_| container::Style {
        background: Some(Background::Color(bg)),
        border: iced::Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
}
