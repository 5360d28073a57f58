//! Detail page for one hackathon.

use crate::app::Message;
use crate::ui::components;
use chrono::{DateTime, Utc};
use hackboard::domain::{
    classify_status, format_countdown_clock, format_date, format_date_time, placeholder_gradient,
    time_remaining_until, HackathonRecord,
};
use iced::widget::{button, column, row, space, text, Row};
use iced::{Color, Element, Fill};

/// How the save button should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveButton {
    Saved,
    NotSaved,
    Pending,
    SignedOut,
}

pub fn view(record: &HackathonRecord, save: SaveButton, now: DateTime<Utc>) -> Element<'_, Message> {
    let remaining = time_remaining_until(&record.registration_deadline, now);
    let status = classify_status(&remaining);

    let header = components::gradient_banner(
        placeholder_gradient(&record.id),
        140,
        column![
            row![
                components::badge(record.source.as_str(), components::CARD_BORDER),
                components::badge(record.mode.as_str(), components::CARD_BORDER),
            ]
            .spacing(6),
            space().height(Fill),
            text(&record.title).size(28).color(Color::WHITE),
        ],
    );

    let countdown = components::card_container(
        column![
            text("Registration closes in").size(14).color(components::MUTED),
            components::countdown_text(format_countdown_clock(&remaining), status, 30.0),
            row![
                components::badge(status.as_str(), components::status_color(status)),
                text(format_date_time(&record.registration_deadline))
                    .size(13)
                    .color(components::MUTED),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
        ]
        .spacing(8),
        components::CARD_BG,
        components::status_color(status),
    )
    .width(Fill);

    let mut details = column![
        components::info_row(
            "Dates:",
            text(format!(
                "{} - {}",
                format_date(&record.start_date),
                format_date(&record.end_date)
            ))
            .size(15),
        ),
        components::info_row("Location:", text(record.location_label()).size(15)),
    ]
    .spacing(10);

    if let Some(prize) = record.prize_pool.as_deref().filter(|p| !p.trim().is_empty()) {
        details = details.push(components::info_row("Prizes:", text(prize).size(15)));
    }

    if !record.skills.is_empty() {
        let tags = record
            .skills
            .iter()
            .fold(Row::new().spacing(6), |tags, skill| {
                tags.push(components::badge(skill.as_str(), components::CARD_BORDER))
            });
        details = details.push(components::info_row("Skills:", tags.wrap()));
    }

    let mut content = column![
        row![
            button(text("Back to listings").size(14))
                .on_press(Message::BackToListing)
                .padding([6, 12])
                .style(button::secondary),
            space().width(Fill),
            save_button(&record.id, save),
        ]
        .align_y(iced::Alignment::Center),
        header,
        countdown,
        details,
    ]
    .spacing(15);

    if let Some(description) = record.description.as_deref() {
        content = content.push(text(description).size(15));
    }

    content.into()
}

fn save_button(id: &str, state: SaveButton) -> Element<'_, Message> {
    let label = match state {
        SaveButton::Saved => "Saved",
        SaveButton::NotSaved => "Save",
        SaveButton::Pending => "Saving...",
        SaveButton::SignedOut => "Sign in to save",
    };
    let on_press = matches!(state, SaveButton::Saved | SaveButton::NotSaved)
        .then(|| Message::ToggleSave(id.to_string()));

    button(text(label).size(14))
        .on_press_maybe(on_press)
        .padding([6, 14])
        .style(if state == SaveButton::Saved {
            button::success
        } else {
            button::primary
        })
        .into()
}
