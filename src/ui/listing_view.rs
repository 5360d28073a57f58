//! Listing page: filter bar and hackathon cards.

use crate::app::{Message, SourceOption};
use crate::ui::components;
use chrono::{DateTime, Utc};
use hackboard::domain::{
    classify_status, format_countdown, placeholder_gradient, time_remaining_until, FilterSpec,
    HackathonRecord, SortKey, Source,
};
use hackboard::SavedSet;
use iced::widget::{button, column, container, mouse_area, pick_list, row, space, text, text_input, toggler, Row};
use iced::{Element, Fill};

const CARD_WIDTH: f32 = 300.0;

pub fn filter_bar<'a>(filter: &'a FilterSpec, skills: &'a [String]) -> Element<'a, Message> {
    let source_options: Vec<SourceOption> = std::iter::once(SourceOption::All)
        .chain(Source::ALL.into_iter().map(SourceOption::Only))
        .collect();
    let selected_source = Some(filter.source.map_or(SourceOption::All, SourceOption::Only));

    let controls = row![
        text_input("Search title, description or skill", &filter.search)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Fill),
        pick_list(source_options, selected_source, Message::SourceSelected).padding(8),
        pick_list(SortKey::ALL, Some(filter.sort), Message::SortSelected).padding(8),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let mut toggles = row![toggler(filter.online_only)
        .label("Online & hybrid only")
        .on_toggle(Message::OnlineOnlyToggled)]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    if !filter.is_unfiltered() {
        toggles = toggles.push(space().width(Fill)).push(
            button(text("Clear filters").size(13))
                .on_press(Message::ClearFilters)
                .padding([4, 10])
                .style(button::text),
        );
    }

    let chips = skills.iter().fold(Row::new().spacing(6), |chips, skill| {
        chips.push(components::chip(
            skill,
            filter.skills.contains(skill),
            Message::SkillToggled(skill.clone()),
        ))
    });

    column![controls, toggles, chips.wrap()].spacing(10).into()
}

pub fn cards<'a>(
    records: &'a [HackathonRecord],
    saved: &'a SavedSet,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    if records.is_empty() {
        return container(
            text("No hackathons match your filters")
                .size(16)
                .color(components::MUTED),
        )
        .padding(30)
        .center_x(Fill)
        .into();
    }

    records
        .iter()
        .fold(Row::new().spacing(15), |grid, record| {
            grid.push(card(record, saved.contains(&record.id), now))
        })
        .wrap()
        .into()
}

fn card(record: &HackathonRecord, is_saved: bool, now: DateTime<Utc>) -> Element<'_, Message> {
    let remaining = time_remaining_until(&record.registration_deadline, now);
    let status = classify_status(&remaining);

    let mut banner = row![components::badge(record.source.as_str(), components::CARD_BORDER)]
        .align_y(iced::Alignment::Start);
    if is_saved {
        banner = banner
            .push(space().width(Fill))
            .push(components::badge("Saved", components::SAVED));
    }

    let content = column![
        components::gradient_banner(placeholder_gradient(&record.id), 90, banner),
        text(&record.title).size(18),
        text(record.location_label()).size(13).color(components::MUTED),
        row![
            components::countdown_text(format_countdown(&remaining), status, 14.0),
            space().width(Fill),
            text(status.as_str()).size(12).color(components::MUTED),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(8);

    mouse_area(
        components::card_container(content, components::CARD_BG, components::CARD_BORDER)
            .width(CARD_WIDTH),
    )
    .on_press(Message::OpenDetail(record.id.clone()))
    .interaction(iced::mouse::Interaction::Pointer)
    .into()
}
