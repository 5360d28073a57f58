use crate::ui::{self, detail_view::SaveButton};
use chrono::{DateTime, Utc};
use hackboard::config::Config;
use hackboard::domain::{
    apply_filters, available_skills, FilterSpec, HackathonRecord, HackboardError, SortKey, Source,
};
use hackboard::services::{listing, listing::Listing, saved};
use hackboard::ticker::TICK_INTERVAL;
use hackboard::HackathonStore;
use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Element, Fill, Subscription, Task};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded(Result<Listing, HackboardError>),
    SearchChanged(String),
    SourceSelected(SourceOption),
    OnlineOnlyToggled(bool),
    SkillToggled(String),
    SortSelected(SortKey),
    ClearFilters,
    OpenDetail(String),
    BackToListing,
    ToggleSave(String),
    /// Record id and its new saved flag.
    SaveToggled(String, Result<bool, HackboardError>),
    Tick(Instant),
    DismissNotice(u64),
}

/// Entry of the source picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOption {
    All,
    Only(Source),
}

impl fmt::Display for SourceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOption::All => f.write_str("All sources"),
            SourceOption::Only(source) => source.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Page {
    Listing,
    Detail(String),
}

#[derive(Debug, Clone)]
struct Notice {
    id: u64,
    text: String,
    is_error: bool,
}

pub struct State {
    config: Config,
    store: Arc<dyn HackathonStore>,
    listing: Option<Listing>,
    loading: bool,
    filter: FilterSpec,
    visible: Vec<HackathonRecord>,
    skills: Vec<String>,
    page: Page,
    now: DateTime<Utc>,
    pending_saves: HashSet<String>,
    notice: Option<Notice>,
    notice_seq: u64,
}

impl State {
    pub fn new(config: Config, store: Arc<dyn HackathonStore>) -> Self {
        Self {
            config,
            store,
            listing: None,
            loading: true,
            filter: FilterSpec::default(),
            visible: Vec::new(),
            skills: Vec::new(),
            page: Page::Listing,
            now: Utc::now(),
            pending_saves: HashSet::new(),
            notice: None,
            notice_seq: 0,
        }
    }

    /// Swap in a new filter spec and rerun the pipeline.
    fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        let records = self.listing.as_ref().map_or(&[][..], |l| &l.records[..]);
        self.visible = apply_filters(records, &self.filter);
    }

    fn show_notice(&mut self, text: impl Into<String>, is_error: bool) -> Task<Message> {
        self.notice_seq += 1;
        let id = self.notice_seq;
        self.notice = Some(Notice {
            id,
            text: text.into(),
            is_error,
        });

        let lifetime = self.config.notice_duration;
        Task::perform(
            async move {
                tokio::time::sleep(lifetime).await;
                id
            },
            Message::DismissNotice,
        )
    }

    fn save_button(&self, id: &str) -> SaveButton {
        if self.config.user_id.is_none() {
            SaveButton::SignedOut
        } else if self.pending_saves.contains(id) {
            SaveButton::Pending
        } else if self.listing.as_ref().is_some_and(|l| l.is_saved(id)) {
            SaveButton::Saved
        } else {
            SaveButton::NotSaved
        }
    }

    /// Countdowns are on screen, so the tick subscription should run.
    fn shows_countdowns(&self) -> bool {
        match &self.page {
            Page::Listing => !self.visible.is_empty(),
            Page::Detail(_) => true,
        }
    }
}

pub fn init(config: Config, store: Arc<dyn HackathonStore>) -> (State, Task<Message>) {
    let state = State::new(config, store);
    let task = load_task(&state);
    (state, task)
}

fn load_task(state: &State) -> Task<Message> {
    Task::perform(
        load_async(state.store.clone(), state.config.user_id.clone()),
        Message::Loaded,
    )
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Refresh => {
            state.loading = true;
            load_task(state)
        }
        Message::Loaded(result) => {
            state.loading = false;
            state.now = Utc::now();
            match result {
                Ok(listing) => {
                    state.skills = available_skills(&listing.records);
                    state.listing = Some(listing);
                    state.refilter();
                    Task::none()
                }
                // A failed refresh keeps whatever was loaded before.
                Err(e) => {
                    warn!("Loading hackathons failed: {e}");
                    state.show_notice(e.to_user_string(), true)
                }
            }
        }
        Message::SearchChanged(search) => {
            state.set_filter(state.filter.with_search(search));
            Task::none()
        }
        Message::SourceSelected(option) => {
            let source = match option {
                SourceOption::All => None,
                SourceOption::Only(source) => Some(source),
            };
            state.set_filter(state.filter.with_source(source));
            Task::none()
        }
        Message::OnlineOnlyToggled(online_only) => {
            state.set_filter(state.filter.with_online_only(online_only));
            Task::none()
        }
        Message::SkillToggled(skill) => {
            state.set_filter(state.filter.with_skill_toggled(&skill));
            Task::none()
        }
        Message::SortSelected(sort) => {
            state.set_filter(state.filter.with_sort(sort));
            Task::none()
        }
        Message::ClearFilters => {
            state.set_filter(state.filter.cleared());
            Task::none()
        }
        Message::OpenDetail(id) => {
            debug!(id, "Opening detail page");
            state.now = Utc::now();
            state.page = Page::Detail(id);
            Task::none()
        }
        Message::BackToListing => {
            state.page = Page::Listing;
            Task::none()
        }
        Message::ToggleSave(id) => {
            if state.pending_saves.contains(&id) {
                return Task::none();
            }
            let Some(user) = state.config.user_id.clone() else {
                return state.show_notice(HackboardError::NotSignedIn.to_user_string(), true);
            };
            let Some(listing) = &state.listing else {
                return Task::none();
            };

            let was_saved = listing.is_saved(&id);
            state.pending_saves.insert(id.clone());
            Task::perform(
                toggle_save_async(state.store.clone(), user, id, was_saved),
                |(id, result)| Message::SaveToggled(id, result),
            )
        }
        Message::SaveToggled(id, result) => {
            state.pending_saves.remove(&id);
            match result {
                Ok(now_saved) => {
                    // Other saves may have landed meanwhile; touch only this id.
                    if let Some(listing) = &mut state.listing {
                        saved::apply(&mut listing.saved, &id, now_saved);
                    }
                    state.show_notice(
                        if now_saved {
                            "Saved to your list"
                        } else {
                            "Removed from your list"
                        },
                        false,
                    )
                }
                Err(e) => state.show_notice(e.to_user_string(), true),
            }
        }
        Message::Tick(_) => {
            state.now = Utc::now();
            Task::none()
        }
        Message::DismissNotice(id) => {
            if state.notice.as_ref().is_some_and(|n| n.id == id) {
                state.notice = None;
            }
            Task::none()
        }
    }
}

/// One-second tick while countdowns are displayed. Returning no subscription
/// when they are not makes iced drop the timer.
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.shows_countdowns() {
        iced::time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let mut content = column![].spacing(15).padding(20);

    if let Some(notice) = &state.notice {
        content = content.push(ui::components::notice_box(
            &notice.text,
            notice.is_error,
            Message::DismissNotice(notice.id),
        ));
    }

    content = match &state.page {
        Page::Detail(id) => match state.listing.as_ref().and_then(|l| l.find(id)) {
            Some(record) => content.push(ui::detail_view::view(
                record,
                state.save_button(id),
                state.now,
            )),
            None => content.push(view_missing()),
        },
        Page::Listing => content
            .push(view_header(state))
            .push(ui::listing_view::filter_bar(&state.filter, &state.skills))
            .push(view_listing_body(state)),
    };

    container(scrollable(content)).width(Fill).height(Fill).into()
}

fn view_header(state: &State) -> Element<'_, Message> {
    let count = match &state.listing {
        Some(listing) => format!("{} of {} open", state.visible.len(), listing.records.len()),
        None => String::new(),
    };

    row![
        text("Hackathons")
            .size(26)
            .color(iced::Color::from_rgb(0.9, 0.9, 1.0)),
        text(count).size(14).color(ui::components::MUTED),
        space().width(Fill),
        button("Refresh")
            .on_press_maybe((!state.loading).then_some(Message::Refresh))
            .padding([8, 16]),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_listing_body(state: &State) -> Element<'_, Message> {
    match &state.listing {
        Some(listing) => ui::listing_view::cards(&state.visible, &listing.saved, state.now),
        None if state.loading => ui::loading("Loading hackathons..."),
        None => column![
            text("Hackathons could not be loaded.").size(16),
            button("Retry").on_press(Message::Refresh).padding([6, 12]),
        ]
        .spacing(10)
        .into(),
    }
}

fn view_missing() -> Element<'static, Message> {
    column![
        text("This hackathon is no longer listed.").size(16),
        button("Back to listings")
            .on_press(Message::BackToListing)
            .padding([6, 12]),
    ]
    .spacing(10)
    .into()
}

async fn load_async(
    store: Arc<dyn HackathonStore>,
    user: Option<String>,
) -> Result<Listing, HackboardError> {
    tokio::task::spawn_blocking(move || listing::load(store.as_ref(), user.as_deref()))
        .await
        .unwrap_or_else(|e| Err(HackboardError::Fetch(e.to_string())))
}

async fn toggle_save_async(
    store: Arc<dyn HackathonStore>,
    user: String,
    id: String,
    was_saved: bool,
) -> (String, Result<bool, HackboardError>) {
    let record_id = id.clone();
    let result = tokio::task::spawn_blocking(move || {
        saved::toggle(store.as_ref(), Some(&user), &record_id, was_saved)
    })
    .await
    .unwrap_or_else(|e| Err(HackboardError::Mutation(e.to_string())));
    (id, result)
}
