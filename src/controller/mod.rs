//! Dashboard controller
//!
//! Owns the search term, both asset queries and the display preference, and
//! derives the view from them. Every input (keystrokes, timer ticks, fetch
//! outcomes, resizes) goes through here.

pub mod view;

pub use view::{AssetRow, DashboardView, ViewState, build_rows};

use crate::assets::Asset;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, queries};
use crate::events::{Event, EventType};
use crate::filter::filter_assets;
use crate::format::NumberFormatter;
use crate::logging::LogLevel;
use crate::prefs::{DisplayPreference, Theme, Viewport};
use crate::query::{
    Completion, FetchCommand, FetchOutcome, QueryDescriptor, QueryKey, QueryScheduler,
};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardController {
    search: String,
    queries: QueryScheduler<Vec<Asset>>,
    preferences: DisplayPreference,
    formatter: NumberFormatter,
    top_limit: usize,
    top_updated: Option<DateTime<Local>>,
    all_updated: Option<DateTime<Local>>,
    pending_events: VecDeque<Event>,
}

impl DashboardController {
    pub fn new(preferences: DisplayPreference, formatter: NumberFormatter) -> Self {
        let mut controller = Self {
            search: String::new(),
            queries: QueryScheduler::new(),
            preferences,
            formatter,
            top_limit: queries::TOP_ASSETS_LIMIT,
            top_updated: None,
            all_updated: None,
            pending_events: VecDeque::new(),
        };
        if let Some(e) = controller.preferences.take_storage_error() {
            let theme = controller.preferences.theme();
            controller.push_event(Event::preferences_warning(format!(
                "Could not read saved theme, using {}: {}",
                theme, e
            )));
        }
        controller
    }

    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// The listing the view is built from.
    pub fn active_query(&self) -> QueryKey {
        if self.is_searching() {
            QueryKey::AllAssets
        } else {
            QueryKey::TopAssets
        }
    }

    /// The full listing is only wanted while a search term is set.
    pub fn descriptors(&self) -> [QueryDescriptor; 2] {
        [
            QueryDescriptor::top_assets(self.top_limit),
            QueryDescriptor::all_assets(self.is_searching()),
        ]
    }

    /// Commands needed to bring the queries in line with the current state.
    pub fn poll(&mut self, now: Instant) -> Vec<FetchCommand> {
        let descriptors = self.descriptors();
        self.queries.poll(&descriptors, now)
    }

    /// Manual refresh of whatever is on screen.
    pub fn refresh(&mut self) {
        let key = self.active_query();
        self.queries.request_refetch(key);
    }

    pub fn focus_gained(&mut self) {
        let descriptors = self.descriptors();
        self.queries.on_focus_gained(&descriptors);
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome<Vec<Asset>>, now: Instant) -> Completion {
        let key = outcome.key;
        let completion = self.queries.complete(outcome, now);
        match completion {
            Completion::Applied => {
                let updated = Some(Local::now());
                match key {
                    QueryKey::TopAssets => self.top_updated = updated,
                    QueryKey::AllAssets => self.all_updated = updated,
                }
            }
            Completion::Failed {
                retry_in: Some(delay),
            } => {
                self.push_event(Event::new(
                    key.source(),
                    format!("Retrying in {}s", delay.as_secs()),
                    EventType::Waiting,
                    LogLevel::Debug,
                ));
            }
            Completion::Failed { retry_in: None } | Completion::Discarded => {}
        }
        completion
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.preferences.toggle_theme();
        if let Some(e) = self.preferences.take_storage_error() {
            self.push_event(Event::preferences_warning(format!(
                "Could not save theme {}: {}",
                theme, e
            )));
        }
        theme
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.preferences.on_resize(viewport);
    }

    /// Queues an event, dropping the oldest once the queue is full.
    fn push_event(&mut self, event: Event) {
        if self.pending_events.len() >= MAX_ACTIVITY_LOGS {
            self.pending_events.pop_front();
        }
        self.pending_events.push_back(event);
    }

    /// Events raised by the controller itself since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.pending_events.drain(..).collect()
    }

    pub fn view(&self) -> DashboardView {
        let active = self.active_query();
        let compact = self.preferences.is_mobile();
        let top = self.queries.state(QueryKey::TopAssets);

        let state = if top.is_loading() {
            ViewState::Loading
        } else {
            match self.queries.state(active).data() {
                None => ViewState::AwaitingSearch,
                Some(assets) => {
                    let rows = build_rows(
                        &filter_assets(assets, &self.search),
                        &self.formatter,
                        compact,
                    );
                    if rows.is_empty() {
                        ViewState::Empty
                    } else if self.is_searching() {
                        ViewState::Search(rows)
                    } else {
                        ViewState::Top(rows)
                    }
                }
            }
        };

        let active_state = self.queries.state(active);
        DashboardView {
            state,
            theme: self.preferences.theme(),
            compact,
            search: self.search.clone(),
            is_refreshing: active_state.is_fetching(),
            last_updated: match active {
                QueryKey::TopAssets => self.top_updated,
                QueryKey::AllAssets => self.all_updated,
            },
            last_error: active_state.last_error().map(str::to_string),
        }
    }
}
