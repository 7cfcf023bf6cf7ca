//! Session setup and initialization

use crate::coincap::CoinCapClient;
use crate::config::get_config_path;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::events::Event;
use crate::format::{NumberFormatter, NumberLocale};
use crate::prefs::{
    DisplayPreference, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Viewport,
};
use crate::runtime::DashboardRuntime;
use crate::session::messages::SessionMessage;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Controller and fetch tasks
    pub runtime: DashboardRuntime,
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Shutdown sender to stop the session
    pub shutdown_sender: broadcast::Sender<()>,
    /// Price index the session reads from
    pub api_url: String,
}

/// Options that shape a dashboard session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Search term entered before the first render
    pub search: Option<String>,
    /// Size of the ranked listing
    pub top_limit: usize,
}

/// Picks the theme storage: the preference file when a home directory exists,
/// otherwise an in-memory store for this run only.
fn preference_store() -> Box<dyn PreferenceStore> {
    match get_config_path() {
        Some(path) => Box::new(FilePreferenceStore::new(path)),
        None => {
            SessionMessage::warning("No home directory found; theme changes will not be saved")
                .print();
            Box::new(MemoryPreferenceStore::default())
        }
    }
}

/// Sets up a dashboard session
///
/// Loads the persisted theme, measures the terminal and wires the controller
/// to a CoinCap client. Nothing is fetched until the session's loop runs.
pub fn setup_session(api_url: &str, options: SessionOptions) -> Result<SessionData, Box<dyn Error>> {
    let client = CoinCapClient::new(api_url)?;
    let api_url = client.base_url().to_string();

    let preferences = DisplayPreference::load(preference_store(), Viewport::detect());
    let formatter = NumberFormatter::new(NumberLocale::from_env());
    let mut controller =
        DashboardController::new(preferences, formatter).with_top_limit(options.top_limit);
    if let Some(search) = options.search {
        controller.set_search(search);
    }

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let runtime = DashboardRuntime::new(Arc::new(client), controller, event_sender);
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        runtime,
        event_receiver,
        shutdown_sender,
        api_url,
    })
}
