mod assets;
mod coincap;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod filter;
mod format;
mod logging;
mod network;
mod prefs;
mod query;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::consts::cli_consts::queries::TOP_ASSETS_LIMIT;
use crate::environment::Environment;
use crate::prefs::{DisplayPreference, FilePreferenceStore, Viewport};
use crate::session::messages::print_preference_warning;
use crate::session::{
    SessionOptions, SnapshotOptions, run_headless_mode, run_snapshot, run_tui_mode,
    setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about = "Live cryptocurrency prices in the terminal", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Print table changes and events to stdout instead of drawing the TUI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Start with this search term already entered
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Number of top assets shown when not searching
        #[arg(long, default_value_t = TOP_ASSETS_LIMIT, value_parser = parse_limit)]
        limit: usize,

        /// Base URL of the price index, overriding the environment default
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Leave the terminal's own background instead of the theme colour
        #[arg(long, default_value_t = false)]
        no_background_color: bool,
    },
    /// Fetch once, print the table and exit
    Snapshot {
        /// Filter the full listing by this term
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Abbreviate large figures with T/B/M suffixes
        #[arg(long, default_value_t = false)]
        compact: bool,

        /// Number of top assets to print when not searching
        #[arg(long, default_value_t = TOP_ASSETS_LIMIT, value_parser = parse_limit)]
        limit: usize,

        /// Base URL of the price index, overriding the environment default
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Show the saved colour theme
    Theme {
        /// Switch between dark and light and save the result
        #[arg(long, default_value_t = false)]
        toggle: bool,
    },
}

/// Parses a row count, which must be at least one.
fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            search,
            limit,
            api_url,
            no_background_color,
        } => {
            let api_url = api_url.unwrap_or_else(|| environment.api_url());
            let session = setup_session(
                &api_url,
                SessionOptions {
                    search,
                    top_limit: limit,
                },
            )?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Snapshot {
            search,
            compact,
            limit,
            api_url,
        } => {
            let api_url = api_url.unwrap_or_else(|| environment.api_url());
            run_snapshot(
                &api_url,
                SnapshotOptions {
                    search,
                    compact,
                    limit,
                },
            )
            .await
        }
        Command::Theme { toggle } => {
            let mut preferences = DisplayPreference::load(
                Box::new(FilePreferenceStore::from_home()),
                Viewport::from_columns(0),
            );
            if let Some(e) = preferences.take_storage_error() {
                print_preference_warning(&e);
            }
            let theme = if toggle {
                preferences.toggle_theme()
            } else {
                preferences.theme()
            };
            if let Some(e) = preferences.take_storage_error() {
                print_preference_warning(&e);
            }
            println!("{}", theme);
            Ok(())
        }
    }
}
