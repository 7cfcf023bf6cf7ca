//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::display::ui_tick;
use crate::controller::ViewState;
use crate::events::Event;
use crate::ui::plain::render_state;
use std::error::Error;
use std::time::Instant;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Printing the table whenever its contents change
/// 3. Ctrl+C shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    // Print session start message
    print_session_starting("headless", &session.api_url);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut ticker = tokio::time::interval(ui_tick());
    let mut last_printed: Option<ViewState> = None;

    // Event loop: log events and table changes to console until shutdown
    loop {
        session.runtime.pump(Instant::now());
        for event in session.runtime.drain_events() {
            print_event(&event);
        }

        let state = session.runtime.controller().view().state;
        if last_printed.as_ref() != Some(&state) {
            println!("{}", render_state(&state));
            last_printed = Some(state);
        }

        tokio::select! {
            _ = ticker.tick() => {}
            Some(outcome) = session.runtime.next_outcome() => {
                session.runtime.apply(outcome, Instant::now());
            }
            Some(event) = session.event_receiver.recv() => print_event(&event),
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.runtime.shutdown();
    print_session_exit_success();

    Ok(())
}

fn print_event(event: &Event) {
    if event.should_display() {
        println!("{}", event);
    }
}
