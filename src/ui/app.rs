//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::display::ui_tick;
use crate::controller::DashboardController;
use crate::events::Event as WorkerEvent;
use crate::prefs::Viewport;
use crate::runtime::DashboardRuntime;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Whether the UI loop keeps going after an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// Controller plus the fetch tasks it drives.
    runtime: DashboardRuntime,

    /// Receives events from fetch workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown to the rest of the session.
    shutdown_sender: broadcast::Sender<()>,

    /// Screen-only state.
    dashboard: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        runtime: DashboardRuntime,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            runtime,
            event_receiver,
            shutdown_sender,
            dashboard: DashboardState::new(&ui_config),
        }
    }

    fn controller(&mut self) -> &mut DashboardController {
        self.runtime.controller_mut()
    }

    /// Apply one terminal event to the controller.
    pub fn handle_terminal_event(&mut self, event: Event) -> Flow {
        match event {
            // Skip events that are not KeyEventKind::Press
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Resize(columns, _) => {
                let detected = Viewport::detect();
                let viewport = if detected.columns == columns {
                    detected
                } else {
                    Viewport::from_columns(columns)
                };
                self.controller().resize(viewport);
                Flow::Continue
            }
            Event::FocusGained => {
                self.controller().focus_gained();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            KeyCode::Esc => {
                if self.controller().search().is_empty() {
                    return Flow::Quit;
                }
                self.controller().clear_search();
            }
            KeyCode::F(5) => self.controller().refresh(),
            KeyCode::Char('r') if ctrl => self.controller().refresh(),
            KeyCode::F(2) => {
                self.controller().toggle_theme();
            }
            KeyCode::Char('t') if ctrl => {
                self.controller().toggle_theme();
            }
            KeyCode::Char('u') if ctrl => self.controller().clear_search(),
            KeyCode::Backspace => self.controller().pop_search_char(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.controller().push_search_char(c)
            }
            _ => {}
        }
        Flow::Continue
    }

    fn collect_controller_events(&mut self) {
        for event in self.runtime.drain_events() {
            self.dashboard.add_event(event);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(ui_tick());
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    // UI event loop
    loop {
        app.runtime.pump(Instant::now());
        app.collect_controller_events();

        let view = app.runtime.controller().view();
        terminal.draw(|f| render_dashboard(f, &view, &app.dashboard))?;

        tokio::select! {
            _ = ticker.tick() => app.dashboard.update(),
            Some(outcome) = app.runtime.next_outcome() => {
                app.runtime.apply(outcome, Instant::now());
            }
            Some(event) = app.event_receiver.recv() => app.dashboard.add_event(event),
            maybe_event = input.next() => match maybe_event {
                Some(Ok(event)) => {
                    if app.handle_terminal_event(event) == Flow::Quit {
                        // Send shutdown signal to the rest of the session
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            _ = shutdown_receiver.recv() => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coincap::MockAssetApi;
    use crate::format::NumberFormatter;
    use crate::prefs::{DisplayPreference, MemoryPreferenceStore, Theme};
    use std::sync::Arc;

    fn app() -> App {
        let preferences = DisplayPreference::load(
            Box::new(MemoryPreferenceStore::default()),
            Viewport::from_columns(160),
        );
        let controller = DashboardController::new(preferences, NumberFormatter::default());
        let (event_sender, event_receiver) = mpsc::channel(8);
        let runtime = DashboardRuntime::new(Arc::new(MockAssetApi::new()), controller, event_sender);
        let (shutdown_sender, _) = broadcast::channel(1);
        App::new(runtime, event_receiver, shutdown_sender, UIConfig::new(true))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn search(app: &mut App) -> String {
        app.controller().search().to_string()
    }

    #[test]
    fn test_typing_edits_search() {
        let mut app = app();
        for c in "btc".chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), Flow::Continue);
        }
        assert_eq!(search(&mut app), "btc");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(search(&mut app), "bt");

        app.handle_key(ctrl('u'));
        assert_eq!(search(&mut app), "");
    }

    #[test]
    fn test_shortcut_letters_are_not_typed() {
        let mut app = app();
        app.handle_key(ctrl('r'));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(search(&mut app), "");
    }

    #[test]
    fn test_escape_clears_search_before_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Continue);
        assert_eq!(search(&mut app), "");
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Flow::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_even_while_searching() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.handle_key(ctrl('c')), Flow::Quit);
    }

    #[test]
    fn test_theme_shortcuts_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.controller().view().theme, Theme::Light);
        app.handle_key(ctrl('t'));
        assert_eq!(app.controller().view().theme, Theme::Dark);
    }

    #[test]
    fn test_resize_switches_density() {
        let mut app = app();
        app.handle_terminal_event(Event::Resize(60, 40));
        assert!(app.runtime.controller().view().compact);
        app.handle_terminal_event(Event::Resize(200, 40));
        assert!(!app.runtime.controller().view().compact);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        app.handle_terminal_event(Event::Key(release));
        assert_eq!(search(&mut app), "");
    }
}
