use super::store::{PreferenceError, PreferenceStore};
use crate::consts::cli_consts::display::{FALLBACK_CELL_WIDTH_PX, MOBILE_BREAKPOINT_PX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme of the dashboard.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Size of the area the dashboard is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in terminal cells.
    pub columns: u16,
    /// Width in pixels as reported by the terminal; 0 when unknown.
    pub pixel_width: u16,
}

impl Viewport {
    pub fn from_columns(columns: u16) -> Self {
        Self {
            columns,
            pixel_width: 0,
        }
    }

    pub fn with_pixels(columns: u16, pixel_width: u16) -> Self {
        Self {
            columns,
            pixel_width,
        }
    }

    /// Queries the current terminal. Falls back to 80 columns when the size
    /// cannot be read (e.g. stdout is not a terminal).
    pub fn detect() -> Self {
        match crossterm::terminal::window_size() {
            Ok(size) => Self::with_pixels(size.columns, size.width),
            Err(_) => crossterm::terminal::size()
                .map(|(columns, _)| Self::from_columns(columns))
                .unwrap_or(Self::from_columns(80)),
        }
    }

    /// Width in pixels, estimated from the column count when the terminal
    /// does not report pixel dimensions.
    pub fn width_px(&self) -> u32 {
        if self.pixel_width > 0 {
            u32::from(self.pixel_width)
        } else {
            u32::from(self.columns) * FALLBACK_CELL_WIDTH_PX
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width_px() <= MOBILE_BREAKPOINT_PX
    }
}

/// Theme and density state for one session.
///
/// The theme is read from the store once, at construction, and written back
/// on every toggle. Storage failures never escape: a failed read yields the
/// dark default, a failed write keeps the new in-memory value, and the last
/// failure is kept for the owner to report via [`Self::take_storage_error`].
pub struct DisplayPreference {
    dark_mode: bool,
    is_mobile: bool,
    store: Box<dyn PreferenceStore>,
    storage_error: Option<PreferenceError>,
}

impl DisplayPreference {
    pub fn load(store: Box<dyn PreferenceStore>, viewport: Viewport) -> Self {
        let (theme, storage_error) = match store.load_theme() {
            Ok(stored) => (stored.unwrap_or_default(), None),
            Err(e) => (Theme::default(), Some(e)),
        };
        Self {
            dark_mode: theme == Theme::Dark,
            is_mobile: viewport.is_mobile(),
            store,
            storage_error,
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.dark_mode = theme == Theme::Dark;
        if let Err(e) = self.store.save_theme(theme) {
            self.storage_error = Some(e);
        }
        theme
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.is_mobile = viewport.is_mobile();
    }

    pub fn take_storage_error(&mut self) -> Option<PreferenceError> {
        self.storage_error.take()
    }
}

impl fmt::Debug for DisplayPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayPreference")
            .field("dark_mode", &self.dark_mode)
            .field("is_mobile", &self.is_mobile)
            .finish_non_exhaustive()
    }
}
