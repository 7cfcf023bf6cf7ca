//! Display preferences: theme (persisted) and layout density (derived).

pub mod display_preference;
pub mod store;

pub use display_preference::{DisplayPreference, Theme, Viewport};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
