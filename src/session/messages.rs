//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARNING: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_ERROR: &str = "\x1b[1;31m"; // Bold Red
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
    /// Problems the session recovers from
    Warning(String),
    /// Failures that end the command
    Error(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Print the message with appropriate formatting. Warnings and errors go
    /// to stderr so stdout stays clean for table output.
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
            Self::Warning(msg) => {
                eprintln!("{}[WARN]{} {}", COLOR_WARNING, COLOR_RESET, msg);
            }
            Self::Error(msg) => {
                eprintln!("{}[ERROR]{} {}", COLOR_ERROR, COLOR_RESET, msg);
            }
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, api_url: &str) {
    SessionMessage::info(format!("Starting {} mode against {}", mode, api_url)).print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("cryptodash exited successfully").print();
}

pub fn print_fetch_failure(error: &dyn std::fmt::Display) {
    SessionMessage::error(format!("Failed to fetch assets: {}", error)).print();
}

pub fn print_preference_warning(error: &dyn std::fmt::Display) {
    SessionMessage::warning(format!("Theme preference not persisted: {}", error)).print();
}
