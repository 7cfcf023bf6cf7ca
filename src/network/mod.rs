pub mod error_handler;
pub mod request_timer;

pub use error_handler::ErrorHandler;
pub use request_timer::RequestTimer;
