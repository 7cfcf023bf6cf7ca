pub mod descriptor;
pub mod scheduler;
pub mod state;

pub use descriptor::{QueryDescriptor, QueryKey};
pub use scheduler::{FetchCommand, FetchOutcome, FetchRequest, QueryScheduler};
pub use state::{Completion, FetchFailure};
