pub mod error;
pub mod orchestrator;
pub mod state;

pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, ViewState};
pub use state::NavigationState;
