pub mod app_state;
pub mod registry;

pub use app_state::AppState;
pub use registry::{GameRegistry, SharedGame};
