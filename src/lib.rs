pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use insights::{compute_insights, InsightsError};
pub use state::AppState;
pub use storage::load_data;
