pub mod controller;
pub mod state;
pub mod ui;

mod app;

pub use state::AppState;
