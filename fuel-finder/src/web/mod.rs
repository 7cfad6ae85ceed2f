//! Web layer for the station finder.
//!
//! Provides the town-selection page, the search endpoint (HTML or JSON),
//! and a small JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
