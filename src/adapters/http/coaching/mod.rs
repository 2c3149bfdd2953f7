//! HTTP adapter for the coaching page and consultation endpoint.

pub mod dto;
mod handlers;
mod page;
mod routes;

pub use handlers::CoachingAppState;
pub use routes::coaching_router;
