//! HTTP adapters - the page and API surface.

pub mod coaching;

// Re-export key types for convenience
pub use coaching::coaching_router;
pub use coaching::CoachingAppState;
