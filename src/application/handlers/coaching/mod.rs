//! Coaching command handlers.

mod generate_consultation;

pub use generate_consultation::{GenerateConsultationCommand, GenerateConsultationHandler};
