//! Command handlers orchestrating domain operations over the ports.

pub mod coaching;
