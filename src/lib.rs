//! Kokoro Compass - AI Executive Coach
//!
//! This crate serves a single-page coaching application: a management
//! challenge plus a selected consulting framework in, a consultation
//! (demo, live, or error placeholder) out.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
