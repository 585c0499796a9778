//! Decision Maker - yes/no answers for free-text questions.
//!
//! This crate exposes a single decision endpoint (`POST /api/decide`) backed
//! by a pluggable decision strategy, plus a client that drives a question
//! form's request lifecycle against that endpoint.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
