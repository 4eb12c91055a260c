//! Shared utilities

pub mod fast_time;
pub mod time;
