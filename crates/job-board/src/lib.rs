//! Job board core: an immutable posting catalog, the listing filter that
//! narrows it, and the save/apply actions available to job seekers.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
