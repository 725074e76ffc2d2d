//! Operations Console Client
//!
//! Client-side control layer for the analysis/simulation/innovation
//! dashboard: a single request gateway in front of the backend REST API, a
//! registry of named display targets, and interval-driven refresh loops.

pub mod config;
pub mod display;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod ops;
pub mod poller;

pub use error::{ApiError, Result};
