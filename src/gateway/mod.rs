//! Request gateway and failure policy

pub mod client;
pub mod policy;

pub use client::{ApiGateway, RequestOptions};
pub use policy::{FailurePolicy, LogNotifier, Notice, Notifier, PolicyTable};
