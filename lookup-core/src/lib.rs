//! Core library for the `lookup` CLI.
//!
//! This crate defines:
//! - Configuration for the backend endpoint
//! - The record source abstraction and its HTTP implementation
//! - The lookup view-state machine (input, fetching flag, error, result)
//! - Shared domain models (the stored weather record)
//!
//! It is used by `lookup-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use client::{HttpRecordSource, RecordSource};
pub use config::Config;
pub use error::LookupError;
pub use model::{CurrentConditions, Place, RecordPayload, RequestContext, WeatherRecord, WeatherReport};
pub use view::{LookupView, Submission, ViewState};
