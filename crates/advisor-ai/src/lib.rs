//! Domain library for the AI adoption advisor service.
//!
//! The `workflows` tree holds the catalog, assessment, recommendation, and
//! dashboard modules; `config`, `telemetry`, and `error` carry the shared
//! application plumbing used by the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
