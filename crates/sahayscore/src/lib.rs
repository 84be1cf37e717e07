//! SahayScore: loan-applicant scoring and workflow service.
//!
//! The library holds the deterministic scoring engine, the application
//! repository and notifier seams, the orchestration service, and the HTTP
//! router the dashboard talks to. Binaries live in `services/api`.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
