//! statboard: a small self-hosted viewer for a precomputed analytics
//! document. An external producer publishes `analytics.json`; statboard
//! fetches it, shifts the hourly message histogram into the viewer's
//! timezone, and serves the summary as an HTML dashboard and a JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod state;
pub mod upstream;
