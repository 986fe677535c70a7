//! consultrack library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `db`: migrations and the SQLite email log store
//! - `validate`: schema checks for request bodies
//! - `tracker`: best-effort dispatch of tracking events
//! - `mailto`: consultation `mailto:` links and site constants
//! - `models`: typed records used across layers
//! - `error`: error types and their HTTP rendering
//! - `util`: logging setup

pub mod app;
pub mod db;
pub mod error;
pub mod http;
pub mod mailto;
pub mod models;
pub mod tracker;
pub mod util;
pub mod validate;
