// Common library for shared code across the API server and tooling

pub mod config;
pub mod db;
pub mod errors;
pub mod listing;
pub mod models;
pub mod telemetry;
