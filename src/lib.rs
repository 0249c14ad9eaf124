pub mod app;
pub mod avatar;
pub mod config;
pub mod routes;
pub mod telemetry;
