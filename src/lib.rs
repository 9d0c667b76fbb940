pub mod app_state;
pub mod config;
pub mod detector;
pub mod docs;
pub mod health;
pub mod http;
pub mod notifications;
pub mod provider;
pub mod telemetry;
