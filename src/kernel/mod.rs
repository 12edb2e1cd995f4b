pub mod config;
pub mod directive;
pub mod error;
pub mod event;
pub mod reactor;
pub mod telemetry;
