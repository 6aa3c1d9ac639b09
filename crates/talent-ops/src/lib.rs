pub mod config;
pub mod error;
pub mod table;
pub mod telemetry;
pub mod workforce;
