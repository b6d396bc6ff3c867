pub mod api;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod responses;
pub mod shutdown;
pub mod telemetry;
