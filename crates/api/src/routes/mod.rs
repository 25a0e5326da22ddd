pub mod health;
pub mod railway;

pub use health::health_check;
pub use railway::{deployment, request_headers, RailwayState};
