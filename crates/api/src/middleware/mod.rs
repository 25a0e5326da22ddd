// API Middleware
//
// This module contains custom middleware for the API layer.
// The Railway headers middleware parses the edge proxy headers once per
// request and makes them available to route handlers.

pub mod railway_headers;

// Re-export commonly used items
pub use railway_headers::{headers_from_extensions, railway_headers_middleware};
