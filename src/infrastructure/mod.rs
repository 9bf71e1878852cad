//! Infrastructure layer - External service implementations

pub mod cache;
pub mod confluence;
pub mod logging;
