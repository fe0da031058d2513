//! Common types and error definitions for primitive_rrt

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
