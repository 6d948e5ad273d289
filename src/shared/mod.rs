/// Shared kernel - Error types, limits and common aliases used by every layer
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
