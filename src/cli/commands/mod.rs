//! CLI command implementations.

pub mod quote;
pub mod session;
pub mod size;
pub mod validate;
