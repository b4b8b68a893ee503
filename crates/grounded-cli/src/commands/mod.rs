//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod scale;
#[cfg(feature = "native-viz")]
pub mod viz;
