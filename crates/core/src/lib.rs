//! Core types for peak-catalog
//!
//! This crate contains domain types shared across all other crates.

mod env_config;
mod mountain;

pub use env_config::*;
pub use mountain::*;
