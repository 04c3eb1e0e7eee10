//! Foundational data structures, error types, and element type definitions.

pub mod element;
pub mod error;
pub mod models;
