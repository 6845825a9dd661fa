//! Domain models
//!
//! This module contains the domain models used throughout the application.

pub mod benchmark;
pub mod container;

pub use benchmark::*;
pub use container::*;
