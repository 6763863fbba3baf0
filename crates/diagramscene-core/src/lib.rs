//! # DiagramScene Core
//!
//! Core types and utilities shared by the DiagramScene crates:
//! scene geometry, single-threaded shared-state aliases, constants
//! and the unified error type.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use types::{shared, Shared};
