//! # BoxKit Core
//!
//! Core types and utilities shared by the BoxKit cut-path tools:
//!
//! - **Geometry**: immutable 2D [`Point`] and [`Segment`] value types with the
//!   polar/mirror/angle operations the cut compilers are built on
//! - **Rail sequences**: cumulative-sum coordinate builders used to lay out
//!   panel boundaries and corner-saver offsets
//! - **Validation**: the pure [`Validate`] trait configuration types implement
//!   so callers can check parameters before any geometry is emitted

pub mod geometry;
pub mod validate;

pub use geometry::rail::{summation_sequence, symmetric_mirrored_summation_sequence};
pub use geometry::{deg2rad, rotated_size, Point, Segment};
pub use validate::{Validate, ValidationError};
