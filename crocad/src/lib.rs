//! # Crochet CAD
//!
//! Generates written crochet patterns for simple 3D shapes worked in the
//! round (spheres, tori).
//!
//! A pattern is derived in two steps:
//!
//! 1. A *curve generator* ([`shape::sphere`], [`shape::torus`]) turns shape
//!    parameters into the stitch count each round must have, by evaluating
//!    the shape's cross-section circumference per row and snapping it to a
//!    workable multiple of six.
//! 2. The *row generator* ([`pattern::rows`]) turns each consecutive pair of
//!    stitch counts into an [`InstructionGroup`] — a tree of typed
//!    instructions (plain runs, `sc2tog` decreases, `2sc into stitch`
//!    increases, repeated sub-groups) whose produced/consumed stitch counts
//!    always balance the two rounds exactly.
//!
//! The instruction tree renders to the familiar written notation:
//!
//! ```
//! use crocad::pattern::row;
//!
//! let group = row(Some(8), 11)?;
//! assert_eq!(group.stitches(), 11);
//! assert_eq!(group.stitches_into(), 8);
//! # Ok::<(), crocad::Error>(())
//! ```
//!
//! ## API Conventions
//!
//! * Stitch counts and instruction arities are unsigned (`u32`) — types
//!   express intent, so "negative stitch count" is unrepresentable rather
//!   than checked at runtime.
//! * Anything that can be handed an unworkable value (a zero rounding step,
//!   a decrease steeper than halving) returns [`Result`]; an incompatible
//!   merge between instructions is ordinary control flow and reports
//!   `false` instead.
//! * All computation is pure and synchronous; generated values are plain
//!   owned trees with no shared state.

pub mod error;
pub mod instruction;
pub mod pattern;
pub mod shape;
pub mod text;
pub mod util;

pub use error::{Error, Result};
pub use instruction::{
    Instruction, InstructionGroup, MultipleStitches, Run, Stitch, StitchTogether,
};
