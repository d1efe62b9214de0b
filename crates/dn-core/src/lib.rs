//! Foundational primitives for converting skeleton branch graphs into
//! neuron-morphology trees.
//!
//! ## Node Identifiers
//! Skeleton nodes are identified by the integer ids assigned by the
//! skeletonization stage. Ids are unique per segment but need not be
//! contiguous; every stage keys on them directly.
//!
//! ## Coordinates
//! Branch records carry coordinates in image axis order (`z, y, x` for
//! volumes, `y, x` for planes). [`Coord`] stores the scaled coordinate in
//! output order (`x, y, z` or `x, y`), which is what the SWC format expects.
//!
//! ## Errors
//! [`Error`] covers malformed input and I/O failures. A backbone that is too
//! short is not an error; callers model it as a skip.

mod branch;
mod error;
mod geom;

pub use branch::{BranchRecord, NodeId};
pub use error::{Error, Result};
pub use geom::{Coord, Dimensionality};
