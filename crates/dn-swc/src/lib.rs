//! Rooted-tree conversion and the SWC interchange format.
//!
//! [`convert_to_tree`] walks a skeleton graph outward from its backbone and
//! numbers every node `1..=N` so that each record's parent precedes it.
//! [`write_swc`] renders records one per line:
//!
//! ```text
//! id kind x y [z] radius parent
//! ```
//!
//! with `kind` 0 for trunk and 1 for spine, and `parent` -1 for the root.
//! [`parse_swc`] reads the same format back and [`SwcTopology`] checks and
//! exposes the parent links.

mod convert;
mod read;
mod record;
mod topology;
mod write;

pub use convert::convert_to_tree;
pub use read::{parse_swc, read_swc};
pub use record::{StructureKind, TreeRecord};
pub use topology::SwcTopology;
pub use write::{format_record, render_swc, write_swc};
