//! Umbrella crate for the `dendrite-swc` workspace.
//!
//! Re-exports the stage crates and adds the per-segment pipeline: read a
//! branch table, convert every labeled segment to a rooted tree and write one
//! `<base>_filNN.swc` file per segment.

mod config;
mod error;
mod input;
mod pipeline;

pub use config::ConvertConfig;
pub use error::PipelineError;
pub use dn_backbone::*;
pub use dn_core::*;
pub use dn_graph::*;
pub use dn_swc::*;
pub use input::{BranchTable, parse_branch_table, read_branch_table};
pub use pipeline::{
    RunSummary, SegmentOutcome, SegmentReport, SegmentStatus, convert_segment, output_path,
    run_segments,
};
