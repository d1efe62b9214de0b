use std::path::{Path, PathBuf};

use dn_core::{BranchRecord, Error};
use dn_graph::{build_graph, build_positions};
use dn_swc::{SwcTopology, TreeRecord, convert_to_tree, write_swc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ConvertConfig;
use crate::error::PipelineError;
use crate::input::BranchTable;

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentOutcome {
    Converted {
        records: Vec<TreeRecord>,
        backbone_nodes: usize,
    },
    /// Backbone too short to describe a dendrite; not an error.
    Skipped { nodes: usize, backbone_nodes: usize },
}

/// Runs one segment through graph building, backbone extraction and tree
/// conversion. Nothing is written.
pub fn convert_segment(
    records: &[BranchRecord],
    cfg: &ConvertConfig,
) -> Result<SegmentOutcome, Error> {
    debug!(records = records.len(), "build branch graph");
    let graph = build_graph(records);
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let positions = build_positions(records, cfg.scale, cfg.dims)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        strategy = %cfg.strategy,
        "extract backbone"
    );
    let backbone = cfg.strategy.extract(&graph);
    let backbone_nodes = backbone.node_count();
    if backbone.is_empty() || !backbone.is_usable(cfg.min_backbone_nodes) {
        return Ok(SegmentOutcome::Skipped {
            nodes: graph.node_count(),
            backbone_nodes,
        });
    }

    debug!(backbone_nodes, "relabel graph as tree");
    let tree = convert_to_tree(&graph, &backbone, &positions, cfg.radius)?;
    SwcTopology::from_records(&tree)?;

    Ok(SegmentOutcome::Converted {
        records: tree,
        backbone_nodes,
    })
}

/// `<base_name>_fil<NN>.swc` inside `out_dir`.
pub fn output_path(out_dir: &Path, base_name: &str, segment: u32) -> PathBuf {
    out_dir.join(format!("{base_name}_fil{segment:02}.swc"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStatus {
    Written,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub segment: u32,
    pub status: SegmentStatus,
    pub nodes: usize,
    pub backbone_nodes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub config: ConvertConfig,
    pub segments: Vec<SegmentReport>,
}

impl RunSummary {
    pub fn count(&self, status: SegmentStatus) -> usize {
        self.segments.iter().filter(|s| s.status == status).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SegmentReport> {
        self.segments
            .iter()
            .filter(|s| s.status == SegmentStatus::Failed)
    }
}

/// Converts segments `1..=max_segment` independently and in parallel. A
/// failing segment is reported and does not stop the others; only converted
/// segments produce a file.
pub fn run_segments(
    table: &BranchTable,
    max_segment: u32,
    out_dir: &Path,
    base_name: &str,
    cfg: &ConvertConfig,
) -> RunSummary {
    info!(max_segment, "creating .swc filament objects");

    let segments = (1..=max_segment)
        .into_par_iter()
        .map(|segment| process_segment(table.records(segment), segment, out_dir, base_name, cfg))
        .collect();

    RunSummary {
        config: cfg.clone(),
        segments,
    }
}

fn process_segment(
    records: &[BranchRecord],
    segment: u32,
    out_dir: &Path,
    base_name: &str,
    cfg: &ConvertConfig,
) -> SegmentReport {
    let mut report = SegmentReport {
        segment,
        status: SegmentStatus::Failed,
        nodes: 0,
        backbone_nodes: None,
        path: None,
        error: None,
    };

    let result = convert_segment(records, cfg).and_then(|outcome| match outcome {
        SegmentOutcome::Skipped {
            nodes,
            backbone_nodes,
        } => {
            info!(segment, backbone_nodes, "skeleton too short, skipping");
            report.status = SegmentStatus::Skipped;
            report.nodes = nodes;
            report.backbone_nodes = Some(backbone_nodes);
            Ok(())
        }
        SegmentOutcome::Converted {
            records,
            backbone_nodes,
        } => {
            let path = output_path(out_dir, base_name, segment);
            write_swc(&path, &records)?;
            info!(segment, nodes = records.len(), path = %path.display(), "wrote .swc file");
            report.status = SegmentStatus::Written;
            report.nodes = records.len();
            report.backbone_nodes = Some(backbone_nodes);
            report.path = Some(path);
            Ok(())
        }
    });

    if let Err(source) = result {
        let err = PipelineError::Segment { segment, source };
        warn!("{err}");
        report.error = Some(err.to_string());
    }

    report
}
