use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use dn_core::{BranchRecord, NodeId};
use serde::Deserialize;

use crate::error::PipelineError;

/// Branch records grouped by segment label, each group in file order.
#[derive(Debug, Clone, Default)]
pub struct BranchTable {
    segments: BTreeMap<u32, Vec<BranchRecord>>,
}

impl BranchTable {
    pub fn push(&mut self, segment: u32, record: BranchRecord) {
        self.segments.entry(segment).or_default().push(record);
    }

    /// Records of `segment`; empty when the segment has none.
    pub fn records(&self, segment: u32) -> &[BranchRecord] {
        self.segments.get(&segment).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn segment_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.segments.keys().copied()
    }

    pub fn max_segment(&self) -> Option<u32> {
        self.segments.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Row layout of a skan-style branch summary. Image coordinates are in image
/// axis order; the third component is absent for planar skeletons.
#[derive(Debug, Deserialize)]
struct BranchRow {
    #[serde(rename = "segment-id", default = "first_segment")]
    segment: u32,
    #[serde(rename = "node-id-src")]
    src: NodeId,
    #[serde(rename = "node-id-dst")]
    dst: NodeId,
    #[serde(rename = "branch-distance")]
    length: f64,
    #[serde(rename = "image-coord-src-0")]
    src_0: f64,
    #[serde(rename = "image-coord-src-1")]
    src_1: f64,
    #[serde(rename = "image-coord-src-2", default)]
    src_2: Option<f64>,
    #[serde(rename = "image-coord-dst-0")]
    dst_0: f64,
    #[serde(rename = "image-coord-dst-1")]
    dst_1: f64,
    #[serde(rename = "image-coord-dst-2", default)]
    dst_2: Option<f64>,
}

fn first_segment() -> u32 {
    1
}

impl From<BranchRow> for (u32, BranchRecord) {
    fn from(row: BranchRow) -> Self {
        let mut src_coord = vec![row.src_0, row.src_1];
        src_coord.extend(row.src_2);
        let mut dst_coord = vec![row.dst_0, row.dst_1];
        dst_coord.extend(row.dst_2);

        (
            row.segment,
            BranchRecord::new(row.src, row.dst, row.length, src_coord, dst_coord),
        )
    }
}

pub fn read_branch_table(path: impl AsRef<Path>) -> Result<BranchTable, PipelineError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    collect_rows(rdr)
}

pub fn parse_branch_table<R: io::Read>(reader: R) -> Result<BranchTable, PipelineError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    collect_rows(rdr)
}

fn collect_rows<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<BranchTable, PipelineError> {
    let mut table = BranchTable::default();
    for row in rdr.deserialize::<BranchRow>() {
        let (segment, record): (u32, BranchRecord) = row?.into();
        table.push(segment, record);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::parse_branch_table;

    #[test]
    fn volumetric_table_groups_by_segment() {
        let csv = "\
segment-id,node-id-src,node-id-dst,branch-distance,image-coord-src-0,image-coord-src-1,image-coord-src-2,image-coord-dst-0,image-coord-dst-1,image-coord-dst-2
2,10,11,3.5,1,2,3,4,5,6
1,1,2,1.0,0,0,0,0,0,1
2,11,12,1.5,4,5,6,7,8,9
";
        let table = parse_branch_table(csv.as_bytes()).expect("valid table");
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_segment(), Some(2));
        assert_eq!(table.segment_ids().collect::<Vec<_>>(), vec![1, 2]);

        let seg2 = table.records(2);
        assert_eq!(seg2.len(), 2);
        assert_eq!(seg2[0].src, 10);
        assert_eq!(seg2[0].src_coord, vec![1.0, 2.0, 3.0]);
        assert_eq!(seg2[1].length, 1.5);
        assert!(table.records(7).is_empty());
    }

    #[test]
    fn planar_table_without_segment_column() {
        let csv = "\
node-id-src,node-id-dst,branch-distance,image-coord-src-0,image-coord-src-1,image-coord-dst-0,image-coord-dst-1
1,2,2.0,3,4,5,6
";
        let table = parse_branch_table(csv.as_bytes()).expect("valid table");
        assert_eq!(table.max_segment(), Some(1));
        let r = &table.records(1)[0];
        assert_eq!(r.src_coord, vec![3.0, 4.0]);
        assert_eq!(r.dst_coord, vec![5.0, 6.0]);
    }

    #[test]
    fn bad_number_is_reported() {
        let csv = "\
node-id-src,node-id-dst,branch-distance,image-coord-src-0,image-coord-src-1,image-coord-dst-0,image-coord-dst-1
1,2,long,3,4,5,6
";
        assert!(parse_branch_table(csv.as_bytes()).is_err());
    }
}
