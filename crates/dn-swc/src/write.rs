use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::record::TreeRecord;

/// One SWC line without the trailing newline. Numbers use their shortest
/// round-tripping decimal form.
pub fn format_record(r: &TreeRecord) -> String {
    let mut line = format!("{} {}", r.id, r.kind.code());
    for c in r.coord.components() {
        let _ = write!(line, " {c}");
    }
    let _ = write!(line, " {} {}", r.radius, r.parent_code());
    line
}

pub fn render_swc(records: &[TreeRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&format_record(r));
        out.push('\n');
    }
    out
}

/// Writes `records` to `path`, replacing any existing file.
pub fn write_swc(path: impl AsRef<Path>, records: &[TreeRecord]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for r in records {
        writeln!(w, "{}", format_record(r))?;
    }
    w.flush()
}
