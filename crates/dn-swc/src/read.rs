use std::fs;
use std::path::Path;

use dn_core::{Coord, Dimensionality, Error, Result};

use crate::record::{StructureKind, TreeRecord};

/// Reads an SWC file written by [`crate::write_swc`].
pub fn read_swc(path: impl AsRef<Path>) -> Result<Vec<TreeRecord>> {
    let text = fs::read_to_string(path)?;
    parse_swc(&text)
}

/// Parses SWC text. Lines with six fields are planar, seven are volumetric;
/// all records of one file must agree. Blank lines and `#` comments are
/// skipped.
pub fn parse_swc(text: &str) -> Result<Vec<TreeRecord>> {
    let mut out = Vec::new();
    let mut dims: Option<Dimensionality> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = i + 1;
        let malformed = |reason: String| Error::MalformedSwc {
            line: lineno,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let n_coord = fields.len().saturating_sub(4);
        let line_dims = Dimensionality::from_components(n_coord).ok_or_else(|| {
            malformed(format!("expected 6 or 7 fields, got {}", fields.len()))
        })?;
        match dims {
            None => dims = Some(line_dims),
            Some(d) if d != line_dims => {
                return Err(malformed(format!(
                    "record is {line_dims} but earlier records are {d}"
                )));
            }
            Some(_) => {}
        }

        let id: usize = parse_field(fields[0], "id").map_err(&malformed)?;
        if id == 0 {
            return Err(malformed("id must be positive".to_string()));
        }
        let code: u8 = parse_field(fields[1], "kind").map_err(&malformed)?;
        let kind = StructureKind::from_code(code)
            .ok_or_else(|| malformed(format!("unknown structure kind {code}")))?;

        let mut components = Vec::with_capacity(n_coord);
        for f in &fields[2..2 + n_coord] {
            components.push(parse_field::<f64>(f, "coordinate").map_err(&malformed)?);
        }
        let coord = Coord::from_components(&components)
            .ok_or_else(|| malformed("bad coordinate".to_string()))?;

        let radius: f64 = parse_field(fields[2 + n_coord], "radius").map_err(&malformed)?;
        let parent_code: i64 = parse_field(fields[3 + n_coord], "parent").map_err(&malformed)?;
        let parent = match parent_code {
            -1 => None,
            p if p > 0 => Some(p as usize),
            p => return Err(malformed(format!("invalid parent id {p}"))),
        };

        out.push(TreeRecord {
            id,
            kind,
            coord,
            radius,
            parent,
        });
    }

    Ok(out)
}

fn parse_field<T: std::str::FromStr>(field: &str, what: &str) -> std::result::Result<T, String> {
    field
        .parse()
        .map_err(|_| format!("cannot parse {what} from '{field}'"))
}
