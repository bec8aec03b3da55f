//! Plain-text wireframe listings.
//!
//! The format is a line-oriented listing with two sections:
//!
//! ```text
//! # Mesh Data Export
//! NODES 3
//! 0 0.0 0.0 0.0
//! 1 2.0 0.0 0.0
//! 2 1.0 1.5 0.0
//!
//! # Format: ELEM id type(0=Line,1=Arc) start_node end_node midX midY midZ
//! EDGES 3
//! 0 0 0 1 0 0 0
//! 1 1 1 2 1.8 1.0 0.0
//! 2 0 2 0 0 0 0
//! ```
//!
//! Blank lines and `#` comments are skipped. The `NODES`/`EDGES` header
//! counts are informational; sections end where the next header starts. The
//! leading id column is ignored on load and ids are reassigned densely, so
//! a listing with gaps still loads into a valid wireframe.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Result, WireError};
use crate::wire::{NodeId, Wireframe};

/// Load a wireframe from a text listing file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Wireframe> {
    let file = File::open(path)?;
    read(BufReader::new(file))
}

/// Save a wireframe to a text listing file.
pub fn save<P: AsRef<Path>>(wire: &Wireframe, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(wire, &mut writer)
}

enum Section {
    None,
    Nodes,
    Edges,
}

/// Read a wireframe listing from any buffered reader.
pub fn read<R: BufRead>(reader: R) -> Result<Wireframe> {
    let mut wire = Wireframe::new();
    let mut section = Section::None;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with("NODES") {
            section = Section::Nodes;
            continue;
        }
        if line.starts_with("EDGES") || line.starts_with("ELEMENTS") {
            section = Section::Edges;
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match section {
            Section::Nodes => parse_node(&mut wire, &parts, line_no)?,
            Section::Edges => parse_elem(&mut wire, &parts, line_no)?,
            Section::None => {
                return Err(WireError::Parse {
                    line: line_no,
                    message: format!("data before NODES/EDGES header: {:?}", line),
                })
            }
        }
    }
    Ok(wire)
}

/// Write a wireframe listing to any writer.
pub fn write<W: Write>(wire: &Wireframe, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Mesh Data Export")?;
    writeln!(writer, "# Format: NODE id x y z")?;
    writeln!(writer, "NODES {}", wire.num_nodes())?;
    for node in wire.nodes() {
        let p = node.position;
        writeln!(writer, "{} {} {} {}", node.id.index(), p.x, p.y, p.z)?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "# Format: ELEM id type(0=Line,1=Arc) start_node end_node midX midY midZ"
    )?;
    writeln!(writer, "EDGES {}", wire.num_elems())?;
    for elem in wire.elems() {
        let (ty, mid) = match elem.kind {
            crate::recon::EdgeKind::Straight => (0, Point3::origin()),
            crate::recon::EdgeKind::Arc(mid) => (1, mid),
        };
        writeln!(
            writer,
            "{} {} {} {} {} {} {}",
            elem.id.index(),
            ty,
            elem.start.index(),
            elem.end.index(),
            mid.x,
            mid.y,
            mid.z
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse a `id x y z` node line. The stored id is ignored.
fn parse_node(wire: &mut Wireframe, parts: &[&str], line: usize) -> Result<()> {
    if parts.len() < 4 {
        return Err(parse_error(line, "node line needs `id x y z`"));
    }
    let x = parse_f64(parts[1], line)?;
    let y = parse_f64(parts[2], line)?;
    let z = parse_f64(parts[3], line)?;
    wire.add_node(Point3::new(x, y, z));
    Ok(())
}

/// Parse a `id type start end [midX midY midZ]` element line.
fn parse_elem(wire: &mut Wireframe, parts: &[&str], line: usize) -> Result<()> {
    if parts.len() < 4 {
        return Err(parse_error(line, "element line needs `id type start end`"));
    }
    let ty = parse_usize(parts[1], line)?;
    let start = NodeId::new(parse_usize(parts[2], line)?);
    let end = NodeId::new(parse_usize(parts[3], line)?);

    match ty {
        0 => {
            wire.add_line(start, end);
        }
        1 => {
            if parts.len() < 7 {
                return Err(parse_error(line, "arc line needs `midX midY midZ`"));
            }
            let mx = parse_f64(parts[4], line)?;
            let my = parse_f64(parts[5], line)?;
            let mz = parse_f64(parts[6], line)?;
            wire.add_arc(start, end, Point3::new(mx, my, mz));
        }
        other => {
            return Err(parse_error(line, &format!("unknown element type {}", other)));
        }
    }
    Ok(())
}

fn parse_f64(s: &str, line: usize) -> Result<f64> {
    s.parse()
        .map_err(|_| parse_error(line, &format!("invalid number {:?}", s)))
}

fn parse_usize(s: &str, line: usize) -> Result<usize> {
    s.parse()
        .map_err(|_| parse_error(line, &format!("invalid index {:?}", s)))
}

fn parse_error(line: usize, message: &str) -> WireError {
    WireError::Parse {
        line,
        message: message.to_string(),
    }
}
