//! Matrix-file loader: whitespace-separated text, a `VERSION WIDTH DEPTH`
//! header followed by `DEPTH` rows of `WIDTH` integers.
use std::path::Path;

use coxlex_ir::CoxeterMatrix;
use coxlex_utils::{CoxResult, Error, MAX_GENERATORS};

/// Read and parse a matrix file from disk.
pub fn load_matrix_file(path: &Path) -> CoxResult<CoxeterMatrix> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::malformed_input(format!(
            "could not open matrix file {}: {e}",
            path.display()
        ))
    })?;
    parse_matrix_text(&text)
}

/// Parse matrix-file text already read into memory.
pub fn parse_matrix_text(text: &str) -> CoxResult<CoxeterMatrix> {
    let mut lines = text.lines().enumerate();

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| Error::malformed_input("empty matrix file"))?;
    let header_fields: Vec<&str> = header.split_whitespace().collect();
    if header_fields.len() != 3 {
        return Err(Error::malformed_input(
            "info line must be `VERSION WIDTH DEPTH`",
        )
        .with_line(header_no + 1));
    }
    let parse_field = |s: &str| -> CoxResult<usize> {
        s.parse::<usize>().map_err(|_| {
            Error::malformed_input(format!("`{s}` is not a non-negative integer"))
                .with_line(header_no + 1)
        })
    };
    let _version = parse_field(header_fields[0])?;
    let width = parse_field(header_fields[1])?;
    let depth = parse_field(header_fields[2])?;

    if width != depth {
        return Err(Error::malformed_input(format!(
            "WIDTH ({width}) must equal DEPTH ({depth})"
        ))
        .with_line(header_no + 1));
    }
    if width == 0 || width > MAX_GENERATORS {
        return Err(Error::malformed_input(format!(
            "matrix dimension {width} must be between 1 and {MAX_GENERATORS}"
        ))
        .with_line(header_no + 1));
    }

    let mut rows = Vec::with_capacity(depth);
    for expected_row in 0..depth {
        let (line_no, line) = lines.next().ok_or_else(|| {
            Error::malformed_input(format!(
                "expected {depth} rows, file ended after {expected_row}"
            ))
        })?;
        let entries: Vec<u32> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<u32>().map_err(|_| {
                    Error::malformed_input(format!(
                        "`{tok}` is not a non-negative integer"
                    ))
                    .with_line(line_no + 1)
                })
            })
            .collect::<CoxResult<_>>()?;
        if entries.len() != width {
            return Err(Error::malformed_input(format!(
                "row {expected_row} has {} entries, expected {width}",
                entries.len()
            ))
            .with_line(line_no + 1));
        }
        rows.push(entries);
    }

    if let Some((line_no, line)) =
        lines.find(|(_, line)| !line.trim().is_empty())
    {
        return Err(Error::malformed_input(format!(
            "unexpected extra row after {depth} declared rows: `{line}`"
        ))
        .with_line(line_no + 1));
    }

    CoxeterMatrix::new(rows)
}
