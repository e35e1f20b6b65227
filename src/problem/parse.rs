//! QAPLIB-style instance parsing.
//!
//! The text format is whitespace separated: the instance size n first,
//! then the n×n flow matrix, then the n×n distance matrix. Line breaks
//! and blank lines between sections are not significant.

use super::QapInstance;
use std::path::Path;

/// Parses an instance from QAPLIB-style text.
///
/// All load-time validation happens here (via [`QapInstance::new`]):
/// malformed sizes, missing values, negative or non-numeric entries are
/// rejected before any solver runs.
pub fn parse_instance(text: &str) -> Result<QapInstance, String> {
    let mut tokens = text.split_whitespace();

    let size_token = tokens.next().ok_or("empty instance text")?;
    let size: usize = size_token
        .parse()
        .map_err(|_| format!("invalid instance size: {size_token:?}"))?;

    let flow = parse_matrix(&mut tokens, size, "flow")?;
    let distance = parse_matrix(&mut tokens, size, "distance")?;

    QapInstance::new(size, flow, distance)
}

/// Reads an instance file from disk.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<QapInstance, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read instance file {}: {e}", path.display()))?;
    parse_instance(&text)
}

fn parse_matrix<'a, I>(tokens: &mut I, size: usize, name: &str) -> Result<Vec<Vec<u64>>, String>
where
    I: Iterator<Item = &'a str>,
{
    let mut rows = Vec::with_capacity(size);
    for row_index in 0..size {
        let mut row = Vec::with_capacity(size);
        for col_index in 0..size {
            let token = tokens.next().ok_or_else(|| {
                format!("{name} matrix ends early at row {row_index}, column {col_index}")
            })?;
            let value: u64 = token.parse().map_err(|_| {
                format!("{name} matrix entry ({row_index}, {col_index}) is not a non-negative integer: {token:?}")
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}
