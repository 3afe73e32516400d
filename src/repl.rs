//! Line protocol shared by the command line tools.
//!
//! Every tool reads one command per line from standard input. An SDR on the
//! wire is a whitespace-separated list of 1-based positions; internally all
//! indices are 0-based. The recognized line forms:
//!
//! | Line                        | Meaning                                  |
//! |-----------------------------|------------------------------------------|
//! | `i1 i2 … ip`                | query with this SDR                      |
//! | `i1 … ip , j1 … jq`         | dyadic store `x -> y`                    |
//! | `- i1 … ip , j1 … jq`       | dyadic delete                            |
//! | `{x1 … , y1 … , z1 …}`      | triadic store                            |
//! | `{_ , y… , z…}` etc.        | triadic query on the `_` axis            |
//! | `-{x… , y… , z…}`           | triadic delete                           |
//! | `random`                    | emit a fresh random SDR                  |
//! | `version`                   | emit `major.minor`                       |
//! | `help`                      | print usage                              |
//! | `quit`                      | terminate with exit 0                    |
//!
//! Parsing failures map to the numeric exit codes of
//! [`SdmError::exit_code`]; the binaries print the error and exit.

use std::io::{self, Write};

use crate::error::{Result, SdmError};
use crate::sdr::Sdr;

/// Axis selected by the `_` marker of a triadic query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One parsed input line.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    /// `quit`
    Quit,
    /// `version`
    Version,
    /// `help`
    Help,
    /// `random`
    Random,
    /// Bare SDR (possibly empty) - a query, or a temporal-memory step
    Query(Sdr),
    /// `x , y` - dyadic store
    Store(Sdr, Sdr),
    /// `- x , y` - dyadic delete
    Delete(Sdr, Sdr),
    /// `{x, y, z}` - triadic store
    TripleStore(Sdr, Sdr, Sdr),
    /// `-{x, y, z}` - triadic delete
    TripleDelete(Sdr, Sdr, Sdr),
    /// `{_, y, z}` / `{x, _, z}` / `{x, y, _}` - triadic query; the two
    /// SDRs are the given axes in tensor order
    TripleQuery(Axis, Sdr, Sdr),
}

/// The `major.minor` string emitted by the `version` command.
pub fn version_string() -> String {
    format!(
        "{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}

/// Print an SDR in wire format (1-based ascending positions) and flush.
pub fn print_sdr<W: Write>(out: &mut W, s: &Sdr) -> io::Result<()> {
    writeln!(out, "{}", s)?;
    out.flush()
}

/// Parse a whitespace-separated list of 1-based positions into an SDR of
/// dimension `n`.
pub fn parse_sdr(text: &str, n: usize) -> Result<Sdr> {
    let mut indices = Vec::new();
    for token in text.split_whitespace() {
        let position: i64 = token
            .parse()
            .map_err(|_| SdmError::UnparseableLine(text.trim().to_string()))?;
        if position < 1 || position as usize > n {
            return Err(SdmError::PositionOutOfRange {
                position,
                dimension: n,
            });
        }
        indices.push((position - 1) as usize);
    }
    Ok(Sdr::from_indices(n, &indices))
}

/// Parse one input line.
///
/// `nx` is the dimension of query/key SDRs, `ny` the dimension of the value
/// part of a dyadic store line (the tools with a single dimension pass the
/// same value twice).
pub fn parse_line(line: &str, nx: usize, ny: usize) -> Result<Line> {
    let trimmed = line.trim();

    match trimmed {
        "quit" => return Ok(Line::Quit),
        "version" => return Ok(Line::Version),
        "help" => return Ok(Line::Help),
        "random" => return Ok(Line::Random),
        _ => {}
    }

    if trimmed.starts_with('{') || trimmed.starts_with("-{") {
        return parse_triple(trimmed, nx);
    }

    let (delete, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = rest.split(',').collect();
    match (delete, parts.as_slice()) {
        (false, [x]) => Ok(Line::Query(parse_sdr(x, nx)?)),
        (false, [x, y]) => Ok(Line::Store(parse_sdr(x, nx)?, parse_sdr(y, ny)?)),
        (true, [x, y]) => Ok(Line::Delete(parse_sdr(x, nx)?, parse_sdr(y, ny)?)),
        _ => Err(SdmError::UnparseableLine(trimmed.to_string())),
    }
}

/// Parse a bracketed triple, `{x, y, z}` or `-{x, y, z}`, with `_` marking
/// at most one queried axis.
fn parse_triple(trimmed: &str, n: usize) -> Result<Line> {
    let (delete, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let body = rest
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .ok_or_else(|| SdmError::MalformedTriple(trimmed.to_string()))?;

    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 3 {
        return Err(SdmError::MalformedTriple(trimmed.to_string()));
    }

    let mut components: Vec<Option<Sdr>> = Vec::with_capacity(3);
    for part in &parts {
        if part.trim() == "_" {
            components.push(None);
        } else {
            components.push(Some(parse_sdr(part, n)?));
        }
    }
    let [x, y, z] = <[Option<Sdr>; 3]>::try_from(components)
        .map_err(|_| SdmError::MalformedTriple(trimmed.to_string()))?;

    match (delete, x, y, z) {
        (false, Some(x), Some(y), Some(z)) => Ok(Line::TripleStore(x, y, z)),
        (true, Some(x), Some(y), Some(z)) => Ok(Line::TripleDelete(x, y, z)),
        (false, None, Some(y), Some(z)) => Ok(Line::TripleQuery(Axis::X, y, z)),
        (false, Some(x), None, Some(z)) => Ok(Line::TripleQuery(Axis::Y, x, z)),
        (false, Some(x), Some(y), None) => Ok(Line::TripleQuery(Axis::Z, x, y)),
        _ => Err(SdmError::InvalidTripleQuery),
    }
}
