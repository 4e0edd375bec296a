//! Plain-text table-file loading.
//!
//! Coefficient files carry one `{ a, b, ... }` record per line, dyadic area
//! files one decimal integer per line; either form may end a line with a
//! trailing comma. Record counts are fixed by the layout constants and a
//! mismatch is a load failure, never a silent truncation.

use crate::area::{AreaSegment, AreaTable};
use crate::defs::{AREA_SEGMENT_COUNT, AREA_SPLINES_PER_UNIT, VALUE_SEGMENT_COUNT, VALUE_SPLINES_PER_UNIT};
use crate::dyadic::DyadicAreaTable;
use crate::scale::Scale;
use crate::value::{ValueSegment, ValueTable};
use fixp::{Q60_FRAC_BITS, Q63_FRAC_BITS};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

/// A failure to construct a table from its file.
///
/// Loading is the only fallible phase; constructed tables are infallible.
#[derive(Debug, Error)]
#[error("failed to load table `{}`: {reason}", .path.display())]
pub struct TableLoadError {
    /// The file that failed to load.
    pub path: PathBuf,
    /// What went wrong.
    pub reason: LoadErrorReason,
}

/// The ways a table file can fail to load.
#[derive(Debug, Error)]
pub enum LoadErrorReason {
    /// The file could not be read.
    #[error("not found: {0}")]
    NotFound(#[source] io::Error),

    /// A line did not parse as a record.
    #[error("line {line}: malformed record")]
    Parse {
        /// One-based line number of the offending record.
        line: usize,
    },

    /// The file held the wrong number of records.
    #[error("expected {expected} records, found {found}")]
    CountMismatch {
        /// Records the layout requires.
        expected: usize,
        /// Records the file held.
        found: usize,
    },
}

/// File name of the value-coefficient table.
///
/// # Example
/// ```
/// assert_eq!(qgauss_tables::load::value_coef_file_name(), "value_approx_coef_64spiu_60bit.data");
/// ```
#[must_use]
pub fn value_coef_file_name() -> String {
    format!("value_approx_coef_{VALUE_SPLINES_PER_UNIT}spiu_{Q60_FRAC_BITS}bit.data")
}

/// File name of the area-coefficient table.
#[must_use]
pub fn area_coef_file_name() -> String {
    format!("area_approx_coef_{AREA_SPLINES_PER_UNIT}spiu_{Q60_FRAC_BITS}bit.data")
}

/// File name of the dyadic area table at one scale.
///
/// # Example
/// ```
/// use qgauss_tables::Scale;
///
/// assert_eq!(qgauss_tables::load::dyadic_area_file_name(Scale::S4), "areas_63bit_scale_4.data");
/// ```
#[must_use]
pub fn dyadic_area_file_name(scale: Scale) -> String {
    format!("areas_{Q63_FRAC_BITS}bit_scale_{}.data", scale.index())
}

/// Loads the value-coefficient table.
///
/// # Errors
/// Returns a [`TableLoadError`] when the file is missing, a line is
/// malformed, or the record count is off.
pub fn load_value_table(path: &Path) -> Result<ValueTable, TableLoadError> {
    let records = load_records::<4>(path, VALUE_SEGMENT_COUNT)?;
    Ok(records
        .into_iter()
        .map(|[a, b, c, d]| ValueSegment { a, b, c, d })
        .collect::<Vec<_>>()
        .into())
}

/// Loads the area-coefficient table.
///
/// # Errors
/// Returns a [`TableLoadError`] when the file is missing, a line is
/// malformed, or the record count is off.
pub fn load_area_table(path: &Path) -> Result<AreaTable, TableLoadError> {
    let records = load_records::<6>(path, AREA_SEGMENT_COUNT)?;
    Ok(records
        .into_iter()
        .map(|[c1, c2, c3, c4, c5, c6]| AreaSegment { c1, c2, c3, c4, c5, c6 })
        .collect::<Vec<_>>()
        .into())
}

/// Loads the dyadic area table from its per-scale files in a directory.
///
/// # Errors
/// Returns a [`TableLoadError`] for the first scale file that is missing,
/// malformed, or the wrong length.
pub fn load_dyadic_table(dir: &Path) -> Result<DyadicAreaTable, TableLoadError> {
    let mut scales = Vec::with_capacity(Scale::ALL.len());
    for scale in Scale::iter() {
        let path = dir.join(dyadic_area_file_name(scale));
        scales.push(load_areas(&path, scale.segment_count())?);
    }
    Ok(DyadicAreaTable::new(scales))
}

/// Reads a coefficient file into fixed-width integer records.
fn load_records<const N: usize>(
    path: &Path,
    expected: usize,
) -> Result<Vec<[i64; N]>, TableLoadError> {
    let text = read(path)?;
    let mut records = Vec::with_capacity(expected);
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record::<N>(line).ok_or_else(|| TableLoadError {
            path: path.to_path_buf(),
            reason: LoadErrorReason::Parse { line: number + 1 },
        })?;
        records.push(record);
    }
    check_count(path, expected, records.len())?;
    Ok(records)
}

/// Reads a dyadic area file into unsigned Q1.63 entries.
fn load_areas(path: &Path, expected: usize) -> Result<Vec<u64>, TableLoadError> {
    let text = read(path)?;
    let mut areas = Vec::with_capacity(expected);
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let area = line.trim_end_matches(',').trim_end().parse().map_err(|_| TableLoadError {
            path: path.to_path_buf(),
            reason: LoadErrorReason::Parse { line: number + 1 },
        })?;
        areas.push(area);
    }
    check_count(path, expected, areas.len())?;
    Ok(areas)
}

/// Reads a table file, mapping every I/O failure to the load error.
fn read(path: &Path) -> Result<String, TableLoadError> {
    fs::read_to_string(path).map_err(|source| TableLoadError {
        path: path.to_path_buf(),
        reason: LoadErrorReason::NotFound(source),
    })
}

/// Fails with a count mismatch unless the record count is exact.
fn check_count(path: &Path, expected: usize, found: usize) -> Result<(), TableLoadError> {
    if expected == found {
        Ok(())
    } else {
        Err(TableLoadError {
            path: path.to_path_buf(),
            reason: LoadErrorReason::CountMismatch { expected, found },
        })
    }
}

/// Parses one `{ a, b, ... }` record line, tolerating a trailing comma.
fn parse_record<const N: usize>(line: &str) -> Option<[i64; N]> {
    let record = line.trim().trim_end_matches(',').trim_end();
    let inner = record.strip_prefix('{')?.strip_suffix('}')?;
    let mut fields = inner.split(',');
    let mut out = [0i64; N];
    for slot in &mut out {
        *slot = fields.next()?.trim().parse().ok()?;
    }
    fields.next().is_none().then_some(out)
}
