//! Table-file emission.
//!
//! Writers produce exactly the record formats the loaders in
//! [`tables::load`] consume: coefficient records in braces, dyadic areas as
//! bare decimals, comma-separated lines with no comma after the last
//! record.

use crate::{area_fit, areas, value_fit};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::Path;
use strum::IntoEnumIterator;
use tables::load::{area_coef_file_name, dyadic_area_file_name, value_coef_file_name};
use tables::Scale;

/// Joins records into comma-separated lines.
fn render<T: Display, I: IntoIterator<Item = T>>(records: I) -> String {
    let mut text = String::new();
    for record in records {
        if !text.is_empty() {
            text.push_str(",\n");
        }
        text.push_str(&record.to_string());
    }
    text.push('\n');
    text
}

/// Writes the value-coefficient table file into a directory.
///
/// # Errors
/// Returns any I/O error from writing the file.
pub fn write_value_coefficients(dir: &Path) -> io::Result<()> {
    fs::write(dir.join(value_coef_file_name()), render(value_fit::value_segments()))
}

/// Writes the area-coefficient table file into a directory.
///
/// # Errors
/// Returns any I/O error from writing the file.
pub fn write_area_coefficients(dir: &Path) -> io::Result<()> {
    fs::write(dir.join(area_coef_file_name()), render(area_fit::area_segments()))
}

/// Writes the eleven dyadic-area files into a directory.
///
/// # Errors
/// Returns any I/O error from writing a file.
pub fn write_dyadic_areas(dir: &Path) -> io::Result<()> {
    for (scale, entries) in Scale::iter().zip(areas::dyadic_scales()) {
        fs::write(dir.join(dyadic_area_file_name(scale)), render(entries))?;
    }
    Ok(())
}

/// Generates and writes the complete table file set.
///
/// # Errors
/// Returns any I/O error from creating the directory or writing a file.
pub fn write_all(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    write_value_coefficients(dir)?;
    write_area_coefficients(dir)?;
    write_dyadic_areas(dir)
}
