use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Utility for generating and probing the fixed-point Gaussian tables.
#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the full table file set.
    Gen {
        /// Directory the table files are written into.
        #[arg(long, default_value = "tables")]
        out: PathBuf,
    },
    /// Evaluate the density at a Q0.60 point.
    Value {
        /// Directory holding the table files.
        #[arg(long, default_value = "tables")]
        tables: PathBuf,
        /// The point, as a raw Q0.60 integer.
        x: i64,
        /// Also print the six Horner intermediates.
        #[arg(long)]
        steps: bool,
    },
    /// Evaluate the integral over a Q0.60 interval.
    Area {
        /// Directory holding the table files.
        #[arg(long, default_value = "tables")]
        tables: PathBuf,
        /// Left endpoint, as a raw Q0.60 integer.
        left: i64,
        /// Right endpoint, as a raw Q0.60 integer.
        right: i64,
    },
    /// Mean density over a Q0.60 interval, in Q32.
    Average {
        /// Directory holding the table files.
        #[arg(long, default_value = "tables")]
        tables: PathBuf,
        /// Left endpoint, as a raw Q0.60 integer.
        left: i64,
        /// Right endpoint, as a raw Q0.60 integer.
        right: i64,
    },
    /// Page through the records of a coefficient table.
    Segments {
        /// Directory holding the table files.
        #[arg(long, default_value = "tables")]
        tables: PathBuf,
        /// Which coefficient table to list.
        #[arg(long, value_enum)]
        kind: SegmentKind,
    },
    /// Report spline-fit error statistics (regenerates, needs no files).
    Stats,
}

/// The two coefficient tables.
#[derive(Clone, Copy, ValueEnum)]
pub enum SegmentKind {
    /// Cubic value-spline coefficients.
    Value,
    /// Quintic area-spline coefficients.
    Area,
}
