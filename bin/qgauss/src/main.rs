//! CLI utility for generating and probing the fixed-point Gaussian tables.

/// CLI arguments.
mod args;
/// Fixed-point rendering.
mod report;

use anyhow::Context;
use clap::Parser as _;
use colored::Colorize as _;
use eval::Engine;
use minus::Pager;
use std::fmt::Write as _;
use std::path::Path;
use tables::TableSet;

use crate::args::{Cli, Command, SegmentKind};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen { out } => generate(&out)?,
        Command::Value { tables, x, steps } => show_value(&tables, x, steps)?,
        Command::Area { tables, left, right } => show_area(&tables, left, right)?,
        Command::Average { tables, left, right } => show_average(&tables, left, right)?,
        Command::Segments { tables, kind } => list_segments(&tables, kind)?,
        Command::Stats => show_stats(),
    }

    Ok(())
}

/// Generates and writes the full table file set.
fn generate(out: &Path) -> anyhow::Result<()> {
    tablegen::emit::write_all(out)
        .with_context(|| format!("failed to write table files into `{}`", out.display()))?;
    println!("wrote value, area and dyadic-area tables into `{}`", out.display());
    Ok(())
}

/// Loads the table set for the probe commands.
fn load(dir: &Path) -> anyhow::Result<TableSet> {
    TableSet::load_dir(dir).context("failed to load tables")
}

/// Prints the density at a point, optionally with the Horner intermediates.
fn show_value(dir: &Path, x: i64, steps: bool) -> anyhow::Result<()> {
    let tables = load(dir)?;
    let schedule = Engine::new(&tables).value_with_steps(x);

    println!("x       {}", report::fxd(x, fixp::Q60_FRAC_BITS));
    if steps {
        for (position, step) in schedule.as_slice().iter().enumerate() {
            println!("step {}  {}", position + 1, report::fxd(*step, fixp::Q60_FRAC_BITS));
        }
    }
    println!("g(x)    {}", report::fxd(schedule.result(), fixp::Q60_FRAC_BITS).bold());
    Ok(())
}

/// Prints the integral over an interval in the unsigned Q1.63 view.
fn show_area(dir: &Path, left: i64, right: i64) -> anyhow::Result<()> {
    let tables = load(dir)?;

    #[allow(
        clippy::cast_sign_loss,
        reason = "areas of 1.0 and above are read in the unsigned Q1.63 view"
    )]
    let area = Engine::new(&tables).area(left, right) as u64;

    println!("left    {}", report::fxd(left, fixp::Q60_FRAC_BITS));
    println!("right   {}", report::fxd(right, fixp::Q60_FRAC_BITS));
    println!("area    {}", report::fxd_u(area, fixp::Q63_FRAC_BITS).bold());
    Ok(())
}

/// Prints the mean density over an interval, in Q32.
fn show_average(dir: &Path, left: i64, right: i64) -> anyhow::Result<()> {
    anyhow::ensure!(right > left, "the interval must have positive width");
    let tables = load(dir)?;

    #[allow(
        clippy::cast_sign_loss,
        reason = "areas of 1.0 and above are read in the unsigned Q1.63 view"
    )]
    let area = Engine::new(&tables).area(left, right) as u64;

    // Q1.63 mass over Q0.60 width; the eight-fold denominator aligns the
    // fractional formats. 128-bit division is a tool-side luxury the engine
    // itself never needs.
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "the mean of a density bounded by one fits Q32 easily"
    )]
    let average = {
        let width = u128::from((right - left) as u64) * 8;
        (((u128::from(area)) << 32) + width / 2) / width
    } as u64;

    println!("left     {}", report::fxd(left, fixp::Q60_FRAC_BITS));
    println!("right    {}", report::fxd(right, fixp::Q60_FRAC_BITS));
    println!("average  {}", report::fxd_u(average, 32).bold());
    Ok(())
}

/// Pages through the records of a coefficient table.
fn list_segments(dir: &Path, kind: SegmentKind) -> anyhow::Result<()> {
    let tables = load(dir)?;
    let mut pager = Pager::new();

    match kind {
        SegmentKind::Value => {
            for (index, segment) in tables.values.segments().iter().enumerate() {
                writeln!(pager, "{index:4}  {segment}").context("failed to render a record")?;
            }
        }
        SegmentKind::Area => {
            for (index, segment) in tables.areas.segments().iter().enumerate() {
                writeln!(pager, "{index:4}  {segment}").context("failed to render a record")?;
            }
        }
    }

    minus::page_all(pager).context("failed to display table records")?;
    Ok(())
}

/// Prints spline-fit error and coefficient statistics.
fn show_stats() {
    let fit = tablegen::stats::value_fit_report(64);
    let scale = 2f64.powi(32);

    println!("value splines: {}", fit.error.count());
    println!(
        "fit error in 2^-32 units: mean {:.3}, max {} at segment {}, stdev {:.3}",
        fit.error.mean() * scale,
        format!("{:.3}", fit.error.max() * scale).red().bold(),
        fit.error.max_index(),
        fit.error.std_dev() * scale,
    );
    for (name, item) in [("A", &fit.a), ("B", &fit.b), ("C", &fit.c), ("D", &fit.d)] {
        println!(
            "|{name}|: mean {:.6}, max {:.6} at segment {}",
            item.mean(),
            item.max(),
            item.max_index(),
        );
    }
}
