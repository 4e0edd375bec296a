//! Fixed-point rendering for probe output.

/// Renders a signed fixed-point value as `raw = int.[frac] = float`.
///
/// The fractional part is the raw residue below the binary point, as in the
/// table-generation logs.
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    reason = "rendering shows the raw two's-complement split and an approximate float"
)]
pub fn fxd(value: i64, frac_bits: u32) -> String {
    let frac = (value as u64) & ((1u64 << frac_bits) - 1);
    format!(
        "{value} = {}.[{frac}] = {}",
        value >> frac_bits,
        value as f64 / 2f64.powi(frac_bits as i32)
    )
}

/// Renders an unsigned fixed-point bit pattern, for Q1.63 areas.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    reason = "rendering shows the raw split and an approximate float"
)]
pub fn fxd_u(value: u64, frac_bits: u32) -> String {
    let frac = value & ((1u64 << frac_bits) - 1);
    format!(
        "{value} = {}.[{frac}] = {}",
        value >> frac_bits,
        value as f64 / 2f64.powi(frac_bits as i32)
    )
}
