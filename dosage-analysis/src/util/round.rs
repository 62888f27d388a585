//! Fixed-decimal rounding.
//!
//! Every subcomponent rounds its outputs through this single helper so
//! golden-output tests stay bit-stable across ports. The rule is
//! round-half-away-from-zero, applied as `round(value * 10^n) / 10^n`.

/// Round `value` to `decimals` decimal places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
