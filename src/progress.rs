use anyhow::{Result, ensure};

/// Pit stop duration that fills the whole duration bar; longer stops clamp
/// so the bar never overflows its track.
pub const PIT_DURATION_CEILING_MS: f64 = 25_000.0;

/// Fraction of `ceiling` covered by `value`, clamped into [0, 1]. Negative
/// values clamp to 0. A non-positive ceiling is a configuration bug, not
/// absent data, and fails fast.
pub fn normalize(value: f64, ceiling: f64) -> Result<f64> {
    ensure!(ceiling > 0.0, "progress ceiling must be > 0, got {ceiling}");
    Ok((value.max(0.0) / ceiling).min(1.0))
}

/// Same scale in percent, for width-style consumers.
pub fn percent(value: f64, ceiling: f64) -> Result<f64> {
    Ok(normalize(value, ceiling)? * 100.0)
}
