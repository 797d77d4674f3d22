//! Fixed-precision average over the window

/// Rendered value for an empty window
pub const ZERO_AVERAGE: &str = "0.00";

/// Arithmetic mean rendered with exactly two decimals.
///
/// The sum is accumulated in `i128` so it cannot overflow. The mean is then
/// taken in `f64` and formatted with `{:.2}`, which rounds the exact binary
/// value half-to-even.
pub fn format_average(values: &[i64]) -> String {
    if values.is_empty() {
        return ZERO_AVERAGE.to_string();
    }

    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    let mean = sum as f64 / values.len() as f64;
    format!("{:.2}", mean)
}
