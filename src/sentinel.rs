//! Resolution of raw `getmeasure` cells into metric values.
//!
//! # Zero means "no reading"
//!
//! The Netatmo API reports a bare `0` both when a module had nothing to report
//! and when the reading really was zero. Both resolve to `None` here. A genuine
//! 0° wind angle or calm wind is therefore indistinguishable from missing data.
//! Downstream consumers rely on this behaviour, so it is kept as is.

/// Resolve a cell for a fractional metric (temperature, pressure).
pub fn resolve_float(cell: Option<f64>) -> Option<f64> {
    cell.filter(|v| *v != 0.0)
}

/// Resolve a cell for an integral metric, truncating toward zero.
pub fn resolve_int(cell: Option<f64>) -> Option<i64> {
    // `as` saturates at the i64 bounds; JSON cannot carry NaN.
    resolve_float(cell).map(|v| v.trunc() as i64)
}
