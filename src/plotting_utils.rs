// src/plotting_utils.rs

use ndarray::Array2;
use ndarray_stats::QuantileExt;
use plotters::style::RGBColor;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Range for a log axis: one decade of padding below the smallest positive
/// value and a factor of two above the largest. Falls back to 0.1..10.
pub fn calculate_log_range(min_val: f64, max_val: f64) -> (f64, f64) {
    if !(min_val > 0.0 && max_val > 0.0 && min_val.is_finite() && max_val.is_finite()) {
        return (0.1, 10.0);
    }
    let lo = 10f64.powi(min_val.min(max_val).log10().floor() as i32);
    let hi = max_val.max(min_val) * 2.0;
    (lo, hi)
}

/// `n` points spaced evenly on a log scale from 10^start_exp to 10^end_exp.
pub fn logspace(start_exp: f64, end_exp: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exp)],
        _ => {
            let step = (end_exp - start_exp) / (n - 1) as f64;
            (0..n)
                .map(|i| 10f64.powf(start_exp + step * i as f64))
                .collect()
        }
    }
}

/// Min and max of the finite cells, or None when no cell is finite.
pub fn finite_min_max(values: &Array2<f64>) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let finite = values.mapv(|v| if v.is_finite() { v } else { f64::NAN });
    match (finite.min_skipnan(), finite.max_skipnan()) {
        (min, max) if min.is_finite() && max.is_finite() => Some((*min, *max)),
        _ => None,
    }
}

/// Color scale limits for a grid: the finite min and max, widened with
/// [`calculate_range`] when they coincide, or 0..1 when no cell is finite.
pub fn colormap_limits(values: &Array2<f64>) -> (f64, f64) {
    match finite_min_max(values) {
        Some((min, max)) if max > min => (min, max),
        Some((min, max)) => calculate_range(min, max),
        None => (0.0, 1.0),
    }
}

/// Map a value onto the viridis colormap between `min_val` and `max_val`.
pub fn map_value_to_color(value: f64, min_val: f64, max_val: f64) -> RGBColor {
    if !value.is_finite() || !min_val.is_finite() || !max_val.is_finite() {
        return RGBColor(0, 0, 0);
    }

    // Ensure span is non-zero to avoid division by zero
    let span = (max_val - min_val).abs().max(1e-9);
    let t = ((value.clamp(min_val, max_val) - min_val) / span).clamp(0.0, 1.0);

    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Cell annotation text: two decimals.
pub fn format_cell_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Format with `significant` significant digits, switching to exponent
/// notation for very small or large magnitudes (like C's `%g`).
pub fn format_general(value: f64, significant: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let significant = significant.max(1);
    let sci = format!("{:.*e}", significant - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Axis tick label formatter, compact for large and small magnitudes.
pub fn format_tick_value(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if abs >= 1000.0 {
        format!("{:.0}k", v / 1000.0)
    } else if abs == 0.0 || v.fract() == 0.0 {
        format!("{v:.0}")
    } else if abs < 0.1 {
        format_general(v, 2)
    } else {
        trim_trailing_zeros(&format!("{v:.2}")).to_string()
    }
}
