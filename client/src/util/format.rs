//! Display formatting for metric values and user identity fields.
//!
//! DESIGN
//! ======
//! Graph labels must read the same as the rest of the product, so number
//! rendering follows browser conventions: half-way ties round away from zero
//! and whole numbers print without a fractional part.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::state::audit_results::MetricKind;

/// Format a raw metric value for display according to its kind.
///
/// `Time` values are milliseconds shown as seconds, `Percent` values are
/// ratios floored to a whole percent.
pub fn format_metric_value(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::Time => format!("{}s", to_fixed(value / 1000.0, 2)),
        MetricKind::Percent => format!("{}%", format_number((value * 100.0).floor())),
        MetricKind::Number => format_number(value),
    }
}

/// Render a number the way a browser stringifies it.
///
/// Magnitudes from 1e-6 up to 1e21 print in plain decimal notation, anything
/// outside that range in exponent form with an explicit `+` on positive
/// exponents.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        // Negative zero prints as "0".
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponential = format!("{value:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
            _ => exponential,
        };
    }
    format!("{value}")
}

/// Fixed-point rendering with `digits` decimals, ties rounded away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    // Exact decimal expansion well past the rounding digit.
    let expanded = format!("{:.*}", digits + 30, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');

    if round_up {
        let mut idx = kept.len();
        loop {
            if idx == 0 {
                kept.insert(0, 1);
                break;
            }
            idx -= 1;
            if kept[idx] == 9 {
                kept[idx] = 0;
            } else {
                kept[idx] += 1;
                break;
            }
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// Upper-case the first character and lower-case the rest.
///
/// Missing names render as an empty string.
pub fn capitalize(word: Option<&str>) -> String {
    let Some(word) = word else {
        return String::new();
    };
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
