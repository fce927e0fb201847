use super::*;

// =============================================================
// format_metric_value
// =============================================================

#[test]
fn time_values_render_as_seconds_with_two_decimals() {
    assert_eq!(format_metric_value(MetricKind::Time, 1234.0), "1.23s");
    assert_eq!(format_metric_value(MetricKind::Time, 500.0), "0.50s");
    assert_eq!(format_metric_value(MetricKind::Time, 0.0), "0.00s");
}

#[test]
fn time_ties_round_up_like_the_browser() {
    // 1.125, 1.375 and 9.875 are exact binary fractions, so these are true ties.
    assert_eq!(format_metric_value(MetricKind::Time, 1125.0), "1.13s");
    assert_eq!(format_metric_value(MetricKind::Time, 1375.0), "1.38s");
    assert_eq!(format_metric_value(MetricKind::Time, 9875.0), "9.88s");
}

#[test]
fn percent_values_are_floored_not_rounded() {
    assert_eq!(format_metric_value(MetricKind::Percent, 0.456), "45%");
    assert_eq!(format_metric_value(MetricKind::Percent, 0.999), "99%");
    assert_eq!(format_metric_value(MetricKind::Percent, 1.0), "100%");
    assert_eq!(format_metric_value(MetricKind::Percent, 0.0), "0%");
}

#[test]
fn number_values_pass_through_as_text() {
    assert_eq!(format_metric_value(MetricKind::Number, 7.0), "7");
    assert_eq!(format_metric_value(MetricKind::Number, 1.5), "1.5");
    assert_eq!(format_metric_value(MetricKind::Number, -3.0), "-3");
}

#[test]
fn formatting_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(format_metric_value(MetricKind::Time, 4321.0), "4.32s");
    }
}

// =============================================================
// format_number / to_fixed
// =============================================================

#[test]
fn format_number_handles_special_values() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn format_number_switches_to_exponent_outside_decimal_range() {
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e22), "-2.5e+22");
    assert_eq!(format_number(7e-7), "7e-7");
    assert_eq!(format_number(1.5e-10), "1.5e-10");
}

#[test]
fn format_number_stays_decimal_inside_range() {
    assert_eq!(format_number(1e-6), "0.000001");
    assert_eq!(format_number(123_456.0), "123456");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.25), "0.25");
}

#[test]
fn to_fixed_pads_and_carries() {
    assert_eq!(to_fixed(3.0, 2), "3.00");
    assert_eq!(to_fixed(0.995, 2), "0.99"); // 0.995 is stored slightly below the tie
    assert_eq!(to_fixed(99.996, 2), "100.00");
    assert_eq!(to_fixed(12.5, 0), "13");
}

#[test]
fn to_fixed_keeps_sign_for_negative_values() {
    assert_eq!(to_fixed(-1.125, 2), "-1.13");
    assert_eq!(to_fixed(-0.001, 2), "-0.00");
}

// =============================================================
// capitalize
// =============================================================

#[test]
fn capitalize_normalizes_case() {
    assert_eq!(capitalize(Some("joHN")), "John");
    assert_eq!(capitalize(Some("DOE")), "Doe");
    assert_eq!(capitalize(Some("a")), "A");
}

#[test]
fn capitalize_is_idempotent() {
    let once = capitalize(Some("mARIE"));
    assert_eq!(capitalize(Some(&once)), once);
}

#[test]
fn capitalize_missing_or_empty_yields_empty_string() {
    assert_eq!(capitalize(None), "");
    assert_eq!(capitalize(Some("")), "");
}

#[test]
fn capitalize_handles_non_ascii_first_letter() {
    assert_eq!(capitalize(Some("élodie")), "Élodie");
}
