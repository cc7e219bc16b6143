// tests/y_axis_formatting_test.rs

use omega_plot::plot_framework::{format_y_axis_label, y_label_precision};

#[test]
fn test_bias_range_uses_two_decimals() {
    // +/-0.08 rad/s: ticks are a few hundredths apart
    let precision = y_label_precision(&(-0.08..0.08));
    assert_eq!(precision, 2);
    assert_eq!(format_y_axis_label(-0.08, precision), "-0.08");
    assert_eq!(format_y_axis_label(0.04, precision), "0.04");
    assert_eq!(format_y_axis_label(0.0, precision), "0");
}

#[test]
fn test_euler_and_quaternion_ranges_use_one_decimal() {
    let euler = y_label_precision(&(-3.5..3.5));
    assert_eq!(euler, 1);
    assert_eq!(format_y_axis_label(-3.5, euler), "-3.5");
    assert_eq!(format_y_axis_label(2.0, euler), "2.0");

    let quaternion = y_label_precision(&(-1.2..1.2));
    assert_eq!(quaternion, 1);
    assert_eq!(format_y_axis_label(0.6, quaternion), "0.6");
}

#[test]
fn test_wide_ranges_use_integers() {
    let precision = y_label_precision(&(-100.0..100.0));
    assert_eq!(precision, 0);
    assert_eq!(format_y_axis_label(50.0, precision), "50");
}

#[test]
fn test_large_values_use_k_and_m_notation() {
    assert_eq!(format_y_axis_label(1000.0, 0), "1k");
    assert_eq!(format_y_axis_label(12500.0, 0), "12k");
    assert_eq!(format_y_axis_label(2_500_000.0, 0), "2.5M");
}

#[test]
fn test_degenerate_range_falls_back_to_one_decimal() {
    assert_eq!(y_label_precision(&(1.0..1.0)), 1);
    assert_eq!(y_label_precision(&(0.0..f64::INFINITY)), 1);
}
