//! Unit tests for the MACD line/signal/histogram series

use klinex::indicators::macd_series;

fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn line_needs_the_slow_seed_window() {
    let closes = rising_closes(25);
    let series = macd_series(&closes, 12, 26, 9);
    assert_eq!(series.latest_line(), None);

    let closes = rising_closes(26);
    let series = macd_series(&closes, 12, 26, 9);
    assert!(series.latest_line().is_some());
    assert_eq!(series.latest_signal(), None);
    assert_eq!(series.latest_histogram(), None);
}

#[test]
fn signal_needs_nine_defined_line_values() {
    // First line value at index 25, ninth at index 33.
    let closes = rising_closes(33);
    let series = macd_series(&closes, 12, 26, 9);
    assert_eq!(series.latest_signal(), None);

    let closes = rising_closes(34);
    let series = macd_series(&closes, 12, 26, 9);
    assert!(series.latest_signal().is_some());
    assert!(series.latest_histogram().is_some());
}

#[test]
fn constant_closes_produce_zero_macd() {
    let closes = vec![100.0; 40];
    let series = macd_series(&closes, 12, 26, 9);

    assert!(series.latest_line().unwrap().abs() < 1e-9);
    assert!(series.latest_signal().unwrap().abs() < 1e-9);
    assert!(series.latest_histogram().unwrap().abs() < 1e-9);
}

#[test]
fn sustained_uptrend_keeps_histogram_positive() {
    let closes = rising_closes(40);
    let series = macd_series(&closes, 12, 26, 9);

    let line = series.latest_line().unwrap();
    let histogram = series.latest_histogram().unwrap();
    assert!(line > 0.0, "fast EMA should lead in an uptrend, line {line}");
    assert!(histogram > 0.0, "signal line should lag, histogram {histogram}");
}

#[test]
fn series_are_aligned_to_input_length() {
    let closes = rising_closes(50);
    let series = macd_series(&closes, 12, 26, 9);
    assert_eq!(series.line.len(), closes.len());
    assert_eq!(series.signal.len(), closes.len());
    assert_eq!(series.histogram.len(), closes.len());
}

#[test]
fn previous_histogram_reads_the_penultimate_element() {
    let closes = rising_closes(40);
    let series = macd_series(&closes, 12, 26, 9);
    assert_eq!(
        series.previous_histogram(),
        series.histogram[series.histogram.len() - 2]
    );

    let short = macd_series(&rising_closes(1), 12, 26, 9);
    assert_eq!(short.previous_histogram(), None);
}
