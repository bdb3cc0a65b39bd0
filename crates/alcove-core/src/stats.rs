//! Dashboard counter helpers.

/// Percentage of `count` against `denominator`, as the dashboard widgets
/// display it. Integer arithmetic, deliberately unclamped: a count above the
/// denominator yields a value above 100.
pub fn percentage(count: i64, denominator: i64) -> i64 {
    count * 100 / denominator
}
