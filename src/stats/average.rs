use chrono::{DateTime, Utc};

use crate::stats::StatsError;

/// Compute the average interval in seconds between consecutive timestamps.
///
/// Gaps are taken in the order the sequence was supplied (typically newest
/// first, so individual gaps are negative), summed with their signs, and the
/// absolute value is taken once on the total. The divisor is the full element
/// count, not the gap count. Existing consumers depend on this exact output,
/// so neither step is corrected to a conventional mean of absolute gaps.
///
/// Returns `StatsError::DivisionByZero` for an empty sequence; callers are
/// expected to check for empty input first and show a placeholder instead.
pub fn average_interval(timestamps: &[DateTime<Utc>]) -> Result<f64, StatsError> {
    if timestamps.is_empty() {
        return Err(StatsError::DivisionByZero);
    }

    let mut total_ms: i64 = 0;
    for pair in timestamps.windows(2) {
        total_ms += (pair[1] - pair[0]).num_milliseconds();
    }

    Ok(total_ms.abs() as f64 / 1000.0 / timestamps.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn empty_sequence_is_division_by_zero() {
        assert_eq!(average_interval(&[]), Err(StatsError::DivisionByZero));
    }

    #[test]
    fn single_timestamp_averages_to_zero() {
        assert_eq!(average_interval(&[ts(1_364_000_000)]), Ok(0.0));
    }

    #[test]
    fn two_timestamps_divide_by_count_not_gap_count() {
        // Descending order as the source delivers them: the newer post first.
        let result = average_interval(&[ts(1_000_100), ts(1_000_000)]).unwrap();
        assert_eq!(result, 50.0);
    }

    #[test]
    fn opposing_gaps_cancel_before_the_final_abs() {
        // +100 then -100 sums to zero before abs is applied.
        let result = average_interval(&[ts(1_000_000), ts(1_000_100), ts(1_000_000)]).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn duplicate_timestamps_do_not_fail() {
        let t = ts(1_000_000);
        assert_eq!(average_interval(&[t, t, t]), Ok(0.0));
    }

    #[test]
    fn order_is_not_resorted() {
        // Shuffled input: gaps are -200 and +300, total 100, abs 100, / 3.
        let result = average_interval(&[ts(1_000_200), ts(1_000_000), ts(1_000_300)]).unwrap();
        assert!((result - 100.0 / 3.0).abs() < 1e-9);
    }
}
