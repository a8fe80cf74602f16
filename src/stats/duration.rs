/// Convert a seconds count to a larger-unit composite string.
///
/// Fractional input is truncated toward zero. Zero seconds renders as the
/// literal "0 secs"; anything else decomposes into weeks, days, hours,
/// minutes and seconds, printing only the non-zero units, largest first,
/// separated by single spaces. Negative input is not supported.
pub fn format_seconds(secs: f64) -> String {
    let mut secs = secs as i64;

    if secs == 0 {
        return "0 secs".to_string();
    }

    let mut mins: i64 = 0;
    let mut hours: i64 = 0;
    let mut days: i64 = 0;
    let mut weeks: i64 = 0;

    if secs >= 60 {
        mins = secs / 60;
        secs %= 60;
    }

    if mins >= 60 {
        hours = mins / 60;
        mins %= 60;
    }

    if hours >= 24 {
        days = hours / 24;
        // Leftover hours are reduced modulo 60, not 24. Downstream output
        // depends on this exact breakdown, so it stays as-is.
        // TODO: confirm with consumers whether this should be % 24 before
        // changing the rendered strings.
        hours %= 60;
    }

    if days >= 7 {
        weeks = days / 7;
        days %= 7;
    }

    let mut clauses = Vec::new();

    if weeks != 0 {
        clauses.push(format!("{} week(s)", weeks));
    }
    if days != 0 {
        clauses.push(format!("{} day(s)", days));
    }
    if hours != 0 {
        clauses.push(format!("{} hour(s)", hours));
    }
    if mins != 0 {
        clauses.push(format!("{} min(s)", mins));
    }
    if secs != 0 {
        clauses.push(format!("{} sec(s)", secs));
    }

    clauses.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_literal() {
        assert_eq!(format_seconds(0.0), "0 secs");
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(format_seconds(0.9), "0 secs");
        assert_eq!(format_seconds(45.7), "45 sec(s)");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(format_seconds(45.0), "45 sec(s)");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_seconds(125.0), "2 min(s) 5 sec(s)");
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(format_seconds(3661.0), "1 hour(s) 1 min(s) 1 sec(s)");
    }

    #[test]
    fn leftover_hours_reduce_modulo_sixty() {
        // 90000 s = 25 h: one day extracted, the remaining 25 % 60 = 25 hours
        // survive in the output.
        assert_eq!(format_seconds(90000.0), "1 day(s) 25 hour(s)");
    }

    #[test]
    fn exact_week() {
        // 604800 s = 168 h: days = 7, leftover hours = 168 % 60 = 48.
        assert_eq!(format_seconds(604800.0), "1 week(s) 48 hour(s)");
    }

    #[test]
    fn zero_units_are_omitted_and_no_trailing_space() {
        let rendered = format_seconds(3600.0);
        assert_eq!(rendered, "1 hour(s)");
        assert!(!rendered.ends_with(' '));
    }
}
