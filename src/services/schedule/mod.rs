// Schedule expansion service
// Turns the user-edited row tables into plot-ready intervals

use crate::models::day::DaySet;
use crate::models::plot::{PlotInterval, RejectReason, RowOutcome};
use crate::models::schedule::ScheduleRow;
use crate::utils::color::DEFAULT_COLOR;

/// Expand every row into a tagged outcome, in row order.
///
/// Within one row, intervals follow the day-token order; there is no
/// cross-row sort. The function never fails: a malformed row becomes a
/// [`RowOutcome::Rejected`] and contributes zero intervals, since the
/// grid is mid-edit most of the time.
pub fn expand_schedule(rows: &[ScheduleRow], day_set: DaySet) -> Vec<RowOutcome> {
    rows.iter().map(|row| expand_row(row, day_set)).collect()
}

/// The renderer's view: valid intervals only, flattened in order.
pub fn plot_intervals(rows: &[ScheduleRow], day_set: DaySet) -> Vec<PlotInterval> {
    expand_schedule(rows, day_set)
        .into_iter()
        .flat_map(|outcome| match outcome {
            RowOutcome::Valid(intervals) => intervals,
            RowOutcome::Rejected(_) => Vec::new(),
        })
        .collect()
}

fn expand_row(row: &ScheduleRow, day_set: DaySet) -> RowOutcome {
    let activity = row.activity.trim();
    let days = row.days.trim();
    let start = row.start.trim();
    let end = row.end.trim();

    let required = [
        ("activity", activity),
        ("days", days),
        ("start", start),
        ("end", end),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return reject(activity, RejectReason::MissingField(field));
    }

    // Only `start` is gated on the ':' here. A colon-less `end` still
    // fails the integer parse below and drops the row all the same.
    if !start.contains(':') {
        return reject(activity, RejectReason::MissingColon);
    }

    let indices: Vec<usize> = days
        .split(',')
        .filter_map(|token| day_set.index_of(token))
        .collect();
    if indices.is_empty() {
        // No recognized tokens: nothing to draw, but the row itself is
        // not malformed. Times are never parsed in this case.
        return RowOutcome::Valid(Vec::new());
    }

    let (start_offset, end_offset) = match (parse_clock(start), parse_clock(end)) {
        (Some(start_offset), Some(end_offset)) => (start_offset, end_offset),
        _ => return reject(activity, RejectReason::BadTime),
    };

    // Negative when end precedes start; passed through unclamped.
    let duration = end_offset - start_offset;

    let color = row.color.trim();
    let color = if color.starts_with('#') {
        color.to_string()
    } else {
        DEFAULT_COLOR.to_string()
    };

    let time_label = format!("{start}~{end}");

    let intervals = indices
        .into_iter()
        .map(|day_index| PlotInterval {
            day_index,
            label: activity.to_string(),
            start_offset,
            duration,
            color: color.clone(),
            time_label: time_label.clone(),
        })
        .collect();

    RowOutcome::Valid(intervals)
}

fn reject(activity: &str, reason: RejectReason) -> RowOutcome {
    log::debug!("dropping row '{activity}': {reason}");
    RowOutcome::Rejected(reason)
}

/// Parse "H:M" into hours-since-midnight as a decimal.
///
/// Exactly two colon-separated fields, each an integer after trimming.
/// Values are not range-checked: "9:60" yields 10.0 exactly like the
/// plain integer arithmetic it replaces.
fn parse_clock(text: &str) -> Option<f64> {
    let mut parts = text.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let hours: i32 = hours.trim().parse().ok()?;
    let minutes: i32 = minutes.trim().parse().ok()?;

    Some(f64::from(hours) + f64::from(minutes) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn row(activity: &str, days: &str, start: &str, end: &str, color: &str) -> ScheduleRow {
        ScheduleRow::new(activity, days, start, end, color)
    }

    #[test]
    fn test_basic_expansion() {
        let rows = vec![row("School", "Mon,Wed", "09:00", "13:00", "#5D9CEC")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].day_index, 0);
        assert_eq!(intervals[1].day_index, 2);
        for interval in &intervals {
            assert_eq!(interval.label, "School");
            assert_eq!(interval.start_offset, 9.0);
            assert_eq!(interval.duration, 4.0);
            assert_eq!(interval.color, "#5D9CEC");
            assert_eq!(interval.time_label, "09:00~13:00");
        }
    }

    #[test_case("", "Mon", "09:00", "10:00" ; "empty activity")]
    #[test_case("School", "", "09:00", "10:00" ; "empty days")]
    #[test_case("School", "Mon", "", "10:00" ; "empty start")]
    #[test_case("School", "Mon", "09:00", "" ; "empty end")]
    fn test_empty_required_field_rejects_row(activity: &str, days: &str, start: &str, end: &str) {
        let rows = vec![row(activity, days, start, end, "#FF0000")];
        let outcomes = expand_schedule(&rows, DaySet::Weekdays);

        assert!(outcomes[0].is_rejected());
        assert!(plot_intervals(&rows, DaySet::Weekdays).is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let rows = vec![row("   ", "Mon", "09:00", "10:00", "")];
        assert!(expand_schedule(&rows, DaySet::Weekdays)[0].is_rejected());
    }

    #[test]
    fn test_start_without_colon_hits_the_colon_gate() {
        let rows = vec![row("School", "Mon", "0900", "10:00", "")];
        let outcomes = expand_schedule(&rows, DaySet::Weekdays);
        assert_eq!(
            outcomes[0],
            RowOutcome::Rejected(RejectReason::MissingColon)
        );
    }

    #[test]
    fn test_single_digit_hour_passes_the_colon_gate() {
        let rows = vec![row("School", "Mon", "9:00", "13:00", "")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_offset, 9.0);
        assert_eq!(intervals[0].time_label, "9:00~13:00");
    }

    #[test]
    fn test_end_without_colon_fails_at_parse_not_at_the_gate() {
        // The gate only checks `start`; the row still dies in the parse.
        let rows = vec![row("School", "Mon", "09:00", "1000", "")];
        let outcomes = expand_schedule(&rows, DaySet::Weekdays);
        assert_eq!(outcomes[0], RowOutcome::Rejected(RejectReason::BadTime));
    }

    #[test_case("ab:00", "10:00" ; "non numeric hour")]
    #[test_case("09:00", "10:xy" ; "non numeric minute")]
    #[test_case("09:00:30", "10:00" ; "three fields")]
    fn test_unparsable_time_rejects_whole_row(start: &str, end: &str) {
        let rows = vec![row("School", "Mon,Wed,Fri", start, end, "")];
        let outcomes = expand_schedule(&rows, DaySet::Weekdays);

        // One bad time abandons the row, not just one day token.
        assert_eq!(outcomes[0], RowOutcome::Rejected(RejectReason::BadTime));
    }

    #[test]
    fn test_unrecognized_tokens_are_dropped_silently() {
        let rows = vec![row("School", "Mon,Xyz", "09:00", "10:00", "")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].day_index, 0);
    }

    #[test]
    fn test_row_with_only_unrecognized_tokens_is_valid_but_empty() {
        // Times are never even parsed when no token resolves, so a bad
        // time cannot reject such a row.
        let rows = vec![row("School", "Xyz", "bad", "worse", "")];
        let outcomes = expand_schedule(&rows, DaySet::Weekdays);
        assert_eq!(outcomes[0], RowOutcome::Valid(Vec::new()));
    }

    #[test]
    fn test_empty_color_becomes_default_gray() {
        let rows = vec![row("School", "Mon", "09:00", "10:00", "")];
        assert_eq!(plot_intervals(&rows, DaySet::Weekdays)[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_hex_color_is_kept_verbatim() {
        let rows = vec![row("School", "Mon", "09:00", "10:00", "#FF0000")];
        assert_eq!(plot_intervals(&rows, DaySet::Weekdays)[0].color, "#FF0000");
    }

    #[test]
    fn test_non_hash_color_becomes_default_gray() {
        let rows = vec![row("School", "Mon", "09:00", "10:00", "red")];
        assert_eq!(plot_intervals(&rows, DaySet::Weekdays)[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_half_hours_become_decimals() {
        let rows = vec![row("Nap", "Tue", "14:30", "15:15", "")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        assert_eq!(intervals[0].start_offset, 14.5);
        assert_eq!(intervals[0].duration, 0.75);
    }

    #[test]
    fn test_end_before_start_yields_negative_duration() {
        // Deliberately preserved: no clamping, no rejection.
        let rows = vec![row("Backwards", "Mon", "14:00", "13:00", "")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        assert_eq!(intervals[0].duration, -1.0);
    }

    #[test]
    fn test_minutes_are_not_range_checked() {
        let rows = vec![row("Odd", "Mon", "9:60", "11:00", "")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        assert_eq!(intervals[0].start_offset, 10.0);
    }

    #[test]
    fn test_order_is_row_order_then_token_order() {
        let rows = vec![
            row("A", "Wed,Mon", "09:00", "10:00", ""),
            row("B", "Tue", "10:00", "11:00", ""),
        ];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        let order: Vec<(usize, &str)> = intervals
            .iter()
            .map(|i| (i.day_index, i.label.as_str()))
            .collect();

        // Token order within a row is preserved, not sorted.
        assert_eq!(order, vec![(2, "A"), (0, "A"), (1, "B")]);
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let rows = vec![
            row("School", "Mon,Wed", "09:00", "13:00", "#5D9CEC"),
            row("", "Mon", "09:00", "10:00", ""),
        ];
        let first = expand_schedule(&rows, DaySet::Weekdays);
        let second = expand_schedule(&rows, DaySet::Weekdays);
        assert_eq!(first, second);
    }
}
