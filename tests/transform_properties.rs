// Property-based tests for the schedule expansion
// Random tables, including garbage, must never panic and must expand
// deterministically

use family_timetable::models::day::DaySet;
use family_timetable::models::schedule::ScheduleRow;
use family_timetable::services::schedule::{expand_schedule, plot_intervals};
use proptest::prelude::*;

/// Free-form text the way a grid cell can hold it, including empty.
fn any_cell() -> impl Strategy<Value = String> {
    "[ -~]{0,16}"
}

/// A syntactically valid "H:M" clock string.
fn clock() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// A non-empty days field built from recognized weekday tokens.
fn weekday_tokens() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof!["Mon", "Tue", "Wed", "Thu", "Fri"], 1..5)
        .prop_map(|tokens| tokens.join(","))
}

proptest! {
    /// Any input at all: expansion never panics and is deterministic.
    #[test]
    fn prop_expansion_is_total_and_deterministic(
        cells in proptest::collection::vec(
            (any_cell(), any_cell(), any_cell(), any_cell(), any_cell()),
            0..8,
        )
    ) {
        let rows: Vec<ScheduleRow> = cells
            .into_iter()
            .map(|(activity, days, start, end, color)| {
                ScheduleRow::new(activity, days, start, end, color)
            })
            .collect();

        let first = expand_schedule(&rows, DaySet::Weekdays);
        let second = expand_schedule(&rows, DaySet::Weekdays);
        prop_assert_eq!(first, second);

        // One outcome per row, whatever the row contained.
        prop_assert_eq!(expand_schedule(&rows, DaySet::Weekdays).len(), rows.len());
    }

    /// Well-formed rows emit exactly one interval per recognized token.
    #[test]
    fn prop_valid_rows_emit_one_interval_per_token(
        activity in "[A-Za-z][A-Za-z ]{0,10}",
        days in weekday_tokens(),
        start in clock(),
        end in clock(),
    ) {
        let token_count = days.split(',').count();
        let rows = vec![ScheduleRow::new(activity, days, start, end, "#5D9CEC")];
        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        prop_assert_eq!(intervals.len(), token_count);
    }

    /// Duration is always end minus start, sign included.
    #[test]
    fn prop_duration_is_end_minus_start(
        start_h in 0u32..24, start_m in 0u32..60,
        end_h in 0u32..24, end_m in 0u32..60,
    ) {
        let start = format!("{start_h:02}:{start_m:02}");
        let end = format!("{end_h:02}:{end_m:02}");
        let rows = vec![ScheduleRow::new("Activity", "Mon", start, end, "")];

        let intervals = plot_intervals(&rows, DaySet::Weekdays);
        let expected = (f64::from(end_h) + f64::from(end_m) / 60.0)
            - (f64::from(start_h) + f64::from(start_m) / 60.0);
        prop_assert!((intervals[0].duration - expected).abs() < 1e-9);
    }

    /// A row missing its activity never emits, whatever else it holds.
    #[test]
    fn prop_empty_activity_always_rejects(
        days in any_cell(),
        start in any_cell(),
        end in any_cell(),
    ) {
        let rows = vec![ScheduleRow::new("  ", days, start, end, "#FF0000")];
        prop_assert!(plot_intervals(&rows, DaySet::Weekdays).is_empty());
    }

    /// Output colors are always a '#'-prefixed string: either the row's
    /// own hex text or the default gray.
    #[test]
    fn prop_output_color_always_starts_with_hash(
        color in any_cell(),
        days in weekday_tokens(),
    ) {
        let rows = vec![ScheduleRow::new("Activity", days, "09:00", "10:00", color)];
        for interval in plot_intervals(&rows, DaySet::Weekdays) {
            prop_assert!(interval.color.starts_with('#'));
        }
    }
}
