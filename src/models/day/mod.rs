// Day module
// Recognized day-token set and its fixed index mapping

use chrono::Weekday;
use std::str::FromStr;

/// The set of days a chart layout recognizes.
///
/// Tokens resolve through [`chrono::Weekday`] parsing, so `"Mon"`,
/// `"monday"` and `"MONDAY"` all map to index 0. Tokens outside the set
/// (typos, weekend days in `Weekdays` mode) resolve to `None` and are
/// dropped by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaySet {
    /// Monday through Friday, indices 0-4 (merged chart).
    #[default]
    Weekdays,
    /// Monday through Sunday, indices 0-6 (side-by-side charts).
    FullWeek,
}

static FULL_WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl DaySet {
    /// Number of day slots on the horizontal axis.
    pub fn day_count(&self) -> usize {
        match self {
            DaySet::Weekdays => 5,
            DaySet::FullWeek => 7,
        }
    }

    /// Axis labels, one per slot, Monday first.
    pub fn labels(&self) -> &'static [&'static str] {
        &FULL_WEEK_LABELS[..self.day_count()]
    }

    /// Resolve one day token to its slot index, if recognized.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        let weekday = Weekday::from_str(token.trim()).ok()?;
        let index = weekday.num_days_from_monday() as usize;
        (index < self.day_count()).then_some(index)
    }
}
