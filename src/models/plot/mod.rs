// Plot module
// Plot-ready intervals derived from schedule rows

use std::fmt;

/// One renderable bar: a single activity occurring on a single day.
///
/// Recomputed from the row tables on every chart refresh; there is no
/// identity across refreshes and nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotInterval {
    /// Slot index on the day axis (Monday = 0).
    pub day_index: usize,
    /// Activity name, drawn inside the bar.
    pub label: String,
    /// Hours since midnight as a decimal, e.g. 14:30 becomes 14.5.
    pub start_offset: f64,
    /// End offset minus start offset. Negative when the end time precedes
    /// the start time; the renderer draws such bars in the reverse
    /// direction without any guard.
    pub duration: f64,
    /// Validated hex color string, or the default gray.
    pub color: String,
    /// Literal "start~end" reconstruction of the input strings, so
    /// whatever the user typed (leading zeros included) is shown verbatim.
    pub time_label: String,
}

impl PlotInterval {
    pub fn end_offset(&self) -> f64 {
        self.start_offset + self.duration
    }
}

/// Why a row was excluded from the expanded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A required text field was empty after trimming.
    MissingField(&'static str),
    /// The start field contains no ':' separator. The end field is not
    /// gated here; a colon-less end still fails the time parse below.
    MissingColon,
    /// Start or end did not parse as an "H:M" integer pair.
    BadTime,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingField(field) => write!(f, "empty required field `{field}`"),
            RejectReason::MissingColon => write!(f, "start time has no ':' separator"),
            RejectReason::BadTime => write!(f, "time is not an H:M integer pair"),
        }
    }
}

/// Tagged per-row result of the expansion step.
///
/// The renderer only consumes the valid intervals; rejections stay
/// available for diagnostics without changing the silent-skip default.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// One interval per recognized day token (possibly none, when every
    /// token was unrecognized).
    Valid(Vec<PlotInterval>),
    Rejected(RejectReason),
}

impl RowOutcome {
    pub fn intervals(&self) -> &[PlotInterval] {
        match self {
            RowOutcome::Valid(intervals) => intervals,
            RowOutcome::Rejected(_) => &[],
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, RowOutcome::Rejected(_))
    }
}
