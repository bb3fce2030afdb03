// Schedule module
// User-editable weekly activity rows

use crate::utils::color::DEFAULT_COLOR;

/// One recurring activity as the user typed it into the grid.
///
/// All fields are free text on purpose: the grid passes through many
/// transient invalid states while being typed, and validation happens in
/// the expansion step, never here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleRow {
    /// Activity label, e.g. "School".
    pub activity: String,
    /// Comma-separated day tokens, e.g. "Mon,Wed,Fri".
    pub days: String,
    /// Start of the activity as "HH:MM" 24-hour text.
    pub start: String,
    /// End of the activity as "HH:MM" 24-hour text.
    pub end: String,
    /// Hex color text starting with '#'; anything else falls back to gray.
    pub color: String,
}

impl ScheduleRow {
    pub fn new(
        activity: impl Into<String>,
        days: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            activity: activity.into(),
            days: days.into(),
            start: start.into(),
            end: end.into(),
            color: color.into(),
        }
    }

    /// Fresh row for the grid's add button, color pre-filled with the
    /// default gray like the grid's color column default.
    pub fn blank() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            ..Self::default()
        }
    }
}

/// Starter table for the first child.
pub fn starter_first_child() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("School", "Mon,Tue,Wed,Thu,Fri", "09:00", "13:00", "#5D9CEC"),
        ScheduleRow::new("Art Class", "Mon,Wed,Fri", "14:00", "16:00", "#FB6E52"),
    ]
}

/// Starter table for the second child.
pub fn starter_second_child() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("Kindergarten", "Mon,Tue,Wed,Thu,Fri", "09:30", "13:30", "#FFCE54"),
        ScheduleRow::new("Taekwondo", "Tue,Thu", "15:00", "16:00", "#AC92EC"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_row_has_default_color() {
        let row = ScheduleRow::blank();
        assert_eq!(row.color, DEFAULT_COLOR);
        assert!(row.activity.is_empty());
        assert!(row.days.is_empty());
    }

    #[test]
    fn test_starter_tables_are_non_empty() {
        assert_eq!(starter_first_child().len(), 2);
        assert_eq!(starter_second_child().len(), 2);
    }
}
