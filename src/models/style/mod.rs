// Style module
// Chart styling knobs, layout choice and child profiles

use crate::models::day::DaySet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slider ranges exposed by the sidebar.
pub const TITLE_SIZE_RANGE: RangeInclusive<f32> = 15.0..=40.0;
pub const AXIS_SIZE_RANGE: RangeInclusive<f32> = 10.0..=25.0;
pub const BAR_TEXT_SIZE_RANGE: RangeInclusive<f32> = 5.0..=20.0;
pub const TIME_TEXT_SIZE_RANGE: RangeInclusive<f32> = 5.0..=15.0;

/// Avatar choices, fixed per child slot.
pub const FIRST_CHILD_ICONS: [&str; 4] = ["🐶", "🐱", "🐰", "👦"];
pub const SECOND_CHILD_ICONS: [&str; 4] = ["🐥", "🐹", "🦊", "👧"];

/// Weight applied to the title, axis and bar labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Bold,
    Normal,
}

impl FontWeight {
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontWeight::Bold => "Bold",
            FontWeight::Normal => "Normal",
        }
    }
}

/// Font sizes (in points) and weight for the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub title_size: f32,
    pub axis_size: f32,
    pub bar_text_size: f32,
    pub time_text_size: f32,
    pub font_weight: FontWeight,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title_size: 24.0,
            axis_size: 14.0,
            bar_text_size: 10.0,
            time_text_size: 8.0,
            font_weight: FontWeight::Bold,
        }
    }
}

/// How the two children's intervals are presented.
///
/// Both layouts consume identical interval data; they are interchangeable
/// rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartLayout {
    /// One 5-day chart, both children side by side within each day slot.
    #[default]
    Merged,
    /// Two full-width 7-day charts sharing the vertical time axis.
    SideBySide,
}

impl ChartLayout {
    pub fn day_set(&self) -> DaySet {
        match self {
            ChartLayout::Merged => DaySet::Weekdays,
            ChartLayout::SideBySide => DaySet::FullWeek,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartLayout::Merged => "Merged week",
            ChartLayout::SideBySide => "Side by side",
        }
    }
}

/// Display name and avatar for one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub name: String,
    pub icon: String,
}

impl ChildProfile {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    pub fn first_default() -> Self {
        Self::new("Hamin", FIRST_CHILD_ICONS[0])
    }

    pub fn second_default() -> Self {
        Self::new("Hayul", SECOND_CHILD_ICONS[3])
    }
}
