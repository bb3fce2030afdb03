// Chart painting with plotters.
// Geometry comes from layout.rs; this file only draws.

use super::layout::{
    self, SlotSide, CAPTION_Y, DAY_LABEL_Y, FOOTER_SPAN, HEADER_SPAN, HOUR_LABEL_X, LEGEND_Y,
    TITLE_Y, X_PAD_LEFT, X_PAD_RIGHT, Y_MAX, Y_MIN,
};
use super::ChartInput;
use crate::models::day::DaySet;
use crate::models::plot::PlotInterval;
use crate::models::style::{ChartLayout, ChartStyle, FontWeight};
use crate::utils::color::parse_hex_or_gray;
use anyhow::{anyhow, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

const GRID_GRAY: RGBColor = RGBColor(128, 128, 128);
const TEXT_GRAY: RGBColor = RGBColor(51, 51, 51);
const LEGEND_BAND: RGBColor = RGBColor(240, 242, 246);

/// Data-coordinate drawing area: x in day slots, y in hours flowing
/// downward (the coordinate spec maps smaller hours to higher pixels).
type DataArea<DB> = DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Style inputs shared by every draw helper. `font` is `None` when font
/// provisioning failed; all text is skipped then and only the geometry
/// is painted.
pub(super) struct Frame<'a> {
    pub style: &'a ChartStyle,
    pub font: Option<&'a str>,
    pub px_per_pt: f64,
}

impl<'a> Frame<'a> {
    fn text_style(&self, size_pt: f32, weight: FontStyle, color: RGBColor) -> Option<TextStyle<'_>> {
        let family = self.font?;
        let font = FontDesc::new(
            FontFamily::Name(family),
            f64::from(size_pt) * self.px_per_pt,
            weight,
        );
        let mut style =
            TextStyle::from(font).pos(Pos::new(HPos::Center, VPos::Center));
        style.color = color.to_backend_color();
        Some(style)
    }

    fn weight(&self) -> FontStyle {
        match self.style.font_weight {
            FontWeight::Bold => FontStyle::Bold,
            FontWeight::Normal => FontStyle::Normal,
        }
    }

    /// 1 pt stroke in pixels, never thinner than one pixel.
    fn stroke(&self) -> u32 {
        self.px_per_pt.round().max(1.0) as u32
    }
}

pub(super) fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    input: &ChartInput<'_>,
    frame: &Frame<'_>,
    chart_layout: ChartLayout,
) -> Result<()> {
    match chart_layout {
        ChartLayout::Merged => draw_merged(root, input, frame),
        ChartLayout::SideBySide => {
            let panels = root.split_evenly((1, 2));
            for (index, panel) in panels.iter().enumerate() {
                draw_panel(
                    panel,
                    input.children[index],
                    input.intervals[index],
                    frame,
                    index == 0,
                )?;
            }
            Ok(())
        }
    }
}

fn draw_merged<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    input: &ChartInput<'_>,
    frame: &Frame<'_>,
) -> Result<()> {
    let day_set = DaySet::Weekdays;
    let area = data_area(root, day_set);

    draw_hour_grid(&area, day_set, frame)?;
    draw_day_separators(&area, day_set, frame)?;
    draw_hour_labels(&area, frame)?;
    draw_day_labels(&area, day_set, frame)?;

    // Later rows paint over earlier ones; same-child overlaps are not
    // resolved.
    draw_bars(&area, input.intervals[0], SlotSide::Left, frame)?;
    draw_bars(&area, input.intervals[1], SlotSide::Right, frame)?;

    draw_legend(&area, input, day_set, frame)?;

    let [first, second] = input.children;
    let title = format!("{} {} Weekly Timetable", first.icon, second.icon);
    draw_centered_text(
        &area,
        &title,
        (day_set.day_count() as f64 - 1.0) / 2.0,
        TITLE_Y,
        frame.text_style(frame.style.title_size, FontStyle::Bold, TEXT_GRAY),
    )?;

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    child: &crate::models::style::ChildProfile,
    intervals: &[PlotInterval],
    frame: &Frame<'_>,
    with_hour_labels: bool,
) -> Result<()> {
    let day_set = DaySet::FullWeek;
    let area = data_area(root, day_set);

    draw_hour_grid(&area, day_set, frame)?;
    draw_day_separators(&area, day_set, frame)?;
    if with_hour_labels {
        draw_hour_labels(&area, frame)?;
    }
    draw_day_labels(&area, day_set, frame)?;

    draw_bars(&area, intervals, SlotSide::Center, frame)?;

    let caption = format!("{} {}", child.icon, child.name);
    draw_centered_text(
        &area,
        &caption,
        (day_set.day_count() as f64 - 1.0) / 2.0,
        CAPTION_Y,
        frame.text_style(frame.style.title_size * 0.75, FontStyle::Bold, TEXT_GRAY),
    )?;

    Ok(())
}

/// Map the panel's pixels onto day-slot x and hour y coordinates. The y
/// range starts above `Y_MIN` so the header lands at the top; time then
/// flows downward.
fn data_area<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, day_set: DaySet) -> DataArea<DB> {
    let day_count = day_set.day_count() as f64;
    let x_range = (-0.5 - X_PAD_LEFT)..(day_count - 0.5 + X_PAD_RIGHT);
    let y_range = (Y_MIN - HEADER_SPAN)..(Y_MAX + FOOTER_SPAN);
    root.apply_coord_spec(Cartesian2d::new(
        RangedCoordf64::from(x_range),
        RangedCoordf64::from(y_range),
        root.get_pixel_range(),
    ))
}

fn draw_hour_grid<DB: DrawingBackend>(
    area: &DataArea<DB>,
    day_set: DaySet,
    frame: &Frame<'_>,
) -> Result<()> {
    let x_hi = day_set.day_count() as f64 - 0.5;
    for hour in (Y_MIN as i32)..=(Y_MAX as i32) {
        let y = f64::from(hour);
        area.draw(&PathElement::new(
            vec![(-0.5, y), (x_hi, y)],
            GRID_GRAY.mix(0.3).stroke_width(frame.stroke()),
        ))
        .map_err(|e| anyhow!("hour grid: {e}"))?;
    }
    Ok(())
}

fn draw_day_separators<DB: DrawingBackend>(
    area: &DataArea<DB>,
    day_set: DaySet,
    frame: &Frame<'_>,
) -> Result<()> {
    for slot in 0..day_set.day_count().saturating_sub(1) {
        let x = slot as f64 + 0.5;
        area.draw(&PathElement::new(
            vec![(x, Y_MIN), (x, Y_MAX)],
            GRID_GRAY.mix(0.3).stroke_width(frame.stroke()),
        ))
        .map_err(|e| anyhow!("day separator: {e}"))?;
    }
    Ok(())
}

fn draw_hour_labels<DB: DrawingBackend>(area: &DataArea<DB>, frame: &Frame<'_>) -> Result<()> {
    // Tick labels keep a fixed size; the style sliders only drive the
    // day labels and chart text, like the original axes did.
    let Some(style) = frame.text_style(10.0, FontStyle::Normal, TEXT_GRAY) else {
        return Ok(());
    };
    let style = style.pos(Pos::new(HPos::Right, VPos::Center));
    for hour in (Y_MIN as i32)..=(Y_MAX as i32) {
        area.draw(&Text::new(
            format!("{hour}"),
            (HOUR_LABEL_X, f64::from(hour)),
            style.clone(),
        ))
        .map_err(|e| anyhow!("hour label: {e}"))?;
    }
    Ok(())
}

fn draw_day_labels<DB: DrawingBackend>(
    area: &DataArea<DB>,
    day_set: DaySet,
    frame: &Frame<'_>,
) -> Result<()> {
    let Some(style) = frame.text_style(frame.style.axis_size, frame.weight(), TEXT_GRAY) else {
        return Ok(());
    };
    for (slot, label) in day_set.labels().iter().enumerate() {
        area.draw(&Text::new(
            (*label).to_string(),
            (slot as f64, DAY_LABEL_Y),
            style.clone(),
        ))
        .map_err(|e| anyhow!("day label: {e}"))?;
    }
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DataArea<DB>,
    intervals: &[PlotInterval],
    side: SlotSide,
    frame: &Frame<'_>,
) -> Result<()> {
    for interval in intervals {
        let bar = layout::bar_geometry(interval, side);
        let (r, g, b) = parse_hex_or_gray(&interval.color);
        let corners = [(bar.x0, bar.y0), (bar.x1, bar.y1)];

        area.draw(&Rectangle::new(corners, RGBColor(r, g, b).mix(0.9).filled()))
            .map_err(|e| anyhow!("bar fill: {e}"))?;
        area.draw(&Rectangle::new(corners, WHITE.stroke_width(frame.stroke())))
            .map_err(|e| anyhow!("bar edge: {e}"))?;

        if let Some(style) = frame.text_style(frame.style.bar_text_size, frame.weight(), WHITE) {
            area.draw(&Text::new(
                interval.label.clone(),
                (bar.x_center(), bar.label_y),
                style,
            ))
            .map_err(|e| anyhow!("bar label: {e}"))?;
        }
        if bar.show_time {
            if let Some(style) =
                frame.text_style(frame.style.time_text_size, FontStyle::Normal, WHITE)
            {
                area.draw(&Text::new(
                    interval.time_label.clone(),
                    (bar.x_center(), bar.time_y),
                    style,
                ))
                .map_err(|e| anyhow!("time label: {e}"))?;
            }
        }
    }
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    area: &DataArea<DB>,
    input: &ChartInput<'_>,
    day_set: DaySet,
    frame: &Frame<'_>,
) -> Result<()> {
    let x_hi = day_set.day_count() as f64 - 0.5;
    area.draw(&Rectangle::new(
        [(-0.5, LEGEND_Y - 0.28), (x_hi, LEGEND_Y + 0.28)],
        LEGEND_BAND.filled(),
    ))
    .map_err(|e| anyhow!("legend band: {e}"))?;

    let Some(style) = frame.text_style(frame.style.axis_size, FontStyle::Bold, TEXT_GRAY) else {
        return Ok(());
    };
    let [first, second] = input.children;
    let legend = format!(
        "◀ {} {} (left)   |   {} {} (right) ▶",
        first.icon, first.name, second.icon, second.name
    );
    area.draw(&Text::new(
        legend,
        (-0.4, LEGEND_Y),
        style.pos(Pos::new(HPos::Left, VPos::Center)),
    ))
    .map_err(|e| anyhow!("legend text: {e}"))?;

    Ok(())
}

fn draw_centered_text<DB: DrawingBackend>(
    area: &DataArea<DB>,
    text: &str,
    x: f64,
    y: f64,
    style: Option<TextStyle<'_>>,
) -> Result<()> {
    let Some(style) = style else {
        return Ok(());
    };
    area.draw(&Text::new(text.to_string(), (x, y), style))
        .map_err(|e| anyhow!("text: {e}"))?;
    Ok(())
}
