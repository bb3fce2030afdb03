// Schedule grid editor
// Add/remove/edit rows; validation happens later, in the expansion step

use crate::models::schedule::ScheduleRow;
use crate::utils::color::to_color32;
use egui_extras::{Column, TableBuilder};

/// Show the editable grid for one child's table. Returns true when any
/// cell changed, so the caller can mark the chart dirty.
///
/// Cells accept anything; transiently invalid rows simply vanish from
/// the chart until they parse again.
pub(super) fn show(ui: &mut egui::Ui, rows: &mut Vec<ScheduleRow>) -> bool {
    let mut changed = false;
    let mut remove: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::initial(170.0).at_least(110.0))
        .column(Column::initial(70.0))
        .column(Column::initial(70.0))
        .column(Column::initial(110.0))
        .column(Column::exact(26.0))
        .header(22.0, |mut header| {
            for title in ["Activity", "Days", "Start", "End", "Color", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (index, row_data) in rows.iter_mut().enumerate() {
                body.row(26.0, |mut table_row| {
                    table_row.col(|ui| {
                        changed |= ui.text_edit_singleline(&mut row_data.activity).changed();
                    });
                    table_row.col(|ui| {
                        changed |= ui.text_edit_singleline(&mut row_data.days).changed();
                    });
                    table_row.col(|ui| {
                        changed |= ui.text_edit_singleline(&mut row_data.start).changed();
                    });
                    table_row.col(|ui| {
                        changed |= ui.text_edit_singleline(&mut row_data.end).changed();
                    });
                    table_row.col(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(
                            egui::vec2(14.0, 14.0),
                            egui::Sense::hover(),
                        );
                        ui.painter()
                            .rect_filled(swatch, 2.0, to_color32(&row_data.color));
                        changed |= ui.text_edit_singleline(&mut row_data.color).changed();
                    });
                    table_row.col(|ui| {
                        if ui.button("🗑").on_hover_text("Remove row").clicked() {
                            remove = Some(index);
                        }
                    });
                });
            }
        });

    if let Some(index) = remove {
        rows.remove(index);
        changed = true;
    }

    ui.add_space(4.0);
    if ui.button("➕ Add activity").clicked() {
        rows.push(ScheduleRow::blank());
        changed = true;
    }

    changed
}
