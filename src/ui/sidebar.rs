// Style sidebar
// Sliders, font weight, layout choice and the child profiles

use crate::models::style::{
    ChartLayout, ChildProfile, FontWeight, AXIS_SIZE_RANGE, BAR_TEXT_SIZE_RANGE,
    FIRST_CHILD_ICONS, SECOND_CHILD_ICONS, TIME_TEXT_SIZE_RANGE, TITLE_SIZE_RANGE,
};
use crate::services::config::AppConfig;

/// Show the style controls. Returns true when anything changed.
pub(super) fn show(ui: &mut egui::Ui, config: &mut AppConfig) -> bool {
    let mut changed = false;

    ui.heading("🎨 Design");
    ui.add_space(4.0);
    changed |= ui
        .add(egui::Slider::new(&mut config.style.title_size, TITLE_SIZE_RANGE).text("Title size"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut config.style.axis_size, AXIS_SIZE_RANGE).text("Day/legend size"))
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut config.style.bar_text_size, BAR_TEXT_SIZE_RANGE)
                .text("Activity text size"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut config.style.time_text_size, TIME_TEXT_SIZE_RANGE)
                .text("Time text size"),
        )
        .changed();

    ui.horizontal(|ui| {
        ui.label("Font weight");
        for weight in [FontWeight::Bold, FontWeight::Normal] {
            changed |= ui
                .radio_value(&mut config.style.font_weight, weight, weight.label())
                .changed();
        }
    });

    ui.separator();
    ui.heading("Layout");
    for layout in [ChartLayout::Merged, ChartLayout::SideBySide] {
        changed |= ui
            .radio_value(&mut config.layout, layout, layout.label())
            .changed();
    }

    ui.separator();
    ui.heading("Children");
    ui.add_space(4.0);
    changed |= child_editor(ui, 0, &mut config.first_child, &FIRST_CHILD_ICONS);
    changed |= child_editor(ui, 1, &mut config.second_child, &SECOND_CHILD_ICONS);

    changed
}

fn child_editor(
    ui: &mut egui::Ui,
    slot: usize,
    profile: &mut ChildProfile,
    icons: &[&str],
) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source(("child_icon", slot))
            .selected_text(profile.icon.clone())
            .width(52.0)
            .show_ui(ui, |ui| {
                for icon in icons {
                    changed |= ui
                        .selectable_value(&mut profile.icon, (*icon).to_string(), *icon)
                        .changed();
                }
            });
        changed |= ui.text_edit_singleline(&mut profile.name).changed();
    });

    changed
}
