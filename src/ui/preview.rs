// Chart preview panel
// Shows the rendered timetable and offers the image download

use super::TimetableApp;

impl TimetableApp {
    pub(super) fn show_preview_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("📊 Weekly preview");
            if ui.button("🖼 Save image").clicked() {
                self.export_chart_png();
            }
        });
        ui.add_space(4.0);

        self.refresh_chart(ui.ctx());

        if let Some(texture) = &self.chart_texture {
            let size = texture.size_vec2();
            let scale = (ui.available_width() / size.x).min(1.0);
            ui.add(egui::Image::from_texture(texture).fit_to_exact_size(size * scale));
        } else {
            ui.label("The chart could not be drawn. Fix the tables and edit any cell to retry.");
        }
    }
}
