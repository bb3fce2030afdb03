// Application shell
// Owns the tables, the config and the chart state

use super::{editor, sidebar, toast::ToastManager};
use crate::models::schedule::{self, ScheduleRow};
use crate::services::chart::{self, ChartInput, ChartRenderer};
use crate::services::config::AppConfig;
use crate::services::csv::CsvTableService;
use crate::services::font;
use crate::services::schedule::plot_intervals;

pub struct TimetableApp {
    /// Style, layout and profiles, persisted across launches.
    pub(super) config: AppConfig,
    /// One schedule table per child. Only the pipeline reads these; they
    /// are never persisted except through explicit CSV export.
    pub(super) tables: [Vec<ScheduleRow>; 2],
    pub(super) selected_child: usize,
    /// Rendered preview; replaced whenever any pipeline input changes.
    pub(super) chart_texture: Option<egui::TextureHandle>,
    pub(super) chart_dirty: bool,
    pub(super) toasts: ToastManager,
    csv: CsvTableService,
    chart_font: Option<&'static str>,
}

impl TimetableApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load_or_default();
        // One-time, memoized; a failure only disables chart text.
        let chart_font = font::chart_font();

        Self {
            config,
            tables: [
                schedule::starter_first_child(),
                schedule::starter_second_child(),
            ],
            selected_child: 0,
            chart_texture: None,
            chart_dirty: true,
            toasts: ToastManager::new(),
            csv: CsvTableService::new(),
            chart_font,
        }
    }

    fn show_editor_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for child in 0..2 {
                let profile = self.config.child(child);
                let label = format!("{} {}", profile.icon, profile.name);
                if ui
                    .selectable_label(self.selected_child == child, label)
                    .clicked()
                {
                    self.selected_child = child;
                }
            }
        });
        ui.add_space(4.0);

        let child = self.selected_child;
        ui.push_id(child, |ui| {
            if editor::show(ui, &mut self.tables[child]) {
                self.chart_dirty = true;
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("📂 Load CSV…").clicked() {
                self.import_table(child);
            }
            if ui.button("💾 Save CSV…").clicked() {
                self.export_table(child);
            }
        });
    }

    /// Re-run the transform+render pipeline when an input changed. The
    /// pipeline is a pure function of the tables and the config; the
    /// dirty flag is the only state between runs.
    pub(super) fn refresh_chart(&mut self, ctx: &egui::Context) {
        if !self.chart_dirty {
            return;
        }
        self.chart_dirty = false;

        let day_set = self.config.layout.day_set();
        let left = plot_intervals(&self.tables[0], day_set);
        let right = plot_intervals(&self.tables[1], day_set);
        let input = ChartInput {
            children: [&self.config.first_child, &self.config.second_child],
            intervals: [&left, &right],
        };
        let renderer = ChartRenderer::new(&self.config.style, self.config.layout)
            .with_font(self.chart_font);

        match renderer.render_rgb(&input, chart::PREVIEW_SIZE) {
            Ok(rgb) => {
                let (width, height) = chart::PREVIEW_SIZE;
                let image =
                    egui::ColorImage::from_rgb([width as usize, height as usize], &rgb);
                self.chart_texture = Some(ctx.load_texture(
                    "timetable-chart",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(err) => {
                log::error!("chart render failed: {err:#}");
                self.chart_texture = None;
                self.toasts.error("Could not draw the timetable");
            }
        }
    }

    pub(super) fn export_chart_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save timetable image")
            .set_file_name("family_timetable.png")
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };

        let day_set = self.config.layout.day_set();
        let left = plot_intervals(&self.tables[0], day_set);
        let right = plot_intervals(&self.tables[1], day_set);
        let input = ChartInput {
            children: [&self.config.first_child, &self.config.second_child],
            intervals: [&left, &right],
        };
        let renderer = ChartRenderer::new(&self.config.style, self.config.layout)
            .with_font(self.chart_font);

        let result = renderer
            .render_png(&input, chart::EXPORT_SIZE)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));
        match result {
            Ok(()) => {
                log::info!("saved timetable image to {}", path.display());
                self.toasts.success("Saved timetable image");
            }
            Err(err) => {
                log::error!("failed to save timetable image: {err:#}");
                self.toasts.error("Could not save the image");
            }
        }
    }

    fn import_table(&mut self, child: usize) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Load schedule data")
            .add_filter("CSV files", &["csv"])
            .pick_file()
        else {
            return;
        };

        match self.csv.import_from_path(&path) {
            Ok(rows) => {
                log::info!("loaded {} rows from {}", rows.len(), path.display());
                self.tables[child] = rows;
                self.chart_dirty = true;
                self.toasts.success("Schedule loaded");
            }
            Err(err) => {
                // The current table stays untouched on any import failure.
                log::error!("failed to import {}: {err}", path.display());
                self.toasts.error("File format error");
            }
        }
    }

    fn export_table(&mut self, child: usize) {
        let name = &self.config.child(child).name;
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save schedule data")
            .set_file_name(format!("{name}_schedule_data.csv"))
            .add_filter("CSV files", &["csv"])
            .save_file()
        else {
            return;
        };

        match self.csv.export_to_path(&self.tables[child], &path) {
            Ok(()) => {
                log::info!("saved schedule data to {}", path.display());
                self.toasts.success("Schedule saved");
            }
            Err(err) => {
                log::error!("failed to export {}: {err:#}", path.display());
                self.toasts.error("Could not save the file");
            }
        }
    }
}

impl eframe::App for TimetableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("style_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                if sidebar::show(ui, &mut self.config) {
                    self.chart_dirty = true;
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_editor_section(ui);
                ui.separator();
                self.show_preview_section(ui);
            });
        });

        self.toasts.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.config.save() {
            log::error!("failed to save config: {err:#}");
        }
    }
}
