// Family Timetable Application
// Main entry point

use family_timetable::ui::TimetableApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Family Timetable");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Family Timetable",
        options,
        Box::new(|cc| Ok(Box::new(TimetableApp::new(cc)))),
    )
}
