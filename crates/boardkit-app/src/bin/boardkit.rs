//! Sudoku board demo: a selectable 9x9 grid with digit entry.

use boardkit_app::BoardApp;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size((480.0, 540.0))
            .with_min_inner_size((320.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Boardkit Sudoku Board",
        options,
        Box::new(|cc| Ok(Box::new(BoardApp::with_demo_values(cc)))),
    )
}
