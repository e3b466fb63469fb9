//! Key/value grid demo: grouped properties in collapsible tables.

use boardkit_widgets::KeyValueGrid;
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, ScrollArea},
};

struct KeyValueDemo {
    grid: KeyValueGrid,
}

impl KeyValueDemo {
    fn new(_cc: &CreationContext<'_>) -> Self {
        let mut grid = KeyValueGrid::new();
        grid.add("User Account Information", "Name", "Alice");
        grid.add("User", "Email", "alice@example.com");
        grid.add("Settings", "Theme", "Dark");
        grid.add("Settings", "Language", "en-US");
        grid.add("Network", "Proxy", "");
        grid.add("Network", "Timeout", "30s");
        Self { grid }
    }
}

impl App for KeyValueDemo {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.grid.show(ui);
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size((500.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "KeyValueGrid Demo",
        options,
        Box::new(|cc| Ok(Box::new(KeyValueDemo::new(cc)))),
    )
}
