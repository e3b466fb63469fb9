//! Dual list box demo: move items between two titled lists.

use boardkit_widgets::{DualListBox, DualListEvent};
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

struct DualListDemo {
    list: DualListBox,
}

impl DualListDemo {
    fn new(_cc: &CreationContext<'_>) -> Self {
        let mut list = DualListBox::new();
        list.set_left_title("Selected Items");
        list.set_right_title("Available Items");
        list.set_left_items(vec!["foo".to_owned(), "bar".to_owned()]);
        list.set_right_items(vec![
            "alpha".to_owned(),
            "beta".to_owned(),
            "gamma".to_owned(),
            "delta".to_owned(),
        ]);
        Self { list }
    }
}

impl App for DualListDemo {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| match self.list.show(ui) {
            Some(DualListEvent::MovedLeft) => {
                log::info!("moved to left: {}", self.list.left_items().join(", "));
            }
            Some(DualListEvent::MovedRight) => {
                log::info!("moved to right: {}", self.list.right_items().join(", "));
            }
            None => {}
        });
    }
}

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size((600.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        "DualListBox Example",
        options,
        Box::new(|cc| Ok(Box::new(DualListDemo::new(cc)))),
    )
}
