use super::{query, sheet};
use crate::kitchen::expiry::ExpiryStatus;
use crate::kitchen::Kitchen;
use eframe::egui;

const DEFAULT_SHELF_LIFE_DAYS: u64 = 5;

fn status_dot(ui: &mut egui::Ui, status: ExpiryStatus) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), rect.width() / 2.0, status.color());
    response.on_hover_text(status.to_string());
}

pub enum UpdateEvent {
    Closed,
    Saved,
}

pub struct AddFridgeItemWindow {
    name: String,
    quantity: String,
    expiry: chrono::NaiveDate,
}

impl AddFridgeItemWindow {
    pub fn new(today: chrono::NaiveDate) -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            expiry: today
                .checked_add_days(chrono::Days::new(DEFAULT_SHELF_LIFE_DAYS))
                .unwrap_or(today),
        }
    }

    fn can_save(&self) -> bool {
        !self.name.is_empty() && !self.quantity.is_empty()
    }

    pub fn update(&mut self, ctx: &egui::Context, kitchen: &mut Kitchen) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        let mut save = false;
        sheet("Add Item").open(&mut open).show(ctx, |ui| {
            egui::Grid::new("add fridge item form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.add(egui::TextEdit::singleline(&mut self.name).hint_text("Name"));
                    ui.end_row();

                    ui.label("Quantity");
                    ui.add(egui::TextEdit::singleline(&mut self.quantity).hint_text("Quantity"));
                    ui.end_row();

                    ui.label("Expiry");
                    ui.add(egui_extras::DatePickerButton::new(&mut self.expiry));
                    ui.end_row();
                });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    events.push(UpdateEvent::Closed);
                }
                save = ui
                    .add_enabled(self.can_save(), egui::Button::new("Save"))
                    .clicked();
            });
        });

        if save {
            query::add_fridge_item(kitchen, &self.name, &self.quantity, self.expiry);
            events.push(UpdateEvent::Saved);
        }
        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

pub struct FridgeScreen {
    add_item: Option<AddFridgeItemWindow>,
}

impl FridgeScreen {
    pub fn new() -> Self {
        Self { add_item: None }
    }

    fn update_table(kitchen: &Kitchen, ui: &mut egui::Ui) -> Option<usize> {
        let today = kitchen.today();
        let window_days = kitchen.config.expiring_soon_days;
        let mut to_delete = None;

        egui_extras::TableBuilder::new(ui)
            .id_salt("fridge table")
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(egui_extras::Column::exact(16.0))
            .column(egui_extras::Column::remainder())
            .column(egui_extras::Column::auto())
            .column(egui_extras::Column::exact(60.0))
            .body(|mut body| {
                for (index, item) in kitchen.fridge.iter().enumerate() {
                    body.row(36.0, |mut row| {
                        row.col(|ui| {
                            status_dot(ui, item.status(today, window_days));
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(&item.name);
                                ui.weak(format!("Qty: {}", item.quantity));
                            });
                        });
                        row.col(|ui| {
                            ui.small(item.expiry.format("%b %e, %Y").to_string());
                        });
                        row.col(|ui| {
                            if ui.button("Delete").clicked() {
                                to_delete = Some(index);
                            }
                        });
                    });
                }
            });

        if kitchen.fridge.is_empty() {
            ui.label("The fridge is empty");
        }
        to_delete
    }

    pub fn update(&mut self, ctx: &egui::Context, kitchen: &mut Kitchen) {
        let mut to_delete = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fridge");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add").clicked() && self.add_item.is_none() {
                        self.add_item = Some(AddFridgeItemWindow::new(kitchen.today()));
                    }
                });
            });
            ui.separator();
            to_delete = Self::update_table(kitchen, ui);
        });

        if let Some(index) = to_delete {
            query::delete_fridge_item(kitchen, index);
        }

        if let Some(window) = &mut self.add_item {
            for event in window.update(ctx, kitchen) {
                match event {
                    UpdateEvent::Closed | UpdateEvent::Saved => self.add_item = None,
                }
            }
        }
    }
}

#[test]
fn add_fridge_item_requires_name_and_quantity() {
    let today = chrono::NaiveDate::from_ymd_opt(2025, 9, 11).unwrap();
    let mut window = AddFridgeItemWindow::new(today);
    assert_eq!(
        window.expiry,
        chrono::NaiveDate::from_ymd_opt(2025, 9, 16).unwrap()
    );
    assert!(!window.can_save());

    window.name = "Yogurt".into();
    assert!(!window.can_save());

    window.quantity = "2".into();
    assert!(window.can_save());

    window.name.clear();
    assert!(!window.can_save());
}
