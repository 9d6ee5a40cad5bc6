use super::{new_error_toast, new_info_toast, query, sheet};
use crate::kitchen::models::ShoppingItemId;
use crate::kitchen::Kitchen;
use eframe::egui;

pub enum UpdateEvent {
    Closed,
    Saved,
}

pub struct AddShoppingItemWindow {
    name: String,
    quantity: String,
}

impl AddShoppingItemWindow {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            quantity: "1".into(),
        }
    }

    fn can_save(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn update(&mut self, ctx: &egui::Context, kitchen: &mut Kitchen) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        let mut save = false;
        sheet("Add to List").open(&mut open).show(ctx, |ui| {
            egui::Grid::new("add shopping item form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Item");
                    ui.add(egui::TextEdit::singleline(&mut self.name).hint_text("Item"));
                    ui.end_row();

                    ui.label("Quantity");
                    ui.add(egui::TextEdit::singleline(&mut self.quantity));
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
            query::add_shopping_item(kitchen, &self.name, &self.quantity);
            events.push(UpdateEvent::Saved);
        }
        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

enum Action {
    Toggle(ShoppingItemId),
    Delete(usize),
    GenerateFromPlanned,
    RemoveChecked,
    Share,
}

pub struct ShoppingScreen {
    add_item: Option<AddShoppingItemWindow>,
}

impl ShoppingScreen {
    pub fn new() -> Self {
        Self { add_item: None }
    }

    fn update_header(&mut self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.heading("Shopping");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.menu_button("Actions", |ui| {
                    if ui.button("Generate from Selected Recipes").clicked() {
                        actions.push(Action::GenerateFromPlanned);
                        ui.close_menu();
                    }
                    if ui.button("Remove Checked").clicked() {
                        actions.push(Action::RemoveChecked);
                        ui.close_menu();
                    }
                    if ui.button("Share").clicked() {
                        actions.push(Action::Share);
                        ui.close_menu();
                    }
                });
                if ui.button("Add").clicked() && self.add_item.is_none() {
                    self.add_item = Some(AddShoppingItemWindow::new());
                }
            });
        });
    }

    fn update_list(kitchen: &Kitchen, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                egui::Grid::new("shopping list")
                    .num_columns(4)
                    .striped(true)
                    .show(ui, |ui| {
                        for (index, item) in kitchen.shopping.iter().enumerate() {
                            let mut checked = item.is_checked;
                            if ui.checkbox(&mut checked, "").changed() {
                                actions.push(Action::Toggle(item.id));
                            }
                            ui.label(&item.name);
                            ui.weak(&item.quantity);
                            if ui.button("Delete").clicked() {
                                actions.push(Action::Delete(index));
                            }
                            ui.end_row();
                        }
                    });
                if kitchen.shopping.is_empty() {
                    ui.label("Nothing to buy");
                }
            });
    }

    fn apply(
        ctx: &egui::Context,
        kitchen: &mut Kitchen,
        toasts: &mut egui_toast::Toasts,
        action: Action,
    ) {
        match action {
            Action::Toggle(id) => {
                query::toggle_shopping_item(kitchen, id);
            }
            Action::Delete(index) => {
                query::delete_shopping_item(kitchen, index);
            }
            Action::GenerateFromPlanned => {
                if kitchen.planned.is_empty() {
                    toasts.add(new_error_toast("No recipes are planned"));
                } else {
                    match query::generate_shopping_items(kitchen) {
                        0 => toasts.add(new_info_toast("Everything is already on the list")),
                        added => toasts.add(new_info_toast(format!("Added {added} items"))),
                    };
                }
            }
            Action::RemoveChecked => {
                if query::remove_checked_shopping_items(kitchen) == 0 {
                    toasts.add(new_error_toast("Nothing is checked"));
                }
            }
            Action::Share => {
                ctx.copy_text(query::shopping_list_text(kitchen));
                toasts.add(new_info_toast("Shopping list copied to clipboard"));
            }
        }
    }

    pub fn update(
        &mut self,
        ctx: &egui::Context,
        kitchen: &mut Kitchen,
        toasts: &mut egui_toast::Toasts,
    ) {
        let mut actions = vec![];
        egui::CentralPanel::default().show(ctx, |ui| {
            self.update_header(ui, &mut actions);
            ui.separator();
            Self::update_list(kitchen, ui, &mut actions);
        });

        for action in actions {
            Self::apply(ctx, kitchen, toasts, action);
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
fn add_shopping_item_requires_name() {
    let mut window = AddShoppingItemWindow::new();
    assert_eq!(window.quantity, "1");
    assert!(!window.can_save());

    window.name = "Parsley".into();
    assert!(window.can_save());

    window.quantity.clear();
    assert!(window.can_save());
}

#[test]
fn apply_actions() {
    use crate::kitchen::{test_config, Kitchen};

    let ctx = egui::Context::default();
    let mut toasts = egui_toast::Toasts::new();
    let mut kitchen = Kitchen::empty(test_config());
    let milk = query::add_shopping_item(&mut kitchen, "Milk", "1");
    query::add_shopping_item(&mut kitchen, "Bread", "1");

    ShoppingScreen::apply(&ctx, &mut kitchen, &mut toasts, Action::Toggle(milk));
    assert!(kitchen.shopping[0].is_checked);

    ShoppingScreen::apply(&ctx, &mut kitchen, &mut toasts, Action::RemoveChecked);
    assert_eq!(kitchen.shopping.len(), 1);
    assert_eq!(kitchen.shopping[0].name, "Bread");

    ShoppingScreen::apply(&ctx, &mut kitchen, &mut toasts, Action::Delete(0));
    assert!(kitchen.shopping.is_empty());
}
