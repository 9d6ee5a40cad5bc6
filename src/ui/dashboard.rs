use super::Tab;
use crate::kitchen::expiry::count_expiring_soon;
use crate::kitchen::models::RecipeId;
use crate::kitchen::Kitchen;
use eframe::egui;

pub enum UpdateEvent {
    ShowTab(Tab),
    OpenRecipe(RecipeId),
}

pub fn update(ctx: &egui::Context, kitchen: &Kitchen) -> Vec<UpdateEvent> {
    let mut events = vec![];
    let expiring_soon = count_expiring_soon(
        &kitchen.fridge,
        kitchen.today(),
        kitchen.config.expiring_soon_days,
    );

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Kitchen");
        ui.separator();

        ui.strong("Quick Access");
        for (label, tab) in [
            ("Recipes", Tab::Recipes),
            ("Fridge", Tab::Fridge),
            ("Shopping List", Tab::Shopping),
        ] {
            if ui.button(label).clicked() {
                events.push(UpdateEvent::ShowTab(tab));
            }
        }
        ui.add_space(12.0);

        ui.strong("Today");
        egui::Grid::new("dashboard today").num_columns(2).show(ui, |ui| {
            ui.label("Items expiring soon");
            ui.strong(expiring_soon.to_string());
            ui.end_row();
        });

        if let Some(recipe) = kitchen.suggestion.and_then(|id| kitchen.recipe(id)) {
            ui.add_space(6.0);
            ui.weak("Tonight’s Suggestion");
            if ui
                .button(egui::RichText::new(&recipe.title).heading())
                .clicked()
            {
                events.push(UpdateEvent::OpenRecipe(recipe.id));
            }
        }
    });
    events
}
