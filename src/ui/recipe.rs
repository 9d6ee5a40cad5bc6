use super::{new_info_toast, query};
use crate::kitchen::models::{Recipe, RecipeId};
use crate::kitchen::Kitchen;
use eframe::egui;

pub enum UpdateEvent {
    Closed,
    ShowFridge,
}

pub struct RecipeWindow {
    recipe_id: RecipeId,
    selected_step: Option<usize>,
}

impl RecipeWindow {
    pub fn new(recipe_id: RecipeId) -> Self {
        Self {
            recipe_id,
            selected_step: None,
        }
    }

    fn update_ingredients(recipe: &Recipe, ui: &mut egui::Ui, events: &mut Vec<UpdateEvent>) {
        ui.strong("Ingredients");
        if recipe.ingredients.is_empty() {
            ui.weak("No ingredients yet");
        }
        egui::Grid::new(("ingredient grid", recipe.id)).show(ui, |ui| {
            for ingredient in &recipe.ingredients {
                ui.label("•");
                ui.label(ingredient.to_string());
                if ui
                    .small_button("Fridge")
                    .on_hover_text("Open fridge")
                    .clicked()
                {
                    events.push(UpdateEvent::ShowFridge);
                }
                ui.end_row();
            }
        });
    }

    fn update_steps(&mut self, recipe: &Recipe, ui: &mut egui::Ui) {
        ui.strong("Steps");
        for (idx, step) in recipe.steps.iter().enumerate() {
            let mut frame = egui::Frame::group(ui.style());
            if self.selected_step == Some(idx) {
                frame = frame.fill(ui.visuals().selection.bg_fill);
            }
            frame.show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.strong(format!("Step {}", idx + 1));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Open").clicked() {
                            self.selected_step = Some(idx);
                        }
                    });
                });
                ui.label(step);
            });
        }
    }

    pub fn update(
        &mut self,
        ctx: &egui::Context,
        kitchen: &mut Kitchen,
        toasts: &mut egui_toast::Toasts,
    ) -> Vec<UpdateEvent> {
        let Some(recipe) = kitchen.recipe(self.recipe_id).cloned() else {
            return vec![UpdateEvent::Closed];
        };

        let mut events = vec![];
        let mut open = true;
        let mut planned = kitchen.planned.contains(&recipe.id);
        let mut planned_changed = false;
        egui::Window::new(recipe.title.clone())
            .id(egui::Id::new(("recipe", recipe.id)))
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading(&recipe.title);
                    ui.horizontal(|ui| {
                        ui.weak(format!("Prep: {}", recipe.prep_time));
                        ui.weak(format!("Difficulty: {}", recipe.difficulty));
                        ui.weak(&recipe.category);
                    });
                    if let Some(note) = &recipe.note {
                        ui.label(note);
                    }
                    ui.separator();

                    Self::update_ingredients(&recipe, ui, &mut events);
                    ui.separator();

                    self.update_steps(&recipe, ui);
                    ui.separator();

                    ui.horizontal(|ui| {
                        planned_changed = ui.checkbox(&mut planned, "Plan to cook").changed();
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Start Cooking").clicked() {
                                log::debug!("start cooking {:?}", recipe.title);
                                toasts.add(new_info_toast("Cooking mode isn't available yet"));
                            }
                        });
                    });
                });
            });

        if planned_changed {
            query::set_recipe_planned(kitchen, recipe.id, planned);
        }
        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}
