use super::{new_info_toast, query, recipe::RecipeWindow, sheet};
use crate::kitchen::models::{CategoryFilter, Difficulty, RecipeId, DEFAULT_CATEGORIES};
use crate::kitchen::Kitchen;
use eframe::egui;
use std::collections::HashMap;

pub enum UpdateEvent {
    Closed,
    Saved,
}

pub struct AddRecipeWindow {
    title: String,
    category: String,
    prep_time: String,
    difficulty: Difficulty,
    note: String,
}

impl AddRecipeWindow {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            category: "Dinner".into(),
            prep_time: "45 min".into(),
            difficulty: Difficulty::default(),
            note: String::new(),
        }
    }

    fn can_save(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn update(&mut self, ctx: &egui::Context, kitchen: &mut Kitchen) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        let mut save = false;
        sheet("Add Recipe").open(&mut open).show(ctx, |ui| {
            egui::Grid::new("add recipe form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Title");
                    ui.add(egui::TextEdit::singleline(&mut self.title).hint_text("Title"));
                    ui.end_row();

                    ui.label("Category");
                    egui::ComboBox::from_id_salt("add recipe category")
                        .selected_text(self.category.as_str())
                        .show_ui(ui, |ui| {
                            for c in DEFAULT_CATEGORIES {
                                ui.selectable_value(&mut self.category, c.to_owned(), c);
                            }
                        });
                    ui.end_row();

                    ui.label("Prep Time");
                    ui.add(egui::TextEdit::singleline(&mut self.prep_time));
                    ui.end_row();

                    ui.label("Difficulty");
                    egui::ComboBox::from_id_salt("add recipe difficulty")
                        .selected_text(self.difficulty.to_string())
                        .show_ui(ui, |ui| {
                            for d in Difficulty::iter() {
                                ui.selectable_value(&mut self.difficulty, d, d.to_string());
                            }
                        });
                    ui.end_row();

                    ui.label("Notes");
                    ui.add(egui::TextEdit::multiline(&mut self.note).hint_text("Optional"));
                    ui.end_row();
                });
            ui.separator();
            save = ui
                .add_enabled(self.can_save(), egui::Button::new("Save"))
                .clicked();
        });

        if save {
            query::add_recipe(
                kitchen,
                &self.title,
                &self.category,
                &self.prep_time,
                self.difficulty,
                &self.note,
            );
            events.push(UpdateEvent::Saved);
        }
        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

pub struct RecipeListScreen {
    query: String,
    category: CategoryFilter,
    add_recipe: Option<AddRecipeWindow>,
}

impl RecipeListScreen {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            add_recipe: None,
        }
    }

    fn update_filter(&mut self, kitchen: &Kitchen, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search recipes")
                    .desired_width(ui.available_width() - 120.0),
            );
            egui::ComboBox::from_id_salt("recipe category filter")
                .selected_text(self.category.as_str().to_owned())
                .show_ui(ui, |ui| {
                    for c in query::recipe_categories(kitchen) {
                        let label = c.as_str().to_owned();
                        ui.selectable_value(&mut self.category, c, label);
                    }
                });
        });
    }

    fn update_list(
        &self,
        kitchen: &Kitchen,
        recipe_windows: &mut HashMap<RecipeId, RecipeWindow>,
        ui: &mut egui::Ui,
    ) {
        let recipes = query::filter_recipes(&kitchen.recipes, &self.category, &self.query);
        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                for recipe in &recipes {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(recipe.thumbnail()).size(24.0));
                        ui.vertical(|ui| {
                            let mut shown = recipe_windows.contains_key(&recipe.id);
                            ui.toggle_value(
                                &mut shown,
                                egui::RichText::new(&recipe.title).strong(),
                            );
                            ui.weak(recipe.summary());

                            if shown && !recipe_windows.contains_key(&recipe.id) {
                                recipe_windows.insert(recipe.id, RecipeWindow::new(recipe.id));
                            } else if !shown {
                                recipe_windows.remove(&recipe.id);
                            }
                        });
                        if let Some(last) = &recipe.last_cooked {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.small(format!("Last cooked {last}"));
                                },
                            );
                        }
                    });
                    ui.separator();
                }
                if recipes.is_empty() {
                    ui.label("Nothing found");
                }
            });
    }

    pub fn update(
        &mut self,
        ctx: &egui::Context,
        kitchen: &mut Kitchen,
        toasts: &mut egui_toast::Toasts,
        recipe_windows: &mut HashMap<RecipeId, RecipeWindow>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Recipes");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add").clicked() && self.add_recipe.is_none() {
                        self.add_recipe = Some(AddRecipeWindow::new());
                    }
                });
            });
            self.update_filter(kitchen, ui);
            ui.separator();
            self.update_list(kitchen, recipe_windows, ui);
        });

        if let Some(window) = &mut self.add_recipe {
            for event in window.update(ctx, kitchen) {
                match event {
                    UpdateEvent::Closed => self.add_recipe = None,
                    UpdateEvent::Saved => {
                        toasts.add(new_info_toast("Recipe saved"));
                        self.add_recipe = None;
                    }
                }
            }
        }
    }
}

#[test]
fn add_recipe_requires_title() {
    let mut window = AddRecipeWindow::new();
    assert!(!window.can_save());
    window.title = "Pancakes".into();
    assert!(window.can_save());
    assert_eq!(window.difficulty, Difficulty::Medium);
}
