// Copyright 2023 Remi Bernotavicius

use crate::kitchen::models::RecipeId;
use crate::kitchen::Kitchen;
use derive_more::Display;
use eframe::egui;
use std::collections::HashMap;
use std::mem;
use strum::EnumIter;

mod auth;
mod dashboard;
mod fridge;
mod profile;
mod query;
mod recipe;
mod recipe_list;
mod shopping;

pub use query::filter_recipes;

fn new_toast(
    text: impl Into<egui::WidgetText>,
    kind: egui_toast::ToastKind,
) -> egui_toast::Toast {
    egui_toast::Toast {
        text: text.into(),
        kind,
        options: egui_toast::ToastOptions::default()
            .duration_in_seconds(3.0)
            .show_progress(false)
            .show_icon(true),
        ..Default::default()
    }
}

pub fn new_error_toast(text: impl Into<egui::WidgetText>) -> egui_toast::Toast {
    new_toast(text, egui_toast::ToastKind::Error)
}

pub fn new_info_toast(text: impl Into<egui::WidgetText>) -> egui_toast::Toast {
    new_toast(text, egui_toast::ToastKind::Info)
}

/// A small window pinned to the middle of the screen, used for forms.
fn sheet<'open>(title: impl Into<egui::WidgetText>) -> egui::Window<'open> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    #[display("Home")]
    Home,
    #[display("Recipes")]
    Recipes,
    #[display("Fridge")]
    Fridge,
    #[display("Shopping")]
    Shopping,
    #[display("Profile")]
    Profile,
}

impl Tab {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

pub struct KitchenCompanion {
    kitchen: Kitchen,
    auth: Option<auth::AuthFlow>,
    tab: Tab,
    recipe_list: recipe_list::RecipeListScreen,
    recipes: HashMap<RecipeId, recipe::RecipeWindow>,
    fridge: fridge::FridgeScreen,
    shopping: shopping::ShoppingScreen,
    profile: profile::ProfileScreen,
    toasts: egui_toast::Toasts,
}

impl KitchenCompanion {
    pub fn new(kitchen: Kitchen, skip_onboarding: bool) -> Self {
        Self {
            kitchen,
            auth: Some(auth::AuthFlow::new(skip_onboarding)),
            tab: Tab::default(),
            recipe_list: recipe_list::RecipeListScreen::new(),
            recipes: HashMap::new(),
            fridge: fridge::FridgeScreen::new(),
            shopping: shopping::ShoppingScreen::new(),
            profile: profile::ProfileScreen::new(),
            toasts: egui_toast::Toasts::new()
                .anchor(egui::Align2::RIGHT_BOTTOM, (-10.0, -10.0))
                .direction(egui::Direction::BottomUp),
        }
    }

    fn show_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::debug!("switching to tab {tab:?}");
            self.tab = tab;
        }
    }

    fn open_recipe(&mut self, id: RecipeId) {
        self.recipes
            .entry(id)
            .or_insert_with(|| recipe::RecipeWindow::new(id));
    }

    fn update_auth(&mut self, ctx: &egui::Context) {
        if let Some(flow) = &mut self.auth {
            if flow.update(ctx) {
                log::info!("logged in");
                self.auth = None;
                self.tab = Tab::default();
            }
        }
    }

    fn update_tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("tab bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::iter() {
                    ui.selectable_value(&mut self.tab, tab, tab.to_string());
                }
            });
        });
    }

    fn update_dashboard(&mut self, ctx: &egui::Context) {
        for event in dashboard::update(ctx, &self.kitchen) {
            match event {
                dashboard::UpdateEvent::ShowTab(tab) => self.show_tab(tab),
                dashboard::UpdateEvent::OpenRecipe(id) => self.open_recipe(id),
            }
        }
    }

    fn update_profile(&mut self, ctx: &egui::Context) {
        for event in self.profile.update(ctx, &mut self.kitchen) {
            match event {
                profile::UpdateEvent::LoggedOut => {
                    log::info!("logged out");
                    self.recipes.clear();
                    self.auth = Some(auth::AuthFlow::new(true));
                }
            }
        }
    }

    fn update_current_tab(&mut self, ctx: &egui::Context) {
        match self.tab {
            Tab::Home => self.update_dashboard(ctx),
            Tab::Recipes => {
                self.recipe_list
                    .update(ctx, &mut self.kitchen, &mut self.toasts, &mut self.recipes)
            }
            Tab::Fridge => self.fridge.update(ctx, &mut self.kitchen),
            Tab::Shopping => self
                .shopping
                .update(ctx, &mut self.kitchen, &mut self.toasts),
            Tab::Profile => self.update_profile(ctx),
        }
    }

    fn update_recipes(&mut self, ctx: &egui::Context) {
        for (id, mut window) in mem::take(&mut self.recipes) {
            let mut closed = false;
            for event in window.update(ctx, &mut self.kitchen, &mut self.toasts) {
                match event {
                    recipe::UpdateEvent::Closed => closed = true,
                    recipe::UpdateEvent::ShowFridge => self.show_tab(Tab::Fridge),
                }
            }

            if !closed {
                self.recipes.insert(id, window);
            }
        }
    }
}

impl eframe::App for KitchenCompanion {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.auth.is_some() {
            self.update_auth(ctx);
        } else {
            self.update_tab_bar(ctx);
            self.update_current_tab(ctx);
            self.update_recipes(ctx);
        }
        self.toasts.show(ctx);
    }
}

#[test]
fn tab_labels() {
    let tabs: Vec<_> = Tab::iter().collect();
    assert_eq!(tabs.len(), 5);
    assert_eq!(tabs[0], Tab::default());
    assert_eq!(Tab::Fridge.to_string(), "Fridge");
}
