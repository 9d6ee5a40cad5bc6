use super::sheet;
use crate::kitchen::models::{Profile, Units};
use crate::kitchen::Kitchen;
use eframe::egui;

pub enum UpdateEvent {
    LoggedOut,
}

fn version_text() -> String {
    format!("{} (Sketch)", env!("CARGO_PKG_VERSION"))
}

pub struct ProfileScreen {
    sketch: Option<&'static str>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self { sketch: None }
    }

    fn update_preferences(profile: &mut Profile, ui: &mut egui::Ui) {
        ui.strong("Preferences");
        egui::Grid::new("profile preferences")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Vegetarian");
                if ui.checkbox(&mut profile.vegetarian, "").changed() {
                    log::debug!("vegetarian: {}", profile.vegetarian);
                }
                ui.end_row();

                ui.label("Allergies");
                ui.add(egui::TextEdit::singleline(&mut profile.allergies).hint_text("Allergies"));
                ui.end_row();

                ui.label("Units");
                egui::ComboBox::from_id_salt("profile units")
                    .selected_text(profile.units.to_string())
                    .show_ui(ui, |ui| {
                        for u in Units::iter() {
                            ui.selectable_value(&mut profile.units, u, u.to_string());
                        }
                    });
                ui.end_row();
            });
    }

    fn update_sketch(&mut self, ctx: &egui::Context) {
        if let Some(title) = self.sketch {
            let mut open = true;
            sheet(title).open(&mut open).show(ctx, |ui| {
                ui.label("Sketch");
            });
            if !open {
                self.sketch = None;
            }
        }
    }

    pub fn update(&mut self, ctx: &egui::Context, kitchen: &mut Kitchen) -> Vec<UpdateEvent> {
        let mut events = vec![];
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Profile");
            ui.separator();

            Self::update_preferences(&mut kitchen.profile, ui);
            ui.add_space(12.0);

            ui.strong("Account");
            for title in ["Manage Subscription", "Privacy"] {
                if ui.button(title).clicked() {
                    self.sketch = Some(title);
                }
            }
            ui.add_space(12.0);

            ui.strong("About");
            egui::Grid::new("profile about").num_columns(2).show(ui, |ui| {
                ui.label("Version");
                ui.weak(version_text());
                ui.end_row();
            });
            ui.add_space(12.0);

            if ui.button("Log Out").clicked() {
                events.push(UpdateEvent::LoggedOut);
            }
        });
        self.update_sketch(ctx);
        events
    }
}

#[test]
fn version_is_marked_as_sketch() {
    assert_eq!(version_text(), "0.1.0 (Sketch)");
}
