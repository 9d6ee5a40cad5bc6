use super::sheet;
use eframe::egui;

pub enum UpdateEvent {
    Closed,
    LoggedIn,
}

#[derive(Default)]
pub struct LoginWindow {
    email: String,
    password: String,
}

impl LoginWindow {
    pub fn update(&mut self, ctx: &egui::Context) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        sheet("Log In").open(&mut open).show(ctx, |ui| {
            ui.strong("Account");
            egui::Grid::new("log in form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("Email"));
                    ui.end_row();

                    ui.label("Password");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .hint_text("Password")
                            .password(true),
                    );
                    ui.end_row();
                });
            ui.separator();
            if ui.button("Continue").clicked() {
                log::debug!("log in as {:?}", self.email);
                events.push(UpdateEvent::LoggedIn);
            }
        });

        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

#[derive(Default)]
pub struct SignUpWindow {
    name: String,
    email: String,
    password: String,
}

impl SignUpWindow {
    pub fn update(&mut self, ctx: &egui::Context) -> Vec<UpdateEvent> {
        let mut events = vec![];
        let mut open = true;
        sheet("Sign Up").open(&mut open).show(ctx, |ui| {
            egui::Grid::new("sign up form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.strong("Profile");
                    ui.end_row();
                    ui.label("Name");
                    ui.add(egui::TextEdit::singleline(&mut self.name).hint_text("Name"));
                    ui.end_row();

                    ui.strong("Account");
                    ui.end_row();
                    ui.label("Email");
                    ui.add(egui::TextEdit::singleline(&mut self.email).hint_text("Email"));
                    ui.end_row();
                    ui.label("Password");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.password)
                            .hint_text("Password")
                            .password(true),
                    );
                    ui.end_row();
                });
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("Create Account").clicked() {
                    log::debug!("sign up as {:?} <{}>", self.name, self.email);
                    events.push(UpdateEvent::LoggedIn);
                }
                ui.weak("By continuing, you agree to the terms.");
            });
        });

        if !open {
            events.push(UpdateEvent::Closed);
        }
        events
    }
}

/// Onboarding, then the landing screen with its log in and sign up windows. Neither window
/// checks what was typed into it.
pub enum AuthFlow {
    Onboarding,
    Landing {
        login: Option<LoginWindow>,
        sign_up: Option<SignUpWindow>,
    },
}

impl AuthFlow {
    pub fn new(skip_onboarding: bool) -> Self {
        if skip_onboarding {
            Self::landing()
        } else {
            Self::Onboarding
        }
    }

    fn landing() -> Self {
        Self::Landing {
            login: None,
            sign_up: None,
        }
    }

    fn update_onboarding(ui: &mut egui::Ui) -> Option<Self> {
        let mut next = None;
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 4.0);
            ui.heading("Kitchen Companion");
            ui.add_space(12.0);
            ui.label(
                "Track fridge items and expirations, manage recipes, and auto-build shopping \
                 lists based on what you plan to cook.",
            );
            ui.add_space(24.0);
            if ui.button("Continue").clicked() {
                next = Some(Self::landing());
            }
        });
        next
    }

    fn update_landing(
        ui: &mut egui::Ui,
        login: &mut Option<LoginWindow>,
        sign_up: &mut Option<SignUpWindow>,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 4.0);
            ui.heading("Welcome");
            ui.add_space(12.0);
            ui.weak("Sign in to sync recipes and fridge inventory across devices.");
            ui.add_space(24.0);
            if ui.button("Log In").clicked() && login.is_none() {
                *login = Some(LoginWindow::default());
                *sign_up = None;
            }
            if ui.button("Sign Up").clicked() && sign_up.is_none() {
                *sign_up = Some(SignUpWindow::default());
                *login = None;
            }
        });
    }

    /// Returns true once the user has logged in.
    pub fn update(&mut self, ctx: &egui::Context) -> bool {
        let mut logged_in = false;
        let mut next = None;
        egui::CentralPanel::default().show(ctx, |ui| match self {
            Self::Onboarding => next = Self::update_onboarding(ui),
            Self::Landing { login, sign_up } => Self::update_landing(ui, login, sign_up),
        });
        if let Some(next) = next {
            log::debug!("onboarding finished");
            *self = next;
        }

        if let Self::Landing { login, sign_up } = self {
            if let Some(window) = login {
                for event in window.update(ctx) {
                    match event {
                        UpdateEvent::Closed => *login = None,
                        UpdateEvent::LoggedIn => logged_in = true,
                    }
                }
            }
            if let Some(window) = sign_up {
                for event in window.update(ctx) {
                    match event {
                        UpdateEvent::Closed => *sign_up = None,
                        UpdateEvent::LoggedIn => logged_in = true,
                    }
                }
            }
        }
        logged_in
    }
}

#[test]
fn auth_flow_starts_at_onboarding() {
    assert!(matches!(AuthFlow::new(false), AuthFlow::Onboarding));
    assert!(matches!(
        AuthFlow::new(true),
        AuthFlow::Landing {
            login: None,
            sign_up: None
        }
    ));
}
