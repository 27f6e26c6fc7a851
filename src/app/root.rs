use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Visuals},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::{DashboardState, Screen, UploadState},
    config::DF,
    tx::SystemClock,
    ui::{UI_CONFIG, screens},
    wallet::{WalletSession, discover},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) screen: Screen, // persists across sessions
    #[serde(skip)]
    pub(crate) session: WalletSession,
    #[serde(skip)]
    pub(crate) dashboard: DashboardState,
    #[serde(skip)]
    pub(crate) upload: UploadState,
    #[serde(skip)]
    pub(crate) clock: SystemClock,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            session: WalletSession::new(None),
            dashboard: DashboardState::default(),
            upload: UploadState::default(),
            clock: SystemClock,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Wallet state never survives a reload; the session always starts
        // Disconnected with whatever provider this run happens to have.
        app.session = WalletSession::new(discover(&args));
        app
    }

    pub(crate) fn navigate(&mut self, screen: Screen) {
        if DF.log_navigation {
            log::info!("navigate: {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }

    fn render_central(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                match self.screen {
                    Screen::Marketplace => {
                        if let Some(id) = screens::render_marketplace(ui) {
                            self.navigate(Screen::ModelDetail(id));
                        }
                    }
                    Screen::Dashboard => {
                        screens::render_dashboard(ui, &mut self.dashboard, &self.clock);
                    }
                    Screen::Upload => {
                        screens::render_upload(ui, &mut self.upload, &self.clock);
                    }
                    Screen::Wallet => {
                        screens::render_wallet(ui, &mut self.session, &self.clock);
                    }
                    Screen::Profile => {
                        screens::render_profile(ui, &self.session);
                    }
                    Screen::ModelDetail(id) => {
                        if screens::render_model_detail(ui, id) {
                            self.navigate(Screen::Marketplace);
                        }
                    }
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Drive the timer-backed state machines once per frame.
        self.session.poll(&self.clock);
        self.dashboard.withdraw.poll(&self.clock);
        self.upload.deploy.poll(&self.clock);

        self.render_sidebar(ctx);
        self.render_central(ctx);

        // Keep repainting while anything is counting down, so confirmations
        // and the copy acknowledgment land without user input.
        if self.session.is_connecting()
            || self.session.copy_acknowledged()
            || self.dashboard.withdraw.is_pending()
            || self.upload.deploy.is_pending()
        {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
