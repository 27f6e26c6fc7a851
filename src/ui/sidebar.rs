use eframe::egui::{Align, Context, FontId, Layout, RichText, SidePanel};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    app::{App, Screen},
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::truncate_middle,
};

/// Top-level navigation entries. Detail views highlight the entry they were
/// reached from.
#[derive(Clone, Copy, PartialEq, Eq, EnumIter)]
enum NavTarget {
    Marketplace,
    Dashboard,
    Upload,
    Wallet,
    Profile,
}

impl NavTarget {
    fn label(&self) -> &'static str {
        match self {
            Self::Marketplace => &UI_TEXT.nav_marketplace,
            Self::Dashboard => &UI_TEXT.nav_dashboard,
            Self::Upload => &UI_TEXT.nav_upload,
            Self::Wallet => &UI_TEXT.nav_wallet,
            Self::Profile => &UI_TEXT.nav_profile,
        }
    }

    fn screen(&self) -> Screen {
        match self {
            Self::Marketplace => Screen::Marketplace,
            Self::Dashboard => Screen::Dashboard,
            Self::Upload => Screen::Upload,
            Self::Wallet => Screen::Wallet,
            Self::Profile => Screen::Profile,
        }
    }

    fn is_active(&self, screen: Screen) -> bool {
        match (self, screen) {
            (Self::Marketplace, Screen::Marketplace | Screen::ModelDetail(_)) => true,
            (Self::Dashboard, Screen::Dashboard) => true,
            (Self::Upload, Screen::Upload) => true,
            (Self::Wallet, Screen::Wallet) => true,
            (Self::Profile, Screen::Profile) => true,
            _ => false,
        }
    }
}

impl App {
    pub(crate) fn render_sidebar(&mut self, ctx: &Context) {
        SidePanel::left("sidebar")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.sidebar_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                ui.add_space(16.0);

                for target in NavTarget::iter() {
                    let active = target.is_active(self.screen);
                    let response = ui.interactive_label(
                        target.label(),
                        active,
                        UI_CONFIG.colors.label,
                        FontId::proportional(14.0),
                    );
                    if response.clicked() {
                        self.navigate(target.screen());
                    }
                }

                // Footer: connection chip mirroring the shared session.
                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(8.0);
                    match self.session.address() {
                        Some(address) => {
                            ui.label(
                                RichText::new(truncate_middle(address, 6, 4))
                                    .small()
                                    .color(UI_CONFIG.colors.positive),
                            );
                        }
                        None => {
                            ui.label(
                                RichText::new(UI_TEXT.label_not_connected.as_str())
                                    .small()
                                    .color(UI_CONFIG.colors.text_subdued),
                            );
                        }
                    }
                });
            });
    }
}
