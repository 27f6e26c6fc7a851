use eframe::egui::{Align, Layout, RichText, Ui};

use crate::{
    config::CATALOG,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    wallet::WalletSession,
};

pub(crate) fn render_profile(ui: &mut Ui, session: &WalletSession) {
    ui.heading(RichText::new(&UI_TEXT.profile_heading).color(UI_CONFIG.colors.heading));
    ui.add_space(12.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(480.0_f32.min(ui.available_width()));

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(CATALOG.profile_name)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("✔ {}", CATALOG.profile_badge))
                        .small()
                        .color(UI_CONFIG.colors.positive),
                );
            });
        });
        ui.add_space(8.0);

        match session.address() {
            Some(address) => {
                ui.metric(&UI_TEXT.label_wallet, address, UI_CONFIG.colors.label);
            }
            None => {
                ui.metric(
                    &UI_TEXT.label_wallet,
                    &UI_TEXT.label_not_connected,
                    UI_CONFIG.colors.text_subdued,
                );
            }
        }
    });
}
