use eframe::egui::{Button, RichText, Spinner, Ui, Vec2};

use crate::{
    config::TOKEN_SYMBOL,
    tx::Clock,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::{epoch_ms_to_time_string, truncate_middle},
    wallet::{BalanceDisplay, ConnectFailure, WalletSession},
};

pub(crate) fn render_wallet(ui: &mut Ui, session: &mut WalletSession, clock: &dyn Clock) {
    ui.heading(RichText::new(&UI_TEXT.wallet_heading).color(UI_CONFIG.colors.heading));
    ui.add_space(12.0);

    if session.is_connecting() {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.connecting_wallet.as_str());
            });
        });
        return;
    }

    match session.connected().cloned() {
        Some(wallet) => {
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.set_width(380.0_f32.min(ui.available_width()));

                ui.horizontal(|ui| {
                    ui.monospace(truncate_middle(&wallet.address, 10, 8))
                        .on_hover_text(&wallet.address);
                    let copy_label = if session.copy_acknowledged() {
                        &UI_TEXT.label_copied
                    } else {
                        &UI_TEXT.btn_copy
                    };
                    if ui.small_button(copy_label.as_str()).clicked() {
                        if let Some(address) = session.copy_address(clock) {
                            // Fire-and-forget; the platform may deny it silently.
                            ui.ctx().copy_text(address);
                        }
                    }
                });
                ui.add_space(6.0);

                let (balance_text, balance_color) = match &wallet.balance {
                    BalanceDisplay::Amount(amount) => (
                        format!("{} {}", amount, TOKEN_SYMBOL),
                        UI_CONFIG.colors.heading,
                    ),
                    BalanceDisplay::Unavailable => {
                        (UI_TEXT.balance_unavailable.clone(), UI_CONFIG.colors.warning)
                    }
                };
                ui.metric(&UI_TEXT.label_balance, &balance_text, balance_color);
                ui.label_subdued(format!(
                    "{} {}",
                    UI_TEXT.label_connected_since,
                    epoch_ms_to_time_string(wallet.connected_at_ms)
                ));
                ui.add_space(10.0);

                let disconnect = Button::new(
                    RichText::new(UI_TEXT.btn_disconnect.as_str())
                        .strong()
                        .color(UI_CONFIG.colors.negative),
                );
                if ui.add_sized([ui.available_width(), 30.0], disconnect).clicked() {
                    session.disconnect();
                }
            });
        }
        None => {
            let connect = Button::new(ui.button_text_primary(UI_TEXT.btn_connect.as_str()))
                .fill(UI_CONFIG.colors.accent)
                .min_size(Vec2::new(160.0, 34.0));
            if ui.add(connect).clicked() {
                session.connect();
            }

            if let Some(failure) = session.last_failure() {
                ui.add_space(8.0);
                let text = match failure {
                    ConnectFailure::NoProvider => &UI_TEXT.status_no_provider,
                    ConnectFailure::NoAccount => &UI_TEXT.status_no_account,
                };
                ui.label_subdued(text.as_str());
            }
        }
    }
}
