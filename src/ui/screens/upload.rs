use eframe::egui::{Button, DragValue, RichText, TextEdit, Ui};

use crate::{
    app::UploadState,
    config::TOKEN_SYMBOL,
    tx::Clock,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, tx_status_color, tx_status_text},
};

pub(crate) fn render_upload(ui: &mut Ui, state: &mut UploadState, clock: &dyn Clock) {
    state.ensure_gas_estimate();

    ui.heading(RichText::new(&UI_TEXT.upload_heading).color(UI_CONFIG.colors.heading));
    ui.add_space(12.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(420.0_f32.min(ui.available_width()));

        ui.add(
            TextEdit::singleline(&mut state.name)
                .hint_text(&UI_TEXT.placeholder_model_name)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        ui.add(
            TextEdit::multiline(&mut state.description)
                .hint_text(&UI_TEXT.placeholder_description)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label_subdued(format!("{}:", UI_TEXT.label_royalty));
            ui.add(DragValue::new(&mut state.royalty_pct).range(0..=100).suffix("%"));
        });
        ui.add_space(8.0);

        let gas_text = match &state.gas_estimate {
            Some(gas) => format!("{} {}", gas, TOKEN_SYMBOL),
            None => UI_TEXT.gas_calculating.clone(),
        };
        ui.metric(&UI_TEXT.label_estimated_gas, &gas_text, UI_CONFIG.colors.label);
        ui.add_space(10.0);

        let deploy = Button::new(ui.button_text_primary(UI_TEXT.btn_deploy.as_str()))
            .fill(UI_CONFIG.colors.accent);
        if ui.add_sized([ui.available_width(), 32.0], deploy).clicked() {
            state.deploy.trigger(clock);
        }

        if let Some(status) = state.deploy.status() {
            ui.add_space(6.0);
            ui.metric(
                &UI_TEXT.label_status,
                tx_status_text(status),
                tx_status_color(status),
            );
        }
    });
}
