use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    config::find_model,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    utils::truncate_middle,
};

/// Render the detail view for a listing id. Returns true when the user wants
/// to go back to the marketplace.
pub(crate) fn render_model_detail(ui: &mut Ui, id: u32) -> bool {
    let mut back = false;

    ui.horizontal(|ui| {
        if ui.small_button(UI_TEXT.btn_back.as_str()).clicked() {
            back = true;
        }
        ui.heading(RichText::new(&UI_TEXT.detail_heading).color(UI_CONFIG.colors.heading));
    });
    ui.add_space(12.0);

    let Some(model) = find_model(id) else {
        ui.label_subdued(UI_TEXT.error_unknown_model.as_str());
        return back;
    };

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(480.0_f32.min(ui.available_width()));

        ui.label(
            RichText::new(model.name)
                .strong()
                .size(16.0)
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(model.description);
        ui.add_space(8.0);

        ui.metric(&UI_TEXT.label_version, model.version, UI_CONFIG.colors.label);
        ui.metric(
            &UI_TEXT.label_artifact,
            &truncate_middle(model.artifact_hash, 8, 6),
            UI_CONFIG.colors.label,
        );
        ui.metric(&UI_TEXT.label_license, model.license, UI_CONFIG.colors.label);
        ui.metric(&UI_TEXT.label_price, model.price, UI_CONFIG.colors.heading);
        ui.add_space(10.0);

        let purchase = Button::new(ui.button_text_primary(UI_TEXT.btn_purchase.as_str()))
            .fill(UI_CONFIG.colors.accent)
            .min_size(Vec2::new(120.0, 30.0));
        if ui.add(purchase).clicked() {
            // Purchasing is outside the demo; the button exists for the tour.
            log::info!("purchase clicked for model {}", model.id);
        }
    });

    back
}
