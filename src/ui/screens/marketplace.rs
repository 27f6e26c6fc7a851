use eframe::egui::{CursorIcon, RichText, Sense, Ui};

use crate::{
    config::CATALOG,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
};

/// Render the listing grid. Returns the id of a clicked model, if any; the
/// caller handles the navigation.
pub(crate) fn render_marketplace(ui: &mut Ui) -> Option<u32> {
    let mut open = None;

    ui.heading(RichText::new(&UI_TEXT.marketplace_heading).color(UI_CONFIG.colors.heading));
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = [12.0, 12.0].into();
        for model in CATALOG.models {
            let response = UI_CONFIG
                .card_frame()
                .show(ui, |ui| {
                    ui.set_width(UI_CONFIG.card_width);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(model.name)
                                .strong()
                                .size(15.0)
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(6.0);
                        ui.label_subdued(model.price);
                    });
                })
                .response
                .interact(Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand);

            if response.clicked() {
                open = Some(model.id);
            }
        }
    });

    open
}
