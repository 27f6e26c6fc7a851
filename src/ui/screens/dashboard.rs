use eframe::egui::{Button, RichText, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot};

use crate::{
    app::DashboardState,
    config::CATALOG,
    tx::Clock,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, tx_status_color, tx_status_text},
};

pub(crate) fn render_dashboard(ui: &mut Ui, state: &mut DashboardState, clock: &dyn Clock) {
    ui.heading(RichText::new(&UI_TEXT.dashboard_heading).color(UI_CONFIG.colors.heading));
    ui.add_space(12.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_subheader(UI_TEXT.revenue_heading.as_str());
        ui.add_space(8.0);

        let bars: Vec<Bar> = CATALOG
            .revenue
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.amount_eth)
                    .width(0.6)
                    .name(bar.month)
                    .fill(UI_CONFIG.colors.accent)
            })
            .collect();

        Plot::new("monthly_revenue")
            .height(180.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show_axes([false, true])
            .x_axis_formatter(|mark, _range| {
                let idx = mark.value.round();
                if idx < 0.0 {
                    return String::new();
                }
                CATALOG
                    .revenue
                    .get(idx as usize)
                    .map(|bar| bar.month.to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("revenue", bars));
            });
    });

    ui.add_space(12.0);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.metric(
            &UI_TEXT.label_available_earnings,
            CATALOG.available_earnings,
            UI_CONFIG.colors.heading,
        );
        ui.add_space(8.0);

        let withdraw = Button::new(ui.button_text_primary(UI_TEXT.btn_withdraw.as_str()))
            .fill(UI_CONFIG.colors.accent)
            .min_size(Vec2::new(120.0, 28.0));
        if ui.add(withdraw).clicked() {
            state.withdraw.trigger(clock);
        }

        if let Some(status) = state.withdraw.status() {
            ui.add_space(6.0);
            ui.metric(
                &UI_TEXT.label_status,
                tx_status_text(status),
                tx_status_color(status),
            );
        }
    });
}
