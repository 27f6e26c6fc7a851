use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
    pub text_subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sidebar_width: f32,
    pub card_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(161, 161, 170),
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(165, 180, 252),
        central_panel: Color32::from_rgb(9, 9, 11),
        side_panel: Color32::from_rgb(17, 17, 20),
        card: Color32::from_rgb(24, 24, 27),
        card_border: Color32::from_rgb(39, 39, 42),
        accent: Color32::from_rgb(99, 102, 241),
        positive: Color32::from_rgb(74, 222, 128),
        negative: Color32::from_rgb(248, 113, 113),
        warning: Color32::from_rgb(250, 204, 21),
        text_subdued: Color32::from_rgb(113, 113, 122),
    },
    sidebar_width: 190.0,
    card_width: 220.0,
};

impl UiConfig {
    /// Frame for the navigation sidebar (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the screen content area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(24),
            ..Default::default()
        }
    }

    /// Rounded card used by every screen for grouped content
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }
}
