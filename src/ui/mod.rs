pub(crate) mod screens;
mod sidebar;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use styles::{UiStyleExt, tx_status_color, tx_status_text};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
