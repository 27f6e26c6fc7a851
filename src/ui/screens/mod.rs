mod dashboard;
mod marketplace;
mod model_detail;
mod profile;
mod upload;
mod wallet;

pub(crate) use dashboard::render_dashboard;
pub(crate) use marketplace::render_marketplace;
pub(crate) use model_detail::render_model_detail;
pub(crate) use profile::render_profile;
pub(crate) use upload::render_upload;
pub(crate) use wallet::render_wallet;
