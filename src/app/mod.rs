mod root;
mod state;

pub(crate) use state::{DashboardState, Screen, UploadState};

pub use root::App;
