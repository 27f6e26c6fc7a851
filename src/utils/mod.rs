mod time_utils;

pub use time_utils::{epoch_ms_to_time_string, now_timestamp_ms, truncate_middle};
