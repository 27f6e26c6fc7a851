use chrono::DateTime;
use web_time::{SystemTime, UNIX_EPOCH};

/// Epoch milliseconds from a wall clock that also works on wasm32.
pub fn now_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Wall-clock display for "connected since" style labels.
pub fn epoch_ms_to_time_string(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => format!("{}", dt.format("%H:%M:%S UTC")),
        None => "-".to_string(),
    }
}

/// Shorten long identifiers (addresses, hashes) to `head…tail` for display.
pub fn truncate_middle(s: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= head + tail + 1 {
        return s.to_string();
    }
    let front: String = chars[..head].iter().collect();
    let back: String = chars[chars.len() - tail..].iter().collect();
    format!("{}…{}", front, back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_middle_shortens_only_long_strings() {
        assert_eq!(truncate_middle("0xABC", 6, 4), "0xABC");
        assert_eq!(
            truncate_middle("0x9aF3c2D11bE04F5a8B7C6d21aa30E94fD5C08821", 6, 4),
            "0x9aF3…8821"
        );
    }

    #[test]
    fn epoch_ms_formats_and_rejects_out_of_range() {
        assert_eq!(epoch_ms_to_time_string(0), "00:00:00 UTC");
        assert_eq!(epoch_ms_to_time_string(i64::MAX), "-");
    }
}
