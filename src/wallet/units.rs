/// Convert a base-unit token amount to a human-readable decimal string.
///
/// Trailing zeros of the fractional part are trimmed, so 1.5 tokens worth of
/// base units renders as "1.5", not "1.500000000000000000".
pub fn format_base_units(amount: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac_str.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOKEN_DECIMALS;

    #[test]
    fn whole_and_half_tokens() {
        assert_eq!(format_base_units(1_500_000_000_000_000_000, TOKEN_DECIMALS), "1.5");
        assert_eq!(format_base_units(2_000_000_000_000_000_000, TOKEN_DECIMALS), "2");
        assert_eq!(format_base_units(0, TOKEN_DECIMALS), "0");
    }

    #[test]
    fn leading_zeros_in_fraction_are_kept() {
        assert_eq!(
            format_base_units(1, TOKEN_DECIMALS),
            "0.000000000000000001"
        );
        assert_eq!(
            format_base_units(1_050_000_000_000_000_000, TOKEN_DECIMALS),
            "1.05"
        );
    }

    #[test]
    fn other_decimal_scales() {
        assert_eq!(format_base_units(1_234_500, 6), "1.2345");
        assert_eq!(format_base_units(42, 0), "42");
    }
}
