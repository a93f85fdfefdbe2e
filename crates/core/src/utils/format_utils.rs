//! Display formatting for amounts and shares.
//!
//! The single home for the quote fallback; the pipeline itself treats
//! `quote_id` as an opaque label and never reads the default.

use rust_decimal::Decimal;

use crate::constants::{
    CRYPTO_DISPLAY_DECIMAL_PRECISION, CRYPTO_QUOTE_IDS, DEFAULT_QUOTE_ID,
    DISPLAY_DECIMAL_PRECISION,
};

/// Formats an amount for display in the given quote.
///
/// An absent quote falls back to [`DEFAULT_QUOTE_ID`]. Crypto quotes render
/// with eight fractional digits and the code as prefix ("BTC 0.12500000");
/// everything else rounds to the display precision with the code as suffix
/// ("1250.00 USD").
pub fn format_amount(value: Decimal, quote_id: Option<&str>) -> String {
    let quote = quote_id.unwrap_or(DEFAULT_QUOTE_ID);
    if CRYPTO_QUOTE_IDS.contains(&quote) {
        format!(
            "{} {:.prec$}",
            quote,
            value,
            prec = CRYPTO_DISPLAY_DECIMAL_PRECISION as usize
        )
    } else {
        format!(
            "{:.prec$} {}",
            value,
            quote,
            prec = DISPLAY_DECIMAL_PRECISION as usize
        )
    }
}

/// Formats a percentage share for display, rounded to the display precision.
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", value.round_dp(DISPLAY_DECIMAL_PRECISION))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_fiat_with_code_suffix() {
        assert_eq!(format_amount(dec!(1250), Some("EUR")), "1250.00 EUR");
    }

    #[test]
    fn falls_back_to_default_quote() {
        assert_eq!(format_amount(dec!(100), None), "100.00 USD");
    }

    #[test]
    fn formats_crypto_with_code_prefix() {
        assert_eq!(format_amount(dec!(0.125), Some("BTC")), "BTC 0.12500000");
    }

    #[test]
    fn rounds_percentages_for_display() {
        assert_eq!(format_percentage(dec!(33.333333)), "33.33%");
        assert_eq!(format_percentage(dec!(50)), "50%");
    }
}
