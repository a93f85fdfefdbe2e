/// Quote id assumed at the display layer when a node carries none.
/// The pipeline itself never consults this; `quote_id` stays opaque there.
pub const DEFAULT_QUOTE_ID: &str = "USD";

/// Quote ids rendered with crypto precision instead of fiat precision.
pub const CRYPTO_QUOTE_IDS: [&str; 3] = ["BTC", "ETH", "USDT"];

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for displaying crypto amounts
pub const CRYPTO_DISPLAY_DECIMAL_PRECISION: u32 = 8;
