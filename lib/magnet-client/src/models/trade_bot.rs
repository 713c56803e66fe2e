use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The profile of a trade bot to create.
///
/// [`Default`] yields the values the server itself falls back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTradeBot {
    /// Bot name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Market data provider.
    pub provider: String,
    /// Exchange.
    pub market: String,
    /// Traded product.
    pub product: String,
    /// Candle period in seconds.
    #[serde(with = "rust_decimal::serde::float")]
    pub periods: Decimal,
    /// Analyzer names.
    pub analyzers: Vec<String>,
    /// Take profit rate when selling.
    #[serde(with = "rust_decimal::serde::float")]
    pub ask_limit_rate: Decimal,
    /// Stop loss rate when selling.
    #[serde(with = "rust_decimal::serde::float")]
    pub ask_stop_rate: Decimal,
    /// Take profit rate when buying.
    #[serde(with = "rust_decimal::serde::float")]
    pub bid_limit_rate: Decimal,
    /// Stop loss rate when buying.
    #[serde(with = "rust_decimal::serde::float")]
    pub bid_stop_rate: Decimal,
}

impl Default for CreateTradeBot {
    fn default() -> Self {
        Self {
            name: "bot_name".to_string(),
            description: String::new(),
            provider: "cryptowatch".to_string(),
            market: "bitflyer".to_string(),
            product: "btcfxjpy".to_string(),
            periods: Decimal::from(60 * 60 * 24),
            analyzers: vec!["t_cross".to_string()],
            ask_limit_rate: Decimal::new(12, 1),
            ask_stop_rate: Decimal::new(95, 2),
            bid_limit_rate: Decimal::new(85, 2),
            bid_stop_rate: Decimal::new(105, 2),
        }
    }
}
