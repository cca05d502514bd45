use crate::enums::TradeCommand;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// An order as stored by the trading server.
///
/// `volume` is in hundredths of a lot; prices and money fields are in the
/// currency of the account's group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub order: i32,
    pub login: i32,
    pub symbol: String,
    pub cmd: i32,
    pub volume: i32,
    /// Epoch seconds.
    pub open_time: i64,
    pub open_price: f64,
    #[serde(default)]
    pub sl: f64,
    #[serde(default)]
    pub tp: f64,
    #[serde(default)]
    pub storage: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub comment: String,
}

impl TradeRecord {
    pub fn command(&self) -> Result<TradeCommand, CoreError> {
        TradeCommand::try_from(self.cmd)
    }

    /// Volume in lots.
    pub fn lots(&self) -> f64 {
        f64::from(self.volume) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountRecord {
    pub login: i32,
    pub name: String,
    pub group: String,
}

/// A trader group and the currency its accounts are kept in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group: String,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_defaults_optional_fields() {
        let trade: TradeRecord = serde_json::from_str(
            r#"{"order":1001,"login":7,"symbol":"EURUSD","cmd":2,"volume":150,"open_time":0,"open_price":1.1}"#,
        )
        .unwrap();
        assert_eq!(trade.sl, 0.0);
        assert!(trade.comment.is_empty());
        assert_eq!(trade.lots(), 1.5);
        assert_eq!(trade.command(), Ok(TradeCommand::BuyLimit));
    }
}
