use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The operation code the trading server stores in `TradeRecord::cmd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum TradeCommand {
    Buy,
    Sell,
    BuyLimit,
    SellLimit,
    BuyStop,
    SellStop,
    Balance,
    Credit,
}

impl TradeCommand {
    /// The label shown in report tables.
    pub fn label(&self) -> &'static str {
        match self {
            TradeCommand::Buy => "buy",
            TradeCommand::Sell => "sell",
            TradeCommand::BuyLimit => "buy limit",
            TradeCommand::SellLimit => "sell limit",
            TradeCommand::BuyStop => "buy stop",
            TradeCommand::SellStop => "sell stop",
            TradeCommand::Balance => "balance",
            TradeCommand::Credit => "credit",
        }
    }

    /// Orders waiting for a price to be reached.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            TradeCommand::BuyLimit
                | TradeCommand::SellLimit
                | TradeCommand::BuyStop
                | TradeCommand::SellStop
        )
    }
}

impl TryFrom<i32> for TradeCommand {
    type Error = CoreError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => TradeCommand::Buy,
            1 => TradeCommand::Sell,
            2 => TradeCommand::BuyLimit,
            3 => TradeCommand::SellLimit,
            4 => TradeCommand::BuyStop,
            5 => TradeCommand::SellStop,
            6 => TradeCommand::Balance,
            7 => TradeCommand::Credit,
            other => return Err(CoreError::UnknownCommand(other)),
        })
    }
}

impl From<TradeCommand> for i32 {
    fn from(cmd: TradeCommand) -> Self {
        match cmd {
            TradeCommand::Buy => 0,
            TradeCommand::Sell => 1,
            TradeCommand::BuyLimit => 2,
            TradeCommand::SellLimit => 3,
            TradeCommand::BuyStop => 4,
            TradeCommand::SellStop => 5,
            TradeCommand::Balance => 6,
            TradeCommand::Credit => 7,
        }
    }
}
