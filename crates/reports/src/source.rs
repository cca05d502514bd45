use crate::error::{ReportError, SourceError};
use core_types::{AccountRecord, GroupRecord, TradeRecord};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The trading-server calls a report needs.
///
/// Implementations are free to fail; the report engine logs failures and
/// carries on with whatever data it has.
pub trait DataSource {
    /// Pending orders of accounts whose group matches `group_mask`, opened
    /// within `[from, to]` (epoch seconds).
    fn pending_trades_by_group(
        &self,
        group_mask: &str,
        from: i64,
        to: i64,
    ) -> Result<Vec<TradeRecord>, SourceError>;

    fn all_groups(&self) -> Result<Vec<GroupRecord>, SourceError>;

    fn account_by_login(&self, login: i32) -> Result<AccountRecord, SourceError>;

    /// Multiplier converting amounts in `from` into `to` for an order of
    /// command `cmd` (buy and sell sides may use different quotes).
    fn convert_rate(&self, from: &str, to: &str, cmd: i32) -> Result<f64, SourceError>;
}

/// A conversion rate entry of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

/// An in-memory `DataSource`, typically loaded from a JSON fixture:
///
/// ```json
/// { "trades": [...], "accounts": [...], "groups": [...], "rates": [...] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSource {
    pub trades: Vec<TradeRecord>,
    pub accounts: Vec<AccountRecord>,
    pub groups: Vec<GroupRecord>,
    pub rates: Vec<RateRecord>,
}

impl FixtureSource {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    fn group_of(&self, login: i32) -> Option<&str> {
        self.accounts
            .iter()
            .find(|account| account.login == login)
            .map(|account| account.group.as_str())
    }
}

impl DataSource for FixtureSource {
    fn pending_trades_by_group(
        &self,
        group_mask: &str,
        from: i64,
        to: i64,
    ) -> Result<Vec<TradeRecord>, SourceError> {
        let mask = GroupMask::parse(group_mask)?;
        Ok(self
            .trades
            .iter()
            .filter(|trade| trade.command().is_ok_and(|cmd| cmd.is_pending()))
            .filter(|trade| trade.open_time >= from && (to <= 0 || trade.open_time <= to))
            .filter(|trade| self.group_of(trade.login).is_some_and(|group| mask.matches(group)))
            .cloned()
            .collect())
    }

    fn all_groups(&self) -> Result<Vec<GroupRecord>, SourceError> {
        Ok(self.groups.clone())
    }

    fn account_by_login(&self, login: i32) -> Result<AccountRecord, SourceError> {
        self.accounts
            .iter()
            .find(|account| account.login == login)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("account {login}")))
    }

    fn convert_rate(&self, from: &str, to: &str, _cmd: i32) -> Result<f64, SourceError> {
        if from == to {
            return Ok(1.0);
        }
        self.rates
            .iter()
            .find(|r| r.from == from && r.to == to)
            .map(|r| r.rate)
            .or_else(|| {
                self.rates
                    .iter()
                    .find(|r| r.from == to && r.to == from && r.rate != 0.0)
                    .map(|r| 1.0 / r.rate)
            })
            .ok_or_else(|| SourceError::Conversion {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

/// A comma-separated list of group patterns: `*` matches any run of
/// characters and a leading `!` excludes matching groups.
/// `"real*,!real-test"` selects every `real` group except `real-test`.
///
/// A mask made only of exclusions starts from every group, so `"!demo*"`
/// selects all non-demo groups. An empty mask selects nothing.
#[derive(Debug)]
pub struct GroupMask {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl GroupMask {
    pub fn parse(mask: &str) -> Result<Self, SourceError> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for pattern in mask.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (target, pattern) = match pattern.strip_prefix('!') {
                Some(rest) => (&mut exclude, rest),
                None => (&mut include, pattern),
            };
            let source = format!("^{}$", regex::escape(pattern).replace(r"\*", ".*"));
            let regex =
                Regex::new(&source).map_err(|_| SourceError::InvalidMask(mask.to_string()))?;
            target.push(regex);
        }

        if include.is_empty() && !exclude.is_empty() {
            let any = Regex::new(".*").map_err(|_| SourceError::InvalidMask(mask.to_string()))?;
            include.push(any);
        }

        Ok(Self { include, exclude })
    }

    pub fn matches(&self, group: &str) -> bool {
        self.include.iter().any(|re| re.is_match(group))
            && !self.exclude.iter().any(|re| re.is_match(group))
    }
}
