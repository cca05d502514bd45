use configuration::ReportSettings;
use serde::{Deserialize, Serialize};

/// Reporting period and scope the host asks the user for before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// One day of activity for a selected group of traders.
    DailyGroup,
}

/// Metadata the host displays in its report catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub version: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
}

pub const REPORT_VERSION: u32 = 1;

const DESCRIPTION: &str = "Summary data on pending trades executed by a selected group of traders \
     over a specified day. Includes date, symbol, price, profit, volume, s / l, t / p, \
     commission, swap and account information.";

pub fn about_report(settings: &ReportSettings) -> ReportInfo {
    ReportInfo {
        version: REPORT_VERSION,
        name: settings.title.clone(),
        description: DESCRIPTION.to_string(),
        kind: ReportKind::DailyGroup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_about_json() {
        let info = about_report(&ReportSettings::default());
        let out = serde_json::to_value(&info).unwrap();
        assert_eq!(out["version"], json!(1));
        assert_eq!(out["name"], "Pending Trades report");
        assert_eq!(out["type"], "daily-group");
        assert!(out["description"].as_str().unwrap().starts_with("Summary data on pending trades"));
    }
}
