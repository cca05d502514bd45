//! The pending trades report built from an in-memory fixture.

use configuration::ReportSettings;
use pretty_assertions::assert_eq;
use reports::{FixtureSource, ReportEngine, ReportRequest, wrap_modal};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use table_builder::ColumnMode;
use ui_ast::{node_to_json, stringify};

const FIXTURE: &str = r#"{
    "trades": [
        {"order": 1001, "login": 7, "symbol": "EURUSD", "cmd": 2, "volume": 150,
         "open_time": 1700000000, "open_price": 1.08345, "sl": 1.07, "tp": 1.1,
         "storage": -0.5, "profit": 0.0, "comment": "limit entry"},
        {"order": 1002, "login": 8, "symbol": "XAUUSD", "cmd": 5, "volume": 25,
         "open_time": 1700003600, "open_price": 1950.0, "profit": 10.0},
        {"order": 1003, "login": 7, "symbol": "EURUSD", "cmd": 0, "volume": 100,
         "open_time": 1700000100, "open_price": 1.08},
        {"order": 1004, "login": 9, "symbol": "GBPUSD", "cmd": 3, "volume": 10,
         "open_time": 1700000200, "open_price": 1.25}
    ],
    "accounts": [
        {"login": 7, "name": "Alice", "group": "real-usd"},
        {"login": 8, "name": "Bob", "group": "real-eur"},
        {"login": 9, "name": "Demo", "group": "demo-usd"}
    ],
    "groups": [
        {"group": "real-usd", "currency": "USD"},
        {"group": "real-eur", "currency": "EUR"},
        {"group": "demo-usd", "currency": "USD"}
    ],
    "rates": [
        {"from": "EUR", "to": "USD", "rate": 1.1}
    ]
}"#;

#[fixture]
fn source() -> FixtureSource {
    FixtureSource::from_json(FIXTURE).unwrap()
}

fn real_request() -> ReportRequest {
    ReportRequest {
        group: "real*".to_string(),
        from: 0,
        to: 0,
    }
}

fn table_props(report: &Value) -> &Value {
    &report["children"][1]["props"]
}

#[rstest]
fn test_report_tree_shape(source: FixtureSource) {
    let engine = ReportEngine::new(ReportSettings::default());
    let report = node_to_json(&engine.create_report(&source, &real_request()));

    assert_eq!(report["type"], "Column");
    assert_eq!(
        report["children"][0],
        json!({
            "type": "h1",
            "children": [{"type": "#text", "props": {"value": "Pending Trades Report"}}]
        })
    );
    assert_eq!(report["children"][1]["type"], "Table");
    assert!(report["children"][1].get("children").is_none());
}

#[rstest]
fn test_table_settings(source: FixtureSource) {
    let engine = ReportEngine::new(ReportSettings::default());
    let report = node_to_json(&engine.create_report(&source, &real_request()));
    let props = table_props(&report);

    assert_eq!(props["name"], "PendingTradesReportTable");
    assert_eq!(props["idCol"], "order");
    assert_eq!(props["orderBy"], json!(["order", "DESC"]));
    assert_eq!(props["autoSave"], false);
    assert_eq!(props["showRefreshBtn"], false);
    assert_eq!(props["showBookmarksBtn"], false);
    assert_eq!(props["showExportBtn"], true);
    assert_eq!(props["showTotal"], true);
    assert_eq!(props["totalDataTitle"], "TOTAL");
    assert_eq!(
        props["data"]["structure"],
        json!([
            "order", "login", "name", "open_time", "type", "symbol", "volume", "open_price",
            "sl", "tp", "storage", "profit", "comment", "currency"
        ])
    );
    assert_eq!(props["structure"]["sl"]["name"], "S / L");
    assert_eq!(props["structure"]["currency"]["order"], json!(14.0));
}

#[rstest]
fn test_rows_are_filtered_formatted_and_converted(source: FixtureSource) {
    let engine = ReportEngine::new(ReportSettings::default());
    let report = node_to_json(&engine.create_report(&source, &real_request()));
    let props = table_props(&report);

    // 1003 is a market order and 1004 belongs to a demo group.
    assert_eq!(
        props["data"]["rows"],
        json!([
            ["1001", "7", "Alice", "2023.11.14 22:13:20", "buy limit", "EURUSD", 1.5,
             1.08, 1.07, 1.1, -0.5, 0.0, "limit entry", "USD"],
            ["1002", "8", "Bob", "2023.11.14 23:13:20", "sell stop", "XAUUSD", 0.25,
             2145.0, 0.0, 0.0, 0.0, 11.0, "", "USD"]
        ])
    );
    assert_eq!(props["totalData"], json!([{"volume": 1.75, "currency": "USD"}]));
}

#[rstest]
fn test_missing_rate_leaves_amounts_unconverted(mut source: FixtureSource) {
    source.rates.clear();
    let engine = ReportEngine::new(ReportSettings::default());
    let report = node_to_json(&engine.create_report(&source, &real_request()));

    assert_eq!(table_props(&report)["data"]["rows"][1][7], json!(1950.0));
}

#[rstest]
fn test_trades_without_account_are_skipped(mut source: FixtureSource) {
    source.accounts.retain(|a| a.login != 8);
    source.trades.retain(|t| t.order != 1001);
    let engine = ReportEngine::new(ReportSettings::default());

    // Without the account the group is unknown, so nothing matches the mask.
    let builder = engine.build_table(&source, &real_request());
    assert_eq!(builder.row_count(), 0);
}

#[rstest]
fn test_time_window(source: FixtureSource) {
    let engine = ReportEngine::new(ReportSettings::default());
    let request = ReportRequest {
        group: "*".to_string(),
        from: 1_700_000_150,
        to: 1_700_001_000,
    };
    let builder = engine.build_table(&source, &request);
    assert_eq!(builder.row_count(), 1);
}

#[rstest]
fn test_settings_flow_into_document(source: FixtureSource) {
    let settings = ReportSettings {
        table_name: "Pending".to_string(),
        target_currency: "EUR".to_string(),
        utc_offset_secs: 3600,
        column_mode: ColumnMode::Strict,
        ..ReportSettings::default()
    };
    let engine = ReportEngine::new(settings.clone());
    let report = node_to_json(&engine.create_report(&source, &real_request()));
    let props = table_props(&report);

    assert_eq!(props["name"], "Pending");
    assert_eq!(props["data"]["rows"][0][3], "2023.11.14 23:13:20");
    assert_eq!(props["data"]["rows"][0][13], "EUR");
    assert_eq!(props["totalData"][0]["currency"], "EUR");
}

#[rstest]
fn test_envelope_is_deterministic(source: FixtureSource) {
    let settings = ReportSettings::default();
    let engine = ReportEngine::new(settings.clone());
    let report = engine.create_report(&source, &real_request());

    let first = wrap_modal(&report, &settings).to_string();
    let second = wrap_modal(&report, &settings).to_string();
    assert_eq!(first, second);
    assert!(first.starts_with(r#"{"ui":{"modal":{"size":"xxxl","headerContent":"#));
    assert!(first.contains(&stringify(&report)));
}
