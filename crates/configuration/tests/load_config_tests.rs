use configuration::error::ConfigError;
use configuration::load_config;
use std::io::Write;
use table_builder::ColumnMode;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = toml_file(
        r#"
        [report]
        target_currency = "EUR"
        column_mode = "strict"
        "#,
    );

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.report.target_currency, "EUR");
    assert_eq!(config.report.column_mode, ColumnMode::Strict);
    assert_eq!(config.report.table_name, "PendingTradesReportTable");
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.directory.is_none());
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = toml_file(
        r#"
        [report]
        table_name = "  "
        "#,
    );

    let err = load_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some(std::path::Path::new("/nonexistent/reports.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)));
}
