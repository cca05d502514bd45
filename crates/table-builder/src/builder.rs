use crate::column::TableColumn;
use crate::error::TableIssue;
use serde::{Deserialize, Serialize};
use ui_ast::tags::components;
use ui_ast::{DynamicValue, Node, Props, none};

/// How `add_column` treats a key that was already added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    /// The key is appended to the display order again and the description is
    /// replaced. Existing renderer configurations depend on this output.
    #[default]
    Legacy,
    /// The key keeps its first position and only the description is replaced.
    Strict,
}

/// Accumulates the description of one report table.
///
/// The builder performs no validation while accumulating: an unknown id or
/// order-by column, or a row whose length doesn't match the columns, still
/// produces a well-formed document. Callers that want to know use
/// [`TableBuilder::inconsistencies`]; debug builds also log them when the
/// properties are built.
///
/// One builder serves one report invocation.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    mode: ColumnMode,
    id_column: String,
    column_order: Vec<String>,
    structure: Props,
    /// Keys whose description was replaced by a later `add_column`, in order.
    readded: Vec<String>,
    rows: Vec<Vec<DynamicValue>>,
    order_by: (String, String),
    auto_save: bool,
    refresh_button: bool,
    bookmarks_button: bool,
    export_button: bool,
    total_row: bool,
    total_data_title: String,
    total_data: Vec<Props>,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mode(name, ColumnMode::default())
    }

    pub fn with_mode(name: impl Into<String>, mode: ColumnMode) -> Self {
        Self {
            name: name.into(),
            mode,
            id_column: String::new(),
            column_order: Vec::new(),
            structure: Props::new(),
            readded: Vec::new(),
            rows: Vec::new(),
            order_by: ("id".to_string(), "DESC".to_string()),
            auto_save: false,
            refresh_button: true,
            bookmarks_button: true,
            export_button: true,
            total_row: false,
            total_data_title: String::new(),
            total_data: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ColumnMode {
        self.mode
    }

    /// Column keys in display order, as emitted under `data.structure`.
    pub fn column_keys(&self) -> &[String] {
        &self.column_order
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Declares a column. Its description is stored under `column.key`.
    pub fn add_column(&mut self, column: TableColumn) {
        let already_added = self.structure.contains_key(&column.key);
        if already_added {
            tracing::debug!(
                table = %self.name,
                key = %column.key,
                mode = ?self.mode,
                "Column re-added"
            );
            self.readded.push(column.key.clone());
        }
        if !(already_added && self.mode == ColumnMode::Strict) {
            self.column_order.push(column.key.clone());
        }
        let description = DynamicValue::Map(column.to_value());
        self.structure.insert(column.key, description);
    }

    pub fn add_columns(&mut self, columns: impl IntoIterator<Item = TableColumn>) {
        for column in columns {
            self.add_column(column);
        }
    }

    /// Appends one row.
    ///
    /// Rows are positional: value `i` belongs to the `i`-th entry of
    /// [`column_keys`](Self::column_keys). The length is not checked here.
    pub fn add_row(&mut self, values: Vec<DynamicValue>) {
        self.rows.push(values);
    }

    pub fn set_id_column(&mut self, key: impl Into<String>) {
        self.id_column = key.into();
    }

    pub fn set_order_by(&mut self, key: impl Into<String>, direction: impl Into<String>) {
        self.order_by = (key.into(), direction.into());
    }

    /// `set_order_by(key, "DESC")`.
    pub fn set_order_by_desc(&mut self, key: impl Into<String>) {
        self.set_order_by(key, "DESC");
    }

    pub fn enable_auto_save(&mut self, enabled: bool) {
        self.auto_save = enabled;
    }

    pub fn enable_refresh_button(&mut self, enabled: bool) {
        self.refresh_button = enabled;
    }

    pub fn enable_bookmarks_button(&mut self, enabled: bool) {
        self.bookmarks_button = enabled;
    }

    pub fn enable_export_button(&mut self, enabled: bool) {
        self.export_button = enabled;
    }

    pub fn enable_total(&mut self, enabled: bool) {
        self.total_row = enabled;
    }

    pub fn set_total_data_title(&mut self, title: impl Into<String>) {
        self.total_data_title = title.into();
    }

    pub fn set_total_data(&mut self, rows: Vec<Props>) {
        self.total_data = rows;
    }

    /// Assembles the table properties map consumed by a `Table` node.
    ///
    /// Does not mutate the builder and may be called any number of times.
    pub fn build_table_properties(&self) -> Props {
        if cfg!(debug_assertions) {
            for issue in self.inconsistencies() {
                tracing::warn!(table = %self.name, %issue, "Inconsistent table description");
            }
        }

        let mut props = Props::with_capacity(12);
        props.insert("name".to_string(), self.name.as_str().into());
        props.insert("idCol".to_string(), self.id_column.as_str().into());
        props.insert(
            "orderBy".to_string(),
            DynamicValue::List(vec![
                self.order_by.0.as_str().into(),
                self.order_by.1.as_str().into(),
            ]),
        );
        props.insert("autoSave".to_string(), self.auto_save.into());
        props.insert("showRefreshBtn".to_string(), self.refresh_button.into());
        props.insert("showBookmarksBtn".to_string(), self.bookmarks_button.into());
        props.insert("showExportBtn".to_string(), self.export_button.into());
        props.insert("showTotal".to_string(), self.total_row.into());
        props.insert("totalDataTitle".to_string(), self.total_data_title.as_str().into());

        if !self.total_data.is_empty() {
            let total = self.total_data.iter().cloned().map(DynamicValue::Map).collect();
            props.insert("totalData".to_string(), DynamicValue::List(total));
        }

        let rows = self.rows.iter().cloned().map(DynamicValue::List).collect();
        let keys = self.column_order.iter().map(DynamicValue::from).collect();
        let mut data = Props::with_capacity(2);
        data.insert("rows".to_string(), DynamicValue::List(rows));
        data.insert("structure".to_string(), DynamicValue::List(keys));
        props.insert("data".to_string(), DynamicValue::Map(data));

        props.insert("structure".to_string(), DynamicValue::Map(self.structure.clone()));

        props
    }

    /// The `Table` component node carrying the current table properties.
    pub fn to_node(&self) -> Node {
        components::table(none(), self.build_table_properties())
    }

    /// Lists every inconsistency between the declared columns and the rest of
    /// the state. Never changes what `build_table_properties` emits.
    pub fn inconsistencies(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();

        if !self.id_column.is_empty() && !self.structure.contains_key(&self.id_column) {
            issues.push(TableIssue::UnknownIdColumn(self.id_column.clone()));
        }
        if !self.structure.contains_key(&self.order_by.0) {
            issues.push(TableIssue::UnknownOrderByColumn(self.order_by.0.clone()));
        }

        issues.extend(self.readded.iter().cloned().map(TableIssue::DuplicateColumn));

        let expected = self.column_order.len();
        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != expected {
                issues.push(TableIssue::RowArity {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterConfig;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn keys(props: &Props) -> Vec<&str> {
        props.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_defaults() {
        let props = TableBuilder::new("T").build_table_properties();
        assert_eq!(props["idCol"], DynamicValue::from(""));
        assert_eq!(props["orderBy"], DynamicValue::List(vec!["id".into(), "DESC".into()]));
        assert_eq!(props["autoSave"], DynamicValue::from(false));
        assert_eq!(props["showRefreshBtn"], DynamicValue::from(true));
        assert_eq!(props["showBookmarksBtn"], DynamicValue::from(true));
        assert_eq!(props["showExportBtn"], DynamicValue::from(true));
        assert_eq!(props["showTotal"], DynamicValue::from(false));
        assert_eq!(props["totalDataTitle"], DynamicValue::from(""));
        assert!(!props.contains_key("totalData"));
    }

    #[test]
    fn test_key_order() {
        let mut builder = TableBuilder::new("T");
        builder.set_total_data(vec![Props::new()]);
        assert_eq!(
            keys(&builder.build_table_properties()),
            [
                "name",
                "idCol",
                "orderBy",
                "autoSave",
                "showRefreshBtn",
                "showBookmarksBtn",
                "showExportBtn",
                "showTotal",
                "totalDataTitle",
                "totalData",
                "data",
                "structure",
            ]
        );
    }

    #[test]
    fn test_auto_save_and_total_are_independent() {
        let mut builder = TableBuilder::new("T");
        builder.enable_auto_save(true);
        let props = builder.build_table_properties();
        assert_eq!(props["autoSave"], DynamicValue::from(true));
        assert_eq!(props["showTotal"], DynamicValue::from(false));
    }

    #[test]
    fn test_strict_mode_keeps_first_position() {
        let mut builder = TableBuilder::with_mode("T", ColumnMode::Strict);
        builder.add_column(TableColumn::new("a", "A", 1.0));
        builder.add_column(TableColumn::new("b", "B", 2.0));
        builder.add_column(TableColumn::new("a", "A2", 3.0));

        assert_eq!(builder.column_keys(), ["a", "b"]);
        let props = builder.build_table_properties();
        assert_eq!(
            props["structure"].get("a").and_then(|c| c.get("name")),
            Some(&DynamicValue::from("A2"))
        );
    }

    #[rstest]
    #[case(ColumnMode::Legacy)]
    #[case(ColumnMode::Strict)]
    fn test_readded_column_is_reported_in_both_modes(#[case] mode: ColumnMode) {
        let mut builder = TableBuilder::with_mode("T", mode);
        builder.add_columns([
            TableColumn::new("id", "ID", 1.0),
            TableColumn::new("b", "B", 2.0),
            TableColumn::new("id", "ID2", 3.0),
            TableColumn::new("id", "ID3", 4.0),
        ]);
        builder.set_order_by_desc("id");

        assert_eq!(
            builder.inconsistencies(),
            vec![
                TableIssue::DuplicateColumn("id".to_string()),
                TableIssue::DuplicateColumn("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_inconsistencies() {
        let mut builder = TableBuilder::new("T");
        builder.add_column(TableColumn::new("a", "A", 1.0).with_filter(FilterConfig::search()));
        builder.add_column(TableColumn::new("a", "A", 1.0));
        builder.set_id_column("missing");
        builder.add_row(vec!["1".into(), "2".into()]);
        builder.add_row(vec!["1".into()]);

        assert_eq!(
            builder.inconsistencies(),
            vec![
                TableIssue::UnknownIdColumn("missing".to_string()),
                TableIssue::UnknownOrderByColumn("id".to_string()),
                TableIssue::DuplicateColumn("a".to_string()),
                TableIssue::RowArity {
                    row: 1,
                    expected: 2,
                    actual: 1
                },
            ]
        );
    }

    #[test]
    fn test_consistent_builder_reports_nothing() {
        let mut builder = TableBuilder::new("T");
        builder.add_column(TableColumn::new("id", "ID", 1.0));
        builder.set_id_column("id");
        builder.add_row(vec!["7".into()]);
        assert!(builder.inconsistencies().is_empty());
    }

    #[test]
    fn test_column_mode_deserializes_lowercase() {
        let mode: ColumnMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(mode, ColumnMode::Strict);
    }
}
