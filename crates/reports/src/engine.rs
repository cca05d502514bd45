use crate::format::{format_timestamp, group_currency, truncate};
use crate::request::ReportRequest;
use crate::source::DataSource;
use configuration::ReportSettings;
use core_types::{AccountRecord, GroupRecord, TradeRecord};
use table_builder::{FilterConfig, FilterKind, TableBuilder, TableColumn};
use ui_ast::tags::{components, html};
use ui_ast::{DynamicValue, Node, Props, props, text};

/// Decimal places kept for volumes, prices and money columns.
const MONEY_DIGITS: u32 = 2;

/// `(key, label)` of every column of the pending trades table, in display order.
const COLUMNS: [(&str, &str); 14] = [
    ("order", "ORDER"),
    ("login", "LOGIN"),
    ("name", "NAME"),
    ("open_time", "OPEN_TIME"),
    ("type", "TYPE"),
    ("symbol", "SYMBOL"),
    ("volume", "VOLUME"),
    ("open_price", "OPEN_PRICE"),
    ("sl", "S / L"),
    ("tp", "T / P"),
    ("storage", "SWAP"),
    ("profit", "AMOUNT"),
    ("comment", "COMMENT"),
    ("currency", "CURRENCY"),
];

/// Builds the pending trades report from a `DataSource`.
///
/// Failures of the source never abort a report: they are logged and the
/// report is built from whatever was fetched (no trades, an empty account,
/// a conversion multiplier of 1).
#[derive(Debug, Clone)]
pub struct ReportEngine {
    settings: ReportSettings,
}

impl ReportEngine {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// The report tree: a heading followed by the trades table.
    pub fn create_report<S>(&self, source: &S, request: &ReportRequest) -> Node
    where
        S: DataSource + ?Sized,
    {
        let table = self.build_table(source, request);
        components::column(
            vec![
                html::h1(vec![text(self.settings.heading.as_str())], Props::new()),
                table.to_node(),
            ],
            Props::new(),
        )
    }

    /// Fetches the trades for `request` and fills a configured `TableBuilder`.
    pub fn build_table<S>(&self, source: &S, request: &ReportRequest) -> TableBuilder
    where
        S: DataSource + ?Sized,
    {
        tracing::info!(
            group = %request.group,
            from = request.from,
            to = request.to,
            "Building pending trades report"
        );

        let trades = source
            .pending_trades_by_group(&request.group, request.from, request.to)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to fetch pending trades");
                Vec::new()
            });
        let groups = source.all_groups().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to fetch groups");
            Vec::new()
        });

        let mut builder = self.configured_builder();
        let mut total_lots = 0.0;

        for trade in &trades {
            let account = source.account_by_login(trade.login).unwrap_or_else(|e| {
                tracing::error!(login = trade.login, error = %e, "Failed to fetch account");
                AccountRecord::default()
            });
            total_lots += trade.lots();
            builder.add_row(self.trade_row(source, trade, &account, &groups));
        }

        let target = self.settings.target_currency.as_str();
        builder.set_total_data(vec![props([
            ("volume", truncate(total_lots, MONEY_DIGITS).into()),
            ("currency", target.into()),
        ])]);

        tracing::debug!(rows = builder.row_count(), "Pending trades table filled");
        builder
    }

    fn configured_builder(&self) -> TableBuilder {
        let mut builder =
            TableBuilder::with_mode(self.settings.table_name.as_str(), self.settings.column_mode);

        builder.set_id_column("order");
        builder.set_order_by_desc("order");
        builder.enable_auto_save(false);
        builder.enable_refresh_button(false);
        builder.enable_bookmarks_button(false);
        builder.enable_export_button(true);
        builder.enable_total(true);
        builder.set_total_data_title("TOTAL");

        let columns = COLUMNS.into_iter().enumerate().map(|(position, (key, label))| {
            let filter = if key == "open_time" {
                FilterConfig::new(FilterKind::DateTime)
            } else {
                FilterConfig::search()
            };
            TableColumn::new(key, label, (position + 1) as f64).with_filter(filter)
        });
        builder.add_columns(columns);

        builder
    }

    /// One row, positionally aligned with `COLUMNS`.
    fn trade_row<S>(
        &self,
        source: &S,
        trade: &TradeRecord,
        account: &AccountRecord,
        groups: &[GroupRecord],
    ) -> Vec<DynamicValue>
    where
        S: DataSource + ?Sized,
    {
        let target = self.settings.target_currency.as_str();
        let currency = group_currency(groups, &account.group);

        let multiplier = if currency == target {
            1.0
        } else {
            source
                .convert_rate(currency, target, trade.cmd)
                .unwrap_or_else(|e| {
                    tracing::error!(
                        order = trade.order,
                        error = %e,
                        "Failed to convert amounts; leaving them unconverted"
                    );
                    1.0
                })
        };
        let money = |value: f64| DynamicValue::from(truncate(value * multiplier, MONEY_DIGITS));

        let label = trade.command().map_or("unknown", |cmd| cmd.label());

        vec![
            trade.order.to_string().into(),
            trade.login.to_string().into(),
            account.name.as_str().into(),
            format_timestamp(
                trade.open_time,
                self.settings.utc_offset_secs,
                &self.settings.timestamp_format,
            )
            .into(),
            label.into(),
            trade.symbol.as_str().into(),
            truncate(trade.lots(), MONEY_DIGITS).into(),
            money(trade.open_price),
            money(trade.sl),
            money(trade.tp),
            money(trade.storage),
            money(trade.profit),
            trade.comment.as_str().into(),
            target.into(),
        ]
    }
}
