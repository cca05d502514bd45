use crate::filter::FilterConfig;
use ui_ast::{DynamicValue, Props};

/// Declaration of one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    /// Stable identifier, unique within a table.
    pub key: String,
    /// Display label or language token resolved by the renderer.
    pub label: String,
    pub order: f64,
    pub is_sortable: bool,
    pub is_exported: bool,
    pub filter: Option<FilterConfig>,
}

impl TableColumn {
    /// A sortable, exported column without a filter.
    pub fn new(key: impl Into<String>, label: impl Into<String>, order: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            order,
            is_sortable: true,
            is_exported: true,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sortable(mut self, is_sortable: bool) -> Self {
        self.is_sortable = is_sortable;
        self
    }

    pub fn exported(mut self, is_exported: bool) -> Self {
        self.is_exported = is_exported;
        self
    }

    /// `{ name, order, export, sort, filter? }`
    pub fn to_value(&self) -> Props {
        let mut out = Props::with_capacity(5);
        out.insert("name".to_string(), DynamicValue::Text(self.label.clone()));
        out.insert("order".to_string(), DynamicValue::Number(self.order));
        out.insert("export".to_string(), DynamicValue::Boolean(self.is_exported));
        out.insert("sort".to_string(), DynamicValue::Boolean(self.is_sortable));
        if let Some(filter) = &self.filter {
            out.insert("filter".to_string(), DynamicValue::Map(filter.to_value()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterKind;

    #[test]
    fn test_defaults() {
        let column = TableColumn::new("login", "LOGIN", 2.0);
        assert!(column.is_sortable);
        assert!(column.is_exported);
        assert!(column.filter.is_none());
        assert!(!column.to_value().contains_key("filter"));
    }

    #[test]
    fn test_description_keys() {
        let column = TableColumn::new("open_time", "OPEN_TIME", 4.0)
            .sortable(false)
            .with_filter(FilterConfig::new(FilterKind::DateTime));
        let out = column.to_value();
        assert_eq!(
            out.keys().map(String::as_str).collect::<Vec<_>>(),
            ["name", "order", "export", "sort", "filter"]
        );
        assert_eq!(out["sort"], DynamicValue::Boolean(false));
        assert_eq!(out["filter"].get("type"), Some(&DynamicValue::from("date-time")));
    }
}
