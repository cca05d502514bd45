use crate::error::TokenError;
use std::fmt;
use std::str::FromStr;
use ui_ast::{DynamicValue, Props};

/// The query widget a column offers.
///
/// Tokens use hyphens; `SearchOperator` tokens use underscores. The renderer
/// matches both byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FilterKind {
    #[default]
    Search,
    Select,
    Date,
    DateTime,
    DateTimeWithSeconds,
    DateInput,
    DateTimeInput,
    DateTimeWithSecondsInput,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Search,
        FilterKind::Select,
        FilterKind::Date,
        FilterKind::DateTime,
        FilterKind::DateTimeWithSeconds,
        FilterKind::DateInput,
        FilterKind::DateTimeInput,
        FilterKind::DateTimeWithSecondsInput,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Search => "search",
            FilterKind::Select => "select",
            FilterKind::Date => "date",
            FilterKind::DateTime => "date-time",
            FilterKind::DateTimeWithSeconds => "date-time-sec",
            FilterKind::DateInput => "date-input",
            FilterKind::DateTimeInput => "date-time-input",
            FilterKind::DateTimeWithSecondsInput => "date-time-sec-input",
        }
    }

    /// Lenient parse: unknown tokens fall back to `Search`.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    /// True for every date or date-time variant.
    pub fn is_temporal(self) -> bool {
        !matches!(self, FilterKind::Search | FilterKind::Select)
    }
}

impl FromStr for FilterKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TokenError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a filter value is compared against the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SearchOperator {
    #[default]
    Like,
    Equal,
    NotEqual,
    Between,
    Outside,
    Below,
    BelowOrEqual,
    Above,
    AboveOrEqual,
    Select,
    SelectExcept,
}

impl SearchOperator {
    pub const ALL: [SearchOperator; 11] = [
        SearchOperator::Like,
        SearchOperator::Equal,
        SearchOperator::NotEqual,
        SearchOperator::Between,
        SearchOperator::Outside,
        SearchOperator::Below,
        SearchOperator::BelowOrEqual,
        SearchOperator::Above,
        SearchOperator::AboveOrEqual,
        SearchOperator::Select,
        SearchOperator::SelectExcept,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchOperator::Like => "like",
            SearchOperator::Equal => "equal",
            SearchOperator::NotEqual => "not_equal",
            SearchOperator::Between => "between",
            SearchOperator::Outside => "outside",
            SearchOperator::Below => "below",
            SearchOperator::BelowOrEqual => "below_or_equal",
            SearchOperator::Above => "above",
            SearchOperator::AboveOrEqual => "above_or_equal",
            SearchOperator::Select => "select",
            SearchOperator::SelectExcept => "select_except",
        }
    }

    /// Lenient parse: unknown tokens fall back to `Like`.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl FromStr for SearchOperator {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TokenError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether filter input is treated as text or as a number (the `mode` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDomain {
    String,
    Number,
}

impl ValueDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueDomain::String => "string",
            ValueDomain::Number => "number",
        }
    }
}

impl FromStr for ValueDomain {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ValueDomain::String),
            "number" => Ok(ValueDomain::Number),
            other => Err(TokenError::UnknownDomain(other.to_string())),
        }
    }
}

/// One entry of a select filter's option list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub display_text: String,
    pub value: DynamicValue,
}

impl FilterOption {
    pub fn new(display_text: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        Self {
            display_text: display_text.into(),
            value: value.into(),
        }
    }

    fn to_value(&self) -> DynamicValue {
        let mut map = Props::with_capacity(2);
        map.insert("text".to_string(), DynamicValue::Text(self.display_text.clone()));
        map.insert("value".to_string(), self.value.clone());
        DynamicValue::Map(map)
    }
}

/// Per-column description of the filter widget.
///
/// Only `kind` is mandatory. Every other field is emitted only when set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    pub kind: FilterKind,
    pub search_operator: Option<SearchOperator>,
    pub value_domain: Option<ValueDomain>,
    pub options: Option<Vec<FilterOption>>,
    pub search_option_key: Option<String>,
    pub is_virtualized: Option<bool>,
    /// Height of the virtualized option list.
    pub virtualized_list_height: Option<f64>,
    /// Height of a single virtualized option.
    pub virtualized_item_height: Option<f64>,
    pub is_exact: Option<bool>,
    pub return_unix: Option<bool>,
}

impl FilterConfig {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn search() -> Self {
        Self::new(FilterKind::Search)
    }

    /// A select filter over `options`.
    pub fn select(options: Vec<FilterOption>) -> Self {
        Self::new(FilterKind::Select).with_options(options)
    }

    pub fn with_operator(mut self, operator: SearchOperator) -> Self {
        self.search_operator = Some(operator);
        self
    }

    pub fn with_domain(mut self, domain: ValueDomain) -> Self {
        self.value_domain = Some(domain);
        self
    }

    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_search_option_key(mut self, key: impl Into<String>) -> Self {
        self.search_option_key = Some(key.into());
        self
    }

    /// Enables option-list virtualization with optional size hints.
    pub fn virtualized(mut self, list_height: Option<f64>, item_height: Option<f64>) -> Self {
        self.is_virtualized = Some(true);
        self.virtualized_list_height = list_height;
        self.virtualized_item_height = item_height;
        self
    }

    pub fn exact(mut self, is_exact: bool) -> Self {
        self.is_exact = Some(is_exact);
        self
    }

    pub fn returning_unix(mut self, return_unix: bool) -> Self {
        self.return_unix = Some(return_unix);
        self
    }

    /// The filter description map: `type` first, then only the fields that are set.
    pub fn to_value(&self) -> Props {
        let mut out = Props::new();
        out.insert("type".to_string(), self.kind.as_str().into());

        if let Some(op) = self.search_operator {
            out.insert("search_type".to_string(), op.as_str().into());
        }
        if let Some(domain) = self.value_domain {
            out.insert("mode".to_string(), domain.as_str().into());
        }
        if let Some(options) = &self.options {
            let list = options.iter().map(FilterOption::to_value).collect();
            out.insert("options".to_string(), DynamicValue::List(list));
        }
        if let Some(key) = &self.search_option_key {
            out.insert("search_option_key".to_string(), key.as_str().into());
        }
        if let Some(flag) = self.is_virtualized {
            out.insert("is_virtualized_options".to_string(), flag.into());
        }
        if let Some(height) = self.virtualized_list_height {
            out.insert("virtualized_options_height".to_string(), height.into());
        }
        if let Some(height) = self.virtualized_item_height {
            out.insert("virtualized_option_height".to_string(), height.into());
        }
        if let Some(flag) = self.is_exact {
            out.insert("is_exact".to_string(), flag.into());
        }
        if let Some(flag) = self.return_unix {
            out.insert("is_return_unix".to_string(), flag.into());
        }

        out
    }
}
