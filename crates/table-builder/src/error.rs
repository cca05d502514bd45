use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown filter type token: '{0}'")]
    UnknownKind(String),

    #[error("Unknown search operator token: '{0}'")]
    UnknownOperator(String),

    #[error("Unknown value domain token: '{0}'")]
    UnknownDomain(String),
}

/// An inconsistency between the declared columns and the rest of the builder
/// state. Reported by `TableBuilder::inconsistencies`; never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    #[error("Id column '{0}' is not a declared column")]
    UnknownIdColumn(String),

    #[error("Order-by column '{0}' is not a declared column")]
    UnknownOrderByColumn(String),

    #[error("Column '{0}' was added more than once")]
    DuplicateColumn(String),

    #[error("Row {row} has {actual} values but {expected} columns are declared")]
    RowArity {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
