use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("JSON null has no dynamic value representation")]
    Null,
}
