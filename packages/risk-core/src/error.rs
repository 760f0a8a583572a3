use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("unknown subject '{0}': expected 'Polly' or 'Lisa'")]
    InvalidSubject(String),
    #[error("risk table has no rows")]
    EmptyTable,
}
