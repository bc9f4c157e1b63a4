use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate fragrance id `{id}` in catalog")]
    DuplicateFragrance { id: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
