use thiserror::Error;

/// Problems with a catalog that would make every session unplayable or ambiguous.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no images")]
    Empty,

    #[error("image '{0}' is listed under both categories")]
    AmbiguousImage(String),
}
