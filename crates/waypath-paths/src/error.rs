use thiserror::Error;

/// Why a search produced no route.
///
/// `NoPath` is an ordinary negative answer; `Reconstruction` means the
/// search recorded an inconsistent back-pointer chain and is a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{endpoint} node {node} is not part of the map")]
    NotFound { endpoint: &'static str, node: String },

    #[error("No path found")]
    NoPath,

    #[error("back-pointer chain broken while rebuilding the path")]
    Reconstruction,
}

impl SearchError {
    pub(crate) fn not_found(endpoint: &'static str, node: impl std::fmt::Debug) -> Self {
        SearchError::NotFound {
            endpoint,
            node: format!("{node:?}"),
        }
    }
}
