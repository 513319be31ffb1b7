use thiserror::Error;

/// Error type that captures ledger persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reasons a submission can be rejected. Neither variant mutates the ledger;
/// both are recoverable by caller action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission limit reached; reset the cycle to continue")]
    CycleFull,
    #[error("No parsable data found in the submitted text")]
    NoDataFound,
}

/// Reason an undo can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UndoError {
    #[error("No batch to undo")]
    NothingToUndo,
}
