use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the fair sorting allocator.
///
/// Malformed persisted allocator state is deliberately absent from this enum: it is
/// recovered by regenerating the bag and never reaches the caller.
#[derive(Error, Debug)]
pub enum SortingError {
    /// The key/value store could not be read or written.
    ///
    /// Fatal for the current draw. The allocator never retries, since retrying a
    /// partially applied write against an external store risks handing out the same
    /// bag slot twice. No state is advanced when this is returned.
    #[error("Sorting state storage is unavailable: {0}")]
    StorageUnavailable(#[source] DbErr),

    /// The configured bag size cannot produce a balanced bag.
    ///
    /// Raised at allocator construction when the bag size is zero.
    #[error("Invalid sorting bag size {0}: must be a positive integer")]
    InvalidConfiguration(usize),
}

impl From<DbErr> for SortingError {
    fn from(err: DbErr) -> Self {
        SortingError::StorageUnavailable(err)
    }
}
