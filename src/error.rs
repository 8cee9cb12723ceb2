use thiserror::Error;

/// Errors surfaced by GraphQL resolvers. Only the message reaches the client,
/// so "not found", bad input and store failures look alike apart from text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No user found")]
    UserNotFound,
    #[error("No vacation found")]
    VacationNotFound,
    #[error("No vacations found")]
    VacationsUnavailable,
    #[error("User could not be added")]
    UserNotAdded,
    #[error("User could not be deleted")]
    UserNotDeleted,
    #[error("User could not be updated")]
    UserNotUpdated,
    #[error("Could not add Vacation")]
    VacationNotAdded,
    #[error("data store unavailable")]
    Store(#[source] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
