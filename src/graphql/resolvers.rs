//! Field resolvers as plain functions of `(store, arguments)`. The GraphQL
//! objects in `query` and `mutation` only pull the `Store` out of the schema
//! context and delegate here.

use time::OffsetDateTime;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    store::Store,
    users::{password::hash_password, NewUser, User},
    vacations::{NewVacation, Vacation},
};

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

pub async fn user(store: &Store, id: Option<&str>) -> ApiResult<User> {
    let Some(id) = id.and_then(parse_id) else {
        return Err(ApiError::UserNotFound);
    };
    store
        .users
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "user lookup failed");
            ApiError::Store(e)
        })?
        .ok_or(ApiError::UserNotFound)
}

pub async fn vacation(store: &Store, id: Option<&str>) -> ApiResult<Vacation> {
    let Some(id) = id.and_then(parse_id) else {
        return Err(ApiError::VacationNotFound);
    };
    store
        .vacations
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "vacation lookup failed");
            ApiError::Store(e)
        })?
        .ok_or(ApiError::VacationNotFound)
}

pub async fn vacations(store: &Store) -> ApiResult<Vec<Vacation>> {
    store.vacations.list().await.map_err(|e| {
        error!(error = %e, "vacation list failed");
        ApiError::VacationsUnavailable
    })
}

#[derive(Debug, Clone)]
pub struct AddUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: String,
}

/// Registers an inactive user with an argon2-hashed password.
pub async fn add_user(store: &Store, input: AddUser) -> ApiResult<User> {
    let password_hash = hash_password(&input.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::UserNotAdded
    })?;
    let user = store
        .users
        .create(NewUser {
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            active: false,
            password_hash,
        })
        .await
        .map_err(|e| {
            warn!(error = %e, "create user failed");
            ApiError::UserNotAdded
        })?;
    info!(user_id = %user.id, email = %user.email, "user added");
    Ok(user)
}

pub async fn delete_user(store: &Store, id: &str) -> ApiResult<User> {
    let id = parse_id(id).ok_or(ApiError::UserNotDeleted)?;
    let removed = store.users.delete(id).await.map_err(|e| {
        error!(error = %e, %id, "delete user failed");
        ApiError::UserNotDeleted
    })?;
    let user = removed.ok_or(ApiError::UserNotDeleted)?;
    info!(user_id = %user.id, "user deleted");
    Ok(user)
}

pub async fn edit_user(
    store: &Store,
    id: &str,
    first_name: Option<String>,
    last_name: Option<String>,
) -> ApiResult<User> {
    let id = parse_id(id).ok_or(ApiError::UserNotUpdated)?;
    store
        .users
        .update_names(id, first_name, last_name)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "update user failed");
            ApiError::UserNotUpdated
        })?
        .ok_or(ApiError::UserNotUpdated)
}

#[derive(Debug, Clone)]
pub struct AddVacation {
    pub author: String,
    pub arrival: String,
    pub departure: String,
    pub people: Vec<Option<String>>,
}

/// Stores a vacation stamped with `now` (truncated to milliseconds). The
/// author is not checked for existence.
pub async fn add_vacation(
    store: &Store,
    input: AddVacation,
    now: OffsetDateTime,
) -> ApiResult<Vacation> {
    let author = parse_id(&input.author).ok_or_else(|| {
        warn!(author = %input.author, "author is not a valid id");
        ApiError::VacationNotAdded
    })?;
    let created = now.replace_millisecond(now.millisecond()).unwrap_or(now);
    let vacation = store
        .vacations
        .create(NewVacation {
            author,
            arrival: input.arrival,
            departure: input.departure,
            people: input.people,
            created,
        })
        .await
        .map_err(|e| {
            error!(error = %e, %author, "create vacation failed");
            ApiError::VacationNotAdded
        })?;
    info!(vacation_id = %vacation.id, %author, "vacation added");
    Ok(vacation)
}
