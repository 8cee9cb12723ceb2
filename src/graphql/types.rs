use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use time::{macros::format_description, OffsetDateTime, UtcOffset};
use tracing::error;
use uuid::Uuid;

use super::null_on_error;
use crate::{error::ApiError, store::Store, users::User, vacations::Vacation};

/// Public view of a user; the password hash never leaves the store layer.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: String,
    pub google_id: Option<String>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub active: bool,
}

impl From<User> for UserObject {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            google_id: u.google_id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            active: u.active,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Vacation", complex)]
pub struct VacationObject {
    pub id: String,
    #[graphql(skip)]
    pub author_id: Uuid,
    pub arrival: String,
    pub departure: String,
    pub people: Vec<Option<String>>,
    pub created: String,
}

#[ComplexObject]
impl VacationObject {
    /// Looked up at read time; `null` once the author has been deleted.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let store = ctx.data::<Store>()?;
        let user = store.users.find_by_id(self.author_id).await.map_err(|e| {
            error!(error = %e, author = %self.author_id, "author lookup failed");
            ApiError::Store(e)
        });
        Ok(null_on_error(ctx, user).flatten().map(UserObject::from))
    }
}

impl From<Vacation> for VacationObject {
    fn from(v: Vacation) -> Self {
        Self {
            id: v.id.to_string(),
            author_id: v.author,
            arrival: v.arrival,
            departure: v.departure,
            people: v.people,
            created: iso_timestamp(v.created),
        }
    }
}

/// Formats as ISO 8601 in UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let fmt = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    at.to_offset(UtcOffset::UTC)
        .format(fmt)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}
