use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Vacation record in the database. `author` is a plain reference with no
/// foreign key, so it may outlive the user it points at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacation {
    pub id: Uuid,
    pub author: Uuid,
    pub arrival: String,
    pub departure: String,
    pub people: Vec<Option<String>>,
    pub created: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewVacation {
    pub author: Uuid,
    pub arrival: String,
    pub departure: String,
    pub people: Vec<Option<String>>,
    pub created: OffsetDateTime,
}
