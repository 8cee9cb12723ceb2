use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewVacation, Vacation};

#[async_trait]
pub trait VacationRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Vacation>>;
    /// Whole collection in the store's natural order.
    async fn list(&self) -> anyhow::Result<Vec<Vacation>>;
    async fn create(&self, new: NewVacation) -> anyhow::Result<Vacation>;
}

#[derive(Clone)]
pub struct PgVacationRepo {
    db: PgPool,
}

impl PgVacationRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VacationRepo for PgVacationRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Vacation>> {
        let row = sqlx::query_as::<_, Vacation>(
            r#"
            SELECT id, author, arrival, departure, people, created
              FROM vacations
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("select vacation by id")?;
        Ok(row)
    }

    async fn list(&self) -> anyhow::Result<Vec<Vacation>> {
        let rows = sqlx::query_as::<_, Vacation>(
            r#"
            SELECT id, author, arrival, departure, people, created
              FROM vacations
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list vacations")?;
        Ok(rows)
    }

    async fn create(&self, new: NewVacation) -> anyhow::Result<Vacation> {
        let row = sqlx::query_as::<_, Vacation>(
            r#"
            INSERT INTO vacations (id, author, arrival, departure, people, created)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, author, arrival, departure, people, created
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.author)
        .bind(&new.arrival)
        .bind(&new.departure)
        .bind(&new.people)
        .bind(new.created)
        .fetch_one(&self.db)
        .await
        .context("insert vacation")?;
        Ok(row)
    }
}
