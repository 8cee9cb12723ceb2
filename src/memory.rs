//! In-memory store used by tests and when no `DATABASE_URL` is configured.

use anyhow::bail;
use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    users::{NewUser, User, UserRepo},
    vacations::{NewVacation, Vacation, VacationRepo},
};

#[derive(Default)]
pub struct MemoryStore {
    // Vec keeps insertion order, which is the "store default" order for lists.
    users: RwLock<Vec<User>>,
    vacations: RwLock<Vec<Vacation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, new: NewUser) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == new.email) {
            bail!("duplicate key: email {} already exists", new.email);
        }
        let user = User {
            id: Uuid::new_v4(),
            google_id: None,
            email: new.email,
            first_name: new.first_name,
            last_name: new.last_name,
            active: new.active,
            password_hash: new.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if first_name.is_some() {
            user.first_name = first_name;
        }
        if last_name.is_some() {
            user.last_name = last_name;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        let idx = users.iter().position(|u| u.id == id);
        Ok(idx.map(|idx| users.remove(idx)))
    }
}

#[async_trait]
impl VacationRepo for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Vacation>> {
        Ok(self
            .vacations
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Vacation>> {
        Ok(self.vacations.read().await.clone())
    }

    async fn create(&self, new: NewVacation) -> anyhow::Result<Vacation> {
        let vacation = Vacation {
            id: Uuid::new_v4(),
            author: new.author,
            arrival: new.arrival,
            departure: new.departure,
            people: new.people,
            created: new.created,
        };
        self.vacations.write().await.push(vacation.clone());
        Ok(vacation)
    }
}
