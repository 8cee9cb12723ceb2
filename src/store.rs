use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    memory::MemoryStore,
    users::{PgUserRepo, UserRepo},
    vacations::{PgVacationRepo, VacationRepo},
};

/// Handle to the data store, injected into resolvers and handlers.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserRepo>,
    pub vacations: Arc<dyn VacationRepo>,
}

impl Store {
    pub fn postgres(db: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepo::new(db.clone())),
            vacations: Arc::new(PgVacationRepo::new(db)),
        }
    }

    pub fn memory() -> Self {
        let mem = Arc::new(MemoryStore::new());
        Self {
            users: mem.clone(),
            vacations: mem,
        }
    }
}

/// Store double whose every call fails, for exercising error paths.
#[cfg(test)]
pub(crate) mod failing {
    use anyhow::bail;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::{
        users::{NewUser, User, UserRepo},
        vacations::{NewVacation, Vacation, VacationRepo},
    };

    pub struct FailingStore;

    #[async_trait]
    impl UserRepo for FailingStore {
        async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<User>> {
            bail!("connection refused")
        }
        async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<User>> {
            bail!("connection refused")
        }
        async fn create(&self, _new: NewUser) -> anyhow::Result<User> {
            bail!("connection refused")
        }
        async fn update_names(
            &self,
            _id: Uuid,
            _first_name: Option<String>,
            _last_name: Option<String>,
        ) -> anyhow::Result<Option<User>> {
            bail!("connection refused")
        }
        async fn delete(&self, _id: Uuid) -> anyhow::Result<Option<User>> {
            bail!("connection refused")
        }
    }

    #[async_trait]
    impl VacationRepo for FailingStore {
        async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<Vacation>> {
            bail!("connection refused")
        }
        async fn list(&self) -> anyhow::Result<Vec<Vacation>> {
            bail!("connection refused")
        }
        async fn create(&self, _new: NewVacation) -> anyhow::Result<Vacation> {
            bail!("connection refused")
        }
    }
}

#[cfg(test)]
impl Store {
    pub(crate) fn failing() -> Self {
        Self {
            users: Arc::new(failing::FailingStore),
            vacations: Arc::new(failing::FailingStore),
        }
    }

    /// Failing users, working in-memory vacations.
    pub(crate) fn failing_users() -> Self {
        Self {
            users: Arc::new(failing::FailingStore),
            vacations: Arc::new(MemoryStore::new()),
        }
    }
}
