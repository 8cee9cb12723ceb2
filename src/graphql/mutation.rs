use async_graphql::{Context, Object, Result};
use time::OffsetDateTime;

use super::{
    null_on_error,
    resolvers::{self, AddUser, AddVacation},
    types::{UserObject, VacationObject},
};
use crate::store::Store;

#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        password: String,
    ) -> Result<Option<UserObject>> {
        let store = ctx.data::<Store>()?;
        let input = AddUser {
            email,
            first_name,
            last_name,
            password,
        };
        let user = resolvers::add_user(store, input).await;
        Ok(null_on_error(ctx, user).map(Into::into))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> Result<Option<UserObject>> {
        let store = ctx.data::<Store>()?;
        let user = resolvers::delete_user(store, &id).await;
        Ok(null_on_error(ctx, user).map(Into::into))
    }

    async fn edit_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Option<UserObject>> {
        let store = ctx.data::<Store>()?;
        let user = resolvers::edit_user(store, &id, first_name, last_name).await;
        Ok(null_on_error(ctx, user).map(Into::into))
    }

    /// `people` accepts null entries, as `[String]!`.
    async fn add_vacation(
        &self,
        ctx: &Context<'_>,
        author: String,
        arrival: String,
        departure: String,
        people: Vec<Option<String>>,
    ) -> Result<Option<VacationObject>> {
        let store = ctx.data::<Store>()?;
        let input = AddVacation {
            author,
            arrival,
            departure,
            people,
        };
        let vacation = resolvers::add_vacation(store, input, OffsetDateTime::now_utc()).await;
        Ok(null_on_error(ctx, vacation).map(Into::into))
    }
}
