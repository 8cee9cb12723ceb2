use async_graphql::{Context, Object, Result};

use super::{
    null_on_error, resolvers,
    types::{UserObject, VacationObject},
};
use crate::store::Store;

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    async fn user(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<UserObject>> {
        let store = ctx.data::<Store>()?;
        let user = resolvers::user(store, id.as_deref()).await;
        Ok(null_on_error(ctx, user).map(Into::into))
    }

    async fn vacation(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> Result<Option<VacationObject>> {
        let store = ctx.data::<Store>()?;
        let vacation = resolvers::vacation(store, id.as_deref()).await;
        Ok(null_on_error(ctx, vacation).map(Into::into))
    }

    /// Every vacation, unpaginated, in store order.
    async fn vacations(&self, ctx: &Context<'_>) -> Result<Option<Vec<VacationObject>>> {
        let store = ctx.data::<Store>()?;
        let rows = null_on_error(ctx, resolvers::vacations(store).await);
        Ok(rows.map(|rows| rows.into_iter().map(VacationObject::from).collect()))
    }
}
