use async_graphql::{http::GraphiQLSource, Context, EmptySubscription, Schema, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::{error::ApiResult, state::AppState, store::Store};

pub mod mutation;
pub mod query;
pub mod resolvers;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Store) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Records a resolver failure on the response and resolves the field to
/// `null`, leaving sibling fields in place.
pub(crate) fn null_on_error<T>(ctx: &Context<'_>, res: ApiResult<T>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            ctx.add_error(ServerError::new(e.to_string(), Some(ctx.item.pos)));
            None
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphiql).post(graphql_handler))
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use uuid::Uuid;

    async fn run(schema: &ApiSchema, query: &str) -> (Value, Vec<String>) {
        let res = schema.execute(query).await;
        let errors = res.errors.iter().map(|e| e.message.clone()).collect();
        let data = res.data.into_json().expect("data serializes");
        (data, errors)
    }

    async fn add_ada(schema: &ApiSchema) -> String {
        let (data, errors) = run(
            schema,
            r#"mutation {
                addUser(email: "ada@example.com", firstName: "Ada", password: "engine") { id }
            }"#,
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        data["addUser"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn add_user_then_query_it() {
        let schema = build_schema(Store::memory());
        let id = add_ada(&schema).await;

        let (data, errors) = run(
            &schema,
            &format!(
                r#"{{ user(id: "{id}") {{ id googleId email firstName lastName active }} }}"#
            ),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            data["user"],
            json!({
                "id": id,
                "googleId": null,
                "email": "ada@example.com",
                "firstName": "Ada",
                "lastName": null,
                "active": false,
            })
        );
    }

    #[tokio::test]
    async fn missing_user_reports_generic_message() {
        let schema = build_schema(Store::memory());
        let (data, errors) = run(&schema, r#"{ user(id: "missing") { id } }"#).await;
        assert_eq!(errors, vec!["No user found".to_string()]);
        assert_eq!(data, json!({ "user": null }));
    }

    #[tokio::test]
    async fn failed_field_leaves_siblings_intact() {
        let schema = build_schema(Store::memory());
        let (data, errors) = run(&schema, r#"{ vacations { id } user(id: "missing") { id } }"#).await;
        assert_eq!(errors, vec!["No user found".to_string()]);
        assert_eq!(data, json!({ "vacations": [], "user": null }));
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_message_only() {
        let schema = build_schema(Store::failing());
        let (data, errors) = run(&schema, "{ vacations { id } }").await;
        assert_eq!(errors, vec!["No vacations found".to_string()]);
        assert_eq!(data, json!({ "vacations": null }));
    }

    #[tokio::test]
    async fn author_lookup_failure_nulls_only_the_author() {
        let store = Store::failing_users();
        let schema = build_schema(store.clone());
        let author = Uuid::new_v4().to_string();
        let (data, errors) = run(
            &schema,
            &format!(
                r#"mutation {{ addVacation(author: "{author}", arrival: "2026-07-01", departure: "2026-07-14", people: []) {{ arrival author {{ id }} }} }}"#
            ),
        )
        .await;
        assert_eq!(errors, vec!["data store unavailable".to_string()]);
        assert_eq!(
            data,
            json!({ "addVacation": { "arrival": "2026-07-01", "author": null } })
        );
    }

    #[tokio::test]
    async fn missing_required_argument_is_rejected_before_execution() {
        let store = Store::memory();
        let schema = build_schema(store.clone());
        let (_, errors) = run(&schema, r#"mutation { addUser(email: "x@example.com") { id } }"#).await;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("password"), "{errors:?}");
        assert!(store.users.find_by_email("x@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn password_is_not_part_of_the_schema() {
        let schema = build_schema(Store::memory());
        let sdl = schema.sdl();
        assert!(sdl.contains("type RootQueryType"));
        assert!(sdl.contains("type Mutation"));
        assert!(!sdl.contains("passwordHash"));
        assert!(sdl.contains("people: [String]!"), "{sdl}");
        let (_, errors) = run(&schema, r#"{ user(id: "x") { passwordHash } }"#).await;
        assert!(!errors.is_empty());
    }

    #[tokio::test]
    async fn edit_and_delete_user_flow() {
        let schema = build_schema(Store::memory());
        let id = add_ada(&schema).await;

        let (data, errors) = run(
            &schema,
            &format!(
                r#"mutation {{ editUser(id: "{id}", lastName: "Lovelace") {{ email firstName lastName active }} }}"#
            ),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            data["editUser"],
            json!({ "email": "ada@example.com", "firstName": "Ada", "lastName": "Lovelace", "active": false })
        );

        let (data, errors) = run(
            &schema,
            &format!(r#"mutation {{ deleteUser(id: "{id}") {{ id }} }}"#),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(data["deleteUser"]["id"], json!(id));

        let (_, errors) = run(&schema, &format!(r#"{{ user(id: "{id}") {{ id }} }}"#)).await;
        assert_eq!(errors, vec!["No user found".to_string()]);

        let (_, errors) = run(
            &schema,
            &format!(r#"mutation {{ deleteUser(id: "{id}") {{ id }} }}"#),
        )
        .await;
        assert_eq!(errors, vec!["User could not be deleted".to_string()]);
    }

    #[tokio::test]
    async fn vacation_author_resolves_until_deleted() {
        let schema = build_schema(Store::memory());
        let author = add_ada(&schema).await;

        let (data, errors) = run(
            &schema,
            &format!(
                r#"mutation {{
                    addVacation(author: "{author}", arrival: "2026-07-01", departure: "2026-07-14", people: ["Ada", null, "Charles"]) {{
                        id created people author {{ email }}
                    }}
                }}"#
            ),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        let vacation = &data["addVacation"];
        let vacation_id = vacation["id"].as_str().unwrap().to_string();
        assert_eq!(vacation["people"], json!(["Ada", null, "Charles"]));
        assert_eq!(vacation["author"]["email"], json!("ada@example.com"));
        let created = vacation["created"].as_str().unwrap();
        assert!(time::OffsetDateTime::parse(
            created,
            &time::format_description::well_known::Rfc3339
        )
        .is_ok());

        run(&schema, &format!(r#"mutation {{ deleteUser(id: "{author}") {{ id }} }}"#)).await;

        let (data, errors) = run(
            &schema,
            &format!(r#"{{ vacation(id: "{vacation_id}") {{ arrival author {{ email }} }} }}"#),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(data["vacation"], json!({ "arrival": "2026-07-01", "author": null }));
    }

    #[tokio::test]
    async fn vacations_lists_everything() {
        let schema = build_schema(Store::memory());
        let author = add_ada(&schema).await;
        for arrival in ["2026-06-01", "2026-08-01"] {
            let (_, errors) = run(
                &schema,
                &format!(
                    r#"mutation {{ addVacation(author: "{author}", arrival: "{arrival}", departure: "2026-09-01", people: []) {{ id }} }}"#
                ),
            )
            .await;
            assert!(errors.is_empty(), "{errors:?}");
        }

        let (data, errors) = run(&schema, "{ vacations { arrival departure } }").await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(data["vacations"].as_array().unwrap().len(), 2);
    }
}
