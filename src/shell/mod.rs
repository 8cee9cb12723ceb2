use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use tracing::{error, instrument, warn};

use crate::{auth::jwt::MaybeAuthUser, state::AppState};

pub mod views;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing_page))
}

/// Renders the shell for the current user. A failed user lookup falls back to
/// the anonymous header; there is no retry.
#[instrument(skip(state, user_id))]
pub async fn landing_page(
    State(state): State<AppState>,
    MaybeAuthUser(user_id): MaybeAuthUser,
) -> Result<Html<String>, (StatusCode, String)> {
    let user = match user_id {
        Some(id) => match state.store.users.find_by_id(id).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, user_id = %id, "current user lookup failed");
                None
            }
        },
        None => None,
    };
    let page = views::landing(user.as_ref()).map_err(|e| {
        error!(error = %e, "render landing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "render failed".to_string())
    })?;
    Ok(Html(page))
}
