//! Routes and handlers exposing a shared editor.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use structedit::{EditError, Inspect, Op, SharedEditor};
use tracing::{debug, warn};

/// Route the rendered page posts mutations to.
pub const MUTATE_PATH: &str = "/mutate";

/// Query string of a mutation request.
#[derive(Debug, Clone, Deserialize)]
pub struct MutateQuery {
    pub operator: String,
    /// Empty or absent addresses the root.
    #[serde(default)]
    pub path: String,
    pub value: Option<String>,
}

/// An engine error on its way to becoming a response.
#[derive(Debug)]
pub struct ApiError(pub EditError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let err = &self.0;
        if err.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else if matches!(err, EditError::UnsupportedKind { .. }) {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<EditError> for ApiError {
    fn from(err: EditError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self.0, "request failed");
        (status, self.0.to_string()).into_response()
    }
}

async fn view<T>(State(editor): State<SharedEditor<T>>) -> Result<Html<String>, ApiError>
where
    T: Inspect + Send + 'static,
{
    Ok(Html(editor.render()?))
}

async fn fields<T>(
    State(editor): State<SharedEditor<T>>,
) -> Result<Json<structedit::Rendered>, ApiError>
where
    T: Inspect + Send + 'static,
{
    Ok(Json(editor.render_tree()?))
}

async fn mutate<T>(
    State(editor): State<SharedEditor<T>>,
    Query(query): Query<MutateQuery>,
) -> Result<StatusCode, ApiError>
where
    T: Inspect + Send + 'static,
{
    debug!(operator = %query.operator, path = %query.path, "mutate request");
    let op = Op::from_keyword(&query.operator, query.value.as_deref())?;
    editor.mutate(&query.path, &op)?;
    Ok(StatusCode::OK)
}

/// Build the application router for `editor`.
///
/// Separate from [`serve`] so tests can drive it without binding a socket.
pub fn router<T>(editor: SharedEditor<T>) -> Router
where
    T: Inspect + Send + 'static,
{
    Router::new()
        .route("/", get(view::<T>))
        .route("/fields", get(fields::<T>))
        .route(MUTATE_PATH, post(mutate::<T>))
        .with_state(editor)
}
