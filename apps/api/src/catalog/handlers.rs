use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::role::Role;
use crate::state::AppState;

#[derive(Serialize)]
struct RoleListResponse<'a> {
    count: usize,
    roles: &'a [Role],
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Response {
    Json(RoleListResponse {
        count: state.catalog.len(),
        roles: state.catalog.roles(),
    })
    .into_response()
}
