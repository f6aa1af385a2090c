//! Contacts JSON endpoint.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::AppError, models::DisplayContact, state::AppState};

/// List normalized contacts.
///
/// Unlike the HTML page, a failed fetch is reported (502) instead of being
/// shown as an empty list.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DisplayContact>>, AppError> {
    let contacts = state.contacts().try_fetch().await?;
    Ok(Json(contacts))
}
