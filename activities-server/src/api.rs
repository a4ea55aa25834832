use crate::errors::{ApiError, ServerError, ServerResult};
use crate::AppState;
use activities_core::{Activity, RegistryError};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EmailQuery {
    email: String,
}

impl EmailQuery {
    fn email(&self) -> ServerResult<&str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ApiError::bad_request("Email is required", None).into());
        }
        Ok(email)
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
pub struct UnregisterAnywhereResponse {
    message: String,
    removed_from: Vec<String>,
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.list_activities())
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ServerResult<Json<Activity>> {
    Ok(Json(state.registry.get_activity(&name)?))
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    let email = query.email()?;

    if let Err(e) = state.registry.signup(&name, email) {
        return Err(rejected(&state, e).await);
    }
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_signed_up(&name, email).await;
    }

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, name),
    }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    let email = query.email()?;

    if let Err(e) = state.registry.unregister(&name, email) {
        return Err(rejected(&state, e).await);
    }
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_unregistered(&name, email).await;
    }

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, name),
    }))
}

pub async fn unregister_anywhere(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<UnregisterAnywhereResponse>> {
    let email = query.email()?;

    let removed_from = state.registry.unregister_anywhere(email);
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_removed_everywhere(email, &removed_from).await;
    }

    let message = if removed_from.is_empty() {
        format!("{} was not signed up for any activity", email)
    } else {
        format!("Unregistered {} from {}", email, removed_from.join(", "))
    };

    Ok(Json(UnregisterAnywhereResponse {
        message,
        removed_from,
    }))
}

async fn rejected(state: &AppState, error: RegistryError) -> ServerError {
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_rejected(error.to_string()).await;
    }
    error.into()
}
