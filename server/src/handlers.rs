use std::path::PathBuf;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use digitpad_shared::{SavePayload, SaveResponse, StatsResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn root_handler(
    axum::Extension(index_file): axum::Extension<PathBuf>,
) -> impl IntoResponse {
    match tokio::fs::read_to_string(&index_file).await {
        Ok(contents) => Html(contents).into_response(),
        Err(error) => {
            tracing::error!(path = %index_file.display(), %error, "failed to read index page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SavePayload>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "unreadable save request");
    })?;
    let label = payload.validate().inspect_err(|error| {
        tracing::warn!(
            number = payload.number,
            pixels = payload.img.len(),
            %error,
            "rejected sample"
        );
    })?;
    let name = state
        .storage
        .save_sample(label, &payload.img)
        .await
        .inspect_err(|error| tracing::error!(%error, "failed to store sample"))?;
    tracing::info!(digit = label.digit(), %name, "stored sample");
    Ok(Json(SaveResponse {
        message: Some(format!("saved as {name}")),
        saved_as: Some(name),
        ..SaveResponse::default()
    }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let samples = state.storage.list_samples().await?;
    let mut stats = StatsResponse {
        total: samples.len(),
        ..StatsResponse::default()
    };
    for sample in &samples {
        stats.per_digit[usize::from(sample.label.digit())] += 1;
    }
    Ok(Json(stats))
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
