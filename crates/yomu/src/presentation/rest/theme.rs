use axum::{Json, extract::Extension, http::StatusCode};
use serde::{Deserialize, Serialize};

use super::ErrorResponse;
use crate::{
    domain::{entities::theme::Theme, services::theme::ThemeError},
    presentation::SharedThemeService,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

fn error_response(e: ThemeError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: e.to_string(),
        }),
    )
}

pub async fn theme(
    Extension(svc): Extension<SharedThemeService>,
) -> Result<Json<ThemeBody>, (StatusCode, Json<ErrorResponse>)> {
    svc.theme()
        .await
        .map(|theme| Json(ThemeBody { theme }))
        .map_err(error_response)
}

pub async fn set_theme(
    Extension(svc): Extension<SharedThemeService>,
    Json(body): Json<ThemeBody>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    svc.set_theme(body.theme)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(error_response)
}

pub async fn toggle_theme(
    Extension(svc): Extension<SharedThemeService>,
) -> Result<Json<ThemeBody>, (StatusCode, Json<ErrorResponse>)> {
    svc.toggle_theme()
        .await
        .map(|theme| Json(ThemeBody { theme }))
        .map_err(error_response)
}
