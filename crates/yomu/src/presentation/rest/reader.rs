use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use serde::Serialize;

use super::ErrorResponse;
use crate::{
    domain::{
        entities::chapter::ChapterContent,
        services::reader::{NavigationAvailability, ReaderError},
    },
    presentation::SharedReader,
};

fn error_response(e: ReaderError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        ReaderError::ChapterNotFound(_) => StatusCode::NOT_FOUND,
        ReaderError::ContentFetch { .. } => StatusCode::BAD_GATEWAY,
        ReaderError::EmptyCatalog => StatusCode::CONFLICT,
        ReaderError::Setting(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            message: e.to_string(),
        }),
    )
}

pub async fn read_chapter(
    Path(number): Path<i64>,
    Extension(reader): Extension<SharedReader>,
) -> Result<Json<ChapterContent>, (StatusCode, Json<ErrorResponse>)> {
    let mut reader = reader.lock().await;

    reader
        .load_chapter(number)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn read_first(
    Extension(reader): Extension<SharedReader>,
) -> Result<Json<ChapterContent>, (StatusCode, Json<ErrorResponse>)> {
    let mut reader = reader.lock().await;

    reader.load_first().await.map(Json).map_err(error_response)
}

/// Boundary no-ops report `moved: false` instead of failing, so a client can
/// keep its next/prev buttons dumb.
#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub moved: bool,
    pub chapter: Option<ChapterContent>,
}

pub async fn read_next(
    Extension(reader): Extension<SharedReader>,
) -> Result<Json<NavigateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut reader = reader.lock().await;

    reader
        .next()
        .await
        .map(|chapter| {
            Json(NavigateResponse {
                moved: chapter.is_some(),
                chapter,
            })
        })
        .map_err(error_response)
}

pub async fn read_previous(
    Extension(reader): Extension<SharedReader>,
) -> Result<Json<NavigateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut reader = reader.lock().await;

    reader
        .previous()
        .await
        .map(|chapter| {
            Json(NavigateResponse {
                moved: chapter.is_some(),
                chapter,
            })
        })
        .map_err(error_response)
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub current_chapter: Option<i64>,
    #[serde(flatten)]
    pub availability: NavigationAvailability,
}

pub async fn navigation(Extension(reader): Extension<SharedReader>) -> Json<NavigationResponse> {
    let reader = reader.lock().await;

    Json(NavigationResponse {
        current_chapter: reader.current_chapter(),
        availability: reader.navigation_availability(),
    })
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resumable: Option<i64>,
}

pub async fn resume(
    Extension(reader): Extension<SharedReader>,
) -> Result<Json<ResumeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let reader = reader.lock().await;

    reader
        .resume_last_read()
        .await
        .map(|resumable| Json(ResumeResponse { resumable }))
        .map_err(error_response)
}
