use axum::{Json, extract::Extension};
use serde::Serialize;

use crate::{domain::entities::chapter::Chapter, presentation::SharedReader};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub chapters: Vec<Chapter>,
    pub total: usize,
}

pub async fn catalog(Extension(reader): Extension<SharedReader>) -> Json<CatalogResponse> {
    let reader = reader.lock().await;
    let chapters = reader.catalog().chapters().to_vec();
    let total = chapters.len();

    Json(CatalogResponse { chapters, total })
}
