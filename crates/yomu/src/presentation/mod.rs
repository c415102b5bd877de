pub mod rest;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use self::rest::{catalog, health, reader, theme};
use crate::{
    domain::services::{reader::Reader, theme::ThemeService},
    infrastructure::domain::repositories::{
        content::ContentRepositoryImpl, setting::SettingRepositoryImpl,
    },
};

/// The single navigator instance every request goes through. The mutex is
/// what serializes overlapping navigation requests (last write wins).
pub type SharedReader = Arc<Mutex<Reader<ContentRepositoryImpl, SettingRepositoryImpl>>>;

pub type SharedThemeService = Arc<ThemeService<SettingRepositoryImpl>>;

pub struct ServerBuilder {
    reader: Option<SharedReader>,
    theme_svc: Option<SharedThemeService>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            reader: None,
            theme_svc: None,
        }
    }

    pub fn with_reader(
        self,
        reader: Reader<ContentRepositoryImpl, SettingRepositoryImpl>,
    ) -> Self {
        Self {
            reader: Some(Arc::new(Mutex::new(reader))),
            ..self
        }
    }

    pub fn with_theme_svc(self, theme_svc: ThemeService<SettingRepositoryImpl>) -> Self {
        Self {
            theme_svc: Some(Arc::new(theme_svc)),
            ..self
        }
    }

    pub fn build(self) -> Result<Server, anyhow::Error> {
        let reader = self.reader.ok_or_else(|| anyhow!("no reader"))?;
        let theme_svc = self.theme_svc.ok_or_else(|| anyhow!("no theme service"))?;

        Ok(Server::new(reader, theme_svc))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Server {
    router: Router,
}

impl Server {
    pub fn new(reader: SharedReader, theme_svc: SharedThemeService) -> Self {
        let router = Router::new()
            .route("/health", get(health::health_check))
            .route("/api/catalog", get(catalog::catalog))
            .route("/api/navigation", get(reader::navigation))
            .route("/api/resume", get(reader::resume))
            .route("/api/read/first", post(reader::read_first))
            .route("/api/read/next", post(reader::read_next))
            .route("/api/read/previous", post(reader::read_previous))
            .route("/api/read/{number}", post(reader::read_chapter))
            .route("/api/theme", get(theme::theme).put(theme::set_theme))
            .route("/api/theme/toggle", post(theme::toggle_theme))
            .layer(Extension(reader))
            .layer(Extension(theme_svc))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );

        Self { router }
    }

    pub async fn serve<A: Into<SocketAddr>>(self, addr: A) -> Result<(), anyhow::Error> {
        axum_server::bind(addr.into())
            .serve(self.router.into_make_service())
            .await?;

        Ok(())
    }
}
