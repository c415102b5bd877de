#[macro_use]
extern crate log;

use clap::Parser;
use yomu::{
    domain::{
        entities::catalog::Catalog,
        services::{
            catalog::{CatalogError, CatalogService},
            reader::Reader,
            theme::ThemeService,
        },
    },
    infrastructure::{
        config::{ChapterSource, Config, GLOBAL_CONFIG},
        database,
        domain::repositories::{
            content::ContentRepositoryImpl, http::HttpContentRepositoryImpl,
            local::LocalContentRepositoryImpl, setting::SettingRepositoryImpl,
        },
    },
    presentation::ServerBuilder,
};

#[derive(Parser)]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        info!("rust_log: {}", rust_log);
    } else if let Ok(yomu_log) = std::env::var("YOMU_LOG") {
        info!("yomu_log: {}", yomu_log);
        unsafe { std::env::set_var("RUST_LOG", format!("yomu={yomu_log}")) };
    }

    env_logger::init();

    let opts: Opts = Opts::parse();
    let config =
        GLOBAL_CONFIG.get_or_init(|| Config::open(opts.config).expect("failed to init config"));

    debug!("config: {:?}", config);

    let pool = database::establish_connection(&config.database_path, config.create_database).await?;

    let setting_repo = SettingRepositoryImpl::new(pool.clone());

    let content_repo = match &config.chapters {
        ChapterSource::Local(path) => {
            ContentRepositoryImpl::Local(LocalContentRepositoryImpl::new(path))
        }
        ChapterSource::Remote { base_url } => {
            ContentRepositoryImpl::Http(HttpContentRepositoryImpl::new(base_url))
        }
    };

    let catalog = match CatalogService::new(content_repo.clone()).build_catalog().await {
        Ok(catalog) => catalog,
        Err(CatalogError::Empty) => {
            warn!("no chapters discovered, starting with an empty catalog");
            Catalog::default()
        }
        Err(e) => return Err(e.into()),
    };
    info!("catalog holds {} chapters", catalog.len());

    let reader = Reader::new(catalog, content_repo, setting_repo.clone());
    let theme_svc = ThemeService::new(setting_repo);

    let server_fut = ServerBuilder::new()
        .with_reader(reader)
        .with_theme_svc(theme_svc)
        .build()?
        .serve(([0, 0, 0, 0], config.port));

    tokio::select! {
        res = server_fut => {
            if let Err(e) = res {
                error!("server error: {e}");
            }
            info!("server shutdown");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl+c signal");
        }
    }

    info!("closing database...");
    pool.close().await;

    Ok(())
}
