use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// Where the chapter files live: a directory on disk, or a remote host
/// serving them under a base URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChapterSource {
    Local(String),
    Remote { base_url: String },
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_create_database")]
    pub create_database: bool,
    #[serde(default = "default_chapter_source")]
    pub chapters: ChapterSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: yomu_home().join("config.yml"),
            port: default_port(),
            database_path: default_database_path(),
            create_database: default_create_database(),
            chapters: default_chapter_source(),
        }
    }
}

fn yomu_home() -> PathBuf {
    match std::env::var("YOMU_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir().expect("should have home").join(".yomu"),
    }
}

fn default_port() -> u16 {
    80
}

fn default_database_path() -> String {
    let path = yomu_home();
    if !path.exists() {
        let _ = std::fs::create_dir_all(&path);
    }
    path.join("yomu.db").display().to_string()
}

fn default_create_database() -> bool {
    true
}

fn default_chapter_source() -> ChapterSource {
    let path = yomu_home().join("chapters");
    if !path.exists() {
        let _ = std::fs::create_dir_all(&path);
    }
    ChapterSource::Local(path.display().to_string())
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => yomu_home().join("config.yml"),
        };

        match std::fs::File::open(config_path.clone()) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }
}
