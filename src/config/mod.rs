pub mod catalog;
pub mod log;

use crate::config::catalog::{CatalogConfig, DEFAULT_SEARCH_WINDOW, DEFAULT_THEME_WINDOW};
use crate::provider::penguin::{DEFAULT_TIMEOUT_SECONDS, PENGUIN_TITLES_ENDPOINT};
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt;

/// 환경 변수로 설정을 덮어쓸 때 사용하는 접두사. (예: `DISCOVERY__CATALOG__THEME_WINDOW=40`)
const ENV_PREFIX: &str = "DISCOVERY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 설정 파일/환경 변수를 읽거나 변환하지 못함
    Load(String),

    /// 값은 읽었으나 사용할 수 없음
    Invalid(String),

    /// 로거 초기화 실패
    Logger(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "failed to load configuration: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
            ConfigError::Logger(msg) => write!(f, "failed to initialize logger: {}", msg),
        }
    }
}

impl Error for ConfigError {}


#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    catalog: CatalogConfig,
    logger: Option<log::Config>,
}

impl AppConfig {
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub fn logger(&self) -> Option<&log::Config> {
        self.logger.as_ref()
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// 기본값, `config/{RUN_MODE}.json`, 환경 변수 순으로 설정을 읽는다.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = config::Config::builder()
        .set_default("catalog.base_url", PENGUIN_TITLES_ENDPOINT)
        .and_then(|b| b.set_default("catalog.theme_window", DEFAULT_THEME_WINDOW as u64))
        .and_then(|b| b.set_default("catalog.search_window", DEFAULT_SEARCH_WINDOW as u64))
        .and_then(|b| b.set_default("catalog.timeout_seconds", DEFAULT_TIMEOUT_SECONDS))
        .map_err(|e| ConfigError::Load(e.to_string()))?
        .add_source(config::File::with_name(&format!("config/{}.json", env)).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config.try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    app_config.catalog.validate()?;

    Ok(app_config)
}
