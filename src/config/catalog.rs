use crate::config::ConfigError;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_THEME_WINDOW: usize = 100;
pub const DEFAULT_SEARCH_WINDOW: usize = 10;

/// 카탈로그 API 설정
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    base_url: String,

    /// 테마 추천 시 한 번에 가져올 도서 수. 한 번에 추천할 수 있는 최대 권수이기도 하다.
    theme_window: usize,

    /// 제목 검색 시 가져올 도서 수
    search_window: usize,

    timeout_seconds: u64,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, theme_window: usize, search_window: usize, timeout_seconds: u64) -> Self {
        Self {
            base_url: base_url.into(),
            theme_window,
            search_window,
            timeout_seconds,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn theme_window(&self) -> usize {
        self.theme_window
    }

    pub fn search_window(&self) -> usize {
        self.search_window
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("catalog.base_url {:?}: {}", self.base_url, e)))?;

        if self.theme_window == 0 {
            return Err(ConfigError::Invalid("catalog.theme_window must be greater than 0".to_string()));
        }
        if self.search_window == 0 {
            return Err(ConfigError::Invalid("catalog.search_window must be greater than 0".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("catalog.timeout_seconds must be greater than 0".to_string()));
        }
        Ok(())
    }
}
