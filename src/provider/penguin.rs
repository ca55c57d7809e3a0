use crate::config::catalog::CatalogConfig;
use crate::provider;
use crate::provider::error::CatalogError;
use crate::provider::{Request, TitleDetail, TitleList, TitleRecord};
use regex::Regex;
use reqwest::header::ACCEPT;
use reqwest::{blocking, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// 펭귄 랜덤하우스 카탈로그 기본 주소
pub const PENGUIN_TITLES_ENDPOINT: &str = "https://reststop.randomhouse.com/resources/titles";

/// API 요청의 기본 타임아웃 시간(초)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

static ISBN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9Xx-]+$").unwrap());

/// 펭귄 랜덤하우스 titles 리소스 클라이언트
pub struct Client {
    base_url: Url,
    http: blocking::Client,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidRequest(format!("잘못된 카탈로그 주소 {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidRequest(format!("카탈로그 주소에 경로를 붙일 수 없습니다: {}", base_url)));
        }

        let http = blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::UpstreamUnavailable(format!("클라이언트 생성 실패: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(config.base_url(), config.timeout())
    }

    fn list_url(&self, request: &Request) -> Url {
        let filter = request.filter();
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start", &request.start().to_string())
            .append_pair("max", &request.max().to_string())
            .append_pair("expandlevel", "1")
            .append_pair(filter.param_name(), filter.value());
        url
    }

    fn detail_url(&self, isbn: &str) -> Result<Url, CatalogError> {
        if !ISBN_PATTERN.is_match(isbn) {
            return Err(CatalogError::InvalidRequest(format!("ISBN 형식이 아닙니다: {:?}", isbn)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidRequest(format!("카탈로그 주소에 경로를 붙일 수 없습니다: {}", self.base_url)))?
            .pop_if_empty()
            .push(isbn);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(url = %url, "카탈로그 요청");
        let response = self.http.get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| CatalogError::UpstreamUnavailable(format!("URL: {}, ERROR: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(format!("URL: {}", url)));
        }
        if !status.is_success() {
            return Err(CatalogError::UpstreamUnavailable(format!("HTTP 오류: {} (URL: {})", status, url)));
        }

        let text = response.text()
            .map_err(|e| CatalogError::UpstreamUnavailable(format!("URL: {}, ERROR: {}", url, e)))?;

        serde_json::from_str::<T>(&text)
            .map_err(|e| CatalogError::MalformedResponse(format!("URL: {}, ERROR: {}", url, e)))
    }
}

impl provider::Client for Client {
    fn list_titles(&self, request: &Request) -> Result<Vec<TitleRecord>, CatalogError> {
        let url = self.list_url(request);
        let list: TitleList = self.get_json(url)?;

        if list.title.is_empty() {
            return Err(CatalogError::NotFound(format!("{}={}", request.filter().param_name(), request.filter().value())));
        }
        Ok(list.title)
    }

    fn get_title(&self, isbn: &str) -> Result<TitleDetail, CatalogError> {
        let url = self.detail_url(isbn)?;
        self.get_json(url)
    }

    fn cover_url_for(&self, isbn: &str) -> String {
        self.detail_url(isbn)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), isbn))
    }
}
