use std::error::Error;
use std::fmt;

/// 카탈로그 조회 중 발생할 수 있는 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 네트워크 실패, 타임아웃, 2xx 가 아닌 응답
    UpstreamUnavailable(String),

    /// JSON 파싱 실패 혹은 필수 필드 누락
    MalformedResponse(String),

    /// 검색 결과가 비어 있거나 해당 ISBN 의 도서가 없음
    NotFound(String),

    /// 요청을 보내기 전에 거부됨
    InvalidRequest(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UpstreamUnavailable(msg) => write!(f, "upstream unavailable: {}", msg),
            CatalogError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
            CatalogError::NotFound(msg) => write!(f, "not found: {}", msg),
            CatalogError::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
        }
    }
}

impl Error for CatalogError {}
