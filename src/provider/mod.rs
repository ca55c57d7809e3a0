pub mod error;
pub mod penguin;

use crate::provider::error::CatalogError;
use serde::Deserialize;
use serde_with::{DisplayFromStr, OneOrMany, PickFirst, serde_as};

/// 목록 조회의 필터 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// 테마로 조회 (`theme=`)
    Theme(String),
    /// 제목 키워드로 조회 (`search=`)
    Search(String),
}

impl Filter {
    pub fn param_name(&self) -> &'static str {
        match self {
            Filter::Theme(_) => "theme",
            Filter::Search(_) => "search",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Filter::Theme(v) | Filter::Search(v) => v,
        }
    }
}

/// 카탈로그 목록 엔드포인트 요청
#[derive(Debug, Clone)]
pub struct Request {
    start: usize,
    max: usize,
    filter: Filter,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    start: Option<usize>,
    max: Option<usize>,
    filter: Option<Filter>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        RequestBuilder::default()
    }

    pub fn start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn theme<S: Into<String>>(mut self, theme: S) -> Self {
        self.filter = Some(Filter::Theme(theme.into()));
        self
    }

    pub fn search<S: Into<String>>(mut self, keyword: S) -> Self {
        self.filter = Some(Filter::Search(keyword.into()));
        self
    }

    pub fn build(self) -> Result<Request, CatalogError> {
        let filter = self.filter.ok_or_else(||
            CatalogError::InvalidRequest("theme or search keyword is required".to_string()))?;
        if filter.value().trim().is_empty() {
            return Err(CatalogError::InvalidRequest(format!("{} must not be blank", filter.param_name())));
        }

        let max = self.max.unwrap_or(0);
        if max == 0 {
            return Err(CatalogError::InvalidRequest("max must be greater than 0".to_string()));
        }

        Ok(Request {
            start: self.start.unwrap_or(0),
            max,
            filter,
        })
    }
}

/// ISBN 은 카탈로그에 따라 숫자로 오기도 하고 문자열로 오기도 한다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Isbn {
    Text(String),
    Number(u64),
}

impl Isbn {
    pub fn into_string(self) -> String {
        match self {
            Isbn::Text(s) => s,
            Isbn::Number(n) => n.to_string(),
        }
    }
}

/// 목록 조회 응답
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct TitleList {
    /// 결과가 한 건이면 배열이 아닌 객체로 내려온다.
    #[serde(default)]
    #[serde_as(as = "OneOrMany<_>")]
    pub title: Vec<TitleRecord>,
}

/// 목록 조회 응답의 개별 도서
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRecord {
    pub titleweb: Option<String>,
    pub isbn: Option<Isbn>,
    #[serde(rename = "@uri")]
    pub uri: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Themes {
    #[serde(default)]
    #[serde_as(as = "OneOrMany<_>")]
    pub theme: Vec<String>,
}

/// ISBN 단건 조회 응답
///
/// 연산마다 필요한 필드가 다르므로 모두 `Option` 으로 받고, 누락 여부는 사용하는 쪽에서 판단한다.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct TitleDetail {
    pub author: Option<String>,
    pub flapcopy: Option<String>,
    pub authorbio: Option<String>,
    pub isbn: Option<Isbn>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub pages: Option<u32>,
    pub themes: Option<Themes>,
    #[serde(rename = "@uri")]
    pub uri: Option<String>,
    pub titleweb: Option<String>,
}

impl TitleDetail {
    /// 카탈로그 순서 그대로의 테마 목록. 테마가 없으면 빈 슬라이스
    pub fn theme_names(&self) -> &[String] {
        self.themes.as_ref()
            .map(|t| t.theme.as_slice())
            .unwrap_or(&[])
    }
}

/// 필수 필드를 꺼내고 없으면 [`CatalogError::MalformedResponse`] 를 반환한다.
pub fn required<'a, T>(field: &'a Option<T>, name: &str) -> Result<&'a T, CatalogError> {
    field.as_ref()
        .ok_or_else(|| CatalogError::MalformedResponse(format!("missing field `{}`", name)))
}

/// 외부 도서 카탈로그
pub trait Client {
    /// 테마 혹은 키워드로 한 페이지 분량의 도서 목록을 가져온다.
    fn list_titles(&self, request: &Request) -> Result<Vec<TitleRecord>, CatalogError>;

    /// ISBN 으로 도서 한 권의 상세 정보를 가져온다.
    fn get_title(&self, isbn: &str) -> Result<TitleDetail, CatalogError>;

    /// 표지 URL 이 응답에 없을 때 사용할 주소
    fn cover_url_for(&self, isbn: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_filter() {
        let err = Request::builder().max(10).build().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }

    #[test]
    fn builder_rejects_blank_keyword() {
        let err = Request::builder().max(10).search("   ").build().unwrap_err();
        assert_eq!(err, CatalogError::InvalidRequest("search must not be blank".to_string()));
    }

    #[test]
    fn builder_rejects_zero_window() {
        let err = Request::builder().theme("Horror").build().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));
    }

    #[test]
    fn builder_defaults_start_to_zero() {
        let request = Request::builder().max(40).theme("Horror").build().unwrap();
        assert_eq!(request.start(), 0);
        assert_eq!(request.max(), 40);
        assert_eq!(request.filter(), &Filter::Theme("Horror".to_string()));
    }

    #[test]
    fn title_list_accepts_single_object() {
        let json = r#"{"title": {"titleweb": "Beloved", "isbn": "9781400033416"}}"#;
        let list: TitleList = serde_json::from_str(json).unwrap();
        assert_eq!(list.title.len(), 1);
        assert_eq!(list.title[0].titleweb.as_deref(), Some("Beloved"));
    }

    #[test]
    fn title_list_without_titles_is_empty() {
        let list: TitleList = serde_json::from_str("{}").unwrap();
        assert!(list.title.is_empty());
    }

    #[test]
    fn numeric_isbn_is_accepted() {
        let json = r#"{"title": [{"isbn": 1234567890}]}"#;
        let list: TitleList = serde_json::from_str(json).unwrap();
        let isbn = list.title[0].isbn.clone().unwrap().into_string();
        assert_eq!(isbn, "1234567890");
    }

    #[test]
    fn detail_accepts_string_pages_and_null_themes() {
        let json = r#"{"titleweb": "Beloved", "pages": "324", "themes": null}"#;
        let detail: TitleDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pages, Some(324));
        assert!(detail.theme_names().is_empty());
    }

    #[test]
    fn detail_accepts_single_theme_string() {
        let json = r#"{"themes": {"theme": "Fantasy"}}"#;
        let detail: TitleDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.theme_names(), &["Fantasy".to_string()]);
    }

    #[test]
    fn required_reports_missing_field_name() {
        let detail: TitleDetail = serde_json::from_str("{}").unwrap();
        let err = required(&detail.author, "author").unwrap_err();
        assert_eq!(err, CatalogError::MalformedResponse("missing field `author`".to_string()));
    }
}
