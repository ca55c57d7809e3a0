pub mod fallback;

use crate::config::catalog::CatalogConfig;
use crate::item::{BookDetail, BookSummary, Suggestions};
use crate::provider::error::CatalogError;
use crate::provider::{required, Client, Isbn, Request};
use crate::sampler::sample_indices;
use crate::text::{join_themes, reformat_author, strip_html, NO_THEME};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 카탈로그 조회 결과를 화면용 데이터로 바꿔주는 서비스
///
/// 상태를 갖지 않는다. 목록/상세 조회는 실패하면 [`fallback`] 의 고정값으로 대체하고,
/// 제목 검색만 실패를 호출자에게 돌려준다.
pub struct Discovery<C: Client> {
    client: C,
    theme_window: usize,
    search_window: usize,
}

impl<C: Client> Discovery<C> {
    pub fn new(client: C, theme_window: usize, search_window: usize) -> Self {
        Self { client, theme_window, search_window }
    }

    pub fn with_config(client: C, config: &CatalogConfig) -> Self {
        Self::new(client, config.theme_window(), config.search_window())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn theme_window(&self) -> usize {
        self.theme_window
    }

    /// 테마에 속한 도서를 최대 `count` 권 무작위로 고른다.
    ///
    /// 실패하면 한 권짜리 고정 목록을 돌려주므로 결과 길이가 `count` 와 같다고 가정하면 안 된다.
    pub fn suggest_by_theme(&self, theme: &str, count: usize) -> Suggestions {
        self.suggest_by_theme_with(&mut rand::thread_rng(), theme, count)
    }

    pub fn suggest_by_theme_with<R: Rng + ?Sized>(&self, rng: &mut R, theme: &str, count: usize) -> Suggestions {
        self.try_suggest_by_theme(rng, theme, count)
            .unwrap_or_else(|e| {
                warn!("테마 추천 조회에 실패하여 기본값을 사용합니다. => {} (THEME: {}, COUNT: {})", e, theme, count);
                fallback::suggestions()
            })
    }

    fn try_suggest_by_theme<R: Rng + ?Sized>(&self, rng: &mut R, theme: &str, count: usize) -> Result<Suggestions, CatalogError> {
        if count > self.theme_window {
            return Err(CatalogError::InvalidRequest(format!("count {} exceeds window size {}", count, self.theme_window)));
        }
        if count == 0 {
            return Ok(Suggestions::default());
        }

        let request = Request::builder()
            .start(0)
            .max(self.theme_window)
            .theme(theme)
            .build()?;
        let records = self.client.list_titles(&request)?;
        debug!(theme, count, returned = records.len(), "테마 목록 조회 완료");

        sample_indices(rng, records.len(), count, self.theme_window)?
            .into_iter()
            .map(|i| -> Result<BookSummary, CatalogError> {
                let record = &records[i];
                let title = required(&record.titleweb, "titleweb")?.clone();
                let isbn = required(&record.isbn, "isbn")?.clone().into_string();
                let cover_url = record.uri.clone()
                    .unwrap_or_else(|| self.client.cover_url_for(&isbn));
                Ok(BookSummary::new(title, cover_url, isbn))
            })
            .collect()
    }

    /// 제목 키워드로 검색한 결과 중 하나를 무작위로 골라 ISBN 을 돌려준다.
    ///
    /// 어떤 실패든 [`CatalogError::NotFound`] 로 보고한다.
    pub fn search_by_title(&self, keyword: &str) -> Result<String, CatalogError> {
        self.search_by_title_with(&mut rand::thread_rng(), keyword)
    }

    pub fn search_by_title_with<R: Rng + ?Sized>(&self, rng: &mut R, keyword: &str) -> Result<String, CatalogError> {
        self.try_search_by_title(rng, keyword)
            .map_err(|e| match e {
                CatalogError::NotFound(_) => e,
                other => CatalogError::NotFound(format!("title search {:?} failed: {}", keyword, other)),
            })
    }

    fn try_search_by_title<R: Rng + ?Sized>(&self, rng: &mut R, keyword: &str) -> Result<String, CatalogError> {
        let request = Request::builder()
            .start(0)
            .max(self.search_window)
            .search(keyword)
            .build()?;
        let records = self.client.list_titles(&request)?;

        let isbns: Vec<&Isbn> = records.iter()
            .filter_map(|record| record.isbn.as_ref())
            .collect();

        isbns.choose(rng)
            .map(|isbn| (*isbn).clone().into_string())
            .ok_or_else(|| CatalogError::NotFound(format!("no titles with an isbn match {:?}", keyword)))
    }

    /// (제목, 표지 URL). 실패하면 고정값
    pub fn basic_info(&self, isbn: &str) -> (String, String) {
        self.try_basic_info(isbn)
            .unwrap_or_else(|e| {
                warn!("도서 기본 정보 조회에 실패하여 기본값을 사용합니다. => {} (ISBN: {})", e, isbn);
                fallback::basic_info()
            })
    }

    fn try_basic_info(&self, isbn: &str) -> Result<(String, String), CatalogError> {
        let detail = self.client.get_title(isbn)?;
        let title = required(&detail.titleweb, "titleweb")?.clone();
        let cover_url = required(&detail.uri, "@uri")?.clone();
        Ok((title, cover_url))
    }

    /// 상세 페이지용 정보. 실패하면 모든 필드가 채워진 고정값을 돌려준다.
    pub fn full_info(&self, isbn: &str) -> BookDetail {
        self.try_full_info(isbn)
            .unwrap_or_else(|e| {
                warn!("도서 상세 정보 조회에 실패하여 기본값을 사용합니다. => {} (ISBN: {})", e, isbn);
                fallback::book_detail()
            })
    }

    fn try_full_info(&self, isbn: &str) -> Result<BookDetail, CatalogError> {
        let detail = self.client.get_title(isbn)?;

        Ok(BookDetail::builder()
            .author(reformat_author(required(&detail.author, "author")?))
            .synopsis(strip_html(required(&detail.flapcopy, "flapcopy")?))
            .author_bio(strip_html(required(&detail.authorbio, "authorbio")?))
            .isbn(required(&detail.isbn, "isbn")?.clone().into_string())
            .page_count(*required(&detail.pages, "pages")?)
            .theme_summary(join_themes(detail.theme_names()))
            .cover_url(required(&detail.uri, "@uri")?.clone())
            .title(required(&detail.titleweb, "titleweb")?.clone())
            .build())
    }

    /// 첫 번째 테마. 테마가 없거나 조회에 실패하면 `"None"`
    pub fn single_theme(&self, isbn: &str) -> String {
        match self.client.get_title(isbn) {
            Ok(detail) => detail.theme_names()
                .first()
                .cloned()
                .unwrap_or_else(|| NO_THEME.to_string()),
            Err(e) => {
                warn!("도서 테마 조회에 실패하였습니다. => {} (ISBN: {})", e, isbn);
                NO_THEME.to_string()
            }
        }
    }

    /// 즐겨찾기한 도서들의 대표 테마
    pub fn dominant_theme<S: AsRef<str>>(&self, isbns: &[S]) -> String {
        dominant_theme(isbns.iter().map(|isbn| self.single_theme(isbn.as_ref())))
    }
}

/// 가장 많이 등장한 테마를 고른다.
///
/// 1위가 `"None"` 이면 2위를 쓴다. 2위가 없으면 `"None"`. 동률이면 먼저 나온 테마가 앞선다.
pub fn dominant_theme<I: IntoIterator<Item = String>>(themes: I) -> String {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (order, theme) in themes.into_iter().enumerate() {
        counts.entry(theme).or_insert((0, order)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts.into_iter()
        .map(|(theme, (count, first_seen))| (theme, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let mut ranked = ranked.into_iter().map(|(theme, _, _)| theme);
    match ranked.next() {
        Some(first) if first == NO_THEME => ranked.next().unwrap_or(first),
        Some(first) => first,
        None => NO_THEME.to_string(),
    }
}
