//! 카탈로그 조회 실패 시 화면에 대신 보여줄 고정값

use crate::item::{BookDetail, BookSummary, Suggestions};
use crate::text::NO_THEME;

pub const SAMPLE_TITLE: &str = "Sample Title";
pub const SAMPLE_ISBN: &str = "9781400079148";
/// 로컬 정적 자원. 외부 URL 이 아니다.
pub const PLACEHOLDER_COVER: &str = "static/images/placeholder_cover.png";
pub const MISSING_TITLE: &str = "Missing information";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
pub const MISSING_SYNOPSIS: &str = "No synopsis is available for this book.";
pub const GENERIC_AUTHOR_BIO: &str = "No information about this author is available.";
pub const FALLBACK_PAGE_COUNT: u32 = 0;

/// 한 권짜리 추천 목록
pub fn suggestions() -> Suggestions {
    std::iter::once(BookSummary::new(
        SAMPLE_TITLE.to_string(),
        PLACEHOLDER_COVER.to_string(),
        SAMPLE_ISBN.to_string(),
    )).collect()
}

pub fn basic_info() -> (String, String) {
    (MISSING_TITLE.to_string(), PLACEHOLDER_COVER.to_string())
}

pub fn book_detail() -> BookDetail {
    BookDetail::builder()
        .author(ANONYMOUS_AUTHOR)
        .synopsis(MISSING_SYNOPSIS)
        .author_bio(GENERIC_AUTHOR_BIO)
        .isbn(SAMPLE_ISBN)
        .page_count(FALLBACK_PAGE_COUNT)
        .theme_summary(NO_THEME)
        .cover_url(PLACEHOLDER_COVER)
        .title(MISSING_TITLE)
        .build()
}
