use serde::Serialize;

/// 목록 화면에 필요한 최소한의 도서 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    title: String,
    cover_url: String,
    isbn: String,
}

impl BookSummary {
    pub fn new(title: String, cover_url: String, isbn: String) -> Self {
        Self { title, cover_url, isbn }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

/// 테마 추천 결과
///
/// 세 목록의 길이는 항상 같다. 요청한 개수보다 짧을 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    titles: Vec<String>,
    cover_urls: Vec<String>,
    isbns: Vec<String>,
}

impl Suggestions {
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn cover_urls(&self) -> &[String] {
        &self.cover_urls
    }

    pub fn isbns(&self) -> &[String] {
        &self.isbns
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (self.titles, self.cover_urls, self.isbns)
    }
}

impl FromIterator<BookSummary> for Suggestions {
    fn from_iter<I: IntoIterator<Item = BookSummary>>(iter: I) -> Self {
        let mut suggestions = Suggestions::default();
        for book in iter {
            suggestions.titles.push(book.title);
            suggestions.cover_urls.push(book.cover_url);
            suggestions.isbns.push(book.isbn);
        }
        suggestions
    }
}

/// 도서 상세 페이지에 필요한 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    author: String,
    synopsis: String,
    author_bio: String,
    isbn: String,
    page_count: u32,
    theme_summary: String,
    cover_url: String,
    title: String,
}

impl BookDetail {
    pub fn builder() -> BookDetailBuilder {
        BookDetailBuilder::default()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn author_bio(&self) -> &str {
        &self.author_bio
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn theme_summary(&self) -> &str {
        &self.theme_summary
    }

    pub fn cover_url(&self) -> &str {
        &self.cover_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Default)]
pub struct BookDetailBuilder {
    author: String,
    synopsis: String,
    author_bio: String,
    isbn: String,
    page_count: u32,
    theme_summary: String,
    cover_url: String,
    title: String,
}

impl BookDetailBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    pub fn author_bio(mut self, author_bio: impl Into<String>) -> Self {
        self.author_bio = author_bio.into();
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn theme_summary(mut self, theme_summary: impl Into<String>) -> Self {
        self.theme_summary = theme_summary.into();
        self
    }

    pub fn cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> BookDetail {
        BookDetail {
            author: self.author,
            synopsis: self.synopsis,
            author_bio: self.author_bio,
            isbn: self.isbn,
            page_count: self.page_count,
            theme_summary: self.theme_summary,
            cover_url: self.cover_url,
            title: self.title,
        }
    }
}
