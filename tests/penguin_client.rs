use book_discovery_rust::discovery::{fallback, Discovery};
use book_discovery_rust::provider::penguin::Client;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLES_PATH: &str = "/resources/titles";

/// blocking 클라이언트는 비동기 런타임 안에서 만들거나 버릴 수 없으므로 별도 스레드에서 실행한다.
async fn with_discovery<T, F>(server: &MockServer, timeout: Duration, f: F) -> T
where
    F: FnOnce(Discovery<Client>) -> T + Send + 'static,
    T: Send + 'static,
{
    let base_url = format!("{}{}", server.uri(), TITLES_PATH);
    tokio::task::spawn_blocking(move || {
        let client = Client::new(&base_url, timeout).unwrap();
        f(Discovery::new(client, 100, 10))
    })
    .await
    .unwrap()
}

async fn discovery<T, F>(server: &MockServer, f: F) -> T
where
    F: FnOnce(Discovery<Client>) -> T + Send + 'static,
    T: Send + 'static,
{
    with_discovery(server, Duration::from_secs(5), f).await
}

fn title_page(n: usize) -> Value {
    let titles: Vec<Value> = (0..n)
        .map(|i| json!({
            "titleweb": format!("Book {}", i),
            "isbn": format!("978000000{:04}", i),
            "@uri": format!("https://covers.test/{}", i),
        }))
        .collect();
    json!({ "title": titles })
}

fn beloved() -> Value {
    json!({
        "author": "Morrison, Toni",
        "flapcopy": "<p>Staring <b>unflinchingly</b> into the abyss of slavery.</p>",
        "authorbio": "<p>Toni Morrison was the Nobel Prize winner.</p>",
        "isbn": "9781400033416",
        "pages": 324,
        "themes": { "theme": ["Friendship", "Horror", "Thriller", "Adventure"] },
        "@uri": "https://covers.test/9781400033416",
        "titleweb": "Beloved"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_queries_theme_window_and_samples_distinct_titles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TITLES_PATH))
        .and(header("accept", "application/json"))
        .and(query_param("start", "0"))
        .and(query_param("max", "100"))
        .and(query_param("expandlevel", "1"))
        .and(query_param("theme", "Coming of Age"))
        .respond_with(ResponseTemplate::new(200).set_body_json(title_page(100)))
        .expect(1)
        .mount(&server)
        .await;

    let suggestions = discovery(&server, |d| d.suggest_by_theme("Coming of Age", 5)).await;

    assert_eq!(suggestions.len(), 5);
    assert_eq!(suggestions.cover_urls().len(), 5);
    assert_eq!(suggestions.isbns().iter().collect::<HashSet<_>>().len(), 5);
    for (title, cover) in suggestions.titles().iter().zip(suggestions.cover_urls()) {
        let index = title.trim_start_matches("Book ");
        assert_eq!(cover, &format!("https://covers.test/{}", index));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_accepts_single_object_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TITLES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": { "titleweb": "Only One", "isbn": 9780000000001u64 }
        })))
        .mount(&server)
        .await;

    let suggestions = discovery(&server, |d| d.suggest_by_theme("Horror", 3)).await;

    assert_eq!(suggestions.titles(), &["Only One".to_string()]);
    assert_eq!(suggestions.isbns(), &["9780000000001".to_string()]);
    assert!(suggestions.cover_urls()[0].ends_with("/resources/titles/9780000000001"));
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let suggestions = discovery(&server, |d| d.suggest_by_theme("Horror", 3)).await;
    assert_eq!(suggestions, fallback::suggestions());
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_falls_back_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let suggestions = discovery(&server, |d| d.suggest_by_theme("Horror", 3)).await;
    assert_eq!(suggestions, fallback::suggestions());
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_falls_back_on_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let suggestions = discovery(&server, |d| d.suggest_by_theme("Horror", 3)).await;
    assert_eq!(suggestions, fallback::suggestions());
}

#[tokio::test(flavor = "multi_thread")]
async fn suggest_falls_back_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(title_page(10))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let suggestions = with_discovery(&server, Duration::from_millis(200), |d| d.suggest_by_theme("Horror", 3)).await;
    assert_eq!(suggestions, fallback::suggestions());
}

#[tokio::test(flavor = "multi_thread")]
async fn search_uses_search_parameter_and_returns_a_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TITLES_PATH))
        .and(query_param("max", "10"))
        .and(query_param("search", "Beloved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(title_page(3)))
        .mount(&server)
        .await;

    let isbn = discovery(&server, |d| d.search_by_title("Beloved")).await.unwrap();

    let expected: HashSet<String> = (0..3).map(|i| format!("978000000{:04}", i)).collect();
    assert!(expected.contains(&isbn));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_failure_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = discovery(&server, |d| d.search_by_title("Beloved")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(flavor = "multi_thread")]
async fn search_without_matches_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": [] })))
        .mount(&server)
        .await;

    let err = discovery(&server, |d| d.search_by_title("Zzzz")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(flavor = "multi_thread")]
async fn basic_info_reads_record_by_isbn() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources/titles/9781400033416"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(beloved()))
        .mount(&server)
        .await;

    let info = discovery(&server, |d| d.basic_info("9781400033416")).await;
    assert_eq!(info, ("Beloved".to_string(), "https://covers.test/9781400033416".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn basic_info_falls_back_on_missing_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let info = discovery(&server, |d| d.basic_info("9781400033416")).await;
    assert_eq!(info, fallback::basic_info());
}

#[tokio::test(flavor = "multi_thread")]
async fn full_info_normalizes_and_repeats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources/titles/9781400033416"))
        .respond_with(ResponseTemplate::new(200).set_body_json(beloved()))
        .expect(2)
        .mount(&server)
        .await;

    let (first, second) = discovery(&server, |d| {
        (d.full_info("9781400033416"), d.full_info("9781400033416"))
    }).await;

    assert_eq!(first, second);
    assert_eq!(first.author(), "Toni Morrison");
    assert_eq!(first.synopsis(), "Staring unflinchingly into the abyss of slavery.");
    assert_eq!(first.author_bio(), "Toni Morrison was the Nobel Prize winner.");
    assert_eq!(first.page_count(), 324);
    assert_eq!(first.theme_summary(), "Themes: Friendship, Horror, Thriller, Adventure");
    assert_eq!(first.title(), "Beloved");
}

#[tokio::test(flavor = "multi_thread")]
async fn full_info_falls_back_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let detail = discovery(&server, |d| d.full_info("9781400033416")).await;
    assert_eq!(detail, fallback::book_detail());
}

#[tokio::test(flavor = "multi_thread")]
async fn single_theme_reads_first_theme() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resources/titles/123456789123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "themes": { "theme": ["Coming of Age", "Fantasy", "War"] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resources/titles/111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "themes": null })))
        .mount(&server)
        .await;

    let (themed, unthemed) = discovery(&server, |d| {
        (d.single_theme("123456789123"), d.single_theme("111"))
    }).await;

    assert_eq!(themed, "Coming of Age");
    assert_eq!(unthemed, "None");
}
