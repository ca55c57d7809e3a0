use scraper::Html;

/// 테마가 하나도 없을 때 사용하는 표기
pub const NO_THEME: &str = "None";

/// HTML 조각에서 마크업을 제거하고 텍스트 노드만 문서 순서대로 이어 붙인다.
///
/// 마크업이 없는 문자열은 파싱하지 않고 그대로 돌려준다. 태그가 있으면 엔티티(`&amp;` 등)도 디코딩된다.
pub fn strip_html(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }

    Html::parse_fragment(input)
        .root_element()
        .text()
        .collect()
}

/// `"Themes: A, B, C"` 형태의 표시용 문자열. 테마가 없으면 `"None"`
pub fn join_themes(themes: &[String]) -> String {
    if themes.is_empty() {
        return NO_THEME.to_string();
    }
    format!("Themes: {}", themes.join(", "))
}

/// 카탈로그의 "성, 이름" 표기를 "이름 성" 으로 바꾼다.
///
/// 첫 번째 쉼표를 기준으로 나눈다. 쉼표가 없으면 앞뒤 공백만 제거한다.
pub fn reformat_author(author: &str) -> String {
    match author.split_once(',') {
        Some((last, first)) => {
            let (last, first) = (last.trim(), first.trim());
            match (first.is_empty(), last.is_empty()) {
                (true, _) => last.to_string(),
                (_, true) => first.to_string(),
                _ => format!("{} {}", first, last),
            }
        }
        None => author.trim().to_string(),
    }
}
