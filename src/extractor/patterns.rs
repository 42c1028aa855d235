// file: src/extractor/patterns.rs
// description: compiled regex patterns for vehicle name and lineup extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trim candidates, tried in this order
    pub static ref TRIM_DISPLACEMENT: Regex = Regex::new(
        r"(?i)(\d+\.\d+\s*(?:터보|가솔린|디젤|HEV|PHEV|EV|LPG)?)"
    ).expect("TRIM_DISPLACEMENT regex is valid");

    pub static ref TRIM_GRADE: Regex = Regex::new(
        r"(프리미엄|익스클루시브|시그니처|캘리그라피|노블레스|프레스티지|인스퍼레이션|모던|스마트|트렌디)"
    ).expect("TRIM_GRADE regex is valid");

    pub static ref TRIM_DRIVE: Regex = Regex::new(
        r"(2WD|4WD|AWD|FF|FR|RR)"
    ).expect("TRIM_DRIVE regex is valid");

    pub static ref TRIM_SEATS: Regex = Regex::new(
        r"([5-9]인승)"
    ).expect("TRIM_SEATS regex is valid");

    // Year hint inside a raw vehicle name (24MY, 2025년, 2024)
    pub static ref NAME_YEAR: Regex = Regex::new(
        r"(\d{2,4})(?:MY|년)?"
    ).expect("NAME_YEAR regex is valid");

    // Lineup fields
    pub static ref MODEL_YEAR: Regex = Regex::new(
        r"(\d{4})년형"
    ).expect("MODEL_YEAR regex is valid");

    pub static ref MY_YEAR: Regex = Regex::new(
        r"(\d{4}|\d{2})\s?MY"
    ).expect("MY_YEAR regex is valid");

    pub static ref DISPLACEMENT: Regex = Regex::new(
        r"(\d+\.\d+)"
    ).expect("DISPLACEMENT regex is valid");

    pub static ref TURBO_DISPLACEMENT: Regex = Regex::new(
        r"\d+\.\d+T"
    ).expect("TURBO_DISPLACEMENT regex is valid");

    pub static ref SEATS: Regex = Regex::new(
        r"(\d+)인승"
    ).expect("SEATS regex is valid");

    // Kia EV-series names (EV3, EV6, EV9), ASCII-bounded so Korean text may follow
    pub static ref EV_SERIES: Regex = Regex::new(
        r"(?:^|[^A-Za-z0-9_])EV\d{1,2}(?:[^A-Za-z0-9_]|$)"
    ).expect("EV_SERIES regex is valid");

    // Tesla naming (Model Y, 모델 3, Model3)
    pub static ref TESLA_MODEL: Regex = Regex::new(
        r"(?i)(?:Model\s?|모델\s?)[3YSXE]\b"
    ).expect("TESLA_MODEL regex is valid");
}

/// True when `token` appears in `text` with no ASCII letter, digit or underscore on either side.
///
/// Korean syllables count as boundaries, so "코나 EV" and "EV세단" both match while "HEV"
/// and "EV6" do not.
pub fn contains_ascii_word(text: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';

    text.match_indices(token).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + token.len()..].chars().next();
        !before.is_some_and(is_word) && !after.is_some_and(is_word)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_patterns() {
        assert_eq!(&TRIM_DISPLACEMENT.captures("1.6 터보 프레스티지").unwrap()[1], "1.6 터보");
        assert_eq!(&TRIM_DISPLACEMENT.captures("2.5 hev").unwrap()[1], "2.5 hev");
        assert_eq!(&TRIM_GRADE.captures("노블레스 스페셜").unwrap()[1], "노블레스");
        assert_eq!(&TRIM_DRIVE.captures("그래비티 AWD").unwrap()[1], "AWD");
        assert_eq!(&TRIM_SEATS.captures("하이리무진 7인승").unwrap()[1], "7인승");
        assert!(TRIM_SEATS.captures("11인승").is_none());
    }

    #[test]
    fn test_year_patterns() {
        assert_eq!(&MODEL_YEAR.captures("2025년형 가솔린").unwrap()[0], "2025년형");
        assert_eq!(&MY_YEAR.captures("25MY 가솔린").unwrap()[1], "25");
        assert_eq!(&MY_YEAR.captures("2026MY HEV").unwrap()[1], "2026");
        assert_eq!(&MY_YEAR.captures("25 MY 하이브리드").unwrap()[1], "25");
        assert_eq!(&NAME_YEAR.captures("카니발 24MY HEV").unwrap()[1], "24");
    }

    #[test]
    fn test_turbo_and_seats() {
        assert!(TURBO_DISPLACEMENT.is_match("가솔린 1.6T 2WD"));
        assert!(!TURBO_DISPLACEMENT.is_match("가솔린 1.6 2WD"));
        assert_eq!(&SEATS.captures("9인승").unwrap()[0], "9인승");
    }

    #[test]
    fn test_tesla_pattern() {
        assert!(TESLA_MODEL.is_match("Model Y Long Range"));
        assert!(TESLA_MODEL.is_match("New Model 3"));
        assert!(TESLA_MODEL.is_match("모델Y 퍼포먼스"));
        assert!(TESLA_MODEL.is_match("model3"));
        assert!(!TESLA_MODEL.is_match("모델링 패키지"));

        assert!(EV_SERIES.is_match("더 뉴 EV6"));
        assert!(EV_SERIES.is_match("EV9 GT-line"));
        assert!(EV_SERIES.is_match("EV3롱레인지"));
        assert!(!EV_SERIES.is_match("HEV6"));
        assert!(!EV_SERIES.is_match("EV"));
        assert!(!TESLA_MODEL.is_match("2025 Model Year 아반떼 N"));
        assert!(!TESLA_MODEL.is_match("Model Sport"));
    }

    #[test]
    fn test_contains_ascii_word() {
        assert!(contains_ascii_word("디 올 뉴 코나 EV", "EV"));
        assert!(contains_ascii_word("EV 롱레인지", "EV"));
        assert!(contains_ascii_word("코나EV", "EV"));
        assert!(!contains_ascii_word("카니발 HEV", "EV"));
        assert!(!contains_ascii_word("EV6 GT", "EV"));
        assert!(!contains_ascii_word("", "EV"));
        assert!(!contains_ascii_word("EV", ""));
    }
}
