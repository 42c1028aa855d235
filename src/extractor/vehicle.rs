// file: src/extractor/vehicle.rs
// description: brand, model, trim and lineup extraction from free-text vehicle names
// reference: dealer feed and finance-company catalog naming conventions

use crate::extractor::patterns::*;
use crate::models::ParsedVehicle;
use crate::reference::{ReferenceData, UNKNOWN_BRAND, UNKNOWN_MODEL};
use regex::Regex;
use std::sync::Arc;

const LINEUP_FUELS: [&str; 8] = ["가솔린", "디젤", "HEV", "PHEV", "EV", "LPG", "하이브리드", "전기"];

const MAX_TRIM_CHARS: usize = 50;

/// Splits a raw vehicle name into brand, model, trim and lineup hint.
///
/// Keyword scanning is first-match-wins in table order, never longest-match.
/// None of the operations fail: every step has a fallback value.
pub struct VehicleNameParser {
    reference: Arc<ReferenceData>,
}

impl VehicleNameParser {
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::builtin())
    }

    pub fn with_reference(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn parse(&self, raw_name: &str) -> ParsedVehicle {
        if raw_name.is_empty() {
            return ParsedVehicle {
                brand: UNKNOWN_BRAND.to_string(),
                model_name: UNKNOWN_MODEL.to_string(),
                trim: None,
                lineup: None,
                original_name: String::new(),
            };
        }

        let brand = self.extract_brand(raw_name);
        let model_name = self.extract_model_name(raw_name, &brand);
        let trim = self.extract_trim(raw_name, &model_name);
        let lineup = self.extract_lineup(raw_name);

        ParsedVehicle {
            brand,
            model_name,
            trim,
            lineup,
            original_name: raw_name.to_string(),
        }
    }

    pub fn extract_brand(&self, raw_name: &str) -> String {
        let name = raw_name.trim();
        if name.is_empty() {
            return UNKNOWN_BRAND.to_string();
        }

        if let Some(alias) = self
            .reference
            .brand_aliases
            .iter()
            .find(|entry| name.contains(entry.alias.as_str()))
        {
            return alias.brand.clone();
        }

        self.reference
            .brand_keywords
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| name.contains(k.as_str())))
            .map(|entry| entry.brand.clone())
            .unwrap_or_else(|| UNKNOWN_BRAND.to_string())
    }

    /// Base model plus a powertrain suffix. PHEV outranks HEV, which outranks EV.
    pub fn extract_model_name(&self, raw_name: &str, brand: &str) -> String {
        let original = raw_name.trim();
        if original.is_empty() {
            return UNKNOWN_MODEL.to_string();
        }
        let upper = original.to_uppercase();

        let base_model = self
            .reference
            .keywords_for(brand)
            .iter()
            .find(|keyword| upper.contains(&keyword.to_uppercase()))
            .cloned()
            .unwrap_or_else(|| original.split_whitespace().take(2).collect::<Vec<_>>().join(" "));

        if upper.contains("PHEV") || upper.contains("플러그인") {
            return format!("{} PHEV", base_model);
        }

        if upper.contains("HEV") || upper.contains("하이브리드") || upper.contains("HYBRID") {
            return format!("{} HEV", base_model);
        }

        if !base_model.to_uppercase().contains("EV")
            && (upper.contains("일렉트릭") || upper.contains("ELECTRIC"))
        {
            return format!("{} EV", base_model);
        }

        base_model
    }

    /// Trim text after the first occurrence of `model_name`.
    pub fn extract_trim(&self, raw_name: &str, model_name: &str) -> Option<String> {
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }

        let index = name.find(model_name)?;
        let after_model = name[index + model_name.len()..].trim();

        let patterns: [&Regex; 4] = [&*TRIM_DISPLACEMENT, &*TRIM_GRADE, &*TRIM_DRIVE, &*TRIM_SEATS];
        if let Some(found) = patterns
            .iter()
            .find_map(|pattern| pattern.captures(after_model))
            .and_then(|caps| caps.get(1))
        {
            return Some(found.as_str().to_string());
        }

        let length = after_model.chars().count();
        if length > 0 && length < MAX_TRIM_CHARS {
            return Some(after_model.to_string());
        }

        None
    }

    /// Year and fuel hint, e.g. `24MY 가솔린`.
    pub fn extract_lineup(&self, raw_name: &str) -> Option<String> {
        let name = raw_name.trim();
        let fuel = LINEUP_FUELS.iter().find(|fuel| name.contains(*fuel))?;

        match NAME_YEAR.captures(name).and_then(|caps| caps.get(1)) {
            Some(year) => Some(format!("{}MY {}", year.as_str(), fuel)),
            None => Some(fuel.to_string()),
        }
    }

    /// Canonical brand for a known alias, otherwise the input unchanged.
    pub fn normalize_brand(&self, brand: &str) -> String {
        self.reference
            .alias_brand(brand)
            .unwrap_or(brand)
            .to_string()
    }

    pub fn all_brands(&self) -> Vec<String> {
        self.reference
            .brand_keywords
            .iter()
            .map(|entry| entry.brand.clone())
            .collect()
    }
}

impl Default for VehicleNameParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_vehicle_name(raw_name: &str) -> ParsedVehicle {
    VehicleNameParser::new().parse(raw_name)
}

pub fn extract_brand(raw_name: &str) -> String {
    VehicleNameParser::new().extract_brand(raw_name)
}

pub fn extract_model_name(raw_name: &str, brand: &str) -> String {
    VehicleNameParser::new().extract_model_name(raw_name, brand)
}

pub fn extract_trim(raw_name: &str, model_name: &str) -> Option<String> {
    VehicleNameParser::new().extract_trim(raw_name, model_name)
}

pub fn extract_lineup(raw_name: &str) -> Option<String> {
    VehicleNameParser::new().extract_lineup(raw_name)
}

pub fn normalize_brand(brand: &str) -> String {
    VehicleNameParser::new().normalize_brand(brand)
}

pub fn all_brands() -> Vec<String> {
    VehicleNameParser::new().all_brands()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brand_from_model_keyword() {
        assert_eq!(extract_brand("더 뉴 아반떼 1.6 터보"), "현대");
        assert_eq!(extract_brand("Model Y Long Range"), "테슬라");
        assert_eq!(extract_brand("더 뉴 카니발 HEV 9인승"), "기아");
    }

    #[test]
    fn test_brand_alias_wins_over_keyword() {
        // "K5" would otherwise resolve to 기아
        assert_eq!(extract_brand("현대 K5 렌터카"), "현대");
        assert_eq!(extract_brand("Mercedes-Benz E클래스"), "벤츠");
        assert_eq!(extract_brand("쌍용 티볼리"), "KGM");
    }

    #[test]
    fn test_brand_first_match_not_longest() {
        // 레이 (기아) is declared after 그랜저 (현대), so 그랜저 wins
        assert_eq!(extract_brand("그랜저 레이싱 에디션"), "현대");
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(extract_brand(""), "기타");
        assert_eq!(extract_brand("   "), "기타");
        assert_eq!(extract_brand("람보르기니 우루스"), "기타");
    }

    #[test]
    fn test_model_name_base_keyword() {
        assert_eq!(extract_model_name("더 뉴 아반떼 1.6 터보", "현대"), "아반떼");
        assert_eq!(extract_model_name("model y long range", "테슬라"), "Model Y");
    }

    #[test]
    fn test_model_name_token_fallback() {
        assert_eq!(extract_model_name("람보르기니 우루스 S", "기타"), "람보르기니 우루스");
        assert_eq!(extract_model_name("우루스", "기타"), "우루스");
        assert_eq!(extract_model_name("", "현대"), "알수없음");
    }

    #[test]
    fn test_model_name_powertrain_priority() {
        assert_eq!(extract_model_name("쏘렌토 PHEV 하이브리드", "기아"), "쏘렌토 PHEV");
        assert_eq!(extract_model_name("쏘렌토 플러그인 HEV", "기아"), "쏘렌토 PHEV");
        assert_eq!(extract_model_name("쏘렌토 하이브리드 1.6T", "기아"), "쏘렌토 HEV");
        assert_eq!(extract_model_name("Grandeur Hybrid 그랜저", "현대"), "그랜저 HEV");
        assert_eq!(extract_model_name("코나 일렉트릭 롱레인지", "현대"), "코나 EV");
    }

    #[test]
    fn test_model_name_no_duplicate_ev_suffix() {
        assert_eq!(extract_model_name("EV6 일렉트릭", "기아"), "EV6");
    }

    #[test]
    fn test_trim_patterns_in_order() {
        let parser = VehicleNameParser::new();
        assert_eq!(
            parser.extract_trim("더 뉴 아반떼 1.6 터보 인스퍼레이션", "아반떼"),
            Some("1.6 터보".to_string())
        );
        assert_eq!(
            parser.extract_trim("그랜저 캘리그라피 AWD", "그랜저"),
            Some("캘리그라피".to_string())
        );
        assert_eq!(parser.extract_trim("카니발 AWD 9인승", "카니발"), Some("AWD".to_string()));
        assert_eq!(parser.extract_trim("카니발 9인승", "카니발"), Some("9인승".to_string()));
    }

    #[test]
    fn test_trim_remainder_and_absence() {
        let parser = VehicleNameParser::new();
        assert_eq!(
            parser.extract_trim("Model Y Long Range", "Model Y"),
            Some("Long Range".to_string())
        );
        assert_eq!(parser.extract_trim("카니발", "카니발"), None);
        assert_eq!(parser.extract_trim("카니발 하이브리드", "카니발 HEV"), None);

        let long_tail = format!("카니발 {}", "가".repeat(60));
        assert_eq!(parser.extract_trim(&long_tail, "카니발"), None);
    }

    #[test]
    fn test_lineup_hint() {
        assert_eq!(extract_lineup("카니발 24MY HEV"), Some("24MY HEV".to_string()));
        assert_eq!(extract_lineup("쏘렌토 가솔린"), Some("가솔린".to_string()));
        assert_eq!(extract_lineup("Model Y Long Range"), None);
        // 가솔린 is checked before HEV
        assert_eq!(extract_lineup("2025년 가솔린 HEV"), Some("2025MY 가솔린".to_string()));
    }

    #[test]
    fn test_parse_vehicle_name() {
        let parsed = parse_vehicle_name("더 뉴 아반떼 1.6 터보");
        assert_eq!(
            parsed,
            ParsedVehicle {
                brand: "현대".to_string(),
                model_name: "아반떼".to_string(),
                trim: Some("1.6 터보".to_string()),
                lineup: None,
                original_name: "더 뉴 아반떼 1.6 터보".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_name() {
        let parsed = parse_vehicle_name("");
        assert_eq!(parsed.brand, "기타");
        assert_eq!(parsed.model_name, "알수없음");
        assert_eq!(parsed.trim, None);
        assert_eq!(parsed.lineup, None);
        assert_eq!(parsed.original_name, "");
        assert!(parsed.is_unknown_brand());
    }

    #[test]
    fn test_normalize_brand_and_all_brands() {
        assert_eq!(normalize_brand("HYUNDAI"), "현대");
        assert_eq!(normalize_brand("Renault Korea"), "르노코리아");
        assert_eq!(normalize_brand("BYD"), "BYD");

        let brands = all_brands();
        assert_eq!(brands.first().map(String::as_str), Some("현대"));
        assert_eq!(brands.last().map(String::as_str), Some("르노코리아"));
        assert_eq!(brands.len(), 12);
    }
}
