// file: src/normalizer/lineup.rs
// description: canonical lineup descriptor (year, fuel, displacement, drive, seats)
// reference: manufacturer engine specifications

use crate::extractor::patterns::{
    DISPLACEMENT, EV_SERIES, MODEL_YEAR, MY_YEAR, SEATS, TESLA_MODEL, TURBO_DISPLACEMENT,
    contains_ascii_word,
};
use crate::reference::ReferenceData;
use std::sync::Arc;

pub const FUEL_HYBRID: &str = "하이브리드";
pub const FUEL_GASOLINE: &str = "가솔린";
pub const FUEL_DIESEL: &str = "디젤";
pub const FUEL_ELECTRIC: &str = "전기";
pub const FUEL_LPG: &str = "LPG";

const LINEUP_FUELS: [&str; 5] = [FUEL_HYBRID, FUEL_GASOLINE, FUEL_DIESEL, FUEL_ELECTRIC, FUEL_LPG];

/// Fields pulled out of a free-text lineup. Lives for one normalization call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLineup {
    pub year: Option<String>,
    pub fuel: Option<String>,
    pub displacement: Option<String>,
    pub turbo: bool,
    pub drive: Option<String>,
    pub seats: Option<String>,
}

impl ParsedLineup {
    pub fn parse(lineup: &str) -> Self {
        Self {
            year: parse_year(lineup),
            fuel: LINEUP_FUELS
                .iter()
                .find(|fuel| lineup.contains(*fuel))
                .map(|fuel| fuel.to_string()),
            displacement: DISPLACEMENT
                .captures(lineup)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
            turbo: lineup.contains("터보")
                || lineup.contains("T ")
                || TURBO_DISPLACEMENT.is_match(lineup),
            drive: parse_drive(lineup),
            seats: parse_seats(lineup),
        }
    }

    fn render(&self, show_seats: bool) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(year) = &self.year {
            parts.push(year.clone());
        }
        if let Some(fuel) = &self.fuel {
            parts.push(fuel.clone());
        }
        if let Some(displacement) = &self.displacement {
            if self.turbo {
                parts.push(format!("{}T", displacement));
            } else {
                parts.push(displacement.clone());
            }
        }
        if let Some(drive) = &self.drive {
            parts.push(drive.clone());
        }
        if show_seats && let Some(seats) = &self.seats {
            parts.push(seats.clone());
        }

        parts.join(" ")
    }
}

fn parse_year(lineup: &str) -> Option<String> {
    if let Some(found) = MODEL_YEAR.find(lineup) {
        return Some(found.as_str().to_string());
    }

    let year = MY_YEAR.captures(lineup)?.get(1)?.as_str();
    if year.len() == 2 {
        Some(format!("20{}년형", year))
    } else {
        Some(format!("{}년형", year))
    }
}

fn parse_drive(lineup: &str) -> Option<String> {
    if lineup.contains("AWD") || lineup.contains("4WD") {
        Some("AWD".to_string())
    } else if lineup.contains("2WD") {
        Some("2WD".to_string())
    } else if lineup.contains("RWD") {
        Some("RWD".to_string())
    } else {
        None
    }
}

fn parse_seats(text: &str) -> Option<String> {
    SEATS.find(text).map(|m| m.as_str().to_string())
}

fn is_tesla(vehicle_name: &str) -> bool {
    TESLA_MODEL.is_match(vehicle_name)
}

/// Electric naming: a standalone "EV", an EV-series model (EV6), 일렉트릭 or 아이오닉.
fn has_electric_marker(vehicle_name: &str) -> bool {
    contains_ascii_word(vehicle_name, "EV")
        || EV_SERIES.is_match(vehicle_name)
        || vehicle_name.contains("일렉트릭")
        || vehicle_name.contains("아이오닉")
}

// Only consulted when the lineup names no fuel.
fn infer_fuel(vehicle_name: &str) -> &'static str {
    if vehicle_name.contains("HEV") {
        FUEL_HYBRID
    } else if has_electric_marker(vehicle_name) || is_tesla(vehicle_name) {
        FUEL_ELECTRIC
    } else if vehicle_name.contains("LPG") {
        FUEL_LPG
    } else if vehicle_name.contains("디젤") {
        FUEL_DIESEL
    } else {
        FUEL_GASOLINE
    }
}

/// Rewrites lineup strings from different sources into one comparable form:
/// `[year] [fuel] [displacement(T)] [drive] [seats]`, absent fields omitted.
///
/// Reference tables fill in missing displacements and correct turbo and
/// drivetrain markers that a model cannot have.
pub struct LineupNormalizer {
    reference: Arc<ReferenceData>,
}

impl LineupNormalizer {
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::builtin())
    }

    pub fn with_reference(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn normalize(
        &self,
        lineup: &str,
        vehicle_name: &str,
        raw_vehicle_name: Option<&str>,
    ) -> String {
        let mut parsed = ParsedLineup::parse(lineup);

        if parsed.seats.is_none() {
            parsed.seats = raw_vehicle_name.and_then(parse_seats);
        }

        if parsed.fuel.is_none() {
            parsed.fuel = Some(infer_fuel(vehicle_name).to_string());
        }

        let show_seats = parsed.seats.is_some() && self.reference.is_multi_seat(vehicle_name);

        let is_electric = parsed.fuel.as_deref() == Some(FUEL_ELECTRIC)
            || has_electric_marker(vehicle_name);
        if is_electric && !vehicle_name.contains("HEV") {
            return self.render_electric(&parsed, vehicle_name, show_seats);
        }

        self.correct_turbo(&mut parsed, vehicle_name);

        if self.reference.has_no_drive(vehicle_name) {
            parsed.drive = None;
        }

        if let Some(spec) = self.reference.engine_spec(vehicle_name) {
            match parsed.displacement.as_deref() {
                None if !spec.displacement.is_empty() => {
                    parsed.displacement = Some(spec.displacement.clone());
                    parsed.turbo = parsed.turbo || spec.turbo;
                }
                Some(displacement) if displacement == spec.displacement && spec.turbo => {
                    parsed.turbo = true;
                }
                _ => {}
            }
            self.correct_turbo(&mut parsed, vehicle_name);
        }

        parsed.render(show_seats)
    }

    /// True when both lineups normalize to the same descriptor for `vehicle_name`.
    pub fn is_same_lineup(&self, first: &str, second: &str, vehicle_name: &str) -> bool {
        self.normalize(first, vehicle_name, None) == self.normalize(second, vehicle_name, None)
    }

    // Electric models never carry a displacement; Teslas never carry a drivetrain.
    fn render_electric(&self, parsed: &ParsedLineup, vehicle_name: &str, show_seats: bool) -> String {
        let drive = if is_tesla(vehicle_name) || self.reference.has_no_drive(vehicle_name) {
            None
        } else {
            parsed.drive.clone()
        };

        let electric = ParsedLineup {
            year: parsed.year.clone(),
            fuel: Some(FUEL_ELECTRIC.to_string()),
            displacement: None,
            turbo: false,
            drive,
            seats: parsed.seats.clone(),
        };
        electric.render(show_seats)
    }

    fn correct_turbo(&self, parsed: &mut ParsedLineup, vehicle_name: &str) {
        if !parsed.turbo {
            return;
        }

        if self.reference.is_never_turbo(vehicle_name) {
            parsed.turbo = false;
            return;
        }

        if let Some(displacement) = parsed.displacement.as_deref()
            && self.reference.is_natural_aspiration(vehicle_name, displacement)
        {
            parsed.turbo = false;
        }
    }
}

impl Default for LineupNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn normalize_lineup(lineup: &str, vehicle_name: &str, raw_vehicle_name: Option<&str>) -> String {
    LineupNormalizer::new().normalize(lineup, vehicle_name, raw_vehicle_name)
}

pub fn is_same_lineup(first: &str, second: &str, vehicle_name: &str) -> bool {
    LineupNormalizer::new().is_same_lineup(first, second, vehicle_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_lineup_fields() {
        let parsed = ParsedLineup::parse("2025년형 가솔린 1.6T 2WD 7인승");
        assert_eq!(
            parsed,
            ParsedLineup {
                year: Some("2025년형".to_string()),
                fuel: Some("가솔린".to_string()),
                displacement: Some("1.6".to_string()),
                turbo: true,
                drive: Some("2WD".to_string()),
                seats: Some("7인승".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_year_variants() {
        assert_eq!(parse_year("25 MY 하이브리드").as_deref(), Some("2025년형"));
        assert_eq!(ParsedLineup::parse("25MY 가솔린").year, Some("2025년형".to_string()));
        assert_eq!(ParsedLineup::parse("2026MY HEV").year, Some("2026년형".to_string()));
        assert_eq!(ParsedLineup::parse("가솔린").year, None);
    }

    #[test]
    fn test_parse_drive_unifies_4wd() {
        assert_eq!(ParsedLineup::parse("디젤 2.2 4WD").drive, Some("AWD".to_string()));
        assert_eq!(ParsedLineup::parse("전기 RWD").drive, Some("RWD".to_string()));
        assert_eq!(ParsedLineup::parse("가솔린 2.5").drive, None);
    }

    #[test]
    fn test_hybrid_backfills_turbo_displacement() {
        assert_eq!(
            normalize_lineup("2025년형 하이브리드 2WD 5인승", "카니발 HEV", None),
            "2025년형 하이브리드 1.6T 2WD 5인승"
        );
    }

    #[test]
    fn test_empty_lineup_for_electric_model() {
        assert_eq!(normalize_lineup("", "디 올 뉴 코나 EV", None), "전기");
    }

    #[test]
    fn test_tesla_never_shows_drive() {
        assert_eq!(
            normalize_lineup("2025년형 전기 AWD", "Model Y Long Range", None),
            "2025년형 전기"
        );
        assert_eq!(normalize_lineup("RWD", "New Model 3", None), "전기");
    }

    #[test]
    fn test_explicit_fuel_beats_tesla_naming() {
        // "Model Year" is not a Tesla model
        assert_eq!(
            normalize_lineup("2025년형 가솔린 2.0T AWD", "2025 Model Year 아반떼 N", None),
            "2025년형 가솔린 2.0T AWD"
        );
        // a Tesla name only supplies the fuel when the lineup has none
        assert_eq!(normalize_lineup("가솔린", "Model Y Long Range", None), "가솔린");
        assert_eq!(normalize_lineup("2025년형", "Model Y Long Range", None), "2025년형 전기");
    }

    #[test]
    fn test_ev_series_names_are_electric() {
        assert_eq!(normalize_lineup("2025년형 AWD", "더 뉴 EV6", None), "2025년형 전기 AWD");
        assert_eq!(normalize_lineup("", "EV9", None), "전기");
    }

    #[test]
    fn test_electric_keeps_drive_and_drops_displacement() {
        assert_eq!(
            normalize_lineup("2025년형 전기 AWD", "더 뉴 아이오닉 5", None),
            "2025년형 전기 AWD"
        );
        assert_eq!(normalize_lineup("전기 1.6 2WD", "EV3", None), "전기 2WD");
    }

    #[test]
    fn test_hybrid_name_is_not_electric() {
        // 아이오닉 marks electric, but HEV in the name wins
        let lineup = normalize_lineup("하이브리드 1.6", "아이오닉 HEV", None);
        assert_eq!(lineup, "하이브리드 1.6");
    }

    #[test]
    fn test_never_turbo_models() {
        assert_eq!(normalize_lineup("가솔린 1.0 터보", "더 뉴 모닝", None), "가솔린 1.0");
        assert_eq!(normalize_lineup("가솔린 1.0T", "레이", None), "가솔린 1.0");
    }

    #[test]
    fn test_natural_aspiration_displacements() {
        assert_eq!(normalize_lineup("가솔린 2.5T", "The New K8", None), "가솔린 2.5");
        assert_eq!(normalize_lineup("가솔린 1.6", "The New K8", None), "가솔린 1.6T");
        assert_eq!(normalize_lineup("가솔린 2.5 터보", "디 올 뉴 그랜저", None), "가솔린 2.5");
        // K9 is found first but only 그랜저's set holds 2.5
        assert_eq!(normalize_lineup("가솔린 2.5T", "그랜저 K9", None), "가솔린 2.5");
    }

    #[test]
    fn test_drive_suppressed_for_single_drive_models() {
        assert_eq!(normalize_lineup("가솔린 1.0 2WD", "더 뉴 레이 PE", None), "가솔린 1.0");
        assert_eq!(normalize_lineup("2WD", "레이 EV", None), "전기");
    }

    #[test]
    fn test_seats_only_for_multi_seat_models() {
        assert_eq!(normalize_lineup("가솔린 1.6 5인승", "아반떼", None), "가솔린 1.6");
        assert_eq!(normalize_lineup("디젤 2.2 9인승", "더 뉴 카니발", None), "디젤 2.2 9인승");
    }

    #[test]
    fn test_seats_from_raw_name() {
        assert_eq!(
            normalize_lineup("가솔린 3.5", "더 뉴 카니발", Some("더 뉴 카니발 3.5 시그니처 7인승")),
            "가솔린 3.5 7인승"
        );
        // lineup seats take precedence over the raw name
        assert_eq!(
            normalize_lineup("가솔린 3.5 9인승", "더 뉴 카니발", Some("더 뉴 카니발 7인승")),
            "가솔린 3.5 9인승"
        );
    }

    #[test]
    fn test_spec_turbo_only_for_matching_displacement() {
        // engine table says 2.5T; 2.2 is a different engine
        assert_eq!(normalize_lineup("디젤 2.2", "쏘렌토", None), "디젤 2.2");
        assert_eq!(normalize_lineup("가솔린 2.5", "쏘렌토", None), "가솔린 2.5T");
    }

    #[test]
    fn test_fuel_inference() {
        assert_eq!(normalize_lineup("2025년형", "아반떼", None), "2025년형 가솔린 1.6");
        assert_eq!(normalize_lineup("", "스타리아 LPG", None), "LPG");
        assert_eq!(normalize_lineup("", "봉고 디젤", None), "디젤");
        assert_eq!(normalize_lineup("", "카니발 HEV", None), "하이브리드 1.6T");
    }

    #[test]
    fn test_unknown_model_without_spec() {
        assert_eq!(normalize_lineup("", "알수없음", None), "가솔린");
        assert_eq!(normalize_lineup("2WD", "알수없음", None), "가솔린 2WD");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let normalizer = LineupNormalizer::new();
        let inputs = [
            ("2025년형 하이브리드 2WD 5인승", "카니발 HEV", None),
            ("25MY 가솔린 1.6T AWD", "더 뉴 투싼", None),
            ("", "디 올 뉴 코나 EV", Some("디 올 뉴 코나 EV 롱레인지")),
        ];
        for (lineup, name, raw) in inputs {
            let first = normalizer.normalize(lineup, name, raw);
            let second = normalizer.normalize(lineup, name, raw);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_never_turbo_names_never_end_in_t() {
        let lineups = ["가솔린 1.0T", "터보", "1.0 T 2WD", "", "가솔린"];
        let data = ReferenceData::builtin();
        for model in &data.never_turbo_models {
            for lineup in lineups {
                let normalized = normalize_lineup(lineup, model, None);
                assert!(
                    !normalized.split(' ').any(|part| part.ends_with('T') && part.contains('.')),
                    "{model}: {normalized}"
                );
            }
        }
    }

    #[test]
    fn test_is_same_lineup() {
        assert!(is_same_lineup("25MY 하이브리드", "2025년형 하이브리드 1.6T", "카니발 HEV"));
        assert!(is_same_lineup("가솔린 1.6 4WD", "가솔린 1.6 AWD", "아반떼"));
        assert!(!is_same_lineup("가솔린 3.5", "가솔린 1.6", "카니발"));
    }
}
