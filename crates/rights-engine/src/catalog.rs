//! Static detection configuration: keyword lexicon and pattern rules
//!
//! The catalog is loaded once at engine construction and is immutable
//! afterwards, so it can be shared read-only across any number of
//! concurrent callers. Pattern rules carry an explicit severity and are
//! evaluated before the keyword lexicon; keywords always produce
//! `Severity::Normal` findings.

use regex::Regex;
use shared_types::{Category, Severity};

use crate::error::CatalogError;

// ============================================================================
// Keyword lexicon
// ============================================================================
//
// Keywords are stored lowercase; the analyzer lowercases the input once and
// matches via substring containment.

/// Discrimination indicators (차별)
pub const DISCRIMINATION_KEYWORDS: &[&str] = &[
    "차별",
    "따돌림",
    "괴롭힘",
    "무시",
    "배제",
    "구별",
    "편견",
    "흑인",
    "고릴라",
    "피부색",
    "인종",
    "외국인",
    "다문화",
    "장애인",
    "장애",
    "못생겼다",
    "뚱뚱하다",
    "키 작다",
    "가난하다",
];

/// Physical violence indicators (폭력)
pub const VIOLENCE_KEYWORDS: &[&str] = &[
    "때리기",
    "폭력",
    "체벌",
    "구타",
    "때림",
    "맞음",
    "상처",
    "밀치기",
    "할퀴기",
    "꼬집기",
    "발로 차기",
    "던지기",
];

/// Privacy intrusion indicators (사생활 침해)
pub const PRIVACY_KEYWORDS: &[&str] = &[
    "사생활",
    "개인정보",
    "비밀",
    "몰래",
    "훔쳐봄",
    "엿듣기",
    "몰래카메라",
    "사진 찍기",
    "녹음",
    "일기 보기",
    "가방 뒤지기",
];

/// Right-to-education indicators (교육권)
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "공부",
    "교육",
    "학교",
    "수업",
    "배움",
    "가르침",
    "학원 못 가기",
    "책 없음",
    "컴퓨터 없음",
    "인터넷 없음",
];

/// Freedom-of-expression indicators (표현의 자유)
pub const EXPRESSION_KEYWORDS: &[&str] = &[
    "말하기",
    "의견",
    "생각",
    "표현",
    "발표",
    "글쓰기",
    "입 막기",
    "조용히 해",
    "말 못하게",
    "검열",
];

/// Right-to-health indicators (건강권)
pub const HEALTH_KEYWORDS: &[&str] = &[
    "건강",
    "의료",
    "치료",
    "병원",
    "아픔",
    "다침",
    "급식",
    "물",
    "화장실",
    "환기",
    "청결",
    "위생",
];

/// Rest-and-leisure indicators (휴식권)
pub const REST_KEYWORDS: &[&str] = &[
    "휴식",
    "놀이",
    "쉬기",
    "자유시간",
    "여가",
    "놀이터",
    "공원",
    "운동장",
    "게임",
    "만화",
    "텔레비전",
];

/// Facility accessibility indicators (편의시설 접근권)
pub const FACILITY_ACCESS_KEYWORDS: &[&str] = &[
    "세면대",
    "화장실",
    "엘리베이터",
    "경사로",
    "휠체어",
    "계단",
    "문턱",
    "높이",
    "손이 닿지 않는",
    "이용할 수 없는",
];

/// Housing-environment indicators (주거환경권)
pub const HOUSING_ENVIRONMENT_KEYWORDS: &[&str] = &[
    "놀이터",
    "공원",
    "아파트",
    "집",
    "소음",
    "먼지",
    "위험한 길",
    "어두운 곳",
    "cctv",
    "안전",
];

/// Keyword list for a category, in detection order
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Discrimination => DISCRIMINATION_KEYWORDS,
        Category::Violence => VIOLENCE_KEYWORDS,
        Category::Privacy => PRIVACY_KEYWORDS,
        Category::Education => EDUCATION_KEYWORDS,
        Category::Expression => EXPRESSION_KEYWORDS,
        Category::Health => HEALTH_KEYWORDS,
        Category::Rest => REST_KEYWORDS,
        Category::FacilityAccess => FACILITY_ACCESS_KEYWORDS,
        Category::HousingEnvironment => HOUSING_ENVIRONMENT_KEYWORDS,
    }
}

// ============================================================================
// Pattern rules
// ============================================================================

/// Raw pattern-rule table: (label, category, expression, severity).
///
/// Expressions may span multiple tokens (wildcard gaps) to capture composite
/// phrasings a single keyword cannot. Declaration order is the evaluation
/// order.
const PATTERN_RULE_TABLE: &[(&str, Category, &str, Severity)] = &[
    // Racial-slur phrasings
    (
        "인종차별 표현",
        Category::Discrimination,
        "흑인.*고릴라",
        Severity::High,
    ),
    (
        "인종차별 표현",
        Category::Discrimination,
        "피부.*색깔.*동물",
        Severity::High,
    ),
    (
        "인종차별 표현",
        Category::Discrimination,
        "외국인.*못생겼다",
        Severity::High,
    ),
    // Facility accessibility problems
    (
        "접근성 문제",
        Category::FacilityAccess,
        "어린이.*세면대.*없",
        Severity::Medium,
    ),
    (
        "접근성 문제",
        Category::FacilityAccess,
        "키.*맞지.*않",
        Severity::Medium,
    ),
    (
        "접근성 문제",
        Category::FacilityAccess,
        "높아서.*이용.*못",
        Severity::Medium,
    ),
    (
        "접근성 문제",
        Category::FacilityAccess,
        "세면대.*높",
        Severity::Medium,
    ),
    // Missing play environment
    (
        "환경 문제",
        Category::HousingEnvironment,
        "놀이터.*없",
        Severity::Medium,
    ),
    (
        "환경 문제",
        Category::HousingEnvironment,
        "공원.*없",
        Severity::Medium,
    ),
    (
        "환경 문제",
        Category::HousingEnvironment,
        "놀.*곳.*없",
        Severity::Medium,
    ),
];

/// A compiled multi-token detection rule with explicit severity
#[derive(Debug)]
pub struct PatternRule {
    pub label: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub regex: Regex,
}

/// Immutable detection configuration, loaded once at process start
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: Vec<PatternRule>,
}

impl PatternCatalog {
    /// Compile the built-in rule table.
    ///
    /// A malformed expression is a startup configuration error: it aborts
    /// initialization here rather than surfacing per-request.
    pub fn load() -> Result<Self, CatalogError> {
        let mut patterns = Vec::with_capacity(PATTERN_RULE_TABLE.len());

        for &(label, category, expression, severity) in PATTERN_RULE_TABLE {
            let regex = Regex::new(expression).map_err(|source| CatalogError::BadPattern {
                label: label.to_string(),
                source,
            })?;
            patterns.push(PatternRule {
                label,
                category,
                severity,
                regex,
            });
        }

        Ok(Self { patterns })
    }

    /// Pattern rules in declaration order; checked before the keyword lexicon
    pub fn pattern_rules(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// Keyword lists per category, categories in declaration order
    pub fn keyword_rules(&self) -> impl Iterator<Item = (Category, &'static [&'static str])> {
        Category::ALL
            .iter()
            .map(|category| (*category, keywords_for(*category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = PatternCatalog::load().unwrap();
        assert_eq!(catalog.pattern_rules().len(), PATTERN_RULE_TABLE.len());
    }

    #[test]
    fn test_every_category_has_keywords() {
        let catalog = PatternCatalog::load().unwrap();
        for (category, keywords) in catalog.keyword_rules() {
            assert!(
                !keywords.is_empty(),
                "category {:?} has an empty keyword list",
                category
            );
        }
    }

    #[test]
    fn test_keywords_are_stored_lowercase() {
        for category in Category::ALL {
            for keyword in keywords_for(category) {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keyword '{}' would never match lowercased input",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_pattern_rules_carry_elevated_severity() {
        let catalog = PatternCatalog::load().unwrap();
        for rule in catalog.pattern_rules() {
            assert!(rule.severity > Severity::Normal, "rule '{}'", rule.label);
        }
    }

    #[test]
    fn test_keyword_rules_follow_category_order() {
        let catalog = PatternCatalog::load().unwrap();
        let order: Vec<Category> = catalog.keyword_rules().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
