//! Template-based reply composition
//!
//! Replies are deterministic: given identical input text and findings the
//! output is byte-identical, and contains nothing beyond the input echo
//! and static configured strings. One reference block is rendered per
//! distinct category, in first-occurrence order of the finding sequence;
//! the deduplication pass is stable so rendering order is reproducible.

use shared_types::{Category, Finding, Severity};

use crate::references::LegalReferenceStore;

/// Compose the full reply for one analyzed input
pub fn compose(references: &LegalReferenceStore, text: &str, findings: &[Finding]) -> String {
    if findings.is_empty() {
        return compose_reassurance(text);
    }

    let mut reply = String::new();

    reply.push_str("🔍 **말씀해주신 내용을 분석해보니:**\n");
    reply.push_str(&format!("\"{}\"\n\n", text));
    reply.push_str("다음과 같은 인권과 관련된 중요한 부분들이 있어요:\n");

    for (category, severity) in distinct_categories(findings) {
        reply.push('\n');
        reply.push_str(&compose_category_block(references, category, severity));
    }

    reply.push('\n');
    reply.push_str(CLOSING_FOOTER);

    reply
}

/// Fixed reassurance template for inputs with no findings; the only branch
/// without category-specific content
fn compose_reassurance(text: &str) -> String {
    format!(
        "안녕하세요! 말씀해주신 내용을 잘 들었어요. 😊\n\
         \n\
         \"{}\"\n\
         \n\
         지금 상황에서는 특별한 인권 침해 요소가 발견되지 않았어요.\n\
         하지만 언제든지 힘들거나 궁금한 일이 있으면 저에게 말해주세요!\n\
         \n\
         🌟 **함께 생각해볼 점들:**\n\
         - 모든 사람은 존중받을 권리가 있어요\n\
         - 어려운 일이 있으면 어른에게 도움을 요청하세요\n\
         - 여러분의 의견과 감정도 소중해요\n\
         \n\
         더 궁금한 점이 있으면 언제든 물어보세요! 💪\n",
        text
    )
}

/// Rights reminder and escalation guidance appended after all category
/// blocks
const CLOSING_FOOTER: &str = "🌟 **꼭 기억하세요:**\n\
     - 여러분의 권리는 정말 소중해요\n\
     - 힘들 때는 절대 혼자 해결하려 하지 마세요\n\
     - 부모님, 선생님, 또는 믿을 만한 어른에게 도움을 요청하세요\n\
     - 여러분은 보호받을 권리가 있어요\n\
     \n\
     더 궁금한 점이 있으면 언제든 물어보세요! 🤗\n";

fn compose_category_block(
    references: &LegalReferenceStore,
    category: Category,
    severity: Severity,
) -> String {
    let reference = references.lookup(category);

    format!(
        "{} **{}** (심각도: {})\n\
         \n\
         📋 **관련 법률**: {}\n\
         \n\
         📝 **쉬운 설명**: {}\n\
         \n\
         💡 **AI의 조언**: {}\n",
        severity.glyph(),
        category.label(),
        severity.label(),
        reference.citation,
        reference.explanation,
        advice_for(category),
    )
}

/// Category-specific advice; categories without bespoke text fall back to
/// generic trusted-adult guidance
pub fn advice_for(category: Category) -> &'static str {
    match category {
        Category::Discrimination => {
            "모든 사람은 다르지만 똑같이 소중해요. 차별하거나 차별받는 상황이 있다면 즉시 \
             어른에게 알려주세요."
        }
        Category::FacilityAccess => {
            "불편한 시설이 있다면 학교나 관리사무소에 개선을 요청할 수 있어요. 모든 사람이 \
             편리하게 이용할 수 있어야 해요."
        }
        Category::HousingEnvironment => {
            "안전하고 즐겁게 놀 수 있는 공간이 필요해요. 어른들에게 놀이터나 안전한 놀이 \
             공간을 만들어달라고 요청해보세요."
        }
        _ => {
            "이런 상황에서는 혼자 해결하려 하지 말고 믿을 만한 어른에게 도움을 요청하는 것이 \
             가장 중요해요."
        }
    }
}

/// Distinct categories in first-occurrence order, each paired with the
/// severity of its *first* finding in the sequence.
///
/// The first finding's severity is used, not the maximum across the
/// category: a High keyword hit after a Medium one in the same category
/// is reported at Medium.
fn distinct_categories(findings: &[Finding]) -> Vec<(Category, Severity)> {
    let mut distinct: Vec<(Category, Severity)> = Vec::new();

    for finding in findings {
        if !distinct.iter().any(|(c, _)| *c == finding.category) {
            distinct.push((finding.category, finding.severity));
        }
    }

    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn finding(category: Category, label: &str, severity: Severity) -> Finding {
        Finding {
            category,
            label: label.to_string(),
            severity,
            text: "test".to_string(),
            detected_at: Utc::now(),
        }
    }

    fn block_count(reply: &str) -> usize {
        reply.matches("📋 **관련 법률**").count()
    }

    #[test]
    fn test_no_findings_echoes_text_without_category_block() {
        let store = LegalReferenceStore::new();
        let reply = compose(&store, "오늘 급식이 맛있었어요", &[]);

        assert!(reply.contains("오늘 급식이 맛있었어요"));
        assert_eq!(block_count(&reply), 0);
        assert!(!reply.is_empty());
    }

    #[test]
    fn test_one_block_per_distinct_category() {
        let store = LegalReferenceStore::new();
        let findings = vec![
            finding(Category::Discrimination, "따돌림", Severity::Normal),
            finding(Category::Discrimination, "무시", Severity::Normal),
            finding(Category::Violence, "폭력", Severity::Normal),
        ];
        let reply = compose(&store, "input", &findings);

        assert_eq!(block_count(&reply), 2);
    }

    #[test]
    fn test_blocks_appear_in_first_occurrence_order() {
        let store = LegalReferenceStore::new();
        let findings = vec![
            finding(Category::Violence, "폭력", Severity::Normal),
            finding(Category::Discrimination, "따돌림", Severity::Normal),
            finding(Category::Violence, "구타", Severity::Normal),
        ];
        let reply = compose(&store, "input", &findings);

        let violence = reply.find("**폭력**").unwrap();
        let discrimination = reply.find("**차별**").unwrap();
        assert!(violence < discrimination);
    }

    #[test]
    fn test_first_finding_severity_wins() {
        // The first finding's severity is reported for the category even
        // when a later finding carries a higher one
        let store = LegalReferenceStore::new();
        let findings = vec![
            finding(Category::Discrimination, "따돌림", Severity::Normal),
            finding(Category::Discrimination, "인종차별 표현", Severity::High),
        ];
        let reply = compose(&store, "input", &findings);

        assert!(reply.contains("**차별** (심각도: 보통)"));
        assert!(!reply.contains("심각도: 높음"));
    }

    #[test]
    fn test_pattern_first_ordering_reports_high_severity() {
        // In analyzer output the pattern finding comes first, so the
        // discrimination block is reported at High
        let store = LegalReferenceStore::new();
        let findings = vec![
            finding(Category::Discrimination, "인종차별 표현", Severity::High),
            finding(Category::Discrimination, "흑인", Severity::Normal),
        ];
        let reply = compose(&store, "input", &findings);

        assert_eq!(block_count(&reply), 1);
        assert!(reply.contains("🚨 **차별** (심각도: 높음)"));
        assert!(reply.contains("헌법 제11조"));
    }

    #[test]
    fn test_unconfigured_category_renders_fallback_reference() {
        let store = LegalReferenceStore::new();
        let findings = vec![finding(Category::Expression, "검열", Severity::Normal)];
        let reply = compose(&store, "input", &findings);

        assert!(reply.contains("관련 법률 정보 없음"));
        assert!(reply.contains("추가 설명이 필요합니다."));
    }

    #[test]
    fn test_generic_advice_for_categories_without_bespoke_text() {
        let store = LegalReferenceStore::new();
        let findings = vec![finding(Category::Violence, "폭력", Severity::Normal)];
        let reply = compose(&store, "input", &findings);

        assert!(reply.contains("믿을 만한 어른에게 도움을 요청하는 것이"));
    }

    #[test]
    fn test_footer_always_present_with_findings() {
        let store = LegalReferenceStore::new();
        let findings = vec![finding(Category::Rest, "놀이터", Severity::Normal)];
        let reply = compose(&store, "input", &findings);

        assert!(reply.contains("🌟 **꼭 기억하세요:**"));
        assert!(reply.contains("여러분은 보호받을 권리가 있어요"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let store = LegalReferenceStore::new();
        let findings = vec![
            finding(Category::Health, "병원", Severity::Normal),
            finding(Category::Education, "학교", Severity::Normal),
        ];

        let first = compose(&store, "input", &findings);
        let second = compose(&store, "input", &findings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_categories_stable_dedup() {
        let findings = vec![
            finding(Category::Health, "병원", Severity::Medium),
            finding(Category::Education, "학교", Severity::Normal),
            finding(Category::Health, "치료", Severity::High),
        ];

        let distinct = distinct_categories(&findings);
        assert_eq!(
            distinct,
            vec![
                (Category::Health, Severity::Medium),
                (Category::Education, Severity::Normal),
            ]
        );
    }
}
