//! Legal reference records per rights category
//!
//! Only discrimination, facility access and housing environment carry
//! configured records; the remaining categories receive a literal, stable
//! fallback so the composer can render a reference block for every
//! category unconditionally. Absence of a record is an expected state,
//! never an error.

use shared_types::{Category, LegalReference};

/// Fallback citation for categories without a configured record
pub const FALLBACK_CITATION: &str = "관련 법률 정보 없음";

/// Fallback explanation for categories without a configured record
pub const FALLBACK_EXPLANATION: &str = "추가 설명이 필요합니다.";

/// Static mapping from category to citation and plain-language explanation
#[derive(Debug, Default)]
pub struct LegalReferenceStore;

impl LegalReferenceStore {
    pub fn new() -> Self {
        Self
    }

    /// Whether a category has a configured record (as opposed to the
    /// fallback)
    pub fn configured(&self, category: Category) -> bool {
        matches!(
            category,
            Category::Discrimination | Category::FacilityAccess | Category::HousingEnvironment
        )
    }

    /// Reference record for a category; total, never absent.
    ///
    /// Reference text is domain content loaded verbatim, not behavior to be
    /// recomputed.
    pub fn lookup(&self, category: Category) -> LegalReference {
        match category {
            Category::Discrimination => LegalReference {
                category,
                citation: "헌법 제11조, 장애인차별금지법, 인종차별철폐협약".to_string(),
                summary: Some("모든 사람은 평등하게 대우받을 권리가 있어요.".to_string()),
                explanation: "피부색, 외모, 장애, 가족의 직업 등으로 친구를 차별하면 안 돼요. \
                              모든 사람은 소중하고 똑같이 존중받아야 해요. 흑인을 동물에 \
                              비유하는 것도 심각한 차별이에요."
                    .to_string(),
            },
            Category::FacilityAccess => LegalReference {
                category,
                citation: "장애인차별금지법, 교육환경보호법, 어린이놀이시설안전관리법".to_string(),
                summary: Some(
                    "모든 사람이 편리하게 이용할 수 있는 시설을 이용할 권리가 있어요."
                        .to_string(),
                ),
                explanation: "어린이 키에 맞는 세면대, 장애인이 이용할 수 있는 화장실 등이 \
                              필요해요. 모든 사람이 불편 없이 이용할 수 있어야 해요."
                    .to_string(),
            },
            Category::HousingEnvironment => LegalReference {
                category,
                citation: "주택법, 어린이놀이시설안전관리법, 도시공원법".to_string(),
                summary: Some("안전하고 건강한 환경에서 살 권리가 있어요.".to_string()),
                explanation: "아파트에는 어린이가 놀 수 있는 놀이터나 공간이 있어야 해요. \
                              안전하고 깨끗한 환경에서 살 권리가 있어요."
                    .to_string(),
            },
            other => LegalReference {
                category: other,
                citation: FALLBACK_CITATION.to_string(),
                summary: None,
                explanation: FALLBACK_EXPLANATION.to_string(),
            },
        }
    }
}
