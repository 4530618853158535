//! Rights-category taxonomy
//!
//! The nine categories are a closed set: detection rules, legal references
//! and aggregate reports all key off this enum, so adding or removing a
//! category is a compile-time change, never a runtime event. The Korean
//! labels are user-visible and serve as external lookup keys; they must
//! not be renamed.

use serde::{Deserialize, Serialize};

/// One of the nine rights domains recognized by the detection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "차별")]
    Discrimination,
    #[serde(rename = "폭력")]
    Violence,
    #[serde(rename = "사생활 침해")]
    Privacy,
    #[serde(rename = "교육권")]
    Education,
    #[serde(rename = "표현의 자유")]
    Expression,
    #[serde(rename = "건강권")]
    Health,
    #[serde(rename = "휴식권")]
    Rest,
    #[serde(rename = "편의시설 접근권")]
    FacilityAccess,
    #[serde(rename = "주거환경권")]
    HousingEnvironment,
}

impl Category {
    /// All categories, in catalog declaration order.
    ///
    /// Keyword rules are evaluated in this order, so it is part of the
    /// detection contract, not a presentation choice.
    pub const ALL: [Category; 9] = [
        Category::Discrimination,
        Category::Violence,
        Category::Privacy,
        Category::Education,
        Category::Expression,
        Category::Health,
        Category::Rest,
        Category::FacilityAccess,
        Category::HousingEnvironment,
    ];

    /// User-visible Korean label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Discrimination => "차별",
            Category::Violence => "폭력",
            Category::Privacy => "사생활 침해",
            Category::Education => "교육권",
            Category::Expression => "표현의 자유",
            Category::Health => "건강권",
            Category::Rest => "휴식권",
            Category::FacilityAccess => "편의시설 접근권",
            Category::HousingEnvironment => "주거환경권",
        }
    }

    /// One-line plain-language description of the rights domain
    pub fn description(&self) -> &'static str {
        match self {
            Category::Discrimination => "외모, 피부색, 장애, 가정환경 등으로 다르게 대우받는 것",
            Category::Violence => "때리기, 밀치기 등 몸을 다치게 하거나 마음을 아프게 하는 행동",
            Category::Privacy => "허락 없이 개인적인 것을 보거나 비밀을 퍼뜨리는 것",
            Category::Education => "공부할 권리가 침해되는 상황",
            Category::Expression => "자신의 생각이나 의견을 말할 권리가 제한되는 것",
            Category::Health => "건강하게 살 권리가 침해되는 상황",
            Category::Rest => "놀이와 휴식할 권리가 침해되는 것",
            Category::FacilityAccess => "키나 장애로 인해 시설을 이용하기 어려운 상황",
            Category::HousingEnvironment => "안전하고 건강한 환경에서 살 권리가 침해되는 것",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
