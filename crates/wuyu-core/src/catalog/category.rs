//! The fixed five-way education taxonomy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five education categories.
///
/// Serialized by key (`MORAL_EDUCATION`, ...). The declaration order is the
/// canonical display order and also the map order used for semester plans.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// 德育
    MoralEducation,
    /// 智育
    AcademicDevelopment,
    /// 体育
    PhysicalHealth,
    /// 美育
    ArtisticCultivation,
    /// 劳育 and social practice
    SocialPractice,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::MoralEducation,
        Category::AcademicDevelopment,
        Category::PhysicalHealth,
        Category::ArtisticCultivation,
        Category::SocialPractice,
    ];

    /// Stable key used for serialization and lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Category::MoralEducation => "MORAL_EDUCATION",
            Category::AcademicDevelopment => "ACADEMIC_DEVELOPMENT",
            Category::PhysicalHealth => "PHYSICAL_HEALTH",
            Category::ArtisticCultivation => "ARTISTIC_CULTIVATION",
            Category::SocialPractice => "SOCIAL_PRACTICE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::MoralEducation => "品德发展",
            Category::AcademicDevelopment => "学业发展",
            Category::PhysicalHealth => "身心健康",
            Category::ArtisticCultivation => "审美素养",
            Category::SocialPractice => "劳动与社会实践",
        }
    }

    /// Single-character badge shown next to activity titles.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::MoralEducation => "德",
            Category::AcademicDevelopment => "智",
            Category::PhysicalHealth => "体",
            Category::ArtisticCultivation => "美",
            Category::SocialPractice => "劳",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::MoralEducation => "red",
            Category::AcademicDevelopment => "blue",
            Category::PhysicalHealth => "green",
            Category::ArtisticCultivation => "purple",
            Category::SocialPractice => "orange",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "moral_education" | "moral" => Ok(Category::MoralEducation),
            "academic_development" | "academic" => Ok(Category::AcademicDevelopment),
            "physical_health" | "physical" => Ok(Category::PhysicalHealth),
            "artistic_cultivation" | "artistic" => Ok(Category::ArtisticCultivation),
            "social_practice" | "social" => Ok(Category::SocialPractice),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("physical".parse::<Category>(), Ok(Category::PhysicalHealth));
        assert_eq!("Social-Practice".parse::<Category>(), Ok(Category::SocialPractice));
        assert!("sports".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Category::PhysicalHealth).unwrap();
        assert_eq!(json, "\"PHYSICAL_HEALTH\"");
        let back: Category = serde_json::from_str("\"ARTISTIC_CULTIVATION\"").unwrap();
        assert_eq!(back, Category::ArtisticCultivation);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<_> = Category::ALL.iter().map(Category::glyph).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 5);
    }
}
