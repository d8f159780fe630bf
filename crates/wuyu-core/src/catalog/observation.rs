//! Observation points used for comprehensive quality evaluation.

use serde::Serialize;

use super::Category;

/// A single rubric item. Activities and templates reference these by id.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationPoint {
    pub id: &'static str,
    pub category: Category,
    pub subcategory: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn point(
    id: &'static str,
    category: Category,
    subcategory: &'static str,
    name: &'static str,
    description: &'static str,
) -> ObservationPoint {
    ObservationPoint {
        id,
        category,
        subcategory,
        name,
        description,
    }
}

static OBSERVATION_POINTS: [ObservationPoint; 15] = [
    point(
        "M01",
        Category::MoralEducation,
        "理想信念",
        "爱国情怀",
        "参与升旗、纪念日等活动时表现出的认同感与责任感",
    ),
    point(
        "M02",
        Category::MoralEducation,
        "社会责任",
        "诚实守信",
        "在集体活动中遵守约定、如实反馈",
    ),
    point(
        "M03",
        Category::MoralEducation,
        "行为习惯",
        "文明礼仪",
        "尊重他人，遵守公共秩序",
    ),
    point(
        "A01",
        Category::AcademicDevelopment,
        "学习习惯",
        "自主学习",
        "能够主动规划并完成学习任务",
    ),
    point(
        "A02",
        Category::AcademicDevelopment,
        "创新精神",
        "探究能力",
        "提出问题、设计方案并验证结论",
    ),
    point(
        "A03",
        Category::AcademicDevelopment,
        "学业水平",
        "知识运用",
        "将课堂知识迁移到真实情境中解决问题",
    ),
    point(
        "P01",
        Category::PhysicalHealth,
        "体质健康",
        "运动参与",
        "积极参加体育锻炼与校园体育活动",
    ),
    point(
        "P02",
        Category::PhysicalHealth,
        "运动技能",
        "专项技能",
        "掌握至少一项运动技能并坚持练习",
    ),
    point(
        "P03",
        Category::PhysicalHealth,
        "心理健康",
        "情绪管理",
        "面对挑战与挫折时能够调整心态",
    ),
    point(
        "R01",
        Category::ArtisticCultivation,
        "审美感知",
        "艺术欣赏",
        "能够感受并描述艺术作品的美",
    ),
    point(
        "R02",
        Category::ArtisticCultivation,
        "艺术表现",
        "创作表达",
        "运用艺术形式表达情感与想法",
    ),
    point(
        "R03",
        Category::ArtisticCultivation,
        "文化理解",
        "传统文化",
        "了解并传承中华优秀传统文化",
    ),
    point(
        "S01",
        Category::SocialPractice,
        "劳动观念",
        "劳动态度",
        "尊重劳动，主动承担力所能及的劳动",
    ),
    point(
        "S02",
        Category::SocialPractice,
        "劳动技能",
        "生活技能",
        "掌握基本的家务与校园劳动技能",
    ),
    point(
        "S03",
        Category::SocialPractice,
        "社会参与",
        "志愿服务",
        "参与社区服务与社会实践活动",
    ),
];

/// The full catalog in canonical order.
pub fn observation_points() -> &'static [ObservationPoint] {
    &OBSERVATION_POINTS
}

/// Looks up a single observation point by id.
pub fn observation_point(id: &str) -> Option<&'static ObservationPoint> {
    OBSERVATION_POINTS.iter().find(|p| p.id == id)
}

/// Observation points belonging to one category.
pub fn observation_points_by_category(
    category: Category,
) -> impl Iterator<Item = &'static ObservationPoint> {
    OBSERVATION_POINTS
        .iter()
        .filter(move |p| p.category == category)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = observation_points().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), observation_points().len());
    }

    #[test]
    fn test_every_category_is_covered() {
        for category in Category::ALL {
            assert!(observation_points_by_category(category).count() > 0);
        }
    }

    #[test]
    fn test_lookup() {
        let point = observation_point("P01").expect("P01 exists");
        assert_eq!(point.category, Category::PhysicalHealth);
        assert!(observation_point("X99").is_none());
    }
}
