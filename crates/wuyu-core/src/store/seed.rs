//! Demo data loaded into freshly built stores.

use std::collections::BTreeMap;

use jiff::{civil::date, Timestamp};

use super::SemesterPlans;
use crate::{
    catalog::{ActivityStatus, Category},
    models::{
        Activity, ActivityRef, Attachment, CategoryPlan, CheckinStep, ContentStep, Direction,
        ProcessStep, Question, QuestionKind, QuestionnaireStep, StepPayload, SubmissionKind,
        TaskStep, Template, TemplateData, VideoStep,
    },
    steps::StepList,
};

struct SeedActivity {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    categories: &'static [Category],
    location: &'static str,
    month: i8,
    day: i8,
    max_participants: u32,
    participants: u32,
    status: ActivityStatus,
    direction: &'static str,
    plan: &'static str,
    points: &'static [&'static str],
}

const SEED_ACTIVITIES: [SeedActivity; 6] = [
    SeedActivity {
        id: "1",
        title: "春季田径运动会",
        description: "全校参与的田径比赛，包含短跑、接力与跳远项目",
        categories: &[Category::PhysicalHealth],
        location: "学校操场",
        month: 4,
        day: 18,
        max_participants: 600,
        participants: 412,
        status: ActivityStatus::Upcoming,
        direction: "阳光体育",
        plan: "体育节",
        points: &["P01", "P02"],
    },
    SeedActivity {
        id: "2",
        title: "学雷锋志愿服务",
        description: "走进社区开展环境清洁与敬老服务",
        categories: &[Category::SocialPractice, Category::MoralEducation],
        location: "阳光社区",
        month: 3,
        day: 5,
        max_participants: 80,
        participants: 80,
        status: ActivityStatus::Completed,
        direction: "志愿服务",
        plan: "学雷锋月",
        points: &["S03", "M02"],
    },
    SeedActivity {
        id: "3",
        title: "经典诵读展演",
        description: "以班级为单位展示古诗词诵读",
        categories: &[Category::ArtisticCultivation],
        location: "报告厅",
        month: 5,
        day: 20,
        max_participants: 300,
        participants: 120,
        status: ActivityStatus::Upcoming,
        direction: "传统文化",
        plan: "读书节",
        points: &["R03", "R02"],
    },
    SeedActivity {
        id: "4",
        title: "升旗仪式暨国旗下讲话",
        description: "每周一升旗仪式与主题讲话",
        categories: &[Category::MoralEducation],
        location: "学校操场",
        month: 3,
        day: 3,
        max_participants: 1200,
        participants: 1100,
        status: ActivityStatus::Ongoing,
        direction: "爱国主义教育",
        plan: "主题升旗",
        points: &["M01", "M03"],
    },
    SeedActivity {
        id: "5",
        title: "科技创新小课题",
        description: "围绕校园生活提出问题并完成探究报告",
        categories: &[Category::AcademicDevelopment],
        location: "科学实验室",
        month: 4,
        day: 8,
        max_participants: 60,
        participants: 32,
        status: ActivityStatus::Ongoing,
        direction: "科创探究",
        plan: "科技节",
        points: &["A02", "A03"],
    },
    SeedActivity {
        id: "6",
        title: "校园农场种植",
        description: "班级认领地块，完成播种、养护与收获",
        categories: &[Category::SocialPractice],
        location: "校园农场",
        month: 3,
        day: 12,
        max_participants: 45,
        participants: 0,
        status: ActivityStatus::Cancelled,
        direction: "劳动实践",
        plan: "劳动周",
        points: &["S01", "S02"],
    },
];

/// Demo activities with ids `1` through `6`.
pub fn activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            let start = date(2025, seed.month, seed.day).at(8, 30, 0, 0);
            let end = date(2025, seed.month, seed.day).at(16, 0, 0, 0);
            Activity {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                categories: seed.categories.to_vec(),
                start_date: Some(start),
                end_date: Some(end),
                location: seed.location.to_string(),
                max_participants: seed.max_participants,
                participants: seed.participants,
                status: seed.status,
                creator: "王老师".to_string(),
                created_by: "teacher-1".to_string(),
                cover_image: None,
                activity_direction: seed.direction.to_string(),
                activity_plan: seed.plan.to_string(),
                grades: vec!["七年级".to_string()],
                classes: Vec::new(),
                responsible_teacher: "王老师".to_string(),
                require_registration: seed.max_participants < 100,
                process_steps: StepList::new(),
                observation_points: seed.points.iter().map(|p| p.to_string()).collect(),
            }
        })
        .collect()
}

fn plan(category: Category, title: &str, directions: &[(&str, &str)]) -> CategoryPlan {
    CategoryPlan {
        category,
        title: title.to_string(),
        directions: directions
            .iter()
            .map(|(name, description)| Direction::new(*name, *description))
            .collect(),
    }
}

/// Plan skeletons for two semesters.
pub fn plans() -> BTreeMap<String, SemesterPlans> {
    let mut autumn = SemesterPlans::new();
    for plan in [
        plan(
            Category::MoralEducation,
            "秋季德育计划",
            &[("爱国主义教育", "国庆主题活动与升旗仪式")],
        ),
        plan(
            Category::PhysicalHealth,
            "秋季体育计划",
            &[("阳光体育", "大课间与体育节")],
        ),
    ] {
        autumn.insert(plan.category, plan);
    }

    let mut spring = SemesterPlans::new();
    for plan in [
        plan(
            Category::MoralEducation,
            "春季德育计划",
            &[
                ("爱国主义教育", "主题升旗与国旗下讲话"),
                ("文明礼仪", "文明班级评比"),
            ],
        ),
        plan(
            Category::AcademicDevelopment,
            "春季学业发展计划",
            &[("科创探究", "科技节与小课题研究")],
        ),
        plan(
            Category::PhysicalHealth,
            "春季体育计划",
            &[("阳光体育", "运动会与大课间"), ("心理健康", "心理健康周")],
        ),
        plan(
            Category::ArtisticCultivation,
            "春季美育计划",
            &[("传统文化", "经典诵读与书法")],
        ),
        plan(
            Category::SocialPractice,
            "春季劳动与社会实践计划",
            &[("志愿服务", "社区服务"), ("劳动实践", "校园农场")],
        ),
    ] {
        spring.insert(plan.category, plan);
    }

    // Stored references are stale by design; the projection rebuilds them.
    if let Some(plan) = spring.get_mut(&Category::PhysicalHealth) {
        plan.directions[0].activities.push(ActivityRef {
            id: "1".to_string(),
            name: "春季田径运动会".to_string(),
            status: Default::default(),
        });
    }

    BTreeMap::from([
        ("2024-2025-1".to_string(), autumn),
        ("2024-2025-2".to_string(), spring),
    ])
}

fn step(id: &str, title: &str, payload: StepPayload) -> ProcessStep {
    ProcessStep {
        id: id.to_string(),
        title: title.to_string(),
        order: 0,
        payload,
    }
}

/// The fixed templates shipped with the application.
pub fn system_templates() -> Vec<Template> {
    let sports_day_steps = StepList::from(vec![
        step(
            "step-1",
            "运动会安全须知",
            StepPayload::Content(ContentStep {
                body: "请穿运动鞋，赛前充分热身，听从裁判指挥。".to_string(),
                images: vec![Attachment::new("跑道示意图.png", "/images/track.png")],
            }),
        ),
        step(
            "step-2",
            "运动会签到",
            StepPayload::Checkin(CheckinStep {
                description: "各班体育委员于 8:00 前在检录处签到".to_string(),
            }),
        ),
        step(
            "step-3",
            "热身操教学",
            StepPayload::Video(VideoStep {
                video: Some(Attachment::new("热身操.mp4", "/videos/warmup.mp4")),
                description: "观看并跟练热身操".to_string(),
            }),
        ),
        step(
            "step-4",
            "参赛意向调查",
            StepPayload::Questionnaire(QuestionnaireStep {
                title: "参赛意向调查".to_string(),
                description: "选择你想参加的项目".to_string(),
                questions: vec![
                    Question {
                        id: "q1".to_string(),
                        kind: QuestionKind::Multiple,
                        title: "你想参加哪些项目？".to_string(),
                        options: vec![
                            "100米".to_string(),
                            "接力".to_string(),
                            "跳远".to_string(),
                        ],
                        placeholder: None,
                    },
                    Question {
                        id: "q2".to_string(),
                        kind: QuestionKind::Text,
                        title: "你有什么建议？".to_string(),
                        options: Vec::new(),
                        placeholder: Some("可选".to_string()),
                    },
                ],
            }),
        ),
        step(
            "step-5",
            "赛后感想",
            StepPayload::Task(TaskStep {
                title: "赛后感想".to_string(),
                submission_kind: SubmissionKind::Text,
                requirements: "不少于 200 字".to_string(),
                images: Vec::new(),
            }),
        ),
    ]);

    let volunteer_steps = StepList::from(vec![
        step(
            "step-1",
            "志愿服务签到",
            StepPayload::Checkin(CheckinStep {
                description: "到达社区后签到".to_string(),
            }),
        ),
        step(
            "step-2",
            "服务记录",
            StepPayload::Task(TaskStep {
                title: "服务记录".to_string(),
                submission_kind: SubmissionKind::Document,
                requirements: "上传服务记录表".to_string(),
                images: Vec::new(),
            }),
        ),
    ]);

    vec![
        Template {
            id: "system-sports-day".to_string(),
            name: "校园运动会".to_string(),
            description: "包含安全须知、签到、热身、报名调查与赛后感想的完整流程".to_string(),
            categories: vec![Category::PhysicalHealth],
            cover_image: Some("/images/sports-day.png".to_string()),
            created_by: "system".to_string(),
            created_at: Timestamp::constant(1_725_148_800, 0),
            template_data: TemplateData {
                title: "校园运动会".to_string(),
                description: "年度田径运动会".to_string(),
                location: "学校操场".to_string(),
                max_participants: 600,
                responsible_teacher: "体育组".to_string(),
                require_registration: true,
                activity_direction: "阳光体育".to_string(),
                observation_points: vec!["P01".to_string(), "P02".to_string()],
                process_steps: sports_day_steps,
                ..Default::default()
            },
            is_system: true,
        },
        Template {
            id: "system-volunteer".to_string(),
            name: "社区志愿服务".to_string(),
            description: "签到与服务记录两步流程".to_string(),
            categories: vec![Category::SocialPractice, Category::MoralEducation],
            cover_image: None,
            created_by: "system".to_string(),
            created_at: Timestamp::constant(1_722_470_400, 0),
            template_data: TemplateData {
                title: "社区志愿服务".to_string(),
                description: "走进社区开展志愿服务".to_string(),
                location: "社区服务中心".to_string(),
                max_participants: 50,
                require_registration: true,
                activity_direction: "志愿服务".to_string(),
                observation_points: vec!["S03".to_string()],
                process_steps: volunteer_steps,
                ..Default::default()
            },
            is_system: true,
        },
    ]
}
