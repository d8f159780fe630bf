#[cfg(test)]
mod model_tests {
    use jiff::civil::date;
    use serde_json::json;

    use crate::{
        catalog::{ActivityStatus, Category},
        models::{
            Activity, ActivityFilter, CheckinStep, ProcessStep, QuestionKind, Role, StepKind,
            StepPayload, Template, TemplateData,
        },
        steps::StepList,
    };

    fn create_test_activity() -> Activity {
        Activity {
            id: "12".to_string(),
            title: "Spring Festival Run".to_string(),
            description: "A 3km fun run around campus".to_string(),
            categories: vec![Category::PhysicalHealth, Category::MoralEducation],
            start_date: Some(date(2025, 4, 18).at(8, 30, 0, 0)),
            end_date: Some(date(2025, 4, 18).at(11, 0, 0, 0)),
            location: "North Playground".to_string(),
            max_participants: 120,
            participants: 40,
            status: ActivityStatus::Ongoing,
            creator: "Ms. Li".to_string(),
            created_by: "teacher-7".to_string(),
            cover_image: None,
            activity_direction: "Track".to_string(),
            activity_plan: "Sports week".to_string(),
            grades: vec!["Grade 7".to_string()],
            classes: vec!["7-1".to_string(), "7-2".to_string()],
            responsible_teacher: "Mr. Zhao".to_string(),
            require_registration: true,
            process_steps: StepList::from(vec![ProcessStep {
                id: "step-1".to_string(),
                title: "Spring Festival Run签到".to_string(),
                order: 0,
                payload: StepPayload::Checkin(CheckinStep {
                    description: "Sign in at the gate".to_string(),
                }),
            }]),
            observation_points: vec!["P01".to_string()],
        }
    }

    #[test]
    fn test_activity_serializes_camel_case() {
        let value = serde_json::to_value(create_test_activity()).unwrap();
        assert_eq!(value["maxParticipants"], json!(120));
        assert_eq!(value["createdBy"], json!("teacher-7"));
        assert_eq!(value["status"], json!("ongoing"));
        assert_eq!(
            value["categories"],
            json!(["PHYSICAL_HEALTH", "MORAL_EDUCATION"])
        );
        assert_eq!(value["startDate"], json!("2025-04-18T08:30:00"));
        assert_eq!(value["processSteps"][0]["payload"]["type"], json!("checkin"));
    }

    #[test]
    fn test_activity_json_round_trip() {
        let activity = create_test_activity();
        let json = serde_json::to_string(&activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }

    #[test]
    fn test_step_payload_is_tagged_by_type() {
        let step: ProcessStep = serde_json::from_value(json!({
            "id": "step-3",
            "title": "Feedback",
            "payload": {
                "type": "questionnaire",
                "title": "Feedback",
                "questions": [
                    { "id": "q1", "kind": "multiple", "title": "Best part?", "options": ["A", "B"] }
                ]
            }
        }))
        .unwrap();

        assert_eq!(step.kind(), StepKind::Questionnaire);
        assert_eq!(step.order, 0);
        let StepPayload::Questionnaire(questionnaire) = &step.payload else {
            panic!("expected questionnaire payload");
        };
        assert_eq!(questionnaire.questions[0].kind, QuestionKind::Multiple);
        assert!(questionnaire.description.is_empty());
    }

    #[test]
    fn test_unknown_step_type_is_rejected() {
        let result: Result<ProcessStep, _> = serde_json::from_value(json!({
            "id": "step-1",
            "title": "Mystery",
            "payload": { "type": "hologram" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_older_template_records_fill_defaults() {
        let template: Template = serde_json::from_value(json!({
            "id": "user-1700000000000-1",
            "name": "Legacy",
            "createdAt": "2023-11-14T22:13:20Z",
            "templateData": { "title": "Legacy title" }
        }))
        .unwrap();

        assert!(!template.is_system);
        assert!(template.categories.is_empty());
        assert_eq!(template.template_data.title, "Legacy title");
        assert_eq!(template.template_data.max_participants, 0);
        assert!(template.template_data.process_steps.is_empty());
        assert_eq!(TemplateData::default().selected_plans.len(), 0);
    }

    #[test]
    fn test_filter_matches_query_case_insensitively() {
        let activity = create_test_activity();

        let by_title = ActivityFilter {
            query: Some("festival".to_string()),
            ..Default::default()
        };
        assert!(by_title.matches(&activity));

        let by_location = ActivityFilter {
            query: Some("PLAYGROUND".to_string()),
            ..Default::default()
        };
        assert!(by_location.matches(&activity));

        let miss = ActivityFilter {
            query: Some("swimming".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&activity));

        let blank = ActivityFilter {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.matches(&activity));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let activity = create_test_activity();

        assert!(ActivityFilter::for_category(Category::MoralEducation).matches(&activity));
        assert!(!ActivityFilter::for_category(Category::SocialPractice).matches(&activity));

        let wrong_status = ActivityFilter {
            category: Some(Category::PhysicalHealth),
            status: Some(ActivityStatus::Completed),
            ..Default::default()
        };
        assert!(!wrong_status.matches(&activity));

        let owner = ActivityFilter {
            created_by: Some("teacher-7".to_string()),
            status: Some(ActivityStatus::Ongoing),
            ..Default::default()
        };
        assert!(owner.matches(&activity));
    }

    #[test]
    fn test_primary_category_and_permissions() {
        let activity = create_test_activity();
        assert_eq!(activity.primary_category(), Some(Category::PhysicalHealth));

        assert!(activity.can_be_managed_by("teacher-7", Role::Teacher));
        assert!(!activity.can_be_managed_by("teacher-8", Role::Teacher));
        assert!(activity.can_be_managed_by("teacher-8", Role::GroupLeader));
        assert!(activity.can_be_managed_by("anyone", Role::Principal));
        assert_eq!("group_leader".parse::<Role>(), Ok(Role::GroupLeader));
    }

    #[test]
    fn test_activity_display() {
        let output = create_test_activity().to_string();
        assert!(output.starts_with("# 12. Spring Festival Run"));
        assert!(output.contains("- Status: ➤ Ongoing"));
        assert!(output.contains("- Schedule: 2025-04-18 08:30 - 11:00"));
        assert!(output.contains("- Participants: 40/120"));
        assert!(output.contains("- Classes: 7-1, 7-2"));
        assert!(output.contains("### 1. Spring Festival Run签到 [签到] (step-1)"));
        assert!(output.contains("Sign in at the gate"));
    }
}
