mod common;

use wuyu_core::{
    catalog::{ActivityStatus, Category, PlanItemStatus},
    models::{ActivityFilter, Direction, StepKind, StepPayload},
    steps::MoveDirection,
    wizard::{Author, DraftAction, Phase, SubmitState, Wizard},
    NewPlan, WuyuError,
};

fn author() -> Author {
    Author::new("teacher-9", "Mr. Chen")
}

#[test]
fn test_full_activity_workflow() {
    let (_temp_dir, mut store) = common::create_test_store();
    let before = store.activities().len();

    let mut wizard = Wizard::new_activity(author());
    wizard.dispatch(DraftAction::SetTitle("Spring Festival Run".to_string()));
    wizard.dispatch(DraftAction::SetDescription("A 3km run around campus".to_string()));
    wizard.dispatch(DraftAction::ToggleCategory(Category::PhysicalHealth));
    wizard.dispatch(DraftAction::SetDirection("心理健康".to_string()));

    assert!(wizard.next());
    assert_eq!(wizard.current_phase(), Phase::ActivityProcess);

    wizard.add_step(StepKind::Checkin);
    wizard.commit_step().unwrap();
    wizard.add_step(StepKind::Questionnaire);
    if let Some(draft) = wizard.step_draft_mut() {
        if let StepPayload::Questionnaire(questionnaire) = draft.payload_mut() {
            questionnaire.questions.push(Default::default());
        }
    }
    // A choice question without options cannot be committed.
    assert!(wizard.commit_step().unwrap_err().is_validation());
    assert!(wizard.cancel_step());

    assert!(wizard.next());
    let outcome = wizard.submit(&mut store).unwrap();
    assert!(matches!(wizard.submit_state(), SubmitState::Succeeded(_)));

    assert_eq!(store.activities().len(), before + 1);
    let activity = store.get_activity_by_id(&outcome.id).unwrap();
    assert_eq!(activity.status, ActivityStatus::Upcoming);
    assert_eq!(activity.participants, 0);
    assert_eq!(activity.process_steps.len(), 1);
    assert_eq!(activity.process_steps[0].title, "Spring Festival Run签到");

    let plans = store.get_plans_with_actual_activities(store.current_semester());
    let physical = plans
        .iter()
        .find(|p| p.category == Category::PhysicalHealth)
        .unwrap();
    let refs = &physical.direction("心理健康").unwrap().activities;
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id, outcome.id);
    assert_eq!(refs[0].status, PlanItemStatus::Planned);

    let mine = store.filter_activities(&ActivityFilter {
        created_by: Some("teacher-9".to_string()),
        ..Default::default()
    });
    assert_eq!(mine.len(), 1);
}

#[test]
fn test_template_instantiation_workflow() {
    let (_temp_dir, mut store) = common::create_test_store();

    let mut wizard = Wizard::new_activity(author());
    wizard.use_template(&store, "system-sports-day").unwrap();
    wizard.dispatch(DraftAction::SetTitle("Autumn Sports Day".to_string()));

    let steps: Vec<String> = wizard
        .draft()
        .process_steps
        .iter()
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(steps.len(), 5);
    assert!(wizard.move_step(&steps[4], MoveDirection::Up));
    assert!(wizard.delete_step(&steps[0]));

    let outcome = wizard.submit(&mut store).unwrap();
    let activity = store.get_activity_by_id(&outcome.id).unwrap();
    let kinds: Vec<StepKind> = activity.process_steps.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Checkin,
            StepKind::Video,
            StepKind::Task,
            StepKind::Questionnaire
        ]
    );
    assert!(activity.process_steps.is_normalized());

    let template = store.get_template_by_id("system-sports-day").unwrap();
    assert_eq!(template.template_data.process_steps.len(), 5);
}

#[test]
fn test_save_as_template_then_reuse() {
    let (temp_dir, mut store) = common::create_test_store();

    let mut template_wizard = Wizard::new_template(author());
    template_wizard.dispatch(DraftAction::SetTitle("Reading Week".to_string()));
    template_wizard.dispatch(DraftAction::SetDescription("Class reading circle".to_string()));
    template_wizard.dispatch(DraftAction::ToggleCategory(Category::ArtisticCultivation));
    template_wizard.add_step(StepKind::Content);
    template_wizard.commit_step().unwrap();
    assert!(template_wizard.jump_to(Phase::Preview));
    let template_id = template_wizard.submit(&mut store).unwrap().id;

    let mut reopened = common::open_store(&temp_dir.path().join("test.db"));
    let mut wizard = Wizard::new_activity(author());
    wizard.use_template(&reopened, &template_id).unwrap();
    assert_eq!(wizard.draft().title, "Reading Week");
    assert_eq!(wizard.draft().categories, vec![Category::ArtisticCultivation]);

    let id = wizard.submit(&mut reopened).unwrap().id;
    assert_eq!(reopened.get_activity_by_id(&id).unwrap().process_steps.len(), 1);
}

#[test]
fn test_plan_management() {
    let (_temp_dir, mut store) = common::create_test_store();

    assert!(store.add_new_plan(NewPlan {
        semester: Some("2025-2026-1".to_string()),
        category: Category::MoralEducation,
        title: "Autumn moral education".to_string(),
        directions: vec![Direction::new("文明礼仪", "Courtesy campaign")],
    }));
    assert_eq!(
        store.semesters(),
        vec!["2024-2025-1", "2024-2025-2", "2025-2026-1"]
    );

    let plans = store.get_plans_with_actual_activities("2025-2026-1");
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].activity_count(), 0);

    assert!(store.delete_plan("2025-2026-1", Category::MoralEducation));
    assert!(store.get_plans("2025-2026-1").is_empty());
}

#[test]
fn test_edit_workflow_rejects_vanished_activity() {
    let (_temp_dir, mut store) = common::create_test_store();
    let mut wizard = Wizard::edit_activity(&store, "3", author());
    wizard.dispatch(DraftAction::SetLocation("Main hall".to_string()));

    assert!(store.delete_activity("3"));
    assert!(matches!(
        wizard.submit(&mut store),
        Err(WuyuError::ActivityNotFound { .. })
    ));
    assert_eq!(wizard.draft().location, "Main hall");
}
