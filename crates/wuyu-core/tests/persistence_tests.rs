mod common;

use tempfile::{NamedTempFile, TempDir};
use wuyu_core::{
    catalog::Category,
    models::{StepKind, TemplateData},
    persistence::USER_TEMPLATES_KEY,
    Database, NewTemplate, Persistence, StepList,
};

fn sample_template(name: &str) -> NewTemplate {
    let mut process_steps = StepList::new();
    process_steps.add_step(StepKind::Content, None);
    process_steps.add_step(StepKind::Checkin, Some("Clean-up Day"));
    process_steps.add_step(StepKind::Task, None);

    NewTemplate {
        name: name.to_string(),
        description: "Tidy the school garden".to_string(),
        categories: vec![Category::SocialPractice],
        cover_image: None,
        created_by: "teacher-1".to_string(),
        template_data: TemplateData {
            title: "Clean-up Day".to_string(),
            location: "School garden".to_string(),
            max_participants: 40,
            observation_points: vec!["S01".to_string()],
            process_steps,
            ..Default::default()
        },
    }
}

#[test]
fn test_database_initialization() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    assert_eq!(db.load(USER_TEMPLATES_KEY).unwrap(), None);
}

#[test]
fn test_reopening_database_keeps_values() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let db = Database::new(temp_file.path()).unwrap();
        db.save("answer", b"42").unwrap();
    }
    let db = Database::new(temp_file.path()).unwrap();
    assert_eq!(db.load("answer").unwrap(), Some(b"42".to_vec()));
}

#[test]
fn test_template_round_trip_through_sqlite() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("templates.db");

    let (id, expected_data) = {
        let mut store = common::open_store(&db_path);
        let id = store
            .add_new_template(sample_template("Garden Day"))
            .expect("template id");
        let data = store.get_template_by_id(&id).unwrap().template_data;
        (id, data)
    };

    let store = common::open_store(&db_path);
    let template = store
        .get_template_by_id(&id)
        .expect("template survives reopening");
    assert_eq!(template.name, "Garden Day");
    assert_eq!(template.template_data, expected_data);
    assert_eq!(template.template_data.process_steps.len(), 3);
    assert_eq!(
        template.template_data.process_steps[1].title,
        "Clean-up Day签到"
    );

    // System templates are never written out.
    let db = Database::new(&db_path).unwrap();
    let raw = db.load(USER_TEMPLATES_KEY).unwrap().unwrap();
    let persisted: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(persisted.as_array().unwrap().len(), 1);
    assert_eq!(persisted[0]["templateData"]["maxParticipants"], 40);
}

#[test]
fn test_templates_accumulate_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("templates.db");

    let first = common::open_store(&db_path)
        .add_new_template(sample_template("First"))
        .unwrap();
    let second = common::open_store(&db_path)
        .add_new_template(sample_template("Second"))
        .unwrap();
    assert_ne!(first, second);

    let store = common::open_store(&db_path);
    let names: Vec<String> = store
        .get_templates_by_category(Category::SocialPractice)
        .into_iter()
        .filter(|t| !t.is_system)
        .map(|t| t.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"First".to_string()));
    assert!(names.contains(&"Second".to_string()));
}

#[test]
fn test_builder_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("deeper").join("wuyu.db");
    let _store = common::open_store(&db_path);
    assert!(db_path.exists());
}

#[test]
fn test_activities_are_not_persisted() {
    let (temp_dir, mut store) = common::create_test_store();
    let before = store.activities().len();
    assert!(store.delete_activity("1"));

    let reopened = common::open_store(&temp_dir.path().join("test.db"));
    assert_eq!(reopened.activities().len(), before);
}
