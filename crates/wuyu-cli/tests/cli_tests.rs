use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color so output is the plain markdown
fn wuyu_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wuyu").expect("Failed to find wuyu binary");
    cmd.arg("--no-color");
    cmd
}

fn ephemeral_cmd() -> Command {
    let mut cmd = wuyu_cmd();
    cmd.arg("--ephemeral");
    cmd
}

#[test]
fn test_cli_help() {
    wuyu_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("activity"))
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("--database-file"));
}

#[test]
fn test_cli_version() {
    wuyu_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wuyu"));
}

#[test]
fn test_cli_lists_activities_without_command() {
    ephemeral_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("## 春季田径运动会 (ID: 1)"))
        .stdout(predicate::str::contains("## 校园农场种植 (ID: 6)"));
}

#[test]
fn test_cli_list_filters_by_category() {
    ephemeral_cmd()
        .args(["activity", "list", "--category", "physical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("春季田径运动会"))
        .stdout(predicate::str::contains("经典诵读展演").not());
}

#[test]
fn test_cli_list_by_query_without_match() {
    ephemeral_cmd()
        .args(["activity", "list", "--query", "no-such-activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities found."));
}

#[test]
fn test_cli_list_rejects_unknown_category() {
    ephemeral_cmd()
        .args(["activity", "list", "--category", "music"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category: music"));
}

#[test]
fn test_cli_show_activity() {
    ephemeral_cmd()
        .args(["activity", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2. 学雷锋志愿服务"))
        .stdout(predicate::str::contains("- Creator: 王老师"));
}

#[test]
fn test_cli_show_missing_activity_fails() {
    ephemeral_cmd()
        .args(["activity", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity with ID 99 not found"));
}

#[test]
fn test_cli_create_activity() {
    ephemeral_cmd()
        .args([
            "activity",
            "create",
            "植树节活动",
            "--description",
            "校园植树",
            "--category",
            "social,moral",
            "--location",
            "后山",
            "--start",
            "2025-03-12T09:00",
            "--end",
            "2025-03-12T11:30",
            "--max-participants",
            "40",
            "--step",
            "checkin,task",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created activity with ID: 7"))
        .stdout(predicate::str::contains("# 7. 植树节活动"))
        .stdout(predicate::str::contains("- Location: 后山"))
        .stdout(predicate::str::contains("植树节活动签到"))
        .stdout(predicate::str::contains("## Process"));
}

#[test]
fn test_cli_create_activity_requires_description() {
    ephemeral_cmd()
        .args(["activity", "create", "无描述活动", "--category", "moral"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create activity"))
        .stderr(predicate::str::contains("description is required"));
}

#[test]
fn test_cli_create_activity_from_template() {
    ephemeral_cmd()
        .args([
            "activity",
            "create",
            "2025 春季运动会",
            "--template",
            "system-sports-day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 7. 2025 春季运动会"))
        .stdout(predicate::str::contains("运动会安全须知"))
        .stdout(predicate::str::contains("参赛意向调查"));
}

#[test]
fn test_cli_create_activity_from_unknown_template_fails() {
    ephemeral_cmd()
        .args(["activity", "create", "Title", "--template", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template with ID nope not found"));
}

#[test]
fn test_cli_update_activity() {
    ephemeral_cmd()
        .args([
            "activity",
            "update",
            "5",
            "--title",
            "科技创新成果展",
            "--location",
            "科技楼",
            "--step",
            "video",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated activity with ID: 5"))
        .stdout(predicate::str::contains("- Title: 科技创新小课题 → 科技创新成果展"))
        .stdout(predicate::str::contains("- Location: 科技楼"))
        .stdout(predicate::str::contains("- Added 1 process step(s)"))
        .stdout(predicate::str::contains("# 5. 科技创新成果展"));
}

#[test]
fn test_cli_update_missing_activity_fails() {
    ephemeral_cmd()
        .args(["activity", "update", "77", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity with ID 77 not found"));
}

#[test]
fn test_cli_delete_activity() {
    ephemeral_cmd()
        .args(["activity", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted activity '经典诵读展演' (ID: 3)"));

    ephemeral_cmd()
        .args(["activity", "delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity with ID 42 not found"));
}

#[test]
fn test_cli_plan_show_places_activities() {
    ephemeral_cmd()
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Semester 2024-2025-2"))
        .stdout(predicate::str::contains("### 阳光体育"))
        .stdout(predicate::str::contains("春季田径运动会 (ID: 1, PLANNED)"));
}

#[test]
fn test_cli_plan_show_other_semester() {
    ephemeral_cmd()
        .args(["--semester", "2024-2025-1", "plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Semester 2024-2025-1"))
        .stdout(predicate::str::contains("秋季德育计划"));

    ephemeral_cmd()
        .args(["--semester", "2030-2031-1", "plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_plan_create_and_delete() {
    ephemeral_cmd()
        .args([
            "plan",
            "create",
            "academic",
            "编程启蒙计划",
            "--direction",
            "编程:图形化编程入门",
            "--direction",
            "数学建模",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved ACADEMIC_DEVELOPMENT plan '编程启蒙计划'",
        ))
        .stdout(predicate::str::contains("### 编程"))
        .stdout(predicate::str::contains("图形化编程入门"))
        .stdout(predicate::str::contains("### 数学建模"));

    ephemeral_cmd()
        .args(["plan", "delete", "physical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted PHYSICAL_HEALTH plan"));

    ephemeral_cmd()
        .args(["--semester", "2030-2031-1", "plan", "delete", "physical"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No PHYSICAL_HEALTH plan"));
}

#[test]
fn test_cli_template_list_and_show() {
    ephemeral_cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: system-sports-day, system)"))
        .stdout(predicate::str::contains("(ID: system-volunteer, system)"));

    ephemeral_cmd()
        .args(["template", "show", "system-sports-day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 校园运动会"))
        .stdout(predicate::str::contains("## Process"));

    ephemeral_cmd()
        .args(["template", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template with ID missing not found"));
}

#[test]
fn test_cli_template_persists_across_runs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wuyu_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "create",
            "主题班会",
            "--description",
            "每周主题班会流程",
            "--category",
            "moral",
            "--step",
            "content,task",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created template with ID: user-"))
        .stdout(predicate::str::contains("# 主题班会"));

    wuyu_cmd()
        .args(["--database-file", db_arg, "template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 主题班会 (ID: user-"))
        .stdout(predicate::str::contains("- **Steps**: 2"));

    wuyu_cmd()
        .args([
            "--database-file",
            db_arg,
            "template",
            "list",
            "--category",
            "physical",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("主题班会").not());
}

#[test]
fn test_cli_ephemeral_templates_are_not_saved() {
    ephemeral_cmd()
        .args([
            "template",
            "create",
            "临时模板",
            "--description",
            "不会保存",
            "--category",
            "artistic",
        ])
        .assert()
        .success();

    ephemeral_cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("临时模板").not());
}

#[test]
fn test_cli_activities_are_not_saved() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wuyu_cmd()
        .args([
            "--database-file",
            db_arg,
            "activity",
            "create",
            "一次性活动",
            "-d",
            "只存在于本次运行",
            "-c",
            "academic",
        ])
        .assert()
        .success();

    wuyu_cmd()
        .args(["--database-file", db_arg, "activity", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("一次性活动").not());
}

#[test]
fn test_cli_mine_uses_user_flag() {
    ephemeral_cmd()
        .args(["--user", "teacher-9", "activity", "list", "--mine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities found."));
}

#[test]
fn test_cli_catalog() {
    ephemeral_cmd()
        .args(["catalog", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`MORAL_EDUCATION` (red)"))
        .stdout(predicate::str::contains("`SOCIAL_PRACTICE` (orange)"))
        .stdout(predicate::str::contains("劳动与社会实践"));

    ephemeral_cmd()
        .args(["catalog", "points", "--category", "moral"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**M01**"))
        .stdout(predicate::str::contains("**P01**").not());
}

#[test]
fn test_cli_ephemeral_conflicts_with_database_file() {
    wuyu_cmd()
        .args(["--ephemeral", "--database-file", "x.db", "activity", "list"])
        .assert()
        .failure();
}
