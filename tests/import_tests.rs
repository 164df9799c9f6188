use pinpeople::config::Config;
use pinpeople::models::DepartmentLevels;
use pinpeople::services::{ImportError, ImportStep};
use pinpeople::state::SharedState;
use std::path::PathBuf;

async fn spawn_state() -> SharedState {
    let mut config = Config::default();
    let db_path =
        std::env::temp_dir().join(format!("pinpeople-import-test-{}.db", uuid::Uuid::new_v4()));
    config.general.database_path = format!("sqlite:{}?mode=rwc", db_path.display());

    SharedState::new(config)
        .await
        .expect("Failed to create shared state")
}

fn header() -> String {
    (0..33).map(|i| format!("col{i}")).collect::<Vec<_>>().join(";")
}

fn row(name: &str, city: &str, area: &str, date: &str) -> String {
    format!(
        "{name};{name}@mail.com;{name}@corp.com;x;analyst;;{city};1 year;female;gen z;\
         Company;Board;Management;Coordination;{area};{date};7;;8;;abc;;10;;4;;5;;6;;7;;"
    )
}

fn write_csv(rows: &[String]) -> PathBuf {
    let path =
        std::env::temp_dir().join(format!("pinpeople-import-{}.csv", uuid::Uuid::new_v4()));
    let mut content = header();
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_import_deduplicates_departments_and_locations() {
    let state = spawn_state().await;
    let path = write_csv(&[
        row("ana", "Recife", "Sales", "20/01/2022"),
        row("bia", "Recife", "Sales", "21/01/2022"),
        row("caio", "Natal", "Sales", "22/01/2022"),
        row("davi", "Natal", "sales", "23/01/2022"),
    ]);

    let summary = state.import_service.import_file(&path).await.unwrap();
    assert_eq!(summary.employees_created, 4);
    assert_eq!(summary.departments_created, 2);
    assert_eq!(summary.locations_created, 2);

    let departments = state.department_service.list_departments().await.unwrap();
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].company_level4, "Sales");
    assert_eq!(departments[1].company_level4, "sales");

    let employees = state
        .store
        .employee_repository()
        .find_all()
        .await
        .unwrap();
    assert_eq!(employees.len(), 4);

    let ana = &employees[0].record;
    assert_eq!(ana.name, "ana");
    assert_eq!(ana.role, None);
    assert_eq!(ana.position_interest, Some(7));
    assert_eq!(ana.learning_development, None);
    assert_eq!(ana.open_enps, None);
    assert_eq!(ana.department_id, employees[1].record.department_id);
    assert_eq!(ana.location_id, employees[1].record.location_id);
    assert_ne!(ana.location_id, employees[2].record.location_id);
    assert_eq!(
        ana.response_date,
        chrono::NaiveDate::from_ymd_opt(2022, 1, 20)
    );

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_reimport_reuses_existing_rows() {
    let state = spawn_state().await;

    let levels = DepartmentLevels::new([
        "Company".to_string(),
        "Board".to_string(),
        "Management".to_string(),
        "Coordination".to_string(),
        "Sales".to_string(),
    ]);
    state
        .department_service
        .create_department(levels)
        .await
        .unwrap();

    let path = write_csv(&[row("ana", "Recife", "Sales", "20/01/2022")]);

    let first = state.import_service.import_file(&path).await.unwrap();
    assert_eq!(first.departments_created, 0);
    assert_eq!(first.locations_created, 1);

    let second = state.import_service.import_file(&path).await.unwrap();
    assert_eq!(second.employees_created, 1);
    assert_eq!(second.departments_created, 0);
    assert_eq!(second.locations_created, 0);

    let departments = state.department_service.list_departments().await.unwrap();
    assert_eq!(departments.len(), 1);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_import_stops_at_bad_date_and_keeps_earlier_rows() {
    let state = spawn_state().await;
    let path = write_csv(&[
        row("ana", "Recife", "Sales", "20/01/2022"),
        row("bia", "Recife", "Sales", "2022-01-21"),
        row("caio", "Recife", "Sales", "22/01/2022"),
    ]);

    let err = state.import_service.import_file(&path).await.unwrap_err();
    match &err {
        ImportError::Record { record, step, .. } => {
            assert_eq!(*record, 2);
            assert_eq!(*step, ImportStep::ParseFields);
        }
        other => panic!("unexpected error: {other}"),
    }

    let employees = state
        .store
        .employee_repository()
        .find_all()
        .await
        .unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].record.name, "ana");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_import_invalidates_listing_on_request() {
    let state = spawn_state().await;

    let before = state
        .employee_service
        .list_employees(pinpeople::domain::Pagination::default())
        .await
        .unwrap();
    let page: serde_json::Value = serde_json::from_slice(&before).unwrap();
    assert_eq!(page["totalCount"], 0);

    let path = write_csv(&[row("ana", "Recife", "Sales", "20/01/2022")]);
    state.import_service.import_file(&path).await.unwrap();
    state.employee_service.invalidate_listing().await;

    // base-key invalidation leaves page keys to expire, so read a fresh page
    let after = state
        .employee_service
        .list_employees(pinpeople::domain::Pagination::new(1, 20))
        .await
        .unwrap();
    let page: serde_json::Value = serde_json::from_slice(&after).unwrap();
    assert_eq!(page["totalCount"], 1);

    std::fs::remove_file(&path).ok();
}
