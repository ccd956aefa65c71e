use portfolio_core::db::open_db_in_memory;
use portfolio_core::{
    builtin_projects, builtin_skills, open_configured_skills, open_configured_view, CatalogError,
    CatalogService, CatalogSource, CatalogSourceConfig, CategoryFilter, JsonCatalog, Project,
    ProjectCategory, ProjectIcon, Skill, SkillCatalog, SkillCategory, SqliteProjectRepository,
    SqliteSkillRepository,
};

#[test]
fn builtin_view_filters_seed_projects() {
    let mut view = open_configured_view(&CatalogSourceConfig::Builtin).unwrap();
    assert_eq!(view.items().len(), 6);

    view.set_filter(CategoryFilter::Iot);
    let titles: Vec<&str> = view.visible_items().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["SmartHome Hub", "PlantMonitor IoT"]);

    view.set_filter(CategoryFilter::Web);
    let ids: Vec<u32> = view.visible_items().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 4, 6]);
}

#[test]
fn json_catalog_round_trips_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let catalog = JsonCatalog::new(&path);
    let projects = builtin_projects();

    catalog.write_projects(&projects).unwrap();
    let view = CatalogService::new(JsonCatalog::new(&path))
        .open_view()
        .unwrap();
    assert_eq!(view.items(), projects.as_slice());
}

#[test]
fn json_catalog_defaults_optional_fields_and_unknown_icon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"[{
            "id": 10,
            "title": "Relay Board",
            "github": "https://github.com/acme/relay",
            "demo": "https://relay.example.com",
            "category": "iot",
            "icon": "satellite"
        }]"#,
    )
    .unwrap();

    let projects = JsonCatalog::new(&path).load_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].icon, ProjectIcon::Code);
    assert!(projects[0].tags.is_empty());
    assert!(!projects[0].featured);
}

#[test]
fn json_catalog_rejects_invalid_link() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "title": "x", "github": "github.com", "demo": "https://d", "category": "web"}]"#,
    )
    .unwrap();

    let err = JsonCatalog::new(&path).load_projects().unwrap_err();
    match err {
        CatalogError::Parse { source, .. } => {
            assert!(source.to_string().contains("github"), "{source}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_catalog_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogService::new(JsonCatalog::new(dir.path().join("absent.json")))
        .open_view()
        .unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn json_catalog_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let first = Project::new(2, "a", ProjectCategory::Web);
    let second = Project::new(2, "b", ProjectCategory::Iot);
    std::fs::write(&path, serde_json::to_string(&vec![first, second]).unwrap()).unwrap();

    let err = JsonCatalog::new(&path).load_projects().unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(2)));

    let err = open_configured_view(&CatalogSourceConfig::Json { path }).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(2)));
}

#[test]
fn sqlite_repository_round_trips_projects_in_position_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let mut projects = builtin_projects();
    projects.reverse();
    repo.replace_projects(&projects).unwrap();

    assert_eq!(repo.count_projects().unwrap(), 6);
    assert_eq!(repo.list_projects().unwrap(), projects);
    assert_eq!(
        repo.get_project(2).unwrap().map(|p| p.title),
        Some("SmartHome Hub".to_string())
    );
    assert!(repo.get_project(42).unwrap().is_none());
}

#[test]
fn sqlite_replace_is_atomic_on_invalid_input() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);
    repo.replace_projects(&builtin_projects()).unwrap();

    let mut bad = Project::new(9, "bad", ProjectCategory::Web);
    bad.github = "ftp://nope".to_string();
    assert!(repo.replace_projects(&[bad]).is_err());
    assert_eq!(repo.count_projects().unwrap(), 6);
}

#[test]
fn sqlite_rows_with_unknown_category_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    conn.execute(
        "INSERT INTO projects (id, position, title, github, demo, category)
         VALUES (1, 0, 'x', 'https://g', 'https://d', 'mobile');",
        [],
    )
    .unwrap();

    let err = SqliteProjectRepository::new(&conn)
        .list_projects()
        .unwrap_err();
    assert!(err.to_string().contains("unknown category"), "{err}");
}

#[test]
fn sqlite_config_source_opens_view_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite3");
    {
        let conn = portfolio_core::db::open_db(&path).unwrap();
        let mut projects = builtin_projects();
        projects.truncate(2);
        SqliteProjectRepository::new(&conn)
            .replace_projects(&projects)
            .unwrap();
    }

    let view = open_configured_view(&CatalogSourceConfig::Sqlite { path }).unwrap();
    let ids: Vec<u32> = view.visible_items().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn sqlite_skills_round_trip_and_group() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSkillRepository::new(&conn);
    let skills = builtin_skills();
    repo.replace_skills(&skills).unwrap();

    let stored = SkillCatalog::new(repo.list_skills().unwrap());
    assert_eq!(stored, SkillCatalog::builtin());
    let iot: Vec<&str> = stored
        .by_category(SkillCategory::Iot)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(
        iot,
        vec![
            "Arduino,ESP32/ESP8266",
            "Raspberry Pi",
            "MQTT",
            "Sensors Integration"
        ]
    );
}

#[test]
fn sqlite_config_source_serves_stored_skills() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite3");
    let stored = vec![
        Skill::new("Rust", 60, SkillCategory::Backend).unwrap(),
        Skill::new("Zigbee", 40, SkillCategory::Iot).unwrap(),
    ];
    {
        let conn = portfolio_core::db::open_db(&path).unwrap();
        SqliteSkillRepository::new(&conn)
            .replace_skills(&stored)
            .unwrap();
    }

    let skills = open_configured_skills(&CatalogSourceConfig::Sqlite { path }).unwrap();
    assert_eq!(skills.skills(), stored.as_slice());
    let groups = skills.groups();
    assert!(groups[0].1.is_empty());
    assert_eq!(groups[3].1[0].name, "Zigbee");
}

#[test]
fn sqlite_config_source_without_skills_uses_builtin_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite3");
    drop(portfolio_core::db::open_db(&path).unwrap());

    let skills = open_configured_skills(&CatalogSourceConfig::Sqlite { path }).unwrap();
    assert_eq!(skills, SkillCatalog::builtin());
    assert_eq!(skills.skills().len(), 20);
}
