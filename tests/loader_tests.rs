//! Loading the dataset from a directory on disk

use std::fs;
use std::path::Path;
use std::sync::Arc;
use swipe_stats::config::Settings;
use swipe_stats::domain::config_types::{AssetPath, DataFormat};
use swipe_stats::domain::explorer::ProfileFilter;
use swipe_stats::domain::interests::Interest;
use swipe_stats::domain::matching::QueryProfile;
use swipe_stats::domain::types::{goals, Age, RelationshipGoal};
use swipe_stats::domain::user::Gender;
use swipe_stats::infrastructure::assets::FileSystemSource;
use swipe_stats::infrastructure::dataset;
use swipe_stats::{Application, Error};
use tempfile::TempDir;

const USERS: &str = r#"[
    {"user_id": 1, "age": 27, "gender": 1, "height": 5.5, "looking_for": "Marriage",
     "children": "No", "education_level": "PhD", "occupation": "Doctor",
     "swiping_history": 30, "usage_frequency": "Daily", "interests": ["hiking", "cooking"]},
    {"user_id": 2, "age": 28, "gender": 1, "height": 5.4, "looking_for": "Marriage",
     "children": "Yes", "education_level": "Master's", "occupation": "Teacher",
     "swiping_history": 70, "usage_frequency": "Weekly", "interests": ["hiking", "travel"]},
    {"user_id": 3, "age": 40, "gender": 0, "height": 6.0, "looking_for": "Friendship",
     "children": "No", "education_level": "Bachelor's", "occupation": "Engineer",
     "swiping_history": 10, "usage_frequency": "Daily", "interests": ["sports"]}
]"#;

const CSV: &str = "user_id,age,gender,height,looking_for,children,education_level,occupation,swiping_history,usage_frequency,cooking,hiking,movies,music,reading,sports,travel\n\
                   1,27,1,5.5,Marriage,No,PhD,Doctor,30,Daily,1,1,0,0,0,0,0\n\
                   2,40,0,6.0,Friendship,No,Bachelor's,Engineer,10,Daily,0,0,0,0,0,1,0\n";

const AGGREGATES: &str = r#"{
    "relationship_goals": {"Marriage": 2, "Friendship": 1},
    "age_distribution": {"23-27": 1, "28-32": 1, "38+": 1}
}"#;

const NETWORK: &str = r#"{
    "nodes": [{"id": "hiking", "value": 2}, {"id": "cooking", "value": 1}],
    "links": [{"source": "cooking", "target": "hiking", "value": 1}]
}"#;

fn write(root: &Path, asset: &str, contents: &str) {
    let path = root.join(asset);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn settings_for(root: &Path) -> Settings {
    let mut settings = Settings::load("test", Path::new("does-not-exist")).unwrap();
    settings.data.root = root.to_path_buf();
    settings
}

#[tokio::test]
async fn test_loads_every_asset_from_disk() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/users.json", USERS);
    write(dir.path(), "data/aggregates.json", AGGREGATES);
    write(dir.path(), "data/interest_network.json", NETWORK);

    let mut app = Application::new(settings_for(dir.path()));
    let loaded = app.load().await.unwrap();
    assert_eq!(loaded.population.len(), 3);
    assert!(loaded.aggregates.is_some());
    assert_eq!(loaded.network.as_ref().unwrap().links.len(), 1);

    let report = app.dashboard().unwrap();
    let precomputed = report.precomputed.unwrap();
    assert_eq!(precomputed.relationship_goals[0].label, "Friendship");
    assert!(precomputed.interest_distribution.is_empty());
    assert_eq!(report.summary.relationship_goals[0].goal.as_ref(), goals::MARRIAGE);

    let json = serde_json::to_value(&app.dashboard().unwrap()).unwrap();
    assert!(json["summary"]["age_distribution"].is_array());
}

#[tokio::test]
async fn test_generator_and_explorer_share_loaded_population() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/users.json", USERS);

    let mut app = Application::new(settings_for(dir.path()));
    app.load().await.unwrap();

    let profile = QueryProfile {
        age: Age::try_new(27).unwrap(),
        gender: Gender::Female,
        interests: [Interest::Hiking].into_iter().collect(),
        goal: RelationshipGoal::try_new(goals::MARRIAGE.to_string()).unwrap(),
    };
    let generated = app
        .generator()
        .generate(app.population().unwrap(), profile.clone())
        .unwrap();
    assert_eq!(generated.report.fuzzy_matches, 2);
    assert_eq!(generated.report.match_percent.into_inner(), 67);
    assert_eq!(
        generated.report.suggested_interests,
        vec![Interest::Cooking, Interest::Travel]
    );
    assert_eq!(app.journey().profile(), Some(profile));

    let mut browser = app.browser(ProfileFilter::Gender(Gender::Female)).unwrap();
    assert_eq!(browser.len(), 2);
    let first = browser.current().unwrap().id;
    browser.swipe(swipe_stats::domain::quiz::SwipeDirection::Left);
    browser.swipe(swipe_stats::domain::quiz::SwipeDirection::Right);
    assert_eq!(browser.current().unwrap().id, first);
}

#[tokio::test]
async fn test_csv_format_is_selected_by_settings() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "dataset_preprocessed.csv", CSV);

    let mut settings = settings_for(dir.path());
    settings.data.format = DataFormat::Csv;
    let source = FileSystemSource::new(dir.path());

    let population = dataset::load_population(&source, &settings.data).await.unwrap();
    assert_eq!(population.len(), 2);
    assert!(population.records()[0].has_interest(Interest::Cooking));
    assert!(population.records()[1].has_interest(Interest::Sports));
}

#[tokio::test]
async fn test_invalid_row_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "data/users.json",
        r#"[{"age": 12, "gender": 0, "height": 5.5, "looking_for": "Marriage", "usage_frequency": "Daily"}]"#,
    );

    let mut app = Application::new(settings_for(dir.path()));
    match app.load().await {
        Err(Error::FetchFailed { asset, message }) => {
            assert_eq!(asset, "data/users.json");
            assert!(message.contains("row 0"), "{message}");
        }
        other => panic!("expected a failed fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_configured_statement_table_replaces_built_in() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "data/users.json", USERS);
    write(
        dir.path(),
        "data/statements.json",
        r#"[{"statement": "Most users swipe daily", "isTrue": false,
             "explanation": "Weekly use is just as common", "category": "usage"}]"#,
    );

    let mut settings = settings_for(dir.path());
    settings.data.statements_path =
        Some(AssetPath::try_new("data/statements.json".to_string()).unwrap());
    let mut app = Application::with_source(settings, Arc::new(FileSystemSource::new(dir.path())));

    let loaded = app.load().await.unwrap();
    assert_eq!(loaded.statements.len(), 1);
    assert!(!loaded.statements.statements()[0].is_true);
}
