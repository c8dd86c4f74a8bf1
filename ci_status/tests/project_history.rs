//! Classification of projects as their status history grows.

use chrono::{DateTime, Duration, TimeZone, Utc};

use ci_status::{Color, Project, StatusError, StatusInWords};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
}

/// Green at build 1, red since build 2.
fn socialitis() -> Project {
    let mut project = Project::new(1, "socialitis", true);
    project.record_status(1, true, base_time()).unwrap();
    project
        .record_status(2, false, base_time() + Duration::minutes(5))
        .unwrap();
    project
}

/// Green now, with failures further back.
fn pivots() -> Project {
    let mut project = Project::new(2, "pivots", true);
    project.record_status(1, false, base_time()).unwrap();
    project
        .record_status(2, false, base_time() + Duration::minutes(5))
        .unwrap();
    project
        .record_status(3, true, base_time() + Duration::minutes(10))
        .unwrap();
    project
}

/// Every recorded build failed.
fn never_green() -> Project {
    let mut project = Project::new(3, "never_green", true);
    for i in 0..3 {
        project
            .record_status(i + 1, false, base_time() + Duration::minutes(i * 5))
            .unwrap();
    }
    project
}

#[test]
fn last_green_is_most_recent_success() {
    let project = socialitis();
    let classifier = project.classify();
    assert_eq!(classifier.last_green().map(|s| s.build_id), Some(1));
    assert_eq!(classifier.breaking_build().map(|s| s.build_id), Some(2));
    assert!(classifier.is_red());
}

#[test]
fn red_since_is_stable_while_red_builds_accumulate() {
    let mut project = socialitis();
    let red_since = project.classify().red_since();
    assert_eq!(red_since, Some(base_time() + Duration::minutes(5)));

    for i in 0..2 {
        project
            .record_status(3 + i, false, base_time() + Duration::minutes(10 + i * 5))
            .unwrap();
    }

    let classifier = project.classify();
    assert_eq!(classifier.red_since(), red_since);
    assert_eq!(classifier.red_build_count(), 3);
}

#[test]
fn red_build_count_grows_with_each_failure() {
    let mut project = socialitis();
    assert_eq!(project.classify().red_build_count(), 1);

    project
        .record_status(100, false, base_time() + Duration::hours(1))
        .unwrap();
    assert_eq!(project.classify().red_build_count(), 2);
}

#[test]
fn green_project_is_not_red_since_anything() {
    let project = pivots();
    let classifier = project.classify();
    assert!(classifier.is_green());
    assert_eq!(classifier.color(), Color::Green);
    assert_eq!(classifier.last_green().map(|s| s.build_id), Some(3));
    assert!(classifier.breaking_build().is_none());
    assert_eq!(classifier.red_since(), None);
    assert_eq!(classifier.red_build_count(), 0);
}

#[test]
fn never_green_project_is_red_since_first_status() {
    let project = never_green();
    let classifier = project.classify();
    assert!(classifier.last_green().is_none());
    assert_eq!(classifier.breaking_build().map(|s| s.build_id), Some(1));
    assert_eq!(classifier.red_since(), Some(base_time()));
    assert_eq!(classifier.red_build_count(), project.statuses.len());
}

#[test]
fn project_without_statuses() {
    let project = Project::new(4, "fresh", true);
    let classifier = project.classify();
    assert!(classifier.is_yellow());
    assert_eq!(classifier.status_in_words(), StatusInWords::Indeterminate);
    assert_eq!(classifier.red_since(), None);
    assert_eq!(classifier.red_build_count(), 0);

    let offline = Project::new(5, "fresh-offline", false);
    let classifier = offline.classify();
    assert!(!classifier.is_yellow());
    assert_eq!(classifier.status_in_words(), StatusInWords::Offline);
}

#[test]
fn going_offline_clears_the_light() {
    let mut project = never_green();
    project.online = false;
    let classifier = project.classify();
    assert_eq!(classifier.color(), Color::White);
    assert!(!classifier.is_red());
    assert_eq!(classifier.red_build_count(), 0);
}

#[test]
fn recovering_resets_the_breaking_build() {
    let mut project = never_green();
    project.record_status(4, true, base_time() + Duration::hours(1)).unwrap();
    project.record_status(5, false, base_time() + Duration::hours(2)).unwrap();

    let classifier = project.classify();
    assert_eq!(classifier.last_green().map(|s| s.build_id), Some(4));
    assert_eq!(classifier.breaking_build().map(|s| s.build_id), Some(5));
    assert_eq!(classifier.red_build_count(), 1);
}

#[test]
fn generic_project_has_no_status_url_hook() {
    let project = Project::new(6, "generic", true);
    assert!(matches!(
        project.build_status_url(),
        Err(StatusError::NotImplemented { .. })
    ));
}

#[test]
fn project_snapshot_deserializes() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": 9,
            "name": "api",
            "online": true,
            "source": {"type": "jenkins", "base_url": "https://jenkins", "build_name": "api"},
            "statuses": [
                {"id": 1, "build_id": 10, "success": true, "published_at": "2026-10-01T09:00:00Z"},
                {"id": 2, "build_id": 11, "success": false, "published_at": "2026-10-01T09:05:00Z"}
            ]
        }"#,
    )
    .unwrap();

    let classifier = project.classify();
    assert!(classifier.is_red());
    assert_eq!(classifier.breaking_build().map(|s| s.build_id), Some(11));
    assert_eq!(
        project.build_status_url().unwrap(),
        "https://jenkins/job/api/rssAll"
    );
}
