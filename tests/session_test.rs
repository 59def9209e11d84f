//! Session lifecycle tests

use race_tracker::config::DashboardConfig;
use race_tracker::form::RaceForm;
use race_tracker::session::Session;
use race_tracker::view::Dashboard;

fn submission(participant: &str, race: &str, distance: f64, position: i64) -> RaceForm {
    RaceForm {
        race_date: Some("2024-05-01".to_string()),
        race_name: race.to_string(),
        participant_name: participant.to_string(),
        age_category: "Teen (13-16)".to_string(),
        distance,
        completion_time: "00:45:00".to_string(),
        position,
    }
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = Session::new();
    let second = Session::new();

    first.submit(submission("Amy", "Spring Sprint", 12.5, 2)).unwrap();

    assert_eq!(first.store().len(), 1);
    assert!(second.store().is_empty());
    assert!(second.render().is_placeholder());
}

#[test]
fn test_render_after_each_submission() {
    let mut session = Session::new();
    assert!(session.render().is_placeholder());

    session.submit(submission("Amy", "Spring Sprint", 12.5, 2)).unwrap();
    session.submit(submission("Bea", "Spring Sprint", 12.5, 1)).unwrap();

    let page = session.render();
    let view = page.view().unwrap();
    assert_eq!(view.metrics.participants, 2);
    assert_eq!(view.metrics.races, 1);
    assert_eq!(view.table.rows[0].participant, "Bea");
}

#[test]
fn test_custom_config_flows_through() {
    let config = DashboardConfig::builder()
        .page_title("Club Championship")
        .placeholder_message("Nothing yet")
        .success_message("Saved")
        .build()
        .unwrap();
    let mut session = Session::with_config(config);

    assert_eq!(
        session.render(),
        Dashboard::Placeholder {
            message: "Nothing yet".to_string()
        }
    );
    assert_eq!(session.submit(submission("Amy", "Loop", 8.0, 1)).unwrap(), "Saved");
    assert_eq!(session.render().view().unwrap().page_title, "Club Championship");
}

#[test]
fn test_invalid_submission_is_not_recorded() {
    let mut session = Session::new();
    let bad = RaceForm {
        race_date: Some("yesterday".to_string()),
        ..submission("Amy", "Loop", 8.0, 1)
    };

    assert!(session.submit(bad).is_err());
    assert!(session.render().is_placeholder());
}
