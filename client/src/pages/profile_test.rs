use chrono::{TimeZone, Utc};

use super::*;

fn identity() -> Identity {
    Identity {
        name: String::new(),
        email: "jane.doe@lib.org".to_owned(),
        role: Role::Admin,
        token: "t".to_owned(),
    }
}

fn record(name: &str) -> UserRecord {
    UserRecord {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: "jane.doe@lib.org".to_owned(),
        raw_role: "ADMIN".to_owned(),
        created_at: Some(Utc.with_ymd_and_hms(2023, 11, 2, 8, 0, 0).unwrap()),
        profile_image: Some("/avatars/u1.png".to_owned()),
    }
}

#[test]
fn backend_record_supplies_name_date_and_image() {
    let view = ProfileView::build(&identity(), Some(&record("Jane D.")));
    assert_eq!(view.name, "Jane D.");
    assert_eq!(view.joined, "2023-11-02");
    assert_eq!(view.image.as_deref(), Some("/avatars/u1.png"));
    assert_eq!(view.role, Role::Admin);
}

#[test]
fn missing_record_falls_back_to_email_name() {
    let view = ProfileView::build(&identity(), None);
    assert_eq!(view.name, "Jane Doe");
    assert_eq!(view.joined, "N/A");
    assert_eq!(view.image, None);
}

#[test]
fn blank_backend_name_falls_back_to_email_name() {
    let view = ProfileView::build(&identity(), Some(&record("")));
    assert_eq!(view.name, "Jane Doe");
}
