use crate::SyncClaims;
use crate::models::sync_claims::email_local_part;

fn claims() -> SyncClaims {
    SyncClaims {
        subject: "auth0|abc".to_string(),
        email: "a@x.com".to_string(),
        username: None,
        name: None,
        picture: None,
    }
}

#[test]
fn given_username_when_display_name_then_username_wins() {
    let mut c = claims();
    c.username = Some("alice".to_string());
    c.name = Some("Alice Smith".to_string());

    assert_eq!(c.display_name(), "alice");
}

#[test]
fn given_no_username_when_display_name_then_falls_back_to_name() {
    let mut c = claims();
    c.name = Some("Alice Smith".to_string());

    assert_eq!(c.display_name(), "Alice Smith");
}

#[test]
fn given_only_email_when_display_name_then_local_part() {
    let c = claims();

    assert_eq!(c.display_name(), "a");
}

#[test]
fn given_empty_username_when_display_name_then_treated_as_absent() {
    let mut c = claims();
    c.username = Some(String::new());
    c.name = Some("Alice Smith".to_string());

    assert_eq!(c.display_name(), "Alice Smith");
}

#[test]
fn given_empty_subject_when_validate_then_error() {
    let mut c = claims();
    c.subject = String::new();

    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("subject"));
}

#[test]
fn given_empty_email_when_validate_then_error() {
    let mut c = claims();
    c.email = String::new();

    assert!(c.validate().is_err());
}

#[test]
fn when_email_local_part_then_splits_at_first_at_sign() {
    assert_eq!(email_local_part("alice@x.com"), "alice");
    assert_eq!(email_local_part("a@b@c"), "a");
    assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
}
