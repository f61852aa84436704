use crate::{IdentityRecord, ProfileAttributes, SyncClaims};

fn claims() -> SyncClaims {
    SyncClaims {
        subject: "auth0|abc".to_string(),
        email: "a@x.com".to_string(),
        username: Some("alice".to_string()),
        name: Some("Alice Smith".to_string()),
        picture: Some("https://cdn.example/p.png".to_string()),
    }
}

#[test]
fn given_claims_when_from_claims_then_record_is_linked() {
    let record = IdentityRecord::from_claims(&claims(), "pat-1".to_string());

    assert_eq!(record.auth_subject, "auth0|abc");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.display_name, "alice");
    assert_eq!(record.fhir_patient_id.as_deref(), Some("pat-1"));
    assert!(record.is_linked());
    assert!(record.roles.contains("user"));
    assert_eq!(record.profile.name(), Some("Alice Smith"));
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn given_claims_without_profile_when_from_claims_then_only_email_verified_set() {
    let mut c = claims();
    c.name = None;
    c.picture = None;

    let record = IdentityRecord::from_claims(&c, "pat-1".to_string());

    assert_eq!(record.profile.name(), None);
    assert_eq!(record.profile.picture(), None);
    assert_eq!(
        record.profile.get(ProfileAttributes::EMAIL_VERIFIED),
        Some(&serde_json::json!(true))
    );
}

#[test]
fn given_existing_record_when_apply_claims_then_link_is_untouched() {
    let mut record = IdentityRecord::from_claims(&claims(), "pat-1".to_string());
    let before = record.updated_at;

    let mut newer = claims();
    newer.email = "a2@x.com".to_string();
    newer.username = Some("alice2".to_string());
    record.apply_claims(&newer);

    assert_eq!(record.email, "a2@x.com");
    assert_eq!(record.display_name, "alice2");
    assert_eq!(record.fhir_patient_id.as_deref(), Some("pat-1"));
    assert_eq!(record.auth_subject, "auth0|abc");
    assert!(record.updated_at >= before);
}
