use crate::Roles;

#[test]
fn given_default_roles_then_user_is_present() {
    let roles = Roles::default();

    assert!(roles.contains("user"));
    assert_eq!(roles.as_slice().len(), 1);
}

#[test]
fn given_existing_role_when_add_then_not_duplicated() {
    let mut roles = Roles::default();
    roles.add("user");
    roles.add("admin");

    assert_eq!(roles.as_slice(), ["user", "admin"]);
}

#[test]
fn when_serialized_then_plain_string_array() {
    let roles = Roles::default();

    let json = serde_json::to_string(&roles).unwrap();
    assert_eq!(json, r#"["user"]"#);
}
