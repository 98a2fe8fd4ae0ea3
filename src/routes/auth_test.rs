use super::*;

#[test]
fn env_bool_unset_is_none() {
    assert_eq!(env_bool("HAVEN_TEST_UNSET_BOOL"), None);
}

#[test]
fn login_request_deserializes() {
    let req: LoginRequest =
        serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
    assert_eq!(req.email, "a@b.c");
    assert_eq!(req.password, "pw");
}

#[test]
fn missing_fields_fail_deserialization() {
    assert!(serde_json::from_str::<LoginRequest>(r#"{"email":"a@b.c"}"#).is_err());
}
