use super::*;
use crate::state::test_helpers;

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn tokens_are_unique() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn display_name_comes_from_local_part() {
    assert_eq!(name_from_email("jo.anne_smith@example.com"), "jo anne smith");
    assert_eq!(name_from_email("solo@example.com"), "solo");
}

#[tokio::test]
async fn create_validate_delete_round_trip() {
    let state = test_helpers::test_app_state();
    let (token, created) = create_session(&state, "ana@example.com").await;

    let user = validate_session(&state, &token).await.unwrap();
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.display_name, "ana");
    assert_eq!(user.id, created.id);

    // Session creation seeds a dashboard.
    assert!(state.dashboards.read().await.contains_key(&token));

    delete_session(&state, &token).await;
    assert!(validate_session(&state, &token).await.is_none());
    assert!(!state.dashboards.read().await.contains_key(&token));
}

#[tokio::test]
async fn unknown_token_does_not_validate() {
    let state = test_helpers::test_app_state();
    assert!(validate_session(&state, "deadbeef").await.is_none());
}
