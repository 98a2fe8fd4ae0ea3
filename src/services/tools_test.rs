use super::*;
use crate::state::test_helpers;

#[test]
fn there_are_four_panels_in_display_order() {
    let ids: Vec<ToolId> = panels().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ToolId::Breathing, ToolId::Grounding, ToolId::Affirmations, ToolId::Crisis]);
}

#[test]
fn crisis_panel_lists_hotlines() {
    let crisis = panel(ToolId::Crisis);
    let joined = crisis.lines.join(" ");
    assert!(joined.contains("988"));
    assert!(joined.contains("741741"));
}

#[test]
fn tool_ids_parse_from_path_segments() {
    assert_eq!("breathing".parse(), Ok(ToolId::Breathing));
    assert_eq!("crisis".parse(), Ok(ToolId::Crisis));
    assert!("yoga".parse::<ToolId>().is_err());
}

#[test]
fn tool_id_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ToolId::Grounding).unwrap(), "\"grounding\"");
}

#[tokio::test]
async fn open_and_close_round_trip() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_session(&state).await;

    assert_eq!(tool_state(&state, &token).await.unwrap(), ToolState::default());

    let opened = open_tool(&state, &token, ToolId::Breathing).await.unwrap();
    assert_eq!(opened.active_tool, Some(ToolId::Breathing));
    assert!(opened.modal_open);

    let closed = close_tool(&state, &token).await.unwrap();
    assert_eq!(closed.active_tool, None);
    assert!(!closed.modal_open);
}

#[tokio::test]
async fn opening_a_second_tool_replaces_the_first() {
    let state = test_helpers::test_app_state();
    let token = test_helpers::seed_session(&state).await;

    open_tool(&state, &token, ToolId::Breathing).await.unwrap();
    let switched = open_tool(&state, &token, ToolId::Crisis).await.unwrap();
    assert_eq!(switched.active_tool, Some(ToolId::Crisis));
}
