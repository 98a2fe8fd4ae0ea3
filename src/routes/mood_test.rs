use super::*;

#[test]
fn mood_request_deserializes_lowercase() {
    let req: MoodRequest = serde_json::from_str(r#"{"mood":"anxious"}"#).unwrap();
    assert_eq!(req.mood, Mood::Anxious);
}

#[test]
fn mood_request_rejects_unknown_mood() {
    assert!(serde_json::from_str::<MoodRequest>(r#"{"mood":"ecstatic"}"#).is_err());
}

#[test]
fn mood_request_rejects_capitalized_mood() {
    assert!(serde_json::from_str::<MoodRequest>(r#"{"mood":"Happy"}"#).is_err());
}
