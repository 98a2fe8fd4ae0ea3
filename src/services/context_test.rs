use super::*;

fn user(text: &str) -> ChatMessage {
    ChatMessage { sender: Sender::User, text: text.into(), silent: false }
}

fn model(text: &str) -> ChatMessage {
    ChatMessage { sender: Sender::Model, text: text.into(), silent: false }
}

fn silent_user(text: &str) -> ChatMessage {
    ChatMessage { sender: Sender::User, text: text.into(), silent: true }
}

#[test]
fn seed_greeting_plus_first_message_strips_leading_model_turn() {
    let log = vec![model("Hello..."), user("I feel stuck.")];
    let turns = assemble_context(&log).unwrap();
    assert_eq!(turns, vec![Turn::user("I feel stuck.")]);
}

#[test]
fn adjacent_same_role_entries_merge_newline_joined() {
    let log = vec![user("A"), user("B"), model("C")];
    let turns = assemble_context(&log).unwrap();
    assert_eq!(turns, vec![Turn::user("A\nB"), Turn::model("C")]);
}

#[test]
fn merge_is_idempotent() {
    let log = vec![user("A"), user("B"), model("C"), model("D"), user("E")];
    let first = assemble_context(&log).unwrap();

    // Feed the output back through as a log; nothing should change.
    let as_log: Vec<ChatMessage> = first
        .iter()
        .map(|t| ChatMessage {
            sender: match t.role {
                TurnRole::User => Sender::User,
                TurnRole::Model => Sender::Model,
            },
            text: t.text.clone(),
            silent: false,
        })
        .collect();
    let second = assemble_context(&as_log).unwrap();
    assert_eq!(first, second);

    // No two adjacent output turns share a role.
    for pair in second.windows(2) {
        assert_ne!(pair[0].role, pair[1].role);
    }
}

#[test]
fn windowing_keeps_only_the_tail_in_order() {
    let mut log = Vec::new();
    for i in 0..30 {
        if i % 2 == 0 {
            log.push(user(&format!("u{i}")));
        } else {
            log.push(model(&format!("m{i}")));
        }
    }
    let turns = assemble_context(&log).unwrap();

    // Entries 0..10 fall outside the window; entry 10 is user-authored
    // so nothing extra is stripped.
    assert_eq!(turns.len(), CONTEXT_WINDOW);
    assert_eq!(turns[0], Turn::user("u10"));
    assert_eq!(turns.last().unwrap(), &Turn::model("m29"));

    // Order within the window is preserved.
    let texts: Vec<&str> = turns.iter().map(|t| t.text.as_str()).collect();
    let mut expected = Vec::new();
    for i in 10..30 {
        expected.push(if i % 2 == 0 { format!("u{i}") } else { format!("m{i}") });
    }
    assert_eq!(texts, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn only_one_leading_model_turn_is_removed() {
    let log = vec![model("a"), model("b"), user("c"), model("d")];
    let turns = assemble_context(&log).unwrap();
    // "a" and "b" merge into one leading model turn, which is dropped whole.
    assert_eq!(turns, vec![Turn::user("c"), Turn::model("d")]);
}

#[test]
fn model_only_log_yields_none() {
    let log = vec![model("Hello...")];
    assert!(assemble_context(&log).is_none());
}

#[test]
fn empty_log_yields_none() {
    assert!(assemble_context(&[]).is_none());
}

#[test]
fn silent_entries_are_model_visible() {
    let log = vec![model("Hi"), silent_user("I'm feeling sad."), user("prompt")];
    let turns = assemble_context(&log).unwrap();
    assert_eq!(turns, vec![Turn::user("I'm feeling sad.\nprompt")]);
}
