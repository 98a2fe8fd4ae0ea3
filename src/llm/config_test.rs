use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_only_key_is_set() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    assert!((cfg.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn missing_key_names_the_variable() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    match err {
        LlmError::MissingApiKey { var } => assert_eq!(var, "GEMINI_API_KEY"),
        other => panic!("expected MissingApiKey, got {other:?}"),
    }
}

#[test]
fn api_key_env_indirection() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "MY_KEY"),
        ("MY_KEY", "indirect-secret"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "indirect-secret");
}

#[test]
fn overrides_are_applied_and_base_url_is_trimmed() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "k"),
        ("LLM_MODEL", "gemini-2.5-pro"),
        ("LLM_BASE_URL", "https://example.test/v1beta/"),
        ("LLM_MAX_OUTPUT_TOKENS", "256"),
        ("LLM_TEMPERATURE", "0.25"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.base_url, "https://example.test/v1beta");
    assert_eq!(cfg.max_output_tokens, 256);
    assert!((cfg.temperature - 0.25).abs() < f32::EPSILON);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn malformed_numeric_value_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[
        ("GEMINI_API_KEY", "k"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
}
