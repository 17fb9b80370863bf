//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、固定のレスポンスを返すだけです。
//! オフライン動作確認やテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echo が返す固定レスポンス本文
const CANNED_TEXT: &str = r#"{"summary":"Echo provider: no analysis was performed.","trend":"stable","advice":"Configure the gemini provider for a real trend analysis.","suggestedAction":"Run again with -p gemini."}"#;

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        prompt: &str,
        response_schema: Option<&Value>,
    ) -> Result<Value, Error> {
        let mut payload = json!({ "prompt": prompt });
        if let Some(schema) = response_schema {
            payload["responseSchema"] = schema.clone();
        }
        Ok(payload)
    }

    fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
        // 実際のAPI呼び出しは行わない
        Ok(json!({ "text": CANNED_TEXT }).to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["text"].as_str().map(|s| s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_provider_name() {
        assert_eq!(EchoProvider::new().name(), "echo");
    }

    #[test]
    fn test_echo_provider_make_request_payload() {
        let payload = EchoProvider::new()
            .make_request_payload("Hello", None)
            .unwrap();
        assert_eq!(payload["prompt"], "Hello");
    }

    #[test]
    fn test_echo_provider_payload_carries_schema() {
        let schema = json!({"type": "OBJECT"});
        let payload = EchoProvider::new()
            .make_request_payload("Hello", Some(&schema))
            .unwrap();
        assert_eq!(payload["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_echo_provider_roundtrip_yields_canned_text() {
        let provider = EchoProvider::new();
        let response = provider.make_http_request("{}").unwrap();
        let text = provider.parse_response_text(&response).unwrap();
        assert_eq!(text.as_deref(), Some(CANNED_TEXT));
    }
}
