//! テスト用: 固定の挙動を返す LlmProvider 実装

#[cfg(test)]
mod stub {
    use common::error::Error;
    use common::llm::LlmProvider;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 外部呼び出しをシミュレートする挙動
    pub enum StubBehavior {
        /// レスポンス本文として text を返す
        Text(String),
        /// HTTP エラーを返す
        HttpError,
        /// テキスト部の無いレスポンスを返す
        Empty,
    }

    /// テスト用: 呼び出し回数と最後のプロンプトを記録する LlmProvider
    pub struct StubProvider {
        behavior: StubBehavior,
        http_calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubProvider {
        pub fn new(behavior: StubBehavior) -> Self {
            Self {
                behavior,
                http_calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        /// スキーマに適合する固定インサイト本文で作る
        pub fn valid_insight() -> Self {
            Self::new(StubBehavior::Text(
                json!({
                    "summary": "Your weight is trending down.",
                    "trend": "down",
                    "advice": "Keep up the steady routine.",
                    "suggestedAction": "Weigh in again in two days."
                })
                .to_string(),
            ))
        }

        /// 外部呼び出し（HTTP）が行われた回数
        pub fn http_calls(&self) -> usize {
            self.http_calls.load(Ordering::SeqCst)
        }

        /// 最後に組み立てられたプロンプト
        pub fn last_prompt(&self) -> Option<String> {
            self.last_prompt.lock().expect("prompt lock").clone()
        }
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn make_request_payload(
            &self,
            prompt: &str,
            response_schema: Option<&Value>,
        ) -> Result<Value, Error> {
            *self.last_prompt.lock().expect("prompt lock") = Some(prompt.to_string());
            let mut payload = json!({ "prompt": prompt });
            if let Some(schema) = response_schema {
                payload["responseSchema"] = schema.clone();
            }
            Ok(payload)
        }

        fn make_http_request(&self, _request_json: &str) -> Result<String, Error> {
            self.http_calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                StubBehavior::Text(text) => Ok(json!({ "text": text }).to_string()),
                StubBehavior::HttpError => Err(Error::http("stub: connection refused")),
                StubBehavior::Empty => Ok(json!({}).to_string()),
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)
                .map_err(|e| Error::json(e.to_string()))?;
            Ok(v["text"].as_str().map(|s| s.to_string()))
        }
    }
}

#[cfg(test)]
pub use stub::{StubBehavior, StubProvider};
