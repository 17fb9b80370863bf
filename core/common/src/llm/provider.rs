//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echoなど）はこのトレイトを実装する必要があります。
/// 1 プロンプト → 1 レスポンスの単発呼び出しのみを扱う（会話履歴・ストリーミングは対象外）。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - 自然言語プロンプト
    /// * `response_schema` - 構造化出力を要求する場合の JSON スキーマ（None なら自由テキスト）
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエストJSON
    /// * `Err(Error)` - エラーメッセージ
    fn make_request_payload(
        &self,
        prompt: &str,
        response_schema: Option<&Value>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエストJSON文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信エラー・非2xx
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Arguments
    /// * `response_json` - レスポンスJSON文字列
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - レスポンスが JSON として読めない、または API エラーを含む
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
