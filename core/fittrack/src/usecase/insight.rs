//! AIインサイト生成の境界
//!
//! 記録コレクションを外部生成サービスへのプロンプトに変換し、スキーマ制約付きの
//! JSON レスポンスを AiInsight に解析する。外部サービスは不安定（レート制限・
//! スキーマ逸脱・一時障害）なので、`request_insight` はどんな失敗でも固定の
//! フォールバックに劣化し、呼び出し側にエラーを伝播しない。失敗はログにのみ残す。

use crate::domain::{sorted_by_date, AiInsight, Trend, WeightEntry};
use common::llm::LlmProvider;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 外部呼び出しが失敗した理由
#[derive(Debug, Clone, thiserror::Error)]
pub enum InsightError {
    /// ペイロード生成・HTTP 通信・非2xx・レスポンス読み取りの失敗
    #[error("insight request failed: {0}")]
    Request(String),
    /// レスポンスにテキスト部が無い
    #[error("insight response contained no text part")]
    EmptyResponse,
    /// テキスト部が要求スキーマに適合しない
    #[error("insight response did not match the expected shape: {0}")]
    Malformed(String),
}

impl InsightError {
    /// ログ用の分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::EmptyResponse => "empty_response",
            Self::Malformed(_) => "malformed",
        }
    }
}

/// 記録が 2 件未満のときの固定インサイト。外部呼び出しは行わない。
pub fn insufficient_data_insight() -> AiInsight {
    AiInsight {
        summary: "At least two entries are needed for a trend analysis.".to_string(),
        trend: Trend::Stable,
        advice: "Keep logging your weight regularly to get better advice.".to_string(),
        suggested_action: "Record a new weigh-in tomorrow.".to_string(),
    }
}

/// 外部呼び出し失敗時の固定インサイト（失敗理由の純関数）
pub fn fallback_insight(_reason: &InsightError) -> AiInsight {
    AiInsight {
        summary: "Analysis is not available right now.".to_string(),
        trend: Trend::Stable,
        advice: "Stay consistent with your healthy habits.".to_string(),
        suggested_action: "Retry the analysis later.".to_string(),
    }
}

/// 記録列からプロンプトを組み立てる。日付昇順で `date: weightkg` を並べる。
pub fn build_prompt(entries: &[WeightEntry]) -> String {
    let data_summary = sorted_by_date(entries)
        .iter()
        .map(|e| format!("{}: {}kg", e.date, e.weight))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Analyze the following weight log of one user: [{}]. \
         Provide a trend summary, a motivational note and one suggested next action. \
         Classify the trend as exactly one of up, down or stable. \
         Respond as JSON.",
        data_summary
    )
}

/// 構造化出力スキーマ: 4 フィールドすべて必須、trend は 3 値に制限
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "trend": {
                "type": "STRING",
                "enum": ["up", "down", "stable"]
            },
            "advice": { "type": "STRING" },
            "suggestedAction": { "type": "STRING" }
        },
        "required": ["summary", "trend", "advice", "suggestedAction"]
    })
}

/// 外部生成サービスへの問い合わせクライアント。状態は持たない。
pub struct InsightClient {
    provider: Arc<dyn LlmProvider>,
    logger: Arc<dyn Log>,
}

impl InsightClient {
    pub fn new(provider: Arc<dyn LlmProvider>, logger: Arc<dyn Log>) -> Self {
        Self { provider, logger }
    }

    /// 外部サービスを 1 回だけ呼び、レスポンスを AiInsight として解析する。
    /// リトライはしない。
    pub fn fetch_insight(&self, entries: &[WeightEntry]) -> Result<AiInsight, InsightError> {
        let prompt = build_prompt(entries);
        let schema = response_schema();
        let payload = self
            .provider
            .make_request_payload(&prompt, Some(&schema))
            .map_err(|e| InsightError::Request(e.to_string()))?;
        let response = self
            .provider
            .make_http_request(&payload.to_string())
            .map_err(|e| InsightError::Request(e.to_string()))?;
        let text = self
            .provider
            .parse_response_text(&response)
            .map_err(|e| InsightError::Request(e.to_string()))?
            .ok_or(InsightError::EmptyResponse)?;
        serde_json::from_str::<AiInsight>(text.trim())
            .map_err(|e| InsightError::Malformed(e.to_string()))
    }

    /// 必ず整合した AiInsight を返す。
    ///
    /// * 記録が 2 件未満: 外部呼び出しなしで固定の「データ不足」インサイト
    /// * それ以外: fetch_insight。失敗はログに残してフォールバックに劣化する
    pub fn request_insight(&self, entries: &[WeightEntry]) -> AiInsight {
        if entries.len() < 2 {
            return insufficient_data_insight();
        }
        match self.fetch_insight(entries) {
            Ok(insight) => insight,
            Err(reason) => {
                self.log_failure(&reason);
                fallback_insight(&reason)
            }
        }
    }

    fn log_failure(&self, reason: &InsightError) {
        let mut fields = BTreeMap::new();
        fields.insert("provider".to_string(), json!(self.provider.name()));
        fields.insert("reason".to_string(), json!(reason.kind()));
        fields.insert("detail".to_string(), json!(reason.to_string()));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: "insight fallback".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("insight".to_string()),
            fields: Some(fields),
        });
    }
}
